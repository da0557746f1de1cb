use std::sync::Arc;

use chrono::{Local, Offset};

use crate::{
    adapters::dashboard::{DashboardController, RenderOptions},
    infra::config::AppConfig,
    use_cases::waitlist::WaitlistUseCases,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
    pub dashboard: DashboardController,
}

impl AppState {
    pub fn new(config: AppConfig, waitlist_use_cases: WaitlistUseCases) -> Self {
        Self {
            config: Arc::new(config),
            dashboard: DashboardController::new(waitlist_use_cases.clone()),
            waitlist_use_cases: Arc::new(waitlist_use_cases),
        }
    }

    /// Without a configured offset the host's current offset is used, read per render.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            utc_offset: self
                .config
                .display_utc_offset
                .unwrap_or_else(|| Local::now().offset().fix()),
        }
    }
}
