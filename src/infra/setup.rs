use crate::{
    adapters::http::app_state::AppState,
    infra::{config::AppConfig, error::InfraError, postgres_persistence},
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let postgres_arc = Arc::new(postgres_persistence(&config).await?);

    let waitlist_repo_arc = postgres_arc.clone() as Arc<dyn WaitlistRepo>;
    let waitlist_use_cases = WaitlistUseCases::new(waitlist_repo_arc);

    Ok(AppState::new(config, waitlist_use_cases))
}

pub fn init_tracing(config: &AppConfig) -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_dashboard=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs), only when LOG_FILE is set
    let json_layer = match &config.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| InfraError::LogFile {
                path: path.clone(),
                source,
            })?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
