//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! with in-memory mocks for testing HTTP endpoints.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use chrono::{FixedOffset, Offset, Utc};
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::config::AppConfig,
    test_utils::{FailingWaitlistRepo, InMemoryWaitlistRepo},
};

/// Config with fixed values; nothing in it is read from the environment.
pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: SecretString::new("postgres://localhost/waitlist_test".into()),
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        db_max_connections: 1,
        db_acquire_timeout: Duration::from_secs(1),
        display_utc_offset: Some(Utc.fix()),
        log_file: None,
    }
}

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let app_state = TestAppStateBuilder::new()
///     .with_entries(create_test_entries(150))
///     .build();
/// ```
#[derive(Default)]
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    failing_storage: bool,
    display_utc_offset: Option<FixedOffset>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(mut self, entries: Vec<WaitlistEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Every storage call fails with `StorageUnavailable`.
    pub fn with_failing_storage(mut self) -> Self {
        self.failing_storage = true;
        self
    }

    pub fn with_display_offset(mut self, offset: FixedOffset) -> Self {
        self.display_utc_offset = Some(offset);
        self
    }

    pub fn build(self) -> AppState {
        if self.failing_storage {
            let config = self.config();
            return AppState::new(
                config,
                WaitlistUseCases::new(Arc::new(FailingWaitlistRepo)),
            );
        }
        self.build_with_repo().0
    }

    /// Build the state and also return the repo, for asserting on storage access.
    pub fn build_with_repo(self) -> (AppState, Arc<InMemoryWaitlistRepo>) {
        let config = self.config();
        let repo = Arc::new(InMemoryWaitlistRepo::with_entries(self.entries));
        let app_state = AppState::new(
            config,
            WaitlistUseCases::new(repo.clone() as Arc<dyn WaitlistRepo>),
        );
        (app_state, repo)
    }

    fn config(&self) -> AppConfig {
        let mut config = test_config();
        if let Some(offset) = self.display_utc_offset {
            config.display_utc_offset = Some(offset);
        }
        config
    }
}
