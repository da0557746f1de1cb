use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

use crate::infra::{config::AppConfig, error::InfraError};

/// Opens the process-wide pool. Built once in `main` and shared through `AppState`.
pub async fn init_db(config: &AppConfig) -> Result<PgPool, InfraError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect(config.database_url.expose_secret())
        .await
        .map_err(InfraError::DatabaseConnection)?;

    info!(
        max_connections = config.db_max_connections,
        "Connected to database!"
    );
    Ok(pool)
}
