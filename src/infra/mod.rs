use crate::{adapters::persistence::PostgresPersistence, infra::config::AppConfig, infra::db::init_db};

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod setup;

pub async fn postgres_persistence(config: &AppConfig) -> Result<PostgresPersistence, error::InfraError> {
    let pool = init_db(config).await?;
    let persistence = PostgresPersistence::new(pool);
    Ok(persistence)
}
