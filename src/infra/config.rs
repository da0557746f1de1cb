use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderValue;
use chrono::FixedOffset;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

pub struct AppConfig {
    pub database_url: SecretString,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub db_max_connections: u32,
    /// How long a request waits for a pooled connection before failing as unavailable.
    pub db_acquire_timeout: Duration,
    /// Offset used to show timestamps as local date and time on the dashboard. `None`
    /// follows the host's offset at render time, so DST changes apply without a restart.
    pub display_utc_offset: Option<FixedOffset>,
    /// Optional path for structured JSON logs, in addition to the console.
    pub log_file: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url: SecretString = SecretString::new(get_env::<String>("DATABASE_URL").into());
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let db_max_connections: u32 = get_env_default("DB_MAX_CONNECTIONS", 5);
        let db_acquire_timeout_secs: u64 = get_env_default("DB_ACQUIRE_TIMEOUT_SECS", 5);
        let display_utc_offset = std::env::var("DISPLAY_UTC_OFFSET_MINUTES")
            .ok()
            .map(|raw| {
                let minutes: i32 = raw
                    .trim()
                    .parse()
                    .expect("DISPLAY_UTC_OFFSET_MINUTES must be a whole number of minutes");
                parse_offset_minutes(minutes)
                    .expect("DISPLAY_UTC_OFFSET_MINUTES must be within -1439..=1439")
            });
        let log_file: Option<String> = std::env::var("LOG_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty());

        Self {
            database_url,
            bind_addr,
            cors_origin,
            db_max_connections,
            db_acquire_timeout: Duration::from_secs(db_acquire_timeout_secs),
            display_utc_offset,
            log_file,
        }
    }
}

fn parse_offset_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
}
