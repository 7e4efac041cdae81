//! # Sports Plus DB
//!
//! Connection pool lifecycle for the Sports Plus API.
//!
//! The pool is acquired once before the server starts accepting requests,
//! handed to the application state, and closed after graceful shutdown.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 10)
//! - `DATABASE_ACQUIRE_TIMEOUT`: seconds to wait for a free connection (default: 5)
//!
//! # Example
//!
//! ```ignore
//! use sportsplus_db::{DatabaseConfig, close_db_pool, init_db_pool};
//!
//! let config = DatabaseConfig::from_env()?;
//! let pool = init_db_pool(&config).await?;
//! // ... serve requests ...
//! close_db_pool(pool).await;
//! ```

use std::env;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

pub use sqlx::PgPool;

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DatabaseConfig {
    /// Reads the pool settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`env::VarError`] when `DATABASE_URL` is not set.
    pub fn from_env() -> Result<Self, env::VarError> {
        let url = env::var("DATABASE_URL")?;

        Ok(Self {
            url,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            acquire_timeout: Duration::from_secs(
                env::var("DATABASE_ACQUIRE_TIMEOUT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            ),
        })
    }
}

/// Opens the shared PostgreSQL pool.
///
/// # Errors
///
/// Fails when the database is unreachable or the URL is invalid.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "database pool established"
    );

    Ok(pool)
}

/// Waits for checked-out connections to return, then closes the pool.
pub async fn close_db_pool(pool: PgPool) {
    pool.close().await;
    info!("database pool closed");
}

/// Round-trips a trivial query; used by the health endpoint.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
