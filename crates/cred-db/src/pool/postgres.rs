//! PostgreSQL pool and schema setup

use std::time::Duration;

use cred_common::{AppConfig, ConfigError, DatabaseConfig};
use sqlx::postgres::{PgPool, PgPoolOptions};

const SCHEMA: &str = include_str!("../../migrations/0001_credentials.sql");

/// Connection lifetime limits applied on top of [`DatabaseConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolTimeouts {
    /// Maximum time to wait for a connection
    pub acquire: Duration,
    /// Idle time before a connection is closed
    pub idle: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolTimeouts {
    fn default() -> Self {
        Self {
            acquire: Duration::from_secs(10),
            idle: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// Pool setup errors
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database connection failed: {0}")]
    Connect(#[from] sqlx::Error),
}

/// Create a PostgreSQL connection pool with the default timeouts
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with(config, PoolTimeouts::default()).await
}

/// Create a PostgreSQL connection pool
pub async fn create_pool_with(
    config: &DatabaseConfig,
    timeouts: PoolTimeouts,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(timeouts.acquire)
        .idle_timeout(timeouts.idle)
        .max_lifetime(timeouts.max_lifetime)
        .connect(&config.url)
        .await?;

    tracing::info!(max_connections = config.max_connections, "PostgreSQL pool ready");
    Ok(pool)
}

/// Create a pool from `DATABASE_URL` and the pool-size variables
///
/// Returns `Ok(None)` when `DATABASE_URL` is unset.
pub async fn create_pool_from_env() -> Result<Option<PgPool>, PoolError> {
    let config = AppConfig::from_env()?;
    match config.database {
        Some(database) => Ok(Some(create_pool(&database).await?)),
        None => Ok(None),
    }
}

/// Create the credentials table if it does not exist yet
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    tracing::debug!("Credential schema ready");
    Ok(())
}
