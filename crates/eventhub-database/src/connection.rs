//! PostgreSQL connection pool setup.

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use eventhub_core::config::database::DatabaseConfig;
use eventhub_core::error::{AppError, ErrorKind};

/// A configured sqlx connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Open a pool against the configured database.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(url = %redact_url(&config.url), "Opening database pool");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(config.idle_timeout())
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Could not open database pool", e)
            })?;

        info!(
            max_connections = config.max_connections,
            "Database pool ready"
        );
        Ok(Self { pool })
    }

    /// Borrow the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Take ownership of the underlying sqlx pool.
    pub fn into_pool(self) -> PgPool {
        self.pool
    }
}

/// Replace the password portion of a connection URL before logging it.
fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((credentials, host)) = rest.split_once('@') else {
        return url.to_string();
    };
    match credentials.split_once(':') {
        Some((user, _password)) => format!("{scheme}://{user}:****@{host}"),
        None => url.to_string(),
    }
}
