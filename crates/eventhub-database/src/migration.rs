//! Embedded schema migrations.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use eventhub_core::error::{AppError, ErrorKind};

/// All SQL migrations, compiled into the binary.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the schema up to date.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Schema migration failed", e))?;

    info!(known = MIGRATOR.iter().count(), "Schema is up to date");
    Ok(())
}
