//! Eventhub Server — event management REST backend
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use eventhub_core::config::AppConfig;
use eventhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("EVENTHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Eventhub v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db = eventhub_database::DatabasePool::connect(&config.database).await?;
    let db_pool = db.into_pool();

    eventhub_database::migration::run_migrations(&db_pool).await?;

    if config.seed.enabled {
        let hasher = eventhub_auth::password::PasswordHasher::new();
        eventhub_database::seed::run_seed(&db_pool, |password| hasher.hash_password(password))
            .await?;
    }

    eventhub_api::run_server(config, db_pool).await
}
