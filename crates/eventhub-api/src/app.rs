//! Application builder — wires repositories, services, and the router
//! into a running Axum server.

use std::sync::Arc;

use sqlx::PgPool;

use eventhub_core::config::AppConfig;
use eventhub_core::error::AppError;
use eventhub_database::repositories::{EventRepository, RegistrationRepository, UserRepository};

use crate::router::build_router;
use crate::state::AppState;

/// Construct the shared application state from configuration and a
/// connected database pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let event_repo = Arc::new(EventRepository::new(db_pool.clone()));
    let registration_repo = Arc::new(RegistrationRepository::new(db_pool.clone()));

    let password_hasher = Arc::new(eventhub_auth::password::hasher::PasswordHasher::new());
    let jwt_encoder = Arc::new(eventhub_auth::jwt::encoder::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(eventhub_auth::jwt::decoder::JwtDecoder::new(&config.auth));

    let account_service = Arc::new(eventhub_service::account::service::AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
    ));
    let admin_user_service = Arc::new(eventhub_service::account::admin::AdminUserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
    ));
    let event_service = Arc::new(eventhub_service::event::service::EventService::new(
        Arc::clone(&event_repo),
    ));
    let registration_service = Arc::new(
        eventhub_service::registration::service::RegistrationService::new(
            Arc::clone(&registration_repo),
            Arc::clone(&event_repo),
        ),
    );
    let image_resolver = Arc::new(eventhub_service::media::ImageResolver::new(&config.media));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        user_repo,
        event_repo,
        registration_repo,
        account_service,
        admin_user_service,
        event_service,
        registration_service,
        image_resolver,
    }
}

/// Runs the Eventhub server with the given configuration and database
/// pool. Blocks until shutdown.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Eventhub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
    }
}
