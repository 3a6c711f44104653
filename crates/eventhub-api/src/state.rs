//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use eventhub_auth::jwt::decoder::JwtDecoder;
use eventhub_auth::jwt::encoder::JwtEncoder;
use eventhub_auth::password::hasher::PasswordHasher;
use eventhub_core::config::AppConfig;

use eventhub_database::repositories::event::EventRepository;
use eventhub_database::repositories::registration::RegistrationRepository;
use eventhub_database::repositories::user::UserRepository;

use eventhub_service::account::admin::AdminUserService;
use eventhub_service::account::service::AccountService;
use eventhub_service::event::service::EventService;
use eventhub_service::media::ImageResolver;
use eventhub_service::registration::service::RegistrationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Event repository
    pub event_repo: Arc<EventRepository>,
    /// Registration repository
    pub registration_repo: Arc<RegistrationRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Account self-service
    pub account_service: Arc<AccountService>,
    /// Admin user management service
    pub admin_user_service: Arc<AdminUserService>,
    /// Event service
    pub event_service: Arc<EventService>,
    /// Registration service
    pub registration_service: Arc<RegistrationService>,
    /// Event image path resolver
    pub image_resolver: Arc<ImageResolver>,
}
