//! Route definitions for the Eventhub HTTP API.
//!
//! API routes are organized by domain and mounted under `/api`; the
//! event image route lives at the root so image URLs stay short. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(user_routes())
        .merge(event_routes())
        .merge(registration_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .merge(image_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Account and admin user endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(handlers::user::register))
        .route("/users/login", post(handlers::user::login))
        .route("/users/me", get(handlers::user::me))
        .route("/users", get(handlers::user::list_users))
        .route("/users", post(handlers::user::create_user))
        .route("/users/{id}", get(handlers::user::get_user))
        .route("/users/{id}", delete(handlers::user::delete_user))
}

/// Event listing, CRUD, and search endpoints
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(handlers::event::list_published))
        .route("/events", post(handlers::event::create))
        .route("/events/my", get(handlers::event::list_my_events))
        .route("/events/search", get(handlers::event::search))
        .route("/events/{id}", get(handlers::event::show))
        .route("/events/{id}", put(handlers::event::update))
        .route("/events/{id}", delete(handlers::event::delete))
}

/// Event registration endpoints
fn registration_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/registerEvent/my",
            get(handlers::registration::my_registrations),
        )
        .route(
            "/registerEvent/{id}",
            post(handlers::registration::register_to_event),
        )
        .route(
            "/registerEvent/{id}",
            delete(handlers::registration::unregister_from_event),
        )
}

/// Static event image endpoint (no auth required)
fn image_routes() -> Router<AppState> {
    Router::new().route(
        "/EventImage/{event_id}/{filename}",
        get(handlers::image::get_image),
    )
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}
