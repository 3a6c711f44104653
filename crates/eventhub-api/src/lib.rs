//! # eventhub-api
//!
//! HTTP API layer for Eventhub built on Axum.
//!
//! Provides all REST endpoints, middleware (auth, CORS, request tracing),
//! extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
