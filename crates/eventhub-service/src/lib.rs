//! # eventhub-service
//!
//! Business logic services for Eventhub. Each service takes a
//! [`context::RequestContext`] describing the authenticated caller and
//! orchestrates repositories and auth primitives; authorization decisions
//! live here, HTTP concerns stay in the API layer.

pub mod account;
pub mod context;
pub mod event;
pub mod media;
pub mod registration;

pub use context::RequestContext;
