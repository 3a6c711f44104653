//! Event services.

pub mod service;

pub use service::{EventInput, EventSearchFilters, EventService};
