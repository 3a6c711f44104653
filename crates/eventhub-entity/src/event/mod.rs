//! Event domain entities.

pub mod model;

pub use model::{CreateEvent, Event, EventWithOrganizer, UpdateEvent, PUBLISHED_STATE};
