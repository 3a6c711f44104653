//! Event registration domain entities.

pub mod model;

pub use model::{RegisteredEvent, Registration};
