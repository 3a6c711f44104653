//! Event registration entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's intent to attend an event.
///
/// At most one registration exists per (user, event) pair; the database
/// enforces this with a unique constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    /// Unique registration identifier.
    pub id: Uuid,
    /// The attending user.
    pub user_id: Uuid,
    /// The event being attended.
    pub event_id: Uuid,
    /// When the registration was made.
    pub created_at: DateTime<Utc>,
}

/// Event summary row returned when listing a user's registrations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RegisteredEvent {
    /// The event identifier.
    pub id: Uuid,
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: Option<String>,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// City.
    pub city: Option<String>,
    /// Street address.
    pub address: Option<String>,
}
