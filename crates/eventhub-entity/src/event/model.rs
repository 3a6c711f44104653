//! Event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The only state visible to anonymous callers.
///
/// `state` is intentionally a free-form string: "draft" and "published"
/// are the values in active use, but no enum or transition rules are
/// enforced on it.
pub const PUBLISHED_STATE: &str = "published";

/// An event listed on the platform, owned by exactly one organizer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// Event title.
    pub title: String,
    /// Longer description (optional).
    pub description: Option<String>,
    /// City the event takes place in (optional).
    pub city: Option<String>,
    /// Street address (optional).
    pub address: Option<String>,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// Ticket price; 0 for free events.
    pub price: f64,
    /// Lifecycle state, e.g. "draft" or "published".
    pub state: String,
    /// Advertised capacity. Stored for display only; registration does
    /// not enforce it.
    pub max_capacity: Option<i32>,
    /// Image filename (optional).
    pub image: Option<String>,
    /// The organizer owning this event.
    pub organizer_id: Uuid,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Check whether this event is publicly visible.
    pub fn is_published(&self) -> bool {
        self.state == PUBLISHED_STATE
    }

    /// Public URL path of the event image, when one is set.
    pub fn image_path(&self) -> Option<String> {
        self.image
            .as_ref()
            .map(|image| format!("/EventImage/{}/{}", self.id, image))
    }
}

/// An event row joined with its organizer's display name.
///
/// Read paths return this shape so responses can show who runs the event
/// without a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventWithOrganizer {
    /// The event itself.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub event: Event,
    /// Display name of the owning organizer.
    pub organizer_name: String,
}

/// Data required to create a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Event title.
    pub title: String,
    /// Description (optional).
    pub description: Option<String>,
    /// City (optional).
    pub city: Option<String>,
    /// Street address (optional).
    pub address: Option<String>,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// Ticket price.
    pub price: f64,
    /// Lifecycle state.
    pub state: String,
    /// Advertised capacity (optional).
    pub max_capacity: Option<i32>,
    /// Image filename (optional).
    pub image: Option<String>,
    /// The organizer owning the event.
    pub organizer_id: Uuid,
}

/// Partial update for an existing event.
///
/// `None` fields are left untouched; only fields carrying a value are
/// applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New date.
    pub date: Option<DateTime<Utc>>,
    /// New price.
    pub price: Option<f64>,
    /// New state.
    pub state: Option<String>,
    /// New capacity.
    pub max_capacity: Option<i32>,
    /// New image filename.
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(image: Option<&str>) -> Event {
        Event {
            id: Uuid::nil(),
            title: "T".to_string(),
            description: None,
            city: None,
            address: None,
            date: Utc::now(),
            price: 0.0,
            state: "draft".to_string(),
            max_capacity: None,
            image: image.map(String::from),
            organizer_id: Uuid::nil(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_image_path() {
        let event = sample_event(Some("cover.jpg"));
        assert_eq!(
            event.image_path().unwrap(),
            format!("/EventImage/{}/cover.jpg", event.id)
        );
        assert!(sample_event(None).image_path().is_none());
    }

    #[test]
    fn test_is_published() {
        let mut event = sample_event(None);
        assert!(!event.is_published());
        event.state = PUBLISHED_STATE.to_string();
        assert!(event.is_published());
        event.state = "Published".to_string();
        assert!(!event.is_published());
    }
}
