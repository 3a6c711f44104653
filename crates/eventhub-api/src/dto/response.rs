//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use eventhub_entity::event::EventWithOrganizer;
use eventhub_entity::registration::RegisteredEvent;
use eventhub_entity::user::{Role, User};

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response carrying the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed JWT bearer token.
    pub token: String,
}

/// User profile for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Roles in wire form.
    pub roles: Vec<Role>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            roles: user.roles,
        }
    }
}

/// Organizer summary embedded in event responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizerResponse {
    /// Organizer's user ID.
    pub id: Uuid,
    /// Organizer's display name.
    pub name: String,
}

/// Full event representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    /// Event ID.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// Ticket price.
    pub price: f64,
    /// Lifecycle state.
    pub state: String,
    /// Advertised capacity.
    #[serde(rename = "maxCapacity")]
    pub max_capacity: Option<i32>,
    /// Image filename.
    pub image: Option<String>,
    /// Public URL path of the image, when one is set.
    #[serde(rename = "imagePath")]
    pub image_path: Option<String>,
    /// The owning organizer.
    pub organizer: OrganizerResponse,
}

impl From<EventWithOrganizer> for EventResponse {
    fn from(row: EventWithOrganizer) -> Self {
        let image_path = row.event.image_path();
        let event = row.event;
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            city: event.city,
            address: event.address,
            date: event.date,
            price: event.price,
            state: event.state,
            max_capacity: event.max_capacity,
            image: event.image,
            image_path,
            organizer: OrganizerResponse {
                id: event.organizer_id,
                name: row.organizer_name,
            },
        }
    }
}

/// Event summary returned when listing a user's registrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredEventResponse {
    /// Event ID.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// When the event takes place, as an ISO-8601 instant.
    pub date: DateTime<Utc>,
    /// City.
    pub city: Option<String>,
    /// Street address.
    pub address: Option<String>,
}

impl From<RegisteredEvent> for RegisteredEventResponse {
    fn from(event: RegisteredEvent) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            date: event.date,
            city: event.city,
            address: event.address,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
