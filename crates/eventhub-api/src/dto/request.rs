//! Request DTOs.
//!
//! Fields mirror the wire contract, so several are optional here and
//! checked by the handlers with the contract's exact error messages.

use serde::{Deserialize, Serialize};

use eventhub_service::event::service::EventInput;

/// Account registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Self-assigned role (`ROLE_USER` or `ROLE_ORGANIZER`).
    pub role: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Create user request (admin). Missing fields fall back to lax
/// defaults instead of being rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCreateUserRequest {
    /// Email address.
    pub email: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
    /// Roles in wire form (`ROLE_*`).
    pub roles: Option<Vec<String>>,
}

/// Event create/update payload. The same shape serves both operations;
/// creation requires title, date, and state to be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPayload {
    /// Event title.
    pub title: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Date-time string.
    pub date: Option<String>,
    /// Ticket price.
    pub price: Option<f64>,
    /// Lifecycle state.
    pub state: Option<String>,
    /// Advertised capacity.
    #[serde(rename = "maxCapacity")]
    pub max_capacity: Option<i32>,
    /// Image filename.
    pub image: Option<String>,
}

impl From<EventPayload> for EventInput {
    fn from(payload: EventPayload) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            city: payload.city,
            address: payload.address,
            date: payload.date,
            price: payload.price,
            state: payload.state,
            max_capacity: payload.max_capacity,
            image: payload.image,
        }
    }
}

/// Public event search query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Case-sensitive city substring.
    pub city: Option<String>,
    /// State filter; narrows within published events only.
    pub state: Option<String>,
    /// Inclusive lower date bound.
    #[serde(rename = "dateFrom")]
    pub date_from: Option<String>,
    /// Inclusive upper date bound.
    #[serde(rename = "dateTo")]
    pub date_to: Option<String>,
}
