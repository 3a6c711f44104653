//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a user account can hold.
///
/// Stored in PostgreSQL as the `user_role` enum; serialized on the wire
/// in the `ROLE_*` form clients send and receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    /// Regular attendee account.
    #[serde(rename = "ROLE_USER")]
    User,
    /// Can create and manage their own events.
    #[serde(rename = "ROLE_ORGANIZER")]
    Organizer,
    /// Full administrator; cannot be self-assigned at registration.
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    /// Return the role in its wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "ROLE_USER",
            Self::Organizer => "ROLE_ORGANIZER",
            Self::Admin => "ROLE_ADMIN",
        }
    }

    /// Roles a caller may pick for themselves at registration.
    pub fn self_assignable(&self) -> bool {
        matches!(self, Self::User | Self::Organizer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = eventhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROLE_USER" => Ok(Self::User),
            "ROLE_ORGANIZER" => Ok(Self::Organizer),
            "ROLE_ADMIN" => Ok(Self::Admin),
            _ => Err(eventhub_core::AppError::validation("Invalid role")),
        }
    }
}
