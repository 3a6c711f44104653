//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::Role;

/// A registered account in the Eventhub system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique email address, matched exactly as stored.
    pub email: String,
    /// Human-readable display name.
    pub name: String,
    /// Roles held by this account (at least one).
    pub roles: Vec<Role>,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether this account holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Check whether this account has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Check whether this account can create and manage events.
    pub fn is_organizer(&self) -> bool {
        self.has_role(Role::Organizer)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Assigned roles.
    pub roles: Vec<Role>,
    /// Pre-hashed password.
    pub password_hash: String,
}
