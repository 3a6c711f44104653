//! Request context carrying the authenticated user's identity and roles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use eventhub_entity::user::Role;

/// Context for the current authenticated request.
///
/// Extracted from the bearer token and passed into service methods so
/// that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The email address from the token claims.
    pub email: String,
    /// The roles held at the time the token was issued.
    pub roles: Vec<Role>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, email: String, roles: Vec<Role>) -> Self {
        Self {
            user_id,
            email,
            roles,
        }
    }

    /// Returns whether the caller holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns whether the caller is an admin.
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Returns whether the caller may create and manage events.
    pub fn is_organizer(&self) -> bool {
        self.has_role(Role::Organizer)
    }
}
