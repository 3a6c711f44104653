//! JWT claims structure embedded in every bearer token.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use eventhub_entity::user::Role;

/// JWT claims payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// The user's email at the time of issuance.
    pub email: String,
    /// The user's roles at the time of issuance.
    pub roles: Vec<Role>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
