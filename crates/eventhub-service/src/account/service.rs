//! Account self-service operations — registration, credential
//! verification, and profile lookup.

use std::sync::Arc;

use tracing::info;

use eventhub_auth::password::PasswordHasher;
use eventhub_core::error::AppError;
use eventhub_database::repositories::UserRepository;
use eventhub_entity::user::model::CreateUser;
use eventhub_entity::user::{Role, User};

use crate::context::RequestContext;

/// Handles account registration, login verification, and profiles.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(user_repo: Arc<UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { user_repo, hasher }
    }

    /// Registers a new account with a single self-assigned role.
    ///
    /// The caller has already checked field presence and parsed the role;
    /// admin accounts cannot be created through this path.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<User, AppError> {
        if !role.self_assignable() {
            return Err(AppError::validation("Invalid role"));
        }

        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email: email.to_string(),
                name: name.to_string(),
                roles: vec![role],
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "Account registered");

        Ok(user)
    }

    /// Verifies login credentials and returns the matching user.
    ///
    /// The same error is returned for an unknown email and a wrong
    /// password so callers cannot probe which emails exist.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid credentials"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Invalid credentials"));
        }

        Ok(user)
    }

    /// Gets the current user's full profile.
    pub async fn profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
