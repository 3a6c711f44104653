//! Admin user management operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use eventhub_auth::password::PasswordHasher;
use eventhub_core::error::AppError;
use eventhub_database::repositories::UserRepository;
use eventhub_entity::user::model::CreateUser;
use eventhub_entity::user::{Role, User};

use crate::context::RequestContext;

/// Fallback password applied when an admin creates an account without
/// one. Kept for compatibility with the established admin contract;
/// callers must not rely on validation here.
const DEFAULT_PASSWORD: &str = "password";

/// Data an admin supplies when creating a user. Every field is optional;
/// missing values fall back to lax defaults.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AdminCreateUser {
    /// Email address (defaults to empty string).
    pub email: Option<String>,
    /// Display name (defaults to empty string).
    pub name: Option<String>,
    /// Plaintext password (defaults to a fixed fallback).
    pub password: Option<String>,
    /// Roles (defaults to `[ROLE_USER]`).
    pub roles: Option<Vec<Role>>,
}

/// Handles admin-only user management.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(user_repo: Arc<UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { user_repo, hasher }
    }

    /// Lists all users.
    pub async fn list_users(&self, ctx: &RequestContext) -> Result<Vec<User>, AppError> {
        require_admin(ctx)?;
        self.user_repo.find_all().await
    }

    /// Gets a single user by ID.
    pub async fn get_user(&self, ctx: &RequestContext, id: Uuid) -> Result<User, AppError> {
        require_admin(ctx)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Creates a user with lax defaults for missing fields.
    pub async fn create_user(
        &self,
        ctx: &RequestContext,
        data: AdminCreateUser,
    ) -> Result<User, AppError> {
        require_admin(ctx)?;

        let password = data.password.unwrap_or_else(|| DEFAULT_PASSWORD.to_string());
        let password_hash = self.hasher.hash_password(&password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email: data.email.unwrap_or_default(),
                name: data.name.unwrap_or_default(),
                roles: data.roles.unwrap_or_else(|| vec![Role::User]),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, admin_id = %ctx.user_id, "User created by admin");

        Ok(user)
    }

    /// Deletes a user by ID, cascading to their events and registrations.
    pub async fn delete_user(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        require_admin(ctx)?;

        let deleted = self.user_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found("User not found"));
        }

        info!(user_id = %id, admin_id = %ctx.user_id, "User deleted by admin");

        Ok(())
    }
}

fn require_admin(ctx: &RequestContext) -> Result<(), AppError> {
    if !ctx.is_admin() {
        return Err(AppError::authorization("Access denied"));
    }
    Ok(())
}
