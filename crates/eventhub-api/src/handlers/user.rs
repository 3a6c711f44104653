//! User handlers — registration, login, profile, and admin management.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use eventhub_core::error::AppError;
use eventhub_entity::user::Role;
use eventhub_service::account::admin::AdminCreateUser;

use crate::dto::request::{AdminCreateUserRequest, LoginRequest, RegisterRequest};
use crate::dto::response::{MessageResponse, TokenResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/users/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();
    let name = req.name.unwrap_or_default();
    let role = req.role.unwrap_or_default();

    if email.is_empty() || password.is_empty() || name.is_empty() || role.is_empty() {
        return Err(AppError::validation("Missing data").into());
    }

    let role: Role = role.parse()?;

    state
        .account_service
        .register(&email, &password, &name, role)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let (Some(email), Some(password)) = (req.email, req.password) else {
        return Err(AppError::validation("Email and password are required").into());
    };
    if email.is_empty() || password.is_empty() {
        return Err(AppError::validation("Email and password are required").into());
    }

    let user = state.account_service.authenticate(&email, &password).await?;
    let token = state.jwt_encoder.generate_token(&user)?;

    Ok(Json(TokenResponse { token }))
}

/// GET /api/users/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.account_service.profile(&auth).await?;
    Ok(Json(UserResponse::from(user)))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.admin_user_service.list_users(&auth).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.admin_user_service.get_user(&auth, id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AdminCreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let roles = match req.roles {
        Some(raw) => Some(
            raw.iter()
                .map(|r| r.parse::<Role>())
                .collect::<Result<Vec<_>, _>>()?,
        ),
        None => None,
    };

    let user = state
        .admin_user_service
        .create_user(
            &auth,
            AdminCreateUser {
                email: req.email,
                name: req.name,
                password: req.password,
                roles,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.admin_user_service.delete_user(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
