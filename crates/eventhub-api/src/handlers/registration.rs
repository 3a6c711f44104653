//! Event registration handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::dto::response::{MessageResponse, RegisteredEventResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/registerEvent/{id}
pub async fn register_to_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.registration_service.register(&auth, id).await?;
    Ok(Json(MessageResponse::new(
        "User registered to event successfully",
    )))
}

/// GET /api/registerEvent/my
pub async fn my_registrations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<RegisteredEventResponse>>, ApiError> {
    let events = state.registration_service.list_mine(&auth).await?;
    Ok(Json(
        events
            .into_iter()
            .map(RegisteredEventResponse::from)
            .collect(),
    ))
}

/// DELETE /api/registerEvent/{id}
pub async fn unregister_from_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.registration_service.unregister(&auth, id).await?;
    Ok(Json(MessageResponse::new("User unregistered successfully")))
}
