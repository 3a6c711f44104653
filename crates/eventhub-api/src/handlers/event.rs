//! Event handlers — public listings, organizer CRUD, and search.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use eventhub_service::event::service::EventSearchFilters;

use crate::dto::request::{EventPayload, SearchQuery};
use crate::dto::response::EventResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, OptionalAuthUser};
use crate::state::AppState;

/// GET /api/events
pub async fn list_published(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponse>>, ApiError> {
    let events = state.event_service.list_published().await?;
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

/// GET /api/events/my
pub async fn list_my_events(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<EventResponse>>, ApiError> {
    let events = state.event_service.list_mine(&auth).await?;
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

/// GET /api/events/search
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<EventResponse>>, ApiError> {
    let events = state
        .event_service
        .search(EventSearchFilters {
            city: query.city,
            state: query.state,
            date_from: query.date_from,
            date_to: query.date_to,
        })
        .await?;
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

/// GET /api/events/{id}
pub async fn show(
    State(state): State<AppState>,
    OptionalAuthUser(ctx): OptionalAuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<EventResponse>, ApiError> {
    let event = state.event_service.show(ctx.as_ref(), id).await?;
    Ok(Json(EventResponse::from(event)))
}

/// POST /api/events
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<EventPayload>,
) -> Result<(StatusCode, Json<EventResponse>), ApiError> {
    let event = state.event_service.create(&auth, payload.into()).await?;
    Ok((StatusCode::CREATED, Json(EventResponse::from(event))))
}

/// PUT /api/events/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<EventPayload>,
) -> Result<Json<EventResponse>, ApiError> {
    let event = state.event_service.update(&auth, id, payload.into()).await?;
    Ok(Json(EventResponse::from(event)))
}

/// DELETE /api/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.event_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
