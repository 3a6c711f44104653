//! Registration operations — joining and leaving events, and listing a
//! user's registrations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use eventhub_core::error::AppError;
use eventhub_database::repositories::{EventRepository, RegistrationRepository};
use eventhub_entity::registration::RegisteredEvent;

use crate::context::RequestContext;

/// Handles event registrations.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    /// Registration repository.
    registration_repo: Arc<RegistrationRepository>,
    /// Event repository.
    event_repo: Arc<EventRepository>,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(
        registration_repo: Arc<RegistrationRepository>,
        event_repo: Arc<EventRepository>,
    ) -> Self {
        Self {
            registration_repo,
            event_repo,
        }
    }

    /// Registers the caller to an event.
    ///
    /// The advertised capacity is not checked; events can overbook. The
    /// existence check keeps the common duplicate path cheap, and the
    /// unique constraint behind `create` catches concurrent duplicates.
    pub async fn register(&self, ctx: &RequestContext, event_id: Uuid) -> Result<(), AppError> {
        self.event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let existing = self
            .registration_repo
            .find_by_user_and_event(ctx.user_id, event_id)
            .await?;
        if existing.is_some() {
            return Err(AppError::conflict("User already registered"));
        }

        self.registration_repo.create(ctx.user_id, event_id).await?;

        info!(user_id = %ctx.user_id, event_id = %event_id, "User registered to event");

        Ok(())
    }

    /// Lists the events the caller is registered to, as summaries.
    pub async fn list_mine(&self, ctx: &RequestContext) -> Result<Vec<RegisteredEvent>, AppError> {
        self.registration_repo
            .find_events_for_user(ctx.user_id)
            .await
    }

    /// Removes the caller's registration from an event.
    pub async fn unregister(&self, ctx: &RequestContext, event_id: Uuid) -> Result<(), AppError> {
        self.event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let removed = self
            .registration_repo
            .delete_by_user_and_event(ctx.user_id, event_id)
            .await?;
        if !removed {
            return Err(AppError::validation("User not registered"));
        }

        info!(user_id = %ctx.user_id, event_id = %event_id, "User unregistered from event");

        Ok(())
    }
}
