//! Event lifecycle operations — listing, visibility, creation, partial
//! updates, deletion, and public search.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::info;
use uuid::Uuid;

use eventhub_core::error::AppError;
use eventhub_database::repositories::EventRepository;
use eventhub_entity::event::{CreateEvent, Event, EventWithOrganizer};

use crate::context::RequestContext;

/// Event fields as submitted by a client. Used for both creation (where
/// title/date/state are required) and partial updates (where every field
/// is optional and missing fields stay untouched).
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct EventInput {
    /// Event title.
    pub title: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Date as submitted; parsed before anything is persisted.
    pub date: Option<String>,
    /// Ticket price.
    pub price: Option<f64>,
    /// Lifecycle state.
    pub state: Option<String>,
    /// Advertised capacity.
    pub max_capacity: Option<i32>,
    /// Image filename.
    pub image: Option<String>,
}

/// Public search filters, as submitted.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct EventSearchFilters {
    /// Case-sensitive city substring.
    pub city: Option<String>,
    /// State filter; can only narrow within published events.
    pub state: Option<String>,
    /// Inclusive lower date bound, as submitted.
    pub date_from: Option<String>,
    /// Inclusive upper date bound, as submitted.
    pub date_to: Option<String>,
}

/// Handles event CRUD, visibility rules, and search.
#[derive(Debug, Clone)]
pub struct EventService {
    /// Event repository.
    event_repo: Arc<EventRepository>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(event_repo: Arc<EventRepository>) -> Self {
        Self { event_repo }
    }

    /// Lists all published events. Public.
    pub async fn list_published(&self) -> Result<Vec<EventWithOrganizer>, AppError> {
        self.event_repo.find_published().await
    }

    /// Lists the caller's own events. Requires the organizer role.
    ///
    /// An organizer with no events gets a not-found error rather than an
    /// empty list; that quirk is part of the established contract.
    pub async fn list_mine(&self, ctx: &RequestContext) -> Result<Vec<EventWithOrganizer>, AppError> {
        if !ctx.is_organizer() {
            return Err(AppError::authorization("Access denied"));
        }

        let events = self.event_repo.find_by_organizer(ctx.user_id).await?;
        if events.is_empty() {
            return Err(AppError::not_found("No events found for this organizer"));
        }

        Ok(events)
    }

    /// Shows a single event.
    ///
    /// Non-published events are visible only to the owning organizer or
    /// an admin; everyone else, including anonymous callers, is denied.
    pub async fn show(
        &self,
        ctx: Option<&RequestContext>,
        id: Uuid,
    ) -> Result<EventWithOrganizer, AppError> {
        let event = self
            .event_repo
            .find_with_organizer(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        if !event.event.is_published() {
            let allowed = ctx
                .map(|c| c.is_admin() || event.event.organizer_id == c.user_id)
                .unwrap_or(false);
            if !allowed {
                return Err(AppError::authorization("Access denied"));
            }
        }

        Ok(event)
    }

    /// Creates a new event owned by the caller. Requires the organizer
    /// role; title, date, and state are mandatory.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: EventInput,
    ) -> Result<EventWithOrganizer, AppError> {
        if !ctx.is_organizer() {
            return Err(AppError::authorization("Access denied"));
        }

        let title = non_empty(input.title);
        let date = non_empty(input.date);
        let state = non_empty(input.state);
        let (Some(title), Some(date), Some(state)) = (title, date, state) else {
            return Err(AppError::validation(
                "Missing required fields (title, date, state)",
            ));
        };

        let date =
            parse_event_date(&date).ok_or_else(|| AppError::validation("Invalid date format"))?;

        let event = self
            .event_repo
            .create(&CreateEvent {
                title,
                description: input.description,
                city: input.city,
                address: input.address,
                date,
                price: input.price.unwrap_or(0.0),
                state,
                max_capacity: input.max_capacity,
                image: input.image,
                organizer_id: ctx.user_id,
            })
            .await?;

        info!(event_id = %event.id, organizer_id = %ctx.user_id, "Event created");

        self.joined(event).await
    }

    /// Applies a partial update to an event. Only the owning organizer or
    /// an admin may update; fields absent from the input stay untouched.
    ///
    /// The date is parsed before any field is applied so a malformed date
    /// leaves the event entirely unchanged.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: EventInput,
    ) -> Result<EventWithOrganizer, AppError> {
        let mut event = self
            .event_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        self.check_ownership(ctx, &event)?;

        let date = match &input.date {
            Some(raw) => Some(
                parse_event_date(raw)
                    .ok_or_else(|| AppError::validation("Invalid date format"))?,
            ),
            None => None,
        };

        if let Some(date) = date {
            event.date = date;
        }
        if let Some(title) = input.title {
            event.title = title;
        }
        if let Some(description) = input.description {
            event.description = Some(description);
        }
        if let Some(city) = input.city {
            event.city = Some(city);
        }
        if let Some(address) = input.address {
            event.address = Some(address);
        }
        if let Some(max_capacity) = input.max_capacity {
            event.max_capacity = Some(max_capacity);
        }
        if let Some(image) = input.image {
            event.image = Some(image);
        }
        if let Some(state) = input.state {
            event.state = state;
        }
        if let Some(price) = input.price {
            event.price = price;
        }

        let event = self.event_repo.update(&event).await?;

        info!(event_id = %event.id, user_id = %ctx.user_id, "Event updated");

        self.joined(event).await
    }

    /// Deletes an event and, through the cascade, its registrations. Only
    /// the owning organizer or an admin may delete.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let event = self
            .event_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        self.check_ownership(ctx, &event)?;

        self.event_repo.delete(id).await?;

        info!(event_id = %id, user_id = %ctx.user_id, "Event deleted");

        Ok(())
    }

    /// Searches published events. Public; the published-only base filter
    /// cannot be widened by the state parameter.
    pub async fn search(
        &self,
        filters: EventSearchFilters,
    ) -> Result<Vec<EventWithOrganizer>, AppError> {
        let date_from = match &filters.date_from {
            Some(raw) => Some(
                parse_event_date(raw)
                    .ok_or_else(|| AppError::validation("Invalid dateFrom format"))?,
            ),
            None => None,
        };
        let date_to = match &filters.date_to {
            Some(raw) => Some(
                parse_event_date(raw)
                    .ok_or_else(|| AppError::validation("Invalid dateTo format"))?,
            ),
            None => None,
        };

        self.event_repo
            .search(
                filters.city.as_deref().filter(|c| !c.is_empty()),
                filters.state.as_deref().filter(|s| !s.is_empty()),
                date_from,
                date_to,
            )
            .await
    }

    fn check_ownership(&self, ctx: &RequestContext, event: &Event) -> Result<(), AppError> {
        if !(ctx.is_admin() || event.organizer_id == ctx.user_id) {
            return Err(AppError::authorization("Access denied"));
        }
        Ok(())
    }

    async fn joined(&self, event: Event) -> Result<EventWithOrganizer, AppError> {
        self.event_repo
            .find_with_organizer(event.id)
            .await?
            .ok_or_else(|| AppError::internal("Event vanished during write"))
    }
}

/// Parse a client-submitted event date.
///
/// Accepts RFC 3339 as well as the naive `2025-07-01T18:00:00`,
/// `2025-07-01 18:00:00`, and `2025-07-01` forms, all interpreted as UTC.
pub fn parse_event_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_event_date("2025-01-01T10:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap());

        let offset = parse_event_date("2025-01-01T12:00:00+02:00").unwrap();
        assert_eq!(offset, Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2025, 7, 1, 18, 0, 0).unwrap();
        assert_eq!(parse_event_date("2025-07-01T18:00:00").unwrap(), expected);
        assert_eq!(parse_event_date("2025-07-01 18:00:00").unwrap(), expected);
        assert_eq!(
            parse_event_date("2025-07-01").unwrap(),
            Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_event_date("not-a-date").is_none());
        assert!(parse_event_date("2025-13-40").is_none());
        assert!(parse_event_date("").is_none());
    }
}
