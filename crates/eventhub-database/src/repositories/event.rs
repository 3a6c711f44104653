//! Event repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_entity::event::{CreateEvent, Event, EventWithOrganizer, PUBLISHED_STATE};

/// Columns selected for joined event + organizer rows.
const JOINED_COLUMNS: &str = "e.id, e.title, e.description, e.city, e.address, e.date, e.price, \
     e.state, e.max_capacity, e.image, e.organizer_id, e.created_at, e.updated_at, \
     u.name AS organizer_name";

/// Repository for event CRUD and query operations.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an event by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find event by id", e)
            })
    }

    /// Find an event by primary key, joined with its organizer's name.
    pub async fn find_with_organizer(&self, id: Uuid) -> AppResult<Option<EventWithOrganizer>> {
        sqlx::query_as::<_, EventWithOrganizer>(&format!(
            "SELECT {JOINED_COLUMNS} FROM events e \
             JOIN users u ON u.id = e.organizer_id \
             WHERE e.id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find event by id", e))
    }

    /// List all published events in creation order.
    pub async fn find_published(&self) -> AppResult<Vec<EventWithOrganizer>> {
        sqlx::query_as::<_, EventWithOrganizer>(&format!(
            "SELECT {JOINED_COLUMNS} FROM events e \
             JOIN users u ON u.id = e.organizer_id \
             WHERE e.state = $1 \
             ORDER BY e.created_at, e.id",
        ))
        .bind(PUBLISHED_STATE)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list published events", e)
        })
    }

    /// List all events owned by the given organizer, in creation order.
    pub async fn find_by_organizer(&self, organizer_id: Uuid) -> AppResult<Vec<EventWithOrganizer>> {
        sqlx::query_as::<_, EventWithOrganizer>(&format!(
            "SELECT {JOINED_COLUMNS} FROM events e \
             JOIN users u ON u.id = e.organizer_id \
             WHERE e.organizer_id = $1 \
             ORDER BY e.created_at, e.id",
        ))
        .bind(organizer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list organizer events", e)
        })
    }

    /// Search published events with optional filters.
    ///
    /// The published-only base filter always applies; a `state` filter can
    /// only narrow within published events. `city` is a case-sensitive
    /// substring match, and the date bounds are inclusive.
    pub async fn search(
        &self,
        city: Option<&str>,
        state: Option<&str>,
        date_from: Option<DateTime<Utc>>,
        date_to: Option<DateTime<Utc>>,
    ) -> AppResult<Vec<EventWithOrganizer>> {
        sqlx::query_as::<_, EventWithOrganizer>(&format!(
            "SELECT {JOINED_COLUMNS} FROM events e \
             JOIN users u ON u.id = e.organizer_id \
             WHERE e.state = $1 \
               AND ($2::text IS NULL OR e.city LIKE '%' || $2 || '%') \
               AND ($3::text IS NULL OR e.state = $3) \
               AND ($4::timestamptz IS NULL OR e.date >= $4) \
               AND ($5::timestamptz IS NULL OR e.date <= $5) \
             ORDER BY e.date, e.id",
        ))
        .bind(PUBLISHED_STATE)
        .bind(city)
        .bind(state)
        .bind(date_from)
        .bind(date_to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search events", e))
    }

    /// Create a new event.
    pub async fn create(&self, data: &CreateEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events \
                 (id, title, description, city, address, date, price, state, \
                  max_capacity, image, organizer_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.city)
        .bind(&data.address)
        .bind(data.date)
        .bind(data.price)
        .bind(&data.state)
        .bind(data.max_capacity)
        .bind(&data.image)
        .bind(data.organizer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create event", e))
    }

    /// Persist the mutable fields of an event.
    pub async fn update(&self, event: &Event) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET title = $2, description = $3, city = $4, address = $5, \
                               date = $6, price = $7, state = $8, max_capacity = $9, \
                               image = $10, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.city)
        .bind(&event.address)
        .bind(event.date)
        .bind(event.price)
        .bind(&event.state)
        .bind(event.max_capacity)
        .bind(&event.image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update event", e))?
        .ok_or_else(|| AppError::not_found("Event not found"))
    }

    /// Delete an event by ID. Registrations are removed by the cascading
    /// foreign key.
    pub async fn delete(&self, event_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(event_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete event", e))?;

        Ok(result.rows_affected() > 0)
    }
}
