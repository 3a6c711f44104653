//! Event registration repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_entity::registration::{RegisteredEvent, Registration};

/// Repository for event registration operations.
#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    /// Create a new registration repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a registration for the given (user, event) pair.
    pub async fn find_by_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> AppResult<Option<Registration>> {
        sqlx::query_as::<_, Registration>(
            "SELECT * FROM event_registrations WHERE user_id = $1 AND event_id = $2",
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find registration", e))
    }

    /// Register a user to an event.
    ///
    /// The unique constraint on (user_id, event_id) closes the race
    /// between the existence check and this insert; a violation maps to
    /// the same duplicate-registration error the check produces.
    pub async fn create(&self, user_id: Uuid, event_id: Uuid) -> AppResult<Registration> {
        sqlx::query_as::<_, Registration>(
            "INSERT INTO event_registrations (id, user_id, event_id) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(event_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("event_registrations_user_id_event_id_key") =>
            {
                AppError::conflict("User already registered")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create registration", e),
        })
    }

    /// Remove a registration for the given (user, event) pair.
    pub async fn delete_by_user_and_event(&self, user_id: Uuid, event_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM event_registrations WHERE user_id = $1 AND event_id = $2",
        )
        .bind(user_id)
        .bind(event_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete registration", e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    /// List the events a user is registered to, as summary rows.
    pub async fn find_events_for_user(&self, user_id: Uuid) -> AppResult<Vec<RegisteredEvent>> {
        sqlx::query_as::<_, RegisteredEvent>(
            "SELECT e.id, e.title, e.description, e.date, e.city, e.address \
             FROM event_registrations r \
             JOIN events e ON e.id = r.event_id \
             WHERE r.user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list registered events", e)
        })
    }
}
