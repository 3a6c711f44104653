//! Demo data seeding.
//!
//! Inserts a small set of demo accounts, events, and one registration so
//! a fresh installation has something to log in with. Runs only against
//! an empty users table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_entity::event::CreateEvent;
use eventhub_entity::user::Role;
use eventhub_entity::user::model::CreateUser;

use crate::repositories::{EventRepository, RegistrationRepository, UserRepository};

/// Insert demo data. `hash` turns a plaintext demo password into a
/// stored hash; the caller supplies it so this crate stays independent
/// of the password hashing implementation.
pub async fn run_seed<F>(pool: &PgPool, hash: F) -> AppResult<()>
where
    F: Fn(&str) -> AppResult<String>,
{
    let user_repo = UserRepository::new(pool.clone());
    let event_repo = EventRepository::new(pool.clone());
    let registration_repo = RegistrationRepository::new(pool.clone());

    if user_repo.count().await? > 0 {
        info!("Users table is not empty, skipping demo data seed");
        return Ok(());
    }

    info!("Seeding demo data...");

    user_repo
        .create(&CreateUser {
            email: "admin@example.com".to_string(),
            name: "admin".to_string(),
            roles: vec![Role::Admin],
            password_hash: hash("admin")?,
        })
        .await?;

    let organizer = user_repo
        .create(&CreateUser {
            email: "organizer@example.com".to_string(),
            name: "organizer".to_string(),
            roles: vec![Role::Organizer],
            password_hash: hash("organizer")?,
        })
        .await?;

    user_repo
        .create(&CreateUser {
            email: "user@example.com".to_string(),
            name: "user".to_string(),
            roles: vec![Role::User],
            password_hash: hash("user")?,
        })
        .await?;

    let attendee = user_repo
        .create(&CreateUser {
            email: "attendee@example.com".to_string(),
            name: "Attendee".to_string(),
            roles: vec![Role::User],
            password_hash: hash("attendeepass")?,
        })
        .await?;

    let first_event = event_repo
        .create(&CreateEvent {
            title: "Opening Night".to_string(),
            description: Some("A great way to start the season.".to_string()),
            city: Some("Paris".to_string()),
            address: Some("10 rue de la Paix".to_string()),
            date: seed_date("2025-07-01T18:00:00Z")?,
            price: 20.0,
            state: "published".to_string(),
            max_capacity: Some(2),
            image: Some("cover.jpg".to_string()),
            organizer_id: organizer.id,
        })
        .await?;

    event_repo
        .create(&CreateEvent {
            title: "Summer Workshop".to_string(),
            description: Some("An afternoon of hands-on sessions.".to_string()),
            city: Some("Lyon".to_string()),
            address: Some("25 avenue des Lumières".to_string()),
            date: seed_date("2025-08-15T14:00:00Z")?,
            price: 15.0,
            state: "draft".to_string(),
            max_capacity: Some(1),
            image: Some("cover2.jpg".to_string()),
            organizer_id: organizer.id,
        })
        .await?;

    registration_repo.create(attendee.id, first_event.id).await?;

    info!("Demo data seeded");
    Ok(())
}

fn seed_date(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| AppError::internal(format!("Invalid seed date '{value}': {e}")))
}
