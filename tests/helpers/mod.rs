//! Shared test helpers for end-to-end API tests.
//!
//! Tests run against a real PostgreSQL instance named by
//! `EVENTHUB_TEST_DATABASE_URL`. When the variable is unset,
//! [`TestApp::new`] returns `None` and each test returns early, so the
//! suite still passes on machines without a database.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use eventhub_auth::password::PasswordHasher;
use eventhub_core::config::app::ServerConfig;
use eventhub_core::config::auth::AuthConfig;
use eventhub_core::config::database::DatabaseConfig;
use eventhub_core::config::logging::LoggingConfig;
use eventhub_core::config::media::MediaConfig;
use eventhub_core::config::{AppConfig, SeedConfig};
use eventhub_database::repositories::UserRepository;
use eventhub_entity::user::Role;
use eventhub_entity::user::model::CreateUser;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestApp {
    /// Create a new test application, or `None` when no test database is
    /// configured.
    pub async fn new() -> Option<Self> {
        let Ok(url) = std::env::var("EVENTHUB_TEST_DATABASE_URL") else {
            eprintln!("EVENTHUB_TEST_DATABASE_URL is not set, skipping");
            return None;
        };

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 5,
                idle_timeout_seconds: 60,
            },
            auth: AuthConfig {
                jwt_secret: "test-secret".to_string(),
                jwt_ttl_hours: 1,
            },
            media: MediaConfig::default(),
            seed: SeedConfig::default(),
            logging: LoggingConfig::default(),
        };

        let db = eventhub_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        let db_pool = db.into_pool();

        eventhub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = eventhub_api::app::build_state(config, db_pool.clone());
        let router = eventhub_api::router::build_router(state);

        Some(Self { router, db_pool })
    }

    /// Generate a unique email address so tests never collide.
    pub fn unique_email(prefix: &str) -> String {
        format!("{}-{}@test.com", prefix, Uuid::new_v4())
    }

    /// Register an account through the API.
    pub async fn register_user(&self, email: &str, password: &str, name: &str, role: &str) {
        let response = self
            .request(
                "POST",
                "/api/users/register",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                    "name": name,
                    "role": role,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );
    }

    /// Insert an admin account directly; admins cannot self-register.
    pub async fn create_admin(&self, email: &str, password: &str) -> Uuid {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password(password).expect("Failed to hash");

        let repo = UserRepository::new(self.db_pool.clone());
        let user = repo
            .create(&CreateUser {
                email: email.to_string(),
                name: "admin".to_string(),
                roles: vec![Role::Admin],
                password_hash: hash,
            })
            .await
            .expect("Failed to create admin");

        user.id
    }

    /// Login and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/users/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Create an event through the API and return its ID.
    pub async fn create_event(&self, token: &str, body: Value) -> String {
        let response = self
            .request("POST", "/api/events", Some(body), Some(token))
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Event creation failed: {:?}",
            response.body
        );

        response
            .body
            .get("id")
            .and_then(|v| v.as_str())
            .expect("No id in event response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}
