//! End-to-end tests for event CRUD, visibility, and search.

mod helpers;

use helpers::TestApp;
use http::StatusCode;
use serde_json::json;

async fn organizer_token(app: &TestApp) -> String {
    let email = TestApp::unique_email("organizer");
    app.register_user(&email, "pass", "Org", "ROLE_ORGANIZER")
        .await;
    app.login(&email, "pass").await
}

async fn user_token(app: &TestApp) -> String {
    let email = TestApp::unique_email("user");
    app.register_user(&email, "pass", "User", "ROLE_USER").await;
    app.login(&email, "pass").await
}

async fn admin_token(app: &TestApp) -> String {
    let email = TestApp::unique_email("admin");
    app.create_admin(&email, "adminpass").await;
    app.login(&email, "adminpass").await
}

#[tokio::test]
async fn test_draft_event_visibility() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let organizer = organizer_token(&app).await;
    let event_id = app
        .create_event(
            &organizer,
            json!({ "title": "T", "date": "2025-01-01T10:00:00Z", "state": "draft" }),
        )
        .await;
    let path = format!("/api/events/{event_id}");

    // Anonymous and unrelated callers are denied
    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "Access denied"
    );

    let other = user_token(&app).await;
    let response = app.request("GET", &path, None, Some(&other)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // The owner and an admin can see the draft
    let response = app.request("GET", &path, None, Some(&organizer)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("state").unwrap().as_str().unwrap(), "draft");

    let admin = admin_token(&app).await;
    let response = app.request("GET", &path, None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_published_only_shows_published_events() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let organizer = organizer_token(&app).await;
    let published_id = app
        .create_event(
            &organizer,
            json!({ "title": "P", "date": "2025-06-01T10:00:00Z", "state": "published" }),
        )
        .await;
    let draft_id = app
        .create_event(
            &organizer,
            json!({ "title": "D", "date": "2025-06-01T10:00:00Z", "state": "draft" }),
        )
        .await;

    let response = app.request("GET", "/api/events", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let ids: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.get("id").unwrap().as_str().unwrap())
        .collect();
    assert!(ids.contains(&published_id.as_str()));
    assert!(!ids.contains(&draft_id.as_str()));

    for event in response.body.as_array().unwrap() {
        assert_eq!(event.get("state").unwrap().as_str().unwrap(), "published");
    }
}

#[tokio::test]
async fn test_create_requires_organizer_role() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let user = user_token(&app).await;
    let response = app
        .request(
            "POST",
            "/api/events",
            Some(json!({ "title": "T", "date": "2025-01-01T10:00:00Z", "state": "draft" })),
            Some(&user),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_validation() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let organizer = organizer_token(&app).await;

    let response = app
        .request(
            "POST",
            "/api/events",
            Some(json!({ "title": "T", "state": "draft" })),
            Some(&organizer),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "Missing required fields (title, date, state)"
    );

    let response = app
        .request(
            "POST",
            "/api/events",
            Some(json!({ "title": "T", "date": "next tuesday", "state": "draft" })),
            Some(&organizer),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "Invalid date format"
    );
}

#[tokio::test]
async fn test_create_applies_defaults() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let organizer = organizer_token(&app).await;
    let event_id = app
        .create_event(
            &organizer,
            json!({ "title": "Bare", "date": "2025-01-01T10:00:00Z", "state": "published" }),
        )
        .await;

    let response = app
        .request("GET", &format!("/api/events/{event_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("price").unwrap().as_f64().unwrap(), 0.0);
    assert!(response.body.get("maxCapacity").unwrap().is_null());
    assert!(response.body.get("description").unwrap().is_null());
    assert!(response.body.get("imagePath").unwrap().is_null());
    assert!(response.body.get("organizer").unwrap().get("name").is_some());
}

#[tokio::test]
async fn test_update_is_partial_and_atomic() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let organizer = organizer_token(&app).await;
    let event_id = app
        .create_event(
            &organizer,
            json!({
                "title": "Original",
                "date": "2025-01-01T10:00:00Z",
                "state": "draft",
                "city": "Nice",
            }),
        )
        .await;
    let path = format!("/api/events/{event_id}");

    // Partial update leaves absent fields untouched
    let response = app
        .request("PUT", &path, Some(json!({ "city": "Lille" })), Some(&organizer))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("city").unwrap().as_str().unwrap(), "Lille");
    assert_eq!(
        response.body.get("title").unwrap().as_str().unwrap(),
        "Original"
    );

    // A bad date rejects the whole update
    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({ "title": "Changed", "date": "garbage" })),
            Some(&organizer),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "Invalid date format"
    );

    let response = app.request("GET", &path, None, Some(&organizer)).await;
    assert_eq!(
        response.body.get("title").unwrap().as_str().unwrap(),
        "Original"
    );
    assert_eq!(response.body.get("city").unwrap().as_str().unwrap(), "Lille");
}

#[tokio::test]
async fn test_update_delete_require_ownership_or_admin() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let owner = organizer_token(&app).await;
    let event_id = app
        .create_event(
            &owner,
            json!({ "title": "Mine", "date": "2025-01-01T10:00:00Z", "state": "published" }),
        )
        .await;
    let path = format!("/api/events/{event_id}");

    // Another organizer owns nothing here
    let rival = organizer_token(&app).await;
    let response = app
        .request("PUT", &path, Some(json!({ "title": "Stolen" })), Some(&rival))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("DELETE", &path, None, Some(&rival)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // An admin may update
    let admin = admin_token(&app).await;
    let response = app
        .request("PUT", &path, Some(json!({ "title": "Moderated" })), Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Unknown events are a 404, not a 403
    let response = app
        .request(
            "PUT",
            &format!("/api/events/{}", uuid::Uuid::new_v4()),
            Some(json!({ "title": "X" })),
            Some(&rival),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_cascades_to_registrations() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let organizer = organizer_token(&app).await;
    let event_id = app
        .create_event(
            &organizer,
            json!({ "title": "Gone", "date": "2025-01-01T10:00:00Z", "state": "published" }),
        )
        .await;

    let user = user_token(&app).await;
    let response = app
        .request(
            "POST",
            &format!("/api/registerEvent/{event_id}"),
            None,
            Some(&user),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "DELETE",
            &format!("/api/events/{event_id}"),
            None,
            Some(&organizer),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request("GET", &format!("/api/events/{event_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("GET", "/api/registerEvent/my", None, Some(&user))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.get("id").unwrap().as_str().unwrap())
        .collect();
    assert!(!ids.contains(&event_id.as_str()));
}

#[tokio::test]
async fn test_list_my_events() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    // A plain user is denied
    let user = user_token(&app).await;
    let response = app.request("GET", "/api/events/my", None, Some(&user)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // An organizer with no events gets the contract's 404
    let organizer = organizer_token(&app).await;
    let response = app
        .request("GET", "/api/events/my", None, Some(&organizer))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "No events found for this organizer"
    );

    let event_id = app
        .create_event(
            &organizer,
            json!({ "title": "Mine", "date": "2025-01-01T10:00:00Z", "state": "draft" }),
        )
        .await;

    let response = app
        .request("GET", "/api/events/my", None, Some(&organizer))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.get("id").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![event_id.as_str()]);
}

#[tokio::test]
async fn test_search_filters() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let organizer = organizer_token(&app).await;
    let marker = uuid::Uuid::new_v4().simple().to_string();
    let city = format!("Paris-{marker}");

    let early_id = app
        .create_event(
            &organizer,
            json!({
                "title": "Early",
                "date": "2025-03-01T10:00:00Z",
                "state": "published",
                "city": city,
            }),
        )
        .await;
    let late_id = app
        .create_event(
            &organizer,
            json!({
                "title": "Late",
                "date": "2025-09-01T10:00:00Z",
                "state": "published",
                "city": city,
            }),
        )
        .await;
    // A draft in the same city must never surface
    app.create_event(
        &organizer,
        json!({
            "title": "Hidden",
            "date": "2025-03-01T10:00:00Z",
            "state": "draft",
            "city": city,
        }),
    )
    .await;

    // City substring match, published only
    let response = app
        .request("GET", &format!("/api/events/search?city={marker}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.get("id").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&early_id.as_str()));
    assert!(ids.contains(&late_id.as_str()));

    // Substring match is case-sensitive
    let response = app
        .request(
            "GET",
            &format!("/api/events/search?city={}", marker.to_uppercase()),
            None,
            None,
        )
        .await;
    assert!(response.body.as_array().unwrap().is_empty());

    // The state parameter cannot reveal drafts
    let response = app
        .request(
            "GET",
            &format!("/api/events/search?city={marker}&state=draft"),
            None,
            None,
        )
        .await;
    assert!(response.body.as_array().unwrap().is_empty());

    // Inclusive date bounds
    let response = app
        .request(
            "GET",
            &format!("/api/events/search?city={marker}&dateFrom=2025-06-01T00:00:00Z"),
            None,
            None,
        )
        .await;
    let ids: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.get("id").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![late_id.as_str()]);

    let response = app
        .request(
            "GET",
            &format!("/api/events/search?city={marker}&dateTo=2025-03-01T10:00:00Z"),
            None,
            None,
        )
        .await;
    let ids: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.get("id").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![early_id.as_str()]);

    // Unparseable bounds name the offending parameter
    let response = app
        .request("GET", "/api/events/search?dateFrom=garbage", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "Invalid dateFrom format"
    );

    let response = app
        .request("GET", "/api/events/search?dateTo=garbage", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "Invalid dateTo format"
    );
}
