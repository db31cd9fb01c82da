//! Shared helpers for the integration suites.
//!
//! Each test gets its own router over a fresh in-memory SQLite database;
//! requests go through the full middleware stack via `oneshot`, no port
//! binding involved.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use tunedeck::auth::sessions::TokenKeys;
use tunedeck::routes::create_router;
use tunedeck::server::state::AppState;

/// Build the application router over a fresh in-memory database.
///
/// A single connection keeps every query on the same in-memory store.
pub async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    sqlx::migrate!().run(&pool).await.expect("migrations");

    create_router(AppState::new(pool, TokenKeys::from_secret("test-secret")))
}

/// Fire one request through the router and decode the enveloped body.
///
/// Returns `Value::Null` for empty bodies (204) and non-JSON bodies.
pub async fn send(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

pub async fn signup(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/v1/signup",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

/// Log in and return the issued token; panics on failure.
pub async fn login_token(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["data"]["token"]
        .as_str()
        .expect("token in login response")
        .to_string()
}

/// Register the first user (who becomes Admin) and return their token.
pub async fn admin_token(app: &Router) -> String {
    let (status, _) = signup(app, "admin@test.com", "admin-pass").await;
    assert_eq!(status, StatusCode::CREATED);
    login_token(app, "admin@test.com", "admin-pass").await
}

/// Have the admin create an account with the given role, then log it in.
pub async fn user_token(app: &Router, admin: &str, email: &str, role: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/users/add-user",
        Some(admin),
        Some(json!({ "email": email, "password": "pw", "role": role })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "add-user failed: {body}");
    login_token(app, email, "pw").await
}

/// Create an artist as the given caller and return its id.
pub async fn create_artist(app: &Router, token: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/artists/add-artist",
        Some(token),
        Some(json!({ "name": name, "grammy": false, "hidden": false })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "add-artist failed: {body}");
    body["data"]["artist_id"].as_str().expect("artist_id").to_string()
}

/// Create an album under the artist and return its id.
pub async fn create_album(app: &Router, token: &str, artist_id: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/albums/add-album",
        Some(token),
        Some(json!({ "artist_id": artist_id, "name": name, "year": 2020, "hidden": false })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "add-album failed: {body}");
    body["data"]["album_id"].as_str().expect("album_id").to_string()
}
