//! Signup, login, logout, and token-gate behavior.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use common::{admin_token, login_token, send, signup, test_app};
use tunedeck::auth::sessions::{issue_token, TokenKeys};
use tunedeck::auth::users::Role;

#[tokio::test]
async fn first_signup_is_admin_later_ones_are_viewers() {
    let app = test_app().await;

    let (status, body) = signup(&app, "first@x.com", "p1").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully.");

    let (status, _) = signup(&app, "second@x.com", "p2").await;
    assert_eq!(status, StatusCode::CREATED);

    // Only the admin can read the listing, which exposes the roles.
    let token = login_token(&app, "first@x.com", "p1").await;
    let (status, body) = send(&app, Method::GET, "/api/v1/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["role"], "Admin");
    assert_eq!(users[1]["role"], "Viewer");
    assert!(users[0].get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_signup_conflicts() {
    let app = test_app().await;

    let (status, _) = signup(&app, "dup@x.com", "pw").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = signup(&app, "dup@x.com", "other").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Email already exists.");
    assert!(body["error"].is_null());
}

#[tokio::test]
async fn signup_reports_all_missing_fields() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::POST, "/api/v1/signup", None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Bad Request, Reason: Missing Field(s) - email, password"
    );
}

#[tokio::test]
async fn login_does_not_reveal_which_credential_was_wrong() {
    let app = test_app().await;
    signup(&app, "who@x.com", "right").await;

    let (unknown_status, unknown_body) = send(
        &app,
        Method::POST,
        "/api/v1/login",
        None,
        Some(json!({ "email": "nobody@x.com", "password": "right" })),
    )
    .await;
    let (wrong_status, wrong_body) = send(
        &app,
        Method::POST,
        "/api/v1/login",
        None,
        Some(json!({ "email": "who@x.com", "password": "wrong" })),
    )
    .await;

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_body["message"], wrong_body["message"]);
    assert_eq!(unknown_body["message"], "Unauthorized Access");
}

#[tokio::test]
async fn missing_token_is_401_invalid_token_is_403() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/artists", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthorized Access");

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/artists",
        Some("not.a.token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Forbidden Access");
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let app = test_app().await;

    let foreign = TokenKeys::from_secret("not-the-server-secret");
    let token = issue_token(&foreign, Uuid::new_v4(), Role::Admin).unwrap();

    let (status, _) = send(&app, Method::GET, "/api/v1/artists", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn logout_acknowledges_bearer_without_verifying() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/Logout", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Bad Request");

    // Any bearer string is acknowledged; the token itself is stateless.
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/Logout",
        Some("whatever"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User logged out successfully.");
}

#[tokio::test]
async fn unknown_route_gets_enveloped_404() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/playlists", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Resource Doesn't Exist");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn envelope_status_mirrors_http_status() {
    let app = test_app().await;
    let token = admin_token(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/artists", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert!(body["error"].is_null());
}
