//! Favorites: ownership scoping, triple uniqueness, category handling.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use common::{admin_token, create_artist, send, test_app, user_token};

#[tokio::test]
async fn add_then_duplicate_conflicts() {
    let app = test_app().await;
    let admin = admin_token(&app).await;
    let artist_id = create_artist(&app, &admin, "Fav").await;

    let payload = json!({ "category": "artist", "item_id": artist_id });
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/favorites/add-favorite",
        Some(&admin),
        Some(payload.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Favorite added successfully.");
    assert!(body["data"]["favorite_id"].is_string());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/favorites/add-favorite",
        Some(&admin),
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Favorite already exists.");
}

#[tokio::test]
async fn same_item_is_independent_per_user() {
    let app = test_app().await;
    let admin = admin_token(&app).await;
    let other = user_token(&app, &admin, "other@x.com", "Viewer").await;
    let artist_id = create_artist(&app, &admin, "Shared").await;

    let payload = json!({ "category": "artist", "item_id": artist_id });
    for token in [&admin, &other] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/favorites/add-favorite",
            Some(token),
            Some(payload.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn listing_is_scoped_to_caller_and_category() {
    let app = test_app().await;
    let admin = admin_token(&app).await;
    let viewer = user_token(&app, &admin, "viewer@x.com", "Viewer").await;
    let artist_id = create_artist(&app, &admin, "Mine").await;

    send(
        &app,
        Method::POST,
        "/api/v1/favorites/add-favorite",
        Some(&admin),
        Some(json!({ "category": "artist", "item_id": artist_id })),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/api/v1/favorites/add-favorite",
        Some(&admin),
        Some(json!({ "category": "album", "item_id": Uuid::new_v4() })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/favorites/artist",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let favorites = body["data"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["category"], "artist");
    assert_eq!(favorites[0]["item_id"], artist_id);

    // The other user sees none of them.
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/favorites/artist",
        Some(&viewer),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn invalid_category_is_400() {
    let app = test_app().await;
    let admin = admin_token(&app).await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/favorites/playlist",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Bad Request: Invalid category");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/favorites/add-favorite",
        Some(&admin),
        Some(json!({ "category": "playlist", "item_id": Uuid::new_v4() })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn add_reports_missing_fields() {
    let app = test_app().await;
    let admin = admin_token(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/favorites/add-favorite",
        Some(&admin),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Bad Request, Reason: Missing Field(s) - category, item_id"
    );
}

#[tokio::test]
async fn remove_only_touches_own_favorites() {
    let app = test_app().await;
    let admin = admin_token(&app).await;
    let viewer = user_token(&app, &admin, "viewer@x.com", "Viewer").await;
    let artist_id = create_artist(&app, &admin, "Contested").await;

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/v1/favorites/add-favorite",
        Some(&admin),
        Some(json!({ "category": "artist", "item_id": artist_id })),
    )
    .await;
    let favorite_id = body["data"]["favorite_id"].as_str().unwrap().to_string();

    // Someone else's favorite looks absent.
    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/favorites/remove-favorite/{favorite_id}"),
        Some(&viewer),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Favorite not found.");

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/favorites/remove-favorite/{favorite_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Favorite removed successfully.");

    // Removing twice is a 404.
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/favorites/remove-favorite/{favorite_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
