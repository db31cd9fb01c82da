//! Router assembly.
//!
//! Public routes (signup, login, the welcome banner) are registered
//! directly; everything from [`configure_api_routes`] is wrapped in the
//! auth middleware via `route_layer`, so unmatched paths still fall
//! through to the enveloped 404 instead of a bare 401.

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::auth::{login, logout, signup};
use crate::error::ApiError;
use crate::middleware::auth::auth_middleware;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

async fn welcome() -> &'static str {
    "Welcome to the Music Library API"
}

async fn not_found() -> ApiError {
    ApiError::not_found("Resource Doesn't Exist")
}

/// Build the full application router.
pub fn create_router(state: AppState) -> Router<()> {
    let protected = configure_api_routes(Router::new())
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    let router = Router::new()
        .route("/", get(welcome))
        .route("/api/v1/signup", post(signup))
        .route("/api/v1/login", post(login))
        // Capitalized path kept for wire compatibility.
        .route("/api/v1/Logout", get(logout))
        .merge(protected)
        .fallback(not_found)
        .layer(CorsLayer::permissive());

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn welcome_is_plain_text() {
        assert_eq!(welcome().await, "Welcome to the Music Library API");
    }

    #[tokio::test]
    async fn fallback_is_enveloped_404() {
        use axum::response::IntoResponse;
        let response = not_found().await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
