//! Authentication middleware.
//!
//! Applied as a `route_layer` on every protected route. A missing or
//! non-bearer credential is 401 Unauthenticated; a credential that fails
//! verification (bad signature, malformed payload, expired) is 403
//! Forbidden. The distinction is part of the API contract.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::auth::sessions::{verify_token, TokenKeys};
use crate::auth::users::Role;
use crate::error::ApiError;

/// Identity and role attached to the request after verification.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub role: Role,
}

/// Verify the bearer token and attach `CurrentUser` to the request.
pub async fn auth_middleware(
    State(keys): State<TokenKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            ApiError::unauthenticated("Unauthorized Access")
        })?;

    let token = header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a bearer credential");
        ApiError::unauthenticated("Unauthorized Access")
    })?;

    let claims = verify_token(&keys, token).map_err(|e| {
        tracing::warn!("token rejected: {e}");
        ApiError::forbidden("Forbidden Access")
    })?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| ApiError::forbidden("Forbidden Access"))?;

    request.extensions_mut().insert(CurrentUser {
        user_id,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Extractor for the authenticated user set by the middleware.
#[derive(Clone, Debug)]
pub struct AuthUser(pub CurrentUser);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("CurrentUser not found in request extensions");
                ApiError::unauthenticated("Unauthorized Access")
            })
    }
}
