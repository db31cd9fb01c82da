//! Login handler for `POST /api/v1/login`.
//!
//! Unknown email and wrong password both answer 401 with the same message,
//! so a caller cannot probe which addresses are registered.

use axum::extract::State;
use axum::http::StatusCode;
use bcrypt::verify;
use serde_json::json;

use crate::auth::handlers::types::LoginRequest;
use crate::auth::sessions::issue_token;
use crate::auth::users::get_user_by_email;
use crate::envelope::ApiSuccess;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::server::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<ApiSuccess, ApiError> {
    let (email, password) = request.validate()?;

    let user = get_user_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login rejected: unknown email");
            ApiError::unauthenticated("Unauthorized Access")
        })?;

    if !verify(&password, &user.password_hash)? {
        tracing::warn!("login rejected: wrong password for {}", user.user_id);
        return Err(ApiError::unauthenticated("Unauthorized Access"));
    }

    let token = issue_token(&state.token_keys, user.user_id, user.role)
        .map_err(|e| ApiError::internal(format!("token signing failed: {e}")))?;

    tracing::info!("user logged in: {}", user.user_id);

    Ok(ApiSuccess::with_data(
        StatusCode::OK,
        json!({ "token": token }),
        "Login successful.",
    ))
}
