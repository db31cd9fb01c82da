//! Logout handler for `GET /api/v1/Logout`.
//!
//! Tokens are stateless, so logout is an acknowledgement: it only checks
//! that a bearer credential was presented, without verifying it.

use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};

use crate::envelope::ApiSuccess;
use crate::error::ApiError;

pub async fn logout(headers: HeaderMap) -> Result<ApiSuccess, ApiError> {
    if !headers.contains_key(AUTHORIZATION) {
        return Err(ApiError::invalid_input("Bad Request"));
    }

    Ok(ApiSuccess::message(
        StatusCode::OK,
        "User logged out successfully.",
    ))
}
