//! Conversion of `ApiError` into enveloped HTTP responses.
//!
//! 4xx responses carry the error's message in `message` and leave `error`
//! null. 5xx responses say "Internal Server Error" and put the diagnostic
//! detail in `error`; internals are never leaked through 4xx paths.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::Value;

use crate::envelope::Envelope;
use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (message, error) = if status.is_server_error() {
            let detail = self.to_string();
            tracing::error!("request failed: {detail}");
            ("Internal Server Error".to_string(), Some(detail))
        } else {
            (self.to_string(), None)
        };

        let envelope = Envelope::new(status, Value::Null, message, error);
        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_message_and_no_detail() {
        let response = ApiError::not_found("Artist not found.").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn server_errors_hide_internals() {
        let response = ApiError::internal("secret detail").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
