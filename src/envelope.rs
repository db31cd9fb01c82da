//! Uniform response envelope.
//!
//! Every endpoint answers with `{status, data, message, error}`; the body
//! `status` always mirrors the HTTP status code. The one exception is a
//! successful update, which is a bare 204 with no body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::Value;

/// The wire-level response wrapper.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: u16,
    pub data: Value,
    pub message: String,
    /// Diagnostic detail, populated for 5xx responses only.
    pub error: Option<String>,
}

impl Envelope {
    pub fn new(status: StatusCode, data: Value, message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            status: status.as_u16(),
            data,
            message: message.into(),
            error,
        }
    }
}

/// A successful handler outcome, rendered as an enveloped JSON response.
#[derive(Debug)]
pub struct ApiSuccess {
    status: StatusCode,
    data: Value,
    message: String,
}

impl ApiSuccess {
    /// Success with no payload beyond the confirmation message.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            data: Value::Null,
            message: message.into(),
        }
    }

    /// Success carrying a payload in `data`.
    pub fn with_data(status: StatusCode, data: Value, message: impl Into<String>) -> Self {
        Self {
            status,
            data,
            message: message.into(),
        }
    }

    /// Bare 204 with an empty body.
    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            data: Value::Null,
            message: String::new(),
        }
    }
}

impl IntoResponse for ApiSuccess {
    fn into_response(self) -> Response {
        if self.status == StatusCode::NO_CONTENT {
            return StatusCode::NO_CONTENT.into_response();
        }
        let envelope = Envelope::new(self.status, self.data, self.message, None);
        (self.status, Json(envelope)).into_response()
    }
}
