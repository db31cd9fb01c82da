//! Error taxonomy and conversion to enveloped HTTP responses.

pub mod conversion;
pub mod types;

pub use types::ApiError;
