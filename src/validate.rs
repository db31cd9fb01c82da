//! Declarative request validation.
//!
//! One rule per field, applied uniformly by every create/update path:
//! required fields are collected through `FieldCheck` and reported together,
//! before the persistence layer is touched.

use uuid::Uuid;

use crate::error::ApiError;

/// Default page size for list endpoints.
pub fn default_limit() -> i64 {
    5
}

/// Parse a path id, mapping malformed UUIDs to `InvalidInput`.
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::invalid_input("Bad Request: Invalid id"))
}

/// Collector for missing required fields.
///
/// Call `required`/`required_text` for each field, then `finish` to fail
/// with the full list of missing names at once. Empty and whitespace-only
/// strings count as missing.
#[derive(Default)]
pub struct FieldCheck {
    missing: Vec<&'static str>,
}

impl FieldCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required<T>(&mut self, name: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(name);
        }
        value
    }

    pub fn required_text(&mut self, name: &'static str, value: Option<String>) -> Option<String> {
        match value {
            Some(text) if !text.trim().is_empty() => Some(text),
            _ => {
                self.missing.push(name);
                None
            }
        }
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ApiError::invalid_input(format!(
                "Bad Request, Reason: Missing Field(s) - {}",
                self.missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reports_all_missing_fields() {
        let mut check = FieldCheck::new();
        check.required_text("email", None);
        check.required::<bool>("hidden", None);
        let err = check.finish().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bad Request, Reason: Missing Field(s) - email, hidden"
        );
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut check = FieldCheck::new();
        check.required_text("name", Some("   ".to_string()));
        assert!(check.finish().is_err());
    }

    #[test]
    fn passes_when_everything_present() {
        let mut check = FieldCheck::new();
        let name = check.required_text("name", Some("Q".to_string()));
        let grammy = check.required("grammy", Some(false));
        assert!(check.finish().is_ok());
        assert_eq!(name.as_deref(), Some("Q"));
        assert_eq!(grammy, Some(false));
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(parse_id("not-a-uuid").is_err());
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }
}
