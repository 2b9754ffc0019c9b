//! Validation error types
//!
//! Inbound payloads are checked field by field. Every violation is recorded as
//! a [`FieldError`] and the whole set travels as [`ValidationErrors`], so a
//! client sees all problems with a payload in one response.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single constraint violation on one field of a payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted path of the offending field (e.g. `value`, `[2].sensor_id`)
    pub field: String,
    /// Human readable description of the violation
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collection of field violations for one payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(transparent)]
#[error("Invalid payload: {}", join_errors(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a set holding exactly one violation
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    /// Merge another set, prefixing each field path (used for array elements)
    pub fn extend_prefixed(&mut self, prefix: &str, other: ValidationErrors) {
        self.0.extend(other.0.into_iter().map(|e| FieldError {
            field: format!("{}.{}", prefix, e.field),
            message: e.message,
        }));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns `Ok(value)` when no violation was recorded
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_field() {
        let mut errors = ValidationErrors::new();
        errors.push("sensor_id", "must not be empty");
        errors.push("value", "must be a number");

        let text = errors.to_string();
        assert!(text.contains("sensor_id: must not be empty"));
        assert!(text.contains("value: must be a number"));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(7).unwrap(), 7);

        let err = ValidationErrors::single("status", "field required")
            .into_result(())
            .unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.has_field("status"));
    }

    #[test]
    fn test_extend_prefixed() {
        let mut outer = ValidationErrors::new();
        outer.extend_prefixed("[3]", ValidationErrors::single("value", "must be a number"));

        assert!(outer.has_field("[3].value"));
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let errors = ValidationErrors::single("work_order_id", "must not be empty");
        let json = serde_json::to_value(&errors).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{"field": "work_order_id", "message": "must not be empty"}])
        );
    }
}
