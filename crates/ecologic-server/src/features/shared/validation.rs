//! Shared validation utilities
//!
//! Payloads arrive as untyped JSON and are converted into typed commands
//! through [`FromPayload`]. Conversion walks every field and records each
//! violation, so one response reports all problems with a payload.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ecologic_server::features::shared::validation::{required_string, require_object};
//!
//! let mut errors = ValidationErrors::new();
//! if let Some(object) = require_object(&payload, &mut errors) {
//!     let status = required_string(object, "status", 0, &mut errors);
//! }
//! ```

use ecologic_common::ValidationErrors;
use serde_json::{Map, Value};

pub const MSG_REQUIRED: &str = "field required";
pub const MSG_NOT_STRING: &str = "must be a string";
pub const MSG_NOT_NUMBER: &str = "must be a valid number";
pub const MSG_NOT_OBJECT: &str = "must be a JSON object";
pub const MSG_NOT_ARRAY: &str = "must be a JSON array";

/// Conversion from an untyped JSON payload into a validated value
pub trait FromPayload: Sized {
    fn from_payload(payload: &Value) -> Result<Self, ValidationErrors>;
}

/// Arrays validate every element; failures are reported as `[index].field`
impl<T: FromPayload> FromPayload for Vec<T> {
    fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let elements = payload
            .as_array()
            .ok_or_else(|| ValidationErrors::single("body", MSG_NOT_ARRAY))?;

        let mut errors = ValidationErrors::new();
        let mut items = Vec::with_capacity(elements.len());

        for (index, element) in elements.iter().enumerate() {
            match T::from_payload(element) {
                Ok(item) => items.push(item),
                Err(element_errors) => {
                    errors.extend_prefixed(&format!("[{}]", index), element_errors)
                },
            }
        }

        errors.into_result(items)
    }
}

/// Require the payload to be a JSON object
pub fn require_object<'a>(
    payload: &'a Value,
    errors: &mut ValidationErrors,
) -> Option<&'a Map<String, Value>> {
    let object = payload.as_object();
    if object.is_none() {
        errors.push("body", MSG_NOT_OBJECT);
    }
    object
}

/// Read a mandatory string field of at least `min_chars` characters
///
/// Length is measured in characters, and whitespace counts.
pub fn required_string(
    object: &Map<String, Value>,
    field: &str,
    min_chars: usize,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, MSG_REQUIRED);
            None
        },
        Some(Value::String(s)) if s.chars().count() < min_chars => {
            errors.push(
                field,
                format!(
                    "must have at least {} character{}",
                    min_chars,
                    if min_chars == 1 { "" } else { "s" }
                ),
            );
            None
        },
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(field, MSG_NOT_STRING);
            None
        },
    }
}

/// Read a mandatory finite number
///
/// JSON numbers and numeric strings such as `"25.3"` are accepted; anything
/// that does not yield a finite `f64` is rejected.
pub fn required_number(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<f64> {
    let parsed = match object.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, MSG_REQUIRED);
            return None;
        },
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match parsed {
        Some(value) if value.is_finite() => Some(value),
        _ => {
            errors.push(field, MSG_NOT_NUMBER);
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_required_string() {
        let obj = object(json!({"a": "x", "b": "", "c": 5, "d": null}));
        let mut errors = ValidationErrors::new();

        assert_eq!(required_string(&obj, "a", 1, &mut errors), Some("x".to_string()));
        assert_eq!(required_string(&obj, "b", 0, &mut errors), Some(String::new()));
        assert!(errors.is_empty());

        assert_eq!(required_string(&obj, "b", 1, &mut errors), None);
        assert_eq!(required_string(&obj, "c", 1, &mut errors), None);
        assert_eq!(required_string(&obj, "d", 1, &mut errors), None);
        assert_eq!(required_string(&obj, "missing", 1, &mut errors), None);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.errors()[0].message, "must have at least 1 character");
        assert_eq!(errors.errors()[1].message, MSG_NOT_STRING);
        assert_eq!(errors.errors()[3].message, MSG_REQUIRED);
    }

    #[test]
    fn test_whitespace_counts_towards_length() {
        let obj = object(json!({"a": " "}));
        let mut errors = ValidationErrors::new();
        assert_eq!(required_string(&obj, "a", 1, &mut errors), Some(" ".to_string()));
    }

    #[test]
    fn test_required_number_accepts_numbers_and_numeric_strings() {
        let obj = object(json!({"int": 3, "float": 25.3, "text": " 12.5 ", "neg": "-4e2"}));
        let mut errors = ValidationErrors::new();

        assert_eq!(required_number(&obj, "int", &mut errors), Some(3.0));
        assert_eq!(required_number(&obj, "float", &mut errors), Some(25.3));
        assert_eq!(required_number(&obj, "text", &mut errors), Some(12.5));
        assert_eq!(required_number(&obj, "neg", &mut errors), Some(-400.0));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_required_number_rejects_non_numeric() {
        let obj = object(json!({
            "word": "invalid_value",
            "nan": "NaN",
            "inf": "inf",
            "bool": true,
            "list": [1]
        }));
        let mut errors = ValidationErrors::new();

        for field in ["word", "nan", "inf", "bool", "list"] {
            assert_eq!(required_number(&obj, field, &mut errors), None, "{}", field);
        }
        assert_eq!(errors.len(), 5);
        assert!(errors.errors().iter().all(|e| e.message == MSG_NOT_NUMBER));
    }

    #[test]
    fn test_require_object() {
        let mut errors = ValidationErrors::new();
        assert!(require_object(&json!([1, 2]), &mut errors).is_none());
        assert!(errors.has_field("body"));
    }

    struct Named(String);

    impl FromPayload for Named {
        fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
            let mut errors = ValidationErrors::new();
            let name = require_object(payload, &mut errors)
                .and_then(|obj| required_string(obj, "name", 1, &mut errors));
            errors.into_result(())?;
            Ok(Named(name.unwrap_or_default()))
        }
    }

    #[test]
    fn test_vec_reports_indexed_errors() {
        let err = Vec::<Named>::from_payload(&json!([{"name": "ok"}, {"name": ""}, {}]))
            .err()
            .unwrap();

        assert_eq!(err.len(), 2);
        assert!(err.has_field("[1].name"));
        assert!(err.has_field("[2].name"));
    }

    #[test]
    fn test_vec_accepts_valid_and_empty_arrays() {
        let items = Vec::<Named>::from_payload(&json!([{"name": "a"}, {"name": "b"}])).unwrap();
        assert_eq!(items.iter().map(|n| n.0.as_str()).collect::<Vec<_>>(), vec!["a", "b"]);

        assert!(Vec::<Named>::from_payload(&json!([])).unwrap().is_empty());
        assert!(Vec::<Named>::from_payload(&json!({"name": "a"})).is_err());
    }
}
