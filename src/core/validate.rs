//! Generic validation guards
//!
//! Guards are plain functions returning `Result<(), ApiError>`; a handler
//! runs its chain with `?`, so the first failing guard terminates the request
//! and no later guard runs. The guards here are shared by both resources and
//! are parameterized by the resource label; resource-specific guards live
//! next to their handlers.

use crate::core::error::{ApiError, ApiResult};
use serde_json::{Map, Value};

/// Guard: the named field is present in the `data` object
///
/// Presence is an explicit key check decoupled from value truthiness: a
/// numeric `0` or `false` is present (range guards deal with the value), but
/// a missing key, an explicit `null`, or an empty string counts as absent.
pub fn require_field(data: &Map<String, Value>, resource: &str, field: &str) -> ApiResult<()> {
    let present = match data.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    };

    if present {
        Ok(())
    } else {
        Err(ApiError::invalid_input(format!(
            "{} must include a {}",
            resource, field
        )))
    }
}

/// Guard: a body-supplied `id`, when present, matches the route identifier
///
/// An absent, null, or empty body id passes (the route id wins); a non-empty
/// body id must equal the route id exactly.
pub fn id_matches(data: &Map<String, Value>, resource: &str, route_id: &str) -> ApiResult<()> {
    let body_id = match data.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };

    match body_id {
        Some(id) if id != route_id => Err(ApiError::invalid_input(format!(
            "{} id does not match route id. {}: {}, Route: {}",
            resource, resource, id, route_id
        ))),
        _ => Ok(()),
    }
}

/// Read a field as a strictly positive integer
///
/// Returns `None` for missing fields, non-numbers, floats, and values ≤ 0.
pub fn positive_integer(value: Option<&Value>) -> Option<i64> {
    value.and_then(Value::as_i64).filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    // === require_field ===

    #[test]
    fn test_require_field_missing_key_fails() {
        let data = data(json!({}));
        let err = require_field(&data, "Dish", "name").unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a name");
    }

    #[test]
    fn test_require_field_null_fails() {
        let data = data(json!({ "description": null }));
        let err = require_field(&data, "Dish", "description").unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a description");
    }

    #[test]
    fn test_require_field_empty_string_fails() {
        let data = data(json!({ "deliverTo": "" }));
        let err = require_field(&data, "Order", "deliverTo").unwrap_err();
        assert_eq!(err.to_string(), "Order must include a deliverTo");
    }

    #[test]
    fn test_require_field_zero_number_passes() {
        // Zero is present; the range guard is responsible for rejecting it.
        let data = data(json!({ "price": 0 }));
        assert!(require_field(&data, "Dish", "price").is_ok());
    }

    #[test]
    fn test_require_field_empty_array_passes() {
        // An empty array is present; the shape guard rejects it with its
        // own message.
        let data = data(json!({ "dishes": [] }));
        assert!(require_field(&data, "Order", "dishes").is_ok());
    }

    #[test]
    fn test_require_field_string_passes() {
        let data = data(json!({ "name": "Pad Thai" }));
        assert!(require_field(&data, "Dish", "name").is_ok());
    }

    // === id_matches ===

    #[test]
    fn test_id_matches_absent_body_id_passes() {
        let data = data(json!({ "name": "Pad Thai" }));
        assert!(id_matches(&data, "Dish", "abc").is_ok());
    }

    #[test]
    fn test_id_matches_empty_body_id_passes() {
        let data = data(json!({ "id": "" }));
        assert!(id_matches(&data, "Dish", "abc").is_ok());
    }

    #[test]
    fn test_id_matches_equal_ids_pass() {
        let data = data(json!({ "id": "abc" }));
        assert!(id_matches(&data, "Dish", "abc").is_ok());
    }

    #[test]
    fn test_id_matches_mismatch_fails_naming_both() {
        let data = data(json!({ "id": "xyz" }));
        let err = id_matches(&data, "Order", "abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order id does not match route id. Order: xyz, Route: abc"
        );
    }

    #[test]
    fn test_id_matches_numeric_body_id_mismatch_fails() {
        let data = data(json!({ "id": 42 }));
        assert!(id_matches(&data, "Dish", "abc").is_err());
    }

    // === positive_integer ===

    #[test]
    fn test_positive_integer_accepts_positive() {
        assert_eq!(positive_integer(Some(&json!(3))), Some(3));
    }

    #[test]
    fn test_positive_integer_rejects_zero_and_negative() {
        assert_eq!(positive_integer(Some(&json!(0))), None);
        assert_eq!(positive_integer(Some(&json!(-2))), None);
    }

    #[test]
    fn test_positive_integer_rejects_float_and_string() {
        assert_eq!(positive_integer(Some(&json!(2.5))), None);
        assert_eq!(positive_integer(Some(&json!("3"))), None);
    }

    #[test]
    fn test_positive_integer_rejects_missing() {
        assert_eq!(positive_integer(None), None);
    }
}
