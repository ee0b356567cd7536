use crate::error::RecordError;
use crate::value::{to_canonical_json, Value};

/// Compares the canonical JSON renderings of `a` and `b`.
///
/// Records with the same entries in a different insertion order render
/// differently and compare unequal. Members that do not render (`Undefined`,
/// functions) are ignored.
///
/// # Errors
///
/// Returns [`RecordError::Cycle`] if either value is cyclic.
///
/// # Examples
///
/// ```
/// use record_utils::{deep_equal, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"a": 1, "b": {"c": 2}}));
/// let b = Value::from(json!({"a": 1, "b": {"c": 2}}));
/// let reordered = Value::from(json!({"b": {"c": 2}, "a": 1}));
///
/// assert!(deep_equal(&a, &b).unwrap());
/// assert!(!deep_equal(&a, &reordered).unwrap());
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> Result<bool, RecordError> {
    Ok(to_canonical_json(a)? == to_canonical_json(b)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Callable, Record};
    use serde_json::json;

    fn eq(a: serde_json::Value, b: serde_json::Value) -> bool {
        deep_equal(&Value::from(a), &Value::from(b)).unwrap()
    }

    #[test]
    fn test_equal_records() {
        assert!(eq(json!({"a": 1, "b": {"c": 2}}), json!({"a": 1, "b": {"c": 2}})));
        assert!(eq(json!({"a": {"b": 1}, "c": 2}), json!({"a": {"b": 1}, "c": 2})));
    }

    #[test]
    fn test_unequal_records() {
        assert!(!eq(json!({"a": 1, "b": {"c": 2}}), json!({"a": 1, "b": {"c": 3}})));
        assert!(!eq(json!({"a": 1, "b": 2}), json!({"a": 1, "b": {"c": 2}})));
    }

    #[test]
    fn test_key_order_matters() {
        assert!(!eq(json!({"a": 1, "b": 2}), json!({"b": 2, "a": 1})));
    }

    #[test]
    fn test_scalars_and_arrays() {
        assert!(eq(json!([1, 2, 3]), json!([1, 2, 3])));
        assert!(!eq(json!([1, 2, 3]), json!([1, 2])));
        assert!(!eq(json!(1), json!("1")));
        assert!(eq(json!(null), json!(null)));
    }

    #[test]
    fn test_undefined_members_are_ignored() {
        let a = Record::from(json!({"a": 1}));
        a.set("u", Value::Undefined).unwrap();
        a.set("f", Callable::new(|_| Value::Null)).unwrap();
        let b = Value::from(json!({"a": 1}));
        assert!(deep_equal(&Value::Record(a), &b).unwrap());
    }

    #[test]
    fn test_top_level_undefined() {
        assert!(deep_equal(&Value::Undefined, &Value::Undefined).unwrap());
        assert!(!deep_equal(&Value::Undefined, &Value::Null).unwrap());
    }

    #[test]
    fn test_cycle_is_an_error() {
        let a = Record::new();
        a.set("self", a.clone()).unwrap();
        let result = deep_equal(&Value::Record(a), &Value::from(json!({})));
        assert!(matches!(result, Err(RecordError::Cycle)));
    }
}
