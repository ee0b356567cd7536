use crate::value::Value;
use std::collections::HashSet;

/// Container pairs currently being compared.
type InProgress = HashSet<(*const (), *const ())>;

/// Structural equality that ignores record key order.
///
/// Values that are strictly equal (same scalar, same instant, same container)
/// are equal. Otherwise both sides must be containers of the same kind: records
/// need the same key set with equal values per key, lists the same length with
/// equal elements. Functions are only equal to themselves.
///
/// The comparison follows the variant tags rather than bare key sets: a record
/// never equals a list (`{}` vs `[]`, `{"0": 1}` vs `[1]`), and dates are
/// equal only when they hold the same instant.
///
/// A pair of containers met again while it is still being compared is taken as
/// equal, so cyclic structures compare without looping.
///
/// # Examples
///
/// ```
/// use record_utils::{is_equal, Value};
/// use serde_json::json;
///
/// assert!(is_equal(
///     &Value::from(json!({"a": {"b": 1}, "c": 2})),
///     &Value::from(json!({"c": 2, "a": {"b": 1}})),
/// ));
/// assert!(!is_equal(
///     &Value::from(json!({"a": 1, "b": 2})),
///     &Value::from(json!({"a": 1, "b": {"c": 2}})),
/// ));
/// ```
pub fn is_equal(a: &Value, b: &Value) -> bool {
    let mut in_progress = InProgress::new();
    equal_values(a, b, &mut in_progress)
}

fn equal_values(a: &Value, b: &Value, in_progress: &mut InProgress) -> bool {
    if a.strict_equals(b) {
        return true;
    }
    match (a, b) {
        (Value::Record(x), Value::Record(y)) => {
            if !in_progress.insert((x.as_ptr(), y.as_ptr())) {
                return true;
            }
            if x.len() != y.len() {
                return false;
            }
            for (key, value) in x.entries() {
                let Some(other) = y.get(&key) else {
                    return false;
                };
                if !equal_values(&value, &other, in_progress) {
                    return false;
                }
            }
            true
        }
        (Value::Array(x), Value::Array(y)) => {
            if !in_progress.insert((x.as_ptr(), y.as_ptr())) {
                return true;
            }
            let (xs, ys) = (x.to_vec(), y.to_vec());
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys.iter())
                    .all(|(l, r)| equal_values(l, r, in_progress))
        }
        _ => false,
    }
}
