use crate::value::Value;
use std::collections::HashSet;

/// Freezes `value` and every container reachable from it, then returns the
/// same value.
///
/// Records, lists and the property records of functions are frozen in place;
/// later writes through any handle fail with a `Frozen*` error. Scalars and
/// dates are left alone. Each container is visited once, so shared and cyclic
/// structures terminate, and freezing twice is a no-op.
///
/// # Examples
///
/// ```
/// use record_utils::{deep_freeze, Record, Value};
/// use serde_json::json;
///
/// let record = Record::from(json!({"a": 1, "b": {"c": 2}}));
/// let frozen = deep_freeze(Value::Record(record.clone()));
/// assert!(frozen.as_record().unwrap().ptr_eq(&record));
///
/// let inner = record.get("b").unwrap();
/// assert!(inner.as_record().unwrap().set("c", 3).is_err());
/// ```
pub fn deep_freeze(value: Value) -> Value {
    let mut visited = HashSet::new();
    freeze_value(&value, &mut visited);
    value
}

fn freeze_value(value: &Value, visited: &mut HashSet<*const ()>) {
    match value {
        Value::Record(record) => {
            if !visited.insert(record.as_ptr()) {
                return;
            }
            record.freeze();
            for item in record.values() {
                freeze_value(&item, visited);
            }
        }
        Value::Array(list) => {
            if !visited.insert(list.as_ptr()) {
                return;
            }
            list.freeze();
            for item in list.to_vec() {
                freeze_value(&item, visited);
            }
        }
        Value::Function(callable) => {
            if !visited.insert(callable.as_ptr()) {
                return;
            }
            freeze_value(&Value::Record(callable.properties().clone()), visited);
        }
        _ => {}
    }
}

/// Whether writes to `value` are rejected. Non-containers are always frozen.
pub fn is_frozen(value: &Value) -> bool {
    match value {
        Value::Record(record) => record.is_frozen(),
        Value::Array(list) => list.is_frozen(),
        Value::Function(callable) => callable.properties().is_frozen(),
        _ => true,
    }
}
