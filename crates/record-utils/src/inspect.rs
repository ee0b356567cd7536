use crate::value::{Record, Value};

/// Check if a record has no own entries.
///
/// # Examples
///
/// ```
/// use record_utils::{is_empty, Record};
/// use serde_json::json;
///
/// assert!(is_empty(&Record::new()));
/// assert!(!is_empty(&Record::from(json!({"a": {}}))));
/// ```
pub fn is_empty(record: &Record) -> bool {
    record.is_empty()
}

/// The record's keys in insertion order.
pub fn keys(record: &Record) -> Vec<String> {
    record.keys()
}

/// The record's values in insertion order.
pub fn values(record: &Record) -> Vec<Value> {
    record.values()
}

/// The record's `(key, value)` pairs in insertion order.
pub fn entries(record: &Record) -> Vec<(String, Value)> {
    record.entries()
}
