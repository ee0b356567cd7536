//! Structural transformations that build new records.

use crate::value::{Record, Value};

/// Replaces every leaf value with `f(value, key)`, recursing into nested
/// records so the result has the same shape as the input.
///
/// Lists, dates and functions are leaves.
///
/// # Examples
///
/// ```
/// use record_utils::{map_properties, Record, Value};
/// use serde_json::json;
///
/// let record = Record::from(json!({"a": 1, "b": 2, "c": {"d": 3}}));
/// let doubled = map_properties(&record, |value, _| match value {
///     Value::Number(n) => Value::Number(n * 2.0),
///     other => other.clone(),
/// });
/// assert_eq!(doubled, Record::from(json!({"a": 2, "b": 4, "c": {"d": 6}})));
/// ```
pub fn map_properties<F>(record: &Record, mut f: F) -> Record
where
    F: FnMut(&Value, &str) -> Value,
{
    map_leaves(record, &mut f)
}

/// Same as [`map_properties`].
pub fn transform<F>(record: &Record, f: F) -> Record
where
    F: FnMut(&Value, &str) -> Value,
{
    map_properties(record, f)
}

fn map_leaves<F>(record: &Record, f: &mut F) -> Record
where
    F: FnMut(&Value, &str) -> Value,
{
    let output = Record::new();
    for (key, value) in record.entries() {
        let mapped = match &value {
            Value::Record(nested) => Value::Record(map_leaves(nested, f)),
            leaf => f(leaf, key.as_str()),
        };
        output.insert_entry(key, mapped);
    }
    output
}

/// Keeps the top-level entries for which `predicate(value, key)` holds.
///
/// Nested records are not filtered internally: they are tested as a single
/// value and kept or dropped as a whole.
pub fn filter_properties<P>(record: &Record, mut predicate: P) -> Record
where
    P: FnMut(&Value, &str) -> bool,
{
    record
        .entries()
        .into_iter()
        .filter(|(key, value)| predicate(value, key.as_str()))
        .collect()
}

/// Renames every top-level key with `f`. Values, nested records included, are
/// carried over untouched.
///
/// When two keys map to the same new key the later value wins and keeps the
/// position of the first.
pub fn map_keys<F>(record: &Record, mut f: F) -> Record
where
    F: FnMut(&str) -> String,
{
    let output = Record::new();
    for (key, value) in record.entries() {
        let renamed = f(key.as_str());
        if output.contains_key(&renamed) {
            tracing::debug!(from = %key, to = %renamed, "map_keys collision, last write wins");
        }
        output.insert_entry(renamed, value);
    }
    output
}
