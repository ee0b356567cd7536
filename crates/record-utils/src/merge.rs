//! Shallow, deep and custom merging of records.
//!
//! None of these functions modify their arguments. Values that are carried over
//! unchanged are shared with the inputs, not copied.

use crate::value::{Record, Value};

/// Shallow merge: a copy of `target` with every entry of `source` written over
/// it.
///
/// # Examples
///
/// ```
/// use record_utils::{merge, Record};
/// use serde_json::json;
///
/// let target = Record::from(json!({"a": 1, "b": 2}));
/// let source = Record::from(json!({"b": 3, "c": 4}));
/// assert_eq!(merge(&target, &source), Record::from(json!({"a": 1, "b": 3, "c": 4})));
/// ```
pub fn merge(target: &Record, source: &Record) -> Record {
    let output = target.shallow_copy();
    for (key, value) in source.entries() {
        output.insert_entry(key, value);
    }
    output
}

/// Recursive merge.
///
/// When both sides hold a record under the same key the two records are merged
/// recursively. Any other source value, lists included, replaces the target
/// value wholesale.
///
/// # Examples
///
/// ```
/// use record_utils::{merge_deep, Record};
/// use serde_json::json;
///
/// let target = Record::from(json!({"a": {"b": 1}}));
/// let source = Record::from(json!({"a": {"c": 2}, "d": 3}));
/// assert_eq!(
///     merge_deep(&target, &source),
///     Record::from(json!({"a": {"b": 1, "c": 2}, "d": 3}))
/// );
/// ```
pub fn merge_deep(target: &Record, source: &Record) -> Record {
    let output = target.shallow_copy();
    for (key, source_value) in source.entries() {
        let merged = match (&source_value, target.get(&key)) {
            (Value::Record(src), Some(Value::Record(dst))) => Value::Record(merge_deep(&dst, src)),
            _ => source_value,
        };
        output.insert_entry(key, merged);
    }
    output
}

/// Merges `source` into a copy of `target`, resolving keys present on both
/// sides with `combine(target_value, source_value)`.
///
/// Keys only in `source` are copied as-is; `combine` is not called for them.
pub fn merge_with<F>(target: &Record, source: &Record, mut combine: F) -> Record
where
    F: FnMut(&Value, &Value) -> Value,
{
    let output = target.shallow_copy();
    for (key, source_value) in source.entries() {
        let value = match target.get(&key) {
            Some(target_value) => combine(&target_value, &source_value),
            None => source_value,
        };
        output.insert_entry(key, value);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(value: serde_json::Value) -> Record {
        Record::from(value)
    }

    fn add(a: &Value, b: &Value) -> Value {
        match (a, b) {
            (Value::Number(x), Value::Number(y)) => Value::Number(x + y),
            _ => Value::Undefined,
        }
    }

    #[test]
    fn test_merge() {
        assert_eq!(merge(&rec(json!({"a": 1})), &rec(json!({"b": 2}))), rec(json!({"a": 1, "b": 2})));
        assert_eq!(merge(&Record::new(), &rec(json!({"a": 1}))), rec(json!({"a": 1})));
    }

    #[test]
    fn test_merge_overwrites_in_target_position() {
        let result = merge(&rec(json!({"a": 1, "b": 2})), &rec(json!({"b": 3, "c": 4})));
        assert_eq!(result, rec(json!({"a": 1, "b": 3, "c": 4})));
        assert_eq!(result.keys(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_merge_shares_values_and_leaves_inputs() {
        let target = rec(json!({"a": {"x": 1}, "b": 2}));
        let source = rec(json!({"b": {"y": 2}}));
        let result = merge(&target, &source);
        assert!(result.get("a").unwrap().strict_equals(&target.get("a").unwrap()));
        assert!(result.get("b").unwrap().strict_equals(&source.get("b").unwrap()));
        assert_eq!(target, rec(json!({"a": {"x": 1}, "b": 2})));
        assert_eq!(source, rec(json!({"b": {"y": 2}})));
    }

    #[test]
    fn test_merge_deep() {
        let target = rec(json!({"a": {"b": 1}}));
        let source = rec(json!({"a": {"c": 2}, "d": 3}));
        assert_eq!(merge_deep(&target, &source), rec(json!({"a": {"b": 1, "c": 2}, "d": 3})));
        assert_eq!(target, rec(json!({"a": {"b": 1}})));
        assert_eq!(source, rec(json!({"a": {"c": 2}, "d": 3})));
    }

    #[test]
    fn test_merge_deep_arrays_replace() {
        let target = rec(json!({"a": {"b": 1, "c": [1, 2]}}));
        let source = rec(json!({"a": {"c": [3, 4], "d": 5}, "e": 6}));
        assert_eq!(
            merge_deep(&target, &source),
            rec(json!({"a": {"b": 1, "c": [3, 4], "d": 5}, "e": 6}))
        );
    }

    #[test]
    fn test_merge_deep_record_replaces_scalar_and_vice_versa() {
        let target = rec(json!({"a": 1, "b": {"x": 1}}));
        let source = rec(json!({"a": {"y": 2}, "b": 3}));
        assert_eq!(merge_deep(&target, &source), rec(json!({"a": {"y": 2}, "b": 3})));
    }

    #[test]
    fn test_merge_deep_empty_source() {
        let target = rec(json!({"a": {"b": 1}}));
        assert_eq!(merge_deep(&target, &Record::new()), target);
    }

    #[test]
    fn test_merge_with_sum() {
        let target = rec(json!({"a": 1, "b": 2}));
        let source = rec(json!({"b": 3, "c": 4}));
        assert_eq!(merge_with(&target, &source, add), rec(json!({"a": 1, "b": 5, "c": 4})));
        assert_eq!(target, rec(json!({"a": 1, "b": 2})));
        assert_eq!(source, rec(json!({"b": 3, "c": 4})));
    }

    #[test]
    fn test_merge_with_different_result_type() {
        let target = rec(json!({"a": 1, "b": 2}));
        let source = rec(json!({"b": 3, "c": 4}));
        let result = merge_with(&target, &source, |t, s| {
            Value::String(format!("{}-{}", t.as_f64().unwrap_or_default(), s.as_f64().unwrap_or_default()))
        });
        assert_eq!(result, rec(json!({"a": 1, "b": "2-3", "c": 4})));
    }

    #[test]
    fn test_merge_with_only_calls_combine_for_shared_keys() {
        let mut calls = 0;
        let result = merge_with(&rec(json!({"a": 1})), &rec(json!({"b": 2, "c": 3})), |t, s| {
            calls += 1;
            add(t, s)
        });
        assert_eq!(calls, 0);
        assert_eq!(result, rec(json!({"a": 1, "b": 2, "c": 3})));
    }

    #[test]
    fn test_merge_with_empty_source() {
        let target = rec(json!({"a": 1}));
        assert_eq!(merge_with(&target, &Record::new(), add), target);
    }
}
