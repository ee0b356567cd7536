use crate::value::{Record, Value};
use std::collections::HashSet;

/// Returns a new record with every entry of `record` except `key`.
///
/// # Examples
///
/// ```
/// use record_utils::{remove_property, Record};
/// use serde_json::json;
///
/// let record = Record::from(json!({"a": 1, "b": 2}));
/// let result = remove_property(&record, "b");
/// assert_eq!(result, Record::from(json!({"a": 1})));
/// assert_eq!(record.len(), 2);
/// ```
pub fn remove_property(record: &Record, key: &str) -> Record {
    record
        .entries()
        .into_iter()
        .filter(|(k, _)| k != key)
        .collect()
}

/// Own-key membership, independent of the stored value.
pub fn has_property(record: &Record, key: &str) -> bool {
    record.contains_key(key)
}

/// Returns the value stored under `key`, or `fallback` when the key is
/// missing or holds `Undefined`.
pub fn get_property(record: &Record, key: &str, fallback: impl Into<Value>) -> Value {
    match record.get(key) {
        Some(value) if !value.is_undefined() => value,
        _ => fallback.into(),
    }
}

/// Returns a new record with the listed keys that exist in `record`, in list
/// order.
pub fn pick<K: AsRef<str>>(record: &Record, keys: &[K]) -> Record {
    let picked = Record::new();
    for key in keys {
        let key = key.as_ref();
        if let Some(value) = record.get(key) {
            picked.insert_entry(key.to_string(), value);
        }
    }
    picked
}

/// Returns a new record without the listed keys. Unknown keys are ignored.
pub fn omit<K: AsRef<str>>(record: &Record, keys: &[K]) -> Record {
    let excluded: HashSet<&str> = keys.iter().map(|k| k.as_ref()).collect();
    record
        .entries()
        .into_iter()
        .filter(|(k, _)| !excluded.contains(k.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Record {
        Record::from(json!({"a": 1, "b": 2, "c": {"d": 3}}))
    }

    #[test]
    fn test_remove_property() {
        let record = fixture();
        let result = remove_property(&record, "b");
        assert_eq!(result, Record::from(json!({"a": 1, "c": {"d": 3}})));
        assert!(!has_property(&result, "b"));
        assert_eq!(record, fixture());
    }

    #[test]
    fn test_remove_missing_property() {
        let record = fixture();
        let result = remove_property(&record, "nonExistentProperty");
        assert_eq!(result, record);
        assert!(!result.ptr_eq(&record));
    }

    #[test]
    fn test_remove_from_empty() {
        assert!(remove_property(&Record::new(), "anything").is_empty());
    }

    #[test]
    fn test_remove_keeps_nested_reference() {
        let record = fixture();
        let result = remove_property(&record, "a");
        assert!(result.get("c").unwrap().strict_equals(&record.get("c").unwrap()));
    }

    #[test]
    fn test_remove_large_record() {
        let record: Record = (0..1000).map(|i| (format!("key{i}"), i)).collect();
        record.set("b", 2).unwrap();
        let result = remove_property(&record, "b");
        assert_eq!(result.len(), 1000);
        assert!(!has_property(&result, "b"));
    }

    #[test]
    fn test_has_property() {
        let record = fixture();
        assert!(has_property(&record, "a"));
        assert!(!has_property(&record, "z"));
        assert!(!has_property(&Record::new(), "a"));
    }

    #[test]
    fn test_has_property_with_undefined_value() {
        let record = Record::new();
        record.set("u", Value::Undefined).unwrap();
        assert!(has_property(&record, "u"));
    }

    #[test]
    fn test_get_property() {
        let record = fixture();
        assert_eq!(get_property(&record, "a", 0), Value::Number(1.0));
        assert_eq!(get_property(&record, "z", 10), Value::Number(10.0));
        assert_eq!(
            get_property(&record, "c", Value::from(json!({"d": 0}))),
            Value::from(json!({"d": 3}))
        );
    }

    #[test]
    fn test_get_property_undefined_uses_fallback() {
        let record = Record::new();
        record.set("u", Value::Undefined).unwrap();
        record.set("n", Value::Null).unwrap();
        assert_eq!(get_property(&record, "u", "fallback"), Value::from("fallback"));
        assert!(get_property(&record, "n", "fallback").is_null());
    }

    #[test]
    fn test_pick() {
        let record = fixture();
        assert_eq!(
            pick(&record, &["a", "c"]),
            Record::from(json!({"a": 1, "c": {"d": 3}}))
        );
        assert_eq!(pick(&record, &["b", "c"]), Record::from(json!({"b": 2, "c": {"d": 3}})));
        assert!(pick::<&str>(&record, &[]).is_empty());
    }

    #[test]
    fn test_pick_skips_missing_and_follows_list_order() {
        let record = fixture();
        let result = pick(&record, &["c", "nonExistentProperty", "a"]);
        assert_eq!(result.keys(), vec!["c", "a"]);
    }

    #[test]
    fn test_omit() {
        let record = fixture();
        assert_eq!(omit(&record, &["a", "c"]), Record::from(json!({"b": 2})));
        assert_eq!(omit(&record, &["a", "b"]), Record::from(json!({"c": {"d": 3}})));
        assert!(omit(&record, &["a", "b", "c"]).is_empty());
    }

    #[test]
    fn test_pick_and_omit_leave_input_unchanged() {
        let record = fixture();
        let picked = pick(&record, &["a", "c"]);
        picked.set("a", 10).unwrap();
        assert_eq!(record, fixture());

        let omitted = omit(&record, &["a"]);
        omitted.set("b", 20).unwrap();
        assert_eq!(record, fixture());
        assert_eq!(record.keys(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_omit_nothing_or_unknown() {
        let record = fixture();
        assert_eq!(omit::<&str>(&record, &[]), record);
        assert_eq!(omit(&record, &["nonExistentProperty"]), record);
    }
}
