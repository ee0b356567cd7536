use crate::value::{List, Record, Value};
use std::collections::HashMap;

/// Originals already visited in one `deep_clone` call, keyed by identity.
type CloneMap = HashMap<*const (), Value>;

/// Creates a structurally independent copy of `value`.
///
/// Records and lists are copied recursively into fresh, unfrozen containers.
/// Each original container is registered before its children are visited, so
/// shared sub-structures stay shared and cycles (including self references) are
/// reproduced in the copy. Functions become new callables that forward to the
/// original and carry a shallow copy of its properties. Scalars and dates are
/// copied by value.
///
/// # Examples
///
/// ```
/// use record_utils::{deep_clone, Record, Value};
///
/// let original = Record::new();
/// original.set("self", original.clone()).unwrap();
///
/// let copy = deep_clone(&Value::Record(original.clone()));
/// let copy = copy.as_record().unwrap();
/// assert!(!copy.ptr_eq(&original));
/// assert!(copy.get("self").unwrap().as_record().unwrap().ptr_eq(copy));
/// ```
pub fn deep_clone(value: &Value) -> Value {
    let mut seen = CloneMap::new();
    clone_value(value, &mut seen)
}

fn clone_value(value: &Value, seen: &mut CloneMap) -> Value {
    match value {
        Value::Array(list) => {
            if let Some(existing) = seen.get(&list.as_ptr()) {
                tracing::trace!("deep_clone reusing already cloned list");
                return existing.clone();
            }
            let copy = List::new();
            seen.insert(list.as_ptr(), Value::Array(copy.clone()));
            for item in list.to_vec() {
                copy.push_entry(clone_value(&item, seen));
            }
            Value::Array(copy)
        }
        Value::Record(record) => {
            if let Some(existing) = seen.get(&record.as_ptr()) {
                tracing::trace!("deep_clone reusing already cloned record");
                return existing.clone();
            }
            let copy = Record::new();
            seen.insert(record.as_ptr(), Value::Record(copy.clone()));
            for (key, item) in record.entries() {
                copy.insert_entry(key, clone_value(&item, seen));
            }
            Value::Record(copy)
        }
        Value::Function(callable) => Value::Function(callable.forwarding()),
        Value::Date(date) => Value::Date(*date),
        scalar => scalar.clone(),
    }
}
