//! Canonical JSON rendering of values.
//!
//! Rules: `Undefined` and function members of a record are skipped and become
//! `null` inside arrays; dates render as RFC 3339 UTC strings with millisecond
//! precision; non-finite numbers render as `null`; integral numbers in the
//! safe-integer range render without a fraction. Record keys keep their
//! insertion order.

use super::Value;
use crate::error::RecordError;
use chrono::SecondsFormat;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::cell::{Cell, RefCell};

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Default)]
struct Walk {
    ancestors: RefCell<Vec<*const ()>>,
    cycle: Cell<bool>,
}

impl Walk {
    fn enter<E: serde::ser::Error>(&self, ptr: *const ()) -> Result<(), E> {
        let mut ancestors = self.ancestors.borrow_mut();
        if ancestors.contains(&ptr) {
            self.cycle.set(true);
            return Err(E::custom("cyclic structure"));
        }
        ancestors.push(ptr);
        Ok(())
    }

    fn leave(&self) {
        self.ancestors.borrow_mut().pop();
    }
}

struct Canonical<'a> {
    value: &'a Value,
    walk: &'a Walk,
}

impl Canonical<'_> {
    fn child<'b>(&'b self, value: &'b Value) -> Canonical<'b> {
        Canonical {
            value,
            walk: self.walk,
        }
    }
}

fn is_skipped(value: &Value) -> bool {
    matches!(value, Value::Undefined | Value::Function(_))
}

fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !n.is_finite() {
        return serializer.serialize_unit();
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return serializer.serialize_i64(n as i64);
    }
    serializer.serialize_f64(n)
}

impl Serialize for Canonical<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Undefined | Value::Null | Value::Function(_) => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Date(d) => {
                serializer.serialize_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Array(list) => {
                self.walk.enter(list.as_ptr())?;
                let items = list.to_vec();
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in &items {
                    seq.serialize_element(&self.child(item))?;
                }
                self.walk.leave();
                seq.end()
            }
            Value::Record(record) => {
                self.walk.enter(record.as_ptr())?;
                let entries: Vec<(String, Value)> = record
                    .entries()
                    .into_iter()
                    .filter(|(_, v)| !is_skipped(v))
                    .collect();
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in &entries {
                    map.serialize_entry(key, &self.child(value))?;
                }
                self.walk.leave();
                map.end()
            }
        }
    }
}

impl Serialize for Value {
    /// A top-level `Undefined` or function serializes as `null`.
    ///
    /// Fails with a custom serializer error on cyclic values.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let walk = Walk::default();
        Canonical { value: self, walk: &walk }.serialize(serializer)
    }
}

fn classify(walk: &Walk, err: serde_json::Error) -> RecordError {
    if walk.cycle.get() {
        RecordError::Cycle
    } else {
        RecordError::Json(err)
    }
}

/// Renders `value` as canonical JSON text.
///
/// Returns `Ok(None)` when there is nothing to render (a top-level `Undefined`
/// or function).
///
/// # Errors
///
/// Returns [`RecordError::Cycle`] if `value` contains a cycle.
///
/// # Example
///
/// ```
/// use record_utils::{to_canonical_json, Value};
/// use serde_json::json;
///
/// let value = Value::from(json!({"b": 1.0, "a": [true, null]}));
/// assert_eq!(to_canonical_json(&value).unwrap().as_deref(), Some(r#"{"b":1,"a":[true,null]}"#));
/// assert_eq!(to_canonical_json(&Value::Undefined).unwrap(), None);
/// ```
pub fn to_canonical_json(value: &Value) -> Result<Option<String>, RecordError> {
    if is_skipped(value) {
        return Ok(None);
    }
    let walk = Walk::default();
    serde_json::to_string(&Canonical { value, walk: &walk })
        .map(Some)
        .map_err(|err| classify(&walk, err))
}

/// Converts `value` into a `serde_json::Value` using the canonical rules.
///
/// # Errors
///
/// Returns [`RecordError::Cycle`] if `value` contains a cycle.
pub fn to_json(value: &Value) -> Result<serde_json::Value, RecordError> {
    let walk = Walk::default();
    serde_json::to_value(Canonical { value, walk: &walk }).map_err(|err| classify(&walk, err))
}
