//! The dynamic value model.
//!
//! A [`Value`] is a tagged union over everything a record may hold. Containers
//! ([`Record`], [`List`], [`Callable`]) are reference handles: cloning a handle
//! aliases the same container, and [`Value::strict_equals`] compares them by
//! identity.

mod callable;
mod canonical;
mod list;
mod record;

pub use callable::Callable;
pub use canonical::{to_canonical_json, to_json};
pub use list::List;
pub use record::Record;

use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};
use std::fmt;

/// Interior storage shared by container handles.
pub(crate) struct Shared<T> {
    pub(crate) data: RefCell<T>,
    pub(crate) frozen: Cell<bool>,
}

impl<T> Shared<T> {
    pub(crate) fn new(data: T) -> Self {
        Self {
            data: RefCell::new(data),
            frozen: Cell::new(false),
        }
    }
}

/// A value stored in a record.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    Array(List),
    Record(Record),
    Function(Callable),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for `Undefined` and `Null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::Array(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Callable> {
        match self {
            Value::Function(callable) => Some(callable),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Array(_) => "array",
            Value::Record(_) => "record",
            Value::Function(_) => "function",
        }
    }

    /// Strict equality: scalars compare by value (`NaN` is unequal to itself),
    /// dates by instant, containers by identity.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Record(a), Value::Record(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// Structural equality, see [`crate::is_equal`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::equal::is_equal(self, other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("Undefined"),
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Date(d) => write!(f, "Date({})", d.to_rfc3339()),
            Value::Array(list) => write!(f, "Array({list:?})"),
            Value::Record(record) => write!(f, "Record({record:?})"),
            Value::Function(callable) => write!(f, "Function({callable:?})"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::Array(list)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Value::Function(callable)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().collect()),
            serde_json::Value::Object(obj) => Value::Record(obj.into_iter().collect()),
        }
    }
}

impl From<serde_json::Value> for Record {
    /// Non-object JSON converts to an empty record.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(obj) => obj.into_iter().collect(),
            _ => Record::new(),
        }
    }
}
