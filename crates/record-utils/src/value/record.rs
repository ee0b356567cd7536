use super::{Shared, Value};
use crate::error::RecordError;
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

/// A shared, insertion-ordered, string-keyed mapping.
///
/// Cloning a `Record` yields another handle to the same storage. Reads return
/// cloned values (which for containers are again handles), so no borrow of the
/// interior is ever held across a call into user code.
#[derive(Clone)]
pub struct Record(Rc<Shared<IndexMap<String, Value>>>);

impl Record {
    pub fn new() -> Self {
        Record(Rc::new(Shared::new(IndexMap::new())))
    }

    pub fn len(&self) -> usize {
        self.0.data.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.data.borrow().is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.data.borrow().contains_key(key)
    }

    /// Returns the stored value, `Some(Value::Undefined)` included.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.data.borrow().get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.0.data.borrow().keys().cloned().collect()
    }

    pub fn values(&self) -> Vec<Value> {
        self.0.data.borrow().values().cloned().collect()
    }

    /// Snapshot of the entries in insertion order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .data
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Stores `value` under `key`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::FrozenRecord`] if the record is frozen.
    pub fn set(
        &self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, RecordError> {
        let key = key.into();
        if self.is_frozen() {
            tracing::debug!(key = %key, "rejected write to frozen record");
            return Err(RecordError::FrozenRecord { key });
        }
        Ok(self.0.data.borrow_mut().insert(key, value.into()))
    }

    /// Removes `key`, keeping the order of the remaining entries.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::FrozenRecord`] if the record is frozen.
    pub fn remove(&self, key: &str) -> Result<Option<Value>, RecordError> {
        if self.is_frozen() {
            tracing::debug!(key, "rejected removal from frozen record");
            return Err(RecordError::FrozenRecord {
                key: key.to_string(),
            });
        }
        Ok(self.0.data.borrow_mut().shift_remove(key))
    }

    /// Freezes this record only; nested containers are left untouched.
    pub fn freeze(&self) {
        self.0.frozen.set(true);
    }

    pub fn is_frozen(&self) -> bool {
        self.0.frozen.get()
    }

    /// A new, unfrozen record holding the same entries.
    pub fn shallow_copy(&self) -> Record {
        Record(Rc::new(Shared::new(self.0.data.borrow().clone())))
    }

    /// Returns `true` if both handles point at the same record.
    pub fn ptr_eq(&self, other: &Record) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }

    /// Inserts without the frozen check. Only for records built by this crate.
    pub(crate) fn insert_entry(&self, key: String, value: Value) {
        self.0.data.borrow_mut().insert(key, value);
    }
}

impl Default for Record {
    fn default() -> Self {
        Record::new()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<IndexMap<String, Value>>();
        Record(Rc::new(Shared::new(map)))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        crate::equal::is_equal(&Value::Record(self.clone()), &Value::Record(other.clone()))
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match super::to_canonical_json(&Value::Record(self.clone())) {
            Ok(Some(json)) => f.write_str(&json),
            _ => write!(f, "<record len={}>", self.len()),
        }
    }
}
