use super::{Shared, Value};
use crate::error::RecordError;
use std::fmt;
use std::rc::Rc;

/// A shared, ordered sequence of values.
#[derive(Clone)]
pub struct List(Rc<Shared<Vec<Value>>>);

impl List {
    pub fn new() -> Self {
        List(Rc::new(Shared::new(Vec::new())))
    }

    pub fn len(&self) -> usize {
        self.0.data.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.data.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.data.borrow().get(index).cloned()
    }

    /// Snapshot of the elements.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.data.borrow().clone()
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// - [`RecordError::FrozenList`] if the list is frozen
    /// - [`RecordError::IndexOutOfBounds`] if `index >= len`
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Result<Value, RecordError> {
        self.check_writable(index)?;
        let mut items = self.0.data.borrow_mut();
        let len = items.len();
        let slot = items
            .get_mut(index)
            .ok_or(RecordError::IndexOutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, value.into()))
    }

    pub fn push(&self, value: impl Into<Value>) -> Result<(), RecordError> {
        self.check_writable(self.len())?;
        self.0.data.borrow_mut().push(value.into());
        Ok(())
    }

    pub fn pop(&self) -> Result<Option<Value>, RecordError> {
        self.check_writable(self.len().saturating_sub(1))?;
        Ok(self.0.data.borrow_mut().pop())
    }

    pub fn freeze(&self) {
        self.0.frozen.set(true);
    }

    pub fn is_frozen(&self) -> bool {
        self.0.frozen.get()
    }

    pub fn ptr_eq(&self, other: &List) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }

    pub(crate) fn push_entry(&self, value: Value) {
        self.0.data.borrow_mut().push(value);
    }

    fn check_writable(&self, index: usize) -> Result<(), RecordError> {
        if self.is_frozen() {
            tracing::debug!(index, "rejected write to frozen list");
            return Err(RecordError::FrozenList { index });
        }
        Ok(())
    }
}

impl Default for List {
    fn default() -> Self {
        List::new()
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let items = iter.into_iter().map(Into::into).collect();
        List(Rc::new(Shared::new(items)))
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match super::to_canonical_json(&Value::Array(self.clone())) {
            Ok(Some(json)) => f.write_str(&json),
            _ => write!(f, "<list len={}>", self.len()),
        }
    }
}
