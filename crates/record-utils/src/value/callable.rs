use super::{Record, Value};
use crate::error::RecordError;
use std::fmt;
use std::rc::Rc;

type NativeFn = dyn Fn(&[Value]) -> Value;

/// A function value with its own properties.
#[derive(Clone)]
pub struct Callable {
    func: Rc<NativeFn>,
    properties: Record,
}

impl Callable {
    pub fn new(func: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self {
            func: Rc::new(func),
            properties: Record::new(),
        }
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }

    /// The function's own properties.
    pub fn properties(&self) -> &Record {
        &self.properties
    }

    /// # Errors
    ///
    /// Returns [`RecordError::FrozenRecord`] if the function has been frozen.
    pub fn set_property(
        &self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, RecordError> {
        self.properties.set(key, value)
    }

    pub fn ptr_eq(&self, other: &Callable) -> bool {
        self.as_ptr() == other.as_ptr()
    }

    pub(crate) fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.func) as *const ()
    }

    /// A distinct callable that forwards every invocation to `self` and starts
    /// with a shallow copy of its properties.
    pub(crate) fn forwarding(&self) -> Callable {
        let target = Rc::clone(&self.func);
        Self {
            func: Rc::new(move |args: &[Value]| target(args)),
            properties: self.properties.shallow_copy(),
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("ptr", &self.as_ptr())
            .field("properties", &self.properties)
            .finish()
    }
}
