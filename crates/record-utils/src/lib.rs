//! record-utils - Utilities for dynamic string-keyed records
//!
//! This crate manipulates [`Record`]s: insertion-ordered, string-keyed maps of
//! [`Value`]s that may nest further records, lists, dates and functions. It
//! covers property access, shallow and deep merging, deep cloning (cycles
//! included), deep freezing, equality, and structural transformations such as
//! flattening to dotted paths.
//!
//! # Example
//!
//! ```
//! use record_utils::{deep_freeze, merge_deep, flatten, Record, Value};
//! use serde_json::json;
//!
//! let defaults = Record::from(json!({"server": {"host": "localhost", "port": 80}}));
//! let overrides = Record::from(json!({"server": {"port": 8080}}));
//!
//! let config = merge_deep(&defaults, &overrides);
//! assert_eq!(
//!     flatten(&config),
//!     Record::from(json!({"server.host": "localhost", "server.port": 8080}))
//! );
//!
//! let config = deep_freeze(Value::Record(config));
//! assert!(config.as_record().unwrap().set("debug", true).is_err());
//! ```

pub mod access;
pub mod deep_clone;
pub mod equal;
pub mod error;
pub mod flatten;
pub mod freeze;
pub mod inspect;
pub mod merge;
pub mod transform;
pub mod value;

// Re-exports for convenience
pub use access::{get_property, has_property, omit, pick, remove_property};
pub use deep_clone::deep_clone;
pub use equal::{deep_equal, is_equal};
pub use error::RecordError;
pub use flatten::{flatten, flatten_with, flatten_with_prefix, unflatten, unflatten_with, FlattenOptions};
pub use freeze::{deep_freeze, is_frozen};
pub use inspect::{entries, is_empty, keys, values};
pub use merge::{merge, merge_deep, merge_with};
pub use transform::{filter_properties, map_keys, map_properties, transform};
pub use value::{to_canonical_json, to_json, Callable, List, Record, Value};
