//! Conversion between nested records and single-level records keyed by paths.
//!
//! A path joins the keys leading to a leaf with a delimiter (`.` by default),
//! e.g. `"b.d.e"`. Keys that themselves contain the delimiter cannot be told
//! apart from nesting and are not supported.

use crate::value::{Record, Value};
use std::collections::HashSet;

/// Options for [`flatten_with`] and [`unflatten_with`].
#[derive(Debug, Clone)]
pub struct FlattenOptions {
    /// Separator between path segments. Default is `.`.
    pub delimiter: char,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self { delimiter: '.' }
    }
}

/// Flattens nested records into one record keyed by dot-joined paths.
///
/// Lists and scalars are stored as-is under their full path. An empty nested
/// record is kept as a leaf so that [`unflatten`] restores it.
///
/// # Examples
///
/// ```
/// use record_utils::{flatten, unflatten, Record};
/// use serde_json::json;
///
/// let nested = Record::from(json!({"a": 1, "b": {"c": 2, "d": {"e": 3}}}));
/// let flat = flatten(&nested);
/// assert_eq!(flat, Record::from(json!({"a": 1, "b.c": 2, "b.d.e": 3})));
/// assert_eq!(unflatten(&flat), nested);
/// ```
pub fn flatten(record: &Record) -> Record {
    flatten_with(record, "", &FlattenOptions::default())
}

/// Like [`flatten`], with every path starting at `prefix`.
pub fn flatten_with_prefix(record: &Record, prefix: &str) -> Record {
    flatten_with(record, prefix, &FlattenOptions::default())
}

/// Flattens with an explicit prefix and options. An empty prefix adds nothing.
pub fn flatten_with(record: &Record, prefix: &str, options: &FlattenOptions) -> Record {
    let output = Record::new();
    let prefix = (!prefix.is_empty()).then_some(prefix);
    flatten_into(record, prefix, options.delimiter, &output);
    output
}

/// `prefix` is `None` only at the root; an empty key below the root is still a
/// path segment.
fn flatten_into(record: &Record, prefix: Option<&str>, delimiter: char, output: &Record) {
    for (key, value) in record.entries() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}{delimiter}{key}"),
            None => key,
        };
        match value {
            Value::Record(nested) if !nested.is_empty() => {
                flatten_into(&nested, Some(&path), delimiter, output)
            }
            leaf => output.insert_entry(path, leaf),
        }
    }
}

/// Rebuilds nested records from a record keyed by dot-joined paths.
///
/// Intermediate records are created as needed. A non-record value that sits
/// where an intermediate record is required is replaced. Records taken from
/// the input are copied before anything is written into them, so the input is
/// never modified.
pub fn unflatten(record: &Record) -> Record {
    unflatten_with(record, &FlattenOptions::default())
}

/// Like [`unflatten`], splitting paths on `options.delimiter`.
pub fn unflatten_with(record: &Record, options: &FlattenOptions) -> Record {
    let root = Record::new();
    // Records created here, safe to write into.
    let mut owned: HashSet<*const ()> = HashSet::from([root.as_ptr()]);

    for (path, value) in record.entries() {
        let mut segments: Vec<&str> = path.split(options.delimiter).collect();
        let leaf = segments.pop().unwrap_or_default();

        let mut current = root.clone();
        for segment in segments {
            let next = match current.get(segment) {
                Some(Value::Record(existing)) if owned.contains(&existing.as_ptr()) => existing,
                Some(Value::Record(existing)) => {
                    let copy = existing.shallow_copy();
                    owned.insert(copy.as_ptr());
                    current.insert_entry(segment.to_string(), Value::Record(copy.clone()));
                    copy
                }
                other => {
                    if let Some(replaced) = other {
                        tracing::trace!(
                            path = %path,
                            segment,
                            kind = replaced.kind(),
                            "unflatten replacing value with intermediate record"
                        );
                    }
                    let created = Record::new();
                    owned.insert(created.as_ptr());
                    current.insert_entry(segment.to_string(), Value::Record(created.clone()));
                    created
                }
            };
            current = next;
        }
        current.insert_entry(leaf.to_string(), value);
    }
    root
}
