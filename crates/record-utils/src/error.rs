use thiserror::Error;

/// Errors produced by record operations.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A write was attempted on a frozen record.
    #[error("cannot assign to key `{key}` of a frozen record")]
    FrozenRecord { key: String },
    /// A write was attempted on a frozen list.
    #[error("cannot write index {index} of a frozen list")]
    FrozenList { index: usize },
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// Canonical serialization reached a container that is already being serialized.
    #[error("cannot serialize a cyclic structure")]
    Cycle,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
