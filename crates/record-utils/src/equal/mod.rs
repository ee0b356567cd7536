//! Equality of values.
//!
//! Two flavours are provided: [`deep_equal`] compares canonical JSON renderings
//! and is therefore sensitive to record key order, while [`is_equal`] walks
//! both values and ignores key order.

mod deep_equal;
mod is_equal;

pub use deep_equal::deep_equal;
pub use is_equal::is_equal;
