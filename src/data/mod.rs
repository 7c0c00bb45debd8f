//! Decoded data representation.
//!
//! This module holds the in-memory form of a decoded ASCII response: a
//! [`Document`] of named [`Variable`]s, each with a dense array and its
//! [`Coordinate`] axes.

mod coordinate;
mod document;
mod variable;

pub use coordinate::Coordinate;
pub use document::Document;
pub use variable::Variable;

/// Sentinel stored in every cell no data row wrote.
pub const MISSING: f64 = f64::NAN;

/// Check whether a cell holds the missing sentinel.
///
/// Never compare against [`MISSING`] with `==`; NaN is unequal to itself.
pub fn is_missing(value: f64) -> bool {
    value.is_nan()
}
