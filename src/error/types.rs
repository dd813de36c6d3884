//! Core error types for mathset
//!
//! This module defines the error type returned by the few fallible
//! operations in the library.

use core::fmt;

use crate::value::ValueKind;

/// Main error type for set operations
///
/// Set operations are total over well-typed elements. The only failures are
/// values that cannot take part in equality, and conversions between
/// element representations that do not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// The value cannot honour `Eq`/`Hash` (a NaN float is never equal to itself)
    Unhashable(ValueKind),
    /// An element of one kind was used where another kind was required
    IncompatibleElement {
        /// Kind required by the conversion
        expected: ValueKind,
        /// Kind actually found
        found: ValueKind,
    },
}

impl SetError {
    /// Returns true if the error stems from a type mismatch between elements
    pub const fn is_type_error(&self) -> bool {
        match self {
            Self::IncompatibleElement { .. } => true,
            Self::Unhashable(_) => false,
        }
    }

    /// Returns the kind of the offending value
    pub const fn offending_kind(&self) -> ValueKind {
        match self {
            Self::Unhashable(kind) => *kind,
            Self::IncompatibleElement { found, .. } => *found,
        }
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Unhashable(_) => "Hashing",
            Self::IncompatibleElement { .. } => "Type",
        }
    }
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unhashable(kind) => write!(f, "{kind} value cannot be stored in a set"),
            Self::IncompatibleElement { expected, found } => {
                write!(f, "expected {expected} element, found {found}")
            }
        }
    }
}

impl core::error::Error for SetError {}

// Plain `From` conversions reach `try_add` with an `Infallible` error
impl From<core::convert::Infallible> for SetError {
    fn from(never: core::convert::Infallible) -> Self {
        match never {}
    }
}

/// Result type for set operations
pub type SetResult<T> = Result<T, SetError>;
