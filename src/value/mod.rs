//! Heterogeneous set elements
//!
//! A [`Set`](crate::sets::Set) holds one element type per instantiation.
//! Sets that mix booleans, integers, floats, strings and pairs use
//! [`Value`] as their element type.

pub mod float;

pub use float::Float;

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;

use crate::error::{SetError, SetResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag of a [`Value`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueKind {
    /// `Value::Bool`
    Bool,
    /// `Value::Int`
    Int,
    /// `Value::Float`
    Float,
    /// `Value::Str`
    Str,
    /// `Value::Pair`
    Pair,
}

impl ValueKind {
    /// Returns the lowercase name of the kind
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Pair => "pair",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dynamically typed set element
///
/// Values order first by variant (in declaration order), then by payload,
/// so a `Set<Value>` always renders deterministically.
///
/// # Example
/// ```rust
/// use mathset::prelude::*;
///
/// let mut mixed = Set::new();
/// mixed.add(Value::from(1));
/// mixed.add(Value::from("one"));
/// mixed.add(Value::float(1.0)?);
/// assert_eq!(mixed.size(), 3);
/// assert_eq!(mixed.to_string(), r#"{Int(1), Float(1.0), Str("one")}"#);
/// # Ok::<(), mathset::error::SetError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Boolean element
    Bool(bool),
    /// Integer element
    Int(i64),
    /// Floating-point element (never NaN)
    Float(Float),
    /// String element
    Str(String),
    /// Ordered pair, as produced by cartesian products of value sets
    Pair(Box<Value>, Box<Value>),
}

impl Value {
    /// Creates a float value
    ///
    /// # Returns
    /// `Err(SetError::Unhashable)` if `value` is NaN
    pub fn float(value: f64) -> SetResult<Self> {
        Float::new(value).map(Self::Float)
    }

    /// Creates a pair value
    pub fn pair(first: impl Into<Value>, second: impl Into<Value>) -> Self {
        Self::Pair(Box::new(first.into()), Box::new(second.into()))
    }

    /// Returns the variant tag
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::Pair(..) => ValueKind::Pair,
        }
    }

    fn mismatch(&self, expected: ValueKind) -> SetError {
        SetError::IncompatibleElement {
            expected,
            found: self.kind(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::Pair(a, b) => write!(f, "({a}, {b})"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<Float> for Value {
    fn from(value: Float) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((first, second): (A, B)) -> Self {
        Self::pair(first, second)
    }
}

impl TryFrom<f64> for Value {
    type Error = SetError;

    fn try_from(value: f64) -> SetResult<Self> {
        Self::float(value)
    }
}

impl TryFrom<Value> for bool {
    type Error = SetError;

    fn try_from(value: Value) -> SetResult<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(other.mismatch(ValueKind::Bool)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = SetError;

    fn try_from(value: Value) -> SetResult<Self> {
        match value {
            Value::Int(i) => Ok(i),
            other => Err(other.mismatch(ValueKind::Int)),
        }
    }
}

impl TryFrom<Value> for Float {
    type Error = SetError;

    fn try_from(value: Value) -> SetResult<Self> {
        match value {
            Value::Float(x) => Ok(x),
            other => Err(other.mismatch(ValueKind::Float)),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = SetError;

    fn try_from(value: Value) -> SetResult<Self> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::Str)),
        }
    }
}

impl TryFrom<Value> for (Value, Value) {
    type Error = SetError;

    fn try_from(value: Value) -> SetResult<Self> {
        match value {
            Value::Pair(a, b) => Ok((*a, *b)),
            other => Err(other.mismatch(ValueKind::Pair)),
        }
    }
}
