//! Hashable floating-point element
//!
//! `f64` is neither `Eq` nor `Hash` because NaN is not equal to itself.
//! [`Float`] rejects NaN on construction and normalises `-0.0` to `0.0`,
//! which makes bitwise comparison agree with numeric equality.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::{SetError, SetResult};
use crate::value::ValueKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-NaN `f64` usable as a set element
///
/// # Example
/// ```rust
/// use mathset::prelude::*;
///
/// let half = Float::new(0.5)?;
/// assert_eq!(half.get(), 0.5);
/// assert!(Float::new(f64::NAN).is_err());
/// assert_eq!(Float::new(-0.0)?, Float::new(0.0)?);
/// # Ok::<(), mathset::error::SetError>(())
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Float(f64);

impl Float {
    /// Creates a float element
    ///
    /// # Returns
    /// `Err(SetError::Unhashable)` if `value` is NaN
    pub fn new(value: f64) -> SetResult<Self> {
        if value.is_nan() {
            return Err(SetError::Unhashable(ValueKind::Float));
        }
        // -0.0 == 0.0 numerically but not bitwise
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Returns the wrapped value
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Float {}

impl Hash for Float {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Float {
    type Error = SetError;

    fn try_from(value: f64) -> SetResult<Self> {
        Self::new(value)
    }
}

impl From<Float> for f64 {
    fn from(value: Float) -> Self {
        value.0
    }
}

impl fmt::Debug for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
