//! Set construction macros
//!
//! This module provides the `set!` macro, the literal form of
//! [`Set::from_elements`](crate::sets::Set::from_elements).

/// Macro to build a set from a list of elements
///
/// Duplicates collapse silently. `set![]` builds an empty set.
///
/// # Example
///
/// ```rust
/// use mathset::prelude::*;
///
/// let animals = set!["cat", "dog", "cow", "cat"];
/// assert_eq!(animals.size(), 3);
///
/// let empty: Set<u8> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::sets::Set::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sets::Set::from_elements([$($element),+])
    };
}

// Re-export the macro for convenience
pub use set;
