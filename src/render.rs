//! Deterministic rendering of sets
//!
//! Hash iteration order changes between runs and between equal sets, so
//! human-readable output sorts elements before writing them.

use core::fmt;

use itertools::Itertools;

use crate::sets::Set;

/// Writes `elements` as `{a, b, c}`, sorted, each element rendered with `Debug`
pub(crate) fn write_sorted<'a, T, I>(f: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    T: fmt::Debug + Ord + 'a,
    I: Iterator<Item = &'a T>,
{
    let body = elements
        .sorted()
        .format_with(", ", |element, emit| emit(&format_args!("{element:?}")));
    write!(f, "{{{body}}}")
}

/// Display adapter rendering elements with their own `Display`, sorted
///
/// Created by [`Set::display`]. Useful for string sets, which `Display`
/// on the set itself renders quoted.
///
/// # Example
/// ```rust
/// use mathset::prelude::*;
///
/// let pets = set!["dog", "cat"];
/// assert_eq!(pets.to_string(), r#"{"cat", "dog"}"#);
/// assert_eq!(pets.display().to_string(), "{cat, dog}");
/// ```
pub struct SortedDisplay<'a, T> {
    set: &'a Set<T>,
}

impl<'a, T> SortedDisplay<'a, T> {
    pub(crate) fn new(set: &'a Set<T>) -> Self {
        Self { set }
    }
}

impl<T: fmt::Display + Ord> fmt::Display for SortedDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.set.iter().sorted().format(", "))
    }
}
