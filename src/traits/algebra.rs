//! Set algebra trait definition
//!
//! This module defines the algebra shared by set-like containers. Derived
//! operations have default implementations in terms of the required ones.

/// Algebra over set-like containers
///
/// Implementations must satisfy the usual set laws:
/// - `|a ∪ b| + |a ∩ b| = |a| + |b|`
/// - `(a − b) ∩ b = ∅`
/// - union and intersection are commutative
///
/// Containment is oriented on the receiver: [`SetAlgebra::contains_all`]
/// and [`SetAlgebra::subset`] ask whether `other` fits inside `self`.
pub trait SetAlgebra: Sized {
    /// Returns the number of elements
    fn cardinality(&self) -> usize;

    /// Checks if every element of `other` is in `self` (self ⊇ other)
    fn contains_all(&self, other: &Self) -> bool;

    /// Returns the elements present in either container
    fn union(&self, other: &Self) -> Self;

    /// Returns the elements present in both containers
    fn intersection(&self, other: &Self) -> Self;

    /// Returns the elements of `self` absent from `other`
    fn difference(&self, other: &Self) -> Self;

    /// Checks if both containers hold the same elements
    fn equal(&self, other: &Self) -> bool {
        self.cardinality() == other.cardinality() && self.contains_all(other)
    }

    /// Returns the elements present in exactly one container
    fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }

    /// Checks if the containers share no element
    fn is_disjoint(&self, other: &Self) -> bool {
        self.intersection(other).cardinality() == 0
    }

    /// Checks if `other` is a subset of `self`; the receiver is the superset
    fn subset(&self, other: &Self) -> bool {
        self.contains_all(other)
    }

    /// Checks if `self` is a subset of `other`
    fn is_subset_of(&self, other: &Self) -> bool {
        other.contains_all(self)
    }

    /// Checks if `self` holds no element
    fn is_empty_set(&self) -> bool {
        self.cardinality() == 0
    }
}
