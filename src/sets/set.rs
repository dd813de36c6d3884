//! Hash-backed mathematical set
//!
//! A mutable collection of unique elements with membership, mutation and
//! set-algebra operations. Elements need `Eq + Hash`; element types that
//! lack them are rejected by the compiler at the call site.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Sub};

use hashbrown::{Equivalent, HashSet, hash_set};
use itertools::Itertools;

use crate::error::{SetError, SetResult};
use crate::render::{self, SortedDisplay};
use crate::traits::SetAlgebra;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Mathematical set of unique elements
///
/// Iteration order is unspecified and may differ between two equal sets.
/// The set is not synchronised; share it across threads behind a lock.
///
/// # Type Parameters
/// - `T`: The element type, compared with `Eq` and located with `Hash`
///
/// # Example
/// ```rust
/// use mathset::prelude::*;
///
/// let mut odds = Set::from_elements([1, 3, 5, 3]);
/// assert_eq!(odds.size(), 3); // duplicates collapse
///
/// assert!(odds.add(7));  // newly inserted
/// assert!(!odds.add(7)); // already present
///
/// let evens = set![2, 4, 6];
/// assert!(odds.intersection(&evens).is_empty());
/// assert_eq!(odds.union(&evens).size(), 7);
/// ```
#[derive(Clone)]
pub struct Set<T> {
    /// Elements in the set
    elements: HashSet<T>,
}

impl<T> Set<T> {
    /// Creates an empty set
    ///
    /// # Example
    /// ```rust
    /// use mathset::prelude::*;
    /// let set = Set::<u32>::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            elements: HashSet::new(),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: HashSet::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the set (its cardinality)
    ///
    /// # Example
    /// ```rust
    /// use mathset::prelude::*;
    /// let mut set = Set::new();
    /// assert_eq!(set.size(), 0);
    /// set.add(42);
    /// assert_eq!(set.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements in the set
    ///
    /// Same as [`Set::size`].
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Checks if the set is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns an iterator over the elements in unspecified order
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns an adapter that renders the elements with `Display`, sorted
    pub fn display(&self) -> SortedDisplay<'_, T> {
        SortedDisplay::new(self)
    }
}

impl<T: Eq + Hash> Set<T> {
    /// Creates a set seeded with `elements`
    ///
    /// Duplicates collapse silently.
    ///
    /// # Example
    /// ```rust
    /// use mathset::prelude::*;
    /// let set = Set::from_elements(["cat", "dog", "cat"]);
    /// assert_eq!(set.size(), 2);
    /// ```
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    /// Creates a set from values that must first be converted into `T`
    ///
    /// Construction is all-or-nothing: the first conversion failure is
    /// returned and no set is built.
    ///
    /// # Example
    /// ```rust
    /// use mathset::prelude::*;
    ///
    /// let floats = Set::<Float>::try_from_elements([0.5, 1.5, 0.5])?;
    /// assert_eq!(floats.size(), 2);
    /// assert!(Set::<Float>::try_from_elements([0.5, f64::NAN]).is_err());
    /// # Ok::<(), mathset::error::SetError>(())
    /// ```
    pub fn try_from_elements<I, V>(elements: I) -> SetResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: TryInto<T>,
        SetError: From<V::Error>,
    {
        elements
            .into_iter()
            .map(|value| value.try_into().map_err(SetError::from))
            .collect()
    }

    /// Adds an element to the set
    ///
    /// # Returns
    /// true if the element was newly inserted, false if it was already present
    pub fn add(&mut self, element: T) -> bool {
        let inserted = self.elements.insert(element);
        tracing::trace!(inserted, size = self.elements.len(), "set add");
        inserted
    }

    /// Converts `value` into an element and adds it
    ///
    /// The set is left untouched when the conversion fails.
    ///
    /// # Returns
    /// Ok(true) if newly inserted, Ok(false) if already present, or the
    /// conversion error
    ///
    /// # Example
    /// ```rust
    /// use mathset::prelude::*;
    ///
    /// let mut mixed = Set::<Value>::new();
    /// assert!(mixed.try_add(1)?);
    /// assert!(mixed.try_add(2.5)?);
    /// assert!(mixed.try_add(f64::NAN).is_err());
    /// assert_eq!(mixed.size(), 2);
    /// # Ok::<(), mathset::error::SetError>(())
    /// ```
    pub fn try_add<V>(&mut self, value: V) -> SetResult<bool>
    where
        V: TryInto<T>,
        SetError: From<V::Error>,
    {
        let element = value.try_into()?;
        Ok(self.add(element))
    }

    /// Removes an element from the set
    ///
    /// # Returns
    /// true if the element was present and removed, false otherwise
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        Q: Hash + Equivalent<T> + ?Sized,
    {
        let removed = self.elements.remove(element);
        tracing::trace!(removed, size = self.elements.len(), "set remove");
        removed
    }

    /// Checks if the set contains an element
    ///
    /// # Example
    /// ```rust
    /// use mathset::prelude::*;
    /// let set = set![1, 3, 5];
    /// assert!(set.has(&3));
    /// assert!(!set.has(&4));
    /// ```
    pub fn has<Q>(&self, element: &Q) -> bool
    where
        Q: Hash + Equivalent<T> + ?Sized,
    {
        self.elements.contains(element)
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    /// Shrinks the allocation as much as possible
    pub fn shrink_to_fit(&mut self) {
        self.elements.shrink_to_fit();
    }

    /// Keeps only the elements for which `keep` returns true
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.retain(keep);
    }

    /// Checks if both sets hold exactly the same elements
    ///
    /// Independent of insertion order and of duplicate insertions.
    ///
    /// # Example
    /// ```rust
    /// use mathset::prelude::*;
    /// assert!(set![1, 2, 3].equal(&set![3, 2, 1]));
    /// assert!(set![1, 2, 3, 1, 2].equal(&set![1, 2, 3]));
    /// assert!(!set![1, 2, 3].equal(&set![1, 2, 4]));
    /// ```
    pub fn equal(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().all(|element| other.has(element))
    }

    /// Checks if `other` is a subset of this set
    ///
    /// The receiver is the candidate superset: `a.subset(&b)` holds when
    /// every element of `b` is in `a`. Use [`Set::is_subset_of`] for the
    /// reverse reading.
    ///
    /// # Example
    /// ```rust
    /// use mathset::prelude::*;
    /// let set = set![1, 3, 5];
    /// assert!(set.subset(&set![1, 5]));
    /// assert!(set.subset(&Set::new()));
    /// assert!(!set.subset(&set![1, 2]));
    /// ```
    pub fn subset(&self, other: &Self) -> bool {
        other.size() <= self.size() && other.iter().all(|element| self.has(element))
    }

    /// Checks if this set is a subset of `other` (self ⊆ other)
    pub fn is_subset_of(&self, other: &Self) -> bool {
        other.subset(self)
    }

    /// Checks if this set is a superset of `other` (self ⊇ other)
    ///
    /// Same as [`Set::subset`].
    pub fn is_superset_of(&self, other: &Self) -> bool {
        self.subset(other)
    }

    /// Checks if the sets share no element
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (small, large) = smaller_first(self, other);
        small.iter().all(|element| !large.has(element))
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Returns a snapshot of the elements in unspecified order
    ///
    /// Mutating the set afterwards does not affect the snapshot.
    pub fn enumerate(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns the union of this set with another set (without modifying either)
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.extend(other.iter().cloned());
        result
    }

    /// Returns the elements present in both sets
    pub fn intersection(&self, other: &Self) -> Self {
        let (small, large) = smaller_first(self, other);
        small
            .iter()
            .filter(|element| large.has(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements of this set that are absent from `other`
    ///
    /// # Example
    /// ```rust
    /// use mathset::prelude::*;
    /// assert_eq!(set![1, 3, 5].difference(&set![1, 2, 6]), set![3, 5]);
    /// ```
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| !other.has(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements present in exactly one of the two sets
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.difference(other);
        result.extend(other.iter().filter(|element| !self.has(*element)).cloned());
        result
    }

    /// Applies `f` to every element and collects the results in a new set
    ///
    /// Results that compare equal collapse, so the new set may be smaller.
    ///
    /// # Example
    /// ```rust
    /// use mathset::prelude::*;
    /// let magnitudes = set![1, -1, 2].map(|x: &i32| x.abs());
    /// assert_eq!(magnitudes, set![1, 2]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Set<U>
    where
        U: Eq + Hash,
        F: FnMut(&T) -> U,
    {
        let mapped: Set<U> = self.iter().map(f).collect();
        tracing::debug!(
            source = self.size(),
            mapped = mapped.size(),
            "set map collapsed {} elements",
            self.size() - mapped.size()
        );
        mapped
    }

    /// Applies a fallible `f` to every element
    ///
    /// Stops at the first error, which is returned; no set is produced.
    ///
    /// # Example
    /// ```rust
    /// use mathset::prelude::*;
    ///
    /// let mixed = set![Value::from(1), Value::from(2)];
    /// let ints: Set<i64> = mixed.try_map(|v| i64::try_from(v.clone()))?;
    /// assert_eq!(ints, set![1, 2]);
    ///
    /// let broken = set![Value::from(1), Value::from("two")];
    /// assert!(broken.try_map(|v| i64::try_from(v.clone())).is_err());
    /// # Ok::<(), mathset::error::SetError>(())
    /// ```
    pub fn try_map<U, E, F>(&self, f: F) -> Result<Set<U>, E>
    where
        U: Eq + Hash,
        F: FnMut(&T) -> Result<U, E>,
    {
        self.iter().map(f).collect()
    }

    /// Returns every ordered pair `(a, b)` with `a` in this set and `b` in `other`
    ///
    /// # Example
    /// ```rust
    /// use mathset::prelude::*;
    /// let product = set![1, 2].cartesian_product(&set![3, 4]);
    /// assert_eq!(product, set![(1, 3), (1, 4), (2, 3), (2, 4)]);
    /// ```
    pub fn cartesian_product<U>(&self, other: &Set<U>) -> Set<(T, U)>
    where
        U: Eq + Hash + Clone,
    {
        let mut product = Set::with_capacity(self.size() * other.size());
        product.extend(
            self.iter()
                .cartesian_product(other.iter())
                .map(|(a, b)| (a.clone(), b.clone())),
        );
        tracing::debug!(size = product.size(), "set cartesian product");
        product
    }
}

fn smaller_first<'a, T>(a: &'a Set<T>, b: &'a Set<T>) -> (&'a Set<T>, &'a Set<T>) {
    if a.size() <= b.size() { (a, b) } else { (b, a) }
}

impl<T: Eq + Hash + Clone> SetAlgebra for Set<T> {
    fn cardinality(&self) -> usize {
        self.size()
    }

    fn contains_all(&self, other: &Self) -> bool {
        Set::subset(self, other)
    }

    fn union(&self, other: &Self) -> Self {
        Set::union(self, other)
    }

    fn intersection(&self, other: &Self) -> Self {
        Set::intersection(self, other)
    }

    fn difference(&self, other: &Self) -> Self {
        Set::difference(self, other)
    }

    fn equal(&self, other: &Self) -> bool {
        Set::equal(self, other)
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        Set::symmetric_difference(self, other)
    }

    fn is_disjoint(&self, other: &Self) -> bool {
        Set::is_disjoint(self, other)
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Debug + Ord> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_sorted(f, self.elements.iter())
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a, T: Eq + Hash + Copy + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Eq + Hash + Clone> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: &Set<T>) -> Set<T> {
        self.union(rhs)
    }
}

impl<T: Eq + Hash + Clone> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: &Set<T>) -> Set<T> {
        self.intersection(rhs)
    }
}

impl<T: Eq + Hash + Clone> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: &Set<T>) -> Set<T> {
        self.difference(rhs)
    }
}

impl<T: Eq + Hash + Clone> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, rhs: &Set<T>) -> Set<T> {
        self.symmetric_difference(rhs)
    }
}

// Serialized as a plain sequence; duplicates in the input collapse
#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.elements.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for Set<T>
where
    T: Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{SeqAccess, Visitor};

        struct SetVisitor<T> {
            _phantom: core::marker::PhantomData<T>,
        }

        impl<'de, T> Visitor<'de> for SetVisitor<T>
        where
            T: Deserialize<'de> + Eq + Hash,
        {
            type Value = Set<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of set elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Set<T>, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = Set::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(element) = seq.next_element()? {
                    set.add(element);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(SetVisitor {
            _phantom: core::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set;
    use crate::value::{Float, Value, ValueKind};
    use alloc::string::{String, ToString};
    use alloc::vec;

    #[test]
    fn test_new_set() {
        let set = Set::<u32>::new();
        assert!(set.is_empty());
        assert_eq!(set.size(), 0);
        assert_eq!(set.len(), 0);
        assert_eq!(set, Set::default());
    }

    #[test]
    fn test_seeded_set_deduplicates() {
        let set = Set::from_elements([1, 3, 5, 3, 1]);
        assert_eq!(set.size(), 3);
        assert!(set.has(&1));
        assert!(set.has(&3));
        assert!(set.has(&5));
    }

    #[test]
    fn test_add() {
        let mut set = set![1, 3, 5];

        // New items
        for element in [2, 4, 6] {
            assert!(set.add(element));
        }
        // Existing items
        for element in [1, 3, 5] {
            assert!(!set.add(element));
        }
        assert_eq!(set.size(), 6);
    }

    #[test]
    fn test_remove() {
        let mut set = set![1, 3, 5];

        for element in [1, 3, 5] {
            assert!(set.remove(&element));
        }
        for element in [2, 4, 6] {
            assert!(!set.remove(&element));
        }
        assert!(set.is_empty());
    }

    #[test]
    fn test_has() {
        let set = set![1, 3, 5];

        let cases = [(1, true), (3, true), (5, true), (2, false), (4, false), (6, false)];
        for (element, expected) in cases {
            assert_eq!(set.has(&element), expected, "has({element})");
        }
    }

    #[test]
    fn test_has_borrowed_form() {
        let set = Set::from_elements([String::from("cat"), String::from("dog")]);
        assert!(set.has("cat"));
        assert!(!set.has("cow"));
    }

    #[test]
    fn test_size_tracks_adds() {
        let mut set = set![1, 3, 5];
        assert_eq!(set.size(), 3);

        let cases = [(2, 4), (4, 5), (6, 6), (1, 6), (3, 6), (5, 6)];
        for (element, size) in cases {
            set.add(element);
            assert_eq!(set.size(), size);
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let source = set![1, 3, 5];
        let mut clone = source.clone();
        assert_eq!(clone, source);

        clone.add(7);
        clone.remove(&1);
        assert_eq!(source.size(), 3);
        assert!(source.has(&1));
        assert!(!source.has(&7));
    }

    #[test]
    fn test_clone_compares_against_targets() {
        let cases = [
            (set![1, 3, 5], set![1, 3, 5], true),
            (set![2, 4, 6], set![6, 4, 2], true),
            (set![1, 2, 3], set![1, 2, 3, 4], false),
        ];
        for (source, target, expected) in cases {
            assert_eq!(source.clone().equal(&target), expected);
        }
    }

    #[test]
    fn test_enumerate_snapshot() {
        let mut set = set![1, 3, 5, 7, 9];
        let mut snapshot = set.enumerate();

        set.add(11);
        set.remove(&1);

        snapshot.sort_unstable();
        assert_eq!(snapshot, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_equal() {
        let cases = [
            (set![1, 3, 5], set![1, 3, 5], true),
            (set![2, 4, 6], set![6, 4, 2], true),
            (set![1, 2, 3], set![1, 2, 3, 1, 2], true),
            (set![1, 2, 3], set![1, 2, 4], false),
            (set![2, 4, 6], set![2, 4, 6, 8], false),
        ];
        for (source, target, expected) in cases {
            assert_eq!(source.equal(&target), expected);
            assert_eq!(target.equal(&source), expected);
        }
    }

    #[test]
    fn test_subset_orientation() {
        let set = set![1, 3, 5];

        let cases = [
            (Set::new(), true),
            (set![1, 3, 5], true),
            (set![2, 4, 6], false),
            (set![1, 2, 6], false),
        ];
        for (candidate, expected) in cases {
            assert_eq!(set.subset(&candidate), expected);
            assert_eq!(candidate.is_subset_of(&set), expected);
            assert_eq!(set.is_superset_of(&candidate), expected);
        }

        // Larger argument is never contained in a smaller receiver
        assert!(!set![1].subset(&set![1, 3]));
        assert!(set![1].is_subset_of(&set![1, 3]));
    }

    #[test]
    fn test_union() {
        let set = set![1, 3, 5];
        let cases = [
            (set![1, 3, 5], set![1, 3, 5]),
            (set![2, 4, 6], set![1, 2, 3, 4, 5, 6]),
            (set![1, 2, 6], set![1, 2, 3, 5, 6]),
        ];
        for (other, expected) in cases {
            assert_eq!(set.union(&other), expected);
            assert_eq!(&set | &other, expected);
        }
        assert_eq!(set.size(), 3);
    }

    #[test]
    fn test_intersection() {
        let set = set![1, 3, 5];
        let cases = [
            (set![1, 3, 5], set![1, 3, 5]),
            (set![2, 4, 6], Set::new()),
            (set![1, 2, 6], set![1]),
        ];
        for (other, expected) in cases {
            assert_eq!(set.intersection(&other), expected);
            assert_eq!(&set & &other, expected);
        }
    }

    #[test]
    fn test_difference() {
        let set = set![1, 3, 5];
        let cases = [
            (set![1, 3, 5], Set::new()),
            (set![2, 4, 6], set![1, 3, 5]),
            (set![1, 2, 6], set![3, 5]),
        ];
        for (other, expected) in cases {
            assert_eq!(set.difference(&other), expected);
            assert_eq!(&set - &other, expected);
        }
    }

    #[test]
    fn test_symmetric_difference() {
        let a = set![1, 2, 3];
        let b = set![3, 4];
        assert_eq!(a.symmetric_difference(&b), set![1, 2, 4]);
        assert_eq!(&b ^ &a, set![1, 2, 4]);
        assert!(a.symmetric_difference(&a).is_empty());
    }

    #[test]
    fn test_is_disjoint() {
        assert!(set![1, 3].is_disjoint(&set![2, 4]));
        assert!(!set![1, 3].is_disjoint(&set![3]));
        assert!(Set::<u8>::new().is_disjoint(&Set::new()));
    }

    #[test]
    fn test_map() {
        let squares = set![1, 3, 5].map(|x: &i32| x * x);
        assert_eq!(squares, set![1, 9, 25]);

        let animals = set!["cat", "dog", "cow"].map(|s: &&str| s.replace("cow", "cat"));
        assert_eq!(animals, set!["cat".to_string(), "dog".to_string()]);

        let magnitudes = set![1, -1].map(|x: &i32| x.abs());
        assert_eq!(magnitudes.size(), 1);
    }

    #[test]
    fn test_try_map_stops_at_first_error() {
        let values = set![Value::from(1), Value::from("two"), Value::from(3)];
        let result = values.try_map(|v| i64::try_from(v.clone()));
        assert_eq!(
            result,
            Err(SetError::IncompatibleElement {
                expected: ValueKind::Int,
                found: ValueKind::Str,
            })
        );
    }

    #[test]
    fn test_cartesian_product() {
        let product = set![1, 2].cartesian_product(&set![3, 4]);
        assert_eq!(product.size(), 4);
        for pair in [(1, 3), (1, 4), (2, 3), (2, 4)] {
            assert!(product.has(&pair));
        }

        let mixed = set![1, 2].cartesian_product(&set!['a']);
        assert_eq!(mixed, set![(1, 'a'), (2, 'a')]);

        assert!(set![1, 2].cartesian_product(&Set::<u8>::new()).is_empty());
    }

    #[test]
    fn test_try_add_leaves_set_unchanged_on_error() {
        let mut floats = Set::<Float>::new();
        assert_eq!(floats.try_add(1.5), Ok(true));
        assert_eq!(floats.try_add(1.5), Ok(false));
        assert_eq!(
            floats.try_add(f64::NAN),
            Err(SetError::Unhashable(ValueKind::Float))
        );
        assert_eq!(floats.size(), 1);
    }

    #[test]
    fn test_try_from_elements_is_all_or_nothing() {
        assert_eq!(
            Set::<Value>::try_from_elements([1.0, 2.0, 2.0]).map(|set| set.size()),
            Ok(2)
        );
        assert!(Set::<Value>::try_from_elements([1.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_retain_and_clear() {
        let mut set = set![1, 2, 3, 4, 5, 6];
        set.retain(|x| x % 2 == 0);
        assert_eq!(set, set![2, 4, 6]);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_extend_and_collect() {
        let mut set: Set<u32> = (0..4).collect();
        set.extend(&[3, 4, 5]);
        set.extend(vec![5, 6]);
        assert_eq!(set, (0..7).collect::<Set<u32>>());
    }

    #[test]
    fn test_into_iter() {
        let set = set![1, 2, 3];
        let mut borrowed: vec::Vec<i32> = (&set).into_iter().copied().collect();
        borrowed.sort_unstable();
        assert_eq!(borrowed, vec![1, 2, 3]);

        let mut owned: vec::Vec<i32> = set.into_iter().collect();
        owned.sort_unstable();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    #[test]
    fn test_capacity() {
        let mut set = Set::<u64>::with_capacity(32);
        assert!(set.capacity() >= 32);
        set.reserve(64);
        assert!(set.capacity() >= 64);
        set.add(1);
        set.shrink_to_fit();
        assert!(set.capacity() >= 1);
    }

    #[test]
    fn test_debug_lists_elements() {
        let rendered = alloc::format!("{:?}", set![7]);
        assert_eq!(rendered, "{7}");
    }
}
