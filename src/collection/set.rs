//! Unordered, duplicate-free multi-valued computation.
//!
//! [`Set`] behaves like [`List`](super::List) except that equal elements
//! collapse and equality is by membership. Elements are compared with
//! `PartialEq` only, so any element type works, including ones without
//! `Hash` or `Ord`.
//!
//! The inherent operations (`map`, `apply`, `bind`, `flatten`, `append`)
//! require `PartialEq` on the result and store every member once. The
//! [`SetKind`] type class operations are generic over element types without
//! equality, so the sets they build may store an element more than once
//! until the next inherent operation compacts them. Every observation
//! (`len`, `iter`, `contains`, `==`, `Debug`, iteration) sees each distinct
//! element exactly once, in first-insertion order.
//!
//! # Examples
//!
//! ```rust
//! use monadic::collection::Set;
//!
//! let remainders = Set::new(vec![1, 2, 3, 4, 5]).map(|n| n % 3);
//! assert_eq!(remainders, Set::new(vec![0, 1, 2]));
//! assert_eq!(remainders.len(), 3);
//! ```

use std::fmt;

use crate::compose::Binary;
use crate::typeclass::{Applicative, Functor, Kind, Monad, Monoid, Semigroup};

/// A collection in which duplicates collapse and order carries no meaning.
///
/// # Examples
///
/// ```rust
/// use monadic::collection::Set;
///
/// let set = Set::new(vec!['b', 'a', 'b']);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&'a'));
/// assert_eq!(set, Set::new(vec!['a', 'b']));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    elements: Vec<T>,
}

/// Kind marker for [`Set`].
#[derive(Debug, Clone, Copy)]
pub struct SetKind;

/// Iterator over the distinct elements of a [`Set`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    elements: &'a [T],
    position: usize,
}

impl<'a, T: PartialEq> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let elements = self.elements;
        while let Some(element) = elements.get(self.position) {
            let seen = &elements[..self.position];
            self.position += 1;
            if !seen.contains(element) {
                return Some(element);
            }
        }
        None
    }
}

fn distinct<T: PartialEq>(elements: Vec<T>) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(elements.len());
    for element in elements {
        if !unique.contains(&element) {
            unique.push(element);
        }
    }
    unique
}

impl<T> Set<T> {
    /// Creates a set from `elements`, dropping duplicates.
    #[must_use]
    pub fn new(elements: Vec<T>) -> Self
    where
        T: PartialEq,
    {
        Self::from_raw(distinct(elements))
    }

    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_raw(Vec::new())
    }

    #[inline]
    const fn from_raw(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize
    where
        T: PartialEq,
    {
        self.iter().count()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the distinct elements in first-insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            elements: &self.elements,
            position: 0,
        }
    }

    /// Returns `true` if `value` is a member.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(value)
    }

    /// Copies the distinct elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone + PartialEq,
    {
        self.iter().cloned().collect()
    }

    /// Every element of `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self
    where
        T: PartialEq,
    {
        self.append(other)
    }

    // =========================================================================
    // Context Operations
    // =========================================================================

    /// A set with exactly one element.
    #[inline]
    pub fn pure(value: T) -> Self {
        Self::from_raw(vec![value])
    }

    /// Applies `function` to every element; results that are equal collapse.
    pub fn map<B, F>(self, function: F) -> Set<B>
    where
        B: PartialEq,
        F: FnMut(T) -> B,
    {
        Set::new(self.map_stored(function).elements)
    }

    /// Applies every function in `functor` to every element.
    pub fn apply<B, F>(self, functor: Set<F>) -> Set<B>
    where
        T: Clone,
        B: PartialEq,
        F: Fn(T) -> B,
    {
        Set::new(self.apply_stored(functor).elements)
    }

    /// Runs `function` for every element and unions the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::collection::Set;
    ///
    /// let reachable = Set::new(vec![1, 2]).bind(|n| Set::new(vec![n, n + 1]));
    /// assert_eq!(reachable.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn bind<B, F>(self, function: F) -> Set<B>
    where
        B: PartialEq,
        F: FnMut(T) -> Set<B>,
    {
        Set::new(self.bind_stored(function).elements)
    }

    // Stored variants for the type class impls, which cannot ask for
    // `PartialEq`. Duplicates survive until an inherent operation compacts them.

    fn map_stored<B, F>(self, function: F) -> Set<B>
    where
        F: FnMut(T) -> B,
    {
        Set::from_raw(self.elements.into_iter().map(function).collect())
    }

    fn apply_stored<B, F>(self, functor: Set<F>) -> Set<B>
    where
        T: Clone,
        F: Fn(T) -> B,
    {
        Set::from_raw(
            functor
                .elements
                .iter()
                .flat_map(|function| self.elements.iter().cloned().map(function))
                .collect(),
        )
    }

    fn bind_stored<B, F>(self, mut function: F) -> Set<B>
    where
        F: FnMut(T) -> Set<B>,
    {
        Set::from_raw(
            self.elements
                .into_iter()
                .flat_map(|element| function(element).elements)
                .collect(),
        )
    }

    /// Left fold over the distinct elements, in first-insertion order.
    ///
    /// `function` may be a plain two-argument closure or a
    /// [`Curried2`](crate::compose::Curried2) chain.
    pub fn fold<S, G>(self, function: G, initial: S) -> S
    where
        T: PartialEq,
        G: Binary<S, T, S>,
    {
        distinct(self.elements)
            .into_iter()
            .fold(initial, |accumulator, element| function.call(accumulator, element))
    }

    /// Collects `values` into every combination of their elements.
    ///
    /// Combinations are ordered by the leftmost set first and equal
    /// combinations collapse after every step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::collection::Set;
    ///
    /// let combinations = Set::sequence(vec![Set::new(vec![1, 2]), Set::new(vec![3])]);
    /// assert_eq!(combinations.to_vec(), vec![vec![1, 3], vec![2, 3]]);
    /// ```
    pub fn sequence<I>(values: I) -> Set<Vec<T>>
    where
        T: Clone + PartialEq,
        I: IntoIterator<Item = Self>,
    {
        let combinations = values.into_iter().fold(vec![Vec::new()], |prefixes, set| {
            let members = distinct(set.elements);
            let extended = prefixes
                .iter()
                .flat_map(|prefix| {
                    members.iter().map(move |member| {
                        let mut next = prefix.clone();
                        next.push(member.clone());
                        next
                    })
                })
                .collect();
            distinct(extended)
        });
        Set::from_raw(combinations)
    }
}

impl<I> Set<I>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    /// Spreads one level of nested iterables into the set.
    ///
    /// Every element is kept, including zeros and empty strings.
    pub fn flatten(self) -> Set<I::Item> {
        Set::new(self.elements.into_iter().flatten().collect())
    }
}

impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().all(|element| other.contains(element))
            && other.iter().all(|element| self.contains(element))
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T: PartialEq + fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PartialEq> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: PartialEq> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        distinct(self.elements).into_iter()
    }
}

impl<'a, T: PartialEq> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> Semigroup for Set<T> {
    fn append(self, other: Self) -> Self {
        let mut elements = distinct(self.elements);
        for element in other.elements {
            if !elements.contains(&element) {
                elements.push(element);
            }
        }
        Self::from_raw(elements)
    }
}

impl<T: PartialEq> Monoid for Set<T> {
    fn zero() -> Self {
        Self::empty()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize + PartialEq> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::new)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl Kind for SetKind {
    type Of<A> = Set<A>;
}

impl Functor for SetKind {
    fn fmap<A, B, F>(value: Set<A>, function: F) -> Set<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map_stored(function)
    }
}

impl Applicative for SetKind {
    fn pure<A>(value: A) -> Set<A>
    where
        A: Clone + 'static,
    {
        Set::pure(value)
    }

    fn apply<A, B, F>(value: Set<A>, functor: Set<F>) -> Set<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.apply_stored(functor)
    }
}

impl Monad for SetKind {
    fn bind<A, B, F>(value: Set<A>, function: F) -> Set<B>
    where
        A: 'static,
        B: Clone + 'static,
        F: Fn(A) -> Set<B> + 'static,
    {
        value.bind_stored(function)
    }
}
