//! Ordered, multi-valued computation.
//!
//! A [`List`] models nondeterministic choice: `bind` runs the continuation
//! for every element and concatenates the results in order, `apply` pairs
//! every function with every value.
//!
//! # Examples
//!
//! ```rust
//! use monadic::collection::List;
//!
//! let pairs = List::new(vec![1, 2]).bind(|n| List::new(vec![(n, 'a'), (n, 'b')]));
//! assert_eq!(pairs, List::new(vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]));
//! ```

use std::fmt;

use crate::compose::Binary;
use crate::typeclass::{Applicative, Functor, Kind, Monad, Monoid, Semigroup};

/// An ordered collection whose insertion order is significant.
///
/// Every operation consumes the list and returns a new one.
///
/// # Examples
///
/// ```rust
/// use monadic::collection::List;
///
/// let list: List<i32> = (1..=3).collect();
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(0), Some(&1));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct List<T> {
    elements: Vec<T>,
}

/// Kind marker for [`List`].
#[derive(Debug, Clone, Copy)]
pub struct ListKind;

impl<T> List<T> {
    /// Creates a list holding `elements` in order.
    #[inline]
    #[must_use]
    pub const fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the element at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Copies the elements into a `Vec`.
    #[inline]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    /// Returns the underlying `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    // =========================================================================
    // Context Operations
    // =========================================================================

    /// A list with exactly one element.
    #[inline]
    pub fn pure(value: T) -> Self {
        Self::new(vec![value])
    }

    /// Applies `function` to every element, keeping order.
    pub fn map<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(T) -> B,
    {
        self.elements.into_iter().map(function).collect()
    }

    /// Applies every function in `functor` to every element.
    ///
    /// Functions are the outer loop, so the result is grouped by function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::collection::List;
    ///
    /// let functions: List<Box<dyn Fn(i32) -> i32>> =
    ///     List::new(vec![Box::new(|n| n + 1), Box::new(|n| n * 2)]);
    /// let result = List::new(vec![10, 20]).apply(functions);
    /// assert_eq!(result, List::new(vec![11, 21, 20, 40]));
    /// ```
    pub fn apply<B, F>(self, functor: List<F>) -> List<B>
    where
        T: Clone,
        F: Fn(T) -> B,
    {
        functor
            .elements
            .iter()
            .flat_map(|function| self.elements.iter().cloned().map(function))
            .collect()
    }

    /// Runs `function` for every element and concatenates the results.
    pub fn bind<B, F>(self, mut function: F) -> List<B>
    where
        F: FnMut(T) -> List<B>,
    {
        self.elements
            .into_iter()
            .flat_map(|element| function(element).elements)
            .collect()
    }

    /// Left fold from `initial`.
    ///
    /// `function` may be a plain two-argument closure or a
    /// [`Curried2`](crate::compose::Curried2) chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::collection::List;
    /// use monadic::compose::curry;
    ///
    /// let numbers = List::new(vec![1, 2, 3, 4]);
    /// assert_eq!(numbers.clone().fold(|sum: i32, n: i32| sum + n, 0), 10);
    ///
    /// let times = curry(|product: i32, n: i32| product * n);
    /// assert_eq!(numbers.fold(times, 1), 24);
    /// ```
    pub fn fold<S, G>(self, function: G, initial: S) -> S
    where
        G: Binary<S, T, S>,
    {
        self.elements
            .into_iter()
            .fold(initial, |accumulator, element| function.call(accumulator, element))
    }

    /// Returns a stably sorted copy, descending when `reverse` is set.
    ///
    /// Equal elements keep their relative order in both directions.
    #[must_use]
    pub fn sort(mut self, reverse: bool) -> Self
    where
        T: Ord,
    {
        if reverse {
            self.elements.sort_by(|left, right| right.cmp(left));
        } else {
            self.elements.sort();
        }
        self
    }

    /// Returns a copy stably sorted by `key`, descending when `reverse` is set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::collection::List;
    ///
    /// let words = List::new(vec!["ccc", "a", "bb", "d"]);
    /// assert_eq!(words.clone().sort_by_key(|word| word.len(), false), List::new(vec!["a", "d", "bb", "ccc"]));
    /// assert_eq!(words.sort_by_key(|word| word.len(), true), List::new(vec!["ccc", "bb", "a", "d"]));
    /// ```
    #[must_use]
    pub fn sort_by_key<K, F>(mut self, mut key: F, reverse: bool) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.elements.sort_by(|left, right| {
            let ordering = key(left).cmp(&key(right));
            if reverse { ordering.reverse() } else { ordering }
        });
        self
    }

    /// Collects `values` into every combination of their elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::collection::List;
    ///
    /// let combinations = List::sequence(vec![List::new(vec![1, 2]), List::new(vec![3])]);
    /// assert_eq!(combinations, List::new(vec![vec![1, 3], vec![2, 3]]));
    /// ```
    pub fn sequence<I>(values: I) -> List<Vec<T>>
    where
        T: Clone,
        I: IntoIterator<Item = Self>,
    {
        let combinations = values.into_iter().fold(vec![Vec::new()], |prefixes, list| {
            prefixes
                .iter()
                .flat_map(|prefix| {
                    list.elements.iter().map(move |element| {
                        let mut next = prefix.clone();
                        next.push(element.clone());
                        next
                    })
                })
                .collect()
        });
        List::new(combinations)
    }
}

impl<I: IntoIterator> List<I> {
    /// Spreads one level of nested iterables into the list.
    ///
    /// Every element is kept, including zeros and empty strings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::collection::List;
    ///
    /// let nested = List::new(vec![vec![0, 1], vec![], vec![2]]);
    /// assert_eq!(nested.flatten(), List::new(vec![0, 1, 2]));
    /// ```
    pub fn flatten(self) -> List<I::Item> {
        self.elements.into_iter().flatten().collect()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> Semigroup for List<T> {
    fn append(mut self, other: Self) -> Self {
        self.elements.extend(other.elements);
        self
    }
}

impl<T> Monoid for List<T> {
    fn zero() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl Kind for ListKind {
    type Of<A> = List<A>;
}

impl Functor for ListKind {
    fn fmap<A, B, F>(value: List<A>, function: F) -> List<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl Applicative for ListKind {
    fn pure<A>(value: A) -> List<A>
    where
        A: Clone + 'static,
    {
        List::pure(value)
    }

    fn apply<A, B, F>(value: List<A>, functor: List<F>) -> List<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.apply(functor)
    }
}

impl Monad for ListKind {
    fn bind<A, B, F>(value: List<A>, function: F) -> List<B>
    where
        A: 'static,
        B: Clone + 'static,
        F: Fn(A) -> List<B> + 'static,
    {
        value.bind(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::curry;
    use rstest::rstest;

    #[rstest]
    fn bind_to_empty_drops_element() {
        let evens = List::new(vec![1, 2, 3, 4]).bind(|n| {
            if n % 2 == 0 { List::pure(n) } else { List::empty() }
        });
        assert_eq!(evens, List::new(vec![2, 4]));
    }

    #[rstest]
    fn apply_with_no_functions_is_empty() {
        let functions: List<fn(i32) -> i32> = List::empty();
        assert!(List::new(vec![1, 2]).apply(functions).is_empty());
    }

    #[rstest]
    fn flatten_keeps_falsy_values() {
        let nested = List::new(vec![vec![0, 0], vec![1]]);
        assert_eq!(nested.flatten(), List::new(vec![0, 0, 1]));

        let strings = List::new(vec![vec![""], vec!["x", ""]]);
        assert_eq!(strings.flatten(), List::new(vec!["", "x", ""]));
    }

    #[rstest]
    fn flatten_only_one_level() {
        let nested = List::new(vec![vec![vec![1], vec![2]], vec![vec![3]]]);
        assert_eq!(nested.flatten(), List::new(vec![vec![1], vec![2], vec![3]]));
    }

    #[rstest]
    #[case(false, vec![1, 2, 3, 5])]
    #[case(true, vec![5, 3, 2, 1])]
    fn sort_orders(#[case] reverse: bool, #[case] expected: Vec<i32>) {
        assert_eq!(List::new(vec![3, 1, 5, 2]).sort(reverse), List::new(expected));
    }

    #[rstest]
    fn sort_by_key_is_stable_in_reverse() {
        let pairs = List::new(vec![(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')]);
        let sorted = pairs.sort_by_key(|pair| pair.0, true);
        assert_eq!(sorted, List::new(vec![(2, 'b'), (2, 'd'), (1, 'a'), (1, 'c')]));
    }

    #[rstest]
    fn fold_accepts_plain_function() {
        let joined = List::new(vec!["a", "b", "c"])
            .fold(|text: String, part: &str| text + part, String::new());
        assert_eq!(joined, "abc");
    }

    #[rstest]
    fn fold_accepts_curried_function() {
        let subtract = curry(|accumulator: i32, n: i32| accumulator - n);
        assert_eq!(List::new(vec![1, 2, 3]).fold(subtract, 10), 4);
    }

    #[rstest]
    fn fold_of_empty_returns_initial() {
        assert_eq!(List::<i32>::empty().fold(|sum: i32, n: i32| sum + n, 7), 7);
    }

    #[rstest]
    fn debug_prints_elements() {
        assert_eq!(format!("{:?}", List::new(vec![1, 2])), "[1, 2]");
    }
}
