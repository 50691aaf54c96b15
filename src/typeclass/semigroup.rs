//! Semigroup type class - values with an associative combining operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.append(b).append(c) == a.append(b.append(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::collection::List;
//! use monadic::typeclass::Semigroup;
//!
//! let joined = List::new(vec![1, 2]).append(List::new(vec![3]));
//! assert_eq!(joined, List::new(vec![1, 2, 3]));
//! ```

/// A type class for values with an associative binary operation.
///
/// `append` consumes both operands and returns the combined value; neither
/// input is modified.
pub trait Semigroup {
    /// Combines `self` with `other`. Must be associative.
    #[must_use]
    fn append(self, other: Self) -> Self;

    /// Combines every element of `items` onto `self`, left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{First, Maybe};
    /// use monadic::typeclass::Semigroup;
    ///
    /// let combined = First::new(Maybe::Nothing)
    ///     .append_all(vec![First::new(Maybe::Just(2)), First::new(Maybe::Just(3))]);
    /// assert_eq!(combined.into_inner(), Maybe::Just(2));
    /// ```
    #[must_use]
    fn append_all<I>(self, items: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().fold(self, Self::append)
    }
}
