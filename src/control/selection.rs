//! `First` and `Last`: picking one present value out of many `Maybe`s.
//!
//! Both are [`Monoid`]s over [`Maybe`] with `Nothing` as identity.
//! `First` keeps the leftmost `Just`, `Last` keeps the rightmost.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Maybe, first, last};
//!
//! let values = vec![Maybe::Nothing, Maybe::Just(1), Maybe::Just(2), Maybe::Nothing];
//! assert_eq!(first(values.clone()), Maybe::Just(1));
//! assert_eq!(last(values), Maybe::Just(2));
//! ```

use super::maybe::Maybe;
use crate::typeclass::{Monoid, Semigroup};

/// A `Maybe` combined by keeping the left `Just` when there is one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct First<T>(Maybe<T>);

/// A `Maybe` combined by keeping the right `Just` when there is one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Last<T>(Maybe<T>);

impl<T> First<T> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: Maybe<T>) -> Self {
        Self(value)
    }

    /// Returns the wrapped `Maybe`.
    #[inline]
    pub fn into_inner(self) -> Maybe<T> {
        self.0
    }
}

impl<T> Last<T> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: Maybe<T>) -> Self {
        Self(value)
    }

    /// Returns the wrapped `Maybe`.
    #[inline]
    pub fn into_inner(self) -> Maybe<T> {
        self.0
    }
}

impl<T> Semigroup for First<T> {
    fn append(self, other: Self) -> Self {
        if self.0.is_just() { self } else { other }
    }
}

impl<T> Monoid for First<T> {
    fn zero() -> Self {
        Self(Maybe::Nothing)
    }
}

impl<T> Semigroup for Last<T> {
    fn append(self, other: Self) -> Self {
        if other.0.is_just() { other } else { self }
    }
}

impl<T> Monoid for Last<T> {
    fn zero() -> Self {
        Self(Maybe::Nothing)
    }
}

impl<T> From<Maybe<T>> for First<T> {
    fn from(value: Maybe<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Maybe<T>> for Last<T> {
    fn from(value: Maybe<T>) -> Self {
        Self(value)
    }
}

/// Returns the leftmost `Just` in `values`, or `Nothing`.
pub fn first<T, I>(values: I) -> Maybe<T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    First::concat(values.into_iter().map(First::new)).into_inner()
}

/// Returns the rightmost `Just` in `values`, or `Nothing`.
pub fn last<T, I>(values: I) -> Maybe<T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    Last::concat(values.into_iter().map(Last::new)).into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::Just(1), Maybe::Just(2), Maybe::Just(1))]
    #[case(Maybe::Nothing, Maybe::Just(2), Maybe::Just(2))]
    #[case(Maybe::Just(1), Maybe::Nothing, Maybe::Just(1))]
    #[case(Maybe::Nothing, Maybe::Nothing, Maybe::Nothing)]
    fn first_append(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(First::new(left).append(First::new(right)).into_inner(), expected);
    }

    #[rstest]
    #[case(Maybe::Just(1), Maybe::Just(2), Maybe::Just(2))]
    #[case(Maybe::Nothing, Maybe::Just(2), Maybe::Just(2))]
    #[case(Maybe::Just(1), Maybe::Nothing, Maybe::Just(1))]
    #[case(Maybe::Nothing, Maybe::Nothing, Maybe::Nothing)]
    fn last_append(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(Last::new(left).append(Last::new(right)).into_inner(), expected);
    }

    #[rstest]
    fn empty_sequences_select_nothing() {
        assert_eq!(first(Vec::<Maybe<i32>>::new()), Maybe::Nothing);
        assert_eq!(last(Vec::<Maybe<i32>>::new()), Maybe::Nothing);
    }

    #[rstest]
    fn all_nothing_selects_nothing() {
        let values: Vec<Maybe<&str>> = vec![Maybe::Nothing, Maybe::Nothing];
        assert_eq!(first(values.clone()), Maybe::Nothing);
        assert_eq!(last(values), Maybe::Nothing);
    }

    #[rstest]
    fn first_is_associative() {
        let a = First::new(Maybe::Nothing);
        let b = First::new(Maybe::Just('b'));
        let c = First::new(Maybe::Just('c'));
        assert_eq!(a.append(b).append(c), a.append(b.append(c)));
    }
}
