//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Self::zero().append(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.append(Self::zero()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::collection::List;
//! use monadic::typeclass::Monoid;
//!
//! let all = List::concat(vec![List::new(vec![1]), List::new(vec![2, 3])]);
//! assert_eq!(all, List::new(vec![1, 2, 3]));
//! assert_eq!(List::<i32>::concat(Vec::new()), List::zero());
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with a two-sided identity element.
pub trait Monoid: Semigroup + Sized {
    /// Returns the identity element.
    fn zero() -> Self;

    /// Combines every element of `items`, starting from [`Monoid::zero`].
    ///
    /// An empty iterator yields `zero()`.
    #[must_use]
    fn concat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::zero().append_all(items)
    }
}
