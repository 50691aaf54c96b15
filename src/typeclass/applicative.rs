//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends [`Functor`] with:
//!
//! - `pure`: lift a plain value into the minimal context
//! - `apply`: combine a context-wrapped function with a context-wrapped value
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! apply(v, pure(|x| x)) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! apply(pure(x), pure(f)) == pure(f(x))
//! ```
//!
//! ## Functor Coherence
//!
//! Mapping is applying a lifted function:
//!
//! ```text
//! fmap(v, f) == apply(v, pure(f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Maybe, MaybeKind};
//! use monadic::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = MaybeKind::pure(42);
//! assert_eq!(lifted, Maybe::Just(42));
//!
//! let add_one = MaybeKind::pure(|n: i32| n + 1);
//! assert_eq!(MaybeKind::apply(Maybe::Just(1), add_one), Maybe::Just(2));
//! ```

use super::functor::Functor;

/// A type class for contexts that support lifting values and applying
/// wrapped functions.
///
/// # Examples
///
/// ```rust
/// use monadic::collection::{List, ListKind};
/// use monadic::typeclass::Applicative;
///
/// // Every function is applied to every value.
/// let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 10];
/// let result = ListKind::apply(List::new(vec![1, 2]), List::new(functions));
/// assert_eq!(result, List::new(vec![2, 3, 10, 20]));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the minimal context.
    ///
    /// `A: Clone` is required because some contexts (such as
    /// [`Reader`](crate::effect::Reader)) hand the value out on every run.
    fn pure<A>(value: A) -> Self::Of<A>
    where
        A: Clone + 'static;

    /// Applies the function(s) held by `functor` to the value(s) held by `value`.
    ///
    /// # Arguments
    ///
    /// * `value` - The context holding the argument(s)
    /// * `functor` - The context holding the function(s)
    fn apply<A, B, F>(value: Self::Of<A>, functor: Self::Of<F>) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static;
}
