//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends [`Applicative`] with `bind` (also called `flat_map` or
//! `>>=`): the next computation is chosen from the value produced by the
//! previous one.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! bind(pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! bind(m, pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Maybe, MaybeKind};
//! use monadic::typeclass::Monad;
//!
//! fn half(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }
//! }
//!
//! assert_eq!(MaybeKind::bind(Maybe::Just(8), half), Maybe::Just(4));
//! assert_eq!(MaybeKind::bind(Maybe::Just(3), half), Maybe::Nothing);
//! ```

use super::applicative::Applicative;

/// A type class for contexts whose computations can depend on earlier results.
///
/// For short-circuiting contexts ([`Maybe`](crate::control::Maybe),
/// `Result`) `bind` never calls the continuation once a short-circuit value
/// has been reached.
pub trait Monad: Applicative {
    /// Feeds the value(s) inside `value` to `function` and flattens the result.
    ///
    /// `B: Clone` mirrors [`Applicative::pure`]: the continuation may be asked
    /// to re-enter the context, which needs to lift values of `B`.
    fn bind<A, B, F>(value: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: Clone + 'static,
        F: Fn(A) -> Self::Of<B> + 'static;

    /// Runs `value`, discards its result and continues with `next`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Maybe, MaybeKind};
    /// use monadic::typeclass::Monad;
    ///
    /// assert_eq!(MaybeKind::then(Maybe::Just(1), Maybe::Just("b")), Maybe::Just("b"));
    /// assert_eq!(MaybeKind::then(Maybe::<i32>::Nothing, Maybe::Just("b")), Maybe::Nothing);
    /// ```
    #[inline]
    fn then<A, B>(value: Self::Of<A>, next: Self::Of<B>) -> Self::Of<B>
    where
        A: 'static,
        B: Clone + 'static,
        Self::Of<B>: Clone + 'static,
    {
        Self::bind::<A, B, _>(value, move |_| next.clone())
    }
}
