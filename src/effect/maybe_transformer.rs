//! `MaybeT` - Maybe monad transformer.
//!
//! `MaybeT<M, A>` wraps `M::Of<Maybe<A>>`: a computation in an outer context
//! `M` whose result may be absent. Mapping and binding see through both
//! layers. Once a `Nothing` is met the rest of the chain is skipped for that
//! branch, and the outer context's own behavior (repetition for lists,
//! environment for readers, suspension for futures) is kept.
//!
//! The outer context is any kind implementing [`Monad`], fixed when the
//! transformer is built.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::effect::{MaybeT, Reader, ReaderKind};
//!
//! let lookup: MaybeT<ReaderKind<i32>, i32> =
//!     MaybeT::new(Reader::new(|limit: i32| Maybe::from_predicate(limit, |n| *n > 0)));
//! let halved = lookup.bind(|n| MaybeT::pure(n / 2));
//!
//! let reader = halved.run();
//! assert_eq!(reader.run(10), Maybe::Just(5));
//! assert_eq!(reader.run(-1), Maybe::Nothing);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::control::Maybe;
use crate::typeclass::{Applicative, Functor, Kind, Monad};

/// A computation in the outer context `M` producing an optional `A`.
///
/// # Type Parameters
///
/// - `M`: Kind marker of the outer context
/// - `A`: The value type
pub struct MaybeT<M: Kind, A> {
    value: M::Of<Maybe<A>>,
}

/// Kind marker for [`MaybeT`] over the outer kind `M`.
pub struct MaybeTKind<M>(PhantomData<fn() -> M>);

impl<M: Kind, A> MaybeT<M, A> {
    /// Wraps an outer context already holding `Maybe` values.
    pub const fn new(value: M::Of<Maybe<A>>) -> Self {
        Self { value }
    }

    /// Returns the wrapped outer context.
    pub fn run(self) -> M::Of<Maybe<A>> {
        self.value
    }
}

impl<M, A> MaybeT<M, A>
where
    M: Monad + 'static,
    A: 'static,
{
    /// `Just(value)` in the minimal outer context.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(M::pure(Maybe::Just(value)))
    }

    /// Wraps every value of an outer context as `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::collection::{List, ListKind};
    /// use monadic::control::Maybe;
    /// use monadic::effect::MaybeT;
    ///
    /// let lifted = MaybeT::<ListKind, _>::lift(List::new(vec![1, 2]));
    /// assert_eq!(lifted.run(), List::new(vec![Maybe::Just(1), Maybe::Just(2)]));
    /// ```
    pub fn lift(outer: M::Of<A>) -> Self {
        Self::new(M::fmap::<A, Maybe<A>, _>(outer, Maybe::Just))
    }

    /// `Nothing` in the minimal outer context.
    pub fn nothing() -> Self
    where
        A: Clone,
    {
        Self::new(M::pure(Maybe::<A>::Nothing))
    }

    /// Transforms every present value.
    pub fn map<B, F>(self, function: F) -> MaybeT<M, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        MaybeT::new(M::fmap(self.value, move |inner: Maybe<A>| inner.map(&function)))
    }

    /// Applies the optional functions of `functor` to the optional values of
    /// `self`, combining the outer contexts with `M::apply`.
    pub fn apply<B, F>(self, functor: MaybeT<M, F>) -> MaybeT<M, B>
    where
        A: Clone,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let functions = M::fmap(functor.value, |function: Maybe<F>| {
            move |inner: Maybe<A>| match &function {
                Maybe::Just(function) => inner.map(function),
                Maybe::Nothing => Maybe::Nothing,
            }
        });
        MaybeT::new(M::apply(self.value, functions))
    }

    /// Routes each present value through `function`.
    ///
    /// A `Nothing` is re-wrapped with `M::pure` and `function` is not called.
    pub fn bind<B, F>(self, function: F) -> MaybeT<M, B>
    where
        B: Clone + 'static,
        F: Fn(A) -> MaybeT<M, B> + 'static,
    {
        MaybeT::new(M::bind::<Maybe<A>, Maybe<B>, _>(self.value, move |inner| match inner {
            Maybe::Just(value) => function(value).value,
            Maybe::Nothing => M::pure(Maybe::<B>::Nothing),
        }))
    }
}

impl<M: Kind, A> Clone for MaybeT<M, A>
where
    M::Of<Maybe<A>>: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<M: Kind, A> PartialEq for MaybeT<M, A>
where
    M::Of<Maybe<A>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<M: Kind, A> fmt::Debug for MaybeT<M, A>
where
    M::Of<Maybe<A>>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("MaybeT").field(&self.value).finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<M: Kind> Kind for MaybeTKind<M> {
    type Of<A> = MaybeT<M, A>;
}

impl<M: Monad + 'static> Functor for MaybeTKind<M> {
    fn fmap<A, B, F>(value: MaybeT<M, A>, function: F) -> MaybeT<M, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl<M: Monad + 'static> Applicative for MaybeTKind<M> {
    fn pure<A>(value: A) -> MaybeT<M, A>
    where
        A: Clone + 'static,
    {
        MaybeT::pure(value)
    }

    fn apply<A, B, F>(value: MaybeT<M, A>, functor: MaybeT<M, F>) -> MaybeT<M, B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.apply(functor)
    }
}

impl<M: Monad + 'static> Monad for MaybeTKind<M> {
    fn bind<A, B, F>(value: MaybeT<M, A>, function: F) -> MaybeT<M, B>
    where
        A: 'static,
        B: Clone + 'static,
        F: Fn(A) -> MaybeT<M, B> + 'static,
    {
        value.bind(function)
    }
}
