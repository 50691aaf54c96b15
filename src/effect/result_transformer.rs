//! `ResultT` - Result monad transformer.
//!
//! `ResultT<M, E, A>` wraps `M::Of<Result<A, E>>`: a computation in an outer
//! context `M` that may fail with an `E`. An `Err` stops the chain for its
//! branch and is carried through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use monadic::collection::{List, ListKind};
//! use monadic::effect::ResultT;
//!
//! let inputs: ResultT<ListKind, String, &str> =
//!     ResultT::new(List::new(vec![Ok("1"), Ok("x"), Err("io".to_string())]));
//! let parsed = inputs.bind(|text| match text.parse::<i32>() {
//!     Ok(n) => ResultT::pure(n),
//!     Err(error) => ResultT::throw(error.to_string()),
//! });
//!
//! assert_eq!(
//!     parsed.run(),
//!     List::new(vec![
//!         Ok(1),
//!         Err("invalid digit found in string".to_string()),
//!         Err("io".to_string()),
//!     ])
//! );
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::typeclass::{Applicative, Functor, Kind, Monad};

/// A computation in the outer context `M` producing an `A` or failing with an `E`.
///
/// # Type Parameters
///
/// - `M`: Kind marker of the outer context
/// - `E`: The error type
/// - `A`: The value type
pub struct ResultT<M: Kind, E, A> {
    value: M::Of<Result<A, E>>,
}

/// Kind marker for [`ResultT`] over the outer kind `M` with error type `E`.
pub struct ResultTKind<M, E>(PhantomData<fn() -> (M, E)>);

impl<M: Kind, E, A> ResultT<M, E, A> {
    /// Wraps an outer context already holding `Result` values.
    pub const fn new(value: M::Of<Result<A, E>>) -> Self {
        Self { value }
    }

    /// Returns the wrapped outer context.
    pub fn run(self) -> M::Of<Result<A, E>> {
        self.value
    }
}

impl<M, E, A> ResultT<M, E, A>
where
    M: Monad + 'static,
    E: Clone + 'static,
    A: 'static,
{
    /// `Ok(value)` in the minimal outer context.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(M::pure(Ok(value)))
    }

    /// Wraps every value of an outer context as `Ok`.
    pub fn lift(outer: M::Of<A>) -> Self {
        Self::new(M::fmap::<A, Result<A, E>, _>(outer, Ok))
    }

    /// `Err(error)` in the minimal outer context.
    pub fn throw(error: E) -> Self
    where
        A: Clone,
    {
        Self::new(M::pure(Err::<A, E>(error)))
    }

    /// Transforms every successful value.
    pub fn map<B, F>(self, function: F) -> ResultT<M, E, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        ResultT::new(M::fmap(self.value, move |inner: Result<A, E>| inner.map(&function)))
    }

    /// Transforms every error, leaving successful values untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::ResultKind;
    /// use monadic::effect::ResultT;
    ///
    /// let failed: ResultT<ResultKind<()>, i32, &str> = ResultT::new(Ok(Err(404)));
    /// let described = failed.map_error(|code| format!("status {code}"));
    /// assert_eq!(described.run(), Ok(Err("status 404".to_string())));
    /// ```
    pub fn map_error<G, F>(self, function: F) -> ResultT<M, G, A>
    where
        G: Clone + 'static,
        F: Fn(E) -> G + 'static,
    {
        ResultT::new(M::fmap(self.value, move |inner: Result<A, E>| inner.map_err(&function)))
    }

    /// Applies the fallible functions of `functor` to the fallible values of
    /// `self`, combining the outer contexts with `M::apply`.
    ///
    /// When both sides failed, the function side's error is kept.
    pub fn apply<B, F>(self, functor: ResultT<M, E, F>) -> ResultT<M, E, B>
    where
        A: Clone,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let functions = M::fmap(functor.value, |function: Result<F, E>| {
            move |inner: Result<A, E>| match &function {
                Ok(function) => inner.map(function),
                Err(error) => Err(error.clone()),
            }
        });
        ResultT::new(M::apply(self.value, functions))
    }

    /// Routes each successful value through `function`.
    ///
    /// An `Err` is re-wrapped unchanged with `M::pure` and `function` is not
    /// called.
    pub fn bind<B, F>(self, function: F) -> ResultT<M, E, B>
    where
        B: Clone + 'static,
        F: Fn(A) -> ResultT<M, E, B> + 'static,
    {
        ResultT::new(M::bind::<Result<A, E>, Result<B, E>, _>(self.value, move |inner| match inner {
            Ok(value) => function(value).value,
            Err(error) => M::pure(Err::<B, E>(error)),
        }))
    }
}

impl<M: Kind, E, A> Clone for ResultT<M, E, A>
where
    M::Of<Result<A, E>>: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<M: Kind, E, A> PartialEq for ResultT<M, E, A>
where
    M::Of<Result<A, E>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<M: Kind, E, A> fmt::Debug for ResultT<M, E, A>
where
    M::Of<Result<A, E>>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ResultT").field(&self.value).finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<M: Kind, E> Kind for ResultTKind<M, E> {
    type Of<A> = ResultT<M, E, A>;
}

impl<M: Monad + 'static, E: Clone + 'static> Functor for ResultTKind<M, E> {
    fn fmap<A, B, F>(value: ResultT<M, E, A>, function: F) -> ResultT<M, E, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl<M: Monad + 'static, E: Clone + 'static> Applicative for ResultTKind<M, E> {
    fn pure<A>(value: A) -> ResultT<M, E, A>
    where
        A: Clone + 'static,
    {
        ResultT::pure(value)
    }

    fn apply<A, B, F>(value: ResultT<M, E, A>, functor: ResultT<M, E, F>) -> ResultT<M, E, B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.apply(functor)
    }
}

impl<M: Monad + 'static, E: Clone + 'static> Monad for ResultTKind<M, E> {
    fn bind<A, B, F>(value: ResultT<M, E, A>, function: F) -> ResultT<M, E, B>
    where
        A: 'static,
        B: Clone + 'static,
        F: Fn(A) -> ResultT<M, E, B> + 'static,
    {
        value.bind(function)
    }
}
