//! Future - a single asynchronous computation as a context.
//!
//! [`Future<T>`] wraps any `std::future::Future<Output = T>` and gives it
//! `map`/`apply`/`bind`. It implements `std::future::Future` itself, so the
//! result is obtained with `.await` on whatever executor the caller already
//! runs. Nothing happens until the future is polled.
//!
//! A `Future` is consumed by every operation and by `.await`, so it can be
//! used exactly once.
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::Future;
//!
//! # futures::executor::block_on(async {
//! let total = Future::pure(10)
//!     .map(|n| n * 2)
//!     .bind(|n| Future::new(async move { n + 1 }));
//! assert_eq!(total.await, 21);
//! # });
//! ```

use std::future::Future as StdFuture;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, FutureExt, LocalBoxFuture};

use crate::typeclass::{Applicative, Functor, Kind, Monad};

/// A deferred asynchronous computation producing a `T`.
///
/// Not `Send`: it is meant to be awaited on the task that built it.
pub struct Future<T> {
    inner: LocalBoxFuture<'static, T>,
}

/// Kind marker for [`Future`].
#[derive(Debug, Clone, Copy)]
pub struct FutureKind;

static_assertions::assert_impl_all!(Future<i32>: StdFuture<Output = i32>, Unpin);
static_assertions::assert_not_impl_any!(Future<i32>: Send, Sync, Clone);

impl<T: 'static> Future<T> {
    /// Lifts an existing awaitable.
    pub fn new<F>(awaitable: F) -> Self
    where
        F: StdFuture<Output = T> + 'static,
    {
        Self {
            inner: awaitable.boxed_local(),
        }
    }

    /// A future that is immediately ready with `value`.
    pub fn pure(value: T) -> Self {
        Self::new(future::ready(value))
    }

    /// Transforms the result once it is available.
    pub fn map<B, F>(self, function: F) -> Future<B>
    where
        B: 'static,
        F: FnOnce(T) -> B + 'static,
    {
        Future::new(self.inner.map(function))
    }

    /// Awaits the function produced by `functor`, then awaits `self`, then
    /// applies one to the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Future;
    ///
    /// # futures::executor::block_on(async {
    /// let function = Future::pure(|n: i32| n * 3);
    /// assert_eq!(Future::pure(5).apply(function).await, 15);
    /// # });
    /// ```
    pub fn apply<B, F>(self, functor: Future<F>) -> Future<B>
    where
        B: 'static,
        F: FnOnce(T) -> B + 'static,
    {
        Future::new(async move {
            let function = functor.await;
            let value = self.await;
            function(value)
        })
    }

    /// Awaits `self`, then awaits the future chosen by `function`.
    pub fn bind<B, F>(self, function: F) -> Future<B>
    where
        B: 'static,
        F: FnOnce(T) -> Future<B> + 'static,
    {
        Future::new(async move { function(self.await).await })
    }

    /// Awaits every future in `values`, one after another, and collects the
    /// results in order.
    pub fn sequence<I>(values: I) -> Future<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        let pending: Vec<Self> = values.into_iter().collect();
        Future::new(async move {
            let mut collected = Vec::with_capacity(pending.len());
            for future in pending {
                collected.push(future.await);
            }
            collected
        })
    }
}

impl<T> StdFuture for Future<T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<T> {
        self.inner.as_mut().poll(context)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl Kind for FutureKind {
    type Of<A> = Future<A>;
}

impl Functor for FutureKind {
    fn fmap<A, B, F>(value: Future<A>, function: F) -> Future<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl Applicative for FutureKind {
    fn pure<A>(value: A) -> Future<A>
    where
        A: Clone + 'static,
    {
        Future::pure(value)
    }

    fn apply<A, B, F>(value: Future<A>, functor: Future<F>) -> Future<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.apply(functor)
    }
}

impl Monad for FutureKind {
    fn bind<A, B, F>(value: Future<A>, function: F) -> Future<B>
    where
        A: 'static,
        B: Clone + 'static,
        F: Fn(A) -> Future<B> + 'static,
    {
        value.bind(function)
    }
}
