//! Reader - computation that depends on a shared environment.
//!
//! A `Reader<Env, T>` wraps a function `Env -> T`. Composed readers all see
//! the same environment, supplied once when the outermost reader is run.
//!
//! # Laws
//!
//! Besides the Functor, Applicative and Monad laws, Reader satisfies:
//!
//! - Ask Retrieval: `Reader::ask().run(env) == env`
//! - Local Identity: `m.local(|env| env) == m`
//! - Local Composition: `m.local(g).local(f) == m.local(|env| g(f(env)))`
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! let port = Reader::asks(|config: Config| config.port);
//! let host = Reader::asks(|config: Config| config.host);
//! let address = host.bind(move |host| port.clone().map(move |port| format!("{host}:{port}")));
//!
//! let config = Config { port: 8080, host: "localhost".to_string() };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use std::rc::Rc;

use crate::typeclass::{Applicative, Functor, Kind, Monad};

/// A computation producing a `T` from an environment of type `Env`.
///
/// Readers are reusable: `run` borrows the reader, so the same reader can be
/// run any number of times. Cloning is cheap and shares the function.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::Reader;
///
/// let computation = Reader::ask().bind(|environment: i32| Reader::pure(environment * 2));
/// assert_eq!(computation.run(21), 42);
/// ```
pub struct Reader<Env, T> {
    run_function: Rc<dyn Fn(Env) -> T>,
}

/// Kind marker for [`Reader`] with the environment type fixed.
pub struct ReaderKind<Env>(std::marker::PhantomData<fn(Env)>);

static_assertions::assert_not_impl_any!(Reader<i32, i32>: Send, Sync);

impl<Env, T> Clone for Reader<Env, T> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<Env: 'static, T: 'static> Reader<Env, T> {
    /// Creates a reader from a function of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// assert_eq!(reader.run(21), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(Env) -> T + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation with `environment`.
    pub fn run(&self, environment: Env) -> T {
        (self.run_function)(environment)
    }

    /// A reader that ignores the environment and returns `value`.
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Transforms the result.
    pub fn map<B, F>(self, function: F) -> Reader<Env, B>
    where
        B: 'static,
        F: Fn(T) -> B + 'static,
    {
        let original = self.run_function;
        Reader::new(move |environment| function(original(environment)))
    }

    /// Runs both readers with the same environment and applies the function
    /// produced by `functor` to the value produced by `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let scale = Reader::new(|factor: i32| move |n: i32| n * factor);
    /// let value = Reader::new(|factor: i32| factor + 1);
    /// assert_eq!(value.apply(scale).run(3), 12);
    /// ```
    pub fn apply<B, F>(self, functor: Reader<Env, F>) -> Reader<Env, B>
    where
        Env: Clone,
        B: 'static,
        F: Fn(T) -> B + 'static,
    {
        let value = self.run_function;
        let function = functor.run_function;
        Reader::new(move |environment: Env| {
            let applied = function(environment.clone());
            applied(value(environment))
        })
    }

    /// Runs `self`, then runs the reader chosen by `function` with the same
    /// environment.
    pub fn bind<B, F>(self, function: F) -> Reader<Env, B>
    where
        Env: Clone,
        B: 'static,
        F: Fn(T) -> Reader<Env, B> + 'static,
    {
        let original = self.run_function;
        Reader::new(move |environment: Env| {
            let intermediate = original(environment.clone());
            function(intermediate).run(environment)
        })
    }

    /// Runs `self` with the environment transformed by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let doubled = Reader::ask().local(|environment: i32| environment * 2);
    /// assert_eq!(doubled.run(5), 10);
    /// ```
    #[must_use]
    pub fn local<F>(self, modifier: F) -> Self
    where
        F: Fn(Env) -> Env + 'static,
    {
        let original = self.run_function;
        Self::new(move |environment| original(modifier(environment)))
    }

    /// A reader producing a projection of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(Env) -> T + 'static,
    {
        Self::new(projection)
    }

    /// Runs every reader in `values` with the same environment and collects
    /// the results in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let readers = vec![
    ///     Reader::new(|environment: i32| environment + 1),
    ///     Reader::new(|environment: i32| environment * 10),
    /// ];
    /// assert_eq!(Reader::sequence(readers).run(2), vec![3, 20]);
    /// ```
    pub fn sequence<I>(values: I) -> Reader<Env, Vec<T>>
    where
        Env: Clone,
        I: IntoIterator<Item = Self>,
    {
        let readers: Vec<Self> = values.into_iter().collect();
        Reader::new(move |environment: Env| {
            readers
                .iter()
                .map(|reader| reader.run(environment.clone()))
                .collect()
        })
    }
}

impl<Env: 'static> Reader<Env, Env> {
    /// A reader returning the environment itself.
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<Env> Kind for ReaderKind<Env> {
    type Of<A> = Reader<Env, A>;
}

impl<Env: Clone + 'static> Functor for ReaderKind<Env> {
    fn fmap<A, B, F>(value: Reader<Env, A>, function: F) -> Reader<Env, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl<Env: Clone + 'static> Applicative for ReaderKind<Env> {
    fn pure<A>(value: A) -> Reader<Env, A>
    where
        A: Clone + 'static,
    {
        Reader::pure(value)
    }

    fn apply<A, B, F>(value: Reader<Env, A>, functor: Reader<Env, F>) -> Reader<Env, B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.apply(functor)
    }
}

impl<Env: Clone + 'static> Monad for ReaderKind<Env> {
    fn bind<A, B, F>(value: Reader<Env, A>, function: F) -> Reader<Env, B>
    where
        A: 'static,
        B: Clone + 'static,
        F: Fn(A) -> Reader<Env, B> + 'static,
    {
        value.bind(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn reader_can_run_repeatedly() {
        let reader = Reader::new(|environment: i32| environment * environment);
        assert_eq!(reader.run(3), 9);
        assert_eq!(reader.run(4), 16);
    }

    #[rstest]
    fn ask_returns_environment() {
        assert_eq!(Reader::<String, String>::ask().run("env".to_string()), "env");
    }

    #[rstest]
    fn local_identity() {
        let reader = Reader::new(|environment: i32| environment - 1);
        let localized = reader.clone().local(|environment| environment);
        assert_eq!(localized.run(10), reader.run(10));
    }

    #[rstest]
    fn local_composition() {
        let reader = Reader::new(|environment: i32| environment);
        let nested = reader.clone().local(|environment| environment + 1).local(|environment| environment * 2);
        let composed = reader.local(|environment| environment * 2 + 1);
        assert_eq!(nested.run(5), composed.run(5));
    }

    #[rstest]
    fn bind_threads_environment_to_both_stages() {
        let seen = Rc::new(Cell::new(0));
        let recorder = Rc::clone(&seen);
        let reader = Reader::new(|environment: i32| environment).bind(move |first| {
            let recorder = Rc::clone(&recorder);
            Reader::new(move |environment: i32| {
                recorder.set(environment);
                first + environment
            })
        });
        assert_eq!(reader.run(7), 14);
        assert_eq!(seen.get(), 7);
    }

    #[rstest]
    fn clone_shares_function() {
        let reader = Reader::new(|environment: u8| u32::from(environment) + 1);
        let copy = reader.clone();
        assert_eq!(copy.run(1), reader.run(1));
    }

    #[rstest]
    fn sequence_runs_every_reader_against_one_environment() {
        let readers = (0..100_000).map(|offset| Reader::new(move |base: i64| base + offset));
        let collected = Reader::sequence(readers).run(1);
        assert_eq!(collected.len(), 100_000);
        assert_eq!(collected[0], 1);
        assert_eq!(collected[99_999], 100_000);
    }

    #[rstest]
    fn sequence_of_empty_is_empty() {
        let readers: Vec<Reader<i32, i32>> = Vec::new();
        assert!(Reader::sequence(readers).run(0).is_empty());
    }
}
