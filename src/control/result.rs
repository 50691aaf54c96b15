//! Result as a computational context.
//!
//! `std::result::Result` is used as-is. [`ResultKind`] lets it take part in
//! the type classes, [`ResultExt`] adds the bridges to [`Maybe`] and to
//! `Option`, and [`safe`] turns panicking functions into `Result`-returning
//! ones.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Maybe, ResultExt};
//!
//! let parsed: Result<i32, String> = "12".parse::<i32>().map_error(|error| error.to_string());
//! assert_eq!(parsed.clone().to_maybe(), Maybe::Just(12));
//! assert_eq!(Result::from_maybe(Maybe::<i32>::Nothing, "missing"), Err("missing"));
//! ```

use std::marker::PhantomData;

use super::fault::Fault;
use super::maybe::Maybe;
use crate::typeclass::{Applicative, Functor, Kind, Monad, ShortCircuit};

/// Kind marker for `Result<_, E>` with the error type fixed.
pub struct ResultKind<E>(PhantomData<fn() -> E>);

/// Bridges and helpers for `Result`.
pub trait ResultExt<T, E>: Sized {
    /// Transforms the `Err` payload, leaving `Ok` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::ResultExt;
    ///
    /// let failure: Result<i32, i32> = Err(404);
    /// assert_eq!(failure.map_error(|code| format!("status {code}")), Err("status 404".to_string()));
    /// assert_eq!(Ok::<i32, i32>(1).map_error(|code| code + 1), Ok(1));
    /// ```
    fn map_error<G, F>(self, function: F) -> Result<T, G>
    where
        F: FnOnce(E) -> G;

    /// `Ok` becomes `Just`, `Err` becomes `Nothing`.
    fn to_maybe(self) -> Maybe<T>;

    /// `Ok` becomes `Some`, `Err` becomes `None`.
    fn to_optional(self) -> Option<T>;

    /// Converts a `Maybe` (or any short-circuiting context) to a `Result`,
    /// using `error` when it holds no value.
    fn from_maybe<M>(value: M, error: E) -> Self
    where
        M: ShortCircuit<Value = T>;

    /// `Some` becomes `Ok`, `None` becomes `Err(error)`.
    fn from_optional(value: Option<T>, error: E) -> Self;

    /// Collects `values` into `Ok` of every value, or the first `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::ResultExt;
    ///
    /// let values: Vec<Result<i32, &str>> = vec![Ok(1), Err("bad"), Ok(3)];
    /// assert_eq!(Result::sequence(values), Err("bad"));
    /// ```
    fn sequence<I>(values: I) -> Result<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn map_error<G, F>(self, function: F) -> Result<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(function(error)),
        }
    }

    #[inline]
    fn to_maybe(self) -> Maybe<T> {
        Maybe::from_result(self)
    }

    #[inline]
    fn to_optional(self) -> Option<T> {
        self.ok()
    }

    #[inline]
    fn from_maybe<M>(value: M, error: E) -> Self
    where
        M: ShortCircuit<Value = T>,
    {
        value.into_value().ok_or(error)
    }

    #[inline]
    fn from_optional(value: Option<T>, error: E) -> Self {
        value.ok_or(error)
    }

    fn sequence<I>(values: I) -> Result<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        values.into_iter().collect()
    }
}

/// Wraps `function` so that a panic during a call becomes `Err(Fault)`.
///
/// Typed errors returned by `function` are left alone; only panics are
/// captured.
///
/// The wrapped function takes a single argument, so functions of several
/// arguments take them packed in one tuple.
///
/// # Examples
///
/// ```rust
/// use monadic::control::safe;
///
/// let checked_index = safe(|index: usize| [10, 20, 30][index]);
/// assert_eq!(checked_index(1), Ok(20));
/// assert!(checked_index(5).is_err());
///
/// let divide = safe(|(dividend, divisor): (i32, i32)| dividend / divisor);
/// assert_eq!(divide((7, 2)), Ok(3));
/// assert!(divide((7, 0)).is_err());
/// ```
pub fn safe<A, T, F>(function: F) -> impl Fn(A) -> Result<T, Fault>
where
    F: Fn(A) -> T,
{
    move |argument| Fault::capture(|| function(argument))
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E> Kind for ResultKind<E> {
    type Of<A> = Result<A, E>;
}

impl<E> Functor for ResultKind<E> {
    #[inline]
    fn fmap<A, B, F>(value: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl<E> Applicative for ResultKind<E> {
    #[inline]
    fn pure<A>(value: A) -> Result<A, E>
    where
        A: Clone + 'static,
    {
        Ok(value)
    }

    #[inline]
    fn apply<A, B, F>(value: Result<A, E>, functor: Result<F, E>) -> Result<B, E>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        match functor {
            Ok(function) => value.map(function),
            Err(error) => Err(error),
        }
    }
}

impl<E> Monad for ResultKind<E> {
    #[inline]
    fn bind<A, B, F>(value: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: Clone + 'static,
        F: Fn(A) -> Result<B, E> + 'static,
    {
        value.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::Just(1), Ok(1))]
    #[case(Maybe::Nothing, Err("none"))]
    fn from_maybe_uses_default_error(#[case] value: Maybe<i32>, #[case] expected: Result<i32, &str>) {
        assert_eq!(Result::from_maybe(value, "none"), expected);
    }

    #[rstest]
    #[case(Some('a'), Ok('a'))]
    #[case(None, Err(0))]
    fn from_optional_uses_default_error(#[case] value: Option<char>, #[case] expected: Result<char, i32>) {
        assert_eq!(Result::from_optional(value, 0), expected);
    }

    #[rstest]
    fn to_maybe_drops_error() {
        assert_eq!(Err::<i32, &str>("gone").to_maybe(), Maybe::Nothing);
        assert_eq!(Ok::<i32, &str>(3).to_maybe(), Maybe::Just(3));
        assert_eq!(Ok::<i32, &str>(3).to_optional(), Some(3));
    }

    #[rstest]
    fn map_error_is_not_called_on_ok() {
        let mut called = false;
        let result = Ok::<i32, i32>(1).map_error(|code| {
            called = true;
            code
        });
        assert_eq!(result, Ok(1));
        assert!(!called);
    }

    #[rstest]
    fn safe_captures_division_by_zero() {
        let divide = safe(|(numerator, denominator): (i32, i32)| numerator / denominator);
        assert_eq!(divide((9, 3)), Ok(3));

        let fault = divide((1, 0)).unwrap_err();
        assert!(fault.message().contains("divide by zero"));
    }

    #[rstest]
    fn safe_leaves_typed_errors_alone() {
        let parse = safe(|text: &str| text.parse::<i32>());
        assert!(matches!(parse("x"), Ok(Err(_))));
        assert_eq!(parse("5"), Ok(Ok(5)));
    }

    #[rstest]
    fn safe_wrapper_is_reusable() {
        let head = safe(|values: Vec<i32>| values[0]);
        assert!(head(Vec::new()).is_err());
        assert_eq!(head(vec![4]), Ok(4));
    }
}
