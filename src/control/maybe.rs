//! Maybe type - a value that may be absent.
//!
//! `Maybe<T>` is either `Just(T)` or `Nothing`. `Nothing` short-circuits:
//! once reached, `map`, `apply` and `bind` pass it through without calling
//! their function.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//!
//! let parsed = Maybe::from_optional("42".parse::<i32>().ok())
//!     .bind(|n| if n > 0 { Maybe::Just(n) } else { Maybe::Nothing })
//!     .map(|n| n * 2);
//! assert_eq!(parsed, Maybe::Just(84));
//! assert_eq!(Maybe::<i32>::Nothing.or_else(0), 0);
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Kind, Monad, ShortCircuit};

/// An optional value: `Just(T)` or `Nothing`.
///
/// # Type Parameters
///
/// * `T` - The type of the carried value
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
///
/// let present = Maybe::Just(3);
/// let absent: Maybe<i32> = Maybe::Nothing;
///
/// assert_eq!(present.map(|n| n + 1), Maybe::Just(4));
/// assert_eq!(absent.map(|n| n + 1), Maybe::Nothing);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    Nothing,
}

/// Kind marker for [`Maybe`].
#[derive(Debug, Clone, Copy)]
pub struct MaybeKind;

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Converts `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Context Operations
    // =========================================================================

    /// Lifts `value` into `Just`.
    #[inline]
    pub const fn pure(value: T) -> Self {
        Self::Just(value)
    }

    /// Applies `function` to a `Just` value; `Nothing` is returned unchanged.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies the function held by `functor` to this value.
    ///
    /// The result is `Nothing` unless both sides are `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(2).apply(Maybe::Just(|n: i32| n * 5)), Maybe::Just(10));
    /// assert_eq!(Maybe::Just(2).apply(Maybe::<fn(i32) -> i32>::Nothing), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn apply<B, F>(self, functor: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match functor {
            Maybe::Just(function) => self.map(function),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Routes a `Just` value through `function`; `Nothing` never calls it.
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the held value, or `default` when `Nothing`.
    #[inline]
    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts to a `Result`, using `error` for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).to_result("missing"), Ok(1));
    /// assert_eq!(Maybe::<i32>::Nothing.to_result("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn to_result<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(error),
        }
    }

    /// Converts any short-circuiting context (such as a `Result`) to a
    /// `Maybe`, dropping the failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_result(Ok::<i32, String>(1)), Maybe::Just(1));
    /// assert_eq!(Maybe::from_result(Err::<i32, String>("e".into())), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn from_result<R>(result: R) -> Self
    where
        R: ShortCircuit<Value = T>,
    {
        Self::from_optional(result.into_value())
    }

    /// `Some` becomes `Just`, `None` becomes `Nothing`.
    #[inline]
    pub fn from_optional(value: Option<T>) -> Self {
        value.map_or(Self::Nothing, Self::Just)
    }

    /// `Just` becomes `Some`, `Nothing` becomes `None`.
    #[inline]
    pub fn to_optional(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns `Just` of the first element, or `Nothing` if `values` is empty.
    #[inline]
    pub fn from_list<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_optional(values.into_iter().next())
    }

    /// Returns `Just(value)` when `predicate` holds for it, else `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_predicate(4, |n| n % 2 == 0), Maybe::Just(4));
    /// assert_eq!(Maybe::from_predicate(3, |n| n % 2 == 0), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn from_predicate<P>(value: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) { Self::Just(value) } else { Self::Nothing }
    }

    /// Collects `values` into `Just` of every value, or `Nothing` if any is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::sequence(vec![Maybe::Just(1), Maybe::Just(2)]), Maybe::Just(vec![1, 2]));
    /// assert_eq!(Maybe::sequence(vec![Maybe::Just(1), Maybe::Nothing]), Maybe::Nothing);
    /// ```
    pub fn sequence<I>(values: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        Maybe::from_optional(values.into_iter().map(Maybe::to_optional).collect())
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// Deeper nesting is collapsed by calling `flatten` once per level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let nested = Maybe::Just(Maybe::Just(Maybe::Just(1)));
    /// assert_eq!(nested.flatten().flatten(), Maybe::Just(1));
    /// assert_eq!(Maybe::Just(Maybe::<i32>::Nothing).flatten(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_optional(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.to_optional()
    }
}

impl<T> ShortCircuit for Maybe<T> {
    type Value = T;

    #[inline]
    fn is_short_circuit(&self) -> bool {
        self.is_nothing()
    }

    #[inline]
    fn into_value(self) -> Option<T> {
        self.to_optional()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl Kind for MaybeKind {
    type Of<A> = Maybe<A>;
}

impl Functor for MaybeKind {
    #[inline]
    fn fmap<A, B, F>(value: Maybe<A>, function: F) -> Maybe<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl Applicative for MaybeKind {
    #[inline]
    fn pure<A>(value: A) -> Maybe<A>
    where
        A: Clone + 'static,
    {
        Maybe::Just(value)
    }

    #[inline]
    fn apply<A, B, F>(value: Maybe<A>, functor: Maybe<F>) -> Maybe<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        value.apply(functor)
    }
}

impl Monad for MaybeKind {
    #[inline]
    fn bind<A, B, F>(value: Maybe<A>, function: F) -> Maybe<B>
    where
        A: 'static,
        B: Clone + 'static,
        F: Fn(A) -> Maybe<B> + 'static,
    {
        value.bind(function)
    }
}
