//! Contexts that can stop a computation early.
//!
//! [`Maybe`](crate::control::Maybe) stops at `Nothing` and `Result` stops at
//! `Err`. Conversions between the two are written against this trait, so
//! neither type has to name the other.

/// A context holding either a value or a short-circuit marker.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::typeclass::ShortCircuit;
///
/// assert!(Maybe::<i32>::Nothing.is_short_circuit());
/// assert_eq!(Ok::<i32, String>(3).into_value(), Some(3));
/// ```
pub trait ShortCircuit {
    /// The type of the carried value.
    type Value;

    /// Returns `true` when the context holds no value.
    fn is_short_circuit(&self) -> bool;

    /// Extracts the value, discarding any failure payload.
    fn into_value(self) -> Option<Self::Value>;
}

impl<T, E> ShortCircuit for Result<T, E> {
    type Value = T;

    #[inline]
    fn is_short_circuit(&self) -> bool {
        self.is_err()
    }

    #[inline]
    fn into_value(self) -> Option<T> {
        self.ok()
    }
}
