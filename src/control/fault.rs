//! Panics captured at the boundary of the algebra.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// A panic raised by a wrapped computation, re-expressed as a value.
///
/// Produced only by [`Fault::capture`] and [`safe`](super::safe).
///
/// # Examples
///
/// ```
/// use monadic::control::Fault;
///
/// let fault = Fault::new("division by zero");
/// assert_eq!(fault.message(), "division by zero");
/// assert_eq!(fault.to_string(), "computation panicked: division by zero");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("computation panicked: {message}")]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Creates a `Fault` carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Runs `thunk`, returning `Ok` with its result or `Err` if it panicked.
    ///
    /// The panic hook still runs, so a message may be printed to stderr.
    ///
    /// # Errors
    ///
    /// Returns a `Fault` holding the panic message when `thunk` panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use monadic::control::Fault;
    ///
    /// assert_eq!(Fault::capture(|| 2 + 2), Ok(4));
    ///
    /// let failed = Fault::capture(|| -> i32 { panic!("bad input") });
    /// assert_eq!(failed, Err(Fault::new("bad input")));
    /// ```
    pub fn capture<T, F>(thunk: F) -> Result<T, Self>
    where
        F: FnOnce() -> T,
    {
        panic::catch_unwind(AssertUnwindSafe(thunk)).map_err(|payload| {
            let fault = Self::from_payload(payload.as_ref());
            tracing::debug!(message = %fault.message, "captured panic as fault");
            fault
        })
    }

    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        payload
            .downcast_ref::<&str>()
            .map(|message| Self::new(*message))
            .or_else(|| payload.downcast_ref::<String>().map(|message| Self::new(message.clone())))
            .unwrap_or_else(|| Self::new("unknown panic payload"))
    }
}
