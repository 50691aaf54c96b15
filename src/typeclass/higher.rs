//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` or
//! `Reader<Env, _>` directly. This module works around that with *kind
//! markers*: zero-sized types that name a constructor through a generic
//! associated type. Generic code (for example [`sequence`](super::sequence)
//! or the monad transformers) is then written against the marker instead of
//! against a concrete container.
//!
//! # Example
//!
//! ```rust
//! use monadic::control::{Maybe, MaybeKind};
//! use monadic::typeclass::Kind;
//!
//! fn wrap<K: Kind>(value: K::Of<i32>) -> K::Of<i32> {
//!     value
//! }
//!
//! assert_eq!(wrap::<MaybeKind>(Maybe::Just(1)), Maybe::Just(1));
//! ```

/// A marker for a type constructor of one argument.
///
/// # Associated Types
///
/// - `Of<A>`: The constructor applied to `A`.
///
/// # Laws
///
/// Implementors are uninhabited or zero-sized markers; they carry no data.
/// The constructor they name must not depend on `A` beyond holding values of
/// it, so that `Of<A>` and `Of<B>` describe the same shape.
///
/// # Example
///
/// ```rust
/// use monadic::collection::{List, ListKind};
/// use monadic::typeclass::Kind;
///
/// let numbers: <ListKind as Kind>::Of<i32> = List::new(vec![1, 2, 3]);
/// assert_eq!(numbers.len(), 3);
/// ```
pub trait Kind {
    /// The type constructor applied to `A`.
    type Of<A>;
}
