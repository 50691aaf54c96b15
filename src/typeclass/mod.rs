//! Type class traits for computational contexts.
//!
//! The capability hierarchy:
//!
//! - [`Kind`]: names a type constructor through a generic associated type
//! - [`Functor`]: mapping over context values
//! - [`Applicative`]: lifting values and applying wrapped functions
//! - [`Monad`]: sequencing dependent computations
//!
//! Around it:
//!
//! - [`Semigroup`] and [`Monoid`]: combinable values with an identity
//! - [`ShortCircuit`]: contexts that can stop early (`Maybe`, `Result`)
//! - [`sequence`]: the one generic traversal shared by every context
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types. Each context has a zero-sized *kind
//! marker* (`MaybeKind`, `ListKind`, `ReaderKind<Env>`, ...) implementing
//! [`Kind`], and the type classes are implemented on the marker. Operations
//! are associated functions rather than methods, so they are called through
//! the marker: `MaybeKind::fmap(value, f)`. Every concrete context also has
//! inherent `map`/`apply`/`bind` methods for everyday chaining.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Maybe, MaybeKind};
//! use monadic::typeclass::{Applicative, Functor, Monad};
//!
//! let lifted: Maybe<i32> = MaybeKind::pure(20);
//! let doubled = MaybeKind::fmap(lifted, |n: i32| n * 2);
//! let checked = MaybeKind::bind(doubled, |n: i32| {
//!     if n > 10 { Maybe::Just(n) } else { Maybe::Nothing }
//! });
//! assert_eq!(checked, Maybe::Just(40));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod sequence;
mod short_circuit;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::Kind;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use sequence::sequence;
pub use short_circuit::ShortCircuit;
