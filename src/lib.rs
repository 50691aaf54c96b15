//! # monadic
//!
//! Computational contexts for Rust: a Functor / Applicative / Monad
//! hierarchy, the contexts that implement it, and generic machinery that
//! works across all of them.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Kind`](typeclass::Kind) markers emulate higher-kinded
//!   types; [`Functor`](typeclass::Functor), [`Applicative`](typeclass::Applicative)
//!   and [`Monad`](typeclass::Monad) are implemented on them. [`sequence`](typeclass::sequence)
//!   is written once for every context.
//! - **Control**: [`Maybe`](control::Maybe), `Result` (through
//!   [`ResultExt`](control::ResultExt)), the [`First`](control::First) /
//!   [`Last`](control::Last) monoids, and [`safe`](control::safe) for turning
//!   panics into values.
//! - **Collections**: [`List`](collection::List) and [`Set`](collection::Set)
//!   as nondeterministic contexts.
//! - **Effects**: [`Reader`](effect::Reader), `Future` (feature `async`), and
//!   the [`MaybeT`](effect::MaybeT) / [`ResultT`](effect::ResultT) transformers.
//! - **Compose**: [`curry`](compose::curry) / [`uncurry`](compose::uncurry) for
//!   functions of one to five arguments.
//!
//! ## Feature Flags
//!
//! - `async` (default): the `Future` context
//! - `serde`: `Serialize` / `Deserialize` for `Maybe`, `List` and `Set`
//! - `full`: every feature
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! let totals = List::new(vec![1, 2]).bind(|a| List::new(vec![a * 10, a * 100]));
//! assert_eq!(totals, List::new(vec![10, 100, 20, 200]));
//!
//! let all = sequence::<MaybeKind, _, _>(vec![Maybe::Just(1), Maybe::Just(2)]);
//! assert_eq!(all, Maybe::Just(vec![1, 2]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
    pub use crate::compose::*;
    pub use crate::control::*;
    pub use crate::effect::*;
    pub use crate::typeclass::*;
}

pub mod collection;
pub mod compose;
pub mod control;
pub mod effect;
pub mod typeclass;
