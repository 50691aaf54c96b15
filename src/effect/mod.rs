//! Effectful contexts and monad transformers.
//!
//! - [`Reader`]: computation reading a shared environment
//! - [`Future`]: a single asynchronous computation (requires the `async` feature)
//! - [`MaybeT`]: optional results inside any outer monad
//! - [`ResultT`]: fallible results inside any outer monad
//!
//! # Transformers
//!
//! A transformer is generic over the *kind* of its outer context, so the
//! same `MaybeT` works over a `List`, a `Reader`, a `Future` or another
//! transformer. Its own kind marker ([`MaybeTKind`], [`ResultTKind`])
//! implements the type classes again, so transformers stack.
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::effect::{MaybeT, ResultT, ResultTKind};
//! use monadic::collection::{List, ListKind};
//!
//! type Stack = ResultTKind<ListKind, String>;
//!
//! let inner: ResultT<ListKind, String, Maybe<i32>> =
//!     ResultT::new(List::new(vec![Ok(Maybe::Just(1)), Ok(Maybe::Nothing)]));
//! let stacked: MaybeT<Stack, i32> = MaybeT::new(inner);
//!
//! let incremented = stacked.map(|n| n + 1).run().run();
//! assert_eq!(incremented, List::new(vec![Ok(Maybe::Just(2)), Ok(Maybe::Nothing)]));
//! ```

#[cfg(feature = "async")]
mod future;
mod maybe_transformer;
mod reader;
mod result_transformer;

#[cfg(feature = "async")]
pub use future::{Future, FutureKind};
pub use maybe_transformer::{MaybeT, MaybeTKind};
pub use reader::{Reader, ReaderKind};
pub use result_transformer::{ResultT, ResultTKind};
