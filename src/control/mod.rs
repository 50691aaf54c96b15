//! Short-circuiting contexts.
//!
//! - [`Maybe`]: a value that may be absent
//! - `Result`: the standard library type, extended by [`ResultExt`]
//! - [`First`] and [`Last`]: monoids selecting one `Just` out of many
//! - [`safe`] and [`Fault`]: capturing panics as `Err` values
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Maybe, ResultExt, first};
//!
//! let lookups = vec![Maybe::Nothing, Maybe::Just("cache"), Maybe::Just("disk")];
//! let hit = first(lookups).to_result("miss");
//! assert_eq!(hit, Ok("cache"));
//! assert_eq!(hit.to_maybe(), Maybe::Just("cache"));
//! ```

mod fault;
mod maybe;
mod result;
mod selection;

pub use fault::Fault;
pub use maybe::{Maybe, MaybeKind};
pub use result::{ResultExt, ResultKind, safe};
pub use selection::{First, Last, first, last};
