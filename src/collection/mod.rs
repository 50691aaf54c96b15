//! Multi-valued contexts.
//!
//! - [`List`]: ordered, duplicates kept; `bind` concatenates
//! - [`Set`]: duplicates collapse, equality by membership; `bind` unions
//!
//! Both model nondeterministic computation: `bind` explores every element
//! and `apply` takes the full cross product of functions and values.
//!
//! # Examples
//!
//! ```rust
//! use monadic::collection::{List, Set};
//!
//! let dice = List::new(vec![1, 2, 3]);
//! let totals = dice.clone().bind(|a| dice.clone().map(move |b| a + b));
//! assert_eq!(totals.len(), 9);
//!
//! let distinct: Set<i32> = totals.into_iter().collect();
//! assert_eq!(distinct.len(), 5);
//! ```

mod list;
mod set;

pub use list::{List, ListKind};
pub use set::{Iter as SetIter, Set, SetKind};
