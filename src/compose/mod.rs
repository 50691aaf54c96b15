//! Function adaptation utilities.
//!
//! - [`curry`]: turn a function of one to five arguments into a chain of
//!   single-argument steps (`Curried5` ... `Curried1`)
//! - [`uncurry`]: turn a chain back into one n-ary function
//! - [`Binary`]: accept a two-argument function in plain or curried form
//!
//! # Examples
//!
//! ```rust
//! use monadic::compose::curry;
//!
//! let clamp = curry(|low: i32, high: i32, value: i32| value.clamp(low, high));
//! let percent = clamp.run2(0, 100);
//! assert_eq!(percent.run(150), 100);
//! assert_eq!(percent.run(-3), 0);
//! ```

mod curry;

pub use curry::{
    Binary, Curried1, Curried2, Curried3, Curried4, Curried5, Curry, Uncurry, curry, uncurry,
};
