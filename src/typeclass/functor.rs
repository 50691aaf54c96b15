//! Functor type class - mapping over context values.
//!
//! A `Functor` lets a function be applied to the value(s) held by a context
//! without changing the context's shape.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fmap(fmap(fa, f), g) == fmap(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Maybe, MaybeKind};
//! use monadic::typeclass::Functor;
//!
//! let shown = MaybeKind::fmap(Maybe::Just(5), |n: i32| n.to_string());
//! assert_eq!(shown, Maybe::Just("5".to_string()));
//!
//! let missing = MaybeKind::fmap(Maybe::<i32>::Nothing, |n: i32| n.to_string());
//! assert_eq!(missing, Maybe::Nothing);
//! ```

use super::higher::Kind;

/// A type class for contexts that can have a function mapped over their contents.
///
/// The function is taken as `Fn` rather than `FnOnce` because several
/// contexts call it more than once: a [`List`](crate::collection::List) calls
/// it per element, a [`Reader`](crate::effect::Reader) per run.
///
/// # Examples
///
/// ```rust
/// use monadic::collection::{List, ListKind};
/// use monadic::typeclass::Functor;
///
/// let doubled = ListKind::fmap(List::new(vec![1, 2, 3]), |n: i32| n * 2);
/// assert_eq!(doubled, List::new(vec![2, 4, 6]));
/// ```
pub trait Functor: Kind {
    /// Applies `function` to the value(s) inside `value`.
    ///
    /// # Arguments
    ///
    /// * `value` - The context to transform
    /// * `function` - A function from the inner type to the new inner type
    ///
    /// # Returns
    ///
    /// A context of the same shape holding the transformed value(s).
    fn fmap<A, B, F>(value: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static;

    /// Replaces the value(s) inside the context with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Maybe, MaybeKind};
    /// use monadic::typeclass::Functor;
    ///
    /// assert_eq!(MaybeKind::replace(Maybe::Just(5), "five"), Maybe::Just("five"));
    /// assert_eq!(MaybeKind::replace(Maybe::<i32>::Nothing, "five"), Maybe::Nothing);
    /// ```
    #[inline]
    fn replace<A, B>(value: Self::Of<A>, constant: B) -> Self::Of<B>
    where
        A: 'static,
        B: Clone + 'static,
    {
        Self::fmap::<A, B, _>(value, move |_| constant.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{List, ListKind, Set, SetKind};
    use crate::control::{Maybe, MaybeKind, ResultKind};
    use crate::effect::{Reader, ReaderKind};
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::Just(3), Maybe::Just(4))]
    #[case(Maybe::Nothing, Maybe::Nothing)]
    fn maybe_fmap_adds_one(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(MaybeKind::fmap(input, |n: i32| n + 1), expected);
    }

    #[rstest]
    fn result_fmap_leaves_error_untouched() {
        let failure: Result<i32, String> = Err("boom".to_string());
        assert_eq!(
            ResultKind::<String>::fmap(failure, |n: i32| n + 1),
            Err("boom".to_string())
        );
    }

    #[rstest]
    fn list_fmap_preserves_order() {
        let mapped = ListKind::fmap(List::new(vec![3, 1, 2]), |n: i32| n * 10);
        assert_eq!(mapped, List::new(vec![30, 10, 20]));
    }

    #[rstest]
    fn set_fmap_collapses_collisions() {
        let mapped = SetKind::fmap(Set::new(vec![1, 2, 3, 4]), |n: i32| n % 2);
        assert_eq!(mapped.len(), 2);
        assert_eq!(mapped, Set::new(vec![0, 1]));
    }

    #[rstest]
    fn reader_fmap_composes_after_run() {
        let reader = Reader::new(|environment: i32| environment + 1);
        let mapped = ReaderKind::<i32>::fmap(reader, |n: i32| n * 2);
        assert_eq!(mapped.run(4), 10);
    }

    #[rstest]
    fn replace_keeps_shape() {
        let replaced = ListKind::replace(List::new(vec![1, 2, 3]), 'x');
        assert_eq!(replaced, List::new(vec!['x', 'x', 'x']));
    }
}
