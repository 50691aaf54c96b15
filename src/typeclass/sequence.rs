//! Turning a collection of contexts into a context of a collection.

use super::applicative::Applicative;

/// Collects `values` into a single context holding a `Vec` of their contents.
///
/// Elements are combined strictly left to right, starting from
/// `M::pure(Vec::new())`. For short-circuiting contexts the first
/// short-circuit met is the result; for collections the result is the cross
/// product of every element, ordered by the leftmost element first.
///
/// The kind has to be named because it cannot be recovered from `M::Of<A>`.
///
/// Deferred contexts such as `Reader` and `Future` build one nested layer
/// per element here, and every step copies the prefix. Long inputs should go
/// through the inherent `sequence` of each context, which collects in a
/// single pass.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{Maybe, MaybeKind};
/// use monadic::typeclass::sequence;
///
/// let all = sequence::<MaybeKind, _, _>(vec![Maybe::Just(1), Maybe::Just(2)]);
/// assert_eq!(all, Maybe::Just(vec![1, 2]));
///
/// let missing = sequence::<MaybeKind, _, _>(vec![Maybe::Just(1), Maybe::Nothing]);
/// assert_eq!(missing, Maybe::Nothing);
/// ```
pub fn sequence<M, A, I>(values: I) -> M::Of<Vec<A>>
where
    M: Applicative,
    A: Clone + 'static,
    I: IntoIterator<Item = M::Of<A>>,
{
    values
        .into_iter()
        .fold(M::pure(Vec::<A>::new()), |accumulator, value| {
            let extend = M::fmap(accumulator, |prefix: Vec<A>| {
                move |element: A| {
                    let mut next = prefix.clone();
                    next.push(element);
                    next
                }
            });
            M::apply(value, extend)
        })
}
