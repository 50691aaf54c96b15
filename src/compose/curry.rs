//! Currying and uncurrying for functions of one to five arguments.
//!
//! [`curry`] turns an n-ary function into a chain that takes one argument per
//! `run` call, following the same `run` convention as
//! [`Reader`](crate::effect::Reader). Each step is its own type
//! (`Curried5` ... `Curried1`), so the remaining arity is checked at compile
//! time and also reported by [`Curried2::ARITY`] and `remaining()`.
//!
//! Partial applications share the underlying function through `Rc` and can
//! be run any number of times, which is why captured arguments must be
//! `Clone`.
//!
//! # Examples
//!
//! ```rust
//! use monadic::compose::{curry, uncurry};
//!
//! fn volume(width: u32, height: u32, depth: u32) -> u32 {
//!     width * height * depth
//! }
//!
//! let curried = curry(volume);
//! let base = curried.run(2).run(3);
//! assert_eq!(base.run(4), 24);
//! assert_eq!(base.run(5), 30);
//!
//! let plain = uncurry(curried);
//! assert_eq!(plain(1, 2, 3), 6);
//! ```

use std::any::type_name;
use std::rc::Rc;

use crate::effect::Reader;

/// A function of one argument, the last step of every chain.
pub struct Curried1<A, R> {
    function: Rc<dyn Fn(A) -> R>,
}

/// A function of two arguments taken one at a time.
pub struct Curried2<A, B, R> {
    function: Rc<dyn Fn(A, B) -> R>,
}

/// A function of three arguments taken one at a time.
pub struct Curried3<A, B, C, R> {
    function: Rc<dyn Fn(A, B, C) -> R>,
}

/// A function of four arguments taken one at a time.
pub struct Curried4<A, B, C, D, R> {
    function: Rc<dyn Fn(A, B, C, D) -> R>,
}

/// A function of five arguments taken one at a time.
pub struct Curried5<A, B, C, D, E, R> {
    function: Rc<dyn Fn(A, B, C, D, E) -> R>,
}

impl<A: 'static, R: 'static> Curried1<A, R> {
    /// Number of arguments still expected.
    pub const ARITY: usize = 1;

    /// Wraps a one-argument function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> R + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Supplies the last argument and calls the function.
    pub fn run(&self, first: A) -> R {
        (self.function)(first)
    }

    /// Type names of the parameters still expected.
    pub fn remaining(&self) -> Vec<&'static str> {
        vec![type_name::<A>()]
    }

    /// The chain as a reader whose environment is the argument.
    pub fn into_reader(self) -> Reader<A, R> {
        let function = self.function;
        Reader::new(move |first| function(first))
    }
}

impl<A: 'static, B: 'static, R: 'static> Curried2<A, B, R> {
    /// Number of arguments still expected.
    pub const ARITY: usize = 2;

    /// Wraps a two-argument function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A, B) -> R + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Supplies the first argument.
    pub fn run(&self, first: A) -> Curried1<B, R>
    where
        A: Clone,
    {
        let function = Rc::clone(&self.function);
        Curried1::new(move |second| function(first.clone(), second))
    }

    /// Supplies both arguments and calls the function.
    pub fn run2(&self, first: A, second: B) -> R {
        (self.function)(first, second)
    }

    /// Type names of the parameters still expected.
    pub fn remaining(&self) -> Vec<&'static str> {
        vec![type_name::<A>(), type_name::<B>()]
    }

    /// The chain as a reader whose environment is the first argument.
    pub fn into_reader(self) -> Reader<A, Curried1<B, R>>
    where
        A: Clone,
    {
        Reader::new(move |first| self.run(first))
    }
}

impl<A: 'static, B: 'static, C: 'static, R: 'static> Curried3<A, B, C, R> {
    /// Number of arguments still expected.
    pub const ARITY: usize = 3;

    /// Wraps a three-argument function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A, B, C) -> R + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Supplies the first argument.
    pub fn run(&self, first: A) -> Curried2<B, C, R>
    where
        A: Clone,
    {
        let function = Rc::clone(&self.function);
        Curried2::new(move |second, third| function(first.clone(), second, third))
    }

    /// Supplies the first two arguments.
    pub fn run2(&self, first: A, second: B) -> Curried1<C, R>
    where
        A: Clone,
        B: Clone,
    {
        self.run(first).run(second)
    }

    /// Supplies every argument and calls the function.
    pub fn run3(&self, first: A, second: B, third: C) -> R {
        (self.function)(first, second, third)
    }

    /// Type names of the parameters still expected.
    pub fn remaining(&self) -> Vec<&'static str> {
        vec![type_name::<A>(), type_name::<B>(), type_name::<C>()]
    }

    /// The chain as a reader whose environment is the first argument.
    pub fn into_reader(self) -> Reader<A, Curried2<B, C, R>>
    where
        A: Clone,
    {
        Reader::new(move |first| self.run(first))
    }
}

impl<A: 'static, B: 'static, C: 'static, D: 'static, R: 'static> Curried4<A, B, C, D, R> {
    /// Number of arguments still expected.
    pub const ARITY: usize = 4;

    /// Wraps a four-argument function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A, B, C, D) -> R + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Supplies the first argument.
    pub fn run(&self, first: A) -> Curried3<B, C, D, R>
    where
        A: Clone,
    {
        let function = Rc::clone(&self.function);
        Curried3::new(move |second, third, fourth| function(first.clone(), second, third, fourth))
    }

    /// Supplies the first two arguments.
    pub fn run2(&self, first: A, second: B) -> Curried2<C, D, R>
    where
        A: Clone,
        B: Clone,
    {
        self.run(first).run(second)
    }

    /// Supplies the first three arguments.
    pub fn run3(&self, first: A, second: B, third: C) -> Curried1<D, R>
    where
        A: Clone,
        B: Clone,
        C: Clone,
    {
        self.run(first).run(second).run(third)
    }

    /// Supplies every argument and calls the function.
    pub fn run4(&self, first: A, second: B, third: C, fourth: D) -> R {
        (self.function)(first, second, third, fourth)
    }

    /// Type names of the parameters still expected.
    pub fn remaining(&self) -> Vec<&'static str> {
        vec![type_name::<A>(), type_name::<B>(), type_name::<C>(), type_name::<D>()]
    }

    /// The chain as a reader whose environment is the first argument.
    pub fn into_reader(self) -> Reader<A, Curried3<B, C, D, R>>
    where
        A: Clone,
    {
        Reader::new(move |first| self.run(first))
    }
}

impl<A: 'static, B: 'static, C: 'static, D: 'static, E: 'static, R: 'static>
    Curried5<A, B, C, D, E, R>
{
    /// Number of arguments still expected.
    pub const ARITY: usize = 5;

    /// Wraps a five-argument function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A, B, C, D, E) -> R + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Supplies the first argument.
    pub fn run(&self, first: A) -> Curried4<B, C, D, E, R>
    where
        A: Clone,
    {
        let function = Rc::clone(&self.function);
        Curried4::new(move |second, third, fourth, fifth| {
            function(first.clone(), second, third, fourth, fifth)
        })
    }

    /// Supplies the first two arguments.
    pub fn run2(&self, first: A, second: B) -> Curried3<C, D, E, R>
    where
        A: Clone,
        B: Clone,
    {
        self.run(first).run(second)
    }

    /// Supplies the first three arguments.
    pub fn run3(&self, first: A, second: B, third: C) -> Curried2<D, E, R>
    where
        A: Clone,
        B: Clone,
        C: Clone,
    {
        self.run(first).run(second).run(third)
    }

    /// Supplies the first four arguments.
    pub fn run4(&self, first: A, second: B, third: C, fourth: D) -> Curried1<E, R>
    where
        A: Clone,
        B: Clone,
        C: Clone,
        D: Clone,
    {
        self.run(first).run(second).run(third).run(fourth)
    }

    /// Supplies every argument and calls the function.
    pub fn run5(&self, first: A, second: B, third: C, fourth: D, fifth: E) -> R {
        (self.function)(first, second, third, fourth, fifth)
    }

    /// Type names of the parameters still expected.
    pub fn remaining(&self) -> Vec<&'static str> {
        vec![
            type_name::<A>(),
            type_name::<B>(),
            type_name::<C>(),
            type_name::<D>(),
            type_name::<E>(),
        ]
    }

    /// The chain as a reader whose environment is the first argument.
    pub fn into_reader(self) -> Reader<A, Curried4<B, C, D, E, R>>
    where
        A: Clone,
    {
        Reader::new(move |first| self.run(first))
    }
}

macro_rules! impl_shared_clone {
    ($name:ident < $($parameter:ident),+ >) => {
        impl<$($parameter),+> Clone for $name<$($parameter),+> {
            fn clone(&self) -> Self {
                Self {
                    function: Rc::clone(&self.function),
                }
            }
        }
    };
}

impl_shared_clone!(Curried1<A, R>);
impl_shared_clone!(Curried2<A, B, R>);
impl_shared_clone!(Curried3<A, B, C, R>);
impl_shared_clone!(Curried4<A, B, C, D, R>);
impl_shared_clone!(Curried5<A, B, C, D, E, R>);

// =============================================================================
// Curry / Uncurry
// =============================================================================

/// Functions that can be turned into a curried chain.
///
/// `Args` is the tuple of parameter types; it only selects the arity and is
/// inferred at the call site.
pub trait Curry<Args> {
    /// The chain produced for this arity.
    type Curried;

    /// Converts `self` into a curried chain.
    fn curry(self) -> Self::Curried;
}

impl<F, A, R> Curry<(A,)> for F
where
    F: Fn(A) -> R + 'static,
    A: 'static,
    R: 'static,
{
    type Curried = Curried1<A, R>;

    fn curry(self) -> Self::Curried {
        Curried1::new(self)
    }
}

impl<F, A, B, R> Curry<(A, B)> for F
where
    F: Fn(A, B) -> R + 'static,
    A: 'static,
    B: 'static,
    R: 'static,
{
    type Curried = Curried2<A, B, R>;

    fn curry(self) -> Self::Curried {
        Curried2::new(self)
    }
}

impl<F, A, B, C, R> Curry<(A, B, C)> for F
where
    F: Fn(A, B, C) -> R + 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    R: 'static,
{
    type Curried = Curried3<A, B, C, R>;

    fn curry(self) -> Self::Curried {
        Curried3::new(self)
    }
}

impl<F, A, B, C, D, R> Curry<(A, B, C, D)> for F
where
    F: Fn(A, B, C, D) -> R + 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    R: 'static,
{
    type Curried = Curried4<A, B, C, D, R>;

    fn curry(self) -> Self::Curried {
        Curried4::new(self)
    }
}

impl<F, A, B, C, D, E, R> Curry<(A, B, C, D, E)> for F
where
    F: Fn(A, B, C, D, E) -> R + 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    E: 'static,
    R: 'static,
{
    type Curried = Curried5<A, B, C, D, E, R>;

    fn curry(self) -> Self::Curried {
        Curried5::new(self)
    }
}

/// Converts a function of one to five arguments into a curried chain.
///
/// # Examples
///
/// ```rust
/// use monadic::compose::curry;
///
/// let greet = curry(|greeting: &str, name: &str| format!("{greeting}, {name}!"));
/// assert_eq!(greet.run("Hello").run("world"), "Hello, world!");
/// ```
pub fn curry<Args, F>(function: F) -> F::Curried
where
    F: Curry<Args>,
{
    function.curry()
}

/// Curried chains that can be turned back into a single n-ary function.
pub trait Uncurry {
    /// The n-ary function type.
    type Uncurried;

    /// Returns one function taking every remaining argument at once.
    fn uncurry(self) -> Self::Uncurried;
}

impl<A, R> Uncurry for Curried1<A, R> {
    type Uncurried = Rc<dyn Fn(A) -> R>;

    fn uncurry(self) -> Self::Uncurried {
        self.function
    }
}

impl<A, B, R> Uncurry for Curried2<A, B, R> {
    type Uncurried = Rc<dyn Fn(A, B) -> R>;

    fn uncurry(self) -> Self::Uncurried {
        self.function
    }
}

impl<A, B, C, R> Uncurry for Curried3<A, B, C, R> {
    type Uncurried = Rc<dyn Fn(A, B, C) -> R>;

    fn uncurry(self) -> Self::Uncurried {
        self.function
    }
}

impl<A, B, C, D, R> Uncurry for Curried4<A, B, C, D, R> {
    type Uncurried = Rc<dyn Fn(A, B, C, D) -> R>;

    fn uncurry(self) -> Self::Uncurried {
        self.function
    }
}

impl<A, B, C, D, E, R> Uncurry for Curried5<A, B, C, D, E, R> {
    type Uncurried = Rc<dyn Fn(A, B, C, D, E) -> R>;

    fn uncurry(self) -> Self::Uncurried {
        self.function
    }
}

/// Converts a curried chain back into a single n-ary function.
pub fn uncurry<C>(curried: C) -> C::Uncurried
where
    C: Uncurry,
{
    curried.uncurry()
}

// =============================================================================
// Binary
// =============================================================================

/// Two-argument functions in either plain or curried form.
///
/// Folds accept any `Binary`, so a [`Curried2`] is uncurried automatically.
pub trait Binary<A, B, R> {
    /// Calls the function with both arguments.
    fn call(&self, first: A, second: B) -> R;
}

impl<A, B, R, F> Binary<A, B, R> for F
where
    F: Fn(A, B) -> R,
{
    fn call(&self, first: A, second: B) -> R {
        self(first, second)
    }
}

impl<A, B, R> Binary<A, B, R> for Curried2<A, B, R> {
    fn call(&self, first: A, second: B) -> R {
        (self.function)(first, second)
    }
}
