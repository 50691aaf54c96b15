//! Integration tests for `curry` / `uncurry` and their use inside contexts.

use monadic::prelude::*;
use rstest::rstest;

fn volume(length: u32, width: u32, height: u32) -> u32 {
    length * width * height
}

#[rstest]
fn curry_fn_item() {
    let curried = curry(volume);
    assert_eq!(curried.run(2).run(3).run(4), 24);
    assert_eq!(curried.run3(2, 3, 4), 24);
    assert_eq!(Curried3::<u32, u32, u32, u32>::ARITY, 3);
}

#[rstest]
#[case(1, 2, 3, 4, 5, 15)]
#[case(0, 0, 0, 0, 0, 0)]
#[case(-5, 5, -5, 5, 1, 1)]
fn five_arguments_in_any_grouping(
    #[case] a: i64,
    #[case] b: i64,
    #[case] c: i64,
    #[case] d: i64,
    #[case] e: i64,
    #[case] expected: i64,
) {
    let sum = curry(|a: i64, b: i64, c: i64, d: i64, e: i64| a + b + c + d + e);

    assert_eq!(sum.run5(a, b, c, d, e), expected);
    assert_eq!(sum.run2(a, b).run3(c, d, e), expected);
    assert_eq!(sum.run(a).run(b).run(c).run(d).run(e), expected);
    assert_eq!(sum.run4(a, b, c, d).run(e), expected);
}

#[rstest]
fn partially_applied_chain_is_reusable() {
    let tag = curry(|open: char, close: char, body: String| format!("{open}{body}{close}"));
    let parenthesised = tag.run2('(', ')');

    assert_eq!(parenthesised.run("a".to_string()), "(a)");
    assert_eq!(parenthesised.run("b".to_string()), "(b)");
    assert_eq!(parenthesised.clone().run(String::new()), "()");
}

#[rstest]
fn remaining_shrinks_with_each_step() {
    let chain = curry(|a: u8, b: u16, c: u32| u64::from(a) + u64::from(b) + u64::from(c));
    assert_eq!(chain.remaining().len(), 3);
    assert_eq!(chain.run(1).remaining(), vec!["u16", "u32"]);
    assert_eq!(chain.run2(1, 2).remaining(), vec!["u32"]);
}

#[rstest]
fn uncurry_restores_n_ary_call() {
    let curried = curry(volume);
    let restored = uncurry(curried.clone());
    assert_eq!(restored(2, 5, 7), curried.run3(2, 5, 7));

    let partial = uncurry(curried.run(10));
    assert_eq!(partial(1, 1), 10);
}

#[rstest]
fn curried_steps_map_over_lists() {
    let add = curry(|a: i32, b: i32| a + b);
    let functions = List::new(vec![1, 10]).map(move |n| add.run(n));
    let results = List::new(vec![1, 2]).apply(functions.map(|step| move |n| step.run(n)));
    assert_eq!(results, List::new(vec![2, 3, 11, 12]));
}

#[rstest]
fn curried_reader_uses_first_argument_as_environment() {
    let scale = curry(|factor: i32, n: i32| factor * n);
    let reader = scale.into_reader().map(|step: Curried1<i32, i32>| step.run(7));
    assert_eq!(reader.run(3), 21);
}
