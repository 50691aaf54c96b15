#![cfg(feature = "async")]
//! Integration tests for `MaybeT` and `ResultT` over different outer contexts.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use monadic::prelude::*;
use rstest::rstest;

// =============================================================================
// MaybeT over Future
// =============================================================================

fn lookup(table: Rc<HashMap<u32, &'static str>>, key: u32) -> MaybeT<FutureKind, &'static str> {
    MaybeT::new(Future::new(async move {
        Maybe::from_optional(table.get(&key).copied())
    }))
}

fn users() -> Rc<HashMap<u32, &'static str>> {
    Rc::new(HashMap::from([(1, "ada"), (2, "grace")]))
}

#[tokio::test]
async fn maybe_t_future_found() {
    let name = lookup(users(), 1).map(str::len);
    assert_eq!(name.run().await, Maybe::Just(3));
}

#[tokio::test]
async fn maybe_t_future_missing_skips_continuation() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let table = users();

    let chained = lookup(Rc::clone(&table), 9).bind(move |name| {
        counter.set(counter.get() + 1);
        lookup(Rc::clone(&table), u32::try_from(name.len()).unwrap_or(0))
    });

    assert_eq!(chained.run().await, Maybe::Nothing);
    assert_eq!(calls.get(), 0);
}

#[tokio::test]
async fn maybe_t_future_lift_and_apply() {
    let lifted: MaybeT<FutureKind, i32> = MaybeT::lift(Future::pure(4));
    let double: fn(i32) -> i32 = |n| n * 2;
    let functor: MaybeT<FutureKind, fn(i32) -> i32> = MaybeT::pure(double);
    assert_eq!(lifted.apply(functor).run().await, Maybe::Just(8));

    let absent: MaybeT<FutureKind, fn(i32) -> i32> = MaybeT::nothing();
    let lifted: MaybeT<FutureKind, i32> = MaybeT::lift(Future::pure(4));
    assert_eq!(lifted.apply(absent).run().await, Maybe::Nothing);
}

// =============================================================================
// MaybeT over List
// =============================================================================

#[rstest]
fn maybe_t_list_keeps_branches_independent() {
    let values: MaybeT<ListKind, i32> =
        MaybeT::new(List::new(vec![Maybe::Just(4), Maybe::Nothing, Maybe::Just(9)]));
    let halved = values.bind(|n| {
        if n % 2 == 0 {
            MaybeT::pure(n / 2)
        } else {
            MaybeT::nothing()
        }
    });
    assert_eq!(
        halved.run(),
        List::new(vec![Maybe::Just(2), Maybe::Nothing, Maybe::Nothing])
    );
}

// =============================================================================
// ResultT over Reader
// =============================================================================

#[derive(Clone)]
struct Limits {
    maximum: i32,
}

fn bounded(n: i32) -> ResultT<ReaderKind<Limits>, String, i32> {
    ResultT::new(Reader::new(move |limits: Limits| {
        if n > limits.maximum {
            Err(format!("{n} exceeds {}", limits.maximum))
        } else {
            Ok(n)
        }
    }))
}

#[rstest]
#[case(20, Ok(15))]
#[case(10, Err("limit: 15 exceeds 10".to_string()))]
#[case(3, Err("limit: 5 exceeds 3".to_string()))]
fn result_t_reader(#[case] maximum: i32, #[case] expected: Result<i32, String>) {
    let computation = bounded(5)
        .map(|n| n + 10)
        .bind(bounded)
        .map_error(|error| format!("limit: {error}"));
    assert_eq!(computation.run().run(Limits { maximum }), expected);
}

#[rstest]
fn result_t_reader_success_path() {
    let computation = bounded(5).bind(|n| bounded(n * 2));
    assert_eq!(computation.run().run(Limits { maximum: 100 }), Ok(10));
}

// =============================================================================
// Stacked transformers through the type classes
// =============================================================================

type Stack = MaybeTKind<ResultTKind<ListKind, String>>;

fn stacked(values: Vec<Result<Maybe<i32>, String>>) -> MaybeT<ResultTKind<ListKind, String>, i32> {
    MaybeT::new(ResultT::new(List::new(values)))
}

#[rstest]
fn stacked_transformers_bind_through_monad_trait() {
    let input = stacked(vec![Ok(Maybe::Just(1)), Ok(Maybe::Nothing), Err("io".to_string())]);
    let output = Stack::bind(input, |n: i32| {
        stacked(vec![Ok(Maybe::Just(n * 10)), Ok(Maybe::Just(n * 100))])
    });

    assert_eq!(
        output.run().run(),
        List::new(vec![
            Ok(Maybe::Just(10)),
            Ok(Maybe::Just(100)),
            Ok(Maybe::Nothing),
            Err("io".to_string()),
        ])
    );
}

#[rstest]
fn stacked_transformers_sequence() {
    let all = sequence::<Stack, _, _>(vec![
        stacked(vec![Ok(Maybe::Just(1))]),
        stacked(vec![Ok(Maybe::Just(2)), Ok(Maybe::Just(3))]),
    ]);
    assert_eq!(
        all.run().run(),
        List::new(vec![Ok(Maybe::Just(vec![1, 2])), Ok(Maybe::Just(vec![1, 3]))])
    );
}

// =============================================================================
// MaybeT over Result, ResultT over Maybe
// =============================================================================

#[rstest]
fn maybe_t_result_pure_then_bind() {
    let computation =
        MaybeT::<ResultKind<String>, i32>::pure(3).bind(|x| MaybeT::pure(x + 3));
    assert_eq!(computation.run(), Ok(Maybe::Just(6)));
}

#[rstest]
fn maybe_t_result_nothing_skips_continuation() {
    let computation =
        MaybeT::<ResultKind<String>, i32>::nothing().bind(|x| MaybeT::pure(x + 3));
    assert_eq!(computation.run(), Ok(Maybe::Nothing));
}

#[rstest]
fn maybe_t_result_sequence_of_pure() {
    let values: Vec<MaybeT<ResultKind<String>, i32>> =
        vec![MaybeT::pure(1), MaybeT::pure(2), MaybeT::pure(3)];
    let all = sequence::<MaybeTKind<ResultKind<String>>, _, _>(values);
    assert_eq!(all, MaybeT::pure(vec![1, 2, 3]));
    assert_eq!(all.run(), Ok(Maybe::Just(vec![1, 2, 3])));
}

#[rstest]
fn result_t_maybe_sequence_of_pure() {
    let values: Vec<ResultT<MaybeKind, String, i32>> =
        vec![ResultT::pure(1), ResultT::pure(2), ResultT::pure(3)];
    let all = sequence::<ResultTKind<MaybeKind, String>, _, _>(values);
    assert_eq!(all, ResultT::pure(vec![1, 2, 3]));
    assert_eq!(all.run(), Maybe::Just(Ok(vec![1, 2, 3])));
}

#[rstest]
fn result_t_maybe_sequence_stops_at_first_error() {
    let values: Vec<ResultT<MaybeKind, String, i32>> = vec![
        ResultT::pure(1),
        ResultT::throw("first".to_string()),
        ResultT::throw("second".to_string()),
    ];
    let all = sequence::<ResultTKind<MaybeKind, String>, _, _>(values);
    assert_eq!(all.run(), Maybe::Just(Err("first".to_string())));
}
