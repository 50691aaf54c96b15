//! Benchmark for the generic `sequence` and monadic binding.
//!
//! Compares the generic `sequence` fold over `Maybe`, `Result` and `List`
//! with the per-context `sequence` and with hand-written loops.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use monadic::prelude::*;
use std::hint::black_box;

// =============================================================================
// Sequence Benchmarks
// =============================================================================

fn benchmark_sequence_maybe(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequence_maybe");

    for size in [10, 100, 1000] {
        let values: Vec<Maybe<i64>> = (0..size).map(Maybe::Just).collect();

        group.bench_with_input(BenchmarkId::new("generic", size), &values, |bencher, values| {
            bencher.iter(|| black_box(sequence::<MaybeKind, _, _>(values.clone())));
        });

        group.bench_with_input(BenchmarkId::new("inherent", size), &values, |bencher, values| {
            bencher.iter(|| black_box(Maybe::sequence(values.clone())));
        });

        group.bench_with_input(
            BenchmarkId::new("option_collect", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let collected: Option<Vec<i64>> =
                        values.iter().map(|value| value.to_optional()).collect();
                    black_box(collected)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_sequence_result(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequence_result");

    for size in [10, 100, 1000] {
        let values: Vec<Result<i64, String>> = (0..size).map(Ok).collect();

        group.bench_with_input(BenchmarkId::new("generic", size), &values, |bencher, values| {
            bencher.iter(|| black_box(sequence::<ResultKind<String>, _, _>(values.clone())));
        });

        group.bench_with_input(BenchmarkId::new("inherent", size), &values, |bencher, values| {
            bencher.iter(|| black_box(Result::sequence(values.clone())));
        });
    }

    group.finish();
}

fn benchmark_sequence_list(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequence_list");

    // 2^width combinations
    for width in [4, 8, 12] {
        let choices: Vec<List<u8>> = (0..width).map(|_| List::new(vec![0, 1])).collect();

        group.bench_with_input(
            BenchmarkId::new("binary_choices", width),
            &choices,
            |bencher, choices| {
                bencher.iter(|| black_box(List::sequence(choices.clone()).len()));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Bind Benchmarks
// =============================================================================

fn benchmark_list_bind(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("list_bind");

    for size in [100, 1000, 10_000] {
        let list: List<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("neighbours", size), &list, |bencher, list| {
            bencher.iter(|| {
                let expanded = list.clone().bind(|n| List::new(vec![n - 1, n + 1]));
                black_box(expanded.len())
            });
        });
    }

    group.finish();
}

fn benchmark_curry(criterion: &mut Criterion) {
    let add = curry(|a: i64, b: i64, c: i64| a + b + c);

    criterion.bench_function("curry_run_step_by_step", |bencher| {
        bencher.iter(|| black_box(add.run(black_box(1)).run(2).run(3)));
    });

    criterion.bench_function("curry_run_all_at_once", |bencher| {
        bencher.iter(|| black_box(add.run3(black_box(1), 2, 3)));
    });
}

criterion_group!(
    benches,
    benchmark_sequence_maybe,
    benchmark_sequence_result,
    benchmark_sequence_list,
    benchmark_list_bind,
    benchmark_curry
);
criterion_main!(benches);
