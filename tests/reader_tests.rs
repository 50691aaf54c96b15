//! Integration tests for `Reader`.

use monadic::prelude::*;
use rstest::rstest;

#[derive(Clone, Debug)]
struct Settings {
    base_url: String,
    retries: u32,
    verbose: bool,
}

fn settings() -> Settings {
    Settings {
        base_url: "https://example.test".to_string(),
        retries: 3,
        verbose: false,
    }
}

fn endpoint(path: &'static str) -> Reader<Settings, String> {
    Reader::asks(move |settings: Settings| format!("{}/{path}", settings.base_url))
}

#[rstest]
fn ask_returns_environment() {
    let reader: Reader<i32, i32> = Reader::ask();
    assert_eq!(reader.run(42), 42);
}

#[rstest]
fn asks_projects_environment() {
    let retries = Reader::asks(|settings: Settings| settings.retries);
    assert_eq!(retries.run(settings()), 3);
}

#[rstest]
fn bind_threads_same_environment() {
    let request = endpoint("users").bind(|url| {
        Reader::asks(move |settings: Settings| format!("GET {url} x{}", settings.retries))
    });
    assert_eq!(request.run(settings()), "GET https://example.test/users x3");
}

#[rstest]
fn local_changes_environment_for_one_reader_only() {
    let verbose = Reader::asks(|settings: Settings| settings.verbose);
    let forced = verbose.clone().local(|settings: Settings| Settings {
        verbose: true,
        ..settings
    });
    let both = forced.bind(move |inner| verbose.clone().map(move |outer| (inner, outer)));

    assert_eq!(both.run(settings()), (true, false));
}

#[rstest]
fn readers_are_reusable() {
    let reader = endpoint("health");
    assert_eq!(reader.run(settings()), reader.run(settings()));
}

#[rstest]
#[case(2, vec![3, 4, 20])]
#[case(0, vec![1, 0, 0])]
fn sequence_runs_all_with_one_environment(#[case] environment: i32, #[case] expected: Vec<i32>) {
    let readers = vec![
        Reader::new(|n: i32| n + 1),
        Reader::new(|n: i32| n * 2),
        Reader::new(|n: i32| n * 10),
    ];
    assert_eq!(Reader::sequence(readers).run(environment), expected);
}

#[rstest]
fn apply_runs_both_sides_with_environment() {
    let prefix = Reader::asks(|settings: Settings| {
        move |path: String| format!("{}{path}", settings.base_url)
    });
    let path = Reader::pure("/status".to_string());
    assert_eq!(path.apply(prefix).run(settings()), "https://example.test/status");
}

#[rstest]
fn sequence_handles_long_inputs() {
    let readers: Vec<Reader<Settings, u32>> = (0..100_000u32)
        .map(|index| Reader::asks(move |settings: Settings| settings.retries + index))
        .collect();
    let collected = Reader::sequence(readers).run(settings());
    assert_eq!(collected.len(), 100_000);
    assert_eq!(collected[0], 3);
    assert_eq!(collected[99_999], 100_002);
}
