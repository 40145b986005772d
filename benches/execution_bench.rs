use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tokio::runtime::Runtime;
use tree_runner::core::check::ensure_eq;
use tree_runner::core::flatten::flatten;
use tree_runner::core::notify::Silent;
use tree_runner::core::runner::{run_tests, run_tests_parallel};
use tree_runner::core::tree::{TestTree, case, label, list};

/// `groups` labeled groups of `per_group` cheap cases each.
fn wide_tree(groups: usize, per_group: usize) -> TestTree {
    list((0..groups).map(|g| {
        label(
            format!("group{g}"),
            list((0..per_group).map(|i| label(format!("case{i}"), case(move || ensure_eq(i, i))))),
        )
    }))
}

fn bench_flatten(c: &mut Criterion) {
    let tree = wide_tree(50, 20);
    c.bench_function("flatten_1000", |b| b.iter(|| flatten(black_box(&tree))));
}

fn bench_run_sequential(c: &mut Criterion) {
    let tree = wide_tree(50, 20);
    c.bench_function("run_sequential_1000", |b| {
        b.iter(|| run_tests(black_box(&tree), &mut Silent))
    });
}

fn bench_run_parallel(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let tree = wide_tree(50, 20);

    c.bench_function("run_parallel_1000", |b| {
        b.to_async(&rt)
            .iter(|| async { run_tests_parallel(black_box(&tree), Silent, None).await });
    });
}

criterion_group!(benches, bench_flatten, bench_run_sequential, bench_run_parallel);
criterion_main!(benches);
