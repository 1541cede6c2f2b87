//! Benchmark for replayable sequences and monadic composition.
//!
//! Measures the cost of first evaluation against replay, forking, and deep
//! bind chains.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqmonad::control::LazySequence;
use seqmonad::typeclass::{ListM, Maybe, Monad, map_m};
use std::hint::black_box;

// =============================================================================
// LazySequence Benchmarks
// =============================================================================

fn benchmark_first_pass_versus_replay(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lazy_sequence_pass");

    for size in [10_i64, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("first_pass", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let sequence = LazySequence::from_source((0..size).map(|index| index * 2));
                black_box(sequence.sum::<i64>())
            });
        });

        let sequence = LazySequence::from_source((0..size).map(|index| index * 2));
        let _ = sequence.clone().count();
        group.bench_with_input(BenchmarkId::new("replay", size), &size, |bencher, _| {
            bencher.iter(|| black_box(sequence.clone().sum::<i64>()));
        });
    }

    group.finish();
}

fn benchmark_fork(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lazy_sequence_fork");

    for forks in [2, 8, 32] {
        group.bench_with_input(BenchmarkId::new("forks", forks), &forks, |bencher, &forks| {
            bencher.iter(|| {
                let sequence = LazySequence::from_source(0..100_i64);
                let total: i64 = (0..forks).map(|_| sequence.clone().sum::<i64>()).sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Monad Benchmarks
// =============================================================================

fn benchmark_bind_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("monad_bind_chain");

    for depth in [1, 10, 50] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut monad: Monad<i64> = Maybe::just(0);
                for _ in 0..depth {
                    monad = monad.and_then(|x| Maybe::just(x + 1));
                }
                black_box(monad.to_vec())
            });
        });
    }

    group.finish();
}

fn benchmark_list_fan_out(criterion: &mut Criterion) {
    criterion.bench_function("list_fan_out", |bencher| {
        bencher.iter(|| {
            let pairs = ListM::new(0..20_i64)
                .and_then(|x| ListM::new(0..20_i64).map(move |y| x * y));
            black_box(pairs.cardinality())
        });
    });
}

fn benchmark_map_m_filter(criterion: &mut Criterion) {
    criterion.bench_function("map_m_filter", |bencher| {
        bencher.iter(|| {
            let kept = map_m(
                |x: i64| if x % 3 == 0 { Maybe::nothing() } else { Maybe::just(x) },
                ListM::new(0..1000_i64),
            );
            black_box(kept.cardinality())
        });
    });
}

criterion_group!(
    benches,
    benchmark_first_pass_versus_replay,
    benchmark_fork,
    benchmark_bind_chain,
    benchmark_list_fan_out,
    benchmark_map_m_filter
);
criterion_main!(benches);
