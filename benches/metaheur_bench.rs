//! Criterion benchmarks for the TSP search runners.
//!
//! All runs use seeded random instances so timings are comparable across
//! commits.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_metaheur::search::{
    DeterministicHillClimb, FullSearch, RandomizedHillClimb, SearchConfig, SilentObserver,
    SimulatedAnnealing, TabuSearch,
};
use tsp_metaheur::tsp::{
    AdjacentSwap, AdjacentSwaps, BestAdjacentSwap, LexicographicTours, Problem, RandomTour,
    SwapWalk, Tour, TourLength,
};
use u_numflow::random::create_rng;

fn instance(n: usize) -> Problem {
    Problem::generate(n, &mut create_rng(42))
}

// ===========================================================================
// Objective evaluation
// ===========================================================================

fn bench_tour_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_length");

    for &n in &[10usize, 100, 1000] {
        let problem = instance(n);
        let tour = Tour::random(n, &mut create_rng(7));
        group.bench_with_input(BenchmarkId::from_parameter(n), &(problem, tour), |b, (p, t)| {
            b.iter(|| black_box(p.tour_length(black_box(t))))
        });
    }
    group.finish();
}

// ===========================================================================
// Runners
// ===========================================================================

fn bench_full_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_search");
    group.sample_size(10);

    for &n in &[6usize, 8] {
        let problem = instance(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &problem, |b, p| {
            b.iter(|| {
                let result = FullSearch::run(
                    &TourLength::new(black_box(p)),
                    &LexicographicTours { n },
                    &mut SilentObserver,
                );
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_hill_climb(c: &mut Criterion) {
    let mut group = c.benchmark_group("hill_climb");
    group.sample_size(10);

    for &n in &[20usize, 50, 100] {
        let problem = instance(n);
        let config = SearchConfig::default().with_iterations(1000).with_seed(42);
        group.bench_with_input(
            BenchmarkId::new("randomized", n),
            &(problem.clone(), config.clone()),
            |b, (p, c)| {
                b.iter(|| {
                    let result = RandomizedHillClimb::run(
                        &TourLength::new(black_box(p)),
                        &RandomTour { n },
                        &AdjacentSwap,
                        black_box(c),
                        &mut SilentObserver,
                    );
                    black_box(result)
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("deterministic", n),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = DeterministicHillClimb::run(
                        &TourLength::new(black_box(p)),
                        &RandomTour { n },
                        &BestAdjacentSwap,
                        black_box(c),
                        &mut SilentObserver,
                    );
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulated_annealing");
    group.sample_size(10);

    for &n in &[20usize, 50, 100] {
        let problem = instance(n);
        let config = SearchConfig::default().with_iterations(1000).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(problem, config), |b, (p, c)| {
            b.iter(|| {
                let result = SimulatedAnnealing::run(
                    &TourLength::new(black_box(p)),
                    &RandomTour { n },
                    &SwapWalk::default(),
                    black_box(c),
                    &mut SilentObserver,
                );
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_search");
    group.sample_size(10);

    for &n in &[20usize, 50] {
        let problem = instance(n);
        let config = SearchConfig::default()
            .with_iterations(200)
            .with_tabu_size(20)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(problem, config), |b, (p, c)| {
            b.iter(|| {
                let result = TabuSearch::run(
                    &TourLength::new(black_box(p)),
                    &RandomTour { n },
                    &AdjacentSwaps,
                    black_box(c),
                    &mut SilentObserver,
                );
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_tour_length,
    bench_full_search,
    bench_hill_climb,
    bench_annealing,
    bench_tabu
);
criterion_main!(benches);
