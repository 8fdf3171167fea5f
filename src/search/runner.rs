//! Exhaustive search and random probing.

use tracing::info;

use super::config::SearchConfig;
use super::types::{Enumeration, IterationObserver, Objective, SolutionGenerator};
use u_numflow::random::create_rng;

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Number of loop bodies executed.
    pub iterations: usize,

    /// Whether the run stopped before exhausting its budget.
    ///
    /// Only deterministic hill climbing stops early, on reaching a local
    /// optimum.
    pub stopped_early: bool,
}

/// Enumerates every solution once and keeps the cheapest.
///
/// Feasible only for tiny instances: a TSP with `n` cities has `n!` tours.
pub struct FullSearch;

impl FullSearch {
    /// Walks `space` from its first element. A candidate replaces the best
    /// only when strictly cheaper, so the earliest optimum in the order wins.
    ///
    /// The observer is called once per enumerated solution.
    pub fn run<S, O, E, Ob>(objective: &O, space: &E, observer: &mut Ob) -> SearchResult<S>
    where
        S: Clone,
        O: Objective<S>,
        E: Enumeration<S>,
        Ob: IterationObserver<S>,
    {
        let mut current = space.first();
        let mut best = current.clone();
        let mut best_cost = objective.evaluate(&best);
        let mut i = 0usize;

        loop {
            let cost = objective.evaluate(&current);
            if cost < best_cost {
                best = current.clone();
                best_cost = cost;
            }
            observer.on_iteration(i, &best, best_cost);
            i += 1;

            match space.next(&current) {
                Some(next) => current = next,
                None => break,
            }
        }

        info!(method = "full_search", iterations = i, best_cost, "search finished");

        SearchResult {
            best,
            best_cost,
            iterations: i,
            stopped_early: false,
        }
    }
}

/// Draws independent random solutions and keeps the cheapest.
pub struct RandomProbe;

impl RandomProbe {
    /// Generates one starting solution, then one fresh solution per
    /// iteration. Replacement requires a strictly lower cost.
    ///
    /// With a zero budget the starting solution is returned unchanged and
    /// the observer is never called.
    pub fn run<S, O, G, Ob>(
        objective: &O,
        generator: &G,
        config: &SearchConfig,
        observer: &mut Ob,
    ) -> SearchResult<S>
    where
        S: Clone,
        O: Objective<S>,
        G: SolutionGenerator<S>,
        Ob: IterationObserver<S>,
    {
        let mut rng = match config.seed {
            Some(s) => create_rng(s),
            None => create_rng(rand::random()),
        };

        let mut best = generator.generate(&mut rng);
        let mut best_cost = objective.evaluate(&best);

        for i in 0..config.iterations {
            let candidate = generator.generate(&mut rng);
            let cost = objective.evaluate(&candidate);
            if cost < best_cost {
                best = candidate;
                best_cost = cost;
            }
            observer.on_iteration(i, &best, best_cost);
        }

        info!(
            method = "random_probe",
            iterations = config.iterations,
            best_cost,
            "search finished"
        );

        SearchResult {
            best,
            best_cost,
            iterations: config.iterations,
            stopped_early: false,
        }
    }
}
