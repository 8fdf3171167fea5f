//! Simulated Annealing execution loop.
//!
//! # Algorithm
//!
//! 1. Generate a starting solution and record it as accepted
//! 2. For `k = 1..=iterations`:
//!    a. Draw a neighbor of the current solution
//!    b. If it is no worse, accept it
//!    c. Otherwise accept with probability `exp(-|delta| / T(k))`, comparing
//!    against one uniform draw in `[0, 1)`
//!    d. Append every accepted solution to the history
//! 3. Return the cheapest solution in the history
//!
//! The history keeps every accepted solution, not just improvements, so its
//! memory grows with the number of accepted moves.

use rand::Rng;
use tracing::info;

use super::config::SearchConfig;
use super::runner::SearchResult;
use super::types::{IterationObserver, NeighborGenerator, Objective, SolutionGenerator};
use u_numflow::random::create_rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult<S> {
    /// The cheapest solution ever accepted.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations.
    pub iterations: usize,

    /// Every accepted solution with its cost, starting solution first.
    pub accepted: Vec<(S, f64)>,

    /// Number of worsening moves accepted by the Metropolis test.
    pub uphill_accepted: usize,
}

impl<S> From<AnnealingResult<S>> for SearchResult<S> {
    fn from(result: AnnealingResult<S>) -> Self {
        SearchResult {
            best: result.best,
            best_cost: result.best_cost,
            iterations: result.iterations,
            stopped_early: false,
        }
    }
}

/// Executes Simulated Annealing.
pub struct SimulatedAnnealing;

impl SimulatedAnnealing {
    /// The observer is called once per iteration with index `k - 1` and
    /// the cheapest solution accepted so far.
    pub fn run<S, O, G, N, Ob>(
        objective: &O,
        generator: &G,
        neighborhood: &N,
        config: &SearchConfig,
        observer: &mut Ob,
    ) -> AnnealingResult<S>
    where
        S: Clone,
        O: Objective<S>,
        G: SolutionGenerator<S>,
        N: NeighborGenerator<S>,
        Ob: IterationObserver<S>,
    {
        let mut rng = match config.seed {
            Some(s) => create_rng(s),
            None => create_rng(rand::random()),
        };

        let mut current = generator.generate(&mut rng);
        let mut current_cost = objective.evaluate(&current);
        let mut accepted = vec![(current.clone(), current_cost)];
        let mut best_index = 0usize;
        let mut uphill_accepted = 0usize;

        for k in 1..=config.iterations {
            let candidate = neighborhood.neighbor(&current, &mut rng);
            let candidate_cost = objective.evaluate(&candidate);

            let accept = if candidate_cost <= current_cost {
                true
            } else {
                let probability = acceptance_probability(
                    candidate_cost - current_cost,
                    config.schedule.temperature(k),
                );
                let uphill = rng.random_range(0.0..1.0) < probability;
                if uphill {
                    uphill_accepted += 1;
                }
                uphill
            };

            if accept {
                current = candidate;
                current_cost = candidate_cost;
                accepted.push((current.clone(), current_cost));
                if current_cost < accepted[best_index].1 {
                    best_index = accepted.len() - 1;
                }
            }

            let (best, best_cost) = &accepted[best_index];
            observer.on_iteration(k - 1, best, *best_cost);
        }

        let (best, best_cost) = min_accepted(&accepted);

        info!(
            method = "simulated_annealing",
            iterations = config.iterations,
            accepted = accepted.len(),
            uphill_accepted,
            best_cost,
            "search finished"
        );

        AnnealingResult {
            best,
            best_cost,
            iterations: config.iterations,
            accepted,
            uphill_accepted,
        }
    }
}

/// Metropolis acceptance probability for a worsening move.
///
/// Computed as `exp(-|delta| / T)`, which lies in `[0, 1]` for any finite
/// positive temperature and underflows cleanly to 0 for huge ratios.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if temperature <= 0.0 {
        return 0.0;
    }
    (-delta.abs() / temperature).exp()
}

/// The first minimum-cost entry of the history.
fn min_accepted<S: Clone>(accepted: &[(S, f64)]) -> (S, f64) {
    let mut best = &accepted[0];
    for entry in &accepted[1..] {
        if entry.1 < best.1 {
            best = entry;
        }
    }
    (best.0.clone(), best.1)
}
