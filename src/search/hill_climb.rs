//! Hill climbing, randomized and deterministic.
//!
//! # Randomized
//!
//! Each iteration draws one random neighbor of the current best and moves
//! to it when its cost is less than or equal. Accepting ties lets the
//! climber drift across plateaus. There is no restart and no stagnation
//! check; the whole budget is always spent.
//!
//! # Deterministic (steepest descent)
//!
//! Each iteration moves to the best neighbor of the current solution. When
//! the best neighbor is the current solution itself no move improves or
//! ties, so the climber has reached a local optimum and stops.

use tracing::{debug, info};

use super::config::SearchConfig;
use super::runner::SearchResult;
use super::types::{
    BestNeighbor, IterationObserver, NeighborGenerator, Objective, SolutionGenerator,
};
use u_numflow::random::create_rng;

/// Randomized hill climbing with accept-on-tie.
pub struct RandomizedHillClimb;

impl RandomizedHillClimb {
    pub fn run<S, O, G, N, Ob>(
        objective: &O,
        generator: &G,
        neighborhood: &N,
        config: &SearchConfig,
        observer: &mut Ob,
    ) -> SearchResult<S>
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

        let mut best = generator.generate(&mut rng);
        let mut best_cost = objective.evaluate(&best);

        for i in 0..config.iterations {
            let candidate = neighborhood.neighbor(&best, &mut rng);
            let cost = objective.evaluate(&candidate);
            if cost <= best_cost {
                best = candidate;
                best_cost = cost;
            }
            observer.on_iteration(i, &best, best_cost);
        }

        info!(
            method = "hill_climb_randomized",
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

/// Deterministic hill climbing driven by a best-neighbor oracle.
pub struct DeterministicHillClimb;

impl DeterministicHillClimb {
    /// Only the starting solution is random; every later step is fixed by
    /// the oracle.
    ///
    /// The observer is called after each move. The iteration that detects
    /// the local optimum makes no move and is not reported, though it counts
    /// toward [`SearchResult::iterations`].
    pub fn run<S, O, G, B, Ob>(
        objective: &O,
        generator: &G,
        oracle: &B,
        config: &SearchConfig,
        observer: &mut Ob,
    ) -> SearchResult<S>
    where
        S: Clone + PartialEq,
        O: Objective<S>,
        G: SolutionGenerator<S>,
        B: BestNeighbor<S>,
        Ob: IterationObserver<S>,
    {
        let mut rng = match config.seed {
            Some(s) => create_rng(s),
            None => create_rng(rand::random()),
        };

        let mut current = generator.generate(&mut rng);
        let mut iterations = 0usize;
        let mut stopped_early = false;

        for i in 0..config.iterations {
            iterations += 1;
            let next = oracle.best_neighbor(&current, objective);
            if next == current {
                debug!(iteration = i, "local optimum reached");
                stopped_early = true;
                break;
            }
            current = next;
            observer.on_iteration(i, &current, objective.evaluate(&current));
        }

        let best_cost = objective.evaluate(&current);
        info!(
            method = "hill_climb_deterministic",
            iterations, stopped_early, best_cost, "search finished"
        );

        SearchResult {
            best: current,
            best_cost,
            iterations,
            stopped_early,
        }
    }
}
