//! Tabu Search execution loop.
//!
//! # Algorithm
//!
//! 1. Generate a starting solution and mark it tabu
//! 2. At each iteration:
//!    a. List the neighbors of the current solution, dropping tabu ones
//!    b. If none remain, stop
//!    c. Move to the cheapest remaining neighbor, even if it is worse,
//!    and mark it tabu
//!    d. Update the best solution on a strictly lower cost
//! 3. Return the best solution seen
//!
//! The tabu list holds whole solutions, not moves, and forgets the oldest
//! entry once it grows past its capacity.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use tracing::{debug, info};
use u_numflow::random::create_rng;

use super::config::SearchConfig;
use super::runner::SearchResult;
use super::types::{IterationObserver, Neighborhood, Objective, SolutionGenerator};

/// Bounded FIFO memory of recently visited solutions.
///
/// A queue keeps insertion order and a set answers membership.
#[derive(Debug, Clone)]
pub struct TabuList<S> {
    capacity: usize,
    order: VecDeque<S>,
    members: HashSet<S>,
}

impl<S: Clone + Eq + Hash> TabuList<S> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity + 1),
            members: HashSet::with_capacity(capacity + 1),
        }
    }

    pub fn contains(&self, solution: &S) -> bool {
        self.members.contains(solution)
    }

    /// Adds `solution` unless already present, then evicts the oldest
    /// entries beyond capacity.
    pub fn insert(&mut self, solution: S) {
        if self.members.insert(solution.clone()) {
            self.order.push_back(solution);
        }
        while self.order.len() > self.capacity {
            if let Some(old) = self.order.pop_front() {
                self.members.remove(&old);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Tabu Search runner.
pub struct TabuSearch;

impl TabuSearch {
    /// Runs for at most `config.iterations` iterations with a tabu list of
    /// `config.tabu_size` solutions.
    ///
    /// Ties between neighbors go to the first one listed. The observer is
    /// called after each move with the best solution so far. An iteration
    /// that finds every neighbor tabu ends the run; it counts toward
    /// [`SearchResult::iterations`] but is not reported.
    pub fn run<S, O, G, N, Ob>(
        objective: &O,
        generator: &G,
        neighborhood: &N,
        config: &SearchConfig,
        observer: &mut Ob,
    ) -> SearchResult<S>
    where
        S: Clone + Eq + Hash,
        O: Objective<S>,
        G: SolutionGenerator<S>,
        N: Neighborhood<S>,
        Ob: IterationObserver<S>,
    {
        let mut rng = match config.seed {
            Some(s) => create_rng(s),
            None => create_rng(rand::random()),
        };

        let mut current = generator.generate(&mut rng);
        let mut best = current.clone();
        let mut best_cost = objective.evaluate(&best);

        let mut tabu = TabuList::new(config.tabu_size);
        tabu.insert(current.clone());

        let mut iterations = 0usize;
        let mut stopped_early = false;

        for i in 0..config.iterations {
            iterations += 1;

            let mut chosen: Option<(S, f64)> = None;
            for candidate in neighborhood.neighbors(&current) {
                if tabu.contains(&candidate) {
                    continue;
                }
                let cost = objective.evaluate(&candidate);
                if chosen.as_ref().map_or(true, |(_, c)| cost < *c) {
                    chosen = Some((candidate, cost));
                }
            }

            let Some((next, cost)) = chosen else {
                debug!(iteration = i, "every neighbor is tabu");
                stopped_early = true;
                break;
            };

            tabu.insert(next.clone());
            current = next;
            if cost < best_cost {
                best = current.clone();
                best_cost = cost;
            }
            observer.on_iteration(i, &best, best_cost);
        }

        info!(
            method = "tabu_search",
            iterations, stopped_early, best_cost, "search finished"
        );

        SearchResult {
            best,
            best_cost,
            iterations,
            stopped_early,
        }
    }
}
