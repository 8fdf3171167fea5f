//! TSP implementations of the search capabilities.

use rand::Rng;
use rand_distr::StandardNormal;

use super::problem::Problem;
use super::tour::Tour;
use crate::search::{
    BestNeighbor, Enumeration, NeighborGenerator, Neighborhood, Objective, SolutionGenerator,
};

/// Closed-tour Euclidean length over a borrowed problem.
#[derive(Debug, Clone, Copy)]
pub struct TourLength<'a> {
    problem: &'a Problem,
}

impl<'a> TourLength<'a> {
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }
}

impl Objective<Tour> for TourLength<'_> {
    fn evaluate(&self, tour: &Tour) -> f64 {
        self.problem.tour_length(tour)
    }
}

/// Uniformly random tours of `n` cities.
#[derive(Debug, Clone, Copy)]
pub struct RandomTour {
    pub n: usize,
}

impl SolutionGenerator<Tour> for RandomTour {
    fn generate<R: Rng>(&self, rng: &mut R) -> Tour {
        Tour::random(self.n, rng)
    }
}

/// All tours of `n` cities in lexicographic order, starting at the identity.
#[derive(Debug, Clone, Copy)]
pub struct LexicographicTours {
    pub n: usize,
}

impl Enumeration<Tour> for LexicographicTours {
    fn first(&self) -> Tour {
        Tour::identity(self.n)
    }

    fn next(&self, current: &Tour) -> Option<Tour> {
        current.next_permutation()
    }
}

/// Swaps one uniformly chosen position with its cyclic successor.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentSwap;

impl NeighborGenerator<Tour> for AdjacentSwap {
    fn neighbor<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Tour {
        let i = rng.random_range(0..tour.len());
        tour.swap_adjacent(i)
    }
}

/// A random-length chain of [`AdjacentSwap`] moves.
///
/// The chain length is `floor(min(|N(0, std_dev)| + 1, max_steps))`, so at
/// least one swap is always applied and most walks stay short.
#[derive(Debug, Clone, Copy)]
pub struct SwapWalk {
    pub std_dev: f64,
    pub max_steps: usize,
}

impl Default for SwapWalk {
    fn default() -> Self {
        Self {
            std_dev: 2.0,
            max_steps: 500,
        }
    }
}

impl SwapWalk {
    /// Draws the number of swaps for one walk.
    pub fn walk_length<R: Rng>(&self, rng: &mut R) -> usize {
        let z: f64 = rng.sample(StandardNormal);
        ((z * self.std_dev).abs() + 1.0).min(self.max_steps as f64) as usize
    }
}

impl NeighborGenerator<Tour> for SwapWalk {
    fn neighbor<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Tour {
        let steps = self.walk_length(rng);
        let mut current = tour.clone();
        for _ in 0..steps {
            current = AdjacentSwap.neighbor(&current, rng);
        }
        current
    }
}

/// Exhaustive adjacent-swap neighborhood.
///
/// Tries swapping each position `0..n-1` with the next one. A candidate
/// replaces the running best when its cost is `<=`, so among equal-cost
/// candidates the last one wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestAdjacentSwap;

impl BestNeighbor<Tour> for BestAdjacentSwap {
    fn best_neighbor<O: Objective<Tour>>(&self, tour: &Tour, objective: &O) -> Tour {
        let mut best = tour.clone();
        let mut best_cost = objective.evaluate(tour);
        for i in 0..tour.len().saturating_sub(1) {
            let candidate = tour.swap_adjacent(i);
            let cost = objective.evaluate(&candidate);
            if cost <= best_cost {
                best = candidate;
                best_cost = cost;
            }
        }
        best
    }
}

/// Every tour one adjacent swap away, for positions `0..n-1`.
///
/// The same move set [`BestAdjacentSwap`] scans, listed instead of reduced.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentSwaps;

impl Neighborhood<Tour> for AdjacentSwaps {
    fn neighbors(&self, tour: &Tour) -> Vec<Tour> {
        (0..tour.len().saturating_sub(1))
            .map(|i| tour.swap_adjacent(i))
            .collect()
    }
}
