//! Euclidean Travelling Salesman Problem.
//!
//! Cities are points in the plane, a solution is a cyclic visiting order
//! ([`Tour`]) and the objective is the closed-tour length. The neighborhood
//! types plug the TSP into the generic runners in [`crate::search`].

mod neighborhood;
mod problem;
mod tour;

pub use neighborhood::{
    AdjacentSwap, AdjacentSwaps, BestAdjacentSwap, LexicographicTours, RandomTour, SwapWalk,
    TourLength,
};
pub use problem::{Point, Problem, COORDINATE_RANGE};
pub use tour::{is_permutation, Tour};
