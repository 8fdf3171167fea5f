//! Local-search metaheuristics for the Euclidean Travelling Salesman Problem.
//!
//! Provides generic implementations of six search strategies:
//!
//! - **Full search**: exhaustive enumeration, exact for tiny instances.
//! - **Random probing**: independent random sampling.
//! - **Randomized hill climbing**: random neighbor, accept if not worse.
//! - **Deterministic hill climbing**: best neighbor until a local optimum.
//! - **Simulated Annealing (SA)**: random-walk neighbor with Metropolis
//!   acceptance and a pluggable temperature schedule.
//! - **Tabu search**: cheapest neighbor outside a bounded list of recently
//!   visited solutions.
//!
//! # Architecture
//!
//! [`search`] knows nothing about cities. Its runners are written against
//! small capability traits (objective, solution generator, neighbor
//! generator, neighborhood listing, best-neighbor oracle, iteration
//! observer). [`tsp`] implements those capabilities for tours over random
//! points in the plane.
//! [`driver`] parses command-line tokens and prints a machine-readable
//! result line, and [`experiment`] runs grids of independent runs and
//! averages those lines.

pub mod driver;
pub mod error;
pub mod experiment;
pub mod search;
pub mod tsp;

pub use error::SearchError;
