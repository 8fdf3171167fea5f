//! Generic local-search runners.
//!
//! Six algorithms share one contract: they take an objective, a way to
//! produce solutions, an iteration budget and an observer, and return the
//! best solution found.
//!
//! | Runner | Acceptance |
//! |---|---|
//! | [`FullSearch`] | strictly better, over the whole space |
//! | [`RandomProbe`] | strictly better, fresh random solution each step |
//! | [`RandomizedHillClimb`] | better or equal random neighbor |
//! | [`DeterministicHillClimb`] | best neighbor, stops at a local optimum |
//! | [`SimulatedAnnealing`] | better or equal, else Metropolis test |
//! | [`TabuSearch`] | cheapest non-tabu neighbor, even if worse |
//!
//! Runners are written against the capability traits in [`types`] and are
//! monomorphised per problem; nothing is boxed.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Glover (1989), "Tabu Search—Part I"

mod annealing;
mod config;
mod hill_climb;
mod observer;
mod runner;
mod tabu;
pub mod types;

pub use annealing::{acceptance_probability, AnnealingResult, SimulatedAnnealing};
pub use config::{SearchConfig, TemperatureSchedule};
pub use hill_climb::{DeterministicHillClimb, RandomizedHillClimb};
pub use observer::{PrintObserver, SilentObserver, TraceEntry, TraceRecorder};
pub use runner::{FullSearch, RandomProbe, SearchResult};
pub use tabu::{TabuList, TabuSearch};
pub use types::{
    BestNeighbor, Enumeration, IterationObserver, NeighborGenerator, Neighborhood, Objective,
    SolutionGenerator,
};
