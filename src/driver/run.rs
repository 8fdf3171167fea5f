//! Executes a [`RunConfig`] and renders the line-oriented output.
//!
//! Per method the output is: optional trace lines `"<index> <length>"`,
//! optional solution and length lines, then
//! `"result <length> dt <seconds>"`.

use std::io::Write;
use std::time::{Duration, Instant};

use tracing::info;
use u_numflow::random::create_rng;

use super::invocation::{Method, RunConfig};
use crate::error::SearchError;
use crate::search::{
    DeterministicHillClimb, FullSearch, IterationObserver, PrintObserver, RandomProbe,
    RandomizedHillClimb, SearchConfig, SearchResult, SilentObserver, SimulatedAnnealing,
    TabuSearch,
};
use crate::tsp::{
    AdjacentSwap, AdjacentSwaps, BestAdjacentSwap, LexicographicTours, Problem, RandomTour,
    SwapWalk, Tour, TourLength,
};

/// Outcome of one method within a run.
#[derive(Debug, Clone)]
pub struct MethodReport {
    pub method: Method,
    pub best: Tour,
    pub best_cost: f64,
    pub elapsed: Duration,
}

/// Validates `config`, generates the problem and runs every method in
/// order, writing output to `out`.
pub fn execute<W: Write>(
    config: &RunConfig,
    out: &mut W,
) -> Result<Vec<MethodReport>, SearchError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(s) => create_rng(s),
        None => create_rng(rand::random()),
    };
    let problem = Problem::generate(config.problem_size, &mut rng);
    if config.print_problem {
        writeln!(out, "{problem}")?;
    }

    let mut reports = Vec::with_capacity(config.methods.len());
    for (position, &method) in config.methods.iter().enumerate() {
        let mut search = SearchConfig::default()
            .with_iterations(config.iterations)
            .with_schedule(config.schedule)
            .with_tabu_size(config.tabu_size);
        search.seed = config.method_seed(position);

        info!(%method, size = problem.len(), iterations = config.iterations, "running method");

        let start = Instant::now();
        let result = if config.trace {
            dispatch(method, &problem, &search, &mut PrintObserver::new(&mut *out))
        } else {
            dispatch(method, &problem, &search, &mut SilentObserver)
        };
        let elapsed = start.elapsed();

        if config.print_solution {
            writeln!(out, "{}", result.best)?;
            writeln!(out, "{}", result.best_cost)?;
        }
        writeln!(
            out,
            "result {} dt {}",
            result.best_cost,
            elapsed.as_secs_f64()
        )?;

        reports.push(MethodReport {
            method,
            best: result.best,
            best_cost: result.best_cost,
            elapsed,
        });
    }
    out.flush()?;
    Ok(reports)
}

/// Maps each method to its runner and TSP capabilities.
pub fn dispatch<Ob: IterationObserver<Tour>>(
    method: Method,
    problem: &Problem,
    config: &SearchConfig,
    observer: &mut Ob,
) -> SearchResult<Tour> {
    let objective = TourLength::new(problem);
    let random_tour = RandomTour { n: problem.len() };
    match method {
        Method::FullSearch => FullSearch::run(
            &objective,
            &LexicographicTours { n: problem.len() },
            observer,
        ),
        Method::RandomProbe => RandomProbe::run(&objective, &random_tour, config, observer),
        Method::HillClimbingRandomized => {
            RandomizedHillClimb::run(&objective, &random_tour, &AdjacentSwap, config, observer)
        }
        Method::HillClimbingDeterministic => DeterministicHillClimb::run(
            &objective,
            &random_tour,
            &BestAdjacentSwap,
            config,
            observer,
        ),
        Method::SimAnnealing => SimulatedAnnealing::run(
            &objective,
            &random_tour,
            &SwapWalk::default(),
            config,
            observer,
        )
        .into(),
        Method::TabuSearch => {
            TabuSearch::run(&objective, &random_tour, &AdjacentSwaps, config, observer)
        }
    }
}
