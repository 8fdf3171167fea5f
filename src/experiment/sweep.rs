//! Repeated runs over a grid of problem sizes and methods.
//!
//! Every (size, method, repetition) combination is an independent unit: it
//! renders the driver output into memory and reads `result`/`dt` back from
//! the text, exactly as an external collaborator would from a child
//! process. Units share nothing, so they run on the rayon pool.

use rayon::prelude::*;
use tracing::{debug, warn};

use super::aggregate::{Aggregator, Summary};
use super::output::RunOutput;
use crate::driver::{execute, Method, RunConfig};
use crate::error::SearchError;

/// Configuration for an experiment sweep.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::driver::Method;
/// use tsp_metaheur::experiment::SweepConfig;
///
/// let config = SweepConfig::default()
///     .with_sizes(5..=8)
///     .with_methods(vec![Method::HillClimbingRandomized])
///     .with_repeats(3)
///     .with_seed(1);
/// assert_eq!(config.units().len(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub sizes: Vec<usize>,
    pub methods: Vec<Method>,
    /// Repetitions per (size, method).
    pub repeats: usize,
    /// Iteration budget per run.
    pub iterations: usize,
    /// Tabu list size for tabu search runs.
    pub tabu_size: usize,
    /// Base seed; unit `k` uses `seed + k`. `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Whether to run units on the rayon pool.
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: (5..30).collect(),
            methods: vec![Method::TabuSearch, Method::HillClimbingRandomized],
            repeats: 14,
            iterations: 1000,
            tabu_size: 20,
            seed: None,
            parallel: true,
        }
    }
}

/// One independent run of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepUnit {
    pub size: usize,
    pub method: Method,
    pub repetition: usize,
    pub seed: Option<u64>,
}

impl SweepConfig {
    pub fn with_sizes<I: IntoIterator<Item = usize>>(mut self, sizes: I) -> Self {
        self.sizes = sizes.into_iter().collect();
        self
    }

    pub fn with_methods(mut self, methods: Vec<Method>) -> Self {
        self.methods = methods;
        self
    }

    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_tabu_size(mut self, tabu_size: usize) -> Self {
        self.tabu_size = tabu_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// All units, ordered by method, then size, then repetition.
    pub fn units(&self) -> Vec<SweepUnit> {
        let mut units = Vec::with_capacity(self.methods.len() * self.sizes.len() * self.repeats);
        for &method in &self.methods {
            for &size in &self.sizes {
                for repetition in 0..self.repeats {
                    let seed = self.seed.map(|s| s.wrapping_add(units.len() as u64));
                    units.push(SweepUnit {
                        size,
                        method,
                        repetition,
                        seed,
                    });
                }
            }
        }
        units
    }

    fn run_config(&self, unit: &SweepUnit) -> RunConfig {
        RunConfig {
            problem_size: unit.size,
            iterations: self.iterations,
            tabu_size: self.tabu_size,
            trace: false,
            methods: vec![unit.method],
            seed: unit.seed,
            ..RunConfig::default()
        }
    }

    /// Checks every unit's run configuration up front.
    pub fn validate(&self) -> Result<(), SearchError> {
        for &size in &self.sizes {
            for &method in &self.methods {
                self.run_config(&SweepUnit {
                    size,
                    method,
                    repetition: 0,
                    seed: None,
                })
                .validate()?;
            }
        }
        Ok(())
    }
}

/// Executes sweeps.
pub struct Sweep;

impl Sweep {
    /// Runs every unit and aggregates the parsed outputs.
    ///
    /// Units whose output cannot be parsed are counted in
    /// [`Summary::skipped`] instead of failing the sweep.
    pub fn run(config: &SweepConfig) -> Result<Summary, SearchError> {
        config.validate()?;

        let units = config.units();
        let outputs: Vec<Result<RunOutput, SearchError>> = if config.parallel {
            units.par_iter().map(|u| run_unit(config, u)).collect()
        } else {
            units.iter().map(|u| run_unit(config, u)).collect()
        };

        let mut aggregator = Aggregator::new();
        for (unit, output) in units.iter().zip(outputs) {
            match output {
                Ok(o) => aggregator.record(unit.method, unit.size, o),
                Err(e) => {
                    warn!(size = unit.size, method = %unit.method, error = %e, "skipping unit");
                    aggregator.skip();
                }
            }
        }
        Ok(aggregator.summary())
    }
}

/// Runs one unit through the textual contract.
pub fn run_unit(config: &SweepConfig, unit: &SweepUnit) -> Result<RunOutput, SearchError> {
    let mut buffer = Vec::new();
    execute(&config.run_config(unit), &mut buffer)?;
    let text = String::from_utf8_lossy(&buffer);
    let output = RunOutput::parse(&text)?;
    debug!(
        size = unit.size,
        method = %unit.method,
        repetition = unit.repetition,
        cost = output.cost,
        "unit finished"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_grid() {
        let config = SweepConfig::default()
            .with_sizes([5, 6])
            .with_methods(vec![Method::RandomProbe, Method::SimAnnealing])
            .with_repeats(2)
            .with_seed(100);
        let units = config.units();
        assert_eq!(units.len(), 8);
        assert_eq!(units[0].method, Method::RandomProbe);
        assert_eq!(units[0].seed, Some(100));
        assert_eq!(units[7].seed, Some(107));
        assert_eq!(units[7].method, Method::SimAnnealing);
        assert_eq!(units[7].size, 6);
        assert_eq!(units[7].repetition, 1);
    }

    #[test]
    fn test_sweep_summary() {
        let config = SweepConfig::default()
            .with_sizes(5..=7)
            .with_methods(vec![Method::HillClimbingRandomized, Method::FullSearch])
            .with_repeats(3)
            .with_iterations(200)
            .with_seed(42);
        let summary = Sweep::run(&config).unwrap();

        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.rows.len(), 6);
        for row in &summary.rows {
            assert_eq!(row.samples, 3);
            assert!(row.mean_cost > 0.0);
            assert!(row.mean_seconds >= 0.0);
        }
        let sizes: Vec<usize> = summary
            .rows_for(Method::FullSearch)
            .map(|r| r.size)
            .collect();
        assert_eq!(sizes, vec![5, 6, 7]);
    }

    #[test]
    fn test_default_compares_tabu_with_hill_climbing() {
        let config = SweepConfig::default();
        assert_eq!(
            config.methods,
            vec![Method::TabuSearch, Method::HillClimbingRandomized]
        );
        assert_eq!(config.run_config(&config.units()[0]).tabu_size, 20);

        let summary = Sweep::run(
            &config
                .with_sizes([6, 7])
                .with_repeats(2)
                .with_iterations(100)
                .with_seed(3),
        )
        .unwrap();
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.rows_for(Method::TabuSearch).count(), 2);
        assert_eq!(summary.rows_for(Method::HillClimbingRandomized).count(), 2);
    }

    #[test]
    fn test_zero_tabu_size_rejected() {
        let config = SweepConfig::default().with_sizes([5]).with_tabu_size(0);
        assert!(matches!(
            Sweep::run(&config),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = SweepConfig::default()
            .with_sizes([6, 8])
            .with_methods(vec![Method::SimAnnealing])
            .with_repeats(4)
            .with_iterations(300)
            .with_seed(9);
        let par = Sweep::run(&config).unwrap();
        let seq = Sweep::run(&config.clone().with_parallel(false)).unwrap();
        let costs = |s: &Summary| s.rows.iter().map(|r| r.mean_cost).collect::<Vec<_>>();
        assert_eq!(costs(&par), costs(&seq));
    }

    #[test]
    fn test_invalid_sweep_rejected() {
        let config = SweepConfig::default()
            .with_sizes([0])
            .with_methods(vec![Method::RandomProbe]);
        assert!(matches!(
            Sweep::run(&config),
            Err(SearchError::InvalidProblemSize { size: 0 })
        ));

        let config = SweepConfig::default().with_sizes([5]).with_iterations(0);
        assert!(matches!(
            Sweep::run(&config),
            Err(SearchError::InvalidIterationBudget { .. })
        ));
    }
}
