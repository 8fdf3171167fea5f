//! Search configuration and temperature schedules.

use crate::error::SearchError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Temperature as a function of the 1-based iteration index.
///
/// Every schedule is positive and non-increasing in `k`. Only simulated
/// annealing reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureSchedule {
    /// `T(k) = scale / k`.
    Inverse {
        /// Temperature at the first iteration.
        scale: f64,
    },

    /// `T(k) = scale / ln(k + 1)`.
    ///
    /// Cools much slower than [`Inverse`](Self::Inverse).
    Logarithmic { scale: f64 },

    /// `T(k) = initial * alpha^(k - 1)`.
    Geometric {
        initial: f64,
        /// Cooling factor in (0, 1].
        alpha: f64,
    },
}

impl Default for TemperatureSchedule {
    fn default() -> Self {
        TemperatureSchedule::Inverse { scale: 1000.0 }
    }
}

impl TemperatureSchedule {
    /// Temperature at iteration `k`. `k = 0` is treated as `k = 1`.
    pub fn temperature(&self, k: usize) -> f64 {
        let k = k.max(1) as f64;
        match *self {
            TemperatureSchedule::Inverse { scale } => scale / k,
            TemperatureSchedule::Logarithmic { scale } => scale / (k + 1.0).ln(),
            TemperatureSchedule::Geometric { initial, alpha } => initial * alpha.powf(k - 1.0),
        }
    }

    /// Checks the schedule parameters.
    pub fn validate(&self) -> Result<(), SearchError> {
        match *self {
            TemperatureSchedule::Inverse { scale } | TemperatureSchedule::Logarithmic { scale } => {
                if !(scale > 0.0 && scale.is_finite()) {
                    return Err(SearchError::InvalidConfig(format!(
                        "schedule scale must be positive, got {scale}"
                    )));
                }
            }
            TemperatureSchedule::Geometric { initial, alpha } => {
                if !(initial > 0.0 && initial.is_finite()) {
                    return Err(SearchError::InvalidConfig(format!(
                        "initial temperature must be positive, got {initial}"
                    )));
                }
                if alpha <= 0.0 || alpha > 1.0 {
                    return Err(SearchError::InvalidConfig(format!(
                        "geometric alpha must be in (0, 1], got {alpha}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Configuration shared by the iterative runners.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::search::{SearchConfig, TemperatureSchedule};
///
/// let config = SearchConfig::default()
///     .with_iterations(2000)
///     .with_schedule(TemperatureSchedule::Geometric { initial: 50.0, alpha: 0.999 })
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Iteration budget. Full search ignores it.
    pub iterations: usize,

    /// Temperature schedule for simulated annealing.
    pub schedule: TemperatureSchedule,

    /// Capacity of the tabu list. Only tabu search reads it.
    pub tabu_size: usize,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            schedule: TemperatureSchedule::default(),
            tabu_size: 100,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_schedule(mut self, schedule: TemperatureSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Sets how many recent solutions tabu search refuses to revisit.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// A zero budget is allowed here; the driver rejects it for methods
    /// that are expected to make progress.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.tabu_size == 0 {
            return Err(SearchError::InvalidConfig("tabu size must be at least 1".into()));
        }
        self.schedule.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.iterations, 500);
        assert_eq!(config.schedule, TemperatureSchedule::Inverse { scale: 1000.0 });
        assert_eq!(config.tabu_size, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_tabu_size() {
        assert!(SearchConfig::default().with_tabu_size(1).validate().is_ok());
        assert!(matches!(
            SearchConfig::default().with_tabu_size(0).validate(),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::default().with_iterations(10).with_seed(3);
        assert_eq!(config.iterations, 10);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_inverse_values() {
        let s = TemperatureSchedule::default();
        assert!((s.temperature(1) - 1000.0).abs() < 1e-12);
        assert!((s.temperature(4) - 250.0).abs() < 1e-12);
        assert_eq!(s.temperature(0), s.temperature(1));
    }

    #[test]
    fn test_schedules_non_increasing_and_positive() {
        let schedules = [
            TemperatureSchedule::Inverse { scale: 10.0 },
            TemperatureSchedule::Logarithmic { scale: 10.0 },
            TemperatureSchedule::Geometric {
                initial: 10.0,
                alpha: 0.99,
            },
            TemperatureSchedule::Geometric {
                initial: 10.0,
                alpha: 1.0,
            },
        ];
        for s in schedules {
            let mut prev = f64::INFINITY;
            for k in 1..5000 {
                let t = s.temperature(k);
                assert!(t > 0.0, "{s:?} non-positive at {k}");
                assert!(t <= prev, "{s:?} increased at {k}");
                prev = t;
            }
        }
    }

    #[test]
    fn test_validate_bad_scale() {
        let config =
            SearchConfig::default().with_schedule(TemperatureSchedule::Inverse { scale: 0.0 });
        assert!(config.validate().is_err());
        let s = TemperatureSchedule::Logarithmic { scale: f64::NAN };
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        let s = TemperatureSchedule::Geometric {
            initial: 1.0,
            alpha: 1.5,
        };
        assert!(s.validate().is_err());
        let s = TemperatureSchedule::Geometric {
            initial: 1.0,
            alpha: 0.0,
        };
        assert!(s.validate().is_err());
    }
}
