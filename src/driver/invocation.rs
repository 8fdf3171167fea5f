//! Token-based invocation parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::search::TemperatureSchedule;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The algorithms the driver can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Method {
    FullSearch,
    RandomProbe,
    HillClimbingRandomized,
    HillClimbingDeterministic,
    SimAnnealing,
    TabuSearch,
}

impl Method {
    pub const ALL: [Method; 6] = [
        Method::FullSearch,
        Method::RandomProbe,
        Method::HillClimbingRandomized,
        Method::HillClimbingDeterministic,
        Method::SimAnnealing,
        Method::TabuSearch,
    ];

    /// The command-line token selecting this method.
    pub fn token(&self) -> &'static str {
        match self {
            Method::FullSearch => "fullSearch",
            Method::RandomProbe => "randomProbe",
            Method::HillClimbingRandomized => "hillClimbingRandomized",
            Method::HillClimbingDeterministic => "hillClimbingDeterministic",
            Method::SimAnnealing => "simAnnealing",
            Method::TabuSearch => "tabuSearch",
        }
    }

    pub fn from_token(token: &str) -> Option<Method> {
        Method::ALL.into_iter().find(|m| m.token() == token)
    }

    /// Whether the method consumes the iteration budget.
    pub fn is_iterative(&self) -> bool {
        !matches!(self, Method::FullSearch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Everything one driver invocation needs, fixed before any search starts.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Number of cities in the generated problem.
    pub problem_size: usize,
    /// Iteration budget handed to every iterative method.
    pub iterations: usize,
    /// Print a trace line per iteration.
    pub trace: bool,
    /// Print the problem before searching.
    pub print_problem: bool,
    /// Print each method's solution and its length.
    pub print_solution: bool,
    /// Methods to run, in order.
    pub methods: Vec<Method>,
    pub schedule: TemperatureSchedule,
    /// Tabu list capacity for tabu search.
    pub tabu_size: usize,
    /// Seed for the problem and every method. `None` uses OS entropy.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            problem_size: 5,
            iterations: 500,
            trace: true,
            print_problem: false,
            print_solution: false,
            methods: Vec::new(),
            schedule: TemperatureSchedule::default(),
            tabu_size: 100,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Builds a configuration from free-form tokens.
    ///
    /// | Token | Effect |
    /// |---|---|
    /// | `p<digits>` | problem size |
    /// | `i<digits>` | iteration budget |
    /// | `t<digits>` | tabu list size |
    /// | `--seed <digits>`, `--seed=<digits>` | random seed |
    /// | `-print` / `-noprint` | trace on / off |
    /// | `-problem` | print the problem |
    /// | `-printSol` | print solutions |
    /// | method name | append the method |
    ///
    /// For repeated settings the last token wins. Any other token is
    /// rejected.
    pub fn from_tokens<I, T>(tokens: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut config = RunConfig::default();
        let mut tokens = tokens.into_iter();
        while let Some(token) = tokens.next() {
            let token = token.as_ref();
            if token == "--seed" {
                let value = tokens.next().ok_or_else(|| SearchError::MalformedInvocation {
                    token: token.to_string(),
                    reason: "missing numeric value".into(),
                })?;
                config.seed = Some(parse_count(token, value.as_ref())?);
            } else if let Some(digits) = token.strip_prefix("--seed=") {
                config.seed = Some(parse_count(token, digits)?);
            } else {
                config.apply(token)?;
            }
        }
        Ok(config)
    }

    fn apply(&mut self, token: &str) -> Result<(), SearchError> {
        if let Some(method) = Method::from_token(token) {
            self.methods.push(method);
            return Ok(());
        }
        match token {
            "-print" => self.trace = true,
            "-noprint" => self.trace = false,
            "-problem" => self.print_problem = true,
            "-printSol" => self.print_solution = true,
            _ => {
                if let Some(digits) = token.strip_prefix('p') {
                    self.problem_size = parse_count(token, digits)?;
                } else if let Some(digits) = token.strip_prefix('i') {
                    self.iterations = parse_count(token, digits)?;
                } else if let Some(digits) = token.strip_prefix('t') {
                    self.tabu_size = parse_count(token, digits)?;
                } else {
                    return Err(SearchError::MalformedInvocation {
                        token: token.to_string(),
                        reason: "unrecognized token".into(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects configurations no method can run with.
    pub fn validate(&self) -> Result<(), SearchError> {
        self.schedule.validate()?;
        if self.methods.is_empty() {
            return Ok(());
        }
        if self.tabu_size == 0 && self.methods.contains(&Method::TabuSearch) {
            return Err(SearchError::InvalidConfig("tabu size must be at least 1".into()));
        }
        if self.problem_size == 0 {
            return Err(SearchError::InvalidProblemSize {
                size: self.problem_size,
            });
        }
        if self.iterations == 0 {
            if let Some(method) = self.methods.iter().find(|m| m.is_iterative()) {
                return Err(SearchError::InvalidIterationBudget {
                    method: method.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Seed for the method at `position`, distinct from the problem seed.
    pub fn method_seed(&self, position: usize) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(position as u64 + 1))
    }
}

fn parse_count<T: FromStr>(token: &str, digits: &str) -> Result<T, SearchError> {
    let malformed = |reason: &str| SearchError::MalformedInvocation {
        token: token.to_string(),
        reason: reason.to_string(),
    };
    if digits.is_empty() {
        return Err(malformed("missing numeric value"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed("value is not a non-negative integer"));
    }
    digits.parse().map_err(|_| malformed("value out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::from_tokens(Vec::<String>::new()).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.problem_size, 5);
        assert_eq!(config.iterations, 500);
        assert!(config.trace);
    }

    #[test]
    fn test_full_invocation() {
        let config = RunConfig::from_tokens([
            "p12",
            "i1000",
            "-noprint",
            "-problem",
            "hillClimbingRandomized",
            "simAnnealing",
            "-printSol",
        ])
        .unwrap();
        assert_eq!(config.problem_size, 12);
        assert_eq!(config.iterations, 1000);
        assert!(!config.trace);
        assert!(config.print_problem);
        assert!(config.print_solution);
        assert_eq!(
            config.methods,
            vec![Method::HillClimbingRandomized, Method::SimAnnealing]
        );
    }

    #[test]
    fn test_last_setting_wins() {
        let config = RunConfig::from_tokens(["p3", "-noprint", "p9", "-print"]).unwrap();
        assert_eq!(config.problem_size, 9);
        assert!(config.trace);
    }

    #[test]
    fn test_tabu_tokens() {
        let config = RunConfig::from_tokens(["t20", "tabuSearch", "p8"]).unwrap();
        assert_eq!(config.tabu_size, 20);
        assert_eq!(config.methods, vec![Method::TabuSearch]);
        assert_eq!(RunConfig::default().tabu_size, 100);

        let config = RunConfig::from_tokens(["t0", "tabuSearch"]).unwrap();
        assert!(matches!(config.validate(), Err(SearchError::InvalidConfig(_))));
        let config = RunConfig::from_tokens(["t0", "simAnnealing"]).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_seed_token_anywhere() {
        let config =
            RunConfig::from_tokens(["p10", "simAnnealing", "-printSol", "--seed", "42"]).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.methods, vec![Method::SimAnnealing]);
        assert!(config.print_solution);

        let config = RunConfig::from_tokens(["--seed=7", "randomProbe", "--seed=9"]).unwrap();
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_malformed_seed() {
        let cases: [&[&str]; 4] = [&["--seed"], &["--seed", "x1"], &["--seed="], &["--seed=-3"]];
        for bad in cases {
            match RunConfig::from_tokens(bad) {
                Err(SearchError::MalformedInvocation { token, .. }) => {
                    assert!(token.starts_with("--seed"), "{bad:?}: {token}")
                }
                other => panic!("{bad:?}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_method_tokens_round_trip() {
        for m in Method::ALL {
            assert_eq!(Method::from_token(m.token()), Some(m));
        }
        assert_eq!(Method::from_token("tabu"), None);
    }

    #[test]
    fn test_malformed_tokens() {
        for bad in ["p", "i", "p12x", "ix", "p99999999999999999999999", "bogus"] {
            let err = RunConfig::from_tokens([bad]).unwrap_err();
            assert!(
                matches!(err, SearchError::MalformedInvocation { ref token, .. } if token == bad),
                "{bad}: {err}"
            );
        }
    }

    #[test]
    fn test_validate_problem_size() {
        let config = RunConfig::from_tokens(["p0", "randomProbe"]).unwrap();
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidProblemSize { size: 0 })
        ));
    }

    #[test]
    fn test_validate_iteration_budget() {
        let config = RunConfig::from_tokens(["i0", "fullSearch"]).unwrap();
        assert!(config.validate().is_ok());

        let config = RunConfig::from_tokens(["i0", "fullSearch", "simAnnealing"]).unwrap();
        match config.validate() {
            Err(SearchError::InvalidIterationBudget { method }) => {
                assert_eq!(method, "simAnnealing")
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_method_seeds_distinct() {
        let config = RunConfig::default().with_seed(10);
        assert_eq!(config.method_seed(0), Some(11));
        assert_eq!(config.method_seed(1), Some(12));
        assert_eq!(RunConfig::default().method_seed(0), None);
    }
}
