//! Error type shared by the driver, configuration and experiment layers.
//!
//! The search runners themselves never fail; everything here is raised at
//! the boundary before a search starts, or while writing and reading back
//! run output.

use thiserror::Error;

/// Errors raised while validating or interpreting a run.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A method that needs at least one city was given an empty problem.
    #[error("invalid problem size {size}: at least one city is required")]
    InvalidProblemSize { size: usize },

    /// An iterative method was given a zero iteration budget.
    #[error("invalid iteration budget for {method}: must be positive")]
    InvalidIterationBudget { method: String },

    /// A command-line token could not be interpreted.
    #[error("malformed invocation token `{token}`: {reason}")]
    MalformedInvocation { token: String, reason: String },

    /// Captured run output lacks a marker or its numeric value.
    #[error("unparsable run output: missing `{marker}` value")]
    UnparsableOutput { marker: String },

    /// Configuration parameters outside their valid domain.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing run output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
