//! Command-line driver.
//!
//! Turns a list of free-form tokens into an immutable [`RunConfig`],
//! generates a random problem and runs the selected methods one after the
//! other. The final `result <length> dt <seconds>` line of each method is
//! the contract that [`crate::experiment`] parses.

mod invocation;
mod run;

pub use invocation::{Method, RunConfig};
pub use run::{dispatch, execute, MethodReport};
