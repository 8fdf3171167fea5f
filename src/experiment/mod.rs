//! Experiment sweeps over problem sizes and methods.
//!
//! The driver's `result <length> dt <seconds>` line is the only interface
//! between a run and the experiment layer. [`RunOutput::parse`] reads it,
//! [`Aggregator`] averages it per (method, size), and [`Sweep`] produces it
//! for a whole grid of independent runs in parallel.

mod aggregate;
mod output;
mod sweep;

pub use aggregate::{Aggregator, Summary, SummaryRow};
pub use output::{RunOutput, ELAPSED_MARKER, RESULT_MARKER};
pub use sweep::{run_unit, Sweep, SweepConfig, SweepUnit};
