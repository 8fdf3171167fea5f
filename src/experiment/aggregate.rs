//! Grouping run outputs into per-size means.

use std::collections::BTreeMap;
use std::fmt;

use u_numflow::stats::mean;

use super::output::RunOutput;
use crate::driver::Method;

/// Accumulates run outputs keyed by method and problem size.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    groups: BTreeMap<(Method, usize), Vec<RunOutput>>,
    skipped: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, method: Method, size: usize, output: RunOutput) {
        self.groups.entry((method, size)).or_default().push(output);
    }

    /// Counts a repetition whose output could not be used.
    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    /// Number of skipped repetitions so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Arithmetic mean of cost and seconds per group, each computed
    /// independently. A group holding a non-finite value reports NaN.
    pub fn summary(&self) -> Summary {
        let rows = self
            .groups
            .iter()
            .map(|(&(method, size), outputs)| {
                let costs: Vec<f64> = outputs.iter().map(|o| o.cost).collect();
                let seconds: Vec<f64> = outputs.iter().map(|o| o.seconds).collect();
                SummaryRow {
                    method,
                    size,
                    mean_cost: mean(&costs).unwrap_or(f64::NAN),
                    mean_seconds: mean(&seconds).unwrap_or(f64::NAN),
                    samples: outputs.len(),
                }
            })
            .collect();
        Summary {
            rows,
            skipped: self.skipped,
        }
    }
}

/// Mean values for one (method, size) group.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub method: Method,
    pub size: usize,
    pub mean_cost: f64,
    pub mean_seconds: f64,
    pub samples: usize,
}

/// Aggregated experiment results, ordered by method then size.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
    pub skipped: usize,
}

impl Summary {
    pub fn rows_for(&self, method: Method) -> impl Iterator<Item = &SummaryRow> {
        self.rows.iter().filter(move |r| r.method == method)
    }
}

impl fmt::Display for Summary {
    /// One header line per method followed by `"<size> <mean-cost> <mean-time>"`
    /// lines. A trailing line reports skipped repetitions, if any.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = None;
        for row in &self.rows {
            if current != Some(row.method) {
                writeln!(f, "{}", row.method)?;
                current = Some(row.method);
            }
            writeln!(f, "{} {} {}", row.size, row.mean_cost, row.mean_seconds)?;
        }
        if self.skipped > 0 {
            writeln!(f, "skipped {}", self.skipped)?;
        }
        Ok(())
    }
}
