//! Reading values back from driver output.

use crate::error::SearchError;

pub const RESULT_MARKER: &str = "result";
pub const ELAPSED_MARKER: &str = "dt";

/// The two numbers an experiment needs from one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOutput {
    /// Objective value of the returned solution.
    pub cost: f64,
    /// Elapsed wall-clock seconds.
    pub seconds: f64,
}

impl RunOutput {
    /// Extracts the first number following the first `result` marker and the
    /// first number following the first `dt` marker. Each number must sit on
    /// the same line as its marker.
    pub fn parse(text: &str) -> Result<Self, SearchError> {
        Ok(Self {
            seconds: number_after(text, ELAPSED_MARKER)?,
            cost: number_after(text, RESULT_MARKER)?,
        })
    }
}

fn number_after(text: &str, marker: &str) -> Result<f64, SearchError> {
    let missing = || SearchError::UnparsableOutput {
        marker: marker.to_string(),
    };
    let start = text.find(marker).ok_or_else(missing)? + marker.len();
    let line = text[start..].lines().next().unwrap_or("");
    first_number(line).ok_or_else(missing)
}

/// First run of digits and dots containing at least one digit.
fn first_number(line: &str) -> Option<f64> {
    let is_num = |c: char| c.is_ascii_digit() || c == '.';
    let mut rest = line;
    while let Some(begin) = rest.find(is_num) {
        let tail = &rest[begin..];
        let end = tail.find(|c: char| !is_num(c)).unwrap_or(tail.len());
        let candidate = &tail[..end];
        if candidate.bytes().any(|b| b.is_ascii_digit()) {
            return candidate.parse().ok();
        }
        rest = &tail[end..];
    }
    None
}
