//! Ready-made iteration observers.

use std::io::Write;

use super::types::IterationObserver;

/// Writes one `"<index> <cost>"` line per iteration.
///
/// Write failures are ignored; progress output never affects a run.
#[derive(Debug)]
pub struct PrintObserver<W: Write> {
    out: W,
}

impl<W: Write> PrintObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<S, W: Write> IterationObserver<S> for PrintObserver<W> {
    fn on_iteration(&mut self, index: usize, _best: &S, cost: f64) {
        let _ = writeln!(self.out, "{index} {cost}");
    }
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl<S> IterationObserver<S> for SilentObserver {
    fn on_iteration(&mut self, _index: usize, _best: &S, _cost: f64) {}
}

/// One entry of a run trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEntry<S> {
    pub index: usize,
    pub best: S,
    pub cost: f64,
}

/// Records the full run trace.
#[derive(Debug, Clone)]
pub struct TraceRecorder<S> {
    pub entries: Vec<TraceEntry<S>>,
}

impl<S> Default for TraceRecorder<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S> TraceRecorder<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded costs in iteration order.
    pub fn costs(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.cost).collect()
    }
}

impl<S: Clone> IterationObserver<S> for TraceRecorder<S> {
    fn on_iteration(&mut self, index: usize, best: &S, cost: f64) {
        self.entries.push(TraceEntry {
            index,
            best: best.clone(),
            cost,
        });
    }
}
