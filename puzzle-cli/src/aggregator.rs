//! Result aggregator for ordering parallel solver results
//!
//! Solvers finish in whatever order the thread pool schedules them, but the
//! output should read in (year, day, part) order. The aggregator holds the
//! sorted list of keys it is waiting for and a key-ordered buffer of
//! results that arrived early; a result is released as soon as everything
//! before it has been released.

use crate::executor::SolverResult;
use std::collections::{BTreeMap, VecDeque};

/// Key for ordering results (year, day, part) - ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Aggregator that buffers results and emits them in sorted order
pub struct ResultAggregator {
    /// Keys still awaited, sorted ascending; the front is next to emit
    expected: VecDeque<ResultKey>,
    /// Early arrivals, keyed and therefore iterable in output order
    pending: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    /// Create aggregator from the list of expected keys (any order)
    pub fn new(mut expected_keys: Vec<ResultKey>) -> Self {
        expected_keys.sort_unstable();
        Self {
            expected: expected_keys.into(),
            pending: BTreeMap::new(),
        }
    }

    /// Add a result and return any results ready for output (in order)
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.expected.front() {
            match self.pending.remove(next) {
                Some(result) => {
                    self.expected.pop_front();
                    ready.push(result);
                }
                None => break,
            }
        }
        ready
    }

    /// Drain remaining buffered results in order (for final output)
    pub fn drain(&mut self) -> Vec<SolverResult> {
        std::mem::take(&mut self.pending).into_values().collect()
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}
