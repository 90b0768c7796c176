// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Statistics reporting for min-conflicts runs.
//!
//! Counters are updated once per sweep, improvement or restart, so they stay
//! out of the per-column hot path. Updates saturate instead of overflowing.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SearchStatistics {
    /// Number of full sweeps over all rows.
    pub sweeps: u64,

    /// Number of sweeps whose result strictly reduced conflicts and was committed.
    pub improvements: u64,

    /// Number of times the board was discarded and re-initialized.
    pub restarts: u64,

    /// Number of single-row optimizations performed.
    pub row_evaluations: u64,

    /// Total time taken by the search.
    pub time_total: Duration,
}

impl SearchStatistics {
    /// Called before each sweep over `rows` rows.
    #[inline]
    pub fn on_sweep(&mut self, rows: usize) {
        self.sweeps = self.sweeps.saturating_add(1);
        self.row_evaluations = self
            .row_evaluations
            .saturating_add(u64::try_from(rows).unwrap_or(u64::MAX));
    }

    /// Called when a sweep result is committed.
    #[inline]
    pub fn on_improvement(&mut self) {
        self.improvements = self.improvements.saturating_add(1);
    }

    /// Called when the board is re-initialized.
    #[inline]
    pub fn on_restart(&mut self) {
        self.restarts = self.restarts.saturating_add(1);
    }

    /// Sets the total time taken by the search.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Sweeps that did not improve and therefore triggered a restart.
    #[inline]
    pub fn plateaus(&self) -> u64 {
        self.sweeps.saturating_sub(self.improvements)
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Min-Conflicts Statistics:")?;
        writeln!(f, "   Sweeps:           {}", self.sweeps)?;
        writeln!(f, "   Improvements:     {}", self.improvements)?;
        writeln!(f, "   Plateaus:         {}", self.plateaus())?;
        writeln!(f, "   Restarts:         {}", self.restarts)?;
        writeln!(f, "   Row Evaluations:  {}", self.row_evaluations)?;
        writeln!(f, "   Total Time:       {:?}", self.time_total)?;
        Ok(())
    }
}
