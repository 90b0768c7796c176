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

//! Progress logging through the `log` facade.
//!
//! `LogMonitor` writes one `info` line at most every `log_interval`, checking
//! the clock only on sweeps selected by `clock_check_mask`. The `conflicts`
//! column is the result of the latest sweep, so it follows the fresh board after
//! a restart. Restarts are logged at `debug`, every sweep at `trace`. Nothing is
//! printed unless the binary installs a logger.

use crate::{monitor::search_monitor::SearchMonitor, stats::SearchStatistics};
use log::{debug, info, trace};
use queens_model::board::Board;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    current_conflicts: usize,
    best_conflicts: Option<usize>,
}

impl LogMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            current_conflicts: 0,
            best_conflicts: None,
        }
    }

    /// Conflict count of the latest sweep, or of the initial board before any sweep.
    #[inline]
    pub fn current_conflicts(&self) -> usize {
        self.current_conflicts
    }

    /// Lowest conflict count observed since `on_start`.
    #[inline]
    pub fn best_conflicts(&self) -> Option<usize> {
        self.best_conflicts
    }

    fn observe(&mut self, conflicts: usize) {
        self.current_conflicts = conflicts;
        self.best_conflicts = Some(self.best_conflicts.map_or(conflicts, |b| b.min(conflicts)));
    }

    fn log_line(&mut self, statistics: &SearchStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();
        let best = self
            .best_conflicts
            .map_or_else(|| "-".to_string(), |b| b.to_string());

        info!(
            "{:>8.1}s | sweeps {:<10} | restarts {:<8} | conflicts {:<6} | best {}",
            elapsed, statistics.sweeps, statistics.restarts, self.current_conflicts, best
        );

        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 0x0F)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl SearchMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_start(&mut self, initial_board: &Board, conflicts: usize) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_conflicts = None;
        self.observe(conflicts);
        info!(
            "searching {}x{} board, initial conflicts {}",
            initial_board.size(),
            initial_board.size(),
            conflicts
        );
    }

    fn on_sweep(&mut self, _candidate: &Board, conflicts: usize, statistics: &SearchStatistics) {
        trace!("sweep {} -> {} conflicts", statistics.sweeps, conflicts);
        self.current_conflicts = conflicts;
        if (statistics.sweeps & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(statistics);
        }
    }

    fn on_improvement(&mut self, _current: &Board, conflicts: usize, _statistics: &SearchStatistics) {
        self.observe(conflicts);
    }

    fn on_restart(&mut self, _abandoned: &Board, conflicts: usize, statistics: &SearchStatistics) {
        debug!(
            "plateau at {} conflicts after {} sweeps, restart #{}",
            conflicts, statistics.sweeps, statistics.restarts
        );
    }

    fn on_end(&mut self, _final_board: &Board, conflicts: usize, statistics: &SearchStatistics) {
        self.observe(conflicts);
        info!(
            "search finished: {} conflicts, {} sweeps, {} restarts in {:.3}s",
            conflicts,
            statistics.sweeps,
            statistics.restarts,
            statistics.time_total.as_secs_f64()
        );
    }
}
