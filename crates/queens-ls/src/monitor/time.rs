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

//! Time-based termination.
//!
//! `TimeLimitMonitor` stops a search once a wall-clock budget is spent. The
//! clock is only read when `sweeps & clock_check_mask == 0`. A sweep costs at
//! least `O(n^2)`, which dwarfs a clock read, so the default mask of `0` checks
//! before every sweep and a run overshoots its budget by at most one sweep.
//! The start time is reset in `on_start`, so one monitor can time several runs.

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::SearchStatistics,
};
use queens_model::board::Board;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    start_time: Instant,
    time_limit: Duration,
    clock_check_mask: u64,
}

impl TimeLimitMonitor {
    /// Checks the clock before every sweep.
    const DEFAULT_SWEEP_CLOCK_CHECK_MASK: u64 = 0;

    #[inline]
    pub fn new(time_limit: Duration) -> Self {
        Self::with_mask(time_limit, Self::DEFAULT_SWEEP_CLOCK_CHECK_MASK)
    }

    /// Lower mask values check more often; `0` checks before every sweep.
    #[inline]
    pub fn with_mask(time_limit: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            time_limit,
            clock_check_mask,
        }
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl SearchMonitor for TimeLimitMonitor {
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_start(&mut self, _initial_board: &Board, _conflicts: usize) {
        self.start_time = Instant::now();
    }

    fn on_sweep(&mut self, _candidate: &Board, _conflicts: usize, _statistics: &SearchStatistics) {}

    fn on_improvement(
        &mut self,
        _current: &Board,
        _conflicts: usize,
        _statistics: &SearchStatistics,
    ) {
    }

    fn on_restart(&mut self, _abandoned: &Board, _conflicts: usize, _statistics: &SearchStatistics) {
    }

    fn on_end(&mut self, _final_board: &Board, _conflicts: usize, _statistics: &SearchStatistics) {}

    fn search_command(&mut self, statistics: &SearchStatistics) -> SearchCommand {
        if (statistics.sweeps & self.clock_check_mask) == 0
            && self.start_time.elapsed() >= self.time_limit
        {
            return SearchCommand::Terminate("time limit reached".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with_sweeps(sweeps: u64) -> SearchStatistics {
        SearchStatistics {
            sweeps,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_mask() {
        assert_eq!(TimeLimitMonitor::DEFAULT_SWEEP_CLOCK_CHECK_MASK, 0);
        let mon = TimeLimitMonitor::new(Duration::from_secs(1));
        assert_eq!(mon.clock_check_mask, 0);
        assert_eq!(mon.time_limit(), Duration::from_secs(1));
    }

    #[test]
    fn test_terminates_after_limit_on_check_sweep() {
        let mut mon = TimeLimitMonitor::new(Duration::from_millis(10));
        mon.start_time = Instant::now() - Duration::from_millis(50);

        match mon.search_command(&stats_with_sweeps(0)) {
            SearchCommand::Terminate(msg) => assert!(msg.contains("time limit")),
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_default_checks_every_sweep() {
        let mut mon = TimeLimitMonitor::new(Duration::from_millis(1));
        mon.start_time = Instant::now() - Duration::from_millis(50);
        for sweeps in [1, 3, 15, 17] {
            assert_ne!(mon.search_command(&stats_with_sweeps(sweeps)), SearchCommand::Continue);
        }
    }

    #[test]
    fn test_skips_clock_between_check_sweeps() {
        let mut mon = TimeLimitMonitor::with_mask(Duration::from_millis(1), 0x0F);
        mon.start_time = Instant::now() - Duration::from_millis(50);

        assert_eq!(mon.search_command(&stats_with_sweeps(3)), SearchCommand::Continue);
        assert_ne!(mon.search_command(&stats_with_sweeps(16)), SearchCommand::Continue);
    }

    #[test]
    fn test_zero_mask_always_checks() {
        let mut mon = TimeLimitMonitor::with_mask(Duration::from_millis(1), 0);
        mon.start_time = Instant::now() - Duration::from_millis(50);
        assert_ne!(mon.search_command(&stats_with_sweeps(12345)), SearchCommand::Continue);
    }

    #[test]
    fn test_continues_before_limit() {
        let mut mon = TimeLimitMonitor::with_mask(Duration::from_secs(3600), 0);
        mon.on_start(&Board::new(vec![0]), 0);
        assert_eq!(mon.search_command(&stats_with_sweeps(0)), SearchCommand::Continue);
    }

    #[test]
    fn test_on_start_resets_clock() {
        let mut mon = TimeLimitMonitor::with_mask(Duration::from_secs(10), 0);
        mon.start_time = Instant::now() - Duration::from_secs(60);
        mon.on_start(&Board::new(vec![0]), 0);
        assert_eq!(mon.search_command(&stats_with_sweeps(0)), SearchCommand::Continue);
    }
}
