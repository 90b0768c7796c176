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

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::SearchStatistics,
};
use queens_model::board::Board;

/// Terminates the search once `limit` sweeps have run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SweepLimitMonitor {
    limit: u64,
}

impl SweepLimitMonitor {
    #[inline]
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    #[inline]
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl SearchMonitor for SweepLimitMonitor {
    fn name(&self) -> &str {
        "SweepLimitMonitor"
    }

    fn on_start(&mut self, _initial_board: &Board, _conflicts: usize) {}

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
        if statistics.sweeps >= self.limit {
            SearchCommand::Terminate(format!(
                "sweep limit reached: {} (sweeps={})",
                self.limit, statistics.sweeps
            ))
        } else {
            SearchCommand::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminates_at_limit() {
        let mut mon = SweepLimitMonitor::new(3);
        assert_eq!(mon.limit(), 3);

        let mut stats = SearchStatistics::default();
        for _ in 0..3 {
            assert_eq!(mon.search_command(&stats), SearchCommand::Continue);
            stats.on_sweep(4);
        }
        assert_eq!(
            mon.search_command(&stats),
            SearchCommand::Terminate("sweep limit reached: 3 (sweeps=3)".to_string())
        );
    }

    #[test]
    fn test_zero_limit_stops_immediately() {
        let mut mon = SweepLimitMonitor::new(0);
        assert_ne!(
            mon.search_command(&SearchStatistics::default()),
            SearchCommand::Continue
        );
    }
}
