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

//! Monitoring interface for min-conflicts runs.
//!
//! Hooks receive the board they concern together with its conflict count, so
//! monitors never need to re-evaluate a board. The default `search_command`
//! continues, keeping observers that impose no limit lightweight.

use crate::stats::SearchStatistics;
use queens_model::board::Board;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

pub trait SearchMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once with the first random board.
    fn on_start(&mut self, initial_board: &Board, conflicts: usize);

    /// Called after every sweep with the candidate it produced, before the
    /// controller decides whether to commit it.
    fn on_sweep(&mut self, candidate: &Board, conflicts: usize, statistics: &SearchStatistics);

    /// Called when a candidate strictly reduced conflicts and became current.
    fn on_improvement(&mut self, current: &Board, conflicts: usize, statistics: &SearchStatistics);

    /// Called when the current board is abandoned for a fresh random one.
    fn on_restart(&mut self, abandoned: &Board, conflicts: usize, statistics: &SearchStatistics);

    /// Called once when the search stops, with the board that is returned.
    fn on_end(&mut self, final_board: &Board, conflicts: usize, statistics: &SearchStatistics);

    /// Determines whether the controller may run another sweep.
    fn search_command(&mut self, _statistics: &SearchStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
}

impl<M> SearchMonitor for &mut M
where
    M: SearchMonitor + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_start(&mut self, initial_board: &Board, conflicts: usize) {
        (**self).on_start(initial_board, conflicts);
    }

    fn on_sweep(&mut self, candidate: &Board, conflicts: usize, statistics: &SearchStatistics) {
        (**self).on_sweep(candidate, conflicts, statistics);
    }

    fn on_improvement(&mut self, current: &Board, conflicts: usize, statistics: &SearchStatistics) {
        (**self).on_improvement(current, conflicts, statistics);
    }

    fn on_restart(&mut self, abandoned: &Board, conflicts: usize, statistics: &SearchStatistics) {
        (**self).on_restart(abandoned, conflicts, statistics);
    }

    fn on_end(&mut self, final_board: &Board, conflicts: usize, statistics: &SearchStatistics) {
        (**self).on_end(final_board, conflicts, statistics);
    }

    fn search_command(&mut self, statistics: &SearchStatistics) -> SearchCommand {
        (**self).search_command(statistics)
    }
}

impl std::fmt::Debug for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor {{ name: {} }}", self.name())
    }
}

impl std::fmt::Display for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor: {}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_continue() {
        assert_eq!(SearchCommand::default(), SearchCommand::Continue);
    }

    #[test]
    fn test_display() {
        assert_eq!(SearchCommand::Continue.to_string(), "Continue");
        assert_eq!(
            SearchCommand::Terminate("sweep limit".to_string()).to_string(),
            "Terminate: sweep limit"
        );
    }
}
