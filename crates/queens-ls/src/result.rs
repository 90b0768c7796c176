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

//! Search outcome and termination reporting.
//!
//! `SearchOutcome` bundles the final board, its conflict count, the run
//! statistics and the reason the controller stopped. Without monitors that
//! impose limits, the only way a run ends is `Solved`.

use crate::stats::SearchStatistics;
use queens_model::board::Board;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchTerminationReason {
    /// A board without conflicts was reached.
    Solved,

    /// A monitor stopped the search (time limit, sweep limit, ...).
    /// The string describes why.
    Aborted(String),
}

impl std::fmt::Display for SearchTerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchTerminationReason::Solved => write!(f, "Solved"),
            SearchTerminationReason::Aborted(msg) => write!(f, "Aborted: {}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    termination_reason: SearchTerminationReason,
    board: Board,
    conflicts: usize,
    statistics: SearchStatistics,
}

impl SearchOutcome {
    /// Creates a solved outcome.
    #[inline]
    pub fn solved(board: Board, statistics: SearchStatistics) -> Self {
        Self {
            termination_reason: SearchTerminationReason::Solved,
            board,
            conflicts: 0,
            statistics,
        }
    }

    /// Creates an aborted outcome carrying the best board seen.
    #[inline]
    pub fn aborted<R>(
        board: Board,
        conflicts: usize,
        reason: R,
        statistics: SearchStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        Self {
            termination_reason: SearchTerminationReason::Aborted(reason.into()),
            board,
            conflicts,
            statistics,
        }
    }

    #[inline]
    pub fn termination_reason(&self) -> &SearchTerminationReason {
        &self.termination_reason
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self.termination_reason, SearchTerminationReason::Solved)
    }

    /// Returns the final board: the solution if solved, otherwise the board
    /// with the fewest conflicts seen.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn into_board(self) -> Board {
        self.board
    }

    #[inline]
    pub fn conflicts(&self) -> usize {
        self.conflicts
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Termination: {}", self.termination_reason)?;
        writeln!(f, "Board: {}", self.board)?;
        writeln!(f, "Conflicts: {}", self.conflicts)?;
        write!(f, "{}", self.statistics)
    }
}
