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

//! Min-conflicts row optimization.
//!
//! `RowOptimizer` moves the queen of a single row to a column of minimum total
//! conflicts, breaking ties uniformly at random. A sweep applies this to every
//! row in order `0..n`; each row sees the moves already made earlier in the same
//! sweep, so a sweep is not equivalent to optimizing all rows against one
//! frozen snapshot.
//!
//! Boards are taken and returned by value. The optimizer works on its own copy
//! and never aliases the caller's current board, which lets the controller keep
//! the current board untouched until it decides whether to commit the result.
//!
//! Because the queen's present column is one of the probed columns, the chosen
//! column never raises the total: the conflict count is non-increasing from row
//! to row within a sweep.

use crate::eval::ConflictEvaluator;
use queens_model::board::Board;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct RowOptimizer<E> {
    evaluator: E,
    /// `scores[c]`: total conflicts with the current row moved to column `c`.
    scores: Vec<usize>,
    /// Columns attaining the minimum score; never more than `n` entries.
    candidates: Vec<usize>,
}

impl<E> RowOptimizer<E>
where
    E: ConflictEvaluator,
{
    #[inline]
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            scores: Vec::new(),
            candidates: Vec::new(),
        }
    }

    /// Creates an optimizer whose buffers already hold `n` entries, so that
    /// sweeps on boards of up to `n` rows do not allocate.
    #[inline]
    pub fn preallocated(evaluator: E, n: usize) -> Self {
        Self {
            evaluator,
            scores: Vec::with_capacity(n),
            candidates: Vec::with_capacity(n),
        }
    }

    #[inline]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    #[inline]
    pub fn evaluator_mut(&mut self) -> &mut E {
        &mut self.evaluator
    }

    /// Moves the queen of `row` to a uniformly chosen column among those with
    /// the fewest total conflicts.
    ///
    /// Returns the updated board together with its conflict count.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn optimize_row<R>(&mut self, mut board: Board, row: usize, rng: &mut R) -> (Board, usize)
    where
        R: Rng + ?Sized,
    {
        let n = board.size();
        assert!(
            row < n,
            "called `RowOptimizer::optimize_row` with row out of bounds: the size is {} but the row is {}",
            n,
            row
        );

        self.evaluator.score_row(&board, row, &mut self.scores);
        debug_assert_eq!(self.scores.len(), n);

        let baseline = self.scores[board.column(row)];
        let best = self.scores.iter().copied().fold(baseline, usize::min);

        self.candidates.clear();
        for (column, &score) in self.scores.iter().enumerate() {
            if score == best {
                self.candidates.push(column);
            }
        }

        // The baseline column is always in `scores`, so at least one candidate exists.
        let chosen = self.candidates[rng.random_range(0..self.candidates.len())];
        board.set_column(row, chosen);

        (board, best)
    }

    /// Runs `optimize_row` over rows `0..n` in order and returns the resulting
    /// board and its conflict count.
    pub fn sweep<R>(&mut self, board: Board, rng: &mut R) -> (Board, usize)
    where
        R: Rng + ?Sized,
    {
        if board.is_empty() {
            return (board, 0);
        }

        let mut board = board;
        let mut conflicts = 0;
        for row in 0..board.size() {
            (board, conflicts) = self.optimize_row(board, row, rng);
        }
        (board, conflicts)
    }
}

impl<E> Default for RowOptimizer<E>
where
    E: ConflictEvaluator + Default,
{
    fn default() -> Self {
        Self::new(E::default())
    }
}
