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

//! Min-conflicts hill climbing with random restarts.
//!
//! `SearchController` owns the current board and drives the state machine:
//!
//! ```text
//!   Searching --(conflicts == 0)--------------------------> Solved
//!   Searching --(sweep strictly improves: commit)---------> Searching
//!   Searching --(sweep does not improve: discard)---------> Stuck
//!   Stuck     --(fresh random board)----------------------> Searching
//! ```
//!
//! Each sweep runs the `RowOptimizer` over rows `0..n` on a copy of the
//! current board. Only a strict reduction of conflicts is committed; a plateau
//! or a worse candidate discards the copy and restarts from a new uniformly
//! random board. No memory of earlier attempts is kept and the loop has no
//! built-in iteration cap: unless a monitor terminates it, the run ends only
//! when a board without conflicts is found. Sizes for which no such board
//! exists are rejected up front by `BoardSize`, so the loop always has a target.
//!
//! One generator is threaded through initialization and tie-breaking, so a
//! seeded generator reproduces the whole run.

use crate::{
    eval::ConflictEvaluator,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    optimizer::RowOptimizer,
    result::SearchOutcome,
    stats::SearchStatistics,
};
use log::{debug, trace};
use queens_model::{error::QueensError, init::random_board, size::BoardSize};
use rand::Rng;
use std::time::Instant;

/// States of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchState {
    Searching,
    Stuck,
    Solved,
}

impl std::fmt::Display for SearchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchState::Searching => write!(f, "Searching"),
            SearchState::Stuck => write!(f, "Stuck"),
            SearchState::Solved => write!(f, "Solved"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchController<E> {
    optimizer: RowOptimizer<E>,
}

impl<E> Default for SearchController<E>
where
    E: ConflictEvaluator + Default,
{
    #[inline]
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E> SearchController<E>
where
    E: ConflictEvaluator,
{
    #[inline]
    pub fn new(evaluator: E) -> Self {
        Self {
            optimizer: RowOptimizer::new(evaluator),
        }
    }

    /// Creates a controller whose optimizer buffers are sized for `n` rows.
    #[inline]
    pub fn preallocated(evaluator: E, n: usize) -> Self {
        Self {
            optimizer: RowOptimizer::preallocated(evaluator, n),
        }
    }

    #[inline]
    pub fn evaluator(&self) -> &E {
        self.optimizer.evaluator()
    }

    /// Validates `n` and runs the search.
    ///
    /// # Errors
    ///
    /// Returns `QueensError::InvalidInput` for `n == 0` and
    /// `QueensError::Unsatisfiable` for `n == 2` or `n == 3`, without searching.
    pub fn solve<R, M>(
        &mut self,
        n: usize,
        rng: &mut R,
        monitor: &mut M,
    ) -> Result<SearchOutcome, QueensError>
    where
        R: Rng + ?Sized,
        M: SearchMonitor + ?Sized,
    {
        let size = BoardSize::new(n)?;
        Ok(self.run(size, rng, monitor))
    }

    /// Runs the search on a board of `size` rows until it is solved or a
    /// monitor terminates it.
    ///
    /// On termination by a monitor the outcome carries the board with the
    /// fewest conflicts seen during the run.
    pub fn run<R, M>(&mut self, size: BoardSize, rng: &mut R, monitor: &mut M) -> SearchOutcome
    where
        R: Rng + ?Sized,
        M: SearchMonitor + ?Sized,
    {
        let start_time = Instant::now();
        let n = size.get();
        let mut stats = SearchStatistics::default();

        let mut board = random_board(n, rng);
        let mut conflicts = self.optimizer.evaluator_mut().conflicts(&board);

        let mut best_board = board.clone();
        let mut best_conflicts = conflicts;

        debug!(
            "min-conflicts search on {} with {}: initial conflicts {}",
            size,
            self.optimizer.evaluator().name(),
            conflicts
        );
        monitor.on_start(&board, conflicts);

        let mut state = SearchState::Searching;
        let abort_reason = loop {
            state = match state {
                SearchState::Solved => break None,
                SearchState::Searching if conflicts == 0 => SearchState::Solved,
                SearchState::Searching => {
                    if let SearchCommand::Terminate(reason) = monitor.search_command(&stats) {
                        break Some(reason);
                    }

                    stats.on_sweep(n);
                    let (candidate, candidate_conflicts) = self.optimizer.sweep(board.clone(), rng);
                    monitor.on_sweep(&candidate, candidate_conflicts, &stats);

                    if candidate_conflicts < conflicts {
                        board = candidate;
                        conflicts = candidate_conflicts;
                        stats.on_improvement();
                        monitor.on_improvement(&board, conflicts, &stats);

                        if conflicts < best_conflicts {
                            best_board.clone_from(&board);
                            best_conflicts = conflicts;
                        }
                        SearchState::Searching
                    } else {
                        trace!(
                            "sweep {} stuck at {} conflicts",
                            stats.sweeps, candidate_conflicts
                        );
                        SearchState::Stuck
                    }
                }
                SearchState::Stuck => {
                    stats.on_restart();
                    monitor.on_restart(&board, conflicts, &stats);

                    board = random_board(n, rng);
                    conflicts = self.optimizer.evaluator_mut().conflicts(&board);
                    if conflicts < best_conflicts {
                        best_board.clone_from(&board);
                        best_conflicts = conflicts;
                    }
                    SearchState::Searching
                }
            };
        };

        stats.set_total_time(start_time.elapsed());

        match abort_reason {
            None => {
                debug_assert_eq!(conflicts, 0);
                debug!(
                    "solved {} after {} sweeps and {} restarts",
                    size, stats.sweeps, stats.restarts
                );
                monitor.on_end(&board, conflicts, &stats);
                SearchOutcome::solved(board, stats)
            }
            Some(reason) => {
                debug!("search aborted: {}", reason);
                monitor.on_end(&best_board, best_conflicts, &stats);
                SearchOutcome::aborted(best_board, best_conflicts, reason, stats)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{LineCountEvaluator, PairScanEvaluator, count_conflicts};
    use crate::monitor::{
        composite::CompositeMonitor, no_op::NoOpMonitor, sweep_limit::SweepLimitMonitor,
    };
    use crate::monitor::time::TimeLimitMonitor;
    use crate::result::SearchTerminationReason;
    use queens_model::board::Board;
    use rand::SeedableRng;
    use std::time::Duration;
    use rand_chacha::ChaCha8Rng;

    /// Records the hook sequence and checks the invariants the controller promises.
    #[derive(Debug, Default)]
    struct Audit {
        started: Option<usize>,
        current: usize,
        sweeps: u64,
        improvements: u64,
        restarts: u64,
        ended: Option<usize>,
    }

    impl SearchMonitor for Audit {
        fn name(&self) -> &str {
            "Audit"
        }

        fn on_start(&mut self, board: &Board, conflicts: usize) {
            assert_eq!(count_conflicts(board), conflicts);
            self.started = Some(conflicts);
            self.current = conflicts;
        }

        fn on_sweep(&mut self, candidate: &Board, conflicts: usize, stats: &SearchStatistics) {
            assert_eq!(count_conflicts(candidate), conflicts);
            assert!(conflicts <= self.current, "a sweep never raises conflicts");
            self.sweeps += 1;
            assert_eq!(stats.sweeps, self.sweeps);
        }

        fn on_improvement(&mut self, board: &Board, conflicts: usize, _stats: &SearchStatistics) {
            assert_eq!(count_conflicts(board), conflicts);
            assert!(conflicts < self.current, "only strict improvements are committed");
            self.current = conflicts;
            self.improvements += 1;
        }

        fn on_restart(&mut self, board: &Board, conflicts: usize, _stats: &SearchStatistics) {
            assert_eq!(count_conflicts(board), conflicts);
            assert!(conflicts > 0);
            self.restarts += 1;
            // The next improvement is measured against a fresh board.
            self.current = usize::MAX;
        }

        fn on_end(&mut self, _board: &Board, conflicts: usize, _stats: &SearchStatistics) {
            self.ended = Some(conflicts);
        }
    }

    #[test]
    fn test_solves_every_satisfiable_small_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut controller = SearchController::new(LineCountEvaluator::new());
        for n in std::iter::once(1).chain(4..=20) {
            let outcome = controller
                .solve(n, &mut rng, &mut NoOpMonitor::new())
                .expect("satisfiable size");
            assert!(outcome.is_solved(), "n = {}", n);
            assert_eq!(outcome.board().size(), n);
            assert_eq!(count_conflicts(outcome.board()), 0, "n = {}", n);
            assert_eq!(outcome.conflicts(), 0);
        }
    }

    #[test]
    fn test_pair_scan_controller_solves() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut controller = SearchController::new(PairScanEvaluator::new());
        let outcome = controller
            .solve(8, &mut rng, &mut NoOpMonitor::new())
            .expect("satisfiable size");
        assert!(outcome.is_solved());
        assert_eq!(count_conflicts(outcome.board()), 0);
    }

    #[test]
    fn test_single_queen_is_solved_without_sweeping() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut controller: SearchController<LineCountEvaluator> = SearchController::default();
        let outcome = controller
            .solve(1, &mut rng, &mut NoOpMonitor::new())
            .expect("satisfiable size");
        assert!(outcome.is_solved());
        assert_eq!(outcome.board().columns(), &[0]);
        assert_eq!(outcome.statistics().sweeps, 0);
        assert_eq!(outcome.statistics().restarts, 0);
    }

    #[test]
    fn test_four_queens_finds_a_known_solution() {
        let mut controller = SearchController::new(LineCountEvaluator::new());
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let outcome = controller
                .solve(4, &mut rng, &mut NoOpMonitor::new())
                .expect("satisfiable size");
            let columns = outcome.board().columns();
            assert!(
                columns == [1, 3, 0, 2] || columns == [2, 0, 3, 1],
                "seed {} gave {:?}",
                seed,
                columns
            );
        }
    }

    #[test]
    fn test_unsatisfiable_and_invalid_sizes_are_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut controller = SearchController::new(LineCountEvaluator::new());
        let mut audit = Audit::default();

        assert_eq!(
            controller.solve(2, &mut rng, &mut audit),
            Err(QueensError::Unsatisfiable { n: 2 })
        );
        assert_eq!(
            controller.solve(3, &mut rng, &mut audit),
            Err(QueensError::Unsatisfiable { n: 3 })
        );
        assert_eq!(
            controller.solve(0, &mut rng, &mut audit),
            Err(QueensError::InvalidInput { n: 0 })
        );
        assert!(audit.started.is_none(), "no search may start");
    }

    #[test]
    fn test_monitor_sees_consistent_hooks() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut controller = SearchController::new(LineCountEvaluator::new());
        let mut audit = Audit::default();

        let outcome = controller
            .solve(16, &mut rng, &mut audit)
            .expect("satisfiable size");

        assert!(outcome.is_solved());
        assert_eq!(audit.ended, Some(0));
        let stats = outcome.statistics();
        assert_eq!(stats.sweeps, audit.sweeps);
        assert_eq!(stats.improvements, audit.improvements);
        assert_eq!(stats.restarts, audit.restarts);
        // Every sweep either commits or restarts.
        assert_eq!(stats.sweeps, stats.improvements + stats.restarts);
        assert_eq!(stats.row_evaluations, stats.sweeps * 16);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut controller = SearchController::new(LineCountEvaluator::new());
        let a = controller
            .solve(12, &mut ChaCha8Rng::seed_from_u64(99), &mut NoOpMonitor::new())
            .expect("satisfiable size");
        let b = controller
            .solve(12, &mut ChaCha8Rng::seed_from_u64(99), &mut NoOpMonitor::new())
            .expect("satisfiable size");
        assert_eq!(a.board(), b.board());
        assert_eq!(a.statistics().sweeps, b.statistics().sweeps);
        assert_eq!(a.statistics().restarts, b.statistics().restarts);
    }

    #[test]
    fn test_evaluators_yield_identical_runs() {
        let mut scan = SearchController::new(PairScanEvaluator::new());
        let mut lines = SearchController::preallocated(LineCountEvaluator::preallocated(9), 9);
        let a = scan
            .solve(9, &mut ChaCha8Rng::seed_from_u64(7), &mut NoOpMonitor::new())
            .expect("satisfiable size");
        let b = lines
            .solve(9, &mut ChaCha8Rng::seed_from_u64(7), &mut NoOpMonitor::new())
            .expect("satisfiable size");
        assert_eq!(a.board(), b.board());
        assert_eq!(a.statistics().sweeps, b.statistics().sweeps);
    }

    #[test]
    fn test_sweep_limit_aborts_with_best_board() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut controller = SearchController::new(LineCountEvaluator::new());
        let mut limit = SweepLimitMonitor::new(0);
        let size = BoardSize::new(50).expect("satisfiable size");

        let outcome = controller.run(size, &mut rng, &mut limit);
        assert!(!outcome.is_solved());
        assert!(matches!(
            outcome.termination_reason(),
            SearchTerminationReason::Aborted(msg) if msg.contains("sweep limit")
        ));
        assert_eq!(outcome.statistics().sweeps, 0);
        assert_eq!(outcome.board().size(), 50);
        assert_eq!(count_conflicts(outcome.board()), outcome.conflicts());
        assert!(outcome.conflicts() > 0);
    }

    #[test]
    fn test_restart_abandons_in_range_boards() {
        #[derive(Default)]
        struct RestartWatcher {
            abandoned: Vec<Board>,
        }

        impl SearchMonitor for RestartWatcher {
            fn name(&self) -> &str {
                "RestartWatcher"
            }
            fn on_start(&mut self, _b: &Board, _c: usize) {}
            fn on_sweep(&mut self, _b: &Board, _c: usize, _s: &SearchStatistics) {}
            fn on_improvement(&mut self, _b: &Board, _c: usize, _s: &SearchStatistics) {}
            fn on_restart(&mut self, b: &Board, _c: usize, _s: &SearchStatistics) {
                self.abandoned.push(b.clone());
            }
            fn on_end(&mut self, _b: &Board, _c: usize, _s: &SearchStatistics) {}
        }

        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut controller = SearchController::new(LineCountEvaluator::new());
        let mut watcher = RestartWatcher::default();
        let mut limit = SweepLimitMonitor::new(400);
        let size = BoardSize::new(30).expect("satisfiable size");

        let outcome = {
            let mut monitor = CompositeMonitor::new();
            monitor.add_monitor(&mut watcher);
            monitor.add_monitor(&mut limit);
            controller.run(size, &mut rng, &mut monitor)
        };

        let stats = outcome.statistics();
        assert_eq!(stats.restarts, watcher.abandoned.len() as u64);
        assert_eq!(stats.sweeps, stats.improvements + stats.restarts);

        for board in &watcher.abandoned {
            assert_eq!(board.size(), 30);
            assert!(board.columns().iter().all(|&c| c < 30));
            assert!(count_conflicts(board) > 0);
        }
        // Each attempt starts from its own random board, so consecutive plateaus differ.
        for pair in watcher.abandoned.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_time_limit_stops_within_one_sweep() {
        /// Records the longest single sweep.
        #[derive(Default)]
        struct SweepTimer {
            last: Option<Instant>,
            longest: Duration,
        }

        impl SearchMonitor for SweepTimer {
            fn name(&self) -> &str {
                "SweepTimer"
            }
            fn on_start(&mut self, _b: &Board, _c: usize) {
                self.last = Some(Instant::now());
            }
            fn on_sweep(&mut self, _b: &Board, _c: usize, _s: &SearchStatistics) {
                let now = Instant::now();
                if let Some(last) = self.last {
                    self.longest = self.longest.max(now.duration_since(last));
                }
                self.last = Some(now);
            }
            fn on_improvement(&mut self, _b: &Board, _c: usize, _s: &SearchStatistics) {}
            fn on_restart(&mut self, _b: &Board, _c: usize, _s: &SearchStatistics) {}
            fn on_end(&mut self, _b: &Board, _c: usize, _s: &SearchStatistics) {}
        }

        let limit = Duration::from_millis(100);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut controller = SearchController::new(PairScanEvaluator::new());
        let mut timer = SweepTimer::default();
        let mut time_limit = TimeLimitMonitor::new(limit);
        let size = BoardSize::new(80).expect("satisfiable size");

        let start = Instant::now();
        let outcome = {
            let mut monitor = CompositeMonitor::new();
            monitor.add_monitor(&mut time_limit);
            monitor.add_monitor(&mut timer);
            controller.run(size, &mut rng, &mut monitor)
        };
        let elapsed = start.elapsed();

        assert!(matches!(
            outcome.termination_reason(),
            SearchTerminationReason::Aborted(msg) if msg.contains("time limit")
        ));
        // The clock is read before every sweep, so the overrun is bounded by a
        // single sweep plus the restart that may precede it.
        let bound = limit + timer.longest * 2 + Duration::from_millis(50);
        assert!(
            elapsed <= bound,
            "elapsed {:?} exceeds {:?} (longest sweep {:?}, sweeps {})",
            elapsed,
            bound,
            timer.longest,
            outcome.statistics().sweeps
        );
    }

    #[test]
    fn test_state_display() {
        assert_eq!(SearchState::Searching.to_string(), "Searching");
        assert_eq!(SearchState::Stuck.to_string(), "Stuck");
        assert_eq!(SearchState::Solved.to_string(), "Solved");
    }
}
