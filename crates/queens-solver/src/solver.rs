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

//! # Solver
//!
//! `Solver` turns a requested board size into a finished search. It rejects
//! sizes that cannot be searched (`QueensError::InvalidInput` for `n <= 0`,
//! `QueensError::Unsatisfiable` for `n` of 2 or 3) before any work is done, then
//! runs the min-conflicts controller with a single seeded generator and the
//! monitors implied by the configured limits.
//!
//! Without a seed the generator is seeded from a fresh random `u64`, which is
//! reported in the outcome so that any run can be replayed.
//!
//! ## Usage
//!
//! ```rust
//! use queens_solver::solver::SolverBuilder;
//!
//! let solver = SolverBuilder::new().with_seed(7).build();
//! let outcome = solver.solve(8).expect("8 queens has solutions");
//! assert!(outcome.search().is_solved());
//! assert_eq!(outcome.seed(), 7);
//! ```

use log::{debug, info};
use queens_ls::{
    engine::SearchController,
    eval::{ConflictEvaluator, LineCountEvaluator, PairScanEvaluator},
    monitor::{
        composite::CompositeMonitor, log::LogMonitor, sweep_limit::SweepLimitMonitor,
        time::TimeLimitMonitor,
    },
    result::SearchOutcome,
};
use queens_model::{error::QueensError, size::BoardSize};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::Duration;

/// Selects how candidate columns are priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvaluatorKind {
    /// Rescan all queen pairs for every probed column.
    PairScan,
    /// Column and diagonal occupancy counters.
    #[default]
    LineCount,
}

impl EvaluatorKind {
    /// Names accepted on the command line.
    pub const NAMES: [&'static str; 2] = ["pair-scan", "line-count"];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            EvaluatorKind::PairScan => "pair-scan",
            EvaluatorKind::LineCount => "line-count",
        }
    }
}

impl std::fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EvaluatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pair-scan" => Ok(EvaluatorKind::PairScan),
            "line-count" => Ok(EvaluatorKind::LineCount),
            other => Err(format!(
                "unknown evaluator `{}`, expected one of: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// The result of a `Solver::solve` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome {
    search: SearchOutcome,
    seed: u64,
    evaluator: EvaluatorKind,
}

impl SolverOutcome {
    #[inline]
    pub fn search(&self) -> &SearchOutcome {
        &self.search
    }

    #[inline]
    pub fn into_search(self) -> SearchOutcome {
        self.search
    }

    /// The seed the generator was created from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn evaluator(&self) -> EvaluatorKind {
        self.evaluator
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solver {
    seed: Option<u64>,
    evaluator: EvaluatorKind,
    time_limit: Option<Duration>,
    sweep_limit: Option<u64>,
    log_interval: Duration,
}

impl Solver {
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[inline]
    pub fn evaluator(&self) -> EvaluatorKind {
        self.evaluator
    }

    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    #[inline]
    pub fn sweep_limit(&self) -> Option<u64> {
        self.sweep_limit
    }

    /// Searches an `n`x`n` board.
    ///
    /// The search itself never fails; it ends when a solution is found or a
    /// configured limit is hit, which the outcome reports.
    ///
    /// # Errors
    ///
    /// Returns `QueensError::InvalidInput` if `n <= 0` and
    /// `QueensError::Unsatisfiable` if `n` is 2 or 3.
    pub fn solve(&self, n: i64) -> Result<SolverOutcome, QueensError> {
        let size = BoardSize::try_from(n)?;

        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        debug!(
            "solving {} with evaluator {} and seed {}",
            size, self.evaluator, seed
        );

        let search = match self.evaluator {
            EvaluatorKind::PairScan => self.run(PairScanEvaluator::new(), size, &mut rng),
            EvaluatorKind::LineCount => {
                self.run(LineCountEvaluator::preallocated(size.get()), size, &mut rng)
            }
        };

        info!(
            "{} after {} sweeps, {} restarts ({:.3}s)",
            search.termination_reason(),
            search.statistics().sweeps,
            search.statistics().restarts,
            search.statistics().time_total.as_secs_f64()
        );

        Ok(SolverOutcome {
            search,
            seed,
            evaluator: self.evaluator,
        })
    }

    fn run<E>(&self, evaluator: E, size: BoardSize, rng: &mut StdRng) -> SearchOutcome
    where
        E: ConflictEvaluator,
    {
        let mut monitor = CompositeMonitor::with_capacity(3);
        monitor.add_monitor(LogMonitor::new(self.log_interval, 0x0F));
        if let Some(limit) = self.time_limit {
            monitor.add_monitor(TimeLimitMonitor::new(limit));
        }
        if let Some(limit) = self.sweep_limit {
            monitor.add_monitor(SweepLimitMonitor::new(limit));
        }

        let mut controller = SearchController::preallocated(evaluator, size.get());
        controller.run(size, rng, &mut monitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverBuilder {
    seed: Option<u64>,
    evaluator: EvaluatorKind,
    time_limit: Option<Duration>,
    sweep_limit: Option<u64>,
    log_interval: Duration,
}

impl Default for SolverBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBuilder {
    #[inline]
    pub fn new() -> Self {
        Self {
            seed: None,
            evaluator: EvaluatorKind::default(),
            time_limit: None,
            sweep_limit: None,
            log_interval: Duration::from_secs(1),
        }
    }

    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[inline]
    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }

    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[inline]
    pub fn with_sweep_limit(mut self, limit: u64) -> Self {
        self.sweep_limit = Some(limit);
        self
    }

    /// Minimum time between progress lines of the log monitor.
    #[inline]
    pub fn with_log_interval(mut self, interval: Duration) -> Self {
        self.log_interval = interval;
        self
    }

    #[inline]
    pub fn build(self) -> Solver {
        Solver {
            seed: self.seed,
            evaluator: self.evaluator,
            time_limit: self.time_limit,
            sweep_limit: self.sweep_limit,
            log_interval: self.log_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queens_ls::{eval::count_conflicts, result::SearchTerminationReason};

    #[test]
    fn test_builder_defaults() {
        let solver = SolverBuilder::default().build();
        assert_eq!(solver.seed(), None);
        assert_eq!(solver.evaluator(), EvaluatorKind::LineCount);
        assert_eq!(solver.time_limit(), None);
        assert_eq!(solver.sweep_limit(), None);
    }

    #[test]
    fn test_builder_sets_fields() {
        let solver = SolverBuilder::new()
            .with_seed(3)
            .with_evaluator(EvaluatorKind::PairScan)
            .with_time_limit(Duration::from_secs(2))
            .with_sweep_limit(10)
            .with_log_interval(Duration::from_millis(100))
            .build();
        assert_eq!(solver.seed(), Some(3));
        assert_eq!(solver.evaluator(), EvaluatorKind::PairScan);
        assert_eq!(solver.time_limit(), Some(Duration::from_secs(2)));
        assert_eq!(solver.sweep_limit(), Some(10));
    }

    #[test]
    fn test_rejects_invalid_and_unsatisfiable_sizes() {
        let solver = SolverBuilder::new().with_seed(1).build();
        assert_eq!(solver.solve(0), Err(QueensError::InvalidInput { n: 0 }));
        assert_eq!(solver.solve(-3), Err(QueensError::InvalidInput { n: -3 }));
        assert_eq!(solver.solve(2), Err(QueensError::Unsatisfiable { n: 2 }));
        assert_eq!(solver.solve(3), Err(QueensError::Unsatisfiable { n: 3 }));
    }

    #[test]
    fn test_solves_with_both_evaluators() {
        for kind in [EvaluatorKind::PairScan, EvaluatorKind::LineCount] {
            let solver = SolverBuilder::new().with_seed(11).with_evaluator(kind).build();
            let outcome = solver.solve(10).expect("satisfiable size");
            assert!(outcome.search().is_solved());
            assert_eq!(outcome.evaluator(), kind);
            assert_eq!(count_conflicts(outcome.search().board()), 0);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible_across_evaluators() {
        let a = SolverBuilder::new()
            .with_seed(5)
            .with_evaluator(EvaluatorKind::PairScan)
            .build()
            .solve(9)
            .expect("satisfiable size");
        let b = SolverBuilder::new()
            .with_seed(5)
            .build()
            .solve(9)
            .expect("satisfiable size");
        assert_eq!(a.search().board(), b.search().board());
    }

    #[test]
    fn test_unseeded_run_reports_its_seed() {
        let solver = SolverBuilder::new().build();
        let first = solver.solve(8).expect("satisfiable size");
        let replay = SolverBuilder::new()
            .with_seed(first.seed())
            .build()
            .solve(8)
            .expect("satisfiable size");
        assert_eq!(first.search().board(), replay.search().board());
    }

    #[test]
    fn test_sweep_limit_is_reported() {
        let solver = SolverBuilder::new().with_seed(2).with_sweep_limit(0).build();
        let outcome = solver.solve(40).expect("satisfiable size");
        assert!(matches!(
            outcome.search().termination_reason(),
            SearchTerminationReason::Aborted(_)
        ));
        assert_eq!(outcome.into_search().board().size(), 40);
    }

    #[test]
    fn test_evaluator_kind_parsing() {
        assert_eq!("pair-scan".parse::<EvaluatorKind>(), Ok(EvaluatorKind::PairScan));
        assert_eq!("line-count".parse::<EvaluatorKind>(), Ok(EvaluatorKind::LineCount));
        assert!("fast".parse::<EvaluatorKind>().is_err());
        for name in EvaluatorKind::NAMES {
            let kind: EvaluatorKind = name.parse().unwrap();
            assert_eq!(kind.to_string(), name);
        }
    }
}
