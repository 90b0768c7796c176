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

//! # Queens LS
//!
//! Min-conflicts local search for N-Queens: a hill climber that re-optimizes
//! every row in turn and restarts from a random board whenever a full sweep
//! fails to strictly reduce the number of threatened queen pairs.
//!
//! Core flow
//! - Pick a `eval::ConflictEvaluator` (`PairScanEvaluator` or `LineCountEvaluator`).
//! - Build an `engine::SearchController` around it.
//! - Pass a random generator and a `monitor::search_monitor::SearchMonitor`
//!   (`NoOpMonitor` for none) to `solve` or `run`.
//! - Read the `result::SearchOutcome`: the board, its conflicts, statistics and
//!   the termination reason.
//!
//! Module map
//! - `eval`: conflict counting and per-row scoring.
//! - `optimizer`: single-row min-conflicts moves and full sweeps.
//! - `engine`: the hill-climb/restart state machine.
//! - `monitor`: lifecycle observers and search limits.
//! - `result`: outcomes with termination reasons.
//! - `stats`: lightweight counters and timing.

pub mod engine;
pub mod eval;
pub mod monitor;
pub mod optimizer;
pub mod result;
pub mod stats;
