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

//! # Search Monitors
//!
//! Observers and controllers for the min-conflicts search lifecycle. Monitors
//! can log progress or enforce budgets by returning
//! `SearchCommand::Terminate` from `search_command`, without entangling those
//! concerns with the hill-climbing loop itself.
//!
//! ## Submodules
//!
//! - `search_monitor`: the `SearchMonitor` trait and `SearchCommand`.
//! - `composite`: fan a single hook stream out to several monitors.
//! - `no_op`: a monitor that observes nothing and never stops the search.
//! - `time`: wall-clock budget with mask-throttled clock checks.
//! - `sweep_limit`: stop after a fixed number of sweeps.
//! - `log`: periodic progress lines through the `log` facade.

pub mod composite;
pub mod log;
pub mod no_op;
pub mod search_monitor;
pub mod sweep_limit;
pub mod time;
