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

//! Text report of a run.
//!
//! ```text
//! Solving...
//!
//! Solved board:
//!
//! 0 1 0 0
//! 0 0 0 1
//! 1 0 0 0
//! 0 0 1 0
//! (2 4 1 3)
//! Time: 0.000113 seconds
//! Note: Time can vary by a large % as there is randomness involved in the hill climb method implemented.
//! ```

use queens_model::board::Board;
use std::io::{self, Write};
use std::time::Duration;

pub const TIMING_NOTE: &str = "Note: Time can vary by a large % as there is randomness involved in the hill climb method implemented.";

/// Writes the line announcing the start of the search, followed by a blank line.
pub fn write_banner<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    writeln!(w, "Solving...")?;
    writeln!(w)
}

/// Writes the solved board: the grid when `grid` is set, then the column list.
pub fn write_solution<W: Write + ?Sized>(w: &mut W, board: &Board, grid: bool) -> io::Result<()> {
    writeln!(w, "Solved board:")?;
    writeln!(w)?;
    if grid {
        write!(w, "{}", board.display_grid())?;
    }
    writeln!(w, "{}", board.display_columns())
}

pub fn write_timing<W: Write + ?Sized>(w: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(w, "Time: {} seconds", elapsed.as_secs_f64())?;
    writeln!(w, "{}", TIMING_NOTE)
}
