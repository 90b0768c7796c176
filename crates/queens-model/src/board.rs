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

//! # Board
//!
//! A placement of `n` queens on an `n`x`n` board with exactly one queen per
//! row. `columns[row]` is the 0-indexed column of the queen in `row`; the row is
//! implicit in the position. Columns may repeat, the board only guarantees its
//! length and that every value lies in `[0, n)`.
//!
//! Besides the raw column access, the board offers the two text renderings
//! used by the command line front end:
//!
//! - `ColumnsDisplay`: `(c1 c2 ... cn)` with 1-indexed columns.
//! - `GridDisplay`: `n` lines of `n` space-separated `1`/`0` tokens.
//!
//! ## Usage
//!
//! ```rust
//! use queens_model::board::Board;
//!
//! let board = Board::new(vec![1, 3, 0, 2]);
//! assert_eq!(board.size(), 4);
//! assert_eq!(board.display_columns().to_string(), "(2 4 1 3)");
//! assert_eq!(board.display_grid().to_string().lines().next(), Some("0 1 0 0"));
//! ```

/// One queen per row, stored as its column.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    columns: Vec<usize>,
}

impl Board {
    /// Constructs a board from 0-indexed columns, one per row.
    ///
    /// # Panics
    ///
    /// Panics if any column is outside `[0, columns.len())`.
    pub fn new(columns: Vec<usize>) -> Self {
        let n = columns.len();
        if let Some((row, &column)) = columns.iter().enumerate().find(|&(_, &c)| c >= n) {
            panic!(
                "called `Board::new` with column out of range: row {} has column {} but the board size is {}",
                row, column, n
            );
        }

        Self { columns }
    }

    /// Constructs a board from 1-indexed columns, the notation used for output.
    ///
    /// Returns `None` if any entry is `0` or greater than the number of rows.
    pub fn from_one_indexed(columns: &[usize]) -> Option<Self> {
        let n = columns.len();
        let columns = columns
            .iter()
            .map(|&c| if (1..=n).contains(&c) { Some(c - 1) } else { None })
            .collect::<Option<Vec<_>>>()?;
        Some(Self { columns })
    }

    /// Returns the number of rows (equal to the number of columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the board has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the column of the queen in `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn column(&self, row: usize) -> usize {
        debug_assert!(
            row < self.size(),
            "called `Board::column` with row out of bounds: the len is {} but the row is {}",
            self.size(),
            row
        );

        self.columns[row]
    }

    /// Moves the queen in `row` to `column`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is out of bounds.
    #[inline]
    pub fn set_column(&mut self, row: usize, column: usize) {
        let n = self.size();
        assert!(
            row < n && column < n,
            "called `Board::set_column` with position out of bounds: the size is {} but the position is ({}, {})",
            n,
            row,
            column
        );

        self.columns[row] = column;
    }

    /// Returns the columns of all rows in row order.
    #[inline]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Returns `true` if the queen in `row` stands in `column`.
    #[inline]
    pub fn has_queen(&self, row: usize, column: usize) -> bool {
        self.columns.get(row) == Some(&column)
    }

    /// Expands the board into an `n`x`n` matrix with `1` for a queen and `0`
    /// for an empty square.
    pub fn grid(&self) -> Vec<Vec<u8>> {
        let n = self.size();
        self.columns
            .iter()
            .map(|&queen| (0..n).map(|c| u8::from(c == queen)).collect())
            .collect()
    }

    /// Renders the columns as `(c1 c2 ... cn)`, 1-indexed.
    #[inline]
    pub fn display_columns(&self) -> ColumnsDisplay<'_> {
        ColumnsDisplay { board: self }
    }

    /// Renders the board as rows of `1`/`0` tokens.
    #[inline]
    pub fn display_grid(&self) -> GridDisplay<'_> {
        GridDisplay { board: self }
    }
}

impl From<Board> for Vec<usize> {
    #[inline]
    fn from(board: Board) -> Self {
        board.columns
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display_columns().fmt(f)
    }
}

/// The `(c1 c2 ... cn)` rendering of a board, 1-indexed.
#[derive(Debug, Clone, Copy)]
pub struct ColumnsDisplay<'a> {
    board: &'a Board,
}

impl std::fmt::Display for ColumnsDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (row, column) in self.board.columns.iter().enumerate() {
            if row > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", column + 1)?;
        }
        write!(f, ")")
    }
}

/// The grid rendering of a board, one line per row.
#[derive(Debug, Clone, Copy)]
pub struct GridDisplay<'a> {
    board: &'a Board,
}

impl std::fmt::Display for GridDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.board.size();
        for &queen in &self.board.columns {
            for c in 0..n {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", u8::from(c == queen))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
