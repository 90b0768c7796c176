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

//! # Board Sizes
//!
//! `BoardSize` is a validated, non-zero board dimension for which at least one
//! conflict-free placement exists. Constructing one is the single place where
//! the solver rejects input: sizes `<= 0` are `InvalidInput`, and sizes 2 and 3
//! are `Unsatisfiable` (every other positive size admits a solution).
//!
//! ## Usage
//!
//! ```rust
//! use queens_model::size::BoardSize;
//! use queens_model::error::QueensError;
//!
//! assert_eq!(BoardSize::new(8).map(|s| s.get()), Ok(8));
//! assert_eq!(BoardSize::new(3), Err(QueensError::Unsatisfiable { n: 3 }));
//! assert_eq!(BoardSize::try_from(-1_i64), Err(QueensError::InvalidInput { n: -1 }));
//! ```

use crate::error::QueensError;

/// A board size for which the search is guaranteed to have a target.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Validates `n` as a searchable board size.
    ///
    /// # Errors
    ///
    /// Returns `QueensError::InvalidInput` for `n == 0` and
    /// `QueensError::Unsatisfiable` for `n == 2` or `n == 3`.
    pub fn new(n: usize) -> Result<Self, QueensError> {
        if n == 0 {
            return Err(QueensError::InvalidInput { n: 0 });
        }
        if !is_satisfiable(n) {
            return Err(QueensError::Unsatisfiable { n });
        }
        Ok(Self(n))
    }

    /// Returns the number of rows (and columns).
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = QueensError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        if n <= 0 {
            return Err(QueensError::InvalidInput { n });
        }
        let n = usize::try_from(n).map_err(|_| QueensError::InvalidInput { n })?;
        Self::new(n)
    }
}

impl From<BoardSize> for usize {
    #[inline]
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Returns `true` if an `n`x`n` board admits a conflict-free placement.
///
/// Every positive size except 2 and 3 does. The empty board is reported as
/// unsatisfiable here; `BoardSize::new` rejects it as invalid input first.
#[inline]
pub fn is_satisfiable(n: usize) -> bool {
    !matches!(n, 0 | 2 | 3)
}
