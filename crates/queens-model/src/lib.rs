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

//! # Queens Model
//!
//! Data model shared by the N-Queens search crates. A board stores one
//! queen per row as a column index; columns and diagonals are never kept as
//! separate structures, conflicts are derived from the column vector alone.
//!
//! ## Modules
//!
//! - `board`: the `Board` type, its invariants, and text renderings
//!   (1-indexed column list and 0/1 grid).
//! - `init`: uniform random initialization used at start and on every restart.
//! - `size`: validated board sizes (`BoardSize`), rejecting empty and
//!   unsatisfiable sizes up front.
//! - `error`: the `QueensError` taxonomy.

pub mod board;
pub mod error;
pub mod init;
pub mod size;
