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

//! Uniform random initialization.
//!
//! Each row draws its column independently and uniformly from `[0, n)`, so
//! columns may repeat. The generator is passed in by the caller; the search
//! threads a single generator through initialization and tie-breaking so that
//! a fixed seed reproduces a whole run.

use crate::board::Board;
use rand::Rng;

/// Creates a board of `n` rows with independently drawn uniform columns.
pub fn random_board<R>(n: usize, rng: &mut R) -> Board
where
    R: Rng + ?Sized,
{
    let columns = (0..n).map(|_| rng.random_range(0..n)).collect();
    Board::new(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_board_has_requested_size_and_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for n in [1, 4, 8, 31] {
            let board = random_board(n, &mut rng);
            assert_eq!(board.size(), n);
            assert!(board.columns().iter().all(|&c| c < n));
        }
    }

    #[test]
    fn test_random_board_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(random_board(0, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = random_board(32, &mut ChaCha8Rng::seed_from_u64(42));
        let b = random_board(32, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_consecutive_draws_differ() {
        // Two 64-row boards from one stream coincide with probability 64^-64.
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let a = random_board(64, &mut rng);
        let b = random_board(64, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_every_column_is_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = [false; 5];
        for _ in 0..200 {
            for &c in random_board(5, &mut rng).columns() {
                seen[c] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
