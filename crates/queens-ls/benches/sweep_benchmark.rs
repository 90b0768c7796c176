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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use queens_ls::eval::{ConflictEvaluator, LineCountEvaluator, PairScanEvaluator};
use queens_ls::optimizer::RowOptimizer;
use queens_model::board::Board;
use queens_model::init::random_board;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// The pair scan is `O(n^4)` per sweep; keep it to sizes that finish quickly.
const PAIR_SCAN_SIZES: [usize; 3] = [8, 16, 32];
const LINE_COUNT_SIZES: [usize; 5] = [8, 16, 32, 128, 512];

fn bench_sweep<E>(c: &mut Criterion, group_name: &str, sizes: &[usize], make: fn(usize) -> E)
where
    E: ConflictEvaluator,
{
    let mut group = c.benchmark_group(group_name);

    for &n in sizes {
        let start: Board = random_board(n, &mut ChaCha8Rng::seed_from_u64(n as u64));
        let mut optimizer = RowOptimizer::preallocated(make(n), n);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &start, |b, start| {
            b.iter(|| {
                let (board, conflicts) = optimizer.sweep(black_box(start.clone()), &mut rng);
                black_box((board, conflicts))
            })
        });
    }
    group.finish();
}

fn bench_pair_scan(c: &mut Criterion) {
    bench_sweep(c, "sweep_pair_scan", &PAIR_SCAN_SIZES, |_| {
        PairScanEvaluator::new()
    });
}

fn bench_line_count(c: &mut Criterion) {
    bench_sweep(
        c,
        "sweep_line_count",
        &LINE_COUNT_SIZES,
        LineCountEvaluator::preallocated,
    );
}

criterion_group!(benches, bench_pair_scan, bench_line_count);
criterion_main!(benches);
