//! Benchmark for FifoQueue, LifoQueue and DoubleQueue against VecDeque and
//! Vec.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fpds::queue::{DoubleQueue, FifoQueue, LifoQueue};
use std::collections::VecDeque;
use std::hint::black_box;

// =============================================================================
// FIFO Benchmark (steady state: push one, pop one)
// =============================================================================

fn benchmark_fifo(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fifo_steady_state");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("FifoQueue", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut queue: FifoQueue<i32> = (0..64).collect();
                for index in 0..size {
                    queue.push(black_box(index));
                    black_box(queue.pop().ok());
                }
                black_box(queue)
            });
        });

        group.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut deque: VecDeque<i32> = (0..64).collect();
                for index in 0..size {
                    deque.push_back(black_box(index));
                    black_box(deque.pop_front());
                }
                black_box(deque)
            });
        });
    }

    group.finish();
}

// =============================================================================
// LIFO Benchmark
// =============================================================================

fn benchmark_lifo(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lifo_fill_drain");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("LifoQueue", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut queue = LifoQueue::new();
                for index in 0..size {
                    queue.push(black_box(index));
                }
                while let Ok(element) = queue.pop() {
                    black_box(element);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut stack = Vec::new();
                for index in 0..size {
                    stack.push(black_box(index));
                }
                while let Some(element) = stack.pop() {
                    black_box(element);
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// Double-ended Benchmark
// =============================================================================

fn benchmark_double(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("double_both_ends");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("DoubleQueue", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut queue = DoubleQueue::new();
                for index in 0..size {
                    queue.push_front(black_box(index));
                    queue.push_rear(black_box(index));
                    black_box(queue.pop_front().ok());
                }
                black_box(queue)
            });
        });

        group.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut deque = VecDeque::new();
                for index in 0..size {
                    deque.push_front(black_box(index));
                    deque.push_back(black_box(index));
                    black_box(deque.pop_front());
                }
                black_box(deque)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_fifo, benchmark_lifo, benchmark_double);
criterion_main!(benches);
