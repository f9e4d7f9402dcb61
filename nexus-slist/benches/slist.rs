//! Benchmarks for the arena-backed list against `std::collections::LinkedList`.
//!
//! Run with: cargo bench -p nexus-slist

use std::collections::LinkedList;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nexus_slist::SinglyLinkedList;

const SIZES: [usize; 3] = [64, 1_024, 16_384];

// ============================================================================
// Push / pop at the head
// ============================================================================

fn bench_push_pop_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop_front");

    for &n in &SIZES {
        group.throughput(Throughput::Elements(n as u64));

        // Pre-allocate once; churn reuses freed slots
        let mut list: SinglyLinkedList<u64> = SinglyLinkedList::with_capacity(n);
        group.bench_with_input(BenchmarkId::new("nexus-slist", n), &n, |b, &n| {
            b.iter(|| {
                for i in 0..n as u64 {
                    list.push_front(i);
                }
                while let Some(v) = list.pop_front() {
                    black_box(v);
                }
            });
        });

        let mut std_list = LinkedList::new();
        group.bench_with_input(BenchmarkId::new("std", n), &n, |b, &n| {
            b.iter(|| {
                for i in 0..n as u64 {
                    std_list.push_front(i);
                }
                while let Some(v) = std_list.pop_front() {
                    black_box(v);
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Positional access
// ============================================================================

fn bench_get_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_middle");

    for &n in &SIZES {
        let list: SinglyLinkedList<u64> = (0..n as u64).collect();
        group.bench_with_input(BenchmarkId::new("nexus-slist", n), &n, |b, &n| {
            b.iter(|| black_box(list.get(black_box(n / 2))));
        });
    }

    group.finish();
}

// ============================================================================
// Delete by value
// ============================================================================

fn bench_remove_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_value_reinsert");

    for &n in &SIZES {
        let mut list: SinglyLinkedList<u64> = (0..n as u64).collect();
        let target = n as u64 / 2;
        group.bench_with_input(BenchmarkId::new("nexus-slist", n), &n, |b, _| {
            b.iter(|| {
                let v = list.remove_value(black_box(&target)).unwrap();
                list.push_back(v);
                // Keep the target in the middle for the next round
                let tail = list.pop_back().unwrap();
                list.insert_at(target as usize, tail).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop_front,
    bench_get_middle,
    bench_remove_value
);
criterion_main!(benches);
