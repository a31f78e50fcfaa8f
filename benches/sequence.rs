use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use linked_sequence::LinkedSequence;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("LinkedSequence");
    for size in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("push_front", size), &size, |b, &n| {
            b.iter_with_large_drop(|| {
                let mut seq = LinkedSequence::new();
                for i in 0..n {
                    seq.push_front(black_box(i));
                }
                seq
            })
        });

        group.bench_with_input(BenchmarkId::new("clone", size), &size, |b, &n| {
            let seq: LinkedSequence<usize> = (0..n).collect();
            b.iter_with_large_drop(|| black_box(&seq).clone())
        });

        group.bench_with_input(BenchmarkId::new("lexicographic_cmp", size), &size, |b, &n| {
            let lhs: LinkedSequence<usize> = (0..n).collect();
            let rhs: LinkedSequence<usize> = (0..n).collect();
            b.iter(|| black_box(&lhs).cmp(black_box(&rhs)))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
