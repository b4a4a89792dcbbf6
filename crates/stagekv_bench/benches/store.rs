//! Store operation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stagekv_core::TransactionalStore;

/// Benchmark staging and committing a batch of writes.
fn bench_staged_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("staged_commit");

    for batch_size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            batch_size,
            |b, &batch_size| {
                // Pre-generate keys outside the measured loop.
                let keys: Vec<String> = (0..batch_size).map(|i| format!("key-{i}")).collect();

                b.iter(|| {
                    let mut store = TransactionalStore::new();
                    store.begin().unwrap();
                    for (i, key) in keys.iter().enumerate() {
                        store.put(black_box(key.clone()), black_box(i as u64)).unwrap();
                    }
                    store.commit().unwrap();
                    store
                });
            },
        );
    }
    group.finish();
}

/// Benchmark committed-view reads.
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for key_count in [100, 10_000].iter() {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(key_count),
            key_count,
            |b, &key_count| {
                let mut store = TransactionalStore::new();
                store.begin().unwrap();
                for i in 0..key_count {
                    store.put(format!("key-{i}"), i as u64).unwrap();
                }
                store.commit().unwrap();
                let probe = format!("key-{}", key_count / 2);

                b.iter(|| store.get(black_box(&probe)));
            },
        );
    }
    group.finish();
}

/// Benchmark restaging the same key, where the last write wins.
fn bench_overwrite(c: &mut Criterion) {
    c.bench_function("staged_overwrite", |b| {
        let mut store = TransactionalStore::new();
        store.begin().unwrap();

        b.iter(|| {
            store.put(black_box("hot-key"), black_box(1u64)).unwrap();
        });
    });
}

criterion_group!(benches, bench_staged_commit, bench_get, bench_overwrite);
criterion_main!(benches);
