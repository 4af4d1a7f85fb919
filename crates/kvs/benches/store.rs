use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use kvs::KeyValueStore;

fn bench_set(c: &mut Criterion) {
    let store: KeyValueStore<String> = KeyValueStore::new(10).unwrap();
    let value = String::from("benchmark-value");
    c.bench_function("set", |b| {
        b.iter(|| store.set(black_box("person"), &value).unwrap())
    });
}

fn bench_get(c: &mut Criterion) {
    let store: KeyValueStore<String> = KeyValueStore::new(10).unwrap();
    store.set("person", &String::from("Alice")).unwrap();
    c.bench_function("get", |b| {
        b.iter(|| store.get(black_box("person")).unwrap())
    });
}

fn bench_delete(c: &mut Criterion) {
    c.bench_function("delete", |b| {
        b.iter_batched(
            || {
                let store: KeyValueStore<String> = KeyValueStore::new(10).unwrap();
                store.set("person", &String::from("Alice")).unwrap();
                store
            },
            |store| store.delete(black_box("person")).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

fn bench_shard_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_by_shard_count");
    for shards in [1usize, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(shards), &shards, |b, &n| {
            let store: KeyValueStore<String> = KeyValueStore::new(n).unwrap();
            let value = String::from("v");
            let mut i = 0u64;
            b.iter(|| {
                i += 1;
                store.set(format!("key-{i}"), &value).unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_set,
    bench_get,
    bench_delete,
    bench_shard_scaling
);
criterion_main!(benches);
