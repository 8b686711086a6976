use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use dashmap::DashMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsmap::StripedMap;

const NUM_BUCKETS: usize = 100;
const NUM_PAIRS: usize = 10_000;

fn random_pairs(n: usize) -> Vec<(i64, i64)> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..n).map(|_| (rng.gen(), rng.gen())).collect()
}

fn bench_put(c: &mut Criterion) {
    let pairs = random_pairs(NUM_PAIRS);

    c.bench_function("striped put", |b| {
        b.iter(|| {
            let map = StripedMap::with_capacity(NUM_BUCKETS).unwrap();
            for &(key, value) in &pairs {
                map.put(black_box(key), black_box(value));
            }
        });
    });

    c.bench_function("dashmap insert", |b| {
        b.iter(|| {
            let map = DashMap::new();
            for &(key, value) in &pairs {
                map.insert(black_box(key), black_box(value));
            }
        });
    });
}

fn bench_get(c: &mut Criterion) {
    let pairs = random_pairs(NUM_PAIRS);

    let map = StripedMap::with_capacity(NUM_BUCKETS).unwrap();
    let dmap = DashMap::new();
    for &(key, value) in &pairs {
        map.put(key, value);
        dmap.insert(key, value);
    }

    c.bench_function("striped get", |b| {
        b.iter(|| {
            for &(key, _) in &pairs {
                black_box(map.get(black_box(key)));
            }
        });
    });

    c.bench_function("dashmap get", |b| {
        b.iter(|| {
            for &(key, _) in &pairs {
                black_box(dmap.get(&black_box(key)).map(|entry| *entry));
            }
        });
    });
}

criterion_group!(benches, bench_put, bench_get);
criterion_main!(benches);
