#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::{collections::HashMap, hint::black_box};

use chainmap::ChainedHashMap;
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    collection::vec,
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = vec(any::<(String, u64)>(), ITEMS_AMOUNT).new_tree(&mut runner).unwrap().current();

    let chained_map: ChainedHashMap<String, u64> = items.iter().cloned().collect();
    let rust_map: HashMap<String, u64> = items.iter().cloned().collect();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    group.bench_function("chainmap insert", |b| {
        b.iter(|| {
            let mut map = ChainedHashMap::new();
            for (key, value) in items.iter().cloned() {
                map.insert(key, value);
            }
            map
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for (key, value) in items.iter().cloned() {
                map.insert(key, value);
            }
            map
        });
    });
    group.bench_function("chainmap get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                black_box(chained_map.get(key));
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                black_box(rust_map.get(key));
            }
        });
    });
    group.bench_function("chainmap remove", |b| {
        b.iter(|| {
            let mut map = chained_map.clone();
            for (key, _) in &items {
                black_box(map.remove(key));
            }
            map
        });
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches);

criterion_main!(benches);
