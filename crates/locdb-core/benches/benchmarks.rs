use criterion::{criterion_group, criterion_main, Criterion};
use locdb_core::prelude::*;
use locdb_core::LocationIndex;
use std::hint::black_box;
use std::sync::Arc;

fn synthetic(size: u32) -> Vec<LocationRecord> {
    (0..size)
        .map(|i| {
            LocationRecord::new(format!("r{i}"), format!("Ort {i}"), LocationKind::Locality)
                .with_search_key(format!("ort-{i}"))
                .with_code(1000 + (i % 9000))
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let bundled = Arc::new(LocationStore::new());
    bundled
        .load(loader::bundled_records().unwrap().to_vec())
        .unwrap();
    let engine = SearchEngine::new(bundled);

    c.bench_function("search bundled text prefix", |b| {
        b.iter(|| engine.search(black_box("zü"), 8).unwrap())
    });
    c.bench_function("search bundled postal code", |b| {
        b.iter(|| engine.search(black_box("80"), 8).unwrap())
    });
    c.bench_function("search bundled empty query", |b| {
        b.iter(|| engine.search(black_box(""), 8).unwrap())
    });

    let large = Arc::new(LocationStore::from_records(synthetic(20_000)).unwrap());
    let engine = SearchEngine::new(large);
    c.bench_function("search 20k substring", |b| {
        b.iter(|| engine.search(black_box("99"), 8).unwrap())
    });
    c.bench_function("search 20k no match", |b| {
        b.iter(|| engine.search(black_box("qq"), 8).unwrap())
    });
}

fn bench_index_build(c: &mut Criterion) {
    let records = synthetic(20_000);
    c.bench_function("build index 20k", |b| {
        b.iter(|| LocationIndex::build(black_box(&records)))
    });
}

criterion_group!(benches, bench_search, bench_index_build);
criterion_main!(benches);
