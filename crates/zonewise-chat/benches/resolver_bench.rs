//! Benchmarks for the zone-resolution cascade.
//!
//! Measures the three resolver paths separately: exact containment (the
//! common case), the per-token fuzzy fallback, and a full miss, which pays
//! for every similarity comparison before giving up.

use criterion::{criterion_group, criterion_main, Criterion};
use zonewise_chat::resolve_zone;
use zonewise_core::catalog::ZoneCatalog;
use zonewise_core::types::Dataset;

fn bench_resolver(c: &mut Criterion) {
    let catalog = ZoneCatalog::builtin();
    let zones: Vec<String> = catalog.zones(Dataset::Flood).to_vec();

    c.bench_function("resolve_exact_containment", |b| {
        b.iter(|| resolve_zone(std::hint::black_box("flood levels in anna nagar today"), &zones))
    });

    c.bench_function("resolve_fuzzy_token", |b| {
        b.iter(|| resolve_zone(std::hint::black_box("flood status sholinganalur please"), &zones))
    });

    c.bench_function("resolve_miss", |b| {
        b.iter(|| resolve_zone(std::hint::black_box("numbers for the whole city please"), &zones))
    });
}

criterion_group!(benches, bench_resolver);
criterion_main!(benches);
