//! Benchmarks for configuration resolution
//!
//! Run with: cargo bench --bench resolve

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use crt_effect::{presets::PresetName, CrtEffect, PartialConfig, Resolver, StyleVariables};
use std::hint::black_box;

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let resolver = Resolver::new();
    let overrides = PartialConfig::new().enable_glow(false).edge_glow_size(0.2);

    for name in PresetName::ALL {
        group.bench_with_input(BenchmarkId::new("preset", name), &name, |b, name| {
            b.iter(|| black_box(resolver.resolve(Some(name.as_str()), black_box(&overrides))))
        });
    }

    group.bench_function("no_preset", |b| {
        b.iter(|| black_box(resolver.resolve(None, black_box(&overrides))))
    });

    group.finish();
}

fn bench_style(c: &mut Criterion) {
    let config = Resolver::new().resolve(Some("cyberpunk"), &PartialConfig::new());

    c.bench_function("style/variables", |b| {
        b.iter(|| black_box(StyleVariables::from_config(black_box(&config))))
    });

    let effect = CrtEffect::new().preset("cyberpunk");
    c.bench_function("overlay/html", |b| {
        b.iter(|| black_box(effect.wrap("<p>READY.</p>").to_html()))
    });
}

criterion_group!(benches, bench_resolve, bench_style);
criterion_main!(benches);
