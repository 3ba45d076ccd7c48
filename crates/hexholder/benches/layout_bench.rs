//! Criterion benchmarks for the layout pipeline and report rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexholder::holder::{HolderLayout, WrenchSpec};
use hexholder::{presets, report};
use rust_decimal::Decimal;

fn layout_bench(c: &mut Criterion) {
    let parameters = presets::default_parameters();
    let preset = presets::default_wrench_set();
    let large: Vec<WrenchSpec> = (1..=64)
        .map(|n| WrenchSpec::new(Decimal::new(n * 5, 1), 24.0, 36.0))
        .collect();

    let mut group = c.benchmark_group("layout");

    group.bench_function("compute_preset", |b| {
        b.iter(|| black_box(HolderLayout::compute(black_box(&preset), &parameters)))
    });

    group.bench_function("compute_64_wrenches", |b| {
        b.iter(|| black_box(HolderLayout::compute(black_box(&large), &parameters)))
    });

    if let Ok(layout) = HolderLayout::compute(&preset, &parameters) {
        group.bench_function("render_report", |b| {
            b.iter(|| black_box(report::render_report(black_box(&layout))))
        });
    }

    group.finish();
}

criterion_group!(benches, layout_bench);
criterion_main!(benches);
