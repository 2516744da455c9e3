//! Rendering benchmarks
//!
//! Run with: `cargo bench --bench render_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swatchsheet::{generate_variants, CmykColor, Deviation, RenderRequest, SheetLayout, WriterConfig};

fn benchmark_generate_variants(c: &mut Criterion) {
    let base = CmykColor::new(100.0, 10.0, 2.0, 32.0);
    let mut group = c.benchmark_group("generate_variants");

    for deviation in [1u32, 5, 10] {
        let deviation = Deviation::new(deviation).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(deviation),
            &deviation,
            |b, &deviation| b.iter(|| generate_variants(black_box(base), deviation)),
        );
    }

    group.finish();
}

fn benchmark_plan(c: &mut Criterion) {
    let base = CmykColor::new(100.0, 10.0, 2.0, 32.0);
    let grid = generate_variants(base, Deviation::new(5).unwrap());
    let layout = SheetLayout::default();

    c.bench_function("plan_sheet", |b| {
        b.iter(|| {
            layout
                .plan(black_box(&grid), base, Some("press check"), Some("Pantone 3005 C"))
                .unwrap()
        })
    });
}

fn benchmark_render(c: &mut Criterion) {
    let request = RenderRequest::new(CmykColor::new(100.0, 10.0, 2.0, 32.0), Deviation::new(5).unwrap())
        .with_comment("press check");
    let mut group = c.benchmark_group("render");

    group.bench_function("uncompressed", |b| {
        b.iter(|| request.render_with_config(WriterConfig::uncompressed()).unwrap())
    });
    group.bench_function("default", |b| b.iter(|| request.render().unwrap()));

    group.finish();
}

criterion_group!(
    benches,
    benchmark_generate_variants,
    benchmark_plan,
    benchmark_render
);
criterion_main!(benches);
