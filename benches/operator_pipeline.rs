//! Evaluation and chart rendering benchmarks.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fractional_operators::core::actions::evaluate_operators::evaluate_operators::evaluate_operators;
use fractional_operators::core::actions::render_chart::chart_style::ChartStyle;
use fractional_operators::core::actions::render_chart::render_chart::{render_pdf, render_rgb, render_svg};
use fractional_operators::core::data::alpha::Alpha;
use fractional_operators::core::data::canvas_size::CanvasSize;
use fractional_operators::core::data::sample_grid::SampleGrid;

fn bench_evaluate_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_operators");

    for samples in [500usize, 5_000, 50_000] {
        let grid = SampleGrid::linspace(-2.0, 3.0, samples).unwrap();
        let alpha = Alpha::default();

        group.bench_with_input(BenchmarkId::from_parameter(samples), &grid, |b, grid| {
            b.iter(|| evaluate_operators(black_box(grid), black_box(alpha)).unwrap())
        });
    }

    group.finish();
}

fn bench_render_chart(c: &mut Criterion) {
    let grid = SampleGrid::default();
    let curves = evaluate_operators(&grid, Alpha::default()).unwrap();
    let size = CanvasSize::new(1000, 600).unwrap();
    let style = ChartStyle::default();

    c.bench_function("render_svg_1000x600", |b| {
        b.iter(|| render_svg(black_box(&curves), size, &style).unwrap())
    });

    c.bench_function("render_pdf_1000x600", |b| {
        b.iter(|| render_pdf(black_box(&curves), size, &style).unwrap())
    });

    c.bench_function("render_rgb_1000x600", |b| {
        b.iter(|| render_rgb(black_box(&curves), size, &style).unwrap())
    });
}

criterion_group!(benches, bench_evaluate_operators, bench_render_chart);
criterion_main!(benches);
