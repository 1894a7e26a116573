use criterion::{Criterion, criterion_group, criterion_main};
use indexmap::IndexMap;
use std::hint::black_box;
use telechart::api::{ChartConfig, ChartEngine, NullTooltipSink};
use telechart::core::{
    Bounds, Column, ColumnKind, Dataset, Scale, Viewport, compute_boundaries, project_column,
};
use telechart::render::NullRenderer;

fn synthetic_dataset(samples: usize, series: usize) -> Dataset {
    let mut types = IndexMap::new();
    types.insert("x".to_owned(), ColumnKind::X);

    let mut columns = vec![Column::new(
        "x",
        (0..samples).map(|i| i as f64 * 86_400_000.0).collect(),
    )];
    for s in 0..series {
        let name = format!("y{s}");
        types.insert(name.clone(), ColumnKind::Line);
        columns.push(Column::new(
            name,
            (0..samples)
                .map(|i| 100.0 + ((i + s * 17) % 97) as f64)
                .collect(),
        ));
    }

    Dataset::new(columns, types, IndexMap::new(), IndexMap::new())
}

fn bench_compute_boundaries_100k(c: &mut Criterion) {
    let dataset = synthetic_dataset(100_000, 2);

    c.bench_function("compute_boundaries_100k", |b| {
        b.iter(|| {
            let _ = compute_boundaries(black_box(&dataset)).expect("bounds");
        })
    });
}

fn bench_project_column_10k(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000).map(|i| 50.0 + (i % 211) as f64).collect();
    let scale = Scale::derive(
        Bounds::new(50.0, 260.0),
        values.len(),
        Viewport::new(1200, 400),
        40.0,
    );

    c.bench_function("project_column_10k", |b| {
        b.iter(|| {
            let _ = project_column(black_box(&values), black_box(&scale), 400.0, 40.0);
        })
    });
}

fn bench_build_render_frame_2k(c: &mut Criterion) {
    let engine = ChartEngine::new(
        NullRenderer::default(),
        NullTooltipSink,
        synthetic_dataset(2_000, 4),
        ChartConfig::default(),
    )
    .expect("engine init");

    c.bench_function("build_render_frame_2k", |b| {
        b.iter(|| {
            let _ = engine.build_render_frame().expect("frame build");
        })
    });
}

criterion_group!(
    benches,
    bench_compute_boundaries_100k,
    bench_project_column_10k,
    bench_build_render_frame_2k
);
criterion_main!(benches);
