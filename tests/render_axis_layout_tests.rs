use indexmap::IndexMap;
use telechart::api::{ChartConfig, ChartEngine, NullTooltipSink};
use telechart::core::{Column, ColumnKind, Dataset};
use telechart::render::{NullRenderer, TextHAlign};

const DAY_MS: f64 = 86_400_000.0;

fn daily_dataset(days: usize) -> Dataset {
    let mut types = IndexMap::new();
    types.insert("x".to_owned(), ColumnKind::X);
    types.insert("y0".to_owned(), ColumnKind::Line);

    let timestamps: Vec<f64> = (0..days).map(|i| i as f64 * DAY_MS).collect();
    let values: Vec<f64> = (0..days).map(|i| (i % 7) as f64 * 3.0 + 10.0).collect();

    Dataset::new(
        vec![Column::new("x", timestamps), Column::new("y0", values)],
        types,
        IndexMap::new(),
        IndexMap::new(),
    )
}

#[test]
fn date_label_cadence_targets_the_slot_count() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        NullTooltipSink,
        daily_dataset(30),
        ChartConfig::default(),
    )
    .expect("engine init");
    engine.init().expect("first paint");

    let frame = engine
        .renderer()
        .last_frame
        .as_ref()
        .expect("painted frame");

    // 30 samples over 6 slots labels every 5th sample: indices 0, 5, .., 25
    let dates: Vec<&str> = frame.texts.iter().skip(5).map(|t| t.text.as_str()).collect();
    assert_eq!(dates, vec!["Jan 1", "Jan 6", "Jan 11", "Jan 16", "Jan 21", "Jan 26"]);
}

#[test]
fn date_labels_sit_at_sample_pixels_on_the_bottom_band() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        NullTooltipSink,
        daily_dataset(30),
        ChartConfig::default(),
    )
    .expect("engine init");
    engine.init().expect("first paint");

    let frame = engine
        .renderer()
        .last_frame
        .as_ref()
        .expect("painted frame");

    // x_ratio = 1200 / 29
    let x_ratio = 1200.0 / 29.0;
    for (slot, label) in frame.texts.iter().skip(5).enumerate() {
        assert_eq!(label.x, (slot * 5) as f64 * x_ratio);
        assert_eq!(label.y, 390.0);
        assert_eq!(label.h_align, TextHAlign::Left);
    }
}

#[test]
fn gridlines_span_the_full_surface_width() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        NullTooltipSink,
        daily_dataset(30),
        ChartConfig::default(),
    )
    .expect("engine init");
    engine.init().expect("first paint");

    let frame = engine
        .renderer()
        .last_frame
        .as_ref()
        .expect("painted frame");
    assert_eq!(frame.lines.len(), 5);
    for line in &frame.lines {
        assert_eq!(line.x1, 0.0);
        assert_eq!(line.x2, 1200.0);
        assert_eq!(line.y1, line.y2);
    }
}

#[test]
fn value_labels_hug_the_left_edge_above_their_gridline() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        NullTooltipSink,
        daily_dataset(30),
        ChartConfig::default(),
    )
    .expect("engine init");
    engine.init().expect("first paint");

    let frame = engine
        .renderer()
        .last_frame
        .as_ref()
        .expect("painted frame");
    for (line, label) in frame.lines.iter().zip(frame.texts.iter().take(5)) {
        assert_eq!(label.x, 5.0);
        assert_eq!(label.y, line.y1 - 10.0);
    }
}
