use indexmap::IndexMap;
use telechart::api::{ChartConfig, ChartEngine, RecordingTooltipSink};
use telechart::core::{Column, ColumnKind, Dataset};
use telechart::render::NullRenderer;

fn dataset() -> Dataset {
    let mut types = IndexMap::new();
    types.insert("x".to_owned(), ColumnKind::X);
    types.insert("y0".to_owned(), ColumnKind::Line);

    Dataset::new(
        vec![
            Column::new("x", vec![0.0, 86_400_000.0]),
            Column::new("y0", vec![10.0, 20.0]),
        ],
        types,
        IndexMap::new(),
        IndexMap::new(),
    )
}

fn engine() -> ChartEngine<NullRenderer, RecordingTooltipSink> {
    ChartEngine::new(
        NullRenderer::default(),
        RecordingTooltipSink::default(),
        dataset(),
        ChartConfig::default(),
    )
    .expect("engine init")
}

#[test]
fn destroy_before_init_makes_init_a_no_op() {
    let mut engine = engine();
    engine.destroy();

    engine.init().expect("init after destroy");
    assert_eq!(engine.renderer().render_count, 0);
    assert!(engine.is_destroyed());
}

#[test]
fn destroy_is_idempotent() {
    let mut engine = engine();
    engine.init().expect("first paint");

    engine.destroy();
    engine.destroy();
    assert!(engine.is_destroyed());
}

#[test]
fn destroy_cancels_the_pending_frame() {
    let mut engine = engine();
    engine.init().expect("first paint");

    engine.pointer_move(10.0, 50.0);
    assert!(engine.has_pending_frame());

    engine.destroy();
    assert!(!engine.has_pending_frame());
    assert!(!engine.on_frame().expect("frame after destroy"));
    assert_eq!(engine.renderer().render_count, 1);
}

#[test]
fn events_after_destroy_are_ignored() {
    let mut engine = engine();
    engine.init().expect("first paint");
    engine.destroy();

    engine.pointer_move(10.0, 50.0);
    engine.pointer_leave();

    assert!(!engine.has_pending_frame());
    assert!(!engine.hover_state().is_hovering());
    assert_eq!(engine.tooltip_sink().hide_count, 0);
    assert_eq!(engine.renderer().render_count, 1);
}

#[test]
fn into_parts_releases_renderer_and_sink() {
    let mut engine = engine();
    engine.init().expect("first paint");
    engine.destroy();

    let (renderer, sink) = engine.into_parts();
    assert_eq!(renderer.render_count, 1);
    assert_eq!(sink.show_count, 0);
}
