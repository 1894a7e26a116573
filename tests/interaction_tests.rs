use indexmap::IndexMap;
use telechart::api::{ChartConfig, ChartEngine, RecordingTooltipSink};
use telechart::core::{Column, ColumnKind, Dataset};
use telechart::render::NullRenderer;

fn two_series_dataset() -> Dataset {
    let mut types = IndexMap::new();
    types.insert("x".to_owned(), ColumnKind::X);
    types.insert("y0".to_owned(), ColumnKind::Line);
    types.insert("y1".to_owned(), ColumnKind::Line);

    let mut names = IndexMap::new();
    names.insert("y0".to_owned(), "Joined".to_owned());

    Dataset::new(
        vec![
            Column::new("x", vec![0.0, 86_400_000.0]),
            Column::new("y0", vec![10.0, 20.0]),
            Column::new("y1", vec![0.0, 5.0]),
        ],
        types,
        IndexMap::new(),
        names,
    )
}

fn hoverable_engine() -> ChartEngine<NullRenderer, RecordingTooltipSink> {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        RecordingTooltipSink::default(),
        two_series_dataset(),
        ChartConfig::default(),
    )
    .expect("engine init");
    engine.init().expect("first paint");
    engine
}

#[test]
fn pointer_move_schedules_without_painting() {
    let mut engine = hoverable_engine();

    engine.pointer_move(10.0, 50.0);
    assert!(engine.has_pending_frame());
    assert_eq!(engine.renderer().render_count, 1);
}

#[test]
fn hover_paint_adds_guide_and_one_marker_per_series() {
    let mut engine = hoverable_engine();

    // client x 10 maps to backing pixel 20, inside sample 0's slice
    engine.pointer_move(10.0, 50.0);
    assert!(engine.on_frame().expect("hover paint"));

    let renderer = engine.renderer();
    assert_eq!(renderer.render_count, 2);
    // 5 gridlines plus the vertical hover guide
    assert_eq!(renderer.last_line_count, 6);
    assert_eq!(renderer.last_marker_count, 2);

    let frame = renderer.last_frame.as_ref().expect("painted frame");
    let guide = &frame.lines[5];
    assert_eq!(guide.x1, 0.0);
    assert_eq!(guide.x2, 0.0);
    assert_eq!(guide.y1, 20.0);
    assert_eq!(guide.y2, 360.0);

    // bounds (0, 20): y0=10 lands mid-view, y1=0 on the bottom padding line
    let centers: Vec<(f64, f64)> = frame
        .markers
        .iter()
        .map(|m| (m.center.x, m.center.y))
        .collect();
    assert_eq!(centers, vec![(0.0, 200.0), (0.0, 360.0)]);
}

#[test]
fn tooltip_reports_title_and_items_in_series_order() {
    let mut engine = hoverable_engine();

    engine.pointer_move(10.0, 50.0);
    engine.on_frame().expect("hover paint");

    let sink = engine.tooltip_sink();
    assert_eq!(sink.show_count, 1);
    let (anchor, content) = sink.last_show.as_ref().expect("tooltip shown");

    assert_eq!(anchor.left, 10.0);
    assert_eq!(anchor.top, 50.0);
    assert_eq!(content.title, "Jan 1");

    let items: Vec<(&str, f64)> = content
        .items
        .iter()
        .map(|item| (item.name.as_str(), item.value))
        .collect();
    assert_eq!(items, vec![("Joined", 10.0), ("y1", 0.0)]);
}

#[test]
fn burst_of_moves_coalesces_into_one_paint_with_the_latest_hover() {
    let mut engine = hoverable_engine();

    engine.pointer_move(10.0, 50.0);
    engine.pointer_move(590.0, 50.0);
    assert!(engine.has_pending_frame());

    assert!(engine.on_frame().expect("hover paint"));
    assert_eq!(engine.renderer().render_count, 2);
    assert!(!engine.on_frame().expect("no second frame pending"));
    assert_eq!(engine.renderer().render_count, 2);

    // backing pixel 1180 is inside sample 1's slice, so the paint reflects
    // the later move only
    let (_, content) = engine
        .tooltip_sink()
        .last_show
        .as_ref()
        .expect("tooltip shown");
    assert_eq!(engine.tooltip_sink().show_count, 1);
    assert_eq!(content.title, "Jan 2");
    assert_eq!(content.items[0].value, 20.0);
}

#[test]
fn hover_between_slices_paints_no_guide_and_no_tooltip() {
    let mut engine = hoverable_engine();

    // backing pixel 600 sits exactly between the two sample slices
    engine.pointer_move(300.0, 50.0);
    engine.on_frame().expect("hover paint");

    let renderer = engine.renderer();
    assert_eq!(renderer.last_line_count, 5);
    assert_eq!(renderer.last_marker_count, 0);
    assert_eq!(engine.tooltip_sink().show_count, 0);
}

#[test]
fn hover_over_a_dataset_without_line_columns_never_shows_a_tooltip() {
    let mut types = IndexMap::new();
    types.insert("x".to_owned(), ColumnKind::X);
    let dataset = Dataset::new(
        vec![Column::new("x", vec![0.0, 86_400_000.0])],
        types,
        IndexMap::new(),
        IndexMap::new(),
    );

    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        RecordingTooltipSink::default(),
        dataset,
        ChartConfig::default(),
    )
    .expect("engine init");
    engine.init().expect("first paint");

    // pixel 20 sits inside sample 0's slice, but there is nothing to hit
    engine.pointer_move(10.0, 50.0);
    assert!(engine.on_frame().expect("hover paint"));

    let renderer = engine.renderer();
    assert_eq!(renderer.last_line_count, 5);
    assert_eq!(renderer.last_marker_count, 0);
    assert_eq!(renderer.last_polyline_count, 0);
    assert_eq!(engine.tooltip_sink().show_count, 0);
}

#[test]
fn pointer_leave_hides_tooltip_and_repaints_without_hover() {
    let mut engine = hoverable_engine();

    engine.pointer_move(10.0, 50.0);
    engine.on_frame().expect("hover paint");

    engine.pointer_leave();
    assert_eq!(engine.tooltip_sink().hide_count, 1);
    assert!(engine.has_pending_frame());

    assert!(engine.on_frame().expect("leave paint"));
    let renderer = engine.renderer();
    assert_eq!(renderer.last_line_count, 5);
    assert_eq!(renderer.last_marker_count, 0);
    assert!(!engine.hover_state().is_hovering());
}

#[test]
fn non_finite_pointer_positions_are_ignored() {
    let mut engine = hoverable_engine();

    engine.pointer_move(f64::NAN, 50.0);
    engine.pointer_move(10.0, f64::INFINITY);

    assert!(!engine.has_pending_frame());
    assert!(!engine.hover_state().is_hovering());
}

#[test]
fn surface_origin_localizes_pointer_coordinates() {
    let config = ChartConfig::default().with_surface_origin(100.0, 40.0);
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        RecordingTooltipSink::default(),
        two_series_dataset(),
        config,
    )
    .expect("engine init");
    engine.init().expect("first paint");

    // client (110, 90) is surface-local (10, 50)
    engine.pointer_move(110.0, 90.0);
    engine.on_frame().expect("hover paint");

    let (anchor, content) = engine
        .tooltip_sink()
        .last_show
        .as_ref()
        .expect("tooltip shown");
    assert_eq!(anchor.left, 10.0);
    assert_eq!(anchor.top, 50.0);
    assert_eq!(content.title, "Jan 1");
}
