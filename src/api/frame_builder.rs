use smallvec::SmallVec;
use tracing::debug;

use crate::core::dataset::Column;
use crate::core::{
    Scale, compute_boundaries, first_hit, format_short_date, is_over, project_column,
    x_scale_ratio,
};
use crate::error::ChartResult;
use crate::interaction::HoverState;
use crate::render::{
    LinePrimitive, MarkerPrimitive, PolylinePrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::tooltip::{TooltipContent, TooltipItem, TooltipRequest, TooltipSink};
use super::ChartEngine;

impl<R: Renderer, T: TooltipSink> ChartEngine<R, T> {
    /// Materializes backend-agnostic primitives for one paint pass, plus the
    /// tooltip invocation the pass produced, without touching the renderer
    /// or the sink.
    ///
    /// Scales are derived from scratch on every call; a dataset with no line
    /// columns yields gridlines and date labels only, and a hover over it
    /// yields no tooltip.
    pub fn build_render_frame(&self) -> ChartResult<(RenderFrame, Option<TooltipRequest>)> {
        let config = &self.config;
        let viewport = config.dpi_viewport();
        let mut frame = RenderFrame::new(viewport);
        let hover = self.interaction.hover();

        let line_columns: SmallVec<[&Column; 4]> = self.dataset.line_columns().collect();
        let x_column = self.dataset.x_column();
        let sample_count = x_column
            .or_else(|| line_columns.first().copied())
            .map(Column::len)
            .unwrap_or(0);

        let bounds = compute_boundaries(&self.dataset);
        let scale = bounds.map(|b| Scale::derive(b, sample_count, viewport, config.padding_px));
        if scale.is_none() {
            debug!("dataset has no line samples; painting axes only");
        }

        // Value axis: fixed row count of gridlines, labels interpolated
        // top-down from y_max.
        if config.gridline_rows > 0 {
            let row_px = config.view_height() / config.gridline_rows as f64;
            let value_step =
                bounds.map(|b| (b.max - b.min) / config.gridline_rows as f64);

            for row in 1..=config.gridline_rows {
                let y = config.padding_px + row_px * row as f64;
                frame = frame.with_line(LinePrimitive::new(
                    0.0,
                    y,
                    config.dpi_width(),
                    y,
                    config.axis_stroke_width,
                    config.axis_line_color,
                ));

                if let (Some(b), Some(step)) = (bounds, value_step) {
                    let label = (b.max - step * row as f64).round() as i64;
                    frame = frame.with_text(TextPrimitive::new(
                        label.to_string(),
                        5.0,
                        y - 10.0,
                        config.label_font_size_px,
                        config.axis_label_color,
                        TextHAlign::Left,
                    ));
                }
            }
        }

        let x_ratio = scale
            .map(|s| s.x_ratio)
            .unwrap_or_else(|| x_scale_ratio(config.dpi_width(), sample_count));

        // Time axis labels plus the hover guide and tooltip payload.
        let mut tooltip_request = None;
        if let Some(x_col) = x_column {
            let label_step = ((x_col.len() as f64 / config.x_label_slots as f64).round()
                as usize)
                .max(1);

            for (i, &timestamp) in x_col.values.iter().enumerate() {
                if i % label_step != 0 {
                    continue;
                }
                let text = format_short_date(timestamp as i64);
                if text.is_empty() {
                    continue;
                }
                frame = frame.with_text(TextPrimitive::new(
                    text,
                    i as f64 * x_ratio,
                    config.dpi_height() - 10.0,
                    config.label_font_size_px,
                    config.axis_label_color,
                    TextHAlign::Left,
                ));
            }

            if let HoverState::Hovering { pixel_x, anchor } = hover {
                if !line_columns.is_empty() {
                    for (i, &timestamp) in x_col.values.iter().enumerate() {
                        let x = i as f64 * x_ratio;
                        if !is_over(pixel_x, x, x_col.len(), config.dpi_width()) {
                            continue;
                        }

                        frame = frame.with_line(LinePrimitive::new(
                            x,
                            config.padding_px / 2.0,
                            x,
                            config.dpi_height() - config.padding_px,
                            config.axis_stroke_width,
                            config.axis_line_color,
                        ));

                        let items = line_columns
                            .iter()
                            .filter_map(|col| {
                                col.values.get(i).map(|&value| TooltipItem {
                                    color: self.dataset.color_of(&col.name),
                                    name: self.dataset.label_of(&col.name).to_owned(),
                                    value,
                                })
                            })
                            .collect();
                        tooltip_request = Some(TooltipRequest {
                            anchor,
                            content: TooltipContent {
                                title: format_short_date(timestamp as i64),
                                items,
                            },
                        });

                        // First match wins; later samples never also hit.
                        break;
                    }
                }
            }
        }

        // Series paths, then one marker per series at the first hovered
        // sample.
        if let Some(scale) = scale {
            for col in &line_columns {
                let color = self.dataset.color_of(&col.name);
                let points =
                    project_column(&col.values, &scale, config.dpi_height(), config.padding_px);

                let marker = hover.pixel_x().and_then(|pixel_x| {
                    first_hit(&points, pixel_x, config.dpi_width()).map(|idx| points[idx])
                });

                frame = frame.with_polyline(PolylinePrimitive::new(
                    points,
                    config.series_stroke_width,
                    color,
                ));

                if let Some(center) = marker {
                    frame = frame.with_marker(MarkerPrimitive::new(
                        center,
                        config.marker_radius,
                        config.marker_fill_color,
                        color,
                        config.marker_stroke_width,
                    ));
                }
            }
        }

        Ok((frame, tooltip_request))
    }
}
