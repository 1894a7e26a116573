use serde::{Deserialize, Serialize};

use crate::core::scale::Scale;

/// One projected sample in backing-surface pixel space.
///
/// Coordinates are floored to whole pixels but kept as `f64` so primitives
/// and backends share one numeric type. Values outside the viewport are
/// legal; backends clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Projects a column of samples into pixel space, one point per sample.
///
/// `x = floor(i * x_ratio)`, `y = floor(dpi_height - padding - value * y_ratio)`.
/// No interpolation or resampling: the output is index-aligned with the
/// input and identical inputs always produce identical output.
#[must_use]
pub fn project_column(
    values: &[f64],
    scale: &Scale,
    dpi_height: f64,
    padding_px: f64,
) -> Vec<PixelPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            PixelPoint::new(
                (i as f64 * scale.x_ratio).floor(),
                (dpi_height - padding_px - value * scale.y_ratio).floor(),
            )
        })
        .collect()
}
