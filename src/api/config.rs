use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::render::Color;

/// Logical surface width in display units.
pub const LOGICAL_WIDTH: u32 = 600;
/// Logical surface height in display units.
pub const LOGICAL_HEIGHT: u32 = 200;
/// Backing-pixel multiplier for sharpness on scaled displays.
pub const DPI_FACTOR: f64 = 2.0;
/// Vertical padding in backing pixels, reserved top and bottom for labels.
pub const PADDING_PX: f64 = 40.0;
/// Horizontal gridline rows on the value axis.
pub const GRIDLINE_ROWS: usize = 5;
/// Date label slots along the x axis.
pub const X_LABEL_SLOTS: usize = 6;

/// Fixed chart layout and style.
///
/// Defaults carry the engine's canonical constants; `with_*` builders exist
/// for hosts whose surface differs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub logical_width: u32,
    pub logical_height: u32,
    pub dpi_factor: f64,
    pub padding_px: f64,
    pub gridline_rows: usize,
    pub x_label_slots: usize,
    pub series_stroke_width: f64,
    pub axis_stroke_width: f64,
    pub marker_radius: f64,
    pub marker_stroke_width: f64,
    pub label_font_size_px: f64,
    pub axis_line_color: Color,
    pub axis_label_color: Color,
    pub marker_fill_color: Color,
    /// Surface origin in host client coordinates, used to localize pointer
    /// events.
    pub surface_left: f64,
    pub surface_top: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            logical_width: LOGICAL_WIDTH,
            logical_height: LOGICAL_HEIGHT,
            dpi_factor: DPI_FACTOR,
            padding_px: PADDING_PX,
            gridline_rows: GRIDLINE_ROWS,
            x_label_slots: X_LABEL_SLOTS,
            series_stroke_width: 4.0,
            axis_stroke_width: 1.0,
            marker_radius: 8.0,
            marker_stroke_width: 2.0,
            label_font_size_px: 20.0,
            axis_line_color: Color::rgb8(0xbb, 0xbb, 0xbb),
            axis_label_color: Color::rgb8(0x96, 0xa2, 0xaa),
            marker_fill_color: Color::rgb(1.0, 1.0, 1.0),
            surface_left: 0.0,
            surface_top: 0.0,
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_logical_size(mut self, width: u32, height: u32) -> Self {
        self.logical_width = width;
        self.logical_height = height;
        self
    }

    #[must_use]
    pub fn with_surface_origin(mut self, left: f64, top: f64) -> Self {
        self.surface_left = left;
        self.surface_top = top;
        self
    }

    #[must_use]
    pub fn with_dpi_factor(mut self, dpi_factor: f64) -> Self {
        self.dpi_factor = dpi_factor;
        self
    }

    /// Backing-surface size in device pixels.
    #[must_use]
    pub fn dpi_viewport(&self) -> Viewport {
        Viewport::new(
            (f64::from(self.logical_width) * self.dpi_factor) as u32,
            (f64::from(self.logical_height) * self.dpi_factor) as u32,
        )
    }

    #[must_use]
    pub fn dpi_width(&self) -> f64 {
        f64::from(self.dpi_viewport().width)
    }

    #[must_use]
    pub fn dpi_height(&self) -> f64 {
        f64::from(self.dpi_viewport().height)
    }

    /// Plot height between the padded label bands.
    #[must_use]
    pub fn view_height(&self) -> f64 {
        (self.dpi_height() - self.padding_px * 2.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ChartConfig;
    use crate::core::Viewport;

    #[test]
    fn default_backing_surface_is_doubled() {
        let config = ChartConfig::default();
        assert_eq!(config.dpi_viewport(), Viewport::new(1200, 400));
        assert_eq!(config.view_height(), 320.0);
    }

    #[test]
    fn builders_override_layout() {
        let config = ChartConfig::default()
            .with_logical_size(300, 100)
            .with_dpi_factor(1.0)
            .with_surface_origin(12.0, 34.0);

        assert_eq!(config.dpi_viewport(), Viewport::new(300, 100));
        assert_eq!(config.surface_left, 12.0);
        assert_eq!(config.surface_top, 34.0);
    }
}
