use serde::{Deserialize, Serialize};

use crate::core::bounds::Bounds;

/// Backing-surface size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Per-paint scale snapshot.
///
/// Derived freshly from the dataset on every paint and never stored across
/// paints, so a stale ratio can never leak into a later frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub y_min: f64,
    pub y_max: f64,
    pub x_ratio: f64,
    pub y_ratio: f64,
}

impl Scale {
    /// Derives both axis ratios from the value bounds and the sample count.
    ///
    /// `padding_px` is reserved at the top and bottom of the viewport for
    /// axis labels; the y ratio maps the value span onto the remaining view
    /// height. Degenerate inputs (flat series, fewer than two samples) clamp
    /// their denominators instead of dividing by zero.
    #[must_use]
    pub fn derive(bounds: Bounds, sample_count: usize, viewport: Viewport, padding_px: f64) -> Self {
        let view_height = (f64::from(viewport.height) - padding_px * 2.0).max(0.0);
        let span = (bounds.max - bounds.min).max(1e-12);

        Self {
            y_min: bounds.min,
            y_max: bounds.max,
            x_ratio: x_scale_ratio(f64::from(viewport.width), sample_count),
            y_ratio: view_height / span,
        }
    }
}

/// Pixels per sample interval: `view_width / (sample_count - 1)`.
///
/// A single-sample series has no interval; the denominator clamps to one so
/// the caller still gets a finite ratio and a degenerate but paintable frame.
#[must_use]
pub fn x_scale_ratio(view_width: f64, sample_count: usize) -> f64 {
    let intervals = sample_count.saturating_sub(1).max(1);
    view_width / intervals as f64
}
