use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, MarkerPrimitive, PolylinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one paint pass.
///
/// A frame is ephemeral: it is materialized, handed to the renderer, and
/// dropped. Nothing in the engine retains frames across paints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            polylines: Vec::new(),
            markers: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_polyline(mut self, polyline: PolylinePrimitive) -> Self {
        self.polylines.push(polyline);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerPrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.polylines.is_empty()
            && self.markers.is_empty()
            && self.texts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;
    use crate::core::Viewport;
    use crate::render::{Color, LinePrimitive};

    #[test]
    fn zero_sized_viewport_fails_validation() {
        let frame = RenderFrame::new(Viewport::new(0, 400));
        assert!(frame.validate().is_err());
    }

    #[test]
    fn builder_accumulates_primitives() {
        let frame = RenderFrame::new(Viewport::new(1200, 400))
            .with_line(LinePrimitive::new(
                0.0,
                104.0,
                1200.0,
                104.0,
                1.0,
                Color::rgb8(0xbb, 0xbb, 0xbb),
            ));

        assert_eq!(frame.lines.len(), 1);
        assert!(!frame.is_empty());
        assert!(frame.validate().is_ok());
    }
}
