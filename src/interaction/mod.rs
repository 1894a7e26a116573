use serde::{Deserialize, Serialize};

/// Tooltip anchor in surface-local display units (not backing pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipAnchor {
    pub left: f64,
    pub top: f64,
}

impl TooltipAnchor {
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Transient hover state: either no pointer over the surface, or a hover
/// pixel (backing units) plus the tooltip anchor captured with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering {
        pixel_x: f64,
        anchor: TooltipAnchor,
    },
}

impl HoverState {
    #[must_use]
    pub fn is_hovering(self) -> bool {
        matches!(self, Self::Hovering { .. })
    }

    #[must_use]
    pub fn pixel_x(self) -> Option<f64> {
        match self {
            Self::Idle => None,
            Self::Hovering { pixel_x, .. } => Some(pixel_x),
        }
    }
}

/// Pointer tracking for one chart surface.
///
/// Converts host-space pointer coordinates into the backing-pixel hover
/// position and the surface-local tooltip anchor. All hover mutation funnels
/// through `on_pointer_move` / `on_pointer_leave`; the engine couples those
/// calls to frame scheduling so no hover change can miss a repaint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    surface_left: f64,
    surface_top: f64,
    dpi_factor: f64,
    hover: HoverState,
}

impl InteractionState {
    #[must_use]
    pub fn new(surface_left: f64, surface_top: f64, dpi_factor: f64) -> Self {
        Self {
            surface_left,
            surface_top,
            dpi_factor,
            hover: HoverState::Idle,
        }
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) {
        let local_x = client_x - self.surface_left;
        let local_y = client_y - self.surface_top;

        self.hover = HoverState::Hovering {
            pixel_x: local_x * self.dpi_factor,
            anchor: TooltipAnchor::new(local_x, local_y),
        };
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover = HoverState::Idle;
    }
}
