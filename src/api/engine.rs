use tracing::debug;

use crate::core::Dataset;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, InteractionState};
use crate::render::Renderer;

use super::config::ChartConfig;
use super::interaction_coordinator::InteractionCoordinator;
use super::scheduler::FrameScheduler;
use super::tooltip::TooltipSink;

/// Main orchestration facade consumed by host applications.
///
/// The engine owns the dataset, the hover state, and the frame scheduler;
/// the renderer owns the surface and the tooltip sink owns the overlay. The
/// host forwards pointer events and drives `on_frame` from its
/// animation-frame callback:
///
/// - pointer events mutate hover state and coalesce into at most one
///   pending frame;
/// - `on_frame` consumes the pending request and repaints from scratch;
/// - `destroy` cancels anything pending and turns every later call into a
///   safe no-op.
pub struct ChartEngine<R: Renderer, T: TooltipSink> {
    pub(super) renderer: R,
    pub(super) tooltip: T,
    pub(super) dataset: Dataset,
    pub(super) config: ChartConfig,
    pub(super) interaction: InteractionState,
    pub(super) scheduler: FrameScheduler,
    pub(super) destroyed: bool,
}

impl<R: Renderer, T: TooltipSink> ChartEngine<R, T> {
    pub fn new(
        renderer: R,
        tooltip: T,
        dataset: Dataset,
        config: ChartConfig,
    ) -> ChartResult<Self> {
        let viewport = config.dpi_viewport();
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            renderer,
            tooltip,
            dataset,
            interaction: InteractionState::new(
                config.surface_left,
                config.surface_top,
                config.dpi_factor,
            ),
            scheduler: FrameScheduler::new(),
            destroyed: false,
            config,
        })
    }

    /// Performs the first paint. A no-op after `destroy`.
    pub fn init(&mut self) -> ChartResult<()> {
        self.render()
    }

    /// Builds and executes one paint pass immediately.
    ///
    /// Idempotent: identical dataset and hover state produce an identical
    /// frame and therefore identical surface output.
    pub fn render(&mut self) -> ChartResult<()> {
        if self.destroyed {
            return Ok(());
        }

        let (frame, tooltip_request) = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        if let Some(request) = tooltip_request {
            self.tooltip.show(request.anchor, &request.content);
        }
        Ok(())
    }

    /// Host animation-frame callback: paints once when a frame is pending.
    ///
    /// Returns `true` when a paint ran. Any number of pointer events since
    /// the previous frame collapse into this single paint, which reflects
    /// only the latest hover position.
    pub fn on_frame(&mut self) -> ChartResult<bool> {
        if self.destroyed || self.scheduler.take().is_none() {
            return Ok(false);
        }

        self.render()?;
        Ok(true)
    }

    /// Pointer moved over the surface, in host client coordinates.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) {
        InteractionCoordinator::pointer_move(self, client_x, client_y);
    }

    /// Pointer left the surface: hover resets and the tooltip hides.
    pub fn pointer_leave(&mut self) {
        InteractionCoordinator::pointer_leave(self);
    }

    /// Tears the chart down: cancels the pending frame and detaches the
    /// engine. Idempotent and safe before any `init` or hover.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }

        self.scheduler.cancel();
        self.destroyed = true;
        debug!("chart engine destroyed");
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.scheduler.has_pending()
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.interaction.hover()
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn tooltip_sink(&self) -> &T {
        &self.tooltip
    }

    /// Releases the renderer and the tooltip sink.
    #[must_use]
    pub fn into_parts(self) -> (R, T) {
        (self.renderer, self.tooltip)
    }
}
