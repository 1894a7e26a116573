use tracing::warn;

use crate::render::Renderer;

use super::tooltip::TooltipSink;
use super::ChartEngine;

pub(super) struct InteractionCoordinator;

impl InteractionCoordinator {
    pub(super) fn pointer_move<R: Renderer, T: TooltipSink>(
        engine: &mut ChartEngine<R, T>,
        client_x: f64,
        client_y: f64,
    ) {
        if engine.destroyed {
            return;
        }
        if !client_x.is_finite() || !client_y.is_finite() {
            warn!(client_x, client_y, "ignoring non-finite pointer position");
            return;
        }

        engine.interaction.on_pointer_move(client_x, client_y);
        engine.scheduler.request();
    }

    pub(super) fn pointer_leave<R: Renderer, T: TooltipSink>(engine: &mut ChartEngine<R, T>) {
        if engine.destroyed {
            return;
        }

        engine.interaction.on_pointer_leave();
        engine.tooltip.hide();
        engine.scheduler.request();
    }
}
