mod config;
mod engine;
mod frame_builder;
mod interaction_coordinator;
mod scheduler;
mod tooltip;

pub use config::{
    ChartConfig, DPI_FACTOR, GRIDLINE_ROWS, LOGICAL_HEIGHT, LOGICAL_WIDTH, PADDING_PX,
    X_LABEL_SLOTS,
};
pub use engine::ChartEngine;
pub use scheduler::{FrameHandle, FrameScheduler};
pub use tooltip::{
    NullTooltipSink, RecordingTooltipSink, TooltipContent, TooltipItem, TooltipRequest,
    TooltipSink,
};
