use serde::{Deserialize, Serialize};

use crate::interaction::TooltipAnchor;
use crate::render::Color;

/// One tooltip row for a single line series at the hovered sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipItem {
    pub color: Color,
    pub name: String,
    pub value: f64,
}

/// Full tooltip payload: a date title plus one item per line series, in
/// dataset line-series order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub title: String,
    pub items: Vec<TooltipItem>,
}

/// A pending tooltip invocation produced by one paint pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRequest {
    pub anchor: TooltipAnchor,
    pub content: TooltipContent,
}

/// Contract for the external tooltip overlay.
///
/// The engine guarantees well-formed, index-aligned input and never inspects
/// how the sink renders it. `show` fires at most once per paint; `hide`
/// fires on pointer-leave.
pub trait TooltipSink {
    fn show(&mut self, anchor: TooltipAnchor, content: &TooltipContent);
    fn hide(&mut self);
}

/// Sink that ignores every call, for headless hosts.
#[derive(Debug, Default)]
pub struct NullTooltipSink;

impl TooltipSink for NullTooltipSink {
    fn show(&mut self, _anchor: TooltipAnchor, _content: &TooltipContent) {}

    fn hide(&mut self) {}
}

/// Sink that records calls so tests can assert on tooltip traffic.
#[derive(Debug, Default)]
pub struct RecordingTooltipSink {
    pub show_count: usize,
    pub hide_count: usize,
    pub last_show: Option<(TooltipAnchor, TooltipContent)>,
}

impl TooltipSink for RecordingTooltipSink {
    fn show(&mut self, anchor: TooltipAnchor, content: &TooltipContent) {
        self.show_count += 1;
        self.last_show = Some((anchor, content.clone()));
    }

    fn hide(&mut self) {
        self.hide_count += 1;
    }
}
