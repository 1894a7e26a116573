//! Telechart: a small time-series line chart engine.
//!
//! The crate renders multi-series line charts into a backend-agnostic
//! [`render::RenderFrame`] of primitives, handles pointer hover with
//! nearest-sample hit testing, and coalesces repaints so any burst of input
//! events costs at most one paint per host frame.
//!
//! Datasets arrive as columns: exactly one time column plus any number of
//! line columns, either built programmatically with [`core::Dataset::new`]
//! or parsed from the JSON wire format with [`core::Dataset::from_json_str`].
//! A [`render::Renderer`] implementation turns frames into pixels; the
//! bundled [`render::NullRenderer`] only counts primitives, which is what the
//! test suites use. The optional `cairo-backend` feature adds a raster
//! backend on cairo and pango.
//!
//! ```no_run
//! use telechart::{ChartConfig, ChartEngine};
//! use telechart::api::NullTooltipSink;
//! use telechart::core::Dataset;
//! use telechart::render::NullRenderer;
//!
//! # fn main() -> telechart::ChartResult<()> {
//! # let payload = r#"{"columns":[["x",0],["y0",1]],"types":{"x":"x","y0":"line"},"colors":{},"names":{}}"#;
//! let dataset = Dataset::from_json_str(payload)?;
//! let mut chart = ChartEngine::new(
//!     NullRenderer::default(),
//!     NullTooltipSink,
//!     dataset,
//!     ChartConfig::default(),
//! )?;
//! chart.init()?;
//!
//! chart.pointer_move(150.0, 80.0);
//! chart.on_frame()?;
//! chart.destroy();
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine};
pub use error::{ChartError, ChartResult};
