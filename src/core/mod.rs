pub mod bounds;
pub mod dataset;
pub mod hit;
pub mod projection;
pub mod scale;
pub mod time_format;

pub use bounds::{Bounds, compute_boundaries};
pub use dataset::{Column, ColumnKind, Dataset};
pub use hit::{first_hit, is_over};
pub use projection::{PixelPoint, project_column};
pub use scale::{Scale, Viewport, x_scale_ratio};
pub use time_format::format_short_date;
