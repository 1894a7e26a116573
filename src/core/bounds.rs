use serde::{Deserialize, Serialize};

use crate::core::dataset::Dataset;

/// Global value bounds across every line column of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Scans every sample of every line column and returns the global min/max.
///
/// Returns `None` when the dataset has no line columns or no samples; the
/// caller must guard and skip value-scale drawing for such datasets instead
/// of propagating non-numeric bounds into scale math.
#[must_use]
pub fn compute_boundaries(dataset: &Dataset) -> Option<Bounds> {
    let mut bounds: Option<Bounds> = None;

    for column in dataset.line_columns() {
        for &value in &column.values {
            bounds = Some(match bounds {
                None => Bounds::new(value, value),
                Some(b) => Bounds::new(b.min.min(value), b.max.max(value)),
            });
        }
    }

    bounds
}
