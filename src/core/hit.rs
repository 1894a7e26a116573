use crate::core::projection::PixelPoint;

/// Proximity test between the hover pixel and one sample's x coordinate.
///
/// Each of the `len` samples owns a pixel slice of `total_px_width / len`
/// centered on its x coordinate; the hover is over a sample when it falls
/// strictly inside that slice. An offset exactly on the slice boundary is
/// NOT over, so adjacent slices never both match and a forward scan settles
/// ties in favor of the earlier index.
#[must_use]
pub fn is_over(hover_px: f64, candidate_px: f64, len: usize, total_px_width: f64) -> bool {
    if len == 0 {
        return false;
    }

    let slice_width = total_px_width / len as f64;
    (candidate_px - hover_px).abs() < slice_width / 2.0
}

/// Index of the first point whose hover slice contains `hover_px`.
///
/// The scan stops at the first satisfying index: later points are never
/// compared once a match is found, so one hover yields at most one marker
/// per series.
#[must_use]
pub fn first_hit(points: &[PixelPoint], hover_px: f64, total_px_width: f64) -> Option<usize> {
    points
        .iter()
        .position(|p| is_over(hover_px, p.x, points.len(), total_px_width))
}
