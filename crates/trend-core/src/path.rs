// File: crates/trend-core/src/path.rs
// Summary: Polyline generation: one series projected through the scales.

use crate::scale::Scales;
use crate::series::CountrySeries;

/// Project a series into a pixel-space polyline, one vertex per observation
/// in series order, connected by straight segments only. A series with fewer
/// than two observations yields a degenerate (single-point or empty)
/// polyline rather than an error.
pub fn series_polyline(series: &CountrySeries, scales: &Scales) -> Vec<(f32, f32)> {
    series.observations.iter().map(|o| scales.project(o)).collect()
}
