// File: crates/trend-core/src/axis.rs
// Summary: Tick layout and label formatting for the date and count axes.

use crate::scale::{DateScale, LogScale};

/// One tick: pixel position along its axis plus a preformatted label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f32,
    pub label: String,
}

/// Evenly spaced values from start to end inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// About `count` evenly spaced date ticks across the scale's pixel range,
/// labeled like "Mar 04".
pub fn date_ticks(scale: &DateScale, count: usize) -> Vec<Tick> {
    let (left, right) = scale.range();
    linspace(left as f64, right as f64, count.max(2))
        .into_iter()
        .map(|px| Tick {
            position: px as f32,
            label: scale.from_px(px as f32).format("%b %d").to_string(),
        })
        .collect()
}

/// Powers of ten inside the count domain, labeled with SI suffixes
/// ("1", "10", ... "1k", "10k", "1M").
pub fn count_ticks(scale: &LogScale) -> Vec<Tick> {
    let (vmin, vmax) = scale.domain();
    // nudge before rounding so exact powers of ten stay inside the domain
    let lo = (vmin.log10() - 1e-9).ceil() as i32;
    let hi = (vmax.log10() + 1e-9).floor() as i32;
    (lo..=hi)
        .map(|e| {
            let v = 10f64.powi(e);
            Tick { position: scale.to_px(v), label: format_si(v) }
        })
        .collect()
}

/// Compact SI-suffix formatting for axis labels.
pub fn format_si(v: f64) -> String {
    const SUFFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "G"), (1e6, "M"), (1e3, "k")];
    for &(scale, suffix) in &SUFFIXES {
        if v >= scale {
            let scaled = v / scale;
            return if (scaled - scaled.round()).abs() < 1e-9 {
                format!("{}{}", scaled.round() as i64, suffix)
            } else {
                format!("{scaled}{suffix}")
            };
        }
    }
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v}")
    }
}
