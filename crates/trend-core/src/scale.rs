// File: crates/trend-core/src/scale.rs
// Summary: Date (X) and count (Y, log10) scale transforms.

use chrono::{Datelike, NaiveDate};

use crate::series::Observation;

/// Horizontal time scale mapping a date range onto [left, right] pixels.
#[derive(Clone, Copy, Debug)]
pub struct DateScale {
    left_px: f32,
    right_px: f32,
    t0: i64,
    t1: i64,
}

impl DateScale {
    pub fn new(d0: NaiveDate, d1: NaiveDate, left_px: f32, right_px: f32) -> Self {
        let t0 = day_number(d0);
        let mut t1 = day_number(d1);
        if t1 <= t0 { t1 = t0 + 1; }
        Self { left_px, right_px, t0, t1 }
    }

    /// Queries outside the domain extrapolate linearly.
    #[inline]
    pub fn to_px(&self, d: NaiveDate) -> f32 {
        let span = (self.t1 - self.t0) as f32;
        self.left_px + ((day_number(d) - self.t0) as f32 / span) * (self.right_px - self.left_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> NaiveDate {
        let span = (self.t1 - self.t0) as f64;
        let t = self.t0 as f64
            + ((px - self.left_px) / (self.right_px - self.left_px)) as f64 * span;
        date_from_day_number(t.round() as i64)
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        (date_from_day_number(self.t0), date_from_day_number(self.t1))
    }

    pub fn range(&self) -> (f32, f32) {
        (self.left_px, self.right_px)
    }
}

fn day_number(d: NaiveDate) -> i64 {
    d.num_days_from_ce() as i64
}

fn date_from_day_number(n: i64) -> NaiveDate {
    let clamped = n.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    NaiveDate::from_num_days_from_ce_opt(clamped).unwrap_or(NaiveDate::MIN)
}

/// Vertical count scale mapping [vmin, vmax] onto [bottom, top] pixels on a
/// log10 axis, so larger counts sit higher on screen.
#[derive(Clone, Copy, Debug)]
pub struct LogScale {
    top_px: f32,
    bottom_px: f32,
    vmin: f64,
    vmax: f64,
    // cached log endpoints
    log_min: f64,
    log_max: f64,
}

impl LogScale {
    pub fn new(top_px: f32, bottom_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for the logarithm
        let eps = 1e-12;
        if vmin <= eps { vmin = eps; }
        if vmax <= vmin { vmax = vmin * 10.0; }
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { top_px, bottom_px, vmin, vmax, log_min, log_max }
    }

    /// Queries outside the domain extrapolate with log semantics; inputs at
    /// or below zero clamp to the positive floor first.
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let vv = v.max(1e-12).log10();
        let span = (self.log_max - self.log_min).max(1e-12);
        self.bottom_px - ((vv - self.log_min) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let span = (self.log_max - self.log_min).max(1e-12);
        let vv = self.log_min
            + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span;
        10f64.powf(vv)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.vmin, self.vmax)
    }
}

/// The scale pair derived from a flattened dataset and the inner plot size.
#[derive(Clone, Copy, Debug)]
pub struct Scales {
    pub x: DateScale,
    pub y: LogScale,
    pub epsilon: f64,
}

impl Scales {
    /// Build both scales over every observation: X spans the observed date
    /// range onto [0, inner_width]; Y spans [epsilon, max count] onto
    /// [inner_height, 0].
    pub fn from_points(
        points: &[&Observation],
        inner_width: f32,
        inner_height: f32,
        epsilon: f64,
    ) -> Self {
        let mut extent: Option<(NaiveDate, NaiveDate)> = None;
        let mut vmax = 0u64;
        for o in points {
            extent = Some(match extent {
                Some((lo, hi)) => (lo.min(o.date), hi.max(o.date)),
                None => (o.date, o.date),
            });
            vmax = vmax.max(o.death_total);
        }
        let (d0, d1) = extent.unwrap_or_else(|| {
            let day_zero = NaiveDate::default();
            (day_zero, day_zero)
        });
        Self {
            x: DateScale::new(d0, d1, 0.0, inner_width),
            y: LogScale::new(0.0, inner_height, epsilon, vmax as f64),
            epsilon,
        }
    }

    /// Project one observation into inner pixel space. The count is shifted
    /// by epsilon before the log map so a zero count stays finite.
    #[inline]
    pub fn project(&self, obs: &Observation) -> (f32, f32) {
        (
            self.x.to_px(obs.date),
            self.y.to_px(self.epsilon + obs.death_total as f64),
        )
    }
}
