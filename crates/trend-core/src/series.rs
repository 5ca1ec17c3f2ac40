// File: crates/trend-core/src/series.rs
// Summary: Per-country time-series model: observations, series, dataset.

use chrono::NaiveDate;

/// One (date, cumulative death count) data point for one country.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    pub date: NaiveDate,
    pub death_total: u64,
    pub country_name: String,
}

/// One country's observations, ordered by ascending date.
#[derive(Clone, Debug, PartialEq)]
pub struct CountrySeries {
    pub country_name: String,
    pub observations: Vec<Observation>,
}

impl CountrySeries {
    /// Try to construct a series enforcing its invariants:
    /// non-empty, strictly increasing dates, single country throughout.
    pub fn try_new(
        country_name: impl Into<String>,
        observations: Vec<Observation>,
    ) -> Result<Self, &'static str> {
        let country_name = country_name.into();
        if observations.is_empty() {
            return Err("series has no observations");
        }
        for pair in observations.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err("dates not strictly increasing");
            }
        }
        if observations.iter().any(|o| o.country_name != country_name) {
            return Err("observation from another country");
        }
        Ok(Self { country_name, observations })
    }

    pub fn len(&self) -> usize { self.observations.len() }
    pub fn is_empty(&self) -> bool { self.observations.is_empty() }
}

/// All per-country series, one per distinct country. Built once by the
/// parser and immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub series: Vec<CountrySeries>,
}

impl Dataset {
    pub fn new(series: Vec<CountrySeries>) -> Self {
        Self { series }
    }

    /// Concatenation of every series' observations. Order within one
    /// country's run is preserved; order across countries carries no meaning.
    pub fn flattened(&self) -> Vec<&Observation> {
        self.series.iter().flat_map(|s| s.observations.iter()).collect()
    }

    pub fn find(&self, country_name: &str) -> Option<&CountrySeries> {
        self.series.iter().find(|s| s.country_name == country_name)
    }

    /// Observed [min, max] date range across all series.
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut extent: Option<(NaiveDate, NaiveDate)> = None;
        for s in &self.series {
            for o in &s.observations {
                extent = Some(match extent {
                    Some((lo, hi)) => (lo.min(o.date), hi.max(o.date)),
                    None => (o.date, o.date),
                });
            }
        }
        extent
    }

    /// Largest cumulative count anywhere in the dataset.
    pub fn max_death_total(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|s| s.observations.iter())
            .map(|o| o.death_total)
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize { self.series.len() }
    pub fn is_empty(&self) -> bool { self.series.is_empty() }
}
