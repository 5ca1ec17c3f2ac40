// File: crates/trend-core/src/parse.rs
// Summary: Tabular parser: deaths CSV text into a per-country Dataset.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::ParseError;
use crate::series::{CountrySeries, Dataset, Observation};

pub const PROVINCE_COLUMN: &str = "Province/State";
pub const COUNTRY_COLUMN: &str = "Country/Region";

/// Date column names follow the upstream m/d/yy layout.
const DATE_FORMAT: &str = "%m/%d/%y";
/// Leading identifying columns: Province/State, Country/Region, Lat, Long.
const META_COLUMNS: usize = 4;

/// Loose numeric coercion for count cells: blank, non-numeric, non-finite,
/// and negative values all count as zero.
pub fn coerce_count(raw: &str) -> u64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.round() as u64,
        _ => 0,
    }
}

/// Parse the full CSV text into a Dataset.
///
/// Rows carrying a province/state designation are sub-national slices of a
/// country total and are dropped. Each surviving row becomes one
/// CountrySeries with one observation per date column, in column order.
/// Row-level oddities coerce (see [`coerce_count`]); schema-level oddities
/// abort the parse.
pub fn parse_dataset(text: &str) -> Result<Dataset, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let province_idx = column_index(&headers, PROVINCE_COLUMN)?;
    let country_idx = column_index(&headers, COUNTRY_COLUMN)?;

    // Every column past the metadata block is a date. The sequence must be
    // parseable and chronological or the series invariant cannot hold.
    let mut days: Vec<(usize, NaiveDate)> = Vec::new();
    for (idx, name) in headers.iter().enumerate().skip(META_COLUMNS) {
        let date = NaiveDate::parse_from_str(name, DATE_FORMAT)
            .map_err(|_| ParseError::MalformedSchema { column: name.to_string() })?;
        if let Some(&(_, prev)) = days.last() {
            if date <= prev {
                return Err(ParseError::MalformedSchema { column: name.to_string() });
            }
        }
        days.push((idx, date));
    }
    if days.is_empty() {
        return Err(ParseError::MissingColumn("date columns"));
    }

    let mut series = Vec::new();
    let mut skipped = 0usize;
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.get(province_idx).is_some_and(|v| !v.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        let country_name = record
            .get(country_idx)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ParseError::MalformedRow { row: row + 1 })?
            .to_string();

        let observations = days
            .iter()
            .map(|&(idx, date)| Observation {
                date,
                death_total: coerce_count(record.get(idx).unwrap_or("")),
                country_name: country_name.clone(),
            })
            .collect();
        series.push(CountrySeries { country_name, observations });
    }

    debug!(
        countries = series.len(),
        province_rows = skipped,
        days = days.len(),
        "parsed deaths table"
    );
    Ok(Dataset::new(series))
}

fn column_index(
    headers: &csv::StringRecord,
    name: &'static str,
) -> Result<usize, ParseError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(ParseError::MissingColumn(name))
}
