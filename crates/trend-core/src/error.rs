// File: crates/trend-core/src/error.rs
// Summary: Parse-error taxonomy for the deaths table.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// A required identifying column is absent from the header row.
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A date column name that does not fit the m/d/yy chronological
    /// sequence. Schema-level, fatal to the whole parse.
    #[error("date column '{column}' does not fit the m/d/yy sequence")]
    MalformedSchema { column: String },

    /// A data row with no Country/Region value. Row numbers are 1-based and
    /// exclude the header.
    #[error("row {row}: missing Country/Region")]
    MalformedRow { row: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
