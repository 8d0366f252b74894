//! Read a feedback CSV export into normalized rows.
//!
//! Expected header (any order, extra columns ignored):
//! bot_message,isuseful,created_at,created_by
//!
//! `created_at` is day first: `05-01-2024 10:00`.

use chrono::{NaiveDate, NaiveDateTime};
use feedlens_core::{FeedbackError, FeedbackRow, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::schema::validate_headers;
use crate::types::IngestOptions;

/// Parse `created_at` to its calendar date. Formats without a time
/// component are accepted as plain dates.
fn parse_created_date(value: &str, format: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, format)
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(value, format))
        .ok()
}

/// Read feedback rows from any CSV source.
///
/// Fails on missing required columns before any row is read, and on the
/// first `created_at` that does not parse (the whole batch is rejected).
pub fn read_feedback<R: Read>(reader: R, opts: &IngestOptions) -> Result<Vec<FeedbackRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let cols = validate_headers(&headers)?;

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let row = i + 1;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let created_at = cell(cols.created_at).trim().to_string();
        let created_date = parse_created_date(&created_at, &opts.timestamp_format).ok_or_else(
            || FeedbackError::InvalidTimestamp {
                row,
                value: created_at.clone(),
                format: opts.timestamp_format.clone(),
            },
        )?;

        rows.push(FeedbackRow {
            row,
            bot_message: cell(cols.bot_message).to_string(),
            is_useful: opts.truthy.is_truthy(cell(cols.is_useful)),
            created_at,
            created_date,
            created_by: cell(cols.created_by).trim().to_string(),
        });
    }

    debug!(rows = rows.len(), "read feedback rows");
    Ok(rows)
}

/// Open a CSV file and read its feedback rows.
pub fn read_feedback_csv(path: impl AsRef<Path>, opts: &IngestOptions) -> Result<Vec<FeedbackRow>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening feedback csv");
    let file = File::open(path)?;
    read_feedback(file, opts)
}
