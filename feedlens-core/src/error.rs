//! Error type shared by the feedlens library crates.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedbackError {
    /// One or more required columns are absent from the header row.
    #[error(
        "The uploaded file is missing required columns: 'bot_message', 'isuseful', 'created_at', or 'created_by' (missing: {})",
        .0.join(", ")
    )]
    MissingColumns(Vec<String>),

    /// `created_at` did not match the expected timestamp pattern.
    #[error("row {row}: cannot parse created_at '{value}' with format '{format}'")]
    InvalidTimestamp {
        row: usize,
        value: String,
        format: String,
    },

    /// No data rows, so ratios and report views are undefined.
    #[error("no data: the feedback table has no rows")]
    EmptyDataset,

    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FeedbackError>;
