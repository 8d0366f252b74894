//! feedlens-ingest: feedback CSV ingestion, schema validation and row normalization.

pub mod reader;
pub mod schema;
pub mod types;

pub use reader::{read_feedback, read_feedback_csv};
pub use schema::{missing_columns, validate_headers, ColumnIndex, REQUIRED_COLUMNS};
pub use types::{IngestOptions, DEFAULT_TIMESTAMP_FORMAT};
