use feedlens_core::TruthySet;
use serde::{Deserialize, Serialize};

/// `created_at` pattern of the feedback export: day first, minutes precision.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// How raw cells are normalized while reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Accepted spellings of a true `isuseful` value
    pub truthy: TruthySet,
    /// chrono format string for `created_at`
    pub timestamp_format: String,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            truthy: TruthySet::default(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}
