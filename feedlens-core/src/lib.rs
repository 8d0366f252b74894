//! feedlens-core: feedback record types, usefulness normalization and the
//! aggregation views behind a feedback report

pub mod error;
pub mod record;
pub mod report;
pub mod stats;
pub mod usefulness;

pub use error::{FeedbackError, Result};
pub use record::{Category, FeedbackRecord, FeedbackRow, OTHER_LABEL};
pub use report::{FeedbackReport, RecordRow};
pub use stats::{
    CategoryBreakdown, CategoryCount, DailyCount, OverallStats, UserBreakdown, UsefulnessSplit,
};
pub use usefulness::{TruthySet, DEFAULT_TRUTHY};
