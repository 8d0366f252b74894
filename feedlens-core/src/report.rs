//! The assembled feedback report: headline metrics, grouped views and the
//! per-record passthrough table.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{Category, FeedbackRecord};
use crate::stats::{
    self, CategoryBreakdown, CategoryCount, DailyCount, OverallStats, UserBreakdown,
    UsefulnessSplit,
};

/// One row of the "data with extracted categories" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow {
    pub created_at: String,
    pub bot_message: String,
    pub category: Category,
    pub is_useful: bool,
}

impl From<&FeedbackRecord> for RecordRow {
    fn from(r: &FeedbackRecord) -> Self {
        Self {
            created_at: r.created_at.clone(),
            bot_message: r.bot_message.clone(),
            category: r.category.clone(),
            is_useful: r.is_useful,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub overall: OverallStats,
    pub category_counts: Vec<CategoryCount>,
    pub negative_distribution: Vec<CategoryCount>,
    pub daily_counts: Vec<DailyCount>,
    pub usefulness: UsefulnessSplit,
    pub by_user: Vec<UserBreakdown>,
    pub by_category: Vec<CategoryBreakdown>,
    pub records: Vec<RecordRow>,
}

impl FeedbackReport {
    /// Build every view from the classified records.
    /// Fails with `EmptyDataset` when there are no records.
    pub fn build(records: &[FeedbackRecord]) -> Result<Self> {
        let overall = OverallStats::compute(records)?;
        Ok(Self {
            overall,
            category_counts: stats::category_counts(records),
            negative_distribution: stats::negative_category_distribution(records),
            daily_counts: stats::daily_counts(records),
            usefulness: stats::usefulness_split(records),
            by_user: stats::user_breakdown(records),
            by_category: stats::category_breakdown(records),
            records: records.iter().map(RecordRow::from).collect(),
        })
    }
}
