//! Aggregations over classified feedback records.
//!
//! Every view is computed from the full record slice; grouped views over
//! zero records are empty vectors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{FeedbackError, Result};
use crate::record::FeedbackRecord;

/// Headline metrics: total entries and the useful ratio (percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallStats {
    pub total: usize,
    pub useful: usize,
    /// 100 * useful / total, in [0, 100]
    pub useful_ratio: f64,
}

impl OverallStats {
    pub fn compute(records: &[FeedbackRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(FeedbackError::EmptyDataset);
        }
        let total = records.len();
        let useful = records.iter().filter(|r| r.is_useful).count();
        Ok(Self {
            total,
            useful,
            useful_ratio: useful as f64 / total as f64 * 100.0,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Positive vs negative totals across all records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsefulnessSplit {
    pub positive: usize,
    pub negative: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBreakdown {
    pub created_by: String,
    pub total_feedbacks: usize,
    pub positive_feedbacks: usize,
    pub negative_feedbacks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub total_count: usize,
    pub positive_count: usize,
    pub negative_count: usize,
}

fn count_by_label<'a, I>(records: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a FeedbackRecord>,
{
    let mut groups: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records {
        *groups.entry(r.category.label()).or_insert(0) += 1;
    }
    groups
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect()
}

/// Feedback count per category, ordered by label.
pub fn category_counts(records: &[FeedbackRecord]) -> Vec<CategoryCount> {
    count_by_label(records)
}

/// Category distribution of negative feedback, most frequent first.
pub fn negative_category_distribution(records: &[FeedbackRecord]) -> Vec<CategoryCount> {
    let mut counts = count_by_label(records.iter().filter(|r| r.is_negative()));
    // stable: equal counts stay in label order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Feedback count per calendar day, ascending.
pub fn daily_counts(records: &[FeedbackRecord]) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for r in records {
        *days.entry(r.created_date).or_insert(0) += 1;
    }
    days.into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

pub fn usefulness_split(records: &[FeedbackRecord]) -> UsefulnessSplit {
    let positive = records.iter().filter(|r| r.is_useful).count();
    UsefulnessSplit {
        positive,
        negative: records.len() - positive,
    }
}

/// (total, positive, negative) tallies keyed by `key`, ordered by key.
fn tally_by<'a, F>(records: &'a [FeedbackRecord], key: F) -> BTreeMap<&'a str, UsefulnessSplit>
where
    F: Fn(&'a FeedbackRecord) -> &'a str,
{
    let mut groups: BTreeMap<&str, UsefulnessSplit> = BTreeMap::new();
    for r in records {
        let entry = groups.entry(key(r)).or_default();
        if r.is_useful {
            entry.positive += 1;
        } else {
            entry.negative += 1;
        }
    }
    groups
}

pub fn user_breakdown(records: &[FeedbackRecord]) -> Vec<UserBreakdown> {
    tally_by(records, |r| r.created_by.as_str())
        .into_iter()
        .map(|(user, split)| UserBreakdown {
            created_by: user.to_string(),
            total_feedbacks: split.positive + split.negative,
            positive_feedbacks: split.positive,
            negative_feedbacks: split.negative,
        })
        .collect()
}

pub fn category_breakdown(records: &[FeedbackRecord]) -> Vec<CategoryBreakdown> {
    tally_by(records, |r| r.category.label())
        .into_iter()
        .map(|(category, split)| CategoryBreakdown {
            category: category.to_string(),
            total_count: split.positive + split.negative,
            positive_count: split.positive,
            negative_count: split.negative,
        })
        .collect()
}
