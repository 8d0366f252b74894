//! Feedback record types: one normalized row of the uploaded table,
//! before and after classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used when no vocabulary term matches a message.
pub const OTHER_LABEL: &str = "Other";

/// Defect category assigned to a single feedback record.
///
/// Serializes as its label, so `Defect("Density")` and `Other` appear in
/// JSON as `"Density"` and `"Other"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Category {
    /// A vocabulary term, stored verbatim (original casing).
    Defect(String),
    Other,
}

impl Category {
    pub fn defect(term: impl Into<String>) -> Self {
        Category::Defect(term.into())
    }

    /// Display label: the vocabulary term, or `"Other"`.
    pub fn label(&self) -> &str {
        match self {
            Category::Defect(term) => term,
            Category::Other => OTHER_LABEL,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Defect(term) => term,
            Category::Other => OTHER_LABEL.to_string(),
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        if label == OTHER_LABEL {
            Category::Other
        } else {
            Category::Defect(label)
        }
    }
}

/// A normalized input row (usefulness and date already derived).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRow {
    /// 1-based data row number in the source file (header excluded)
    pub row: usize,
    /// Free-text bot message; empty when the cell was missing
    pub bot_message: String,
    /// Strict usefulness flag
    pub is_useful: bool,
    /// Raw timestamp text as uploaded (DD-MM-YYYY HH:MM)
    pub created_at: String,
    /// Calendar date of `created_at`
    pub created_date: NaiveDate,
    /// Author / user identifier
    pub created_by: String,
}

impl FeedbackRow {
    /// Attach a category, producing the final record.
    pub fn into_record(self, category: Category) -> FeedbackRecord {
        FeedbackRecord {
            row: self.row,
            bot_message: self.bot_message,
            is_useful: self.is_useful,
            created_at: self.created_at,
            created_date: self.created_date,
            created_by: self.created_by,
            category,
        }
    }
}

/// A classified feedback record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub row: usize,
    pub bot_message: String,
    pub is_useful: bool,
    pub created_at: String,
    pub created_date: NaiveDate,
    pub created_by: String,
    /// Exactly one category per record
    pub category: Category,
}

impl FeedbackRecord {
    pub fn is_negative(&self) -> bool {
        !self.is_useful
    }
}
