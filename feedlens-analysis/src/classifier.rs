//! Deterministic keyword classifier: maps a bot message to the first
//! vocabulary term it mentions as a whole word, or `Other`.

use feedlens_core::{Category, FeedbackRecord, FeedbackRow, FeedbackError, Result};
use regex::{Regex, RegexBuilder};

use crate::vocabulary::Vocabulary;

#[derive(Debug, Clone)]
struct TermMatcher {
    term: String,
    pattern: Regex,
}

/// Classifier over an injected vocabulary. Patterns are compiled once at
/// construction; `classify` is a pure function of the message.
#[derive(Debug, Clone)]
pub struct Classifier {
    vocabulary: Vocabulary,
    matchers: Vec<TermMatcher>,
}

impl Classifier {
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        let matchers = vocabulary
            .terms()
            .iter()
            .map(|term| {
                // escaped: '/', '-' and friends match literally
                let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        FeedbackError::InvalidVocabulary(format!("term '{term}': {e}"))
                    })?;
                Ok(TermMatcher {
                    term: term.clone(),
                    pattern,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            vocabulary,
            matchers,
        })
    }

    /// Classifier over the built-in print-defect vocabulary.
    pub fn builtin() -> Result<Self> {
        Self::new(Vocabulary::defect_terms())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// First matching term in vocabulary order, else `Other`.
    pub fn classify(&self, message: &str) -> Category {
        if message.trim().is_empty() {
            return Category::Other;
        }
        self.matchers
            .iter()
            .find(|m| m.pattern.is_match(message))
            .map(|m| Category::defect(m.term.clone()))
            .unwrap_or(Category::Other)
    }

    pub fn classify_row(&self, row: FeedbackRow) -> FeedbackRecord {
        let category = self.classify(&row.bot_message);
        row.into_record(category)
    }

    pub fn classify_rows(&self, rows: Vec<FeedbackRow>) -> Vec<FeedbackRecord> {
        rows.into_iter().map(|r| self.classify_row(r)).collect()
    }
}
