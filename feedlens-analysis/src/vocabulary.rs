//! Ordered defect vocabulary used for classification.

use feedlens_core::{FeedbackError, Result};
use std::collections::HashSet;

/// Flexographic print-defect terms, in match priority order.
const DEFECT_TERMS: &[&str] = &[
    "Adhesion",
    "Bleeding",
    "Blocking",
    "Bridging",
    "Colour Strength",
    "Colour variation per job",
    "Colour variations across width",
    "Comet tails",
    "Density",
    "Dirty Printing",
    "Dot gain",
    "Feathering",
    "Fill-in of Reverses and Type",
    "Foaming",
    "Ghosting",
    "Halo",
    "Ink drying too fast",
    "Ink Drying too slowly",
    "Kick-Out",
    "Longitudinal stripes",
    "Misregister",
    "Missing Print",
    "Moiré",
    "Mottling",
    "Picking",
    "Pinholes/Fisheyes",
    "Poor mileage performance",
    "Pressure - Anilox",
    "Pressure - Print",
    "Set-off",
    "Settling of Ink",
    "Shade Variation",
    "Sheet Feeding Problem",
    "Slur",
    "Smearing/Tracking",
    "Streaks",
    "Striations",
    "Trapping",
    "Wash boarding",
];

/// Immutable, ordered list of category terms. Declaration order is the
/// tie-break when a message mentions several terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Build a custom vocabulary. Terms are trimmed; empty lists, blank
    /// terms and case-insensitive duplicates are rejected.
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(|t| t.into().trim().to_string()).collect();
        if terms.is_empty() {
            return Err(FeedbackError::InvalidVocabulary("no terms".to_string()));
        }

        let mut seen = HashSet::new();
        for (i, term) in terms.iter().enumerate() {
            if term.is_empty() {
                return Err(FeedbackError::InvalidVocabulary(format!("term {} is blank", i + 1)));
            }
            if !seen.insert(term.to_lowercase()) {
                return Err(FeedbackError::InvalidVocabulary(format!("duplicate term '{term}'")));
            }
        }

        Ok(Self { terms })
    }

    /// The built-in print-defect vocabulary.
    pub fn defect_terms() -> Self {
        Self {
            terms: DEFECT_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::defect_terms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order_preserved() {
        let vocab = Vocabulary::defect_terms();
        assert_eq!(vocab.len(), DEFECT_TERMS.len());
        assert_eq!(vocab.terms()[0], "Adhesion");
        assert_eq!(vocab.terms()[8], "Density");
        assert_eq!(vocab.terms().last().unwrap(), "Wash boarding");
    }

    #[test]
    fn test_builtin_terms_are_valid() {
        // same checks as a user-supplied list
        assert!(Vocabulary::new(DEFECT_TERMS.iter().copied()).is_ok());
    }

    #[test]
    fn test_rejects_empty_blank_and_duplicates() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(
            Vocabulary::new(empty),
            Err(FeedbackError::InvalidVocabulary(_))
        ));
        assert!(Vocabulary::new(["Halo", "  "]).is_err());
        let err = Vocabulary::new(["Halo", "halo"]).unwrap_err();
        assert!(err.to_string().contains("duplicate term 'halo'"));
    }

    #[test]
    fn test_custom_terms_trimmed() {
        let vocab = Vocabulary::new([" Streaks ", "Halo"]).unwrap();
        assert_eq!(vocab.terms(), ["Streaks".to_string(), "Halo".to_string()]);
    }
}
