//! End-to-end pass over one upload: validate → normalize → classify → aggregate.

use feedlens_core::{FeedbackRecord, FeedbackReport, Result};
use feedlens_ingest::{read_feedback, IngestOptions};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::classifier::Classifier;
use crate::vocabulary::Vocabulary;

/// Stateless analyzer: each call processes one table in full.
#[derive(Debug, Clone)]
pub struct Analyzer {
    classifier: Classifier,
    ingest: IngestOptions,
}

impl Analyzer {
    pub fn new(vocabulary: Vocabulary, ingest: IngestOptions) -> Result<Self> {
        Ok(Self {
            classifier: Classifier::new(vocabulary)?,
            ingest,
        })
    }

    /// Built-in vocabulary and default ingest options.
    pub fn builtin() -> Result<Self> {
        Self::new(Vocabulary::defect_terms(), IngestOptions::default())
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Read and classify every row, without aggregating.
    pub fn classify_reader<R: Read>(&self, reader: R) -> Result<Vec<FeedbackRecord>> {
        let rows = read_feedback(reader, &self.ingest)?;
        debug!(rows = rows.len(), "classifying rows");
        Ok(self.classifier.classify_rows(rows))
    }

    pub fn analyze_reader<R: Read>(&self, reader: R) -> Result<FeedbackReport> {
        let records = self.classify_reader(reader)?;
        let report = FeedbackReport::build(&records)?;
        info!(
            total = report.overall.total,
            useful_ratio = report.overall.useful_ratio,
            categories = report.category_counts.len(),
            "feedback report built"
        );
        Ok(report)
    }

    pub fn analyze_path(&self, path: impl AsRef<Path>) -> Result<FeedbackReport> {
        let path = path.as_ref();
        debug!(path = %path.display(), "analyzing feedback file");
        self.analyze_reader(File::open(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use feedlens_core::{Category, FeedbackError, TruthySet};

    const CSV: &str = "\
bot_message,isuseful,created_at,created_by
Density variation noted,1,05-01-2024 10:00,alice
no issues here,False,06-01-2024 11:00,bob
";

    #[test]
    fn test_scenario_rows() {
        let analyzer = Analyzer::builtin().unwrap();
        let records = analyzer.classify_reader(CSV.as_bytes()).unwrap();

        assert_eq!(records[0].category, Category::defect("Density"));
        assert!(records[0].is_useful);
        assert_eq!(records[0].created_date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());

        assert_eq!(records[1].category, Category::Other);
        assert!(!records[1].is_useful);
    }

    #[test]
    fn test_analyze_reader_report() {
        let report = Analyzer::builtin().unwrap().analyze_reader(CSV.as_bytes()).unwrap();
        assert_eq!(report.overall.total, 2);
        assert_eq!(report.overall.useful_ratio, 50.0);
        assert_eq!(report.negative_distribution.len(), 1);
        assert_eq!(report.negative_distribution[0].category, "Other");
    }

    #[test]
    fn test_missing_column_produces_no_report() {
        let csv = "bot_message,isuseful,created_at\nDensity,1,05-01-2024 10:00\n";
        let err = Analyzer::builtin().unwrap().analyze_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, FeedbackError::MissingColumns(_)));
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let csv = "bot_message,isuseful,created_at,created_by\n";
        let err = Analyzer::builtin().unwrap().analyze_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, FeedbackError::EmptyDataset));
    }

    #[test]
    fn test_custom_vocabulary_and_truthy() {
        let analyzer = Analyzer::new(
            Vocabulary::new(["no issues"]).unwrap(),
            IngestOptions {
                truthy: TruthySet::new(["False"]),
                ..IngestOptions::default()
            },
        )
        .unwrap();
        let records = analyzer.classify_reader(CSV.as_bytes()).unwrap();
        assert!(records[0].category.is_other());
        assert!(!records[0].is_useful);
        assert_eq!(records[1].category.label(), "no issues");
        assert!(records[1].is_useful);
    }
}
