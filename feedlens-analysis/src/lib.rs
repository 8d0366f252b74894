//! feedlens-analysis: defect vocabulary, keyword classifier and the
//! ingest → classify → report pipeline

pub mod classifier;
pub mod pipeline;
pub mod vocabulary;

pub use classifier::Classifier;
pub use pipeline::Analyzer;
pub use vocabulary::Vocabulary;
