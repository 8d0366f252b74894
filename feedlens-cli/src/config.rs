use anyhow::{bail, Context, Result};
use feedlens_analysis::{Analyzer, Vocabulary};
use feedlens_core::TruthySet;
use feedlens_ingest::{IngestOptions, DEFAULT_TIMESTAMP_FORMAT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::OutputFormat;
use crate::state::ensure_feedlens_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub classifier: ClassifierSection,
    pub ingest: IngestSection,
    pub report: ReportSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSection {
    /// Replaces the built-in defect terms when set. Order is match priority.
    pub vocabulary: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestSection {
    /// Accepted truthy spellings of `isuseful`
    pub truthy: Vec<String>,
    pub timestamp_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    pub format: OutputFormat,
    /// Passthrough rows shown in text output
    pub limit: usize,
}

impl Default for IngestSection {
    fn default() -> Self {
        let opts = IngestOptions::default();
        Self {
            truthy: opts.truthy.tokens().to_vec(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            limit: 20,
        }
    }
}

impl Config {
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        match &self.classifier.vocabulary {
            Some(terms) => Vocabulary::new(terms.iter().cloned()).context("classifier.vocabulary"),
            None => Ok(Vocabulary::defect_terms()),
        }
    }

    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            truthy: TruthySet::new(self.ingest.truthy.iter().cloned()),
            timestamp_format: self.ingest.timestamp_format.clone(),
        }
    }

    pub fn analyzer(&self) -> Result<Analyzer> {
        Ok(Analyzer::new(self.vocabulary()?, self.ingest_options())?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_feedlens_home()?.join("config.toml"))
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

/// Load an explicit config file (must exist), or the default one (optional).
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let p = match explicit {
        Some(p) => {
            if !p.exists() {
                bail!("config not found: {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let p = config_path()?;
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("in {}", p.display()))
}

pub fn save_config(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.report.limit, 20);
        assert_eq!(cfg.ingest.timestamp_format, "%d-%m-%Y %H:%M");
        assert_eq!(cfg.vocabulary().unwrap(), Vocabulary::defect_terms());
    }

    #[test]
    fn test_partial_sections() {
        let cfg = parse_config(
            r#"
[classifier]
vocabulary = ["Streaks", "Density"]

[ingest]
truthy = ["1", "yes"]

[report]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(cfg.report.format, OutputFormat::Json);
        assert_eq!(cfg.report.limit, 20);
        assert_eq!(cfg.ingest.timestamp_format, "%d-%m-%Y %H:%M");

        let opts = cfg.ingest_options();
        assert!(opts.truthy.is_truthy("yes"));
        assert!(!opts.truthy.is_truthy("True"));

        let analyzer = cfg.analyzer().unwrap();
        assert_eq!(
            analyzer.classifier().classify("density and streaks").label(),
            "Streaks"
        );
    }

    #[test]
    fn test_duplicate_vocabulary_rejected() {
        let cfg = parse_config("[classifier]\nvocabulary = [\"Halo\", \"HALO\"]\n").unwrap();
        let err = cfg.analyzer().unwrap_err();
        assert!(format!("{err:#}").contains("duplicate term"));
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        assert_eq!(parse_config(&s).unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_format_is_error() {
        assert!(parse_config("[report]\nformat = \"xml\"\n").is_err());
    }
}
