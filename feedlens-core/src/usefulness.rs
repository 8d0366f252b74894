//! Normalization of the `isuseful` column to a strict boolean.
//!
//! Exports mix integers, booleans and strings in this column. Instead of
//! coercing ad hoc, the accepted truthy spellings are an explicit set that
//! can be replaced from configuration. Everything outside the set is false.

use serde::{Deserialize, Serialize};

/// Default truthy tokens: integer 1 (also as a float), boolean true, and the string "True".
pub const DEFAULT_TRUTHY: &[&str] = &["1", "1.0", "true", "True", "TRUE"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TruthySet {
    tokens: Vec<String>,
}

impl TruthySet {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|t| t.into().trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Exact (case-sensitive) membership after trimming whitespace.
    pub fn is_truthy(&self, raw: &str) -> bool {
        let raw = raw.trim();
        self.tokens.iter().any(|t| t == raw)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl Default for TruthySet {
    fn default() -> Self {
        Self::new(DEFAULT_TRUTHY.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_truthy_values() {
        let set = TruthySet::default();
        assert!(set.is_truthy("1"));
        assert!(set.is_truthy("True"));
        assert!(set.is_truthy("true"));
        assert!(set.is_truthy(" 1 "));
    }

    #[test]
    fn test_everything_else_is_false() {
        let set = TruthySet::default();
        for raw in ["0", "False", "false", "", "yes", "2", "nan", "tRuE"] {
            assert!(!set.is_truthy(raw), "{raw:?} should normalize to false");
        }
    }

    #[test]
    fn test_custom_set_replaces_defaults() {
        let set = TruthySet::new(["yes", " Y "]);
        assert!(set.is_truthy("yes"));
        assert!(set.is_truthy("Y"));
        assert!(!set.is_truthy("1"));
        assert_eq!(set.tokens(), ["yes".to_string(), "Y".to_string()]);
    }
}
