use serde::{Deserialize, Serialize};

use crate::error::TagsiftError;

/// Tunable parameters for genre extraction.
///
/// All fields have sensible defaults; a partial TOML table deserializes
/// with the missing fields filled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum similarity score (0-100) for a fuzzy taxonomy match.
    /// The boundary is inclusive: a score equal to the threshold is accepted.
    pub fuzzy_threshold: u32,
    /// Shortest cleaned tag kept by the normalizer, in characters (inclusive).
    pub min_tag_length: usize,
    /// Longest cleaned tag kept by the normalizer, in characters (inclusive).
    pub max_tag_length: usize,
    /// Reserved for a weighted keyword-scoring scheme. Accepted from
    /// existing configuration files but not consulted by any strategy.
    pub keyword_threshold: f64,
    /// Reserved for weighted context scoring. Accepted but not consulted.
    pub context_weight: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 80,
            min_tag_length: 2,
            max_tag_length: 50,
            keyword_threshold: 0.6,
            context_weight: 0.3,
        }
    }
}

impl ExtractionConfig {
    /// Check the parameter ranges before an extractor is built from them.
    pub fn validate(&self) -> Result<(), TagsiftError> {
        if self.fuzzy_threshold > 100 {
            return Err(TagsiftError::Config(format!(
                "fuzzy_threshold must be 0-100, got {}",
                self.fuzzy_threshold
            )));
        }
        if self.min_tag_length > self.max_tag_length {
            return Err(TagsiftError::Config(format!(
                "min_tag_length ({}) exceeds max_tag_length ({})",
                self.min_tag_length, self.max_tag_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractionConfig::default();
        assert_eq!(config.fuzzy_threshold, 80);
        assert_eq!(config.min_tag_length, 2);
        assert_eq!(config.max_tag_length, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ExtractionConfig = toml::from_str("fuzzy_threshold = 90").unwrap();
        assert_eq!(config.fuzzy_threshold, 90);
        assert_eq!(config.min_tag_length, 2);
        assert_eq!(config.max_tag_length, 50);
    }

    #[test]
    fn test_roundtrip() {
        let config = ExtractionConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: ExtractionConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.fuzzy_threshold, config.fuzzy_threshold);
        assert_eq!(deserialized.max_tag_length, config.max_tag_length);
    }

    #[test]
    fn test_threshold_out_of_range() {
        let config = ExtractionConfig {
            fuzzy_threshold: 101,
            ..ExtractionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_length_bounds() {
        let config = ExtractionConfig {
            min_tag_length: 10,
            max_tag_length: 5,
            ..ExtractionConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
