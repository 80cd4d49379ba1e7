//! Configuration for typo augmentation.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::augment::record::TEXT_FIELD;
use crate::error::{FumbleError, Result};

/// Default chance that a word is a mutation candidate.
pub const DEFAULT_WORD_PROBABILITY: f64 = 0.15;

/// Default chance that an eligible character of a candidate word is replaced.
pub const DEFAULT_CHAR_PROBABILITY: f64 = 0.3;

/// The two probabilities that drive the typo transform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypoConfig {
    /// Chance that a word is selected for possible mutation.
    pub word_probability: f64,
    /// Chance that an eligible character within a selected word is substituted.
    pub char_probability: f64,
}

impl Default for TypoConfig {
    fn default() -> Self {
        TypoConfig {
            word_probability: DEFAULT_WORD_PROBABILITY,
            char_probability: DEFAULT_CHAR_PROBABILITY,
        }
    }
}

impl TypoConfig {
    /// Create a validated config.
    pub fn new(word_probability: f64, char_probability: f64) -> Result<Self> {
        let config = TypoConfig {
            word_probability,
            char_probability,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that both probabilities are finite and within `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_probability("word_probability", self.word_probability)?;
        check_probability("char_probability", self.char_probability)
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(FumbleError::invalid_config(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}

/// Full augmentation settings, as read from a JSON config file.
///
/// ```json
/// {"typo": {"word_probability": 0.2, "char_probability": 0.5}, "seed": 42}
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    pub typo: TypoConfig,
    /// Seed for the process-wide generator stream.
    pub seed: u64,
    /// Record field holding the sentence.
    pub field: String,
    /// Lower-case text before injecting typos.
    pub lowercase: bool,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        AugmentConfig {
            typo: TypoConfig::default(),
            seed: 0,
            field: TEXT_FIELD.to_string(),
            lowercase: false,
        }
    }
}

impl AugmentConfig {
    /// Load and validate a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: AugmentConfig = serde_json::from_str(&content)?;
        config.typo.validate()?;
        Ok(config)
    }
}
