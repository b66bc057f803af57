//! Cleaning configuration.
//!
//! Every field has a default, so a config file only needs to name what it changes:
//!
//! ```json
//! { "verbose": false, "drop_columns": ["id", "internal_ref"] }
//! ```

use crate::error::{CleanError, Result, ResultExt as _};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.+-]+@gmail\.com$";

/// Parameters for every stage of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    /// Dump full offending row sets alongside the status lines
    pub verbose: bool,

    /// Field delimiter for both input and output
    pub delimiter: char,

    pub gender_column: String,

    /// Values kept as-is by the categorical pass
    pub allowed_genders: Vec<String>,

    /// Replacement for anything outside `allowed_genders`
    pub gender_fallback: String,

    pub email_column: String,

    /// Rows whose email does not match are dropped
    pub email_pattern: String,

    /// Columns removed before outlier handling
    pub drop_columns: Vec<String>,

    /// Width of the IQR fence on each side of the quartiles
    pub iqr_multiplier: f64,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            delimiter: ',',
            gender_column: "gender".to_owned(),
            allowed_genders: ["Male", "Female", "Other", "Unknown"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            gender_fallback: "Unknown".to_owned(),
            email_column: "email".to_owned(),
            email_pattern: DEFAULT_EMAIL_PATTERN.to_owned(),
            drop_columns: vec!["id".to_owned()],
            iqr_multiplier: 1.5,
        }
    }
}

impl CleaningConfig {
    /// Load a config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CleanError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse cleaning config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize cleaning config")
    }

    pub fn validate(&self) -> Result<()> {
        self.delimiter_byte()?;

        if !self.allowed_genders.contains(&self.gender_fallback) {
            return Err(CleanError::Config(format!(
                "fallback '{}' must be one of the allowed values {:?}",
                self.gender_fallback, self.allowed_genders
            )));
        }

        if !self.iqr_multiplier.is_finite() || self.iqr_multiplier < 0.0 {
            return Err(CleanError::Config(format!(
                "iqr_multiplier must be a non-negative number, got {}",
                self.iqr_multiplier
            )));
        }

        self.email_regex()?;
        Ok(())
    }

    pub fn email_regex(&self) -> Result<Regex> {
        Regex::new(&self.email_pattern).context("email_pattern")
    }

    /// The delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                CleanError::Config(format!(
                    "delimiter must be a single ASCII character, got {:?}",
                    self.delimiter
                ))
            })
    }
}
