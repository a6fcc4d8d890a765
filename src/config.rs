//! Tunable constants of the decision engine.
//!
//! The defaults are the fixed weights and thresholds the classifier is
//! calibrated for. A TOML file may override any subset of them:
//!
//! ```toml
//! threshold = 75.0
//!
//! [weights]
//! endings = 0.25
//! ```

use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path, path::PathBuf};
use thiserror::Error;

pub const DEFAULT_MIN_LENGTH: usize = 10;
pub const DEFAULT_THRESHOLD: f64 = 70.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("threshold must be a finite percentage in [50, 100), got {0}")]
    InvalidThreshold(f64),

    #[error("weight `{name}` must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("cannot read config file `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Linear weight applied to each feature count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Weights {
    pub characters: f64,
    pub stop_words: f64,
    pub bigrams: f64,
    pub endings: f64,
}

impl Weights {
    pub const DEFAULT: Weights = Weights {
        characters: 3.0,
        stop_words: 2.0,
        bigrams: 1.0,
        endings: 0.5,
    };

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("characters", self.characters),
            ("stop_words", self.stop_words),
            ("bigrams", self.bigrams),
            ("endings", self.endings),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    /// Inputs whose trimmed length (in characters) is below this are
    /// undetermined without analysis. Zero disables the check.
    pub min_length: usize,
    /// A language wins when its share of the score is strictly above this.
    pub threshold: f64,
    pub weights: Weights,
    /// NFC-compose the input first so `e` + U+0301 counts as `é`.
    pub compose: bool,
    /// Attach raw feature counts to each result.
    pub include_details: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            threshold: DEFAULT_THRESHOLD,
            weights: Weights::DEFAULT,
            compose: false,
            include_details: true,
        }
    }
}

impl DetectorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Below 50 both languages could clear the threshold at once.
        if !self.threshold.is_finite() || !(50.0..100.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        self.weights.validate()
    }

    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: DetectorConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}
