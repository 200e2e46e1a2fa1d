//! Configuration error types
//!
//! The simulation itself never fails; only loading settings and tuning
//! files from disk can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was readable but not valid JSON for the expected shape
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed fine but is outside its usable range
    #[error("invalid value for {name}: {value} ({reason})")]
    Invalid {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl ConfigError {
    pub fn invalid(name: &'static str, value: impl Into<f64>, reason: &'static str) -> Self {
        Self::Invalid {
            name,
            value: value.into(),
            reason,
        }
    }
}
