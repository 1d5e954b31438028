use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a simulation configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value} for '{field}': {reason}")]
    Invalid {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::Invalid {
            field,
            value,
            reason,
        }
    }

    /// Name of the offending field, if the error is a validation failure
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { field, .. } => Some(*field),
            _ => None,
        }
    }
}
