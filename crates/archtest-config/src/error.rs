//! Error types for rules file loading and validation.

use std::path::PathBuf;

use archtest_graph::PatternError;
use thiserror::Error;

use crate::CONFIG_FILE;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no {CONFIG_FILE} found in {} or any parent directory", .0.display())]
    NotFound(PathBuf),

    #[error("config file does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("invalid config value for '{field}': {message}")]
    InvalidValue {
        field: String,
        message: String,
        hint: Option<String>,
    },

    #[error("no rules defined")]
    NoRules,

    #[error("rule '{rule}': {message}")]
    InvalidRule {
        rule: String,
        message: String,
        hint: Option<String>,
    },

    #[error("rule '{rule}': invalid package pattern '{pattern}': {source}")]
    InvalidPattern {
        rule: String,
        pattern: String,
        #[source]
        source: PatternError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Suggested fix, when one is known.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::NotFound(_) => Some("Create an archtest.toml or pass --config <PATH>"),
            Self::NoRules => Some("Add at least one [[rule]] table with packages and forbidden"),
            Self::InvalidValue { hint, .. } | Self::InvalidRule { hint, .. } => hint.as_deref(),
            Self::InvalidPattern { .. } => {
                Some("Use an exact package path or a trailing '/...' wildcard")
            }
            Self::MissingFile(_) | Self::Io(_) => None,
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        let field = err
            .path
            .last()
            .cloned()
            .unwrap_or_else(|| "configuration".to_string());
        Self::InvalidValue {
            field,
            message: err.kind.to_string(),
            hint: Some(format!("Check {CONFIG_FILE} syntax and field types")),
        }
    }
}
