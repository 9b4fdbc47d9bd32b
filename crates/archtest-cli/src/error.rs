//! Error handling for the archtest CLI.
//!
//! `CliError` wraps the errors of the library crates and adds the CLI's own
//! failure modes. Messages carry a `Hint:` line whenever there is a concrete
//! next step for the user.

mod miette;

use archtest_config::ConfigError;
use archtest_go::GoModuleError;
use archtest_graph::PatternError;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Rules file errors (not found, invalid TOML, invalid rule)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The Go module could not be opened
    #[error("Module error: {0}")]
    Module(#[from] GoModuleError),

    /// A package argument could not be parsed; surfaced through clap's
    /// value parsers
    #[error("Invalid package pattern: {0}\n\nHint: Use an exact import path or a trailing '/...' wildcard")]
    InvalidPattern(#[from] PatternError),

    /// The package does not exist in the module
    #[error("Package not found: {0}\n\nHint: Only packages inside the module can be inspected; run 'archtest list ...' to see them")]
    PackageNotFound(String),

    /// The package exists but could not be read
    #[error("Failed to read package: {0}")]
    Provider(#[from] archtest_graph::ProviderError),

    /// One or more rules were violated
    #[error("{violations} forbidden {} found in {rules} {}", plural(.violations, "dependency", "dependencies"), plural(.rules, "rule", "rules"))]
    RulesViolated {
        /// Number of violating root packages across all rules
        violations: usize,
        /// Number of rules with at least one violation
        rules: usize,
    },

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn plural(count: &usize, one: &'static str, many: &'static str) -> &'static str {
    if *count == 1 { one } else { many }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_rules_violated_message() {
        let err = CliError::RulesViolated {
            violations: 1,
            rules: 1,
        };
        assert_eq!(err.to_string(), "1 forbidden dependency found in 1 rule");

        let err = CliError::RulesViolated {
            violations: 3,
            rules: 2,
        };
        assert_eq!(err.to_string(), "3 forbidden dependencies found in 2 rules");
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::NoRules.into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_cli_error_from_module_error() {
        let cli_err: CliError = GoModuleError::MissingGoMod(PathBuf::from("/tmp/x")).into();
        assert!(matches!(cli_err, CliError::Module(_)));
        assert!(cli_err.to_string().contains("go.mod"));
    }

    #[test]
    fn test_invalid_pattern_has_hint() {
        let cli_err: CliError = PatternError::Empty.into();
        assert!(cli_err.to_string().contains("Hint:"));
    }
}
