//! Miette diagnostic conversion for CLI errors.

use miette::Report;

use crate::error::CliError;
use archtest_config::ConfigError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Module(e) => miette::miette!(
            "Module error: {}\n\nHint: Run archtest inside a Go module or pass --root <DIR>",
            e
        ),
        CliError::RulesViolated { .. } => {
            miette::miette!("{}\n\nHint: The import chains above show where each rule is broken", err)
        }
        _ => miette::miette!("{}", err),
    }
}

/// Convert a rules file error to miette Report, appending its hint
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err.hint() {
        Some(hint) => miette::miette!("Configuration error: {}\n\nHint: {}", err, hint),
        None => miette::miette!("Configuration error: {}", err),
    }
}
