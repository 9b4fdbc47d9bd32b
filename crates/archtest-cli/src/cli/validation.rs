//! Value parsers for package arguments.
//!
//! Failures go through [`CliError::InvalidPattern`] so clap's usage error
//! carries the same hint as every other pattern error.

use archtest_graph::{PackageId, PackagePattern};

use crate::error::CliError;

/// Parse an exact package id or a `prefix/...` pattern.
///
/// # Errors
///
/// Returns an error message if the pattern is empty or misuses `...`.
pub fn parse_pattern(s: &str) -> Result<PackagePattern, String> {
    PackagePattern::parse(s).map_err(|err| CliError::from(err).to_string())
}

/// Parse an exact package id. Wildcards are rejected.
pub fn parse_package(s: &str) -> Result<PackageId, String> {
    PackageId::new(s).map_err(|err| CliError::from(err).to_string())
}
