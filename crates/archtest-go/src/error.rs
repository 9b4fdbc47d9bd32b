//! Errors raised while opening a Go module.
//!
//! Failures while reading a single package are reported as
//! [`archtest_graph::ProviderError`] instead, so the search can skip them.

use std::path::PathBuf;

use archtest_graph::PatternError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GoModuleError>;

#[derive(Debug, Error)]
pub enum GoModuleError {
    #[error("no go.mod found in {}", .0.display())]
    MissingGoMod(PathBuf),

    #[error("go.mod has no module directive: {}", .0.display())]
    MissingModuleDirective(PathBuf),

    #[error("invalid module path '{path}': {source}")]
    InvalidModulePath {
        path: String,
        #[source]
        source: PatternError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
