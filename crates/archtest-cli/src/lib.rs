//! archtest CLI - evaluates `archtest.toml` rules against a Go module.
//!
//! # Architecture
//!
//! - [`cli`] - argument definitions (clap derive)
//! - [`commands`] - `check`, `list` and `imports`
//! - [`error`] - error types with actionable hints
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages and formatting
//!
//! # Example
//!
//! ```rust,no_run
//! use archtest_cli::cli::CheckArgs;
//! use archtest_cli::commands::check;
//!
//! let args = CheckArgs {
//!     config: None,
//!     root: None,
//!     include_tests: false,
//!     json: false,
//! };
//! if let Err(err) = check::execute(args) {
//!     eprintln!("{err}");
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
