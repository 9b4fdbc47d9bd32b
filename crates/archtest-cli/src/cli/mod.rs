//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `archtest check` - evaluate every rule in `archtest.toml`
//! - `archtest list` - print the packages a pattern resolves to
//! - `archtest imports` - print the direct imports of one package

mod commands;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, ImportsArgs, ListArgs};
pub use validation::{parse_package, parse_pattern};

/// archtest - keep package dependencies pointing the right way
#[derive(Parser, Debug)]
#[command(
    name = "archtest",
    version,
    about = "Architecture tests for Go package imports",
    long_about = "archtest checks that packages never import, directly or transitively,\n\
                  packages they are forbidden to depend on, and prints the import chain\n\
                  behind every violation."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
