use std::path::PathBuf;

use archtest_graph::{PackageId, PackagePattern};
use clap::{Args, Subcommand};

use crate::cli::validation::{parse_package, parse_pattern};

/// Available archtest subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check every rule in archtest.toml
    ///
    /// Prints the import chain of each violation and exits with a non-zero
    /// status when any rule is violated.
    Check(CheckArgs),

    /// List the packages one or more patterns resolve to
    List(ListArgs),

    /// Show the direct imports of a package
    Imports(ImportsArgs),
}

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Path to archtest.toml
    ///
    /// If not provided, searches the current directory and its parents.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Go module root (directory containing go.mod)
    ///
    /// Overrides module_root from the config file.
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Follow test imports for every rule
    #[arg(short = 't', long)]
    pub include_tests: bool,

    /// Print violations as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the list command
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Package patterns, e.g. example.com/app/domain/...
    #[arg(required = true, value_name = "PATTERN", value_parser = parse_pattern)]
    pub patterns: Vec<PackagePattern>,

    /// Go module root (defaults to the nearest go.mod)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Also list external test packages
    #[arg(short = 't', long)]
    pub include_tests: bool,
}

/// Arguments for the imports command
#[derive(Args, Debug, Clone)]
pub struct ImportsArgs {
    /// Package to inspect
    #[arg(value_name = "PACKAGE", value_parser = parse_package)]
    pub package: PackageId,

    /// Go module root (defaults to the nearest go.mod)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Include imports of test files
    #[arg(short = 't', long)]
    pub include_tests: bool,
}
