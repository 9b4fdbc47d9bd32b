//! archtest CLI - check architecture rules against a Go module.
//!
//! Parses arguments, sets up logging, and dispatches to the selected command.

use archtest_cli::{cli, commands, error, logger, ui};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::List(list_args) => commands::list_execute(list_args),
        cli::Command::Imports(imports_args) => commands::imports_execute(imports_args),
    };

    result.map_err(error::cli_error_to_miette)
}
