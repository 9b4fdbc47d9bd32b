//! List command implementation.
//!
//! Prints every package the given patterns resolve to, one per line.

use archtest_graph::PackageResolver;

use crate::cli::ListArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the list command.
pub fn execute(args: ListArgs) -> Result<()> {
    let module = utils::open_module(args.root.as_deref())?;
    let packages = PackageResolver::new(&module)
        .include_tests(args.include_tests)
        .resolve(&args.patterns);

    if packages.is_empty() {
        ui::warning("No packages matched");
        return Ok(());
    }
    for package in &packages {
        println!("{package}");
    }
    Ok(())
}
