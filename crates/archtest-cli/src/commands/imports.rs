//! Imports command implementation.
//!
//! Prints the direct imports of one package, one per line.

use archtest_graph::{ImportLoader, PackageProvider, ProviderError};

use crate::cli::ImportsArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};

/// Execute the imports command.
///
/// # Errors
///
/// Returns [`CliError::PackageNotFound`] if the package is not part of the
/// module.
pub fn execute(args: ImportsArgs) -> Result<()> {
    let module = utils::open_module(args.root.as_deref())?;

    // The loader hides read failures; surface them here instead.
    if let Err(err) = module.load(&args.package) {
        let synthetic_test = args.include_tests
            && args
                .package
                .external_test_base()
                .is_some_and(|base| module.load(&base).is_ok());
        if !synthetic_test {
            return Err(match err {
                ProviderError::NotFound(id) => CliError::PackageNotFound(id.to_string()),
                other => other.into(),
            });
        }
    }

    let imports = ImportLoader::new(&module, args.include_tests).imports(&args.package);
    for import in &imports {
        println!("{import}");
    }
    Ok(())
}
