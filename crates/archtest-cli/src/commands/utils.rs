//! Shared helpers for commands.

use std::path::Path;

use archtest_go::GoModule;
use tracing::debug;

use crate::error::Result;

/// Open the module at `root`, or the nearest one above the current directory.
pub(crate) fn open_module(root: Option<&Path>) -> Result<GoModule> {
    let module = match root {
        Some(root) => GoModule::open(root)?,
        None => GoModule::discover(std::env::current_dir()?)?,
    };
    debug!(module = %module.module_path(), root = %module.root().display(), "using module");
    Ok(module)
}
