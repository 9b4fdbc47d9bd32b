//! Command implementations.
//!
//! - [`check`] - evaluate the rules file
//! - [`list`] - resolve package patterns
//! - [`imports`] - show one package's imports
//!
//! Each command provides an `execute` function that takes its parsed
//! arguments and returns a Result.

pub mod check;
pub mod imports;
pub mod list;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use imports::execute as imports_execute;
pub use list::execute as list_execute;
