//! # archtest-go
//!
//! [`PackageProvider`](archtest_graph::PackageProvider) for Go modules.
//!
//! [`GoModule`] reads package imports directly from the `.go` sources of a
//! module tree, without invoking the Go toolchain:
//!
//! - the module path comes from the `module` directive in `go.mod`
//! - a directory is a package when it holds at least one `.go` file
//! - `testdata`, `vendor`, nested modules, and directories starting with `.`
//!   or `_` are not part of the tree
//! - `_test.go` files feed the test imports; those declaring `package x_test`
//!   feed the external test package
//!
//! Build constraints other than `ignore` are not evaluated, so the import set
//! is the union across platforms.
//!
//! ```rust,no_run
//! use archtest_go::GoModule;
//! use archtest_graph::{GraphSearch, PackagePattern, PackageResolver};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let module = GoModule::discover(".")?;
//! let roots = PackageResolver::new(&module)
//!     .resolve(&[PackagePattern::parse("example.com/app/domain/...")?]);
//! let forbidden = PackagePattern::parse("example.com/app/infra/...")?;
//! if let Some(path) = GraphSearch::new(&module, false).find_path(&roots, &forbidden) {
//!     println!("{path}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod module;
pub mod scanner;

pub use error::{GoModuleError, Result};
pub use module::{GO_MOD, GoModule, parse_module_path};
pub use scanner::{GoSource, ScanError};
