//! # archtest
//!
//! Architecture tests for package import graphs: assert that a set of
//! packages never imports, directly or transitively, a forbidden package.
//!
//! ```rust,no_run
//! use archtest::{GoModule, PanicSink, package};
//!
//! #[test]
//! fn domain_does_not_touch_infrastructure() {
//!     let module = GoModule::discover(".").unwrap();
//!     let _ = package(&module, &PanicSink, ["example.com/app/domain/..."])
//!         .include_tests()
//!         .should_not_depend_on("example.com/app/infra/...");
//! }
//! ```
//!
//! A violation is reported to the [`FailureSink`] as an indented trace of
//! the import chain:
//!
//! ```text
//! Error:
//! example.com/app/domain/user
//! 	example.com/app/domain/store
//! 		example.com/app/infra/postgres
//! ```
//!
//! Package data comes from any [`PackageProvider`]. With the default `go`
//! feature, [`GoModule`] reads a Go module from disk; tests can use
//! [`provider::memory::MemoryProvider`].

pub mod check;
pub mod fluent;
pub mod sink;

pub use check::{CheckConfiguration, CheckOutcome};
pub use fluent::{Package, package};
pub use sink::{PanicSink, RecordingSink};

pub use archtest_graph::{
    DependencyPath, FailureSink, PackageId, PackageImports, PackagePattern, PackageProvider,
    PatternError, ProviderError, ProviderResult, TRACE_HEADER, provider, render_trace, report,
};

#[cfg(feature = "go")]
pub use archtest_go::{GoModule, GoModuleError};
