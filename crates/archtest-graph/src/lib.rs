//! # archtest-graph
//!
//! Dependency-graph engine for architecture tests.
//!
//! Given a set of root packages and a forbidden package, this crate answers
//! "can any root reach the forbidden package through imports?" and, if so,
//! produces the exact import chain that proves it.
//!
//! ## Overview
//!
//! - **Pure core**: no file system access; all package data comes from a
//!   [`PackageProvider`]
//! - **Lazy graph**: the import graph is never materialized, edges are
//!   requested from the provider on demand
//! - **Deterministic**: pattern expansion and search order follow the caller's
//!   order, so repeated checks produce identical traces
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐   patterns   ┌──────────────────┐
//! │ PackageResolver  │─────────────▶│   roots (ids)    │
//! └────────┬─────────┘              └────────┬─────────┘
//!          │                                 │
//!          ▼                                 ▼
//! ┌──────────────────┐  imports()   ┌──────────────────┐
//! │ PackageProvider  │◀─────────────│   GraphSearch    │
//! │  (trait object)  │ ImportLoader │  (BFS per root)  │
//! └──────────────────┘              └────────┬─────────┘
//!                                            │ DependencyPath
//!                                            ▼
//!                                   ┌──────────────────┐
//!                                   │ report() → sink  │
//!                                   └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use archtest_graph::provider::memory::MemoryProvider;
//! use archtest_graph::{GraphSearch, PackagePattern, PackageResolver, render_trace};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MemoryProvider::builder()
//!     .package("A", ["C"])
//!     .package("C", ["B"])
//!     .build()?;
//!
//! let roots = PackageResolver::new(&provider).resolve(&[PackagePattern::parse("A")?]);
//! let forbidden = PackagePattern::parse("B")?;
//!
//! let path = GraphSearch::new(&provider, false)
//!     .find_path(&roots, &forbidden)
//!     .expect("A reaches B");
//! assert_eq!(render_trace(&path), "Error:\nA\n\tC\n\t\tB\n");
//! # Ok(())
//! # }
//! ```

pub mod dependency_path;
pub mod loader;
pub mod package_id;
pub mod provider;
pub mod report;
pub mod resolver;
pub mod search;

pub use dependency_path::{DependencyPath, PathError};
pub use loader::ImportLoader;
pub use package_id::{PackageId, PackagePattern, PatternError};
pub use provider::{PackageImports, PackageProvider, ProviderError, ProviderResult};
pub use report::{FailureSink, TRACE_HEADER, render_trace, report};
pub use resolver::PackageResolver;
pub use search::{GraphSearch, find_path};

#[cfg(test)]
mod tests;
