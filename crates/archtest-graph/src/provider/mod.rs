//! Package metadata provider abstraction.
//!
//! The core never reads the build environment directly. Everything it knows
//! about packages comes through the [`PackageProvider`] trait: "what does
//! package X import" and "which packages live under prefix P". Platform
//! integrations (the Go module reader in `archtest-go`) and test fakes
//! ([`memory::MemoryProvider`]) implement it.

pub mod memory;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::PackageId;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors a provider may report.
///
/// The core treats every one of these as "no data": a failing package
/// contributes no imports and a failing namespace walk contributes no
/// packages.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider has no package with this identifier
    #[error("package not found: {0}")]
    NotFound(PackageId),

    /// Reading package data failed
    #[error("I/O error while reading '{package}': {source}")]
    Io {
        package: String,
        #[source]
        source: std::io::Error,
    },

    /// Package data exists but could not be interpreted
    #[error("malformed package '{package}': {reason}")]
    Malformed { package: String, reason: String },
}

/// Direct imports declared by one package, split by the kind of source that
/// declares them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageImports {
    /// Imports of the package's non-test sources.
    pub imports: Vec<PackageId>,
    /// Imports of test files compiled into the package itself.
    pub test_imports: Vec<PackageId>,
    /// Imports of the externally-named test package in the same directory.
    pub external_test_imports: Vec<PackageId>,
}

impl PackageImports {
    pub fn new(imports: Vec<PackageId>) -> Self {
        Self {
            imports,
            ..Self::default()
        }
    }

    /// True if a sibling `<pkg>_test` package declares any imports.
    pub fn has_external_tests(&self) -> bool {
        !self.external_test_imports.is_empty()
    }
}

/// Source of package metadata.
///
/// # Example
///
/// ```rust
/// use archtest_graph::{PackageId, PackageImports, PackageProvider, ProviderError, ProviderResult};
///
/// #[derive(Debug)]
/// struct Flat;
///
/// impl PackageProvider for Flat {
///     fn load(&self, id: &PackageId) -> ProviderResult<PackageImports> {
///         Err(ProviderError::NotFound(id.clone()))
///     }
///
///     fn packages_under(&self, _prefix: Option<&PackageId>) -> ProviderResult<Vec<PackageId>> {
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait PackageProvider: std::fmt::Debug {
    /// Direct imports of a package.
    fn load(&self, id: &PackageId) -> ProviderResult<PackageImports>;

    /// Every package whose identifier is `prefix` or starts with `prefix/`.
    ///
    /// `prefix` itself comes first when it is a real package, followed by
    /// nested packages in the provider's walk order. `None` lists the whole
    /// namespace.
    fn packages_under(&self, prefix: Option<&PackageId>) -> ProviderResult<Vec<PackageId>>;
}

impl<P: PackageProvider + ?Sized> PackageProvider for &P {
    fn load(&self, id: &PackageId) -> ProviderResult<PackageImports> {
        (**self).load(id)
    }

    fn packages_under(&self, prefix: Option<&PackageId>) -> ProviderResult<Vec<PackageId>> {
        (**self).packages_under(prefix)
    }
}

impl<P: PackageProvider + ?Sized> PackageProvider for Arc<P> {
    fn load(&self, id: &PackageId) -> ProviderResult<PackageImports> {
        (**self).load(id)
    }

    fn packages_under(&self, prefix: Option<&PackageId>) -> ProviderResult<Vec<PackageId>> {
        (**self).packages_under(prefix)
    }
}

impl<P: PackageProvider + ?Sized> PackageProvider for Box<P> {
    fn load(&self, id: &PackageId) -> ProviderResult<PackageImports> {
        (**self).load(id)
    }

    fn packages_under(&self, prefix: Option<&PackageId>) -> ProviderResult<Vec<PackageId>> {
        (**self).packages_under(prefix)
    }
}
