//! Direct import lookup.
//!
//! The loader is the adjacency function of the (never materialized)
//! dependency graph: ask it for a package and it returns that package's
//! out-edges.

use indexmap::IndexSet;
use tracing::debug;

use crate::{PackageId, PackageProvider, ProviderError};

/// Returns the direct imports of a package, optionally including test code.
#[derive(Debug, Clone, Copy)]
pub struct ImportLoader<'a> {
    provider: &'a dyn PackageProvider,
    include_tests: bool,
}

impl<'a> ImportLoader<'a> {
    pub fn new(provider: &'a dyn PackageProvider, include_tests: bool) -> Self {
        Self {
            provider,
            include_tests,
        }
    }

    /// Direct imports of `id`.
    ///
    /// Regular imports always; in-package test imports when tests are
    /// included. With tests included, a `<pkg>_test` identifier that the
    /// provider does not know as a real package yields the external test
    /// imports of `<pkg>`. Any provider failure yields the empty set.
    pub fn imports(&self, id: &PackageId) -> IndexSet<PackageId> {
        match self.provider.load(id) {
            Ok(record) => {
                let mut imports: IndexSet<PackageId> = record.imports.into_iter().collect();
                if self.include_tests {
                    imports.extend(record.test_imports);
                }
                imports
            }
            Err(ProviderError::NotFound(_)) if self.include_tests => self.external_test_imports(id),
            Err(err) => {
                debug!(package = %id, error = %err, "no import data");
                IndexSet::new()
            }
        }
    }

    fn external_test_imports(&self, id: &PackageId) -> IndexSet<PackageId> {
        let Some(base) = id.external_test_base() else {
            debug!(package = %id, "package not found");
            return IndexSet::new();
        };

        match self.provider.load(&base) {
            Ok(record) => record.external_test_imports.into_iter().collect(),
            Err(err) => {
                debug!(package = %id, error = %err, "no import data");
                IndexSet::new()
            }
        }
    }
}
