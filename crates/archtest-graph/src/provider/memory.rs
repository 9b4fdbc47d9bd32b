//! In-memory package provider.
//!
//! Holds a fixed package universe in insertion order. Used by the test suites
//! and by callers that already have import data at hand (for example from a
//! build tool's own metadata dump).

use indexmap::IndexMap;

use super::{PackageImports, PackageProvider, ProviderError, ProviderResult};
use crate::{PackageId, PatternError};

/// Package provider backed by an ordered map.
///
/// The namespace walk order is the order in which packages were first
/// declared.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    packages: IndexMap<PackageId, PackageImports>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a builder that accepts plain strings and validates them once on
    /// [`MemoryProviderBuilder::build`].
    pub fn builder() -> MemoryProviderBuilder {
        MemoryProviderBuilder::default()
    }

    /// Insert or replace the record of one package.
    pub fn insert(&mut self, id: PackageId, imports: PackageImports) {
        self.packages.insert(id, imports);
    }

    pub fn contains(&self, id: &PackageId) -> bool {
        self.packages.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl PackageProvider for MemoryProvider {
    fn load(&self, id: &PackageId) -> ProviderResult<PackageImports> {
        self.packages
            .get(id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(id.clone()))
    }

    fn packages_under(&self, prefix: Option<&PackageId>) -> ProviderResult<Vec<PackageId>> {
        let mut found: Vec<PackageId> = self
            .packages
            .keys()
            .filter(|id| prefix.is_none_or(|prefix| id.is_within(prefix)))
            .cloned()
            .collect();

        // The prefix package itself leads the walk.
        if let Some(prefix) = prefix {
            if let Some(pos) = found.iter().position(|id| id == prefix) {
                let base = found.remove(pos);
                found.insert(0, base);
            }
        }

        Ok(found)
    }
}

#[derive(Debug, Clone, Copy)]
enum ImportKind {
    Regular,
    Test,
    ExternalTest,
}

/// String-based builder for [`MemoryProvider`].
///
/// ```rust
/// use archtest_graph::provider::memory::MemoryProvider;
///
/// let provider = MemoryProvider::builder()
///     .package("app/a", ["app/c"])
///     .package("app/c", ["app/b"])
///     .test_imports("app/a", ["testing/helpers"])
///     .build()
///     .expect("valid identifiers");
/// assert_eq!(provider.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryProviderBuilder {
    entries: Vec<(String, ImportKind, Vec<String>)>,
}

impl MemoryProviderBuilder {
    /// Declare a package with its non-test imports.
    pub fn package<I, S>(self, id: &str, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(id, ImportKind::Regular, imports)
    }

    /// Add imports declared by the package's in-package test files.
    pub fn test_imports<I, S>(self, id: &str, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(id, ImportKind::Test, imports)
    }

    /// Add imports declared by the sibling `<id>_test` package.
    pub fn external_test_imports<I, S>(self, id: &str, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(id, ImportKind::ExternalTest, imports)
    }

    fn push<I, S>(mut self, id: &str, kind: ImportKind, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let imports = imports.into_iter().map(Into::into).collect();
        self.entries.push((id.to_string(), kind, imports));
        self
    }

    pub fn build(self) -> Result<MemoryProvider, PatternError> {
        let mut packages: IndexMap<PackageId, PackageImports> = IndexMap::new();

        for (id, kind, imports) in self.entries {
            let id = PackageId::new(&id)?;
            let imports = imports
                .iter()
                .map(PackageId::new)
                .collect::<Result<Vec<_>, _>>()?;

            let record = packages.entry(id).or_default();
            match kind {
                ImportKind::Regular => record.imports.extend(imports),
                ImportKind::Test => record.test_imports.extend(imports),
                ImportKind::ExternalTest => record.external_test_imports.extend(imports),
            }
        }

        Ok(MemoryProvider { packages })
    }
}
