//! Pattern resolution.
//!
//! Turns user-supplied [`PackagePattern`]s into an ordered, de-duplicated set
//! of concrete [`PackageId`]s. Exact patterns are taken as given; recursive
//! patterns are expanded through the provider's namespace walk.

use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::{PackageId, PackagePattern, PackageProvider};

/// Expands package patterns against a provider.
#[derive(Debug, Clone, Copy)]
pub struct PackageResolver<'a> {
    provider: &'a dyn PackageProvider,
    include_tests: bool,
}

impl<'a> PackageResolver<'a> {
    pub fn new(provider: &'a dyn PackageProvider) -> Self {
        Self {
            provider,
            include_tests: false,
        }
    }

    /// When enabled, every resolved package that has a sibling external test
    /// package is followed by that package's `_test` identifier.
    pub fn include_tests(mut self, include: bool) -> Self {
        self.include_tests = include;
        self
    }

    /// Resolve patterns in the order given.
    ///
    /// Patterns that match nothing contribute nothing. The first occurrence
    /// of a package fixes its position in the result.
    pub fn resolve<'p, I>(&self, patterns: I) -> IndexSet<PackageId>
    where
        I: IntoIterator<Item = &'p PackagePattern>,
    {
        let mut resolved = IndexSet::new();

        for pattern in patterns {
            match pattern {
                PackagePattern::Exact(id) => self.push(&mut resolved, id.clone()),
                PackagePattern::Recursive(prefix) => {
                    for id in self.expand(pattern, prefix.as_ref()) {
                        self.push(&mut resolved, id);
                    }
                }
            }
        }

        debug!(count = resolved.len(), "resolved package patterns");
        resolved
    }

    fn expand(&self, pattern: &PackagePattern, prefix: Option<&PackageId>) -> Vec<PackageId> {
        let packages = match self.provider.packages_under(prefix) {
            Ok(packages) => packages,
            Err(err) => {
                debug!(%pattern, error = %err, "namespace walk failed");
                Vec::new()
            }
        };

        let matched: Vec<PackageId> = packages
            .into_iter()
            .filter(|id| pattern.matches(id))
            .collect();

        if matched.is_empty() {
            warn!(%pattern, "pattern matched no packages");
        }
        matched
    }

    fn push(&self, resolved: &mut IndexSet<PackageId>, id: PackageId) {
        if !resolved.insert(id.clone()) || !self.include_tests {
            return;
        }
        if let Ok(record) = self.provider.load(&id) {
            if record.has_external_tests() {
                resolved.insert(id.external_test());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::memory::MemoryProvider;

    fn pattern(s: &str) -> PackagePattern {
        PackagePattern::parse(s).unwrap()
    }

    fn ids(set: &IndexSet<PackageId>) -> Vec<&str> {
        set.iter().map(PackageId::as_str).collect()
    }

    fn provider() -> MemoryProvider {
        MemoryProvider::builder()
            .package("app", ["lib"])
            .package("app/nested", Vec::<String>::new())
            .package("app/nested/deep", ["lib"])
            .package("lib", Vec::<String>::new())
            .external_test_imports("app/nested", ["testkit"])
            .build()
            .unwrap()
    }

    #[test]
    fn exact_pattern_resolves_to_itself_without_validation() {
        let provider = provider();
        let resolver = PackageResolver::new(&provider);
        let resolved = resolver.resolve(&[pattern("does/not/exist")]);
        assert_eq!(ids(&resolved), vec!["does/not/exist"]);
    }

    #[test]
    fn wildcard_includes_base_and_nested_packages() {
        let provider = provider();
        let resolved = PackageResolver::new(&provider).resolve(&[pattern("app/...")]);
        assert_eq!(ids(&resolved), vec!["app", "app/nested", "app/nested/deep"]);
    }

    #[test]
    fn wildcard_matching_nothing_is_empty() {
        let provider = provider();
        let resolved = PackageResolver::new(&provider).resolve(&[pattern("nothing/...")]);
        assert!(resolved.is_empty());
    }

    #[test]
    fn duplicates_keep_first_position() {
        let provider = provider();
        let resolved = PackageResolver::new(&provider).resolve(&[
            pattern("lib"),
            pattern("app/..."),
            pattern("app/nested"),
        ]);
        assert_eq!(
            ids(&resolved),
            vec!["lib", "app", "app/nested", "app/nested/deep"]
        );
    }

    #[test]
    fn external_test_packages_follow_their_base_when_tests_included() {
        let provider = provider();
        let patterns = [pattern("app/...")];

        let without = PackageResolver::new(&provider).resolve(&patterns);
        assert!(!without.iter().any(|id| id.as_str().ends_with("_test")));

        let with = PackageResolver::new(&provider)
            .include_tests(true)
            .resolve(&patterns);
        assert_eq!(
            ids(&with),
            vec!["app", "app/nested", "app/nested_test", "app/nested/deep"]
        );
    }

    #[test]
    fn bare_wildcard_selects_everything() {
        let provider = provider();
        let resolved = PackageResolver::new(&provider).resolve(&[pattern("...")]);
        assert_eq!(resolved.len(), 4);
    }
}
