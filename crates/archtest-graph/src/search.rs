//! Forbidden-dependency search over the lazily expanded import graph.

use tracing::debug;

use crate::dependency_path::find_path_from;
use crate::{DependencyPath, ImportLoader, PackageId, PackagePattern, PackageProvider};

/// Searches the import graph of a set of roots for a forbidden package.
///
/// Every root is searched on its own with a fresh visited set, so the
/// witness for one root never depends on what an earlier root explored.
#[derive(Debug, Clone, Copy)]
pub struct GraphSearch<'a> {
    loader: ImportLoader<'a>,
}

impl<'a> GraphSearch<'a> {
    pub fn new(provider: &'a dyn PackageProvider, include_tests: bool) -> Self {
        Self {
            loader: ImportLoader::new(provider, include_tests),
        }
    }

    /// Witness path for the first root, in the order given, that reaches
    /// `forbidden`. Later roots are not searched once one path is found.
    pub fn find_path<'r, I>(&self, roots: I, forbidden: &PackagePattern) -> Option<DependencyPath>
    where
        I: IntoIterator<Item = &'r PackageId>,
    {
        roots
            .into_iter()
            .find_map(|root| self.path_from(root, forbidden))
    }

    /// One witness path per root that reaches `forbidden`, in root order.
    pub fn violations<'r, I>(&self, roots: I, forbidden: &PackagePattern) -> Vec<DependencyPath>
    where
        I: IntoIterator<Item = &'r PackageId>,
    {
        roots
            .into_iter()
            .filter_map(|root| self.path_from(root, forbidden))
            .collect()
    }

    /// Witness path from a single root.
    pub fn path_from(&self, root: &PackageId, forbidden: &PackagePattern) -> Option<DependencyPath> {
        let loader = self.loader;
        let path = find_path_from(root, forbidden, |pkg| loader.imports(pkg));

        match &path {
            Some(found) => debug!(%root, %forbidden, chain = %found, "forbidden dependency reachable"),
            None => debug!(%root, %forbidden, "no path"),
        }
        path
    }
}

/// Convenience wrapper around [`GraphSearch::find_path`].
pub fn find_path<'r, I>(
    provider: &dyn PackageProvider,
    roots: I,
    forbidden: &PackagePattern,
    include_tests: bool,
) -> Option<DependencyPath>
where
    I: IntoIterator<Item = &'r PackageId>,
{
    GraphSearch::new(provider, include_tests).find_path(roots, forbidden)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::memory::MemoryProvider;

    fn id(s: &str) -> PackageId {
        PackageId::new(s).unwrap()
    }

    fn exact(s: &str) -> PackagePattern {
        PackagePattern::Exact(id(s))
    }

    fn names(path: &DependencyPath) -> Vec<&str> {
        path.iter().map(PackageId::as_str).collect()
    }

    #[test]
    fn first_violating_root_in_caller_order_wins() {
        let provider = MemoryProvider::builder()
            .package("clean", ["lib"])
            .package("dirty", ["bad"])
            .package("dirtier", ["mid"])
            .package("mid", ["bad"])
            .build()
            .unwrap();
        let search = GraphSearch::new(&provider, false);

        let roots = [id("clean"), id("dirtier"), id("dirty")];
        let path = search.find_path(&roots, &exact("bad")).unwrap();
        assert_eq!(names(&path), vec!["dirtier", "mid", "bad"]);

        let all = search.violations(&roots, &exact("bad"));
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].root().as_str(), "dirty");
    }

    #[test]
    fn roots_are_searched_independently() {
        // Both roots share "shared"; the second root must still find its own path.
        let provider = MemoryProvider::builder()
            .package("one", ["shared"])
            .package("two", ["shared"])
            .package("shared", ["bad"])
            .build()
            .unwrap();
        let search = GraphSearch::new(&provider, false);
        let all = search.violations(&[id("one"), id("two")], &exact("bad"));
        assert_eq!(names(&all[0]), vec!["one", "shared", "bad"]);
        assert_eq!(names(&all[1]), vec!["two", "shared", "bad"]);
    }

    #[test]
    fn test_only_edges_need_include_tests() {
        let provider = MemoryProvider::builder()
            .package("app", Vec::<String>::new())
            .test_imports("app", ["mock"])
            .build()
            .unwrap();

        assert!(find_path(&provider, &[id("app")], &exact("mock"), false).is_none());
        let path = find_path(&provider, &[id("app")], &exact("mock"), true).unwrap();
        assert_eq!(names(&path), vec!["app", "mock"]);
    }

    #[test]
    fn no_roots_no_path() {
        let provider = MemoryProvider::new();
        let roots: [PackageId; 0] = [];
        assert!(find_path(&provider, &roots, &exact("bad"), true).is_none());
    }
}
