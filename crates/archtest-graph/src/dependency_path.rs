//! Witness paths for forbidden dependencies.
//!
//! A [`DependencyPath`] shows how a root package reaches a forbidden one:
//! `root -> intermediate -> ... -> forbidden`. Paths are found with a
//! breadth-first search over an on-demand adjacency function, so the graph is
//! only expanded as far as needed.

use std::collections::VecDeque;

use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PackageId, PackagePattern};

/// A chain of imports from a root package to a forbidden package.
///
/// Never empty and never contains the same package twice. Serialized as a
/// plain list of ids; deserialization goes through the same checks as
/// [`DependencyPath::from_packages`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<PackageId>", into = "Vec<PackageId>")]
pub struct DependencyPath {
    path: Vec<PackageId>,
}

/// Why a package sequence is not a valid [`DependencyPath`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("dependency path is empty")]
    Empty,

    #[error("dependency path visits {0} twice")]
    Repeated(PackageId),
}

impl DependencyPath {
    /// Single-element path: the root itself is forbidden.
    pub fn root_only(root: PackageId) -> Self {
        Self { path: vec![root] }
    }

    /// Build a path from its elements, root first.
    ///
    /// Returns `None` for an empty sequence or one that repeats a package.
    pub fn from_packages(path: Vec<PackageId>) -> Option<Self> {
        Self::try_from(path).ok()
    }

    /// The package the search started from.
    pub fn root(&self) -> &PackageId {
        &self.path[0]
    }

    /// The forbidden package that was reached.
    pub fn target(&self) -> &PackageId {
        &self.path[self.path.len() - 1]
    }

    /// Number of import edges in the path.
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn packages(&self) -> &[PackageId] {
        &self.path
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PackageId> {
        self.path.iter()
    }

    pub fn into_packages(self) -> Vec<PackageId> {
        self.path
    }

    /// Format the path on one line.
    ///
    /// Example: "app/a -> app/c -> app/b"
    pub fn format_chain(&self) -> String {
        self.path
            .iter()
            .map(PackageId::as_str)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl std::fmt::Display for DependencyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_chain())
    }
}

impl TryFrom<Vec<PackageId>> for DependencyPath {
    type Error = PathError;

    fn try_from(path: Vec<PackageId>) -> Result<Self, Self::Error> {
        if path.is_empty() {
            return Err(PathError::Empty);
        }
        let mut seen = FxHashSet::default();
        if let Some(repeated) = path.iter().find(|id| !seen.insert(*id)) {
            return Err(PathError::Repeated(repeated.clone()));
        }
        Ok(Self { path })
    }
}

impl From<DependencyPath> for Vec<PackageId> {
    fn from(path: DependencyPath) -> Self {
        path.path
    }
}

impl<'a> IntoIterator for &'a DependencyPath {
    type Item = &'a PackageId;
    type IntoIter = std::slice::Iter<'a, PackageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.path.iter()
    }
}

/// Find the shortest path from `root` to any package matching `forbidden`.
///
/// `get_imports` is called at most once per package. Packages already queued
/// are never queued again, which bounds the search even on cyclic data.
pub(crate) fn find_path_from<F>(
    root: &PackageId,
    forbidden: &PackagePattern,
    mut get_imports: F,
) -> Option<DependencyPath>
where
    F: FnMut(&PackageId) -> IndexSet<PackageId>,
{
    if forbidden.matches(root) {
        return Some(DependencyPath::root_only(root.clone()));
    }

    let mut parents: FxHashMap<PackageId, PackageId> = FxHashMap::default();
    let mut seen: FxHashSet<PackageId> = FxHashSet::default();
    let mut queue: VecDeque<PackageId> = VecDeque::new();

    seen.insert(root.clone());
    queue.push_back(root.clone());

    while let Some(current) = queue.pop_front() {
        for dep in get_imports(&current) {
            if !seen.insert(dep.clone()) {
                continue;
            }
            parents.insert(dep.clone(), current.clone());

            if forbidden.matches(&dep) {
                return Some(rebuild(dep, &parents));
            }
            queue.push_back(dep);
        }
    }

    None
}

/// Walk parent links back to the root and reverse.
fn rebuild(target: PackageId, parents: &FxHashMap<PackageId, PackageId>) -> DependencyPath {
    let mut path = vec![target];
    while let Some(parent) = path.last().and_then(|last| parents.get(last)) {
        path.push(parent.clone());
    }
    path.reverse();
    DependencyPath { path }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> PackageId {
        PackageId::new(name).unwrap()
    }

    fn exact(name: &str) -> PackagePattern {
        PackagePattern::Exact(id(name))
    }

    /// Adjacency function over `(from, to)` edge pairs, in declaration order.
    fn graph(edges: &[(&str, &str)]) -> impl FnMut(&PackageId) -> IndexSet<PackageId> {
        let edges: Vec<(PackageId, PackageId)> =
            edges.iter().map(|(from, to)| (id(from), id(to))).collect();
        move |module: &PackageId| {
            edges
                .iter()
                .filter(|(from, _)| from == module)
                .map(|(_, to)| to.clone())
                .collect()
        }
    }

    fn names(path: &DependencyPath) -> Vec<&str> {
        path.iter().map(PackageId::as_str).collect()
    }

    #[test]
    fn test_no_imports_no_path() {
        let path = find_path_from(&id("entry"), &exact("target"), graph(&[]));
        assert!(path.is_none());
    }

    #[test]
    fn test_root_equal_to_target_is_single_element_path() {
        let path = find_path_from(&id("entry"), &exact("entry"), graph(&[])).unwrap();
        assert_eq!(names(&path), vec!["entry"]);
        assert_eq!(path.depth(), 0);
    }

    #[test]
    fn test_transitive_path() {
        let get = graph(&[("a", "c"), ("c", "b")]);
        let path = find_path_from(&id("a"), &exact("b"), get).unwrap();
        assert_eq!(names(&path), vec!["a", "c", "b"]);
        assert_eq!(path.root().as_str(), "a");
        assert_eq!(path.target().as_str(), "b");
        assert_eq!(path.depth(), 2);
    }

    #[test]
    fn test_shortest_path_wins() {
        // a -> x -> y -> b and a -> z -> b
        let get = graph(&[("a", "x"), ("a", "z"), ("x", "y"), ("y", "b"), ("z", "b")]);
        let path = find_path_from(&id("a"), &exact("b"), get).unwrap();
        assert_eq!(names(&path), vec!["a", "z", "b"]);
    }

    #[test]
    fn test_cycles_terminate() {
        let get = graph(&[("a", "b"), ("b", "a"), ("b", "c"), ("c", "a")]);
        assert!(find_path_from(&id("a"), &exact("z"), get).is_none());
    }

    #[test]
    fn test_each_package_expanded_once() {
        let mut calls: FxHashMap<PackageId, usize> = FxHashMap::default();
        let mut inner = graph(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("d", "a")]);
        let counting = |pkg: &PackageId| {
            *calls.entry(pkg.clone()).or_default() += 1;
            inner(pkg)
        };
        assert!(find_path_from(&id("a"), &exact("zz"), counting).is_none());
        assert!(calls.values().all(|count| *count == 1));
        assert_eq!(calls.len(), 4);
    }

    #[test]
    fn test_wildcard_target_reports_matching_package() {
        let get = graph(&[("a", "infra/db")]);
        let forbidden = PackagePattern::parse("infra/...").unwrap();
        let path = find_path_from(&id("a"), &forbidden, get).unwrap();
        assert_eq!(names(&path), vec!["a", "infra/db"]);
    }

    #[test]
    fn test_from_packages_rejects_empty_and_cycles() {
        assert!(DependencyPath::from_packages(vec![]).is_none());
        assert!(DependencyPath::from_packages(vec![id("a"), id("b"), id("a")]).is_none());
        assert!(DependencyPath::from_packages(vec![id("a"), id("b")]).is_some());
    }

    #[test]
    fn test_deserialize_checks_invariants() {
        assert!(serde_json::from_str::<DependencyPath>("[]").is_err());
        assert!(serde_json::from_str::<DependencyPath>(r#"["a", "b", "a"]"#).is_err());

        let path: DependencyPath = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(path.root().as_str(), "a");
        assert_eq!(path.target().as_str(), "b");
        assert_eq!(serde_json::to_string(&path).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn test_try_from_names_the_problem() {
        assert_eq!(DependencyPath::try_from(Vec::new()), Err(PathError::Empty));
        assert_eq!(
            DependencyPath::try_from(vec![id("a"), id("b"), id("b")]),
            Err(PathError::Repeated(id("b")))
        );
    }

    #[test]
    fn test_format_chain() {
        let path = DependencyPath::from_packages(vec![id("entry"), id("utils"), id("target")])
            .unwrap();
        assert_eq!(path.format_chain(), "entry -> utils -> target");
        assert_eq!(path.to_string(), "entry -> utils -> target");
    }
}
