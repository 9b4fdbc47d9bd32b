//! Property-based tests for the search using proptest.
//!
//! Run with: cargo test --features proptest --package archtest-graph property_tests

#![cfg(feature = "proptest")]

use proptest::prelude::*;

use crate::provider::memory::MemoryProvider;
use crate::{GraphSearch, PackageId, PackagePattern, PackageProvider, render_trace};

const NODES: usize = 12;

fn name(index: usize) -> String {
    format!("pkg/n{index}")
}

/// Random directed graphs (cycles allowed) over a fixed node set.
fn graph_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..NODES, 0..NODES), 0..=40)
}

fn build(edges: &[(usize, usize)]) -> MemoryProvider {
    let mut builder = MemoryProvider::builder();
    for node in 0..NODES {
        let targets: Vec<String> = edges
            .iter()
            .filter(|(from, _)| *from == node)
            .map(|(_, to)| name(*to))
            .collect();
        builder = builder.package(&name(node), targets);
    }
    builder.build().unwrap()
}

/// Plain reachability, used as the oracle.
fn reachable(edges: &[(usize, usize)], from: usize, to: usize) -> bool {
    let mut seen = vec![false; NODES];
    let mut stack = vec![from];
    while let Some(node) = stack.pop() {
        if node == to {
            return true;
        }
        if std::mem::replace(&mut seen[node], true) {
            continue;
        }
        stack.extend(edges.iter().filter(|(f, _)| *f == node).map(|(_, t)| *t));
    }
    false
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: a path is found iff the target is reachable.
    #[test]
    fn prop_found_iff_reachable(edges in graph_strategy(), from in 0..NODES, to in 0..NODES) {
        let provider = build(&edges);
        let root = PackageId::new(name(from)).unwrap();
        let forbidden = PackagePattern::Exact(PackageId::new(name(to)).unwrap());

        let path = GraphSearch::new(&provider, false).path_from(&root, &forbidden);
        prop_assert_eq!(path.is_some(), reachable(&edges, from, to));
    }

    /// Property: every found path starts at the root, ends at the target,
    /// follows real edges and never repeats a package.
    #[test]
    fn prop_paths_are_valid_and_acyclic(edges in graph_strategy(), from in 0..NODES, to in 0..NODES) {
        let provider = build(&edges);
        let root = PackageId::new(name(from)).unwrap();
        let target = PackageId::new(name(to)).unwrap();
        let forbidden = PackagePattern::Exact(target.clone());

        if let Some(path) = GraphSearch::new(&provider, false).path_from(&root, &forbidden) {
            prop_assert_eq!(path.root(), &root);
            prop_assert_eq!(path.target(), &target);

            let mut seen = std::collections::HashSet::new();
            for package in path.iter() {
                prop_assert!(seen.insert(package.clone()));
            }
            for pair in path.packages().windows(2) {
                let imports = provider.load(&pair[0]).unwrap().imports;
                prop_assert!(imports.contains(&pair[1]));
            }
        }
    }

    /// Property: repeated searches render identical traces.
    #[test]
    fn prop_search_is_idempotent(edges in graph_strategy(), from in 0..NODES, to in 0..NODES) {
        let provider = build(&edges);
        let root = PackageId::new(name(from)).unwrap();
        let forbidden = PackagePattern::Exact(PackageId::new(name(to)).unwrap());
        let search = GraphSearch::new(&provider, false);

        let first = search.path_from(&root, &forbidden).map(|p| render_trace(&p));
        let second = search.path_from(&root, &forbidden).map(|p| render_trace(&p));
        prop_assert_eq!(first, second);
    }
}
