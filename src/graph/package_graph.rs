//! Package graph storage.
//!
//! Holds the parsed adjacency description as a mapping from package name to
//! its declared dependency list, plus a petgraph projection used for
//! whole-graph cycle analysis.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// A directed graph of packages and their direct dependencies.
///
/// Dependency lists keep their declared order and are not deduplicated.
/// Packages that only ever appear as dependencies are implicit leaves:
/// [`PackageGraph::dependencies`] returns an empty slice for them, but
/// [`PackageGraph::contains`] is false because they were never declared.
///
/// The graph is never mutated by traversal, so a parsed graph can be shared
/// read-only between independent traversals.
///
/// # Example
///
/// ```rust
/// use deptrace::graph::PackageGraph;
///
/// let mut graph = PackageGraph::new();
/// graph.insert("app", vec!["serde".to_string(), "log".to_string()]);
///
/// assert!(graph.contains("app"));
/// assert_eq!(graph.dependencies("app").len(), 2);
/// assert!(graph.dependencies("serde").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageGraph {
    packages: HashMap<String, Vec<String>>,
}

impl PackageGraph {
    /// Creates a new empty package graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a package with its dependency list.
    ///
    /// Redeclaring a package replaces the earlier list, so the last
    /// declaration wins. Returns the replaced list, if any.
    pub fn insert(&mut self, name: impl Into<String>, deps: Vec<String>) -> Option<Vec<String>> {
        self.packages.insert(name.into(), deps)
    }

    /// Returns true if `name` was declared as a key.
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Returns the declared dependencies of `name`, in declaration order.
    ///
    /// Undeclared packages yield an empty slice.
    pub fn dependencies(&self, name: &str) -> &[String] {
        self.packages.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of declared packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if no packages were declared.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Total number of declared dependency entries, duplicates included.
    pub fn dependency_count(&self) -> usize {
        self.packages.values().map(Vec::len).sum()
    }

    /// Declared package names, sorted for stable output.
    pub fn package_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.packages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Projects the graph into a petgraph `DiGraph`.
    ///
    /// Every declared package and every implicit leaf becomes a node. Nodes
    /// are added in sorted name order so indices are stable between calls.
    /// Duplicate dependency entries collapse into a single edge.
    pub fn to_digraph(&self) -> DiGraph<String, ()> {
        let mut graph = DiGraph::with_capacity(self.packages.len(), self.dependency_count());
        let mut indices: HashMap<&str, NodeIndex> = HashMap::with_capacity(self.packages.len());

        let mut all_names: Vec<&str> = self
            .packages
            .iter()
            .flat_map(|(name, deps)| {
                std::iter::once(name.as_str()).chain(deps.iter().map(String::as_str))
            })
            .collect();
        all_names.sort_unstable();
        all_names.dedup();

        for name in all_names {
            let idx = graph.add_node(name.to_string());
            indices.insert(name, idx);
        }

        for name in self.package_names() {
            let Some(&from) = indices.get(name) else {
                continue;
            };
            for dep in self.dependencies(name) {
                if let Some(&to) = indices.get(dep.as_str()) {
                    graph.update_edge(from, to, ());
                }
            }
        }

        graph
    }

    /// Detects every cycle in the whole graph, independent of any root.
    ///
    /// A strongly connected component counts as a cycle if it has more than
    /// one member or a single member that depends on itself. Members of each
    /// cycle are sorted, and cycles are ordered by their first member.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deptrace::graph::PackageGraph;
    ///
    /// let mut graph = PackageGraph::new();
    /// graph.insert("a", vec!["b".to_string()]);
    /// graph.insert("b", vec!["c".to_string()]);
    /// graph.insert("c", vec!["a".to_string()]);
    ///
    /// let cycles = graph.detect_cycles();
    /// assert_eq!(cycles, vec![vec!["a".to_string(), "b".to_string(), "c".to_string()]]);
    /// ```
    pub fn detect_cycles(&self) -> Vec<Vec<String>> {
        let graph = self.to_digraph();
        let mut cycles = Vec::new();

        for scc in tarjan_scc(&graph) {
            let is_cycle = match scc.as_slice() {
                [] => false,
                [idx] => graph.contains_edge(*idx, *idx),
                _ => true,
            };
            if !is_cycle {
                continue;
            }

            let mut members: Vec<String> = scc
                .iter()
                .filter_map(|&idx| graph.node_weight(idx))
                .cloned()
                .collect();
            members.sort_unstable();
            cycles.push(members);
        }

        cycles.sort();
        cycles
    }
}

impl FromIterator<(String, Vec<String>)> for PackageGraph {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut graph = PackageGraph::new();
        for (name, deps) in iter {
            graph.insert(name, deps);
        }
        graph
    }
}
