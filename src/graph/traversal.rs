//! Breadth-first traversal bounded by depth and a name filter.
//!
//! Each queued entry owns the path from the root to itself. Cycles are
//! detected against that per-branch path, not against the global visited
//! set, so a package reached again through a different branch is a valid
//! cross edge while a package reached again through its own ancestry is a
//! cycle.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use super::PackageGraph;
use crate::config::{DepthMode, TraversalConfig};

/// A directed edge from a package to one of its dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A package expanded during traversal, with the depth it was first reached at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedNode {
    pub name: String,
    pub depth: usize,
}

/// The branch that closed a cycle.
///
/// The first entry is the traversal root and the last entry repeats the
/// package that was already on the branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclePath {
    pub nodes: Vec<String>,
}

impl CyclePath {
    /// Returns a formatted string representation of the cycle path.
    ///
    /// For example: "a -> b -> c -> a"
    pub fn cycle_path(&self) -> String {
        self.nodes.join(" -> ")
    }

    /// The package the cycle returns to.
    pub fn entry(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Display for CyclePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cycle_path())
    }
}

/// Outcome of one traversal.
///
/// Visited nodes are in expansion order (level order, left to right as
/// declared), edges in discovery order without duplicates, and cycles in
/// the order they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalResult {
    root: String,
    root_found: bool,
    root_filtered: bool,
    max_depth: usize,
    depth_mode: DepthMode,
    visited: Vec<VisitedNode>,
    edges: Vec<Edge>,
    cycles: Vec<CyclePath>,
    depths: HashMap<String, usize>,
}

impl TraversalResult {
    fn empty(config: &TraversalConfig, root_found: bool) -> Self {
        Self {
            root: config.package_name().to_string(),
            root_found,
            root_filtered: false,
            max_depth: config.max_depth(),
            depth_mode: config.depth_mode(),
            visited: Vec::new(),
            edges: Vec::new(),
            cycles: Vec::new(),
            depths: HashMap::new(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// False if the root package was never declared in the graph.
    pub fn root_found(&self) -> bool {
        self.root_found
    }

    /// True if the root itself matched the filter.
    pub fn root_filtered(&self) -> bool {
        self.root_filtered
    }

    /// The depth limit the traversal ran under.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn depth_mode(&self) -> DepthMode {
        self.depth_mode
    }

    /// The deepest depth the depth limit admits, regardless of what was
    /// actually reached. `None` when no depth is admitted.
    pub fn depth_limit(&self) -> Option<usize> {
        self.depth_mode.deepest_admitted(self.max_depth)
    }

    pub fn visited(&self) -> &[VisitedNode] {
        &self.visited
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn cycles(&self) -> &[CyclePath] {
        &self.cycles
    }

    /// Depth at which `name` was first visited.
    pub fn depth_of(&self, name: &str) -> Option<usize> {
        self.depths.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.depths.contains_key(name)
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Returns true if nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Names of visited packages in expansion order.
    pub fn visited_names(&self) -> Vec<&str> {
        self.visited.iter().map(|n| n.name.as_str()).collect()
    }

    /// Deepest depth reached, if anything was visited.
    pub fn deepest(&self) -> Option<usize> {
        self.visited.iter().map(|n| n.depth).max()
    }
}

struct QueueEntry {
    name: String,
    depth: usize,
    path: Vec<String>,
}

/// Walks `graph` breadth-first from the configured root.
///
/// A package is expanded at most once, at the first (and therefore
/// shallowest) depth it is dequeued at. Packages matching the filter are
/// never visited and no edge points at them. An edge whose target would
/// exceed the depth limit is dropped along with the target. An edge whose
/// target already sits on the current branch is recorded as a cycle and is
/// neither followed nor added to the edge list.
///
/// A root that was never declared yields an empty result with
/// [`TraversalResult::root_found`] false.
///
/// # Example
///
/// ```rust
/// use deptrace::config::{DepthMode, TraversalConfig};
/// use deptrace::graph::{traverse, PackageGraph};
///
/// let mut graph = PackageGraph::new();
/// graph.insert("a", vec!["b".to_string()]);
/// graph.insert("b", vec!["c".to_string()]);
/// graph.insert("c", vec!["a".to_string()]);
///
/// let config = TraversalConfig::new("a", 5, "", DepthMode::InclusiveRoot).unwrap();
/// let result = traverse(&graph, &config);
///
/// assert_eq!(result.visited_names(), vec!["a", "b", "c"]);
/// assert_eq!(result.cycles()[0].cycle_path(), "a -> b -> c -> a");
/// ```
pub fn traverse(graph: &PackageGraph, config: &TraversalConfig) -> TraversalResult {
    let root = config.package_name();

    if !graph.contains(root) {
        tracing::debug!(root, "root package not declared in graph");
        return TraversalResult::empty(config, false);
    }

    let mut result = TraversalResult::empty(config, true);

    if config.is_filtered(root) {
        tracing::debug!(root, filter = config.filter(), "root package excluded by filter");
        result.root_filtered = true;
        return result;
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut seen_edges: HashSet<(String, String)> = HashSet::new();
    let mut queue: VecDeque<QueueEntry> = VecDeque::new();

    if config.admits_depth(0) {
        queue.push_back(QueueEntry {
            name: root.to_string(),
            depth: 0,
            path: vec![root.to_string()],
        });
    }

    while let Some(QueueEntry { name, depth, path }) = queue.pop_front() {
        if !visited.insert(name.clone()) {
            continue;
        }

        tracing::trace!(package = %name, depth, "expanding");
        result.depths.insert(name.clone(), depth);
        result.visited.push(VisitedNode {
            name: name.clone(),
            depth,
        });

        let next_depth = depth.saturating_add(1);
        if !config.admits_depth(next_depth) {
            continue;
        }

        for dep in graph.dependencies(&name) {
            if config.is_filtered(dep) {
                continue;
            }

            if path.contains(dep) {
                let mut nodes = path.clone();
                nodes.push(dep.clone());
                result.cycles.push(CyclePath { nodes });
                continue;
            }

            if seen_edges.insert((name.clone(), dep.clone())) {
                result.edges.push(Edge::new(name.as_str(), dep.as_str()));
            }

            if !visited.contains(dep) {
                let mut branch = path.clone();
                branch.push(dep.clone());
                queue.push_back(QueueEntry {
                    name: dep.clone(),
                    depth: next_depth,
                    path: branch,
                });
            }
        }
    }

    tracing::debug!(
        root,
        visited = result.visited.len(),
        edges = result.edges.len(),
        cycles = result.cycles.len(),
        "traversal complete"
    );

    result
}
