use std::collections::HashMap;

use crate::graph::{Edge, TraversalResult};

/// A node in the dependency tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Package name
    pub name: String,
    /// Child package names, in edge order
    pub children: Vec<String>,
}

impl TreeNode {
    /// Create a new tree node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Check if this node has children
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Parent to children adjacency reconstructed from traversal edges.
///
/// The tree never looks at the raw graph, so it reflects exactly the
/// filtering, depth and cycle exclusions the traversal applied. A package
/// with several recorded parents appears under each of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootedTree {
    root: String,
    nodes: HashMap<String, TreeNode>,
    depth_limit: usize,
}

impl RootedTree {
    /// Builds a tree from an edge list.
    ///
    /// `depth_limit` caps how deep [`RootedTree::flatten`] descends.
    pub fn build(root: impl Into<String>, edges: &[Edge], depth_limit: usize) -> Self {
        let root = root.into();
        let mut nodes: HashMap<String, TreeNode> = HashMap::new();
        nodes.insert(root.clone(), TreeNode::new(root.as_str()));

        for edge in edges {
            nodes
                .entry(edge.from.clone())
                .or_insert_with(|| TreeNode::new(edge.from.as_str()))
                .children
                .push(edge.to.clone());
            nodes
                .entry(edge.to.clone())
                .or_insert_with(|| TreeNode::new(edge.to.as_str()));
        }

        Self {
            root,
            nodes,
            depth_limit,
        }
    }

    /// Builds the tree for a traversal, or `None` if nothing was visited.
    ///
    /// Descent is capped at the deepest depth the traversal's limit admits,
    /// so every recorded edge is reachable in the rendered tree.
    pub fn from_traversal(result: &TraversalResult) -> Option<Self> {
        if result.is_empty() {
            return None;
        }
        let depth_limit = result.depth_limit()?;
        Some(Self::build(result.root(), result.edges(), depth_limit))
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    /// Looks up a node by package name.
    pub fn node(&self, name: &str) -> Option<&TreeNode> {
        self.nodes.get(name)
    }

    /// Child names of `name`; empty for leaves and unknown names.
    pub fn children(&self, name: &str) -> &[String] {
        self.nodes
            .get(name)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct packages in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Flatten the tree into a pre-order list for rendering
    ///
    /// Uses an explicit stack, so rendering depth does not grow the call
    /// stack. Each entry carries its own branch; a child already on that
    /// branch is not descended into, since traversal edges can close a loop
    /// across sibling branches.
    pub fn flatten(&self) -> Vec<FlattenedNode> {
        let mut result = Vec::new();
        let mut stack = vec![Frame {
            name: self.root.clone(),
            depth: 0,
            is_last_child: true,
            ancestors_are_last: Vec::new(),
            branch: vec![self.root.clone()],
        }];

        while let Some(frame) = stack.pop() {
            let children: Vec<&String> = if frame.depth < self.depth_limit {
                self.children(&frame.name)
                    .iter()
                    .filter(|child| !frame.branch.contains(*child))
                    .collect()
            } else {
                Vec::new()
            };

            if !children.is_empty() {
                let mut ancestors = frame.ancestors_are_last.clone();
                if frame.depth > 0 {
                    ancestors.push(frame.is_last_child);
                }
                let child_count = children.len();
                for (i, child) in children.into_iter().enumerate().rev() {
                    let mut branch = frame.branch.clone();
                    branch.push(child.clone());
                    stack.push(Frame {
                        name: child.clone(),
                        depth: frame.depth + 1,
                        is_last_child: i == child_count - 1,
                        ancestors_are_last: ancestors.clone(),
                        branch,
                    });
                }
                result.push(frame.into_node(true));
            } else {
                result.push(frame.into_node(false));
            }
        }

        result
    }
}

/// Pending entry on the flatten stack.
struct Frame {
    name: String,
    depth: usize,
    is_last_child: bool,
    ancestors_are_last: Vec<bool>,
    branch: Vec<String>,
}

impl Frame {
    fn into_node(self, has_children: bool) -> FlattenedNode {
        FlattenedNode {
            name: self.name,
            depth: self.depth,
            has_children,
            is_last_child: self.is_last_child,
            ancestors_are_last: self.ancestors_are_last,
        }
    }
}

/// A flattened representation of a tree node for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedNode {
    /// Package name
    pub name: String,
    /// Depth in the tree
    pub depth: usize,
    /// Whether this node has children
    pub has_children: bool,
    /// Whether this is the last child of its parent
    pub is_last_child: bool,
    /// Last-sibling flags of every ancestor below the root
    pub ancestors_are_last: Vec<bool>,
}

impl FlattenedNode {
    /// Build the tree prefix (indentation and branch lines)
    pub fn tree_prefix(&self) -> String {
        let mut prefix = String::new();

        for &is_last in &self.ancestors_are_last {
            if is_last {
                prefix.push_str("    ");
            } else {
                prefix.push_str("│   ");
            }
        }

        if self.depth > 0 {
            if self.is_last_child {
                prefix.push_str("└── ");
            } else {
                prefix.push_str("├── ");
            }
        }

        prefix
    }
}
