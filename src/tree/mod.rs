//! Tree data structures for dependency visualization
//!
//! Provides `RootedTree`, rebuilt from a traversal's edge list, and
//! `FlattenedNode` for rendering the tree line by line.

mod node;

pub use node::{FlattenedNode, RootedTree, TreeNode};
