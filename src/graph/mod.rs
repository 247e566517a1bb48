//! Graph module for dependency relationship modeling.
//!
//! This module provides the [`PackageGraph`] store and the bounded
//! breadth-first [`traverse`] that walks it from a chosen root.
//!
//! # Example
//!
//! ```rust
//! use deptrace::config::{DepthMode, TraversalConfig};
//! use deptrace::graph::{traverse, PackageGraph};
//!
//! let mut graph = PackageGraph::new();
//! graph.insert("react-dom", vec!["react".to_string(), "scheduler".to_string()]);
//! graph.insert("react", vec![]);
//!
//! let config = TraversalConfig::new("react-dom", 2, "", DepthMode::default()).unwrap();
//! let result = traverse(&graph, &config);
//!
//! assert_eq!(result.visited().len(), 3);
//! assert_eq!(result.edges().len(), 2);
//! ```

mod package_graph;
mod traversal;

pub use package_graph::PackageGraph;
pub use traversal::{traverse, CyclePath, Edge, TraversalResult, VisitedNode};
