//! deptrace - Offline dependency graph explorer
//!
//! This crate parses a flat adjacency description of a package graph, walks
//! it breadth-first from a chosen root under a depth limit and a name
//! filter, reports cycles, and renders the result as a tree, an edge list,
//! or JSON.

pub mod config;
pub mod export;
pub mod graph;
pub mod logger;
pub mod parser;
pub mod tree;
