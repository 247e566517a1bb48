//! Parser module for adjacency descriptions.
//!
//! The supported input is a flat UTF-8 text file with one declaration per
//! line:
//!
//! ```text
//! # comments and blank lines are ignored
//! my-app: react react-dom lodash
//! react-dom: react scheduler
//! react:
//! ```
//!
//! Names must not contain `:` or whitespace. There is no escaping.
//!
//! # Example
//!
//! ```
//! use deptrace::parser::parse_str;
//!
//! let graph = parse_str("my-app: react lodash\nreact:\n");
//! assert!(graph.contains("my-app"));
//! assert_eq!(graph.dependencies("my-app").len(), 2);
//! ```

pub mod adjacency;

pub use adjacency::{parse_file, parse_str, ParseError, ParseResult};
