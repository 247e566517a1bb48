//! Parser for the line-oriented adjacency format.
//!
//! Each declaration is one line of the form `name: dep1 dep2 ...`. Blank
//! lines and lines starting with `#` are comments. Lines without a colon or
//! with an empty name are skipped rather than reported.

use std::fs;
use std::path::{Path, PathBuf};

use crate::graph::PackageGraph;

/// Errors that can occur while loading an adjacency file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The source file could not be read.
    #[error("Source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Reads and parses an adjacency file.
///
/// The file is read in full before parsing; a read failure yields
/// [`ParseError::SourceUnavailable`] and no partial graph.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use deptrace::parser::parse_file;
///
/// let graph = parse_file(Path::new("deps.txt")).unwrap();
/// println!("{} packages", graph.len());
/// ```
pub fn parse_file(path: &Path) -> ParseResult<PackageGraph> {
    let content = fs::read_to_string(path).map_err(|source| ParseError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read adjacency file");
    Ok(parse_str(&content))
}

/// Parses adjacency text into a [`PackageGraph`].
///
/// Never fails. A package declared more than once keeps its last
/// declaration.
///
/// # Example
///
/// ```
/// use deptrace::parser::parse_str;
///
/// let graph = parse_str("# comment\napp: core utils\ncore:\n\nnot a declaration\n");
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.dependencies("app"), ["core".to_string(), "utils".to_string()]);
/// assert!(graph.dependencies("core").is_empty());
/// ```
pub fn parse_str(content: &str) -> PackageGraph {
    let mut graph = PackageGraph::new();
    let mut skipped = 0usize;

    for (line_no, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_line(line) {
            Some((name, deps)) => {
                if graph.insert(name, deps).is_some() {
                    tracing::debug!(line = line_no + 1, package = name, "redeclared package replaces earlier entry");
                }
            }
            None => {
                skipped += 1;
                tracing::debug!(line = line_no + 1, "skipping malformed line");
            }
        }
    }

    tracing::debug!(
        packages = graph.len(),
        dependencies = graph.dependency_count(),
        skipped,
        "parsed adjacency text"
    );

    graph
}

/// Splits one trimmed, non-comment line into a name and its dependencies.
fn parse_line(line: &str) -> Option<(&str, Vec<String>)> {
    let (name, rest) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    let deps = rest.split_whitespace().map(str::to_string).collect();
    Some((name, deps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_basic() {
        let graph = parse_str("a: b c\nb: c\n");
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.dependencies("a"), ["b".to_string(), "c".to_string()]);
        assert_eq!(graph.dependencies("b"), ["c".to_string()]);
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let graph = parse_str("# header\n\n   \n  # indented comment\na: b\n");
        assert_eq!(graph.package_names(), vec!["a"]);
    }

    #[test]
    fn test_parse_empty_dependency_list() {
        let graph = parse_str("a:\nb:   \n");
        assert!(graph.contains("a"));
        assert!(graph.contains("b"));
        assert!(graph.dependencies("a").is_empty());
        assert!(graph.dependencies("b").is_empty());
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let graph = parse_str("no colon here\n: orphan deps\ntwo words: x\ngood: x\n");
        assert_eq!(graph.package_names(), vec!["good"]);
    }

    #[test]
    fn test_parse_last_declaration_wins() {
        let graph = parse_str("a: b\na: c d\n");
        assert_eq!(graph.dependencies("a"), ["c".to_string(), "d".to_string()]);
    }

    #[test]
    fn test_parse_keeps_duplicate_dependencies() {
        let graph = parse_str("a: b b\n");
        assert_eq!(graph.dependencies("a").len(), 2);
    }

    #[test]
    fn test_parse_extra_colons_stay_in_dependency_text() {
        // only the first colon separates the name; the rest is whitespace-split as-is
        let graph = parse_str("a: b:c d\n");
        assert_eq!(graph.dependencies("a"), ["b:c".to_string(), "d".to_string()]);
    }

    #[test]
    fn test_parse_tabs_and_surrounding_whitespace() {
        let graph = parse_str("  a :\tb \t c  \r\n");
        assert_eq!(graph.dependencies("a"), ["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_str("").is_empty());
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "root: left right").unwrap();
        writeln!(file, "left: leaf").unwrap();

        let graph = parse_file(file.path()).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.dependencies("left"), ["leaf".to_string()]);
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file(Path::new("/nonexistent/deptrace/graph.txt")).unwrap_err();
        assert!(matches!(err, ParseError::SourceUnavailable { .. }));
        assert!(err.to_string().starts_with("Source unavailable"));
    }
}
