//! Validated traversal configuration.
//!
//! The CLI builds a [`TraversalConfig`] once from its arguments and hands it
//! to the traversal by reference. Construction is the only place validation
//! happens, so any `TraversalConfig` that exists is valid.

use std::fmt;

/// Errors raised when a traversal configuration is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The root package name was empty or whitespace.
    #[error("Invalid configuration: package name must not be empty")]
    EmptyPackageName,

    /// The maximum depth was negative.
    #[error("Invalid configuration: max depth must be non-negative, got {0}")]
    NegativeDepth(i64),
}

/// How the maximum depth bounds a traversal.
///
/// Both modes keep every recorded depth within the configured maximum; they
/// differ in whether the boundary level itself is admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DepthMode {
    /// The root sits at depth 0 and is always visited, even when the maximum
    /// is 0. A node at depth `d` is admitted while `d <= max_depth`.
    #[default]
    InclusiveRoot,
    /// The maximum counts levels, so at most `max_depth - 1` edges are
    /// traversed along any branch. A node at depth `d` is admitted only
    /// while `d < max_depth`, and a maximum of 0 visits nothing.
    StrictCutoff,
}

impl DepthMode {
    /// Returns true if a node at `depth` may be visited under `max_depth`.
    pub fn admits(self, depth: usize, max_depth: usize) -> bool {
        match self {
            DepthMode::InclusiveRoot => depth <= max_depth,
            DepthMode::StrictCutoff => depth < max_depth,
        }
    }

    /// The deepest depth admitted under `max_depth`, if any.
    pub fn deepest_admitted(self, max_depth: usize) -> Option<usize> {
        match self {
            DepthMode::InclusiveRoot => Some(max_depth),
            DepthMode::StrictCutoff => max_depth.checked_sub(1),
        }
    }
}

impl std::str::FromStr for DepthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inclusive" | "inclusive-root" => Ok(DepthMode::InclusiveRoot),
            "strict" | "strict-cutoff" => Ok(DepthMode::StrictCutoff),
            _ => Err(format!(
                "Unknown depth mode: '{}'. Valid modes: inclusive, strict",
                s
            )),
        }
    }
}

impl fmt::Display for DepthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthMode::InclusiveRoot => write!(f, "inclusive"),
            DepthMode::StrictCutoff => write!(f, "strict"),
        }
    }
}

/// Settings for one traversal.
///
/// # Example
///
/// ```rust
/// use deptrace::config::{DepthMode, TraversalConfig};
///
/// let config = TraversalConfig::new("app", 3, "test", DepthMode::default()).unwrap();
/// assert_eq!(config.max_depth(), 3);
/// assert!(config.is_filtered("test-utils"));
///
/// assert!(TraversalConfig::new("app", -1, "", DepthMode::default()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalConfig {
    package_name: String,
    max_depth: usize,
    filter: String,
    depth_mode: DepthMode,
}

impl TraversalConfig {
    /// Validates and builds a configuration.
    ///
    /// Fails with [`ConfigError`] on an empty package name or a negative
    /// maximum depth.
    pub fn new(
        package_name: impl Into<String>,
        max_depth: i64,
        filter: impl Into<String>,
        depth_mode: DepthMode,
    ) -> Result<Self, ConfigError> {
        let max_depth = usize::try_from(max_depth).map_err(|_| ConfigError::NegativeDepth(max_depth))?;
        Self::build(package_name.into(), max_depth, filter.into(), depth_mode)
    }

    /// Builds a configuration with no depth limit.
    pub fn unbounded(
        package_name: impl Into<String>,
        filter: impl Into<String>,
        depth_mode: DepthMode,
    ) -> Result<Self, ConfigError> {
        Self::build(package_name.into(), usize::MAX, filter.into(), depth_mode)
    }

    fn build(
        package_name: String,
        max_depth: usize,
        filter: String,
        depth_mode: DepthMode,
    ) -> Result<Self, ConfigError> {
        if package_name.trim().is_empty() {
            return Err(ConfigError::EmptyPackageName);
        }
        Ok(Self {
            package_name,
            max_depth,
            filter,
            depth_mode,
        })
    }

    /// The root package name.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// The maximum traversal depth. `usize::MAX` means unbounded.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The exclusion substring; empty disables filtering.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn depth_mode(&self) -> DepthMode {
        self.depth_mode
    }

    /// Returns true if `name` contains the filter substring.
    pub fn is_filtered(&self, name: &str) -> bool {
        !self.filter.is_empty() && name.contains(self.filter.as_str())
    }

    /// Returns true if a node at `depth` may be visited.
    pub fn admits_depth(&self, depth: usize) -> bool {
        self.depth_mode.admits(depth, self.max_depth)
    }
}
