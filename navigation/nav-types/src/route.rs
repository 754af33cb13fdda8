//! Search results and statistics.

use std::time::Duration;

use crate::path::NavPath;

/// Statistics collected during one path search.
///
/// # Example
///
/// ```
/// use nav_types::SearchStats;
/// use std::time::Duration;
///
/// let stats = SearchStats::new("astar")
///     .with_nodes_expanded(42)
///     .with_oracle_queries(120)
///     .with_elapsed(Duration::from_micros(350));
///
/// assert_eq!(stats.algorithm(), "astar");
/// assert_eq!(stats.nodes_expanded(), 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    algorithm: String,
    nodes_expanded: usize,
    oracle_queries: usize,
    oracle_failures: usize,
    elapsed: Duration,
}

impl SearchStats {
    /// Creates empty statistics labeled with the algorithm that produced them.
    #[must_use]
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            ..Self::default()
        }
    }

    /// Sets the number of nodes expanded.
    #[must_use]
    pub const fn with_nodes_expanded(mut self, count: usize) -> Self {
        self.nodes_expanded = count;
        self
    }

    /// Sets the number of traversability queries issued.
    #[must_use]
    pub const fn with_oracle_queries(mut self, count: usize) -> Self {
        self.oracle_queries = count;
        self
    }

    /// Sets the number of traversability queries that failed.
    #[must_use]
    pub const fn with_oracle_failures(mut self, count: usize) -> Self {
        self.oracle_failures = count;
        self
    }

    /// Sets the wall-clock duration of the search.
    #[must_use]
    pub const fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Returns the algorithm label.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Returns the number of nodes popped from the open set and expanded.
    #[must_use]
    pub const fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Returns the number of traversability queries issued.
    #[must_use]
    pub const fn oracle_queries(&self) -> usize {
        self.oracle_queries
    }

    /// Returns the number of traversability queries that returned an error.
    ///
    /// Failed queries are treated as obstructed cells; a nonzero count means
    /// the result may be more conservative than the true world state.
    #[must_use]
    pub const fn oracle_failures(&self) -> usize {
        self.oracle_failures
    }

    /// Returns the wall-clock duration of the search.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// A successful search result: the path plus how it was found.
///
/// # Example
///
/// ```
/// use nav_types::{NavPath, NavRoute, SearchStats};
/// use nalgebra::Point3;
///
/// let route = NavRoute::new(
///     NavPath::new(vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)]),
///     SearchStats::new("astar").with_nodes_expanded(2),
/// );
///
/// assert_eq!(route.node_count(), 2);
/// assert_eq!(route.stats().nodes_expanded(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavRoute {
    path: NavPath,
    stats: SearchStats,
}

impl NavRoute {
    /// Creates a route from a path and its search statistics.
    #[must_use]
    pub const fn new(path: NavPath, stats: SearchStats) -> Self {
        Self { path, stats }
    }

    /// Returns the waypoint path.
    #[must_use]
    pub const fn path(&self) -> &NavPath {
        &self.path
    }

    /// Returns the search statistics.
    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Returns the number of waypoints in the path.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.path.len()
    }

    /// Consumes the route, returning just the path.
    #[must_use]
    pub fn into_path(self) -> NavPath {
        self.path
    }
}
