//! Error types for navigation operations.
//!
//! This module defines the [`NavError`] enum covering graph construction,
//! lifecycle misuse, and search outcomes.

use vn_spatial::{GridCoord, SpatialError};

/// Errors that can occur during graph construction and path queries.
///
/// # Example
///
/// ```
/// use nav_types::NavError;
/// use vn_spatial::GridCoord;
///
/// let error = NavError::NoPathFound {
///     start: GridCoord::new(0, 0, 0),
///     goal: GridCoord::new(9, 9, 9),
/// };
/// assert!(error.is_no_path_found());
/// assert!(error.to_string().contains("no path found"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NavError {
    /// The grid or topology configuration is invalid.
    ///
    /// Raised at graph-build time; no partial graph is produced.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A path query was issued while no graph is active.
    ///
    /// The node graph only exists between activation and deactivation of
    /// its owning volume.
    #[error("node graph is not ready (volume not activated)")]
    GraphNotReady,

    /// The search exhausted its frontier without reaching the goal.
    ///
    /// A normal, expected outcome for disconnected or fully obstructed
    /// regions, not a crash condition.
    #[error("no path found from {start:?} to {goal:?}")]
    NoPathFound {
        /// The snapped start cell.
        start: GridCoord,
        /// The snapped goal cell.
        goal: GridCoord,
    },
}

impl NavError {
    /// Creates an invalid configuration error with the given message.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_types::NavError;
    ///
    /// let error = NavError::invalid_configuration("min_shared_axes must be <= 2");
    /// assert!(error.to_string().contains("min_shared_axes"));
    /// ```
    #[must_use]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Returns `true` if this is a "no path found" error.
    #[must_use]
    pub const fn is_no_path_found(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }
}

impl From<SpatialError> for NavError {
    fn from(error: SpatialError) -> Self {
        Self::InvalidConfiguration(error.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_display() {
        let error = NavError::invalid_configuration("zero divisions");
        assert!(error.to_string().contains("invalid configuration"));
        assert!(error.to_string().contains("zero divisions"));
    }

    #[test]
    fn test_graph_not_ready_display() {
        let error = NavError::GraphNotReady;
        assert!(error.to_string().contains("not ready"));
    }

    #[test]
    fn test_no_path_found_display() {
        let error = NavError::NoPathFound {
            start: GridCoord::new(0, 0, 0),
            goal: GridCoord::new(5, 5, 5),
        };
        assert!(error.to_string().contains("no path found"));
        assert!(error.is_no_path_found());
    }

    #[test]
    fn test_is_no_path_found_negative() {
        assert!(!NavError::GraphNotReady.is_no_path_found());
    }

    #[test]
    fn test_from_spatial_error() {
        let spatial = SpatialError::InvalidDivisionSize(-2.0);
        let error: NavError = spatial.into();
        assert!(matches!(error, NavError::InvalidConfiguration(_)));
        assert!(error.to_string().contains("division size"));
    }
}
