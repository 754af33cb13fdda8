//! Volume lifecycle: owns the graph and gates queries on readiness.
//!
//! A [`Navigator`] pairs a volume with its node graph. The graph only
//! exists while the navigator is active; queries outside that window fail
//! with [`NavError::GraphNotReady`] rather than building a graph
//! implicitly.

use nalgebra::Point3;
use nav_types::{GraphConfig, NavError, NavRoute, QueryFilters};
use tracing::info;
use vn_spatial::NavVolume;

use crate::astar::GridPathfinder;
use crate::graph::NodeGraph;
use crate::oracle::TraversabilityOracle;

/// A navigation volume plus its activation state.
///
/// # Example
///
/// ```
/// use nav_pathfind::{Navigator, OpenSpace};
/// use nav_types::{GraphConfig, NavError, QueryFilters};
/// use vn_spatial::NavVolume;
/// use nalgebra::Point3;
///
/// let volume = NavVolume::new(3, 3, 3, 100.0).unwrap();
/// let mut navigator = Navigator::new(volume, GraphConfig::default());
///
/// // Queries before activation fail fast
/// let result = navigator.find_path(
///     &OpenSpace,
///     Point3::new(50.0, 50.0, 50.0),
///     Point3::new(250.0, 250.0, 250.0),
///     &QueryFilters::none(),
/// );
/// assert!(matches!(result, Err(NavError::GraphNotReady)));
///
/// navigator.activate().unwrap();
/// let route = navigator.find_path(
///     &OpenSpace,
///     Point3::new(50.0, 50.0, 50.0),
///     Point3::new(250.0, 250.0, 250.0),
///     &QueryFilters::none(),
/// );
/// assert!(route.is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Navigator {
    volume: NavVolume,
    config: GraphConfig,
    graph: Option<NodeGraph>,
}

impl Navigator {
    /// Creates an inactive navigator for `volume` under `config`.
    #[must_use]
    pub const fn new(volume: NavVolume, config: GraphConfig) -> Self {
        Self {
            volume,
            config,
            graph: None,
        }
    }

    /// Builds the node graph, making the navigator ready for queries.
    ///
    /// Activating an already active navigator rebuilds the graph.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfiguration`] if the graph cannot be
    /// built; the navigator stays inactive in that case.
    pub fn activate(&mut self) -> Result<(), NavError> {
        let graph = NodeGraph::build(&self.volume, self.config)?;
        info!(
            nodes = graph.len(),
            min_shared_axes = self.config.min_shared_axes(),
            "navigation graph built"
        );
        self.graph = Some(graph);
        Ok(())
    }

    /// Releases the node graph; subsequent queries fail until reactivated.
    pub fn deactivate(&mut self) {
        if self.graph.take().is_some() {
            info!("navigation graph released");
        }
    }

    /// Returns `true` if the navigator holds a built graph.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.graph.is_some()
    }

    /// Returns the volume.
    #[must_use]
    pub const fn volume(&self) -> &NavVolume {
        &self.volume
    }

    /// Returns the built graph, if active.
    #[must_use]
    pub const fn graph(&self) -> Option<&NodeGraph> {
        self.graph.as_ref()
    }

    /// Finds a path between two world-space points.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::GraphNotReady`] if the navigator is inactive,
    /// or [`NavError::NoPathFound`] if the search exhausts its frontier.
    pub fn find_path<O: TraversabilityOracle>(
        &self,
        oracle: &O,
        start: Point3<f64>,
        destination: Point3<f64>,
        filters: &QueryFilters,
    ) -> Result<NavRoute, NavError> {
        let graph = self.graph.as_ref().ok_or(NavError::GraphNotReady)?;
        GridPathfinder::new(&self.volume, graph, oracle).find_path(start, destination, filters)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::oracle::OpenSpace;

    fn navigator() -> Navigator {
        let volume = NavVolume::new(3, 3, 3, 100.0).unwrap();
        Navigator::new(volume, GraphConfig::default())
    }

    #[test]
    fn test_query_before_activation_fails() {
        let navigator = navigator();
        assert!(!navigator.is_active());
        let result = navigator.find_path(
            &OpenSpace,
            Point3::new(50.0, 50.0, 50.0),
            Point3::new(250.0, 50.0, 50.0),
            &QueryFilters::none(),
        );
        assert!(matches!(result, Err(NavError::GraphNotReady)));
    }

    #[test]
    fn test_activate_then_query() {
        let mut navigator = navigator();
        navigator.activate().unwrap();
        assert!(navigator.is_active());
        assert_eq!(navigator.graph().unwrap().len(), 27);

        let route = navigator
            .find_path(
                &OpenSpace,
                Point3::new(50.0, 50.0, 50.0),
                Point3::new(250.0, 50.0, 50.0),
                &QueryFilters::none(),
            )
            .unwrap();
        assert_eq!(route.node_count(), 3);
    }

    #[test]
    fn test_deactivate_releases_graph() {
        let mut navigator = navigator();
        navigator.activate().unwrap();
        navigator.deactivate();
        assert!(!navigator.is_active());
        let result = navigator.find_path(
            &OpenSpace,
            Point3::new(50.0, 50.0, 50.0),
            Point3::new(250.0, 50.0, 50.0),
            &QueryFilters::none(),
        );
        assert!(matches!(result, Err(NavError::GraphNotReady)));
    }

    #[test]
    fn test_activate_rejects_bad_config() {
        let volume = NavVolume::new(3, 3, 3, 100.0).unwrap();
        let config = GraphConfig::default().with_min_shared_axes(9);
        let mut navigator = Navigator::new(volume, config);
        assert!(navigator.activate().is_err());
        assert!(!navigator.is_active());
    }
}
