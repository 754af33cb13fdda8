//! The traversability oracle: query-time obstruction checks.
//!
//! The graph encodes geometry; whether a cell is actually passable is
//! decided during each search by asking an oracle about the cell's
//! world-space box. The engine hands the oracle a [`Region`] (the cell's
//! bounds) and the caller's [`QueryFilters`], and the oracle answers
//! whether that region is obstructed right now.
//!
//! Implementations typically wrap a physics scene or spatial index. Two
//! stock oracles are provided: [`OpenSpace`] (nothing is obstructed) and
//! [`StaticObstacles`] (a fixed set of blocked cells).

use std::collections::HashSet;

use nav_types::QueryFilters;
use vn_spatial::{GridCoord, NavVolume, Region};

/// An error raised by a traversability query.
///
/// The search does not abort on oracle errors; a failed query is treated
/// as "obstructed" and counted in the result statistics.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum OracleError {
    /// The backing spatial-query subsystem failed.
    #[error("spatial query failed: {0}")]
    QueryFailed(String),
}

impl OracleError {
    /// Creates a query failure with the given message.
    #[must_use]
    pub fn query_failed(message: impl Into<String>) -> Self {
        Self::QueryFailed(message.into())
    }
}

/// Answers whether a world-space region is currently obstructed.
///
/// Queries must be read-only with respect to the world: the engine may
/// issue them in any order and any number of times per search, and a
/// search assumes the world does not change underneath it.
pub trait TraversabilityOracle {
    /// Returns `true` if `region` is obstructed under `filters`.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError`] if the query cannot be answered. The search
    /// treats such cells as obstructed.
    fn is_obstructed(&self, region: &Region, filters: &QueryFilters) -> Result<bool, OracleError>;
}

impl<F> TraversabilityOracle for F
where
    F: Fn(&Region, &QueryFilters) -> Result<bool, OracleError>,
{
    fn is_obstructed(&self, region: &Region, filters: &QueryFilters) -> Result<bool, OracleError> {
        self(region, filters)
    }
}

/// An oracle that reports every region as free.
///
/// # Example
///
/// ```
/// use nav_pathfind::{OpenSpace, TraversabilityOracle};
/// use nav_types::QueryFilters;
/// use vn_spatial::Region;
/// use nalgebra::Point3;
///
/// let oracle = OpenSpace;
/// let region = Region::from_center_half_extent(Point3::origin(), 50.0);
/// assert_eq!(oracle.is_obstructed(&region, &QueryFilters::none()).unwrap(), false);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSpace;

impl TraversabilityOracle for OpenSpace {
    fn is_obstructed(&self, _region: &Region, _filters: &QueryFilters) -> Result<bool, OracleError> {
        Ok(false)
    }
}

/// An oracle backed by a fixed set of blocked cells.
///
/// Each query region is mapped back to the cell containing its center; the
/// region is obstructed when that cell is in the blocked set. Filters are
/// ignored. Useful for tests and for static worlds already expressed in
/// grid terms.
///
/// # Example
///
/// ```
/// use nav_pathfind::{StaticObstacles, TraversabilityOracle};
/// use nav_types::QueryFilters;
/// use vn_spatial::{GridCoord, NavVolume, Region};
///
/// let volume = NavVolume::new(3, 3, 3, 100.0).unwrap();
/// let oracle = StaticObstacles::new(volume.clone(), [GridCoord::new(1, 1, 1)]);
///
/// let blocked = Region::from_center_half_extent(
///     volume.coordinates_to_world(GridCoord::new(1, 1, 1)),
///     50.0,
/// );
/// assert!(oracle.is_obstructed(&blocked, &QueryFilters::none()).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct StaticObstacles {
    volume: NavVolume,
    blocked: HashSet<GridCoord>,
}

impl StaticObstacles {
    /// Creates an oracle blocking the given cells of `volume`.
    #[must_use]
    pub fn new(volume: NavVolume, blocked: impl IntoIterator<Item = GridCoord>) -> Self {
        Self {
            volume,
            blocked: blocked.into_iter().collect(),
        }
    }

    /// Marks a cell as blocked.
    pub fn block(&mut self, coord: GridCoord) {
        self.blocked.insert(coord);
    }

    /// Clears a blocked cell.
    pub fn unblock(&mut self, coord: GridCoord) {
        self.blocked.remove(&coord);
    }

    /// Returns the number of blocked cells.
    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }
}

impl TraversabilityOracle for StaticObstacles {
    fn is_obstructed(&self, region: &Region, _filters: &QueryFilters) -> Result<bool, OracleError> {
        let cell = self.volume.world_to_coordinates(region.center());
        Ok(self.blocked.contains(&cell))
    }
}
