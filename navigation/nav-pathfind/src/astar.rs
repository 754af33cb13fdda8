//! A* path search with deferred traversability validation.
//!
//! The searcher runs A* over a prebuilt [`NodeGraph`], consulting the
//! [`TraversabilityOracle`] lazily: a cell's obstruction is only queried
//! when the search first finds (or improves) a route into it. Cells the
//! frontier never improves are never queried, so obstruction checks track
//! the explored region rather than the whole volume.
//!
//! All per-search state lives in a private scratch allocated per call; the
//! graph itself is read-only, so any number of searches may run over the
//! same graph concurrently.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use nalgebra::Point3;
use nav_types::{NavError, NavPath, NavRoute, QueryFilters, SearchStats};
use tracing::{debug, warn};
use vn_spatial::{GridCoord, NavVolume, Region};

use crate::graph::{NodeGraph, NodeIndex};
use crate::heuristics::{euclidean_distance, move_cost};
use crate::oracle::TraversabilityOracle;

/// One open-set entry. The f-score is frozen at insertion time; improved
/// entries for the same node are pushed alongside the stale ones, which
/// the pop loop discards (lazy deletion).
struct OpenEntry {
    f: f64,
    seq: u64,
    index: NodeIndex,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse so the smallest f-score pops
        // first. Equal scores break toward the earlier insertion, making
        // the expansion order fully deterministic.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Per-call search scratch, keyed by node index.
struct Scratch {
    g_scores: Vec<f64>,
    predecessors: Vec<Option<NodeIndex>>,
    closed: Vec<bool>,
}

impl Scratch {
    fn new(len: usize) -> Self {
        Self {
            g_scores: vec![f64::INFINITY; len],
            predecessors: vec![None; len],
            closed: vec![false; len],
        }
    }
}

/// A* searcher over a volume, its node graph, and an obstruction oracle.
///
/// Borrows everything it needs, so it is cheap to construct per query.
///
/// # Example
///
/// ```
/// use nav_pathfind::{GridPathfinder, NodeGraph, OpenSpace};
/// use nav_types::{GraphConfig, QueryFilters};
/// use vn_spatial::NavVolume;
/// use nalgebra::Point3;
///
/// let volume = NavVolume::new(3, 3, 3, 100.0).unwrap();
/// let graph = NodeGraph::build(&volume, GraphConfig::default()).unwrap();
/// let pathfinder = GridPathfinder::new(&volume, &graph, &OpenSpace);
///
/// let route = pathfinder
///     .find_path(
///         Point3::new(50.0, 50.0, 50.0),
///         Point3::new(250.0, 250.0, 250.0),
///         &QueryFilters::none(),
///     )
///     .unwrap();
///
/// // Two diagonal hops under full connectivity
/// assert_eq!(route.node_count(), 3);
/// ```
pub struct GridPathfinder<'a, O> {
    volume: &'a NavVolume,
    graph: &'a NodeGraph,
    oracle: &'a O,
}

impl<'a, O: TraversabilityOracle> GridPathfinder<'a, O> {
    /// Creates a searcher over the given volume, graph, and oracle.
    ///
    /// The graph must have been built from the same volume.
    #[must_use]
    pub const fn new(volume: &'a NavVolume, graph: &'a NodeGraph, oracle: &'a O) -> Self {
        Self {
            volume,
            graph,
            oracle,
        }
    }

    /// Returns the volume this searcher operates on.
    #[must_use]
    pub const fn volume(&self) -> &NavVolume {
        self.volume
    }

    /// Returns the node graph this searcher operates on.
    #[must_use]
    pub const fn graph(&self) -> &NodeGraph {
        self.graph
    }

    /// Finds a path from `start` to `destination`, both in world space.
    ///
    /// Endpoints snap to their containing cells (clamping to the volume
    /// boundary if outside), and the returned waypoints are cell centers.
    /// The start cell is never queried for obstruction; the agent is
    /// assumed to already be there.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NoPathFound`] when the frontier is exhausted
    /// without reaching the destination cell.
    pub fn find_path(
        &self,
        start: Point3<f64>,
        destination: Point3<f64>,
        filters: &QueryFilters,
    ) -> Result<NavRoute, NavError> {
        let start_coord = self.volume.world_to_coordinates(start);
        let goal_coord = self.volume.world_to_coordinates(destination);
        self.find_cell_path(start_coord, goal_coord, filters)
    }

    /// Finds a path between two grid cells.
    ///
    /// Coordinates are clamped into the volume first. See
    /// [`find_path`](Self::find_path) for semantics.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NoPathFound`] when the frontier is exhausted
    /// without reaching the destination cell.
    pub fn find_cell_path(
        &self,
        start: GridCoord,
        goal: GridCoord,
        filters: &QueryFilters,
    ) -> Result<NavRoute, NavError> {
        let started = Instant::now();

        let start = self.volume.clamp_coordinates(start);
        let goal = self.volume.clamp_coordinates(goal);
        debug!(?start, ?goal, "starting path search");

        // Clamped coordinates always address a node.
        let (Some(start_index), Some(goal_index)) =
            (self.graph.index_of(start), self.graph.index_of(goal))
        else {
            return Err(NavError::NoPathFound { start, goal });
        };

        if start_index == goal_index {
            let path = NavPath::from_single(self.volume.coordinates_to_world(goal));
            let stats = SearchStats::new("astar").with_elapsed(started.elapsed());
            return Ok(NavRoute::new(path, stats));
        }

        let mut scratch = Scratch::new(self.graph.len());
        let mut open = BinaryHeap::new();
        let mut seq = 0u64;
        let mut nodes_expanded = 0usize;
        let mut oracle_queries = 0usize;
        let mut oracle_failures = 0usize;

        scratch.g_scores[start_index as usize] = 0.0;
        open.push(OpenEntry {
            f: euclidean_distance(start, goal),
            seq,
            index: start_index,
        });

        while let Some(entry) = open.pop() {
            let current = entry.index;
            if scratch.closed[current as usize] {
                // Stale duplicate left behind by a later improvement.
                continue;
            }
            scratch.closed[current as usize] = true;
            nodes_expanded += 1;

            if current == goal_index {
                let path = self.reconstruct(&scratch, start_index, goal_index);
                let stats = SearchStats::new("astar")
                    .with_nodes_expanded(nodes_expanded)
                    .with_oracle_queries(oracle_queries)
                    .with_oracle_failures(oracle_failures)
                    .with_elapsed(started.elapsed());
                debug!(
                    waypoints = path.len(),
                    nodes_expanded, oracle_queries, "path found"
                );
                return Ok(NavRoute::new(path, stats));
            }

            let current_coord = self.graph.coordinates_of(current);
            let current_g = scratch.g_scores[current as usize];

            for &neighbor in self.graph.neighbors(current) {
                if scratch.closed[neighbor as usize] {
                    continue;
                }
                let neighbor_coord = self.graph.coordinates_of(neighbor);
                let tentative_g = current_g + move_cost(current_coord, neighbor_coord);
                if tentative_g >= scratch.g_scores[neighbor as usize] {
                    continue;
                }

                // Obstruction is only checked when the route into a cell
                // improves, so unexplored cells cost no oracle queries.
                oracle_queries += 1;
                let region = self.cell_region(neighbor_coord);
                let obstructed = match self.oracle.is_obstructed(&region, filters) {
                    Ok(obstructed) => obstructed,
                    Err(error) => {
                        oracle_failures += 1;
                        warn!(
                            coord = ?neighbor_coord,
                            %error,
                            "traversability query failed, treating cell as obstructed"
                        );
                        true
                    }
                };
                if obstructed {
                    continue;
                }

                scratch.g_scores[neighbor as usize] = tentative_g;
                scratch.predecessors[neighbor as usize] = Some(current);
                seq += 1;
                open.push(OpenEntry {
                    f: tentative_g + euclidean_distance(neighbor_coord, goal),
                    seq,
                    index: neighbor,
                });
            }
        }

        debug!(?start, ?goal, nodes_expanded, "frontier exhausted");
        Err(NavError::NoPathFound { start, goal })
    }

    /// World-space bounds of one cell, for oracle queries.
    fn cell_region(&self, coord: GridCoord) -> Region {
        Region::from_center_half_extent(
            self.volume.coordinates_to_world(coord),
            self.volume.division_size() / 2.0,
        )
    }

    fn reconstruct(&self, scratch: &Scratch, start: NodeIndex, goal: NodeIndex) -> NavPath {
        let mut indices = vec![goal];
        let mut current = goal;
        while current != start {
            match scratch.predecessors[current as usize] {
                Some(previous) => {
                    indices.push(previous);
                    current = previous;
                }
                // Unreachable for a goal the search actually closed.
                None => break,
            }
        }
        indices.reverse();
        indices
            .into_iter()
            .map(|index| {
                self.volume
                    .coordinates_to_world(self.graph.coordinates_of(index))
            })
            .collect()
    }
}

/// Convenience function: one unfiltered search over a volume and graph.
///
/// # Errors
///
/// Returns [`NavError::NoPathFound`] when no path exists.
///
/// # Example
///
/// ```
/// use nav_pathfind::{find_path, NodeGraph, OpenSpace};
/// use nav_types::GraphConfig;
/// use vn_spatial::NavVolume;
/// use nalgebra::Point3;
///
/// let volume = NavVolume::new(4, 4, 4, 10.0).unwrap();
/// let graph = NodeGraph::build(&volume, GraphConfig::default()).unwrap();
///
/// let route = find_path(
///     &volume,
///     &graph,
///     &OpenSpace,
///     Point3::new(5.0, 5.0, 5.0),
///     Point3::new(35.0, 5.0, 5.0),
/// )
/// .unwrap();
/// assert_eq!(route.node_count(), 4);
/// ```
pub fn find_path<O: TraversabilityOracle>(
    volume: &NavVolume,
    graph: &NodeGraph,
    oracle: &O,
    start: Point3<f64>,
    destination: Point3<f64>,
) -> Result<NavRoute, NavError> {
    GridPathfinder::new(volume, graph, oracle)
        .find_path(start, destination, &QueryFilters::none())
}
