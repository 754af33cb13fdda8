//! A* path search over volumetric navigation grids.
//!
//! This crate turns a [`vn_spatial::NavVolume`] into a searchable graph
//! and answers world-space path queries against it:
//!
//! - [`NodeGraph`]: one node per cell, index-based adjacency, built once
//!   per volume and shared by every search
//! - [`GridPathfinder`]: per-query A* with all mutable state in a private
//!   scratch, so concurrent searches over one graph are safe
//! - [`TraversabilityOracle`]: the caller-supplied obstruction check,
//!   consulted lazily as the frontier advances
//! - [`Navigator`]: graph lifecycle (activate/deactivate) for hosts that
//!   load and unload volumes
//!
//! # Quick Start
//!
//! ```
//! use nav_pathfind::{GridPathfinder, NodeGraph, StaticObstacles};
//! use nav_types::{GraphConfig, QueryFilters};
//! use vn_spatial::{GridCoord, NavVolume};
//! use nalgebra::Point3;
//!
//! // A 5x5x1 volume of 100-unit cells with a short wall in the middle
//! let volume = NavVolume::new(5, 5, 1, 100.0).unwrap();
//! let graph = NodeGraph::build(&volume, GraphConfig::default()).unwrap();
//! let oracle = StaticObstacles::new(
//!     volume.clone(),
//!     (0..4).map(|y| GridCoord::new(2, y, 0)),
//! );
//!
//! let pathfinder = GridPathfinder::new(&volume, &graph, &oracle);
//! let route = pathfinder
//!     .find_path(
//!         Point3::new(50.0, 50.0, 50.0),
//!         Point3::new(450.0, 50.0, 50.0),
//!         &QueryFilters::none(),
//!     )
//!     .unwrap();
//!
//! // The route detours through the gap at the top of the wall
//! assert!(route.node_count() > 5);
//! ```
//!
//! # Obstruction Is a Query-Time Concern
//!
//! The graph encodes geometry only; edges exist wherever two cells are
//! neighbors under the configured topology. Whether an edge is usable is
//! decided during the search by the oracle, and only for cells the search
//! actually reaches with an improved route. A changing world therefore
//! needs no graph rebuild, but each individual search assumes the world
//! holds still while it runs.
//!
//! # Connectivity
//!
//! [`nav_types::GraphConfig::with_min_shared_axes`] selects the topology:
//!
//! | Threshold | Interior neighbors | Movement |
//! |-----------|--------------------|----------|
//! | 0 | 26 | free diagonal |
//! | 1 | 18 | no corner cuts |
//! | 2 | 6  | axis-aligned only |

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod astar;
pub mod graph;
pub mod heuristics;
pub mod navigator;
pub mod oracle;

// Re-export main types for convenience
pub use astar::{GridPathfinder, find_path};
pub use graph::{Node, NodeGraph, NodeIndex};
pub use navigator::Navigator;
pub use oracle::{OpenSpace, OracleError, StaticObstacles, TraversabilityOracle};
