//! Spatial foundation for VolNav navigation volumes.
//!
//! This crate provides the coordinate math underneath the pathfinding
//! stack:
//!
//! - [`GridCoord`] - Integer cell coordinates
//! - [`NavVolume`] - A placed volumetric grid with world/grid conversion
//! - [`Region`] - Axis-aligned world-space query boxes
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with no engine dependencies. It can be used in
//! CLI tools, servers, WASM, or embedded alongside any host engine.
//!
//! # Coordinate Systems
//!
//! World coordinates are continuous `f64` points. Grid coordinates are
//! discrete `i32` triples addressing cells of a volume. The [`NavVolume`]
//! converts between the two through its placement isometry; conversions
//! are total and clamp rather than fail.
//!
//! # Example
//!
//! ```
//! use vn_spatial::{GridCoord, NavVolume};
//! use nalgebra::Point3;
//!
//! // A 10x10x10 volume of 100-unit cells at the world origin
//! let volume = NavVolume::new(10, 10, 10, 100.0).unwrap();
//!
//! let coord = volume.world_to_coordinates(Point3::new(250.0, 30.0, 999.0));
//! assert_eq!(coord, GridCoord::new(2, 0, 9));
//!
//! // The reverse conversion lands on the cell center
//! let center = volume.coordinates_to_world(coord);
//! assert_eq!(volume.world_to_coordinates(center), coord);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod coord;
mod error;
mod region;
mod volume;

pub use coord::GridCoord;
pub use error::SpatialError;
pub use region::Region;
pub use volume::NavVolume;

// Re-export nalgebra types for convenience
pub use nalgebra::{Isometry3, Point3, Vector3};
