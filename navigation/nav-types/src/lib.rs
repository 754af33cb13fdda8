//! Domain types for volumetric grid pathfinding.
//!
//! This crate defines the vocabulary shared by graph construction and path
//! search:
//!
//! - [`GraphConfig`] - Neighbor topology configuration
//! - [`QueryFilters`] - Opaque filter payload forwarded to spatial queries
//! - [`NavPath`] - An ordered sequence of world-space waypoints
//! - [`NavRoute`] / [`SearchStats`] - A found path plus how it was found
//! - [`NavError`] - Everything that can go wrong
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with no engine dependencies; it builds on
//! [`vn_spatial`] for coordinates and nothing else.
//!
//! # Example
//!
//! ```
//! use nav_types::{GraphConfig, QueryFilters};
//!
//! let config = GraphConfig::default().with_min_shared_axes(1);
//! assert!(config.validate().is_ok());
//!
//! let filters = QueryFilters::none().with_object_type("WorldStatic");
//! assert_eq!(filters.object_types().len(), 1);
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

mod config;
mod error;
mod filter;
mod path;
mod route;

pub use config::GraphConfig;
pub use error::NavError;
pub use filter::{ActorClassFilter, ObjectTypeTag, QueryFilters};
pub use path::NavPath;
pub use route::{NavRoute, SearchStats};

// Re-export the spatial foundation so downstream crates need only one import
pub use vn_spatial::{GridCoord, NavVolume, Region, SpatialError};
