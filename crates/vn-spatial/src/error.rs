//! Error types for volume construction.

/// Errors that can occur while describing a navigation volume.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpatialError {
    /// Every axis of the grid must have at least one division.
    #[error("invalid division counts: {x}x{y}x{z} (all axes must be >= 1)")]
    InvalidDivisions {
        /// Divisions along the X axis.
        x: u32,
        /// Divisions along the Y axis.
        y: u32,
        /// Divisions along the Z axis.
        z: u32,
    },

    /// The division size must be positive and finite.
    #[error("division size must be positive and finite, got {0}")]
    InvalidDivisionSize(f64),
}
