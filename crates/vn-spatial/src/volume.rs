//! The navigation volume: world/grid coordinate conversion.

use nalgebra::{Isometry3, Point3};

use crate::coord::GridCoord;
use crate::error::SpatialError;

/// A volumetric grid placed in world space.
///
/// The volume is a `divisions_x` x `divisions_y` x `divisions_z` lattice of
/// cubic cells, each `division_size` world units on a side. A placement
/// isometry (position + rotation) maps grid-local space to world space;
/// grid-local coordinates start at the volume's minimum corner.
///
/// All conversion routines are total: world points outside the volume clamp
/// to the nearest boundary cell, and out-of-range coordinates clamp before
/// use. Clamping is idempotent.
///
/// # Example
///
/// ```
/// use vn_spatial::{GridCoord, NavVolume};
/// use nalgebra::Point3;
///
/// let volume = NavVolume::new(10, 10, 10, 100.0).unwrap();
///
/// // Cell (0,0,0) spans [0,100)^3; its center is at 50 on each axis
/// let center = volume.coordinates_to_world(GridCoord::origin());
/// assert_eq!(center, Point3::new(50.0, 50.0, 50.0));
///
/// // Round trips through the cell center are stable
/// assert_eq!(volume.world_to_coordinates(center), GridCoord::origin());
///
/// // Out-of-volume points clamp to the nearest boundary cell
/// let far = Point3::new(1e6, -1e6, 500.0);
/// assert_eq!(volume.world_to_coordinates(far), GridCoord::new(9, 0, 5));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavVolume {
    divisions: (u32, u32, u32),
    division_size: f64,
    placement: Isometry3<f64>,
}

impl NavVolume {
    /// Creates a volume at the world origin with identity rotation.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::InvalidDivisions`] if any axis has zero
    /// divisions, or [`SpatialError::InvalidDivisionSize`] if the division
    /// size is not positive and finite.
    ///
    /// # Example
    ///
    /// ```
    /// use vn_spatial::{NavVolume, SpatialError};
    ///
    /// assert!(NavVolume::new(10, 10, 10, 100.0).is_ok());
    /// assert!(matches!(
    ///     NavVolume::new(0, 10, 10, 100.0),
    ///     Err(SpatialError::InvalidDivisions { .. })
    /// ));
    /// assert!(matches!(
    ///     NavVolume::new(10, 10, 10, -1.0),
    ///     Err(SpatialError::InvalidDivisionSize(_))
    /// ));
    /// ```
    pub fn new(
        divisions_x: u32,
        divisions_y: u32,
        divisions_z: u32,
        division_size: f64,
    ) -> Result<Self, SpatialError> {
        if divisions_x == 0 || divisions_y == 0 || divisions_z == 0 {
            return Err(SpatialError::InvalidDivisions {
                x: divisions_x,
                y: divisions_y,
                z: divisions_z,
            });
        }
        if division_size <= 0.0 || !division_size.is_finite() {
            return Err(SpatialError::InvalidDivisionSize(division_size));
        }
        Ok(Self {
            divisions: (divisions_x, divisions_y, divisions_z),
            division_size,
            placement: Isometry3::identity(),
        })
    }

    /// Sets the placement transform (grid-local to world).
    ///
    /// # Example
    ///
    /// ```
    /// use vn_spatial::{GridCoord, NavVolume};
    /// use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion};
    ///
    /// let placement = Isometry3::from_parts(
    ///     Translation3::new(1000.0, 0.0, 0.0),
    ///     UnitQuaternion::identity(),
    /// );
    /// let volume = NavVolume::new(4, 4, 4, 10.0).unwrap().with_placement(placement);
    ///
    /// let center = volume.coordinates_to_world(GridCoord::origin());
    /// assert_eq!(center, Point3::new(1005.0, 5.0, 5.0));
    /// ```
    #[must_use]
    pub fn with_placement(mut self, placement: Isometry3<f64>) -> Self {
        self.placement = placement;
        self
    }

    /// Returns the divisions along the X axis.
    #[must_use]
    pub const fn divisions_x(&self) -> u32 {
        self.divisions.0
    }

    /// Returns the divisions along the Y axis.
    #[must_use]
    pub const fn divisions_y(&self) -> u32 {
        self.divisions.1
    }

    /// Returns the divisions along the Z axis.
    #[must_use]
    pub const fn divisions_z(&self) -> u32 {
        self.divisions.2
    }

    /// Returns the world-space edge length of one cell.
    #[must_use]
    pub const fn division_size(&self) -> f64 {
        self.division_size
    }

    /// Returns the placement transform.
    #[must_use]
    pub const fn placement(&self) -> &Isometry3<f64> {
        &self.placement
    }

    /// Returns the total number of cells in the volume.
    ///
    /// # Example
    ///
    /// ```
    /// use vn_spatial::NavVolume;
    ///
    /// let volume = NavVolume::new(3, 4, 5, 1.0).unwrap();
    /// assert_eq!(volume.total_divisions(), 60);
    /// ```
    #[must_use]
    pub const fn total_divisions(&self) -> usize {
        self.divisions.0 as usize * self.divisions.1 as usize * self.divisions.2 as usize
    }

    /// Returns the grid extent along the X axis in world units.
    #[must_use]
    pub fn grid_size_x(&self) -> f64 {
        f64::from(self.divisions.0) * self.division_size
    }

    /// Returns the grid extent along the Y axis in world units.
    #[must_use]
    pub fn grid_size_y(&self) -> f64 {
        f64::from(self.divisions.1) * self.division_size
    }

    /// Returns the grid extent along the Z axis in world units.
    #[must_use]
    pub fn grid_size_z(&self) -> f64 {
        f64::from(self.divisions.2) * self.division_size
    }

    /// Checks whether a coordinate addresses a cell of this volume.
    #[must_use]
    pub fn coordinates_valid(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && (coord.x as u32) < self.divisions.0
            && coord.y >= 0
            && (coord.y as u32) < self.divisions.1
            && coord.z >= 0
            && (coord.z as u32) < self.divisions.2
    }

    /// Clamps a coordinate into the valid range on every axis.
    ///
    /// Idempotent: clamping a valid coordinate is a no-op.
    ///
    /// # Example
    ///
    /// ```
    /// use vn_spatial::{GridCoord, NavVolume};
    ///
    /// let volume = NavVolume::new(10, 10, 10, 1.0).unwrap();
    /// assert_eq!(
    ///     volume.clamp_coordinates(GridCoord::new(-3, 4, 99)),
    ///     GridCoord::new(0, 4, 9)
    /// );
    /// ```
    #[must_use]
    pub fn clamp_coordinates(&self, coord: GridCoord) -> GridCoord {
        GridCoord::new(
            coord.x.clamp(0, self.axis_max(self.divisions.0)),
            coord.y.clamp(0, self.axis_max(self.divisions.1)),
            coord.z.clamp(0, self.axis_max(self.divisions.2)),
        )
    }

    fn axis_max(&self, divisions: u32) -> i32 {
        i32::try_from(divisions - 1).unwrap_or(i32::MAX)
    }

    /// Converts a world-space location to a grid coordinate.
    ///
    /// The location is taken through the inverse placement transform into
    /// grid-local space, scaled into fractional cell indices, truncated
    /// toward zero per axis, and clamped. Out-of-volume input is never an
    /// error; it resolves to the nearest boundary cell.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn world_to_coordinates(&self, location: Point3<f64>) -> GridCoord {
        let local = self.placement.inverse_transform_point(&location);
        // Truncation toward zero is intentional: cell c covers
        // [c * size, (c + 1) * size) in grid-local space.
        let coord = GridCoord::new(
            (local.x / self.division_size) as i32,
            (local.y / self.division_size) as i32,
            (local.z / self.division_size) as i32,
        );
        self.clamp_coordinates(coord)
    }

    /// Converts a grid coordinate to the world-space center of its cell.
    ///
    /// The input is clamped first. The result is always a cell interior
    /// point (the center, never a boundary), so feeding it back through
    /// [`world_to_coordinates`](Self::world_to_coordinates) returns the
    /// same coordinate.
    #[must_use]
    pub fn coordinates_to_world(&self, coord: GridCoord) -> Point3<f64> {
        let clamped = self.clamp_coordinates(coord);
        let half = self.division_size * 0.5;
        let local = Point3::new(
            f64::from(clamped.x).mul_add(self.division_size, half),
            f64::from(clamped.y).mul_add(self.division_size, half),
            f64::from(clamped.z).mul_add(self.division_size, half),
        );
        self.placement * local
    }

    /// Returns the linear index of a cell: `z * dx * dy + y * dx + x`.
    ///
    /// The coordinate is clamped first, so the result always addresses a
    /// cell of this volume.
    #[must_use]
    pub fn linear_index(&self, coord: GridCoord) -> usize {
        let clamped = self.clamp_coordinates(coord);
        let dx = self.divisions.0 as usize;
        let dy = self.divisions.1 as usize;
        (clamped.z as usize * dx * dy) + (clamped.y as usize * dx) + clamped.x as usize
    }

    /// Returns the coordinate addressed by a linear index.
    ///
    /// Inverse of [`linear_index`](Self::linear_index) for indices below
    /// [`total_divisions`](Self::total_divisions).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn coordinates_of_index(&self, index: usize) -> GridCoord {
        let dx = self.divisions.0 as usize;
        let dy = self.divisions.1 as usize;
        let per_level = dx * dy;
        GridCoord::new(
            (index % dx) as i32,
            ((index % per_level) / dx) as i32,
            (index / per_level) as i32,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Translation3, UnitQuaternion, Vector3};

    fn volume() -> NavVolume {
        NavVolume::new(10, 10, 10, 100.0).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let volume = volume();
        assert_eq!(volume.divisions_x(), 10);
        assert_eq!(volume.division_size(), 100.0);
        assert_eq!(volume.total_divisions(), 1000);
    }

    #[test]
    fn test_new_zero_divisions() {
        for (x, y, z) in [(0, 5, 5), (5, 0, 5), (5, 5, 0)] {
            let result = NavVolume::new(x, y, z, 1.0);
            assert!(matches!(result, Err(SpatialError::InvalidDivisions { .. })));
        }
    }

    #[test]
    fn test_new_bad_division_size() {
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = NavVolume::new(5, 5, 5, size);
            assert!(matches!(result, Err(SpatialError::InvalidDivisionSize(_))));
        }
    }

    #[test]
    fn test_grid_sizes() {
        let volume = NavVolume::new(2, 3, 4, 10.0).unwrap();
        assert_relative_eq!(volume.grid_size_x(), 20.0);
        assert_relative_eq!(volume.grid_size_y(), 30.0);
        assert_relative_eq!(volume.grid_size_z(), 40.0);
    }

    #[test]
    fn test_coordinates_valid() {
        let volume = volume();
        assert!(volume.coordinates_valid(GridCoord::new(0, 0, 0)));
        assert!(volume.coordinates_valid(GridCoord::new(9, 9, 9)));
        assert!(!volume.coordinates_valid(GridCoord::new(10, 0, 0)));
        assert!(!volume.coordinates_valid(GridCoord::new(0, -1, 0)));
    }

    #[test]
    fn test_clamp_out_of_range() {
        let volume = volume();
        assert_eq!(
            volume.clamp_coordinates(GridCoord::new(-5, 12, 3)),
            GridCoord::new(0, 9, 3)
        );
    }

    #[test]
    fn test_clamp_idempotent() {
        let volume = volume();
        for coord in [
            GridCoord::new(-100, 50, 5),
            GridCoord::new(3, 3, 3),
            GridCoord::new(9, 9, 9),
        ] {
            let once = volume.clamp_coordinates(coord);
            let twice = volume.clamp_coordinates(once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_coordinates_to_world_is_cell_center() {
        let volume = volume();
        let point = volume.coordinates_to_world(GridCoord::new(1, 2, 3));
        assert_relative_eq!(point.x, 150.0);
        assert_relative_eq!(point.y, 250.0);
        assert_relative_eq!(point.z, 350.0);
    }

    #[test]
    fn test_world_to_coordinates_truncates() {
        let volume = volume();
        assert_eq!(
            volume.world_to_coordinates(Point3::new(99.9, 100.0, 199.9)),
            GridCoord::new(0, 1, 1)
        );
    }

    #[test]
    fn test_world_to_coordinates_clamps() {
        let volume = volume();
        assert_eq!(
            volume.world_to_coordinates(Point3::new(-50.0, 5000.0, 500.0)),
            GridCoord::new(0, 9, 5)
        );
    }

    #[test]
    fn test_round_trip_all_cells() {
        let volume = NavVolume::new(4, 4, 4, 7.5).unwrap();
        for z in 0..4 {
            for y in 0..4 {
                for x in 0..4 {
                    let coord = GridCoord::new(x, y, z);
                    let world = volume.coordinates_to_world(coord);
                    assert_eq!(volume.world_to_coordinates(world), coord);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_with_placement() {
        let placement = Isometry3::from_parts(
            Translation3::new(-300.0, 120.0, 45.0),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.7),
        );
        let volume = NavVolume::new(5, 5, 5, 20.0).unwrap().with_placement(placement);
        for coord in [
            GridCoord::new(0, 0, 0),
            GridCoord::new(2, 3, 1),
            GridCoord::new(4, 4, 4),
        ] {
            let world = volume.coordinates_to_world(coord);
            assert_eq!(volume.world_to_coordinates(world), coord);
        }
    }

    #[test]
    fn test_linear_index_layout() {
        let volume = NavVolume::new(3, 4, 5, 1.0).unwrap();
        assert_eq!(volume.linear_index(GridCoord::new(0, 0, 0)), 0);
        assert_eq!(volume.linear_index(GridCoord::new(1, 0, 0)), 1);
        assert_eq!(volume.linear_index(GridCoord::new(0, 1, 0)), 3);
        assert_eq!(volume.linear_index(GridCoord::new(0, 0, 1)), 12);
        assert_eq!(volume.linear_index(GridCoord::new(2, 3, 4)), 59);
    }

    #[test]
    fn test_index_round_trip() {
        let volume = NavVolume::new(3, 4, 5, 1.0).unwrap();
        for index in 0..volume.total_divisions() {
            let coord = volume.coordinates_of_index(index);
            assert!(volume.coordinates_valid(coord));
            assert_eq!(volume.linear_index(coord), index);
        }
    }

    #[test]
    fn test_index_collision_free() {
        use std::collections::HashSet;
        let volume = NavVolume::new(4, 3, 2, 1.0).unwrap();
        let mut seen = HashSet::new();
        for z in 0..2 {
            for y in 0..3 {
                for x in 0..4 {
                    assert!(seen.insert(volume.linear_index(GridCoord::new(x, y, z))));
                }
            }
        }
        assert_eq!(seen.len(), volume.total_divisions());
    }
}
