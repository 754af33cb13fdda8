//! Grid coordinate type.

use nalgebra::{Point3, Vector3};

/// A discrete 3D coordinate in grid space.
///
/// Identifies one cell of a navigation volume. Coordinates are stored as
/// `i32` so intermediate neighbor arithmetic may step outside the volume;
/// validity against a concrete volume is checked by
/// [`NavVolume::coordinates_valid`](crate::NavVolume::coordinates_valid).
///
/// # Example
///
/// ```
/// use vn_spatial::GridCoord;
///
/// let coord = GridCoord::new(1, 2, 3);
/// assert_eq!(coord.x, 1);
/// assert_eq!(coord.as_tuple(), (1, 2, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    /// X coordinate (width axis).
    pub x: i32,
    /// Y coordinate (depth axis).
    pub y: i32,
    /// Z coordinate (height axis).
    pub z: i32,
}

impl GridCoord {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates a coordinate at the origin (0, 0, 0).
    ///
    /// # Example
    ///
    /// ```
    /// use vn_spatial::GridCoord;
    ///
    /// assert_eq!(GridCoord::origin(), GridCoord::new(0, 0, 0));
    /// ```
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the coordinate as a tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }

    /// Returns the coordinate as an array.
    #[must_use]
    pub const fn as_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts to a floating-point point (grid-cell units).
    ///
    /// # Example
    ///
    /// ```
    /// use vn_spatial::GridCoord;
    /// use nalgebra::Point3;
    ///
    /// assert_eq!(GridCoord::new(1, 2, 3).to_point(), Point3::new(1.0, 2.0, 3.0));
    /// ```
    #[must_use]
    pub fn to_point(self) -> Point3<f64> {
        Point3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// Converts to a floating-point vector (grid-cell units).
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// Returns this coordinate displaced by the given per-axis offsets.
    ///
    /// # Example
    ///
    /// ```
    /// use vn_spatial::GridCoord;
    ///
    /// let coord = GridCoord::new(5, 5, 5);
    /// assert_eq!(coord.offset(1, -1, 0), GridCoord::new(6, 4, 5));
    /// ```
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(
            self.x.wrapping_add(dx),
            self.y.wrapping_add(dy),
            self.z.wrapping_add(dz),
        )
    }

    /// Counts the axes on which two coordinates are equal.
    ///
    /// This is the neighbor-topology primitive: two distinct cells of the
    /// 3x3x3 neighborhood share 2 axes when face-adjacent, 1 when
    /// edge-adjacent, and 0 when corner-adjacent. The count is symmetric.
    ///
    /// # Example
    ///
    /// ```
    /// use vn_spatial::GridCoord;
    ///
    /// let node = GridCoord::new(1, 1, 1);
    /// assert_eq!(node.shared_axes(GridCoord::new(2, 1, 1)), 2); // face
    /// assert_eq!(node.shared_axes(GridCoord::new(2, 2, 1)), 1); // edge
    /// assert_eq!(node.shared_axes(GridCoord::new(2, 2, 2)), 0); // corner
    /// assert_eq!(node.shared_axes(node), 3);
    /// ```
    #[must_use]
    pub const fn shared_axes(self, other: Self) -> u8 {
        (self.x == other.x) as u8 + (self.y == other.y) as u8 + (self.z == other.z) as u8
    }
}

impl From<(i32, i32, i32)> for GridCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for GridCoord {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<GridCoord> for (i32, i32, i32) {
    fn from(coord: GridCoord) -> Self {
        coord.as_tuple()
    }
}

impl std::ops::Add for GridCoord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_add(other.x),
            self.y.wrapping_add(other.y),
            self.z.wrapping_add(other.z),
        )
    }
}

impl std::ops::Sub for GridCoord {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(other.x),
            self.y.wrapping_sub(other.y),
            self.z.wrapping_sub(other.z),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let coord = GridCoord::new(1, 2, 3);
        assert_eq!(coord.x, 1);
        assert_eq!(coord.y, 2);
        assert_eq!(coord.z, 3);
    }

    #[test]
    fn test_origin() {
        assert_eq!(GridCoord::origin(), GridCoord::new(0, 0, 0));
    }

    #[test]
    fn test_as_tuple_and_array() {
        let coord = GridCoord::new(1, 2, 3);
        assert_eq!(coord.as_tuple(), (1, 2, 3));
        assert_eq!(coord.as_array(), [1, 2, 3]);
    }

    #[test]
    fn test_to_point() {
        let point = GridCoord::new(1, 2, 3).to_point();
        assert_eq!(point, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_to_vector() {
        let vec = GridCoord::new(1, 2, 3).to_vector();
        assert_eq!(vec, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_offset() {
        let coord = GridCoord::new(5, 5, 5);
        assert_eq!(coord.offset(1, 0, -1), GridCoord::new(6, 5, 4));
    }

    #[test]
    fn test_shared_axes_face() {
        let node = GridCoord::new(1, 1, 1);
        assert_eq!(node.shared_axes(GridCoord::new(0, 1, 1)), 2);
        assert_eq!(node.shared_axes(GridCoord::new(1, 2, 1)), 2);
        assert_eq!(node.shared_axes(GridCoord::new(1, 1, 0)), 2);
    }

    #[test]
    fn test_shared_axes_edge_and_corner() {
        let node = GridCoord::new(1, 1, 1);
        assert_eq!(node.shared_axes(GridCoord::new(0, 0, 1)), 1);
        assert_eq!(node.shared_axes(GridCoord::new(0, 0, 0)), 0);
    }

    #[test]
    fn test_shared_axes_symmetric() {
        let a = GridCoord::new(3, 4, 5);
        let b = GridCoord::new(3, 5, 4);
        assert_eq!(a.shared_axes(b), b.shared_axes(a));
    }

    #[test]
    fn test_add_sub_operators() {
        let a = GridCoord::new(1, 2, 3);
        let b = GridCoord::new(4, 5, 6);
        assert_eq!(a + b, GridCoord::new(5, 7, 9));
        assert_eq!(b - a, GridCoord::new(3, 3, 3));
    }

    #[test]
    fn test_from_conversions() {
        let from_tuple: GridCoord = (1, 2, 3).into();
        let from_array: GridCoord = [1, 2, 3].into();
        assert_eq!(from_tuple, from_array);

        let tuple: (i32, i32, i32) = from_tuple.into();
        assert_eq!(tuple, (1, 2, 3));
    }

    #[test]
    fn test_hash_distinct() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(GridCoord::new(1, 2, 3));
        set.insert(GridCoord::new(1, 2, 3));
        set.insert(GridCoord::new(3, 2, 1));
        assert_eq!(set.len(), 2);
    }
}
