//! World-space query regions.

use nalgebra::{Point3, Vector3};

/// An axis-aligned world-space box, described by center and half-extents.
///
/// This is the shape handed to the traversability oracle: the search asks
/// whether the region around a cell's world center is obstructed. The
/// center/half-extent form matches how the query is issued (cell center,
/// half the division size on each axis).
///
/// # Example
///
/// ```
/// use vn_spatial::Region;
/// use nalgebra::Point3;
///
/// let region = Region::from_center_half_extent(Point3::new(50.0, 50.0, 50.0), 50.0);
/// assert_eq!(region.min(), Point3::new(0.0, 0.0, 0.0));
/// assert_eq!(region.max(), Point3::new(100.0, 100.0, 100.0));
/// assert!(region.contains(&Point3::new(25.0, 75.0, 50.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    center: Point3<f64>,
    half_extents: Vector3<f64>,
}

impl Region {
    /// Creates a region from a center and a uniform half-extent.
    #[must_use]
    pub fn from_center_half_extent(center: Point3<f64>, half_extent: f64) -> Self {
        Self {
            center,
            half_extents: Vector3::new(half_extent, half_extent, half_extent),
        }
    }

    /// Creates a region from a center and per-axis half-extents.
    #[must_use]
    pub const fn from_center_half_extents(center: Point3<f64>, half_extents: Vector3<f64>) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Returns the center of the region.
    #[must_use]
    pub const fn center(&self) -> Point3<f64> {
        self.center
    }

    /// Returns the per-axis half-extents.
    #[must_use]
    pub const fn half_extents(&self) -> Vector3<f64> {
        self.half_extents
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Point3<f64> {
        self.center - self.half_extents
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Point3<f64> {
        self.center + self.half_extents
    }

    /// Checks whether a point lies inside the region (bounds inclusive).
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x
            && point.x <= max.x
            && point.y >= min.y
            && point.y <= max.y
            && point.z >= min.z
            && point.z <= max.z
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_half_extent() {
        let region = Region::from_center_half_extent(Point3::new(1.0, 2.0, 3.0), 0.5);
        assert_eq!(region.center(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(region.half_extents(), Vector3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_min_max() {
        let region = Region::from_center_half_extent(Point3::new(50.0, 50.0, 50.0), 50.0);
        assert_relative_eq!(region.min().x, 0.0);
        assert_relative_eq!(region.max().z, 100.0);
    }

    #[test]
    fn test_contains() {
        let region = Region::from_center_half_extent(Point3::origin(), 1.0);
        assert!(region.contains(&Point3::new(0.5, -0.5, 1.0)));
        assert!(!region.contains(&Point3::new(1.5, 0.0, 0.0)));
    }

    #[test]
    fn test_per_axis_half_extents() {
        let region = Region::from_center_half_extents(
            Point3::origin(),
            Vector3::new(1.0, 2.0, 3.0),
        );
        assert!(region.contains(&Point3::new(0.0, 1.5, 2.5)));
        assert!(!region.contains(&Point3::new(0.0, 2.5, 0.0)));
    }
}
