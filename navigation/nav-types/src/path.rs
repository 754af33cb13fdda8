//! World-space waypoint paths.

use nalgebra::Point3;

/// An ordered sequence of world-space waypoints.
///
/// The first point corresponds to the cell containing the query start, the
/// last to the cell containing the destination. Consecutive points are
/// centers of adjacent grid cells.
///
/// # Example
///
/// ```
/// use nav_types::NavPath;
/// use nalgebra::Point3;
///
/// let path = NavPath::new(vec![
///     Point3::new(50.0, 50.0, 50.0),
///     Point3::new(150.0, 50.0, 50.0),
///     Point3::new(250.0, 50.0, 50.0),
/// ]);
///
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.length(), 200.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavPath {
    points: Vec<Point3<f64>>,
}

impl NavPath {
    /// Creates a path from a sequence of waypoints.
    #[must_use]
    pub const fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }

    /// Creates a degenerate single-point path.
    ///
    /// Returned when start and destination fall in the same cell.
    #[must_use]
    pub fn from_single(point: Point3<f64>) -> Self {
        Self {
            points: vec![point],
        }
    }

    /// Returns the number of waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no waypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the waypoints as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Returns the first waypoint, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point3<f64>> {
        self.points.first()
    }

    /// Returns the last waypoint, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point3<f64>> {
        self.points.last()
    }

    /// Returns the waypoint at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point3<f64>> {
        self.points.get(index)
    }

    /// Returns an iterator over the waypoints.
    pub fn iter(&self) -> std::slice::Iter<'_, Point3<f64>> {
        self.points.iter()
    }

    /// Returns an iterator over consecutive waypoint pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&Point3<f64>, &Point3<f64>)> {
        self.points.iter().zip(self.points.iter().skip(1))
    }

    /// Returns the total Euclidean length of the path.
    ///
    /// Zero for empty and single-point paths.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| (b - a).norm()).sum()
    }

    /// Consumes the path, returning its waypoints.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3<f64>> {
        self.points
    }
}

impl IntoIterator for NavPath {
    type Item = Point3<f64>;
    type IntoIter = std::vec::IntoIter<Point3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a NavPath {
    type Item = &'a Point3<f64>;
    type IntoIter = std::slice::Iter<'a, Point3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<Point3<f64>> for NavPath {
    fn from_iter<I: IntoIterator<Item = Point3<f64>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn straight_path() -> NavPath {
        NavPath::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ])
    }

    #[test]
    fn test_empty_path() {
        let path = NavPath::default();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert!(path.first().is_none());
        assert!(path.last().is_none());
        assert_eq!(path.length(), 0.0);
    }

    #[test]
    fn test_from_single() {
        let path = NavPath::from_single(Point3::new(5.0, 5.0, 5.0));
        assert_eq!(path.len(), 1);
        assert_eq!(path.first(), path.last());
        assert_eq!(path.length(), 0.0);
    }

    #[test]
    fn test_endpoints() {
        let path = straight_path();
        assert_eq!(path.first().unwrap(), &Point3::new(0.0, 0.0, 0.0));
        assert_eq!(path.last().unwrap(), &Point3::new(2.0, 0.0, 0.0));
        assert_eq!(path.get(1).unwrap(), &Point3::new(1.0, 0.0, 0.0));
        assert!(path.get(3).is_none());
    }

    #[test]
    fn test_length() {
        assert_relative_eq!(straight_path().length(), 2.0);

        let diagonal = NavPath::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        ]);
        assert_relative_eq!(diagonal.length(), 3.0_f64.sqrt());
    }

    #[test]
    fn test_segments() {
        let segments: Vec<_> = straight_path()
            .segments()
            .map(|(a, b)| (*a, *b))
            .collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].1, segments[1].0);
    }

    #[test]
    fn test_iteration() {
        let path = straight_path();
        assert_eq!(path.iter().count(), 3);
        assert_eq!((&path).into_iter().count(), 3);

        let collected: NavPath = path.clone().into_iter().collect();
        assert_eq!(collected, path);
    }
}
