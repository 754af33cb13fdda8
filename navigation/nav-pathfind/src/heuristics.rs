//! Distance functions for grid search.
//!
//! All distances are measured in cell units; multiply by the volume's
//! division size to get world units. Euclidean distance is admissible for
//! every supported connectivity (6, 18, and 26 neighbors), so it is the
//! heuristic and the edge cost used by the search.

use vn_spatial::GridCoord;

/// Euclidean distance between two grid cells, in cell units.
///
/// For adjacent cells this yields 1 for face neighbors, sqrt(2) for edge
/// neighbors, and sqrt(3) for corner neighbors.
///
/// # Example
///
/// ```
/// use nav_pathfind::heuristics::euclidean_distance;
/// use vn_spatial::GridCoord;
///
/// let a = GridCoord::new(0, 0, 0);
/// assert_eq!(euclidean_distance(a, GridCoord::new(3, 4, 0)), 5.0);
/// assert_eq!(euclidean_distance(a, a), 0.0);
/// ```
#[must_use]
pub fn euclidean_distance(a: GridCoord, b: GridCoord) -> f64 {
    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    let dz = f64::from(b.z - a.z);
    dz.mul_add(dz, dx.mul_add(dx, dy * dy)).sqrt()
}

/// Cost of traversing one graph edge, in cell units.
///
/// Edges only connect cells in each other's 3x3x3 neighborhood, so this is
/// always 1, sqrt(2), or sqrt(3).
#[must_use]
pub fn move_cost(from: GridCoord, to: GridCoord) -> f64 {
    euclidean_distance(from, to)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_distance() {
        let coord = GridCoord::new(7, -3, 2);
        assert_eq!(euclidean_distance(coord, coord), 0.0);
    }

    #[test]
    fn test_axis_distance() {
        let a = GridCoord::new(0, 0, 0);
        assert_eq!(euclidean_distance(a, GridCoord::new(5, 0, 0)), 5.0);
        assert_eq!(euclidean_distance(a, GridCoord::new(0, 0, -5)), 5.0);
    }

    #[test]
    fn test_neighbor_costs() {
        let a = GridCoord::new(1, 1, 1);
        assert_relative_eq!(move_cost(a, GridCoord::new(2, 1, 1)), 1.0);
        assert_relative_eq!(move_cost(a, GridCoord::new(2, 2, 1)), 2.0_f64.sqrt());
        assert_relative_eq!(move_cost(a, GridCoord::new(2, 2, 2)), 3.0_f64.sqrt());
    }

    #[test]
    fn test_symmetry() {
        let a = GridCoord::new(-4, 9, 1);
        let b = GridCoord::new(3, -2, 8);
        assert_relative_eq!(euclidean_distance(a, b), euclidean_distance(b, a));
    }
}
