//! Graph topology configuration.

use crate::error::NavError;

/// Configuration for node graph construction.
///
/// The single knob is `min_shared_axes`: how many coordinate axes a cell
/// in the 3x3x3 neighborhood must share with the node for it to count as a
/// neighbor.
///
/// | `min_shared_axes` | Interior neighbors | Topology |
/// |-------------------|--------------------|----------|
/// | 0 | 26 | full cube (face + edge + corner) |
/// | 1 | 18 | face + edge (no pure diagonals) |
/// | 2 | 6  | face-adjacent only |
///
/// # Example
///
/// ```
/// use nav_types::GraphConfig;
///
/// let config = GraphConfig::default().with_min_shared_axes(2);
/// assert_eq!(config.min_shared_axes(), 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphConfig {
    min_shared_axes: u8,
}

impl GraphConfig {
    /// Creates a configuration with full 26-neighbor connectivity.
    #[must_use]
    pub const fn new() -> Self {
        Self { min_shared_axes: 0 }
    }

    /// Sets the minimum number of shared axes required of a neighbor.
    ///
    /// Valid values are 0, 1, or 2; anything larger is rejected by
    /// [`validate`](Self::validate) at graph-build time.
    #[must_use]
    pub const fn with_min_shared_axes(mut self, min_shared_axes: u8) -> Self {
        self.min_shared_axes = min_shared_axes;
        self
    }

    /// Returns the minimum shared-axes threshold.
    #[must_use]
    pub const fn min_shared_axes(&self) -> u8 {
        self.min_shared_axes
    }

    /// Checks the configuration for validity.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfiguration`] if `min_shared_axes`
    /// exceeds 2 (a threshold of 3 would reject every candidate, since no
    /// distinct cell shares all three axes).
    pub fn validate(&self) -> Result<(), NavError> {
        if self.min_shared_axes > 2 {
            return Err(NavError::invalid_configuration(format!(
                "min_shared_axes must be in [0, 2], got {}",
                self.min_shared_axes
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full_connectivity() {
        assert_eq!(GraphConfig::default().min_shared_axes(), 0);
    }

    #[test]
    fn test_builder() {
        let config = GraphConfig::new().with_min_shared_axes(1);
        assert_eq!(config.min_shared_axes(), 1);
    }

    #[test]
    fn test_validate_accepts_range() {
        for axes in 0..=2 {
            assert!(GraphConfig::new().with_min_shared_axes(axes).validate().is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_above_two() {
        let result = GraphConfig::new().with_min_shared_axes(3).validate();
        assert!(matches!(result, Err(NavError::InvalidConfiguration(_))));
    }
}
