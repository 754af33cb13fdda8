//! The node graph: a dense arena of cells and their adjacency.
//!
//! One node exists per cell of the volume, stored in linear-index order.
//! Adjacency is stored as node indices rather than references, so the graph
//! is a plain immutable value that many searches can borrow concurrently.
//!
//! The graph encodes geometry only. Obstruction is a query-time concern and
//! never influences which edges exist.

use nav_types::{GraphConfig, NavError};
use vn_spatial::{GridCoord, NavVolume};

/// Index of a node within its graph.
pub type NodeIndex = u32;

/// One cell of the volume plus the indices of its neighbors.
#[derive(Debug, Clone)]
pub struct Node {
    coordinates: GridCoord,
    neighbors: Vec<NodeIndex>,
}

impl Node {
    /// Returns the grid coordinates of this node's cell.
    #[must_use]
    pub const fn coordinates(&self) -> GridCoord {
        self.coordinates
    }

    /// Returns the indices of this node's neighbors.
    #[must_use]
    pub fn neighbors(&self) -> &[NodeIndex] {
        &self.neighbors
    }
}

/// An immutable adjacency graph over every cell of a volume.
///
/// # Example
///
/// ```
/// use nav_pathfind::NodeGraph;
/// use nav_types::GraphConfig;
/// use vn_spatial::{GridCoord, NavVolume};
///
/// let volume = NavVolume::new(3, 3, 3, 100.0).unwrap();
/// let graph = NodeGraph::build(&volume, GraphConfig::default()).unwrap();
///
/// assert_eq!(graph.len(), 27);
/// // The center cell touches every other cell under full connectivity
/// let center = graph.index_of(GridCoord::new(1, 1, 1)).unwrap();
/// assert_eq!(graph.neighbors(center).len(), 26);
/// ```
#[derive(Debug, Clone)]
pub struct NodeGraph {
    nodes: Vec<Node>,
    config: GraphConfig,
    divisions: (u32, u32, u32),
}

impl NodeGraph {
    /// Builds the graph for every cell of `volume` under `config`.
    ///
    /// Each node's candidate neighbors are the (up to 26) cells of its
    /// 3x3x3 neighborhood that lie inside the volume; a candidate becomes a
    /// neighbor when it shares at least `config.min_shared_axes()` axes
    /// with the node. The resulting adjacency is symmetric.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfiguration`] if the configuration is
    /// invalid or the volume has more cells than a node index can address.
    pub fn build(volume: &NavVolume, config: GraphConfig) -> Result<Self, NavError> {
        config.validate()?;

        let total = volume.total_divisions();
        if u32::try_from(total).is_err() {
            return Err(NavError::invalid_configuration(format!(
                "volume has {total} cells, exceeding the node index limit"
            )));
        }

        let mut nodes = Vec::with_capacity(total);
        for index in 0..total {
            let coordinates = volume.coordinates_of_index(index);
            let mut neighbors = Vec::new();
            for dz in -1..=1 {
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if dx == 0 && dy == 0 && dz == 0 {
                            continue;
                        }
                        let candidate = coordinates.offset(dx, dy, dz);
                        if !volume.coordinates_valid(candidate) {
                            continue;
                        }
                        if coordinates.shared_axes(candidate) < config.min_shared_axes() {
                            continue;
                        }
                        #[allow(clippy::cast_possible_truncation)]
                        neighbors.push(volume.linear_index(candidate) as NodeIndex);
                    }
                }
            }
            nodes.push(Node {
                coordinates,
                neighbors,
            });
        }

        Ok(Self {
            nodes,
            config,
            divisions: (
                volume.divisions_x(),
                volume.divisions_y(),
                volume.divisions_z(),
            ),
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the configuration the graph was built with.
    #[must_use]
    pub const fn config(&self) -> GraphConfig {
        self.config
    }

    /// Returns the node at `index`, if in bounds.
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index as usize)
    }

    /// Returns the grid coordinates of the node at `index`.
    ///
    /// Out-of-bounds indices yield the origin; indices produced by this
    /// graph are always in bounds.
    #[must_use]
    pub fn coordinates_of(&self, index: NodeIndex) -> GridCoord {
        self.nodes
            .get(index as usize)
            .map_or_else(GridCoord::origin, |node| node.coordinates)
    }

    /// Returns the neighbor indices of the node at `index`.
    #[must_use]
    pub fn neighbors(&self, index: NodeIndex) -> &[NodeIndex] {
        self.nodes
            .get(index as usize)
            .map_or(&[], |node| node.neighbors.as_slice())
    }

    /// Returns the index of the node at `coord`, if the coordinate is valid.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn index_of(&self, coord: GridCoord) -> Option<NodeIndex> {
        let (dx, dy, dz) = self.divisions;
        let valid = coord.x >= 0
            && (coord.x as u32) < dx
            && coord.y >= 0
            && (coord.y as u32) < dy
            && coord.z >= 0
            && (coord.z as u32) < dz;
        if !valid {
            return None;
        }
        let dx = dx as usize;
        let dy = dy as usize;
        let index = (coord.z as usize * dx * dy) + (coord.y as usize * dx) + coord.x as usize;
        Some(index as NodeIndex)
    }

    /// Returns an iterator over all nodes in linear-index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a NodeGraph {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
