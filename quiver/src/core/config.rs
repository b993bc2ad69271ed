//! Construction-time configuration of mutable graphs.

/// Fixed properties and capacity hints of a mutable graph.
///
/// ```
/// use quiver::{core::{Config, SEdge, GraphBase}, storage::AdjacencyGraph};
///
/// let config = Config::default().parallel_edges(false).vertex_capacity(16);
/// let graph = AdjacencyGraph::<u32, SEdge<u32>>::with_config(config);
///
/// assert!(!graph.allow_parallel_edges());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    pub allow_parallel_edges: bool,
    pub vertex_capacity: usize,
    /// Initial capacity of the edge list created for every new vertex.
    pub edge_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_parallel_edges: true,
            vertex_capacity: 0,
            edge_capacity: 0,
        }
    }
}

impl Config {
    pub fn parallel_edges(self, allow: bool) -> Self {
        Self {
            allow_parallel_edges: allow,
            ..self
        }
    }

    pub fn vertex_capacity(self, capacity: usize) -> Self {
        Self {
            vertex_capacity: capacity,
            ..self
        }
    }

    pub fn edge_capacity(self, capacity: usize) -> Self {
        Self {
            edge_capacity: capacity,
            ..self
        }
    }
}
