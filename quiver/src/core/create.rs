//! Initialization of graphs.

use super::graph::GraphMut;

/// Trait for creating a graph with known or estimated capacity.
pub trait Create: GraphMut + Sized {
    /// Creates an empty graph with default configuration and room for the
    /// given number of vertices and edges in total.
    fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self;

    fn empty() -> Self {
        Self::with_capacity(0, 0)
    }
}

/// Trait for extending graph with or creating graph from an iterator of vertices.
pub trait ExtendWithVertices: Create {
    fn extend_with_vertices<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Self::Vertex>;

    fn from_vertices<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self::Vertex>,
    {
        let iter = iter.into_iter();
        let vertex_count = iter.size_hint().1.unwrap_or(32);

        let mut graph = Self::with_capacity(vertex_count, 0);
        graph.extend_with_vertices(iter);
        graph
    }
}

impl<G> ExtendWithVertices for G
where
    G: Create,
{
    fn extend_with_vertices<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Self::Vertex>,
    {
        self.add_vertices(iter);
    }
}

/// Trait for extending graph with or creating graph from an iterator of edges.
/// Missing endpoints are added on the way.
pub trait ExtendWithEdges: Create {
    fn extend_with_edges<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Self::Edge>;

    fn from_edges<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self::Edge>,
    {
        let iter = iter.into_iter();
        let edge_count = iter.size_hint().1.unwrap_or(32);

        let mut graph = Self::with_capacity(0, edge_count);
        graph.extend_with_edges(iter);
        graph
    }
}

impl<G> ExtendWithEdges for G
where
    G: Create,
{
    fn extend_with_edges<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Self::Edge>,
    {
        self.add_vertices_and_edges(iter);
    }
}

/// Capacity of the edge list of a single vertex, estimated from the total
/// capacities.
pub(crate) fn per_vertex_capacity(vertex_capacity: usize, edge_capacity: usize) -> usize {
    edge_capacity.checked_div(vertex_capacity).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{AdjacentEdges, EdgeSet, OutEdges, SEdge, VertexSet},
        infra::testing::{check_directed_consistency, check_undirected_consistency},
        storage::{AdjacencyGraph, UndirectedGraph},
    };

    #[test]
    fn from_vertices_drops_duplicates() {
        let graph = AdjacencyGraph::<u32, SEdge<u32>>::from_vertices([1, 2, 3, 2]);

        assert_eq!(graph.vertex_count(), 3);
        assert!(graph.is_edges_empty());
    }

    #[test]
    fn from_edges_adds_endpoints() {
        let graph =
            AdjacencyGraph::from_edges([SEdge::new(1, 2), SEdge::new(2, 3), SEdge::new(3, 3)]);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.out_degree(&2), Ok(1));
        assert!(graph.contains_edge_between(&3, &3));
        check_directed_consistency(&graph).unwrap();
    }

    #[test]
    fn extend_undirected() {
        let mut graph = UndirectedGraph::<u32, SEdge<u32>>::from_vertices([1, 4]);
        graph.extend_with_edges([SEdge::new(1, 2), SEdge::new(2, 1)]);
        graph.extend_with_vertices([4, 5]);

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.adjacent_degree(&1), Ok(2));
        assert_eq!(graph.adjacent_degree(&5), Ok(0));
        check_undirected_consistency(&graph).unwrap();
    }

    #[test]
    fn per_vertex_capacity_without_vertices() {
        assert_eq!(per_vertex_capacity(0, 100), 0);
        assert_eq!(per_vertex_capacity(10, 100), 10);
    }
}
