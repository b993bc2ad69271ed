use super::{
    edge::Edge,
    edges::EdgeSetMut,
    vertices::VertexSetMut,
};

/// Mutable graphs with both vertex and edge insertion.
pub trait GraphMut: VertexSetMut + EdgeSetMut {
    /// Removes all vertices and edges.
    fn clear(&mut self);

    /// Adds the endpoints of the edge if they are missing and then the edge
    /// itself. Returns whether the edge was added.
    fn add_vertices_and_edge(&mut self, edge: Self::Edge) -> bool {
        self.add_vertex(edge.source().clone());
        self.add_vertex(edge.target().clone());
        matches!(self.add_edge(edge), Ok(true))
    }

    /// Returns the number of edges that were actually added.
    fn add_vertices_and_edges<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = Self::Edge>,
    {
        edges
            .into_iter()
            .map(|edge| usize::from(self.add_vertices_and_edge(edge)))
            .sum()
    }
}

impl<G> GraphMut for &mut G
where
    G: GraphMut,
{
    fn clear(&mut self) {
        (**self).clear()
    }

    fn add_vertices_and_edge(&mut self, edge: Self::Edge) -> bool {
        (**self).add_vertices_and_edge(edge)
    }
}
