use std::borrow::Borrow;

use super::{
    base::GraphBase,
    edge::Edge,
    edges::EdgeSetMut,
    error::VertexNotFound,
};

/// Graphs that can enumerate the outgoing edges of a vertex.
pub trait OutEdges: GraphBase {
    type OutEdgesIter<'a>: Iterator<Item = Self::EdgeRef<'a>>
    where
        Self: 'a;

    /// Returns `None` if the vertex is not in the graph.
    fn try_out_edges(&self, vertex: &Self::Vertex) -> Option<Self::OutEdgesIter<'_>>;

    fn out_edges(&self, vertex: &Self::Vertex) -> Result<Self::OutEdgesIter<'_>, VertexNotFound> {
        self.try_out_edges(vertex).ok_or(VertexNotFound)
    }

    fn out_degree(&self, vertex: &Self::Vertex) -> Result<usize, VertexNotFound> {
        Ok(self.out_edges(vertex)?.count())
    }

    fn is_out_edges_empty(&self, vertex: &Self::Vertex) -> Result<bool, VertexNotFound> {
        Ok(self.out_edges(vertex)?.next().is_none())
    }

    /// Returns the out-edge at the given position, or `None` if the index is out
    /// of bounds.
    fn out_edge(
        &self,
        vertex: &Self::Vertex,
        index: usize,
    ) -> Result<Option<Self::EdgeRef<'_>>, VertexNotFound> {
        Ok(self.out_edges(vertex)?.nth(index))
    }

    /// Returns any edge going from `source` to `target`.
    fn try_get_edge(
        &self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Option<Self::EdgeRef<'_>> {
        self.try_out_edges(source)?.find(|edge| {
            let edge: &Self::Edge = edge.borrow();
            edge.target() == target
        })
    }

    /// Returns all edges going from `source` to `target`, or `None` if `source`
    /// is not in the graph.
    fn try_get_edges(
        &self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Option<Vec<Self::EdgeRef<'_>>> {
        let edges = self
            .try_out_edges(source)?
            .filter(|edge| {
                let edge: &Self::Edge = edge.borrow();
                edge.target() == target
            })
            .collect();

        Some(edges)
    }

    fn contains_edge_between(&self, source: &Self::Vertex, target: &Self::Vertex) -> bool {
        self.try_get_edge(source, target).is_some()
    }
}

/// Directed graphs that can also enumerate the incoming edges of a vertex.
pub trait InEdges: OutEdges {
    type InEdgesIter<'a>: Iterator<Item = Self::EdgeRef<'a>>
    where
        Self: 'a;

    /// Returns `None` if the vertex is not in the graph.
    fn try_in_edges(&self, vertex: &Self::Vertex) -> Option<Self::InEdgesIter<'_>>;

    fn in_edges(&self, vertex: &Self::Vertex) -> Result<Self::InEdgesIter<'_>, VertexNotFound> {
        self.try_in_edges(vertex).ok_or(VertexNotFound)
    }

    fn in_degree(&self, vertex: &Self::Vertex) -> Result<usize, VertexNotFound> {
        Ok(self.in_edges(vertex)?.count())
    }

    fn is_in_edges_empty(&self, vertex: &Self::Vertex) -> Result<bool, VertexNotFound> {
        Ok(self.in_edges(vertex)?.next().is_none())
    }

    fn in_edge(
        &self,
        vertex: &Self::Vertex,
        index: usize,
    ) -> Result<Option<Self::EdgeRef<'_>>, VertexNotFound> {
        Ok(self.in_edges(vertex)?.nth(index))
    }

    /// Sum of in-degree and out-degree. A self-edge counts twice.
    fn degree(&self, vertex: &Self::Vertex) -> Result<usize, VertexNotFound> {
        Ok(self.out_degree(vertex)? + self.in_degree(vertex)?)
    }
}

/// Undirected graphs that can enumerate the edges incident with a vertex.
pub trait AdjacentEdges: GraphBase {
    type AdjacentEdgesIter<'a>: Iterator<Item = Self::EdgeRef<'a>>
    where
        Self: 'a;

    /// Returns `None` if the vertex is not in the graph. A self-edge is yielded
    /// once.
    fn try_adjacent_edges(&self, vertex: &Self::Vertex) -> Option<Self::AdjacentEdgesIter<'_>>;

    fn adjacent_edges(
        &self,
        vertex: &Self::Vertex,
    ) -> Result<Self::AdjacentEdgesIter<'_>, VertexNotFound> {
        self.try_adjacent_edges(vertex).ok_or(VertexNotFound)
    }

    /// Number of incident edges. A self-edge counts once.
    fn adjacent_degree(&self, vertex: &Self::Vertex) -> Result<usize, VertexNotFound> {
        Ok(self.adjacent_edges(vertex)?.count())
    }

    fn is_adjacent_edges_empty(&self, vertex: &Self::Vertex) -> Result<bool, VertexNotFound> {
        Ok(self.adjacent_edges(vertex)?.next().is_none())
    }

    fn adjacent_edge(
        &self,
        vertex: &Self::Vertex,
        index: usize,
    ) -> Result<Option<Self::EdgeRef<'_>>, VertexNotFound> {
        Ok(self.adjacent_edges(vertex)?.nth(index))
    }

    /// Decides whether the edge connects the two vertices. By default, the
    /// orientation of the endpoints is ignored. Graphs created with a custom
    /// [`EdgeEquality`](super::EdgeEquality) answer with it.
    fn connects_undirected(
        &self,
        edge: &Self::Edge,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> bool {
        (edge.source() == source && edge.target() == target)
            || (edge.source() == target && edge.target() == source)
    }

    /// Returns any edge connecting the two vertices according to
    /// [`connects_undirected`](AdjacentEdges::connects_undirected).
    fn try_get_undirected_edge(
        &self,
        source: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Option<Self::EdgeRef<'_>> {
        self.try_adjacent_edges(source)?.find(|edge| {
            let edge: &Self::Edge = edge.borrow();
            self.connects_undirected(edge, source, target)
        })
    }

    fn contains_undirected_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> bool {
        self.try_get_undirected_edge(source, target).is_some()
    }
}

pub trait OutEdgesMut: OutEdges + EdgeSetMut {
    /// Removes the out-edges of a vertex satisfying the predicate. Returns the
    /// number of removed edges.
    fn remove_out_edge_if<P>(
        &mut self,
        vertex: &Self::Vertex,
        predicate: P,
    ) -> Result<usize, VertexNotFound>
    where
        P: FnMut(&Self::Edge) -> bool;

    fn clear_out_edges(&mut self, vertex: &Self::Vertex) -> Result<usize, VertexNotFound> {
        self.remove_out_edge_if(vertex, |_| true)
    }

    /// Releases unused capacity of the edge storage.
    fn trim_edge_excess(&mut self) {}
}

pub trait InEdgesMut: InEdges + OutEdgesMut {
    /// Removes the in-edges of a vertex satisfying the predicate. Returns the
    /// number of removed edges.
    fn remove_in_edge_if<P>(
        &mut self,
        vertex: &Self::Vertex,
        predicate: P,
    ) -> Result<usize, VertexNotFound>
    where
        P: FnMut(&Self::Edge) -> bool;

    fn clear_in_edges(&mut self, vertex: &Self::Vertex) -> Result<usize, VertexNotFound> {
        self.remove_in_edge_if(vertex, |_| true)
    }

    /// Removes both in-edges and out-edges of a vertex, keeping the vertex.
    fn clear_incident_edges(&mut self, vertex: &Self::Vertex) -> Result<usize, VertexNotFound> {
        let outgoing = self.clear_out_edges(vertex)?;
        let incoming = self.clear_in_edges(vertex)?;
        Ok(outgoing + incoming)
    }
}

pub trait AdjacentEdgesMut: AdjacentEdges + EdgeSetMut {
    /// Removes the incident edges of a vertex satisfying the predicate.
    /// Returns the number of removed edges.
    fn remove_adjacent_edge_if<P>(
        &mut self,
        vertex: &Self::Vertex,
        predicate: P,
    ) -> Result<usize, VertexNotFound>
    where
        P: FnMut(&Self::Edge) -> bool;

    fn clear_adjacent_edges(&mut self, vertex: &Self::Vertex) -> Result<usize, VertexNotFound> {
        self.remove_adjacent_edge_if(vertex, |_| true)
    }

    /// Releases unused capacity of the edge storage.
    fn trim_edge_excess(&mut self) {}
}

macro_rules! deref_out_edges {
    ($($ref_kind:tt)*) => {
        impl<G> OutEdges for $($ref_kind)* G
        where
            G: OutEdges,
        {
            type OutEdgesIter<'a> = G::OutEdgesIter<'a>
            where
                Self: 'a;

            fn try_out_edges(&self, vertex: &Self::Vertex) -> Option<Self::OutEdgesIter<'_>> {
                (**self).try_out_edges(vertex)
            }

            fn out_degree(&self, vertex: &Self::Vertex) -> Result<usize, VertexNotFound> {
                (**self).out_degree(vertex)
            }

            fn try_get_edge(
                &self,
                source: &Self::Vertex,
                target: &Self::Vertex,
            ) -> Option<Self::EdgeRef<'_>> {
                (**self).try_get_edge(source, target)
            }

            fn contains_edge_between(&self, source: &Self::Vertex, target: &Self::Vertex) -> bool {
                (**self).contains_edge_between(source, target)
            }
        }
    };
}

deref_out_edges!(&);
deref_out_edges!(&mut);

macro_rules! deref_in_edges {
    ($($ref_kind:tt)*) => {
        impl<G> InEdges for $($ref_kind)* G
        where
            G: InEdges,
        {
            type InEdgesIter<'a> = G::InEdgesIter<'a>
            where
                Self: 'a;

            fn try_in_edges(&self, vertex: &Self::Vertex) -> Option<Self::InEdgesIter<'_>> {
                (**self).try_in_edges(vertex)
            }

            fn in_degree(&self, vertex: &Self::Vertex) -> Result<usize, VertexNotFound> {
                (**self).in_degree(vertex)
            }
        }
    };
}

deref_in_edges!(&);
deref_in_edges!(&mut);

macro_rules! deref_adjacent_edges {
    ($($ref_kind:tt)*) => {
        impl<G> AdjacentEdges for $($ref_kind)* G
        where
            G: AdjacentEdges,
        {
            type AdjacentEdgesIter<'a> = G::AdjacentEdgesIter<'a>
            where
                Self: 'a;

            fn try_adjacent_edges(&self, vertex: &Self::Vertex) -> Option<Self::AdjacentEdgesIter<'_>> {
                (**self).try_adjacent_edges(vertex)
            }

            fn adjacent_degree(&self, vertex: &Self::Vertex) -> Result<usize, VertexNotFound> {
                (**self).adjacent_degree(vertex)
            }

            fn connects_undirected(
                &self,
                edge: &Self::Edge,
                source: &Self::Vertex,
                target: &Self::Vertex,
            ) -> bool {
                (**self).connects_undirected(edge, source, target)
            }

            fn try_get_undirected_edge(
                &self,
                source: &Self::Vertex,
                target: &Self::Vertex,
            ) -> Option<Self::EdgeRef<'_>> {
                (**self).try_get_undirected_edge(source, target)
            }
        }
    };
}

deref_adjacent_edges!(&);
deref_adjacent_edges!(&mut);

impl<G> OutEdgesMut for &mut G
where
    G: OutEdgesMut,
{
    fn remove_out_edge_if<P>(
        &mut self,
        vertex: &Self::Vertex,
        predicate: P,
    ) -> Result<usize, VertexNotFound>
    where
        P: FnMut(&Self::Edge) -> bool,
    {
        (**self).remove_out_edge_if(vertex, predicate)
    }

    fn trim_edge_excess(&mut self) {
        (**self).trim_edge_excess()
    }
}

impl<G> InEdgesMut for &mut G
where
    G: InEdgesMut,
{
    fn remove_in_edge_if<P>(
        &mut self,
        vertex: &Self::Vertex,
        predicate: P,
    ) -> Result<usize, VertexNotFound>
    where
        P: FnMut(&Self::Edge) -> bool,
    {
        (**self).remove_in_edge_if(vertex, predicate)
    }

    fn clear_incident_edges(&mut self, vertex: &Self::Vertex) -> Result<usize, VertexNotFound> {
        (**self).clear_incident_edges(vertex)
    }
}

impl<G> AdjacentEdgesMut for &mut G
where
    G: AdjacentEdgesMut,
{
    fn remove_adjacent_edge_if<P>(
        &mut self,
        vertex: &Self::Vertex,
        predicate: P,
    ) -> Result<usize, VertexNotFound>
    where
        P: FnMut(&Self::Edge) -> bool,
    {
        (**self).remove_adjacent_edge_if(vertex, predicate)
    }

    fn trim_edge_excess(&mut self) {
        (**self).trim_edge_excess()
    }
}
