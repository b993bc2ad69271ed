use std::borrow::Borrow;

use crate::core::{AdjacentEdges, Edge, EdgeSet, GraphBase, InEdges, OutEdges, VertexSet};

/// Read-only view of a graph restricted by vertex and edge predicates.
///
/// A vertex is visible if it is in the underlying graph and accepted by the
/// vertex predicate. An edge is visible if it is accepted by the edge predicate
/// and both its endpoints are visible. Queries about a hidden vertex fail the
/// same way as queries about a vertex that does not exist.
///
/// The underlying graph can be owned or borrowed.
///
/// ```
/// use quiver::{
///     adapt::Filtered,
///     core::{GraphMut, OutEdges, SEdge, VertexNotFound, VertexSet},
///     storage::AdjacencyGraph,
/// };
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_vertices_and_edges([SEdge::new(1, 2), SEdge::new(2, 3), SEdge::new(1, 3)]);
///
/// let view = Filtered::new(&graph, |v: &u32| *v != 2, |_: &SEdge<u32>| true);
///
/// assert_eq!(view.vertex_count(), 2);
/// assert_eq!(view.out_degree(&1), Ok(1));
/// assert_eq!(view.out_degree(&2), Err(VertexNotFound));
/// ```
pub struct Filtered<G, VP, EP> {
    graph: G,
    vertex_predicate: VP,
    edge_predicate: EP,
}

impl<G, VP, EP> Filtered<G, VP, EP>
where
    G: GraphBase,
    VP: Fn(&G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    pub fn new(graph: G, vertex_predicate: VP, edge_predicate: EP) -> Self {
        Self {
            graph,
            vertex_predicate,
            edge_predicate,
        }
    }

    pub fn inner(&self) -> &G {
        &self.graph
    }

    pub fn into_inner(self) -> G {
        self.graph
    }

    fn is_vertex_visible(&self, vertex: &G::Vertex) -> bool {
        (self.vertex_predicate)(vertex) && self.graph.contains_vertex(vertex)
    }

    // Endpoints of an edge of the underlying graph are in the graph.
    fn is_edge_visible(&self, edge: &G::Edge) -> bool {
        (self.edge_predicate)(edge)
            && (self.vertex_predicate)(edge.source())
            && (self.vertex_predicate)(edge.target())
    }

    fn check_vertex(&self, vertex: &G::Vertex) -> Option<()> {
        self.is_vertex_visible(vertex).then_some(())
    }
}

impl<G, VP, EP> GraphBase for Filtered<G, VP, EP>
where
    G: GraphBase,
    VP: Fn(&G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    type Vertex = G::Vertex;
    type Edge = G::Edge;
    type EdgeRef<'a> = G::EdgeRef<'a>
    where
        Self: 'a;

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn allow_parallel_edges(&self) -> bool {
        self.graph.allow_parallel_edges()
    }

    fn contains_vertex(&self, vertex: &G::Vertex) -> bool {
        self.is_vertex_visible(vertex)
    }
}

impl<G, VP, EP> VertexSet for Filtered<G, VP, EP>
where
    G: VertexSet,
    VP: Fn(&G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    type VerticesIter<'a> = FilteredIter<'a, G::VerticesIter<'a>>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        FilteredIter::new(self.graph.vertices(), |vertex| {
            (self.vertex_predicate)(*vertex)
        })
    }
}

impl<G, VP, EP> EdgeSet for Filtered<G, VP, EP>
where
    G: EdgeSet,
    VP: Fn(&G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    type EdgesIter<'a> = FilteredIter<'a, G::EdgesIter<'a>>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_> {
        FilteredIter::new(self.graph.edges(), |edge| {
            let edge: &G::Edge = edge.borrow();
            self.is_edge_visible(edge)
        })
    }

    fn contains_edge(&self, edge: &G::Edge) -> bool {
        self.is_edge_visible(edge) && self.graph.contains_edge(edge)
    }
}

impl<G, VP, EP> OutEdges for Filtered<G, VP, EP>
where
    G: OutEdges,
    VP: Fn(&G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    type OutEdgesIter<'a> = FilteredIter<'a, G::OutEdgesIter<'a>>
    where
        Self: 'a;

    fn try_out_edges(&self, vertex: &G::Vertex) -> Option<Self::OutEdgesIter<'_>> {
        self.check_vertex(vertex)?;

        let edges = self.graph.try_out_edges(vertex)?;
        Some(FilteredIter::new(edges, |edge| {
            let edge: &G::Edge = edge.borrow();
            self.is_edge_visible(edge)
        }))
    }
}

impl<G, VP, EP> InEdges for Filtered<G, VP, EP>
where
    G: InEdges,
    VP: Fn(&G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    type InEdgesIter<'a> = FilteredIter<'a, G::InEdgesIter<'a>>
    where
        Self: 'a;

    fn try_in_edges(&self, vertex: &G::Vertex) -> Option<Self::InEdgesIter<'_>> {
        self.check_vertex(vertex)?;

        let edges = self.graph.try_in_edges(vertex)?;
        Some(FilteredIter::new(edges, |edge| {
            let edge: &G::Edge = edge.borrow();
            self.is_edge_visible(edge)
        }))
    }
}

impl<G, VP, EP> AdjacentEdges for Filtered<G, VP, EP>
where
    G: AdjacentEdges,
    VP: Fn(&G::Vertex) -> bool,
    EP: Fn(&G::Edge) -> bool,
{
    type AdjacentEdgesIter<'a> = FilteredIter<'a, G::AdjacentEdgesIter<'a>>
    where
        Self: 'a;

    fn try_adjacent_edges(&self, vertex: &G::Vertex) -> Option<Self::AdjacentEdgesIter<'_>> {
        self.check_vertex(vertex)?;

        let edges = self.graph.try_adjacent_edges(vertex)?;
        Some(FilteredIter::new(edges, |edge| {
            let edge: &G::Edge = edge.borrow();
            self.is_edge_visible(edge)
        }))
    }

    fn connects_undirected(
        &self,
        edge: &G::Edge,
        source: &G::Vertex,
        target: &G::Vertex,
    ) -> bool {
        self.graph.connects_undirected(edge, source, target)
    }
}

/// Iterator over the items of an underlying graph iterator that pass a filter.
pub struct FilteredIter<'a, I: Iterator> {
    inner: I,
    #[allow(clippy::type_complexity)]
    filter: Box<dyn Fn(&I::Item) -> bool + 'a>,
}

impl<'a, I: Iterator> FilteredIter<'a, I> {
    fn new<F>(inner: I, filter: F) -> Self
    where
        F: Fn(&I::Item) -> bool + 'a,
    {
        Self {
            inner,
            filter: Box::new(filter),
        }
    }
}

impl<'a, I: Iterator> Iterator for FilteredIter<'a, I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find(&self.filter)
    }
}
