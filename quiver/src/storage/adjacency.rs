//! Directed graph indexed by out-edges only.
//!
//! Vertex removal has to scan the out-edge lists of all other vertices for
//! edges targeting the removed vertex, which makes it _O(V + E)_. Use
//! [`BidirectionalGraph`](super::BidirectionalGraph) when vertices are removed
//! often or in-edges are needed.

use std::{collections::hash_map::Keys, hash::Hash, slice::Iter};

use crate::{
    common::{EdgeList, VertexEdgeMap},
    core::{
        create::per_vertex_capacity, AddEdgeError, AddEdgeErrorKind, Config, Create, Edge,
        EdgeSet, EdgeSetMut, GraphBase, GraphEvents, GraphMut, Observable, OutEdges, OutEdgesMut,
        VertexNotFound, VertexSet, VertexSetMut,
    },
};

use super::shared::EdgesIter;

#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, E> {
    out_edges: VertexEdgeMap<V, E>,
    edge_count: usize,
    allow_parallel_edges: bool,
    events: GraphEvents<V, E>,
}

impl<V: Eq + Hash, E> AdjacencyGraph<V, E> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            out_edges: VertexEdgeMap::with_capacity(config.vertex_capacity, config.edge_capacity),
            edge_count: 0,
            allow_parallel_edges: config.allow_parallel_edges,
            events: GraphEvents::new(),
        }
    }
}

impl<V: Eq + Hash, E> Default for AdjacencyGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> GraphBase for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
{
    type Vertex = V;
    type Edge = E;
    type EdgeRef<'a> = &'a E
    where
        Self: 'a;

    fn is_directed(&self) -> bool {
        true
    }

    fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.out_edges.contains_vertex(vertex)
    }
}

impl<V, E> VertexSet for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
{
    type VerticesIter<'a> = Keys<'a, V, EdgeList<E>>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.out_edges.vertices()
    }

    fn vertex_count(&self) -> usize {
        self.out_edges.len()
    }
}

impl<V, E> EdgeSet for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
{
    type EdgesIter<'a> = EdgesIter<'a, V, E>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_> {
        EdgesIter::new(self.out_edges.lists())
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.out_edges
            .get(edge.source())
            .map_or(false, |list| list.contains(edge))
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<V, E> OutEdges for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
{
    type OutEdgesIter<'a> = Iter<'a, E>
    where
        Self: 'a;

    fn try_out_edges(&self, vertex: &V) -> Option<Self::OutEdgesIter<'_>> {
        self.out_edges.get(vertex).map(EdgeList::iter)
    }

    fn out_degree(&self, vertex: &V) -> Result<usize, VertexNotFound> {
        self.out_edges
            .get(vertex)
            .map(EdgeList::len)
            .ok_or(VertexNotFound)
    }

    fn out_edge(&self, vertex: &V, index: usize) -> Result<Option<&E>, VertexNotFound> {
        self.out_edges
            .get(vertex)
            .map(|list| list.get(index))
            .ok_or(VertexNotFound)
    }
}

impl<V, E> VertexSetMut for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.out_edges.contains_vertex(&vertex) {
            return false;
        }

        self.events.vertex_added.notify(&vertex);
        self.out_edges.insert_vertex(vertex);
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(own) = self.out_edges.remove(vertex) else {
            return false;
        };

        self.edge_count -= own.len();
        self.events.edge_removed.notify_all(&own);

        for list in self.out_edges.iter_mut().map(|(_, list)| list) {
            let incoming = list.extract_if(|edge| edge.target() == vertex);
            self.edge_count -= incoming.len();
            self.events.edge_removed.notify_all(&incoming);
        }

        self.events.vertex_removed.notify(vertex);
        true
    }
}

impl<V, E> EdgeSetMut for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
{
    fn add_edge(&mut self, edge: E) -> Result<bool, AddEdgeError<E>> {
        if !self.out_edges.contains_vertex(edge.target()) {
            let kind = if self.out_edges.contains_vertex(edge.source()) {
                AddEdgeErrorKind::TargetAbsent
            } else {
                AddEdgeErrorKind::SourceAbsent
            };
            return Err(AddEdgeError::new(edge, kind));
        }

        let Some(list) = self.out_edges.get_mut(edge.source()) else {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::SourceAbsent));
        };

        if !self.allow_parallel_edges && list.iter().any(|other| other.target() == edge.target())
        {
            return Ok(false);
        }

        self.events.edge_added.notify(&edge);
        list.push(edge);
        self.edge_count += 1;
        Ok(true)
    }

    fn remove_edge(&mut self, edge: &E) -> bool {
        let Some(removed) = self
            .out_edges
            .get_mut(edge.source())
            .and_then(|list| list.remove(edge))
        else {
            return false;
        };

        self.edge_count -= 1;
        self.events.edge_removed.notify(&removed);
        true
    }

    fn remove_edge_if<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&E) -> bool,
    {
        let mut removed = 0;

        for list in self.out_edges.iter_mut().map(|(_, list)| list) {
            let extracted = list.extract_if(&mut predicate);
            removed += extracted.len();
            self.events.edge_removed.notify_all(&extracted);
        }

        self.edge_count -= removed;
        removed
    }

    fn clear_edges(&mut self) {
        if self.events.edge_removed.is_empty() {
            self.out_edges.clear_lists();
            self.edge_count = 0;
        } else {
            self.remove_edge_if(|_| true);
        }
    }
}

impl<V, E> OutEdgesMut for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
{
    fn remove_out_edge_if<P>(&mut self, vertex: &V, predicate: P) -> Result<usize, VertexNotFound>
    where
        P: FnMut(&E) -> bool,
    {
        let list = self.out_edges.get_mut(vertex).ok_or(VertexNotFound)?;
        let extracted = list.extract_if(predicate);

        self.edge_count -= extracted.len();
        self.events.edge_removed.notify_all(&extracted);
        Ok(extracted.len())
    }

    fn trim_edge_excess(&mut self) {
        self.out_edges.trim_excess();
    }
}

impl<V, E> GraphMut for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
{
    fn clear(&mut self) {
        self.clear_edges();
        self.events
            .vertex_removed
            .notify_all(self.out_edges.vertices());
        self.out_edges.clear();
    }
}

impl<V, E> Create for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
{
    fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self::with_config(
            Config::default()
                .vertex_capacity(vertex_capacity)
                .edge_capacity(per_vertex_capacity(vertex_capacity, edge_capacity)),
        )
    }
}

impl<V, E> Observable for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
{
    fn events(&self) -> &GraphEvents<V, E> {
        &self.events
    }

    fn events_mut(&mut self) -> &mut GraphEvents<V, E> {
        &mut self.events
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{
        core::{SEdge, TaggedEdge},
        infra::testing::check_directed_consistency,
        storage::tests::*,
    };

    type Graph = AdjacencyGraph<u32, SEdge<u32>>;

    #[test]
    fn basic() {
        test_basic_directed::<Graph>();
    }

    #[test]
    fn missing_endpoints() {
        test_missing_endpoints::<Graph>();
    }

    #[test]
    fn parallel_edges_rejected() {
        test_parallel_edges_rejected(AdjacencyGraph::with_config(
            Config::default().parallel_edges(false),
        ));
    }

    #[test]
    fn parallel_edges_allowed() {
        test_parallel_edges_allowed(AdjacencyGraph::new());
    }

    #[test]
    fn clone_independent() {
        test_clone_independent::<Graph>();
    }

    #[test]
    fn remove_edge_twice() {
        test_remove_edge_twice::<Graph>();
    }

    #[test]
    fn remove_vertex_no_dangling() {
        test_remove_vertex_no_dangling::<Graph>();
    }

    #[test]
    fn remove_edge_if() {
        test_remove_edge_if::<Graph>();
    }

    #[test]
    fn clear() {
        test_clear::<Graph>();
    }

    #[test]
    fn events() {
        test_events::<Graph>();
    }

    #[test]
    fn directed_degrees() {
        test_directed_degrees::<Graph>();
    }

    #[test]
    fn remove_vertex_scans_other_lists() {
        let mut graph = Graph::new();
        graph.add_vertices([1, 2, 3]);
        graph.add_edge(SEdge::new(1, 2)).unwrap();
        graph.add_edge(SEdge::new(3, 2)).unwrap();
        graph.add_edge(SEdge::new(3, 1)).unwrap();
        graph.add_edge(SEdge::new(2, 2)).unwrap();

        assert!(graph.remove_vertex(&2));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.out_degree(&3), Ok(1));
        assert_eq!(graph.out_degree(&2), Err(VertexNotFound));
        check_directed_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_out_edge_if() {
        let mut graph = AdjacencyGraph::<u32, TaggedEdge<u32, i32>>::new();
        graph.add_vertices([1, 2]);
        graph.add_edge(TaggedEdge::new(1, 2, 0)).unwrap();
        graph.add_edge(TaggedEdge::new(1, 2, 1)).unwrap();
        graph.add_edge(TaggedEdge::new(1, 1, 2)).unwrap();

        assert_eq!(graph.remove_out_edge_if(&1, |edge| edge.tag % 2 == 0), Ok(2));
        assert_eq!(graph.edge_count(), 1);
        assert_matches!(graph.out_edge(&1, 0), Ok(Some(edge)) if edge.tag == 1);
        assert_eq!(graph.clear_out_edges(&3), Err(VertexNotFound));
        check_directed_consistency(&graph).unwrap();
    }

    #[test]
    fn with_capacity() {
        let mut graph = Graph::with_capacity(4, 16);
        graph.add_vertex(1);

        graph.trim_edge_excess();

        assert!(graph.is_edges_empty());
        assert!(graph.allow_parallel_edges());
    }
}
