//! Undirected graph indexed by incident edges.
//!
//! Every edge is stored in the lists of both its endpoints, except a self-edge
//! which is stored once. Whether an edge connects a pair of vertices is decided
//! by an [`EdgeEquality`] strategy chosen at construction. The default,
//! [`UndirectedVertexEquality`], ignores the orientation of the endpoints.

use std::{collections::hash_map::Keys, hash::Hash, slice::Iter};

use crate::{
    common::{EdgeList, VertexEdgeMap},
    core::{
        create::per_vertex_capacity, AddEdgeError, AddEdgeErrorKind, AdjacentEdges,
        AdjacentEdgesMut, Config, Create, Edge, EdgeEquality, EdgeSet, EdgeSetMut, GraphBase,
        GraphEvents, GraphMut, Observable, UndirectedVertexEquality, VertexNotFound, VertexSet,
        VertexSetMut,
    },
};

use super::shared::SourceEdgesIter;

#[derive(Debug, Clone)]
pub struct UndirectedGraph<V, E, Q = UndirectedVertexEquality> {
    adjacent_edges: VertexEdgeMap<V, E>,
    edge_count: usize,
    allow_parallel_edges: bool,
    equality: Q,
    events: GraphEvents<V, E>,
}

impl<V: Eq + Hash, E> UndirectedGraph<V, E> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_equality(config, UndirectedVertexEquality)
    }
}

impl<V: Eq + Hash, E, Q> UndirectedGraph<V, E, Q> {
    /// Creates a graph which uses a custom strategy for deciding whether an
    /// edge connects two vertices.
    pub fn with_equality(config: Config, equality: Q) -> Self {
        Self {
            adjacent_edges: VertexEdgeMap::with_capacity(
                config.vertex_capacity,
                config.edge_capacity,
            ),
            edge_count: 0,
            allow_parallel_edges: config.allow_parallel_edges,
            equality,
            events: GraphEvents::new(),
        }
    }

    pub fn equality(&self) -> &Q {
        &self.equality
    }
}

impl<V, E, Q> UndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
    Q: EdgeEquality<V, E>,
{
    /// Removes non-self edges from the list of their other endpoint. The
    /// edges are incident with `vertex`.
    fn detach_from_neighbors(&mut self, vertex: &V, edges: &[E]) {
        for edge in edges {
            if edge.is_self_edge() {
                continue;
            }

            let Some(other) = edge.other_vertex(vertex) else {
                continue;
            };

            if let Some(list) = self.adjacent_edges.get_mut(other) {
                list.remove(edge);
            }
        }
    }
}

impl<V: Eq + Hash, E> Default for UndirectedGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, Q> GraphBase for UndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
    Q: EdgeEquality<V, E>,
{
    type Vertex = V;
    type Edge = E;
    type EdgeRef<'a> = &'a E
    where
        Self: 'a;

    fn is_directed(&self) -> bool {
        false
    }

    fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacent_edges.contains_vertex(vertex)
    }
}

impl<V, E, Q> VertexSet for UndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
    Q: EdgeEquality<V, E>,
{
    type VerticesIter<'a> = Keys<'a, V, EdgeList<E>>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.adjacent_edges.vertices()
    }

    fn vertex_count(&self) -> usize {
        self.adjacent_edges.len()
    }
}

impl<V, E, Q> EdgeSet for UndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
    Q: EdgeEquality<V, E>,
{
    type EdgesIter<'a> = SourceEdgesIter<'a, V, E>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_> {
        SourceEdgesIter::new(self.adjacent_edges.iter())
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.adjacent_edges
            .get(edge.source())
            .map_or(false, |list| list.contains(edge))
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<V, E, Q> AdjacentEdges for UndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
    Q: EdgeEquality<V, E>,
{
    type AdjacentEdgesIter<'a> = Iter<'a, E>
    where
        Self: 'a;

    fn try_adjacent_edges(&self, vertex: &V) -> Option<Self::AdjacentEdgesIter<'_>> {
        self.adjacent_edges.get(vertex).map(EdgeList::iter)
    }

    fn adjacent_degree(&self, vertex: &V) -> Result<usize, VertexNotFound> {
        self.adjacent_edges
            .get(vertex)
            .map(EdgeList::len)
            .ok_or(VertexNotFound)
    }

    fn adjacent_edge(&self, vertex: &V, index: usize) -> Result<Option<&E>, VertexNotFound> {
        self.adjacent_edges
            .get(vertex)
            .map(|list| list.get(index))
            .ok_or(VertexNotFound)
    }

    fn connects_undirected(&self, edge: &E, source: &V, target: &V) -> bool {
        self.equality.connects(edge, source, target)
    }

    fn try_get_undirected_edge(&self, source: &V, target: &V) -> Option<&E> {
        self.adjacent_edges
            .get(source)?
            .iter()
            .find(|edge| self.equality.connects(edge, source, target))
    }
}

impl<V, E, Q> VertexSetMut for UndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
    Q: EdgeEquality<V, E>,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacent_edges.contains_vertex(&vertex) {
            return false;
        }

        self.events.vertex_added.notify(&vertex);
        self.adjacent_edges.insert_vertex(vertex);
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(incident) = self.adjacent_edges.remove(vertex) else {
            return false;
        };

        self.detach_from_neighbors(vertex, incident.as_ref());
        self.edge_count -= incident.len();
        self.events.edge_removed.notify_all(&incident);
        self.events.vertex_removed.notify(vertex);
        true
    }
}

impl<V, E, Q> EdgeSetMut for UndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
    Q: EdgeEquality<V, E>,
{
    fn add_edge(&mut self, edge: E) -> Result<bool, AddEdgeError<E>> {
        let Some(source_list) = self.adjacent_edges.get(edge.source()) else {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::SourceAbsent));
        };

        if !self.adjacent_edges.contains_vertex(edge.target()) {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::TargetAbsent));
        }

        // The source list holds every edge between the endpoints, regardless of
        // their orientation.
        if !self.allow_parallel_edges
            && source_list
                .iter()
                .any(|other| self.equality.connects(other, edge.source(), edge.target()))
        {
            return Ok(false);
        }

        self.events.edge_added.notify(&edge);

        if !edge.is_self_edge() {
            if let Some(target_list) = self.adjacent_edges.get_mut(edge.target()) {
                target_list.push(edge.clone());
            }
        }

        if let Some(source_list) = self.adjacent_edges.get_mut(edge.source()) {
            source_list.push(edge);
        }

        self.edge_count += 1;
        Ok(true)
    }

    fn remove_edge(&mut self, edge: &E) -> bool {
        let Some(removed) = self
            .adjacent_edges
            .get_mut(edge.source())
            .and_then(|list| list.remove(edge))
        else {
            return false;
        };

        if !edge.is_self_edge() {
            if let Some(list) = self.adjacent_edges.get_mut(edge.target()) {
                list.remove(edge);
            }
        }

        self.edge_count -= 1;
        self.events.edge_removed.notify(&removed);
        true
    }

    fn remove_edge_if<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&E) -> bool,
    {
        let mut extracted = Vec::new();

        for (vertex, list) in self.adjacent_edges.iter_mut() {
            extracted.extend(list.extract_if(|edge| edge.source() == vertex && predicate(edge)));
        }

        for edge in extracted.iter().filter(|edge| !edge.is_self_edge()) {
            if let Some(list) = self.adjacent_edges.get_mut(edge.target()) {
                list.remove(edge);
            }
        }

        self.edge_count -= extracted.len();
        self.events.edge_removed.notify_all(&extracted);
        extracted.len()
    }

    fn clear_edges(&mut self) {
        if self.events.edge_removed.is_empty() {
            self.adjacent_edges.clear_lists();
            self.edge_count = 0;
        } else {
            self.remove_edge_if(|_| true);
        }
    }
}

impl<V, E, Q> AdjacentEdgesMut for UndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
    Q: EdgeEquality<V, E>,
{
    fn remove_adjacent_edge_if<P>(
        &mut self,
        vertex: &V,
        predicate: P,
    ) -> Result<usize, VertexNotFound>
    where
        P: FnMut(&E) -> bool,
    {
        let list = self
            .adjacent_edges
            .get_mut(vertex)
            .ok_or(VertexNotFound)?;
        let extracted = list.extract_if(predicate);

        self.detach_from_neighbors(vertex, &extracted);
        self.edge_count -= extracted.len();
        self.events.edge_removed.notify_all(&extracted);
        Ok(extracted.len())
    }

    fn trim_edge_excess(&mut self) {
        self.adjacent_edges.trim_excess();
    }
}

impl<V, E, Q> GraphMut for UndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
    Q: EdgeEquality<V, E>,
{
    fn clear(&mut self) {
        self.clear_edges();
        self.events
            .vertex_removed
            .notify_all(self.adjacent_edges.vertices());
        self.adjacent_edges.clear();
    }
}

impl<V, E, Q> Create for UndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
    Q: EdgeEquality<V, E> + Default,
{
    fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        // Every edge is stored twice.
        Self::with_equality(
            Config::default()
                .vertex_capacity(vertex_capacity)
                .edge_capacity(per_vertex_capacity(vertex_capacity, 2 * edge_capacity)),
            Q::default(),
        )
    }
}

impl<V, E, Q> Observable for UndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
    Q: EdgeEquality<V, E>,
{
    fn events(&self) -> &GraphEvents<V, E> {
        &self.events
    }

    fn events_mut(&mut self) -> &mut GraphEvents<V, E> {
        &mut self.events
    }
}
