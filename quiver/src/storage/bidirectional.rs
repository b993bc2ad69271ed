//! Directed graph indexed by both out-edges and in-edges.
//!
//! Every edge is stored twice, in the out-edge list of its source and in the
//! in-edge list of its target. The two indices are always updated together.
//! In exchange for the memory, vertex removal only touches the neighbors of
//! the removed vertex.

use std::{collections::hash_map::Keys, hash::Hash, slice::Iter};

use log::debug;

use crate::{
    common::{EdgeList, VertexEdgeMap},
    core::{
        create::per_vertex_capacity, AddEdgeError, AddEdgeErrorKind, Config, Create, Edge,
        EdgeSet, EdgeSetMut, GraphBase, GraphEvents, GraphMut, InEdges, InEdgesMut, Observable,
        OutEdges, OutEdgesMut, VertexNotFound, VertexSet, VertexSetMut,
    },
};

use super::shared::EdgesIter;

#[derive(Debug, Clone)]
pub struct BidirectionalGraph<V, E> {
    out_edges: VertexEdgeMap<V, E>,
    in_edges: VertexEdgeMap<V, E>,
    edge_count: usize,
    allow_parallel_edges: bool,
    events: GraphEvents<V, E>,
}

impl<V: Eq + Hash, E> BidirectionalGraph<V, E> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            out_edges: VertexEdgeMap::with_capacity(config.vertex_capacity, config.edge_capacity),
            in_edges: VertexEdgeMap::with_capacity(config.vertex_capacity, config.edge_capacity),
            edge_count: 0,
            allow_parallel_edges: config.allow_parallel_edges,
            events: GraphEvents::new(),
        }
    }
}

impl<V, E> BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    /// Removes the vertex and connects every source of its in-edges with every
    /// target of its out-edges using edges created by `factory`. Self-edges of
    /// the vertex are dropped.
    ///
    /// Returns the number of edges added.
    pub fn merge_vertex<F>(&mut self, vertex: &V, mut factory: F) -> Result<usize, VertexNotFound>
    where
        F: FnMut(&V, &V) -> E,
    {
        let sources = self
            .in_edges
            .get(vertex)
            .ok_or(VertexNotFound)?
            .iter()
            .filter(|edge| !edge.is_self_edge())
            .map(|edge| edge.source().clone())
            .collect::<Vec<_>>();

        let targets = self
            .out_edges
            .get(vertex)
            .ok_or(VertexNotFound)?
            .iter()
            .filter(|edge| !edge.is_self_edge())
            .map(|edge| edge.target().clone())
            .collect::<Vec<_>>();

        self.remove_vertex(vertex);

        let mut added = 0;

        for source in sources.iter() {
            for target in targets.iter() {
                if let Ok(true) = self.add_edge(factory(source, target)) {
                    added += 1;
                }
            }
        }

        debug!(
            "merged vertex with {} in-edges and {} out-edges, {} edges added",
            sources.len(),
            targets.len(),
            added
        );

        Ok(added)
    }

    /// Merges all vertices satisfying the predicate, one by one. Returns the
    /// number of merged vertices.
    pub fn merge_vertex_if<P, F>(&mut self, mut predicate: P, mut factory: F) -> usize
    where
        P: FnMut(&V) -> bool,
        F: FnMut(&V, &V) -> E,
    {
        let doomed = self
            .out_edges
            .vertices()
            .filter(|vertex| predicate(vertex))
            .cloned()
            .collect::<Vec<_>>();

        doomed
            .iter()
            .filter(|vertex| self.merge_vertex(vertex, &mut factory).is_ok())
            .count()
    }

    fn detach_from_targets(&mut self, edges: &[E]) {
        for edge in edges {
            if let Some(list) = self.in_edges.get_mut(edge.target()) {
                list.remove(edge);
            }
        }
    }

    fn detach_from_sources(&mut self, edges: &[E]) {
        for edge in edges {
            if let Some(list) = self.out_edges.get_mut(edge.source()) {
                list.remove(edge);
            }
        }
    }
}

impl<V: Eq + Hash, E> Default for BidirectionalGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> GraphBase for BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
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

impl<V, E> VertexSet for BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
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

impl<V, E> EdgeSet for BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
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

impl<V, E> OutEdges for BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
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

impl<V, E> InEdges for BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    type InEdgesIter<'a> = Iter<'a, E>
    where
        Self: 'a;

    fn try_in_edges(&self, vertex: &V) -> Option<Self::InEdgesIter<'_>> {
        self.in_edges.get(vertex).map(EdgeList::iter)
    }

    fn in_degree(&self, vertex: &V) -> Result<usize, VertexNotFound> {
        self.in_edges
            .get(vertex)
            .map(EdgeList::len)
            .ok_or(VertexNotFound)
    }

    fn in_edge(&self, vertex: &V, index: usize) -> Result<Option<&E>, VertexNotFound> {
        self.in_edges
            .get(vertex)
            .map(|list| list.get(index))
            .ok_or(VertexNotFound)
    }
}

impl<V, E> VertexSetMut for BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.out_edges.contains_vertex(&vertex) {
            return false;
        }

        self.events.vertex_added.notify(&vertex);
        self.in_edges.insert_vertex(vertex.clone());
        self.out_edges.insert_vertex(vertex);
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(outgoing) = self.out_edges.remove(vertex) else {
            return false;
        };
        let incoming = self.in_edges.remove(vertex).unwrap_or_default();

        // Self-edges are in both lists of the vertex, which are gone already.
        self.detach_from_targets(outgoing.as_ref());
        self.detach_from_sources(incoming.as_ref());

        let incoming = incoming
            .into_iter()
            .filter(|edge| !edge.is_self_edge())
            .collect::<Vec<_>>();

        self.edge_count -= outgoing.len() + incoming.len();
        self.events.edge_removed.notify_all(&outgoing);
        self.events.edge_removed.notify_all(&incoming);
        self.events.vertex_removed.notify(vertex);
        true
    }
}

impl<V, E> EdgeSetMut for BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    fn add_edge(&mut self, edge: E) -> Result<bool, AddEdgeError<E>> {
        let Some(out_list) = self.out_edges.get_mut(edge.source()) else {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::SourceAbsent));
        };

        let Some(in_list) = self.in_edges.get_mut(edge.target()) else {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::TargetAbsent));
        };

        if !self.allow_parallel_edges
            && out_list.iter().any(|other| other.target() == edge.target())
        {
            return Ok(false);
        }

        self.events.edge_added.notify(&edge);
        in_list.push(edge.clone());
        out_list.push(edge);
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

        if let Some(list) = self.in_edges.get_mut(edge.target()) {
            list.remove(edge);
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

        for list in self.out_edges.iter_mut().map(|(_, list)| list) {
            extracted.extend(list.extract_if(&mut predicate));
        }

        self.detach_from_targets(&extracted);
        self.edge_count -= extracted.len();
        self.events.edge_removed.notify_all(&extracted);
        extracted.len()
    }

    fn clear_edges(&mut self) {
        if self.events.edge_removed.is_empty() {
            self.out_edges.clear_lists();
            self.in_edges.clear_lists();
            self.edge_count = 0;
        } else {
            self.remove_edge_if(|_| true);
        }
    }
}

impl<V, E> OutEdgesMut for BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    fn remove_out_edge_if<P>(&mut self, vertex: &V, predicate: P) -> Result<usize, VertexNotFound>
    where
        P: FnMut(&E) -> bool,
    {
        let list = self.out_edges.get_mut(vertex).ok_or(VertexNotFound)?;
        let extracted = list.extract_if(predicate);

        self.detach_from_targets(&extracted);
        self.edge_count -= extracted.len();
        self.events.edge_removed.notify_all(&extracted);
        Ok(extracted.len())
    }

    fn trim_edge_excess(&mut self) {
        self.out_edges.trim_excess();
        self.in_edges.trim_excess();
    }
}

impl<V, E> InEdgesMut for BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    fn remove_in_edge_if<P>(&mut self, vertex: &V, predicate: P) -> Result<usize, VertexNotFound>
    where
        P: FnMut(&E) -> bool,
    {
        let list = self.in_edges.get_mut(vertex).ok_or(VertexNotFound)?;
        let extracted = list.extract_if(predicate);

        self.detach_from_sources(&extracted);
        self.edge_count -= extracted.len();
        self.events.edge_removed.notify_all(&extracted);
        Ok(extracted.len())
    }
}

impl<V, E> GraphMut for BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    fn clear(&mut self) {
        self.clear_edges();
        self.events
            .vertex_removed
            .notify_all(self.out_edges.vertices());
        self.out_edges.clear();
        self.in_edges.clear();
    }
}

impl<V, E> Create for BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self::with_config(
            Config::default()
                .vertex_capacity(vertex_capacity)
                .edge_capacity(per_vertex_capacity(vertex_capacity, edge_capacity)),
        )
    }
}

impl<V, E> Observable for BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    fn events(&self) -> &GraphEvents<V, E> {
        &self.events
    }

    fn events_mut(&mut self) -> &mut GraphEvents<V, E> {
        &mut self.events
    }
}
