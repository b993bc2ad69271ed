//! Graph stored as a set of edges.
//!
//! There is no incidence structure, the graph is just a hash set of edge
//! values. The vertex set is derived from the endpoints of the stored edges: a
//! vertex appears with its first incident edge and disappears with the last
//! one. Consequently, adding an edge never fails because of a missing endpoint,
//! and isolated vertices cannot be represented.
//!
//! Whether the graph is directed is decided at construction and affects only
//! which edges count as parallel.

use std::{
    collections::{hash_map::Keys, hash_set},
    hash::Hash,
    mem,
};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{
    AddEdgeError, Config, Edge, EdgeSet, EdgeSetMut, GraphBase, GraphEvents, Observable,
    VertexSet,
};

#[derive(Debug, Clone)]
pub struct EdgeListGraph<V, E> {
    edges: FxHashSet<E>,
    // Number of edge endpoints at each vertex. A self-edge counts twice.
    endpoints: FxHashMap<V, usize>,
    is_directed: bool,
    allow_parallel_edges: bool,
    events: GraphEvents<V, E>,
}

impl<V: Eq + Hash, E: Eq + Hash> EdgeListGraph<V, E> {
    pub fn new_directed() -> Self {
        Self::with_config(true, Config::default())
    }

    pub fn new_undirected() -> Self {
        Self::with_config(false, Config::default())
    }

    /// The edge capacity of the configuration is used as the capacity of the
    /// whole edge set.
    pub fn with_config(is_directed: bool, config: Config) -> Self {
        let mut edges = FxHashSet::default();
        edges.reserve(config.edge_capacity);
        let mut endpoints = FxHashMap::default();
        endpoints.reserve(config.vertex_capacity);

        Self {
            edges,
            endpoints,
            is_directed,
            allow_parallel_edges: config.allow_parallel_edges,
            events: GraphEvents::new(),
        }
    }
}

impl<V, E> EdgeListGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + Eq + Hash,
{
    /// Returns `true` if there is an edge between the vertices, respecting the
    /// direction for directed graphs. The query is _O(E)_.
    pub fn contains_edge_between(&self, source: &V, target: &V) -> bool {
        self.edges
            .iter()
            .any(|edge| self.connects(edge, source, target))
    }

    fn connects(&self, edge: &E, source: &V, target: &V) -> bool {
        (edge.source() == source && edge.target() == target)
            || (!self.is_directed && edge.source() == target && edge.target() == source)
    }

    fn attach(&mut self, vertex: &V) {
        match self.endpoints.get_mut(vertex) {
            Some(count) => *count += 1,
            None => {
                self.events.vertex_added.notify(vertex);
                self.endpoints.insert(vertex.clone(), 1);
            }
        }
    }

    fn detach(&mut self, vertex: &V) {
        if let Some(count) = self.endpoints.get_mut(vertex) {
            *count -= 1;
            if *count == 0 {
                self.endpoints.remove(vertex);
                self.events.vertex_removed.notify(vertex);
            }
        }
    }

    fn release(&mut self, edge: &E) {
        self.events.edge_removed.notify(edge);
        self.detach(edge.source());
        self.detach(edge.target());
    }
}

impl<V: Eq + Hash, E: Eq + Hash> Default for EdgeListGraph<V, E> {
    fn default() -> Self {
        Self::new_directed()
    }
}

impl<V, E> GraphBase for EdgeListGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + Eq + Hash,
{
    type Vertex = V;
    type Edge = E;
    type EdgeRef<'a> = &'a E
    where
        Self: 'a;

    fn is_directed(&self) -> bool {
        self.is_directed
    }

    fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.endpoints.contains_key(vertex)
    }
}

impl<V, E> VertexSet for EdgeListGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + Eq + Hash,
{
    type VerticesIter<'a> = Keys<'a, V, usize>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.endpoints.keys()
    }

    fn vertex_count(&self) -> usize {
        self.endpoints.len()
    }
}

impl<V, E> EdgeSet for EdgeListGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + Eq + Hash,
{
    type EdgesIter<'a> = hash_set::Iter<'a, E>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_> {
        self.edges.iter()
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.edges.contains(edge)
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V, E> EdgeSetMut for EdgeListGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + Eq + Hash,
{
    /// Never fails. Returns `Ok(false)` if an equal edge is already stored or
    /// if parallel edges are not allowed and the endpoints are already
    /// connected.
    fn add_edge(&mut self, edge: E) -> Result<bool, AddEdgeError<E>> {
        if self.edges.contains(&edge) {
            return Ok(false);
        }

        if !self.allow_parallel_edges
            && self.contains_edge_between(edge.source(), edge.target())
        {
            return Ok(false);
        }

        self.attach(edge.source());
        self.attach(edge.target());
        self.events.edge_added.notify(&edge);
        self.edges.insert(edge);
        Ok(true)
    }

    fn remove_edge(&mut self, edge: &E) -> bool {
        match self.edges.take(edge) {
            Some(removed) => {
                self.release(&removed);
                true
            }
            None => false,
        }
    }

    fn remove_edge_if<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&E) -> bool,
    {
        let (removed, kept): (Vec<E>, Vec<E>) = mem::take(&mut self.edges)
            .into_iter()
            .partition(|edge| predicate(edge));
        self.edges = kept.into_iter().collect();

        for edge in removed.iter() {
            self.release(edge);
        }

        removed.len()
    }

    fn clear_edges(&mut self) {
        if self.events.edge_removed.is_empty() && self.events.vertex_removed.is_empty() {
            self.edges.clear();
            self.endpoints.clear();
        } else {
            self.remove_edge_if(|_| true);
        }
    }
}

impl<V, E> Observable for EdgeListGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + Eq + Hash,
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
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{
        core::{SEdge, TaggedEdge},
        infra::testing::{check_consistency, check_drain_edges},
    };

    #[test]
    fn vertices_follow_edges() {
        let mut graph = EdgeListGraph::new_directed();

        assert_eq!(graph.add_edge(SEdge::new(1, 2)), Ok(true));
        assert_eq!(graph.add_edge(SEdge::new(2, 2)), Ok(true));
        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.contains_vertex(&1));

        assert!(graph.remove_edge(&SEdge::new(1, 2)));
        assert!(!graph.contains_vertex(&1));
        assert!(graph.contains_vertex(&2));

        assert!(graph.remove_edge(&SEdge::new(2, 2)));
        assert!(graph.is_vertices_empty());
        assert!(!graph.remove_edge(&SEdge::new(2, 2)));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn duplicate_edge_rejected() {
        let mut graph = EdgeListGraph::new_directed();

        assert_eq!(graph.add_edge(SEdge::new(1, 2)), Ok(true));
        assert_eq!(graph.add_edge(SEdge::new(1, 2)), Ok(false));
        assert_eq!(graph.add_edge(SEdge::new(2, 1)), Ok(true));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn parallel_edges_by_direction() {
        let config = Config::default().parallel_edges(false);

        let mut directed = EdgeListGraph::with_config(true, config);
        directed.add_edge(TaggedEdge::new(1, 2, 'a')).unwrap();
        assert_eq!(directed.add_edge(TaggedEdge::new(1, 2, 'b')), Ok(false));
        assert_eq!(directed.add_edge(TaggedEdge::new(2, 1, 'c')), Ok(true));

        let mut undirected = EdgeListGraph::with_config(false, config);
        undirected.add_edge(TaggedEdge::new(1, 2, 'a')).unwrap();
        assert_eq!(undirected.add_edge(TaggedEdge::new(2, 1, 'c')), Ok(false));
        assert!(undirected.contains_edge_between(&2, &1));
        assert!(directed.is_directed());
        assert!(!undirected.is_directed());
    }

    #[test]
    fn parallel_edges_allowed() {
        let mut graph = EdgeListGraph::new_undirected();

        assert_eq!(graph.add_edge(TaggedEdge::new(1, 2, 'a')), Ok(true));
        assert_eq!(graph.add_edge(TaggedEdge::new(2, 1, 'b')), Ok(true));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn remove_edge_if() {
        let mut graph = EdgeListGraph::new_directed();
        for vertex in 0..5u32 {
            graph.add_edge(SEdge::new(vertex, vertex + 1)).unwrap();
        }

        assert_eq!(graph.remove_edge_if(|edge| *edge.source() < 2), 2);
        assert_eq!(graph.edge_count(), 3);
        assert!(!graph.contains_vertex(&0));
        assert!(!graph.contains_vertex(&1));
        assert!(graph.contains_vertex(&2));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn drain_edges() {
        let mut graph = EdgeListGraph::new_undirected();
        graph.add_edge(SEdge::new(1, 2)).unwrap();
        graph.add_edge(SEdge::new(2, 3)).unwrap();

        check_drain_edges(&mut graph).unwrap();
        assert!(graph.is_vertices_empty());
    }

    #[test]
    fn vertex_events() {
        let mut graph = EdgeListGraph::new_directed();
        let log = Arc::new(Mutex::new(Vec::new()));

        let added = Arc::clone(&log);
        graph
            .events_mut()
            .vertex_added
            .subscribe(move |vertex: &u32| added.lock().unwrap().push(("+", *vertex)));
        let removed = Arc::clone(&log);
        graph
            .events_mut()
            .vertex_removed
            .subscribe(move |vertex: &u32| removed.lock().unwrap().push(("-", *vertex)));

        graph.add_edge(SEdge::new(1, 2)).unwrap();
        graph.add_edge(SEdge::new(2, 3)).unwrap();
        graph.remove_edge(&SEdge::new(1, 2));
        graph.clear_edges();

        assert_eq!(
            *log.lock().unwrap(),
            vec![("+", 1), ("+", 2), ("+", 3), ("-", 1), ("-", 2), ("-", 3)]
        );
    }
}
