//! Immutable snapshots of graphs.
//!
//! The snapshots are built in a single pass over a source graph and have no
//! mutation API. Their storage is shared behind an [`Arc`], so cloning a
//! snapshot is _O(1)_ and yields a handle to the very same graph (see
//! `shares_storage`). Snapshots can be sent to and read from multiple threads.

use std::{borrow::Borrow, collections::hash_map::Keys, hash::Hash, slice::Iter, sync::Arc};

use log::trace;

use crate::{
    common::{EdgeList, VertexEdgeMap},
    core::{
        AdjacentEdges, Edge, EdgeEquality, EdgeSet, GraphBase, InEdges, OutEdges,
        UndirectedVertexEquality, VertexNotFound, VertexSet,
    },
};

use super::{
    shared::{EdgesIter, SourceEdgesIter},
    AdjacencyGraph, BidirectionalGraph, UndirectedGraph,
};

#[derive(Debug)]
struct DirectedStorage<V, E> {
    out_edges: VertexEdgeMap<V, E>,
    in_edges: Option<VertexEdgeMap<V, E>>,
    edge_count: usize,
    allow_parallel_edges: bool,
}

/// Fills a fresh map with the edges of every vertex as listed by `edges_of`.
fn collect_lists<'g, V, E, I, F>(vertices: I, mut edges_of: F) -> VertexEdgeMap<V, E>
where
    V: Clone + Eq + Hash + 'g,
    I: Iterator<Item = &'g V>,
    F: FnMut(&V) -> Vec<E>,
{
    let (lower, _) = vertices.size_hint();
    let mut lists = VertexEdgeMap::with_capacity(lower, 0);

    for vertex in vertices {
        let edges = edges_of(vertex);
        lists.insert_vertex(vertex.clone());
        if let Some(list) = lists.get_mut(vertex) {
            list.extend(edges);
            list.trim_excess();
        }
    }

    lists
}

fn cloned_edges<E, R, I>(edges: Option<I>) -> Vec<E>
where
    E: Clone,
    R: Borrow<E>,
    I: Iterator<Item = R>,
{
    edges
        .into_iter()
        .flatten()
        .map(|edge| {
            let edge: &E = edge.borrow();
            edge.clone()
        })
        .collect()
}

/// Immutable directed graph with out-edges.
#[derive(Debug)]
pub struct ArrayAdjacencyGraph<V, E> {
    storage: Arc<DirectedStorage<V, E>>,
}

impl<V, E> ArrayAdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: VertexSet<Vertex = V, Edge = E> + OutEdges,
    {
        let out_edges = collect_lists(graph.vertices(), |vertex| {
            cloned_edges(graph.try_out_edges(vertex))
        });
        let edge_count = out_edges.edge_count();

        trace!(
            "built array adjacency graph with {} vertices and {} edges",
            out_edges.len(),
            edge_count
        );

        Self {
            storage: Arc::new(DirectedStorage {
                out_edges,
                in_edges: None,
                edge_count,
                allow_parallel_edges: graph.allow_parallel_edges(),
            }),
        }
    }

    /// Returns `true` if both handles refer to the same graph.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }
}

/// Immutable directed graph with both out-edges and in-edges.
#[derive(Debug)]
pub struct ArrayBidirectionalGraph<V, E> {
    storage: Arc<DirectedStorage<V, E>>,
}

impl<V, E> ArrayBidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: VertexSet<Vertex = V, Edge = E> + InEdges,
    {
        let out_edges = collect_lists(graph.vertices(), |vertex| {
            cloned_edges(graph.try_out_edges(vertex))
        });
        let in_edges = collect_lists(graph.vertices(), |vertex| {
            cloned_edges(graph.try_in_edges(vertex))
        });
        let edge_count = out_edges.edge_count();

        trace!(
            "built array bidirectional graph with {} vertices and {} edges",
            out_edges.len(),
            edge_count
        );

        Self {
            storage: Arc::new(DirectedStorage {
                out_edges,
                in_edges: Some(in_edges),
                edge_count,
                allow_parallel_edges: graph.allow_parallel_edges(),
            }),
        }
    }

    /// Returns `true` if both handles refer to the same graph.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }
}

#[derive(Debug)]
struct UndirectedStorage<V, E, Q> {
    adjacent_edges: VertexEdgeMap<V, E>,
    edge_count: usize,
    allow_parallel_edges: bool,
    equality: Q,
}

/// Immutable undirected graph.
///
/// A snapshot of an [`UndirectedGraph`] keeps its [`EdgeEquality`] strategy.
#[derive(Debug)]
pub struct ArrayUndirectedGraph<V, E, Q = UndirectedVertexEquality> {
    storage: Arc<UndirectedStorage<V, E, Q>>,
}

impl<V, E> ArrayUndirectedGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: VertexSet<Vertex = V, Edge = E> + AdjacentEdges,
    {
        Self::from_graph_with_equality(graph, UndirectedVertexEquality)
    }
}

impl<V, E, Q> ArrayUndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    pub fn from_graph_with_equality<G>(graph: &G, equality: Q) -> Self
    where
        G: VertexSet<Vertex = V, Edge = E> + AdjacentEdges,
    {
        let adjacent_edges = collect_lists(graph.vertices(), |vertex| {
            cloned_edges(graph.try_adjacent_edges(vertex))
        });

        // Every edge is listed at both endpoints, a self-edge once.
        let self_edges = adjacent_edges
            .lists()
            .flatten()
            .filter(|edge| edge.is_self_edge())
            .count();
        let edge_count = (adjacent_edges.edge_count() + self_edges) / 2;

        trace!(
            "built array undirected graph with {} vertices and {} edges",
            adjacent_edges.len(),
            edge_count
        );

        Self {
            storage: Arc::new(UndirectedStorage {
                adjacent_edges,
                edge_count,
                allow_parallel_edges: graph.allow_parallel_edges(),
                equality,
            }),
        }
    }

    /// Returns `true` if both handles refer to the same graph.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }
}

macro_rules! impl_shared_clone {
    ($($graph:ident),*) => {
        $(
            impl<V, E> Clone for $graph<V, E> {
                fn clone(&self) -> Self {
                    Self {
                        storage: Arc::clone(&self.storage),
                    }
                }
            }
        )*
    };
}

impl_shared_clone!(ArrayAdjacencyGraph, ArrayBidirectionalGraph);

impl<V, E, Q> Clone for ArrayUndirectedGraph<V, E, Q> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

macro_rules! impl_directed_read {
    ($graph:ident) => {
        impl<V, E> GraphBase for $graph<V, E>
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
                self.storage.allow_parallel_edges
            }

            fn contains_vertex(&self, vertex: &V) -> bool {
                self.storage.out_edges.contains_vertex(vertex)
            }
        }

        impl<V, E> VertexSet for $graph<V, E>
        where
            V: Clone + Eq + Hash,
            E: Edge<V> + PartialEq,
        {
            type VerticesIter<'a> = Keys<'a, V, EdgeList<E>>
            where
                Self: 'a;

            fn vertices(&self) -> Self::VerticesIter<'_> {
                self.storage.out_edges.vertices()
            }

            fn vertex_count(&self) -> usize {
                self.storage.out_edges.len()
            }
        }

        impl<V, E> EdgeSet for $graph<V, E>
        where
            V: Clone + Eq + Hash,
            E: Edge<V> + PartialEq,
        {
            type EdgesIter<'a> = EdgesIter<'a, V, E>
            where
                Self: 'a;

            fn edges(&self) -> Self::EdgesIter<'_> {
                EdgesIter::new(self.storage.out_edges.lists())
            }

            fn contains_edge(&self, edge: &E) -> bool {
                self.storage
                    .out_edges
                    .get(edge.source())
                    .map_or(false, |list| list.contains(edge))
            }

            fn edge_count(&self) -> usize {
                self.storage.edge_count
            }
        }

        impl<V, E> OutEdges for $graph<V, E>
        where
            V: Clone + Eq + Hash,
            E: Edge<V> + PartialEq,
        {
            type OutEdgesIter<'a> = Iter<'a, E>
            where
                Self: 'a;

            fn try_out_edges(&self, vertex: &V) -> Option<Self::OutEdgesIter<'_>> {
                self.storage.out_edges.get(vertex).map(EdgeList::iter)
            }

            fn out_degree(&self, vertex: &V) -> Result<usize, VertexNotFound> {
                self.storage
                    .out_edges
                    .get(vertex)
                    .map(EdgeList::len)
                    .ok_or(VertexNotFound)
            }
        }
    };
}

impl_directed_read!(ArrayAdjacencyGraph);
impl_directed_read!(ArrayBidirectionalGraph);

impl<V, E> InEdges for ArrayBidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
{
    type InEdgesIter<'a> = Iter<'a, E>
    where
        Self: 'a;

    fn try_in_edges(&self, vertex: &V) -> Option<Self::InEdgesIter<'_>> {
        self.storage
            .in_edges
            .as_ref()?
            .get(vertex)
            .map(EdgeList::iter)
    }
}

impl<V, E, Q> GraphBase for ArrayUndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
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
        self.storage.allow_parallel_edges
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.storage.adjacent_edges.contains_vertex(vertex)
    }
}

impl<V, E, Q> VertexSet for ArrayUndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    Q: EdgeEquality<V, E>,
{
    type VerticesIter<'a> = Keys<'a, V, EdgeList<E>>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.storage.adjacent_edges.vertices()
    }

    fn vertex_count(&self) -> usize {
        self.storage.adjacent_edges.len()
    }
}

impl<V, E, Q> EdgeSet for ArrayUndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    Q: EdgeEquality<V, E>,
{
    type EdgesIter<'a> = SourceEdgesIter<'a, V, E>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_> {
        SourceEdgesIter::new(self.storage.adjacent_edges.iter())
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.storage
            .adjacent_edges
            .get(edge.source())
            .map_or(false, |list| list.contains(edge))
    }

    fn edge_count(&self) -> usize {
        self.storage.edge_count
    }

    fn is_edges_empty(&self) -> bool {
        self.storage.edge_count == 0
    }
}

impl<V, E, Q> AdjacentEdges for ArrayUndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    Q: EdgeEquality<V, E>,
{
    type AdjacentEdgesIter<'a> = Iter<'a, E>
    where
        Self: 'a;

    fn try_adjacent_edges(&self, vertex: &V) -> Option<Self::AdjacentEdgesIter<'_>> {
        self.storage.adjacent_edges.get(vertex).map(EdgeList::iter)
    }

    fn adjacent_degree(&self, vertex: &V) -> Result<usize, VertexNotFound> {
        self.storage
            .adjacent_edges
            .get(vertex)
            .map(EdgeList::len)
            .ok_or(VertexNotFound)
    }

    fn connects_undirected(&self, edge: &E, source: &V, target: &V) -> bool {
        self.storage.equality.connects(edge, source, target)
    }
}

impl<V, E> From<&AdjacencyGraph<V, E>> for ArrayAdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    fn from(graph: &AdjacencyGraph<V, E>) -> Self {
        Self::from_graph(graph)
    }
}

impl<V, E> From<&BidirectionalGraph<V, E>> for ArrayAdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    fn from(graph: &BidirectionalGraph<V, E>) -> Self {
        Self::from_graph(graph)
    }
}

impl<V, E> From<&BidirectionalGraph<V, E>> for ArrayBidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
{
    fn from(graph: &BidirectionalGraph<V, E>) -> Self {
        Self::from_graph(graph)
    }
}

impl<V, E, Q> From<&UndirectedGraph<V, E, Q>> for ArrayUndirectedGraph<V, E, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq + Clone,
    Q: EdgeEquality<V, E> + Clone,
{
    fn from(graph: &UndirectedGraph<V, E, Q>) -> Self {
        Self::from_graph_with_equality(graph, graph.equality().clone())
    }
}
