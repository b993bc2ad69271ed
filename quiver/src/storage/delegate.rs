//! Graphs without storage of their own.
//!
//! A delegate graph answers incidence queries by calling a user-supplied
//! function. The function is called on every query, so the graph always
//! reflects the current state of whatever data the function reads. Edges are
//! produced by value.
//!
//! A vertex is in the graph if the delegate returns `Some` for it and, for the
//! graphs with an explicit vertex list, the vertex is listed.
//!
//! ```
//! use quiver::{core::{OutEdges, SEdge}, storage::DelegateIncidenceGraph};
//!
//! // Collatz successor graph over positive integers.
//! let graph = DelegateIncidenceGraph::new(|n: &u64| {
//!     if *n == 0 {
//!         return None;
//!     }
//!
//!     let next = if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
//!     Some([SEdge::new(*n, next)])
//! });
//!
//! assert_eq!(graph.out_edges(&6).unwrap().next(), Some(SEdge::new(6, 3)));
//! assert!(graph.out_edges(&0).is_err());
//! ```

use std::{hash::Hash, marker::PhantomData, slice::Iter};

use rustc_hash::FxHashSet;

use crate::core::{
    AdjacentEdges, Edge, EdgeEquality, EdgeSet, GraphBase, InEdges, OutEdges,
    UndirectedVertexEquality, VertexSet,
};

/// Source of the edges incident with a vertex.
///
/// Implemented for every function `Fn(&V) -> Option<I>` where `I` is an
/// iterable of edges. Returning `None` means the vertex does not exist.
pub trait EdgeDelegate<V> {
    type Edge;
    type Iter: Iterator<Item = Self::Edge>;

    fn delegate(&self, vertex: &V) -> Option<Self::Iter>;
}

impl<V, F, I> EdgeDelegate<V> for F
where
    F: Fn(&V) -> Option<I>,
    I: IntoIterator,
{
    type Edge = I::Item;
    type Iter = I::IntoIter;

    fn delegate(&self, vertex: &V) -> Option<Self::Iter> {
        self(vertex).map(IntoIterator::into_iter)
    }
}

/// Directed graph with out-edges produced by a delegate.
///
/// The vertex set cannot be enumerated, only tested.
#[derive(Clone)]
pub struct DelegateIncidenceGraph<V, E, F> {
    out_edges: F,
    allow_parallel_edges: bool,
    ty: PhantomData<fn() -> (V, E)>,
}

impl<V, E, F> DelegateIncidenceGraph<V, E, F>
where
    F: EdgeDelegate<V, Edge = E>,
{
    pub fn new(out_edges: F) -> Self {
        Self {
            out_edges,
            allow_parallel_edges: true,
            ty: PhantomData,
        }
    }

    /// Declares whether the delegate may produce parallel edges.
    pub fn parallel_edges(self, allow: bool) -> Self {
        Self {
            allow_parallel_edges: allow,
            ..self
        }
    }
}

impl<V, E, F> GraphBase for DelegateIncidenceGraph<V, E, F>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    F: EdgeDelegate<V, Edge = E>,
{
    type Vertex = V;
    type Edge = E;
    type EdgeRef<'a> = E
    where
        Self: 'a;

    fn is_directed(&self) -> bool {
        true
    }

    fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.out_edges.delegate(vertex).is_some()
    }
}

impl<V, E, F> OutEdges for DelegateIncidenceGraph<V, E, F>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    F: EdgeDelegate<V, Edge = E>,
{
    type OutEdgesIter<'a> = F::Iter
    where
        Self: 'a;

    fn try_out_edges(&self, vertex: &V) -> Option<Self::OutEdgesIter<'_>> {
        self.out_edges.delegate(vertex)
    }
}

/// Directed graph with an explicit list of vertices and out-edges produced by
/// a delegate.
///
/// Edges leading to a vertex that is not in the graph are skipped, so that the
/// edge set only ever connects enumerated vertices.
#[derive(Clone)]
pub struct DelegateVertexAndEdgeListGraph<V, E, F> {
    list: VertexList<V>,
    out_edges: F,
    allow_parallel_edges: bool,
    ty: PhantomData<fn() -> E>,
}

impl<V, E, F> DelegateVertexAndEdgeListGraph<V, E, F>
where
    V: Clone + Eq + Hash,
    F: EdgeDelegate<V, Edge = E>,
{
    /// Duplicates in the vertex list are dropped.
    pub fn new<I>(vertices: I, out_edges: F) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self {
            list: VertexList::new(vertices),
            out_edges,
            allow_parallel_edges: true,
            ty: PhantomData,
        }
    }

    pub fn parallel_edges(self, allow: bool) -> Self {
        Self {
            allow_parallel_edges: allow,
            ..self
        }
    }
}

impl<V, E, F> GraphBase for DelegateVertexAndEdgeListGraph<V, E, F>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    F: EdgeDelegate<V, Edge = E>,
{
    type Vertex = V;
    type Edge = E;
    type EdgeRef<'a> = E
    where
        Self: 'a;

    fn is_directed(&self) -> bool {
        true
    }

    fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.list.contains(&self.out_edges, vertex)
    }
}

impl<V, E, F> VertexSet for DelegateVertexAndEdgeListGraph<V, E, F>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    F: EdgeDelegate<V, Edge = E>,
{
    type VerticesIter<'a> = ListedVerticesIter<'a, V, F>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.list.vertices(&self.out_edges)
    }

    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

impl<V, E, F> EdgeSet for DelegateVertexAndEdgeListGraph<V, E, F>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    F: EdgeDelegate<V, Edge = E>,
{
    type EdgesIter<'a> = DelegateEdgesIter<'a, V, F>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_> {
        DelegateEdgesIter::new(&self.list, &self.out_edges)
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.try_out_edges(edge.source())
            .map_or(false, |mut edges| edges.any(|other| &other == edge))
    }
}

impl<V, E, F> OutEdges for DelegateVertexAndEdgeListGraph<V, E, F>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    F: EdgeDelegate<V, Edge = E>,
{
    type OutEdgesIter<'a> = ListedEdgesIter<'a, V, F>
    where
        Self: 'a;

    fn try_out_edges(&self, vertex: &V) -> Option<Self::OutEdgesIter<'_>> {
        self.list.edges(&self.out_edges, vertex, true)
    }
}

/// Directed graph with out-edges and in-edges produced by two delegates.
///
/// The delegates are expected to agree with each other: an edge returned as an
/// out-edge of its source should be returned as an in-edge of its target.
#[derive(Clone)]
pub struct DelegateBidirectionalIncidenceGraph<V, E, F, G> {
    out_edges: F,
    in_edges: G,
    allow_parallel_edges: bool,
    ty: PhantomData<fn() -> (V, E)>,
}

impl<V, E, F, G> DelegateBidirectionalIncidenceGraph<V, E, F, G>
where
    F: EdgeDelegate<V, Edge = E>,
    G: EdgeDelegate<V, Edge = E>,
{
    pub fn new(out_edges: F, in_edges: G) -> Self {
        Self {
            out_edges,
            in_edges,
            allow_parallel_edges: true,
            ty: PhantomData,
        }
    }

    pub fn parallel_edges(self, allow: bool) -> Self {
        Self {
            allow_parallel_edges: allow,
            ..self
        }
    }
}

impl<V, E, F, G> GraphBase for DelegateBidirectionalIncidenceGraph<V, E, F, G>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    F: EdgeDelegate<V, Edge = E>,
    G: EdgeDelegate<V, Edge = E>,
{
    type Vertex = V;
    type Edge = E;
    type EdgeRef<'a> = E
    where
        Self: 'a;

    fn is_directed(&self) -> bool {
        true
    }

    fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.out_edges.delegate(vertex).is_some()
    }
}

impl<V, E, F, G> OutEdges for DelegateBidirectionalIncidenceGraph<V, E, F, G>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    F: EdgeDelegate<V, Edge = E>,
    G: EdgeDelegate<V, Edge = E>,
{
    type OutEdgesIter<'a> = F::Iter
    where
        Self: 'a;

    fn try_out_edges(&self, vertex: &V) -> Option<Self::OutEdgesIter<'_>> {
        self.out_edges.delegate(vertex)
    }
}

impl<V, E, F, G> InEdges for DelegateBidirectionalIncidenceGraph<V, E, F, G>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    F: EdgeDelegate<V, Edge = E>,
    G: EdgeDelegate<V, Edge = E>,
{
    type InEdgesIter<'a> = G::Iter
    where
        Self: 'a;

    fn try_in_edges(&self, vertex: &V) -> Option<Self::InEdgesIter<'_>> {
        if !self.contains_vertex(vertex) {
            return None;
        }

        self.in_edges.delegate(vertex)
    }
}

/// Undirected graph with an explicit list of vertices and incident edges
/// produced by a delegate.
///
/// The delegate is expected to return every edge for both of its endpoints
/// (a self-edge once), the way [`UndirectedGraph`](super::UndirectedGraph)
/// stores them. Edges whose other endpoint is not in the graph are skipped.
#[derive(Clone)]
pub struct DelegateUndirectedGraph<V, E, F, Q = UndirectedVertexEquality> {
    list: VertexList<V>,
    adjacent_edges: F,
    equality: Q,
    allow_parallel_edges: bool,
    ty: PhantomData<fn() -> E>,
}

impl<V, E, F> DelegateUndirectedGraph<V, E, F>
where
    V: Clone + Eq + Hash,
    F: EdgeDelegate<V, Edge = E>,
{
    pub fn new<I>(vertices: I, adjacent_edges: F) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::with_equality(vertices, adjacent_edges, UndirectedVertexEquality)
    }
}

impl<V, E, F, Q> DelegateUndirectedGraph<V, E, F, Q>
where
    V: Clone + Eq + Hash,
    F: EdgeDelegate<V, Edge = E>,
{
    pub fn with_equality<I>(vertices: I, adjacent_edges: F, equality: Q) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self {
            list: VertexList::new(vertices),
            adjacent_edges,
            equality,
            allow_parallel_edges: true,
            ty: PhantomData,
        }
    }

    pub fn parallel_edges(self, allow: bool) -> Self {
        Self {
            allow_parallel_edges: allow,
            ..self
        }
    }
}

impl<V, E, F, Q> GraphBase for DelegateUndirectedGraph<V, E, F, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    F: EdgeDelegate<V, Edge = E>,
    Q: EdgeEquality<V, E>,
{
    type Vertex = V;
    type Edge = E;
    type EdgeRef<'a> = E
    where
        Self: 'a;

    fn is_directed(&self) -> bool {
        false
    }

    fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.list.contains(&self.adjacent_edges, vertex)
    }
}

impl<V, E, F, Q> VertexSet for DelegateUndirectedGraph<V, E, F, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    F: EdgeDelegate<V, Edge = E>,
    Q: EdgeEquality<V, E>,
{
    type VerticesIter<'a> = ListedVerticesIter<'a, V, F>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.list.vertices(&self.adjacent_edges)
    }

    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

impl<V, E, F, Q> EdgeSet for DelegateUndirectedGraph<V, E, F, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    F: EdgeDelegate<V, Edge = E>,
    Q: EdgeEquality<V, E>,
{
    type EdgesIter<'a> = DelegateEdgesIter<'a, V, F>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_> {
        DelegateEdgesIter::new(&self.list, &self.adjacent_edges)
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.try_adjacent_edges(edge.source())
            .map_or(false, |mut edges| edges.any(|other| &other == edge))
    }
}

impl<V, E, F, Q> AdjacentEdges for DelegateUndirectedGraph<V, E, F, Q>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + PartialEq,
    F: EdgeDelegate<V, Edge = E>,
    Q: EdgeEquality<V, E>,
{
    type AdjacentEdgesIter<'a> = ListedEdgesIter<'a, V, F>
    where
        Self: 'a;

    fn try_adjacent_edges(&self, vertex: &V) -> Option<Self::AdjacentEdgesIter<'_>> {
        self.list.edges(&self.adjacent_edges, vertex, false)
    }

    fn connects_undirected(&self, edge: &E, source: &V, target: &V) -> bool {
        self.equality.connects(edge, source, target)
    }
}

/// Vertices given on construction, deduplicated.
#[derive(Clone)]
struct VertexList<V> {
    vertices: Vec<V>,
    listed: FxHashSet<V>,
}

impl<V> VertexList<V>
where
    V: Clone + Eq + Hash,
{
    fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut vertices = vertices.into_iter().collect::<Vec<_>>();
        let mut listed = FxHashSet::default();
        vertices.retain(|vertex| listed.insert(vertex.clone()));

        Self { vertices, listed }
    }

    fn contains<F>(&self, delegate: &F, vertex: &V) -> bool
    where
        F: EdgeDelegate<V>,
    {
        self.listed.contains(vertex) && delegate.delegate(vertex).is_some()
    }

    fn vertices<'a, F>(&'a self, delegate: &'a F) -> ListedVerticesIter<'a, V, F>
    where
        F: EdgeDelegate<V>,
    {
        ListedVerticesIter {
            vertices: self.vertices.iter(),
            list: self,
            delegate,
        }
    }

    /// With `at_source`, only edges having `vertex` as their source are
    /// yielded.
    fn edges<'a, F>(
        &'a self,
        delegate: &'a F,
        vertex: &V,
        at_source: bool,
    ) -> Option<ListedEdgesIter<'a, V, F>>
    where
        F: EdgeDelegate<V>,
    {
        if !self.listed.contains(vertex) {
            return None;
        }

        Some(ListedEdgesIter {
            edges: delegate.delegate(vertex)?,
            vertex: vertex.clone(),
            list: self,
            delegate,
            at_source,
        })
    }
}

/// Listed vertices for which the delegate currently returns `Some`.
pub struct ListedVerticesIter<'a, V, F> {
    vertices: Iter<'a, V>,
    list: &'a VertexList<V>,
    delegate: &'a F,
}

impl<'a, V, F> Iterator for ListedVerticesIter<'a, V, F>
where
    V: Clone + Eq + Hash,
    F: EdgeDelegate<V>,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            vertices,
            list,
            delegate,
        } = self;

        vertices.find(|vertex| list.contains(*delegate, *vertex))
    }
}

/// Edges of a vertex returned by the delegate whose other endpoint is in the
/// graph.
pub struct ListedEdgesIter<'a, V, F>
where
    F: EdgeDelegate<V>,
{
    edges: F::Iter,
    vertex: V,
    list: &'a VertexList<V>,
    delegate: &'a F,
    at_source: bool,
}

impl<'a, V, F> Iterator for ListedEdgesIter<'a, V, F>
where
    V: Clone + Eq + Hash,
    F: EdgeDelegate<V>,
    F::Edge: Edge<V>,
{
    type Item = F::Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            edges,
            vertex,
            list,
            delegate,
            at_source,
        } = self;
        let vertex = &*vertex;

        edges.find(|edge| {
            let other = if *at_source {
                (edge.source() == vertex).then_some(edge.target())
            } else {
                edge.other_vertex(vertex)
            };

            other.map_or(false, |other| {
                other == vertex || list.contains(*delegate, other)
            })
        })
    }
}

/// Edges of all vertices in the graph, queried from the delegate vertex by
/// vertex. An edge is yielded only for its source, so that edges reported for
/// both endpoints are yielded once.
pub struct DelegateEdgesIter<'a, V, F>
where
    F: EdgeDelegate<V>,
{
    list: &'a VertexList<V>,
    delegate: &'a F,
    vertices: Iter<'a, V>,
    current: Option<ListedEdgesIter<'a, V, F>>,
}

impl<'a, V, F> DelegateEdgesIter<'a, V, F>
where
    F: EdgeDelegate<V>,
{
    fn new(list: &'a VertexList<V>, delegate: &'a F) -> Self {
        Self {
            list,
            delegate,
            vertices: list.vertices.iter(),
            current: None,
        }
    }
}

impl<'a, V, F> Iterator for DelegateEdgesIter<'a, V, F>
where
    V: Clone + Eq + Hash,
    F: EdgeDelegate<V>,
    F::Edge: Edge<V>,
{
    type Item = F::Edge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(edge) = self.current.as_mut().and_then(Iterator::next) {
                return Some(edge);
            }

            let vertex = self.vertices.next()?;
            self.current = self.list.edges(self.delegate, vertex, true);
        }
    }
}
