//! Immutable directed graph in the compressed sparse row format.
//!
//! The targets of all out-edges are stored in a single flat array and every
//! vertex owns a contiguous `[start, end)` range of it. Edges are not stored as
//! values but synthesized as [`SEdge`] on every query, so the graph works with
//! any vertex type but keeps no edge payload.
//!
//! ```
//! use quiver::{core::{EdgeSet, OutEdges, SEdge}, storage::CompressedSparseRowGraph};
//!
//! let graph = CompressedSparseRowGraph::from_ranges(
//!     [("a", 0..2), ("b", 2..3), ("c", 3..3)],
//!     vec!["b", "c", "c"],
//! )
//! .unwrap();
//!
//! assert_eq!(graph.edge_count(), 3);
//! assert_eq!(graph.out_degree(&"a"), Ok(2));
//! assert!(graph.contains_edge(&SEdge::new("b", "c")));
//! ```

use std::{borrow::Borrow, hash::Hash, ops::Range, slice::Iter, sync::Arc};

use fixedbitset::FixedBitSet;
use log::trace;
use rustc_hash::FxHashMap;

use crate::core::{CsrError, Edge, EdgeSet, GraphBase, OutEdges, SEdge, VertexNotFound, VertexSet};

#[derive(Debug)]
struct CsrStorage<V> {
    vertices: Vec<V>,
    ranges: FxHashMap<V, Range<usize>>,
    targets: Vec<V>,
    edge_count: usize,
    allow_parallel_edges: bool,
}

#[derive(Debug)]
pub struct CompressedSparseRowGraph<V> {
    storage: Arc<CsrStorage<V>>,
}

impl<V> CompressedSparseRowGraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Builds the graph from the out-edges of every vertex of a source graph.
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: VertexSet<Vertex = V> + OutEdges,
    {
        let mut vertices = Vec::with_capacity(graph.vertex_count());
        let mut ranges = FxHashMap::default();
        let mut targets = Vec::new();

        for vertex in graph.vertices() {
            let start = targets.len();
            targets.extend(graph.try_out_edges(vertex).into_iter().flatten().map(|edge| {
                let edge: &G::Edge = edge.borrow();
                edge.target().clone()
            }));

            vertices.push(vertex.clone());
            ranges.insert(vertex.clone(), start..targets.len());
        }

        trace!(
            "built compressed sparse row graph with {} vertices and {} edges",
            vertices.len(),
            targets.len()
        );

        Self::from_parts(vertices, ranges, targets, graph.allow_parallel_edges())
    }

    /// Builds the graph from `(vertex, range)` pairs indexing into `targets`.
    ///
    /// Vertices are numbered in the order they are given for the purpose of
    /// error reporting. Ranges must be well-formed, lie within `targets` and
    /// must not overlap each other, every vertex must be listed once, and every
    /// target within a range must be one of the listed vertices. Target slots
    /// not covered by any range are ignored, whatever they hold.
    pub fn from_ranges<I>(ranges: I, targets: Vec<V>) -> Result<Self, CsrError>
    where
        I: IntoIterator<Item = (V, Range<usize>)>,
    {
        let mut covered = FixedBitSet::with_capacity(targets.len());
        let mut vertices = Vec::new();
        let mut range_map = FxHashMap::default();

        for (position, (vertex, range)) in ranges.into_iter().enumerate() {
            if range.start > range.end {
                return Err(CsrError::InvertedRange {
                    vertex: position,
                    start: range.start,
                    end: range.end,
                });
            }

            if range.end > targets.len() {
                return Err(CsrError::RangeOutOfBounds {
                    vertex: position,
                    end: range.end,
                    len: targets.len(),
                });
            }

            if range_map.contains_key(&vertex) {
                return Err(CsrError::DuplicateVertex { vertex: position });
            }

            for index in range.clone() {
                if covered.put(index) {
                    return Err(CsrError::OverlappingRanges {
                        vertex: position,
                        index,
                    });
                }
            }

            vertices.push(vertex.clone());
            range_map.insert(vertex, range);
        }

        if let Some(index) = targets.iter().enumerate().position(|(index, target)| {
            covered.contains(index) && !range_map.contains_key(target)
        }) {
            return Err(CsrError::DanglingTarget { index });
        }

        trace!(
            "built compressed sparse row graph from {} ranges over {} targets",
            vertices.len(),
            targets.len()
        );

        Ok(Self::from_parts(vertices, range_map, targets, true))
    }

    fn from_parts(
        vertices: Vec<V>,
        ranges: FxHashMap<V, Range<usize>>,
        targets: Vec<V>,
        allow_parallel_edges: bool,
    ) -> Self {
        let edge_count = ranges.values().map(ExactSizeIterator::len).sum();

        Self {
            storage: Arc::new(CsrStorage {
                vertices,
                ranges,
                targets,
                edge_count,
                allow_parallel_edges,
            }),
        }
    }

    /// Returns `true` if both handles refer to the same graph.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }

    fn targets_of(&self, vertex: &V) -> Option<&[V]> {
        let range = self.storage.ranges.get(vertex)?;
        self.storage.targets.get(range.clone())
    }
}

impl<V> Clone for CompressedSparseRowGraph<V> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<V> GraphBase for CompressedSparseRowGraph<V>
where
    V: Clone + Eq + Hash,
{
    type Vertex = V;
    type Edge = SEdge<V>;
    type EdgeRef<'a> = SEdge<V>
    where
        Self: 'a;

    fn is_directed(&self) -> bool {
        true
    }

    fn allow_parallel_edges(&self) -> bool {
        self.storage.allow_parallel_edges
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.storage.ranges.contains_key(vertex)
    }
}

impl<V> VertexSet for CompressedSparseRowGraph<V>
where
    V: Clone + Eq + Hash,
{
    type VerticesIter<'a> = Iter<'a, V>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.storage.vertices.iter()
    }

    fn vertex_count(&self) -> usize {
        self.storage.vertices.len()
    }
}

impl<V> EdgeSet for CompressedSparseRowGraph<V>
where
    V: Clone + Eq + Hash,
{
    type EdgesIter<'a> = EdgesIter<'a, V>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_> {
        EdgesIter {
            graph: self,
            vertices: self.storage.vertices.iter(),
            current: None,
        }
    }

    fn contains_edge(&self, edge: &SEdge<V>) -> bool {
        self.targets_of(edge.source())
            .map_or(false, |targets| targets.contains(edge.target()))
    }

    fn edge_count(&self) -> usize {
        self.storage.edge_count
    }
}

impl<V> OutEdges for CompressedSparseRowGraph<V>
where
    V: Clone + Eq + Hash,
{
    type OutEdgesIter<'a> = OutEdgesIter<'a, V>
    where
        Self: 'a;

    fn try_out_edges(&self, vertex: &V) -> Option<Self::OutEdgesIter<'_>> {
        let (source, range) = self.storage.ranges.get_key_value(vertex)?;
        let targets = self.storage.targets.get(range.clone())?;

        Some(OutEdgesIter {
            source,
            targets: targets.iter(),
        })
    }

    fn out_degree(&self, vertex: &V) -> Result<usize, VertexNotFound> {
        self.storage
            .ranges
            .get(vertex)
            .map(ExactSizeIterator::len)
            .ok_or(VertexNotFound)
    }
}

/// Out-edges of a single vertex, synthesized from its target range.
pub struct OutEdgesIter<'a, V> {
    source: &'a V,
    targets: Iter<'a, V>,
}

impl<'a, V: Clone> Iterator for OutEdgesIter<'a, V> {
    type Item = SEdge<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let target = self.targets.next()?;
        Some(SEdge::new(self.source.clone(), target.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.targets.size_hint()
    }
}

/// All edges of the graph, vertex by vertex.
pub struct EdgesIter<'a, V> {
    graph: &'a CompressedSparseRowGraph<V>,
    vertices: Iter<'a, V>,
    current: Option<OutEdgesIter<'a, V>>,
}

impl<'a, V> Iterator for EdgesIter<'a, V>
where
    V: Clone + Eq + Hash,
{
    type Item = SEdge<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(edge) = self.current.as_mut().and_then(Iterator::next) {
                return Some(edge);
            }

            let vertex = self.vertices.next()?;
            self.current = self.graph.try_out_edges(vertex);
        }
    }
}
