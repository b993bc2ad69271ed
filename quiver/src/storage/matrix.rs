//! Dense directed graph over vertices `0..n`.
//!
//! Every ordered pair of vertices owns one slot of an `n × n` array, so
//! looking up an edge between two vertices is _O(1)_, while enumerating the
//! edges of a vertex is _O(V)_. A slot holds at most one edge and the graph
//! therefore refuses parallel edges with [`AddEdgeErrorKind::ParallelEdge`]
//! instead of the usual `Ok(false)`.
//!
//! The vertex set is fixed at construction and only edges can be added or
//! removed.

use std::{
    iter::{Flatten, Skip, StepBy},
    slice::Iter,
};

use crate::core::{
    AddEdgeError, AddEdgeErrorKind, Edge, EdgeSet, EdgeSetMut, GraphBase, GraphEvents, InEdges,
    InEdgesMut, Observable, OutEdges, OutEdgesMut, VertexNotFound, VertexSet,
};

#[derive(Debug, Clone)]
pub struct BidirectionalMatrixGraph<E> {
    vertices: Vec<usize>,
    slots: Vec<Option<E>>,
    edge_count: usize,
    events: GraphEvents<usize, E>,
}

impl<E> BidirectionalMatrixGraph<E> {
    pub fn new(vertex_count: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(vertex_count * vertex_count, || None);

        Self {
            vertices: (0..vertex_count).collect(),
            slots,
            edge_count: 0,
            events: GraphEvents::new(),
        }
    }

    fn size(&self) -> usize {
        self.vertices.len()
    }

    fn index(&self, source: usize, target: usize) -> Option<usize> {
        let n = self.size();
        (source < n && target < n).then(|| source * n + target)
    }

    fn row(&self, vertex: usize) -> Option<&[Option<E>]> {
        let n = self.size();
        (vertex < n).then(|| &self.slots[vertex * n..(vertex + 1) * n])
    }
}

impl<E> GraphBase for BidirectionalMatrixGraph<E>
where
    E: Edge<usize> + PartialEq,
{
    type Vertex = usize;
    type Edge = E;
    type EdgeRef<'a> = &'a E
    where
        Self: 'a;

    fn is_directed(&self) -> bool {
        true
    }

    fn allow_parallel_edges(&self) -> bool {
        false
    }

    fn contains_vertex(&self, vertex: &usize) -> bool {
        *vertex < self.size()
    }
}

impl<E> VertexSet for BidirectionalMatrixGraph<E>
where
    E: Edge<usize> + PartialEq,
{
    type VerticesIter<'a> = Iter<'a, usize>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.vertices.iter()
    }

    fn vertex_count(&self) -> usize {
        self.size()
    }
}

impl<E> EdgeSet for BidirectionalMatrixGraph<E>
where
    E: Edge<usize> + PartialEq,
{
    type EdgesIter<'a> = Flatten<Iter<'a, Option<E>>>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_> {
        self.slots.iter().flatten()
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.index(*edge.source(), *edge.target())
            .and_then(|index| self.slots[index].as_ref())
            .map_or(false, |stored| stored == edge)
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<E> OutEdges for BidirectionalMatrixGraph<E>
where
    E: Edge<usize> + PartialEq,
{
    type OutEdgesIter<'a> = Flatten<Iter<'a, Option<E>>>
    where
        Self: 'a;

    fn try_out_edges(&self, vertex: &usize) -> Option<Self::OutEdgesIter<'_>> {
        self.row(*vertex).map(|row| row.iter().flatten())
    }

    fn try_get_edge(&self, source: &usize, target: &usize) -> Option<&E> {
        self.index(*source, *target)
            .and_then(|index| self.slots[index].as_ref())
    }

    fn try_get_edges(&self, source: &usize, target: &usize) -> Option<Vec<&E>> {
        if !self.contains_vertex(source) {
            return None;
        }

        Some(self.try_get_edge(source, target).into_iter().collect())
    }

    fn contains_edge_between(&self, source: &usize, target: &usize) -> bool {
        self.try_get_edge(source, target).is_some()
    }
}

impl<E> InEdges for BidirectionalMatrixGraph<E>
where
    E: Edge<usize> + PartialEq,
{
    type InEdgesIter<'a> = Flatten<StepBy<Skip<Iter<'a, Option<E>>>>>
    where
        Self: 'a;

    fn try_in_edges(&self, vertex: &usize) -> Option<Self::InEdgesIter<'_>> {
        let n = self.size();
        (*vertex < n).then(|| self.slots.iter().skip(*vertex).step_by(n).flatten())
    }
}

impl<E> EdgeSetMut for BidirectionalMatrixGraph<E>
where
    E: Edge<usize> + PartialEq,
{
    fn add_edge(&mut self, edge: E) -> Result<bool, AddEdgeError<E>> {
        let (source, target) = (*edge.source(), *edge.target());

        if !self.contains_vertex(&source) {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::SourceAbsent));
        }

        let Some(index) = self.index(source, target) else {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::TargetAbsent));
        };

        if self.slots[index].is_some() {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::ParallelEdge));
        }

        self.events.edge_added.notify(&edge);
        self.slots[index] = Some(edge);
        self.edge_count += 1;
        Ok(true)
    }

    fn remove_edge(&mut self, edge: &E) -> bool {
        let Some(index) = self.index(*edge.source(), *edge.target()) else {
            return false;
        };

        let slot = &mut self.slots[index];
        if slot.as_ref() != Some(edge) {
            return false;
        }

        if let Some(removed) = slot.take() {
            self.edge_count -= 1;
            self.events.edge_removed.notify(&removed);
        }

        true
    }

    fn remove_edge_if<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&E) -> bool,
    {
        let mut removed = 0;

        for slot in self.slots.iter_mut() {
            if slot.as_ref().map_or(false, &mut predicate) {
                if let Some(edge) = slot.take() {
                    self.events.edge_removed.notify(&edge);
                    removed += 1;
                }
            }
        }

        self.edge_count -= removed;
        removed
    }

    fn clear_edges(&mut self) {
        if self.events.edge_removed.is_empty() {
            self.slots.iter_mut().for_each(|slot| *slot = None);
            self.edge_count = 0;
        } else {
            self.remove_edge_if(|_| true);
        }
    }
}

impl<E> BidirectionalMatrixGraph<E>
where
    E: Edge<usize> + PartialEq,
{
    /// Empties the slots at the given positions that satisfy the predicate.
    fn take_slots<I, P>(&mut self, indices: I, mut predicate: P) -> usize
    where
        I: IntoIterator<Item = usize>,
        P: FnMut(&E) -> bool,
    {
        let mut removed = 0;

        for index in indices {
            let slot = &mut self.slots[index];
            if slot.as_ref().map_or(false, &mut predicate) {
                if let Some(edge) = slot.take() {
                    self.events.edge_removed.notify(&edge);
                    removed += 1;
                }
            }
        }

        self.edge_count -= removed;
        removed
    }
}

impl<E> OutEdgesMut for BidirectionalMatrixGraph<E>
where
    E: Edge<usize> + PartialEq,
{
    fn remove_out_edge_if<P>(&mut self, vertex: &usize, predicate: P) -> Result<usize, VertexNotFound>
    where
        P: FnMut(&E) -> bool,
    {
        let n = self.size();
        if *vertex >= n {
            return Err(VertexNotFound);
        }

        Ok(self.take_slots(vertex * n..(vertex + 1) * n, predicate))
    }
}

impl<E> InEdgesMut for BidirectionalMatrixGraph<E>
where
    E: Edge<usize> + PartialEq,
{
    fn remove_in_edge_if<P>(&mut self, vertex: &usize, predicate: P) -> Result<usize, VertexNotFound>
    where
        P: FnMut(&E) -> bool,
    {
        let n = self.size();
        if *vertex >= n {
            return Err(VertexNotFound);
        }

        Ok(self.take_slots((0..n).map(|row| row * n + vertex), predicate))
    }
}

impl<E> Observable for BidirectionalMatrixGraph<E>
where
    E: Edge<usize> + PartialEq,
{
    fn events(&self) -> &GraphEvents<usize, E> {
        &self.events
    }

    fn events_mut(&mut self) -> &mut GraphEvents<usize, E> {
        &mut self.events
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use assert_matches::assert_matches;

    use super::*;
    use crate::{
        core::{SEdge, TaggedEdge},
        infra::testing::{check_bidirectional_consistency, check_drain_edges},
    };

    type Graph = BidirectionalMatrixGraph<SEdge<usize>>;

    #[test]
    fn basic() {
        let mut graph = Graph::new(4);

        assert_eq!(graph.vertex_count(), 4);
        assert!(graph.is_edges_empty());

        assert_eq!(graph.add_edge(SEdge::new(0, 1)), Ok(true));
        assert_eq!(graph.add_edge(SEdge::new(2, 1)), Ok(true));
        assert_eq!(graph.add_edge(SEdge::new(1, 1)), Ok(true));

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.out_degree(&1), Ok(1));
        assert_eq!(graph.in_degree(&1), Ok(3));
        assert_eq!(graph.degree(&1), Ok(4));
        assert_eq!(graph.out_degree(&3), Ok(0));
        assert_eq!(graph.out_degree(&4), Err(VertexNotFound));
        assert!(graph.contains_edge_between(&2, &1));
        assert!(!graph.contains_edge_between(&1, &2));
        assert!(!graph.contains_edge_between(&1, &7));
        assert_eq!(graph.try_get_edge(&0, &1), Some(&SEdge::new(0, 1)));
        assert_eq!(graph.try_get_edges(&0, &2), Some(Vec::new()));
        assert_eq!(graph.try_get_edges(&9, &2), None);

        check_bidirectional_consistency(&graph).unwrap();
    }

    #[test]
    fn occupied_slot_is_hard_error() {
        let mut graph = BidirectionalMatrixGraph::new(3);
        graph.add_edge(TaggedEdge::new(0, 1, "first")).unwrap();

        let error = graph.add_edge(TaggedEdge::new(0, 1, "second")).unwrap_err();

        assert_eq!(error.kind, AddEdgeErrorKind::ParallelEdge);
        assert_eq!(error.edge.tag, "second");
        assert_eq!(graph.edge_count(), 1);
        assert_matches!(graph.try_get_edge(&0, &1), Some(edge) if edge.tag == "first");

        // The reversed pair is a different slot.
        assert_eq!(graph.add_edge(TaggedEdge::new(1, 0, "third")), Ok(true));
    }

    #[test]
    fn out_of_range_endpoints() {
        let mut graph = Graph::new(2);

        assert_matches!(
            graph.add_edge(SEdge::new(2, 0)),
            Err(error) if error.kind == AddEdgeErrorKind::SourceAbsent
        );
        assert_matches!(
            graph.add_edge(SEdge::new(5, 5)),
            Err(error) if error.kind == AddEdgeErrorKind::SourceAbsent
        );
        assert_matches!(
            graph.add_edge(SEdge::new(0, 2)),
            Err(error) if error.kind == AddEdgeErrorKind::TargetAbsent
        );
        assert!(graph.is_edges_empty());
    }

    #[test]
    fn remove_edge() {
        let mut graph = BidirectionalMatrixGraph::new(2);
        graph.add_edge(TaggedEdge::new(0, 1, 1)).unwrap();

        assert!(!graph.remove_edge(&TaggedEdge::new(0, 1, 2)));
        assert!(graph.remove_edge(&TaggedEdge::new(0, 1, 1)));
        assert!(!graph.remove_edge(&TaggedEdge::new(0, 1, 1)));
        assert!(!graph.remove_edge(&TaggedEdge::new(0, 3, 1)));
        assert!(graph.is_edges_empty());
    }

    #[test]
    fn clear_incident_edges() {
        let mut graph = Graph::new(3);
        for source in 0..3 {
            for target in 0..3 {
                graph.add_edge(SEdge::new(source, target)).unwrap();
            }
        }

        assert_eq!(graph.clear_incident_edges(&1), Ok(5));
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.degree(&1), Ok(0));
        assert!(graph.contains_vertex(&1));

        assert_eq!(graph.clear_out_edges(&0), Ok(2));
        assert_eq!(graph.clear_in_edges(&2), Ok(1));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.clear_in_edges(&3), Err(VertexNotFound));
        check_bidirectional_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_edge_if() {
        let mut graph = Graph::new(4);
        for vertex in 0..4 {
            graph.add_edge(SEdge::new(vertex, (vertex + 1) % 4)).unwrap();
            graph.add_edge(SEdge::new(vertex, vertex)).unwrap();
        }

        assert_eq!(graph.remove_edge_if(|edge| edge.is_self_edge()), 4);
        assert_eq!(graph.edge_count(), 4);
        check_bidirectional_consistency(&graph).unwrap();
    }

    #[test]
    fn drain_edges() {
        let mut graph = Graph::new(3);
        graph.add_edge(SEdge::new(0, 1)).unwrap();
        graph.add_edge(SEdge::new(1, 2)).unwrap();
        graph.add_edge(SEdge::new(2, 2)).unwrap();

        check_drain_edges(&mut graph).unwrap();
    }

    #[test]
    fn edge_events() {
        let mut graph = Graph::new(3);
        let log = Arc::new(Mutex::new(Vec::new()));

        let added = Arc::clone(&log);
        graph
            .events_mut()
            .edge_added
            .subscribe(move |edge: &SEdge<usize>| added.lock().unwrap().push(("+", *edge)));
        let removed = Arc::clone(&log);
        graph
            .events_mut()
            .edge_removed
            .subscribe(move |edge: &SEdge<usize>| removed.lock().unwrap().push(("-", *edge)));

        graph.add_edge(SEdge::new(0, 1)).unwrap();
        graph.add_edge(SEdge::new(0, 1)).unwrap_err();
        graph.add_edge(SEdge::new(1, 2)).unwrap();
        graph.clear_edges();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                ("+", SEdge::new(0, 1)),
                ("+", SEdge::new(1, 2)),
                ("-", SEdge::new(0, 1)),
                ("-", SEdge::new(1, 2)),
            ]
        );
        assert!(graph.is_edges_empty());
    }

    #[test]
    fn empty_matrix() {
        let graph = Graph::new(0);

        assert!(graph.is_vertices_empty());
        assert!(graph.try_in_edges(&0).is_none());
        assert_eq!(graph.edges().count(), 0);
    }
}
