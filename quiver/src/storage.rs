//! Implementations of various graph storages.
//!
//! A _storage_ is an implementation of the graph representation. It implements
//! traits from the [`core`](crate::core) module to provide the needed
//! functionality.
//!
//! # Storages and their properties
//!
//! Mutable storages:
//!
//! * [Adjacency graph](adjacency) – directed, out-edges only
//! * [Bidirectional graph](bidirectional) – directed, out-edges and in-edges
//! * [Undirected graph](undirected)
//! * [Bidirectional matrix graph](matrix) – fixed vertex set `0..n`, edges
//!   only
//! * [Edge list graph](edge_list) – vertices derived from edges
//!
//! Immutable storages, built once from a populated graph:
//!
//! * [Array graphs](array)
//! * [Compressed sparse row graph](csr)
//!
//! |                | **Adjacency**  | **Bidirectional** | **Undirected** | **Matrix** | **Edge list** |
//! |----------------|----------------|-------------------|----------------|------------|---------------|
//! | add vertex     | _O*(1)_        | _O*(1)_           | _O*(1)_        | –          | –             |
//! | add edge       | _O*(1)_        | _O*(1)_           | _O*(1)_        | _O(1)_     | _O*(1)_       |
//! | out edges      | _O(d)_         | _O(d)_            | _O(d)_         | _O(V)_     | _O(E)_        |
//! | in edges       | –              | _O(d)_            | –              | _O(V)_     | –             |
//! | lookup edge    | _O(d)_         | _O(d)_            | _O(d)_         | _O(1)_     | _O(1)_        |
//! | remove vertex  | _O(V + E)_     | _O(d²)_           | _O(d²)_        | –          | –             |
//! | remove edge    | _O(d)_         | _O(d)_            | _O(d)_         | _O(1)_     | _O(1)_        |
//! | space          | _O(V + E)_     | _O(V + E)_        | _O(V + E)_     | _O(V²)_    | _O(E)_        |
//! | parallel edges | optional       | optional          | optional       | NO         | optional      |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree
//! * _O*(..)_ – amortized complexity
//!
//! With parallel edges disallowed, edge insertion into the list-based storages
//! is _O(d)_ due to the lookup of an existing edge.
//!
//! # Delegate graphs
//!
//! The [`delegate`] module provides wrappers over functions returning the
//! edges of a vertex. They have no storage and every query is forwarded to the
//! function.

pub mod adjacency;
pub mod array;
pub mod bidirectional;
pub mod csr;
pub mod delegate;
pub mod edge_list;
pub mod matrix;
mod shared;
pub mod undirected;

#[doc(inline)]
pub use self::{
    adjacency::AdjacencyGraph,
    array::{ArrayAdjacencyGraph, ArrayBidirectionalGraph, ArrayUndirectedGraph},
    bidirectional::BidirectionalGraph,
    csr::CompressedSparseRowGraph,
    delegate::{
        DelegateBidirectionalIncidenceGraph, DelegateIncidenceGraph, DelegateUndirectedGraph,
        DelegateVertexAndEdgeListGraph,
    },
    edge_list::EdgeListGraph,
    matrix::BidirectionalMatrixGraph,
    undirected::UndirectedGraph,
};

#[cfg(test)]
mod tests {
    use std::{
        borrow::Borrow,
        sync::{Arc, Mutex},
    };

    use assert_matches::assert_matches;

    use crate::{
        core::{
            AddEdgeError, AddEdgeErrorKind, Create, Edge, EdgeSet, EdgeSetMut, GraphBase, GraphMut,
            InEdges, Observable, OutEdges, SEdge, TaggedEdge, VertexNotFound, VertexSet,
            VertexSetMut,
        },
        infra::testing::check_consistency,
    };

    pub fn test_basic_directed<G>()
    where
        G: Create + OutEdges<Vertex = u32, Edge = SEdge<u32>>,
    {
        let mut graph = G::empty();

        assert!(graph.add_vertex(1));
        assert!(graph.add_vertex(2));
        assert!(!graph.add_vertex(1));
        assert_eq!(graph.add_edge(SEdge::new(1, 2)), Ok(true));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.out_degree(&1), Ok(1));
        assert_eq!(graph.out_degree(&2), Ok(0));
        assert!(graph.is_directed());

        assert!(graph.remove_vertex(&1));
        assert!(!graph.remove_vertex(&1));

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.is_edges_empty());
        assert_eq!(graph.out_degree(&1), Err(VertexNotFound));
        check_consistency(&graph).unwrap();
    }

    pub fn test_missing_endpoints<G>()
    where
        G: Create<Vertex = u32, Edge = SEdge<u32>>,
    {
        let mut graph = G::empty();
        graph.add_vertex(1);

        assert_matches!(
            graph.add_edge(SEdge::new(2, 1)),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::SourceAbsent,
                ..
            })
        );
        assert_matches!(
            graph.add_edge(SEdge::new(1, 2)),
            Err(error) if error.kind == AddEdgeErrorKind::TargetAbsent && error.edge == SEdge::new(1, 2)
        );
        assert!(graph.is_edges_empty());
        assert_eq!(graph.vertex_count(), 1);

        assert!(graph.add_vertices_and_edge(SEdge::new(1, 2)));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    pub fn test_parallel_edges_rejected<G>(mut graph: G)
    where
        G: GraphMut<Vertex = u32, Edge = TaggedEdge<u32, i32>>,
    {
        assert!(!graph.allow_parallel_edges());
        graph.add_vertices([1, 2]);

        assert_eq!(graph.add_edge(TaggedEdge::new(1, 2, 0)), Ok(true));
        assert_eq!(graph.add_edge(TaggedEdge::new(1, 2, 1)), Ok(false));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(&TaggedEdge::new(1, 2, 0)));
        assert!(!graph.contains_edge(&TaggedEdge::new(1, 2, 1)));

        assert_eq!(graph.add_edge(TaggedEdge::new(2, 2, 2)), Ok(true));
        assert_eq!(graph.add_edge(TaggedEdge::new(2, 2, 3)), Ok(false));
        assert_eq!(graph.edge_count(), 2);

        assert!(!graph.add_vertices_and_edge(TaggedEdge::new(1, 2, 4)));
        assert_eq!(graph.edge_count(), 2);
        check_consistency(&graph).unwrap();
    }

    pub fn test_parallel_edges_allowed<G>(mut graph: G)
    where
        G: GraphMut<Vertex = u32, Edge = TaggedEdge<u32, i32>>,
    {
        assert!(graph.allow_parallel_edges());
        graph.add_vertices([1, 2]);

        assert_eq!(graph.add_edge(TaggedEdge::new(1, 2, 0)), Ok(true));
        assert_eq!(graph.add_edge(TaggedEdge::new(1, 2, 1)), Ok(true));
        assert_eq!(graph.add_edge(TaggedEdge::new(1, 2, 1)), Ok(true));
        assert_eq!(graph.edge_count(), 3);

        assert!(graph.remove_edge(&TaggedEdge::new(1, 2, 1)));
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_edge(&TaggedEdge::new(1, 2, 1)));
        check_consistency(&graph).unwrap();
    }

    pub fn test_clone_independent<G>()
    where
        G: Create<Vertex = u32, Edge = SEdge<u32>> + Clone,
    {
        let mut graph = G::empty();
        graph.add_vertices_and_edges([SEdge::new(1, 2), SEdge::new(2, 3), SEdge::new(3, 3)]);

        let mut cloned = graph.clone();
        cloned.remove_vertex(&2);
        cloned.add_vertices_and_edge(SEdge::new(4, 1));

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains_edge(&SEdge::new(1, 2)));
        assert!(!graph.contains_vertex(&4));

        assert_eq!(cloned.vertex_count(), 3);
        assert_eq!(cloned.edge_count(), 2);
        assert!(!cloned.contains_edge(&SEdge::new(1, 2)));

        check_consistency(&graph).unwrap();
        check_consistency(&cloned).unwrap();
    }

    pub fn test_remove_edge_twice<G>()
    where
        G: Create<Vertex = u32, Edge = SEdge<u32>>,
    {
        let mut graph = G::empty();
        graph.add_vertices_and_edge(SEdge::new(1, 2));

        assert!(graph.remove_edge(&SEdge::new(1, 2)));
        assert!(!graph.remove_edge(&SEdge::new(1, 2)));
        assert!(!graph.remove_edge(&SEdge::new(3, 4)));

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertex_count(), 2);
    }

    pub fn test_remove_vertex_no_dangling<G>()
    where
        G: Create<Vertex = u32, Edge = SEdge<u32>>,
    {
        let mut graph = G::empty();

        for u in 0..5 {
            for v in 0..5 {
                graph.add_vertices_and_edge(SEdge::new(u, v));
            }
        }

        assert_eq!(graph.edge_count(), 25);
        assert!(graph.remove_vertex(&2));

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 16);

        let dangling = graph.edges().any(|edge| {
            let edge: &SEdge<u32> = edge.borrow();
            edge.is_adjacent(&2)
        });
        assert!(!dangling);
        check_consistency(&graph).unwrap();
    }

    pub fn test_remove_edge_if<G>()
    where
        G: Create<Vertex = u32, Edge = SEdge<u32>>,
    {
        let mut graph = G::empty();

        for v in 0..6 {
            graph.add_vertices_and_edge(SEdge::new(v, v + 1));
            graph.add_vertices_and_edge(SEdge::new(v, v));
        }

        assert_eq!(graph.remove_edge_if(|edge| edge.is_self_edge()), 6);
        assert_eq!(graph.remove_edge_if(|edge| edge.is_self_edge()), 0);
        assert_eq!(graph.edge_count(), 6);

        assert_eq!(graph.remove_vertex_if(|vertex| vertex % 2 == 0), 4);
        assert_eq!(graph.vertex_count(), 3);
        assert!(graph.is_edges_empty());
        check_consistency(&graph).unwrap();
    }

    pub fn test_clear<G>()
    where
        G: Create<Vertex = u32, Edge = SEdge<u32>>,
    {
        let mut graph = G::empty();
        graph.add_vertices_and_edges([SEdge::new(1, 2), SEdge::new(2, 3), SEdge::new(3, 1)]);

        graph.clear_edges();
        assert!(graph.is_edges_empty());
        assert_eq!(graph.vertex_count(), 3);
        check_consistency(&graph).unwrap();

        graph.add_edge(SEdge::new(1, 3)).unwrap();
        assert_eq!(graph.edge_count(), 1);

        graph.clear();
        assert!(graph.is_vertices_empty());
        assert!(graph.is_edges_empty());
        check_consistency(&graph).unwrap();
    }

    pub fn test_events<G>()
    where
        G: Create<Vertex = u32, Edge = SEdge<u32>> + Observable + Clone,
    {
        let mut graph = G::empty();

        let vertices_added = Arc::new(Mutex::new(Vec::new()));
        let vertices_removed = Arc::new(Mutex::new(Vec::new()));
        let edges_added = Arc::new(Mutex::new(Vec::new()));
        let edges_removed = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&vertices_added);
        graph
            .events_mut()
            .vertex_added
            .subscribe(move |v| sink.lock().unwrap().push(*v));
        let sink = Arc::clone(&vertices_removed);
        graph
            .events_mut()
            .vertex_removed
            .subscribe(move |v| sink.lock().unwrap().push(*v));
        let sink = Arc::clone(&edges_added);
        graph
            .events_mut()
            .edge_added
            .subscribe(move |e| sink.lock().unwrap().push(*e));
        let sink = Arc::clone(&edges_removed);
        graph
            .events_mut()
            .edge_removed
            .subscribe(move |e| sink.lock().unwrap().push(*e));

        graph.add_vertices([1, 2, 3, 1]);
        graph.add_edge(SEdge::new(1, 2)).unwrap();
        graph.add_edge(SEdge::new(2, 3)).unwrap();
        graph.add_edge(SEdge::new(3, 3)).unwrap();
        let _ = graph.add_edge(SEdge::new(4, 3));

        graph.remove_edge(&SEdge::new(1, 2));
        graph.remove_edge(&SEdge::new(1, 2));
        graph.remove_vertex(&3);

        assert_eq!(*vertices_added.lock().unwrap(), vec![1, 2, 3]);
        assert_eq!(*vertices_removed.lock().unwrap(), vec![3]);
        assert_eq!(
            *edges_added.lock().unwrap(),
            vec![SEdge::new(1, 2), SEdge::new(2, 3), SEdge::new(3, 3)]
        );

        let mut removed = edges_removed.lock().unwrap().clone();
        removed.sort();
        assert_eq!(
            removed,
            vec![SEdge::new(1, 2), SEdge::new(2, 3), SEdge::new(3, 3)]
        );

        // A clone does not inherit the observers.
        let mut cloned = graph.clone();
        cloned.add_vertex(5);
        assert_eq!(vertices_added.lock().unwrap().len(), 3);
        assert!(cloned.events().vertex_added.is_empty());
    }

    pub fn test_directed_degrees<G>()
    where
        G: Create + OutEdges<Vertex = u32, Edge = SEdge<u32>>,
    {
        let mut graph = G::empty();
        graph.add_vertices_and_edges([
            SEdge::new(1, 2),
            SEdge::new(1, 3),
            SEdge::new(2, 3),
            SEdge::new(3, 3),
        ]);
        graph.add_vertex(4);

        assert_eq!(graph.out_degree(&1), Ok(2));
        assert_eq!(graph.out_degree(&3), Ok(1));
        assert_eq!(graph.is_out_edges_empty(&4), Ok(true));
        assert_eq!(graph.is_out_edges_empty(&5), Err(VertexNotFound));
        assert!(graph.out_edges(&5).is_err());
        assert!(graph.try_out_edges(&5).is_none());

        assert!(graph.contains_edge_between(&1, &3));
        assert!(!graph.contains_edge_between(&3, &1));
        assert_eq!(
            graph.try_get_edge(&2, &3).map(|edge| {
                let edge: &SEdge<u32> = edge.borrow();
                *edge
            }),
            Some(SEdge::new(2, 3))
        );
        assert_eq!(graph.try_get_edges(&1, &2).map(|edges| edges.len()), Some(1));
        assert!(graph.try_get_edges(&5, &2).is_none());

        assert!(matches!(graph.out_edge(&1, 5), Ok(None)));
        assert!(matches!(graph.out_edge(&1, 0), Ok(Some(_))));
        assert!(matches!(graph.out_edge(&5, 0), Err(VertexNotFound)));
    }

    pub fn test_bidirectional_degrees<G>()
    where
        G: Create + InEdges<Vertex = u32, Edge = SEdge<u32>>,
    {
        let mut graph = G::empty();
        graph.add_vertices([1, 2]);
        graph.add_edge(SEdge::new(1, 2)).unwrap();

        assert_eq!(graph.out_degree(&1), Ok(1));
        assert_eq!(graph.in_degree(&2), Ok(1));
        assert_eq!(graph.in_degree(&1), Ok(0));
        assert_eq!(graph.out_degree(&2), Ok(0));

        assert!(graph.remove_edge(&SEdge::new(1, 2)));

        assert_eq!(graph.out_degree(&1), Ok(0));
        assert_eq!(graph.in_degree(&2), Ok(0));
        assert_eq!(graph.in_degree(&1), Ok(0));
        assert_eq!(graph.out_degree(&2), Ok(0));

        graph.add_edge(SEdge::new(1, 1)).unwrap();
        assert_eq!(graph.degree(&1), Ok(2));
        assert!(matches!(graph.in_edge(&1, 0), Ok(Some(_))));
        assert_eq!(graph.is_in_edges_empty(&2), Ok(true));
        assert_eq!(graph.in_degree(&3), Err(VertexNotFound));
    }
}
