use std::borrow::Borrow;

use thiserror::Error;

use crate::core::{
    AdjacentEdges, Create, Edge, EdgeSet, EdgeSetMut, InEdges, OutEdges, VertexSet,
};

pub fn create_complete<G>(vertex_count: usize) -> G
where
    G: Create<Vertex = usize>,
    G::Edge: From<(usize, usize)>,
{
    let mut graph = G::with_capacity(vertex_count, vertex_count * vertex_count);
    graph.add_vertices(0..vertex_count);

    let directed = graph.is_directed();

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v {
                continue;
            }

            if !directed && v > u {
                break;
            }

            let _ = graph.add_edge((u, v).into());
        }
    }

    graph
}

pub fn create_path<G>(vertex_count: usize) -> G
where
    G: Create<Vertex = usize>,
    G::Edge: From<(usize, usize)>,
{
    if vertex_count == 0 {
        return G::empty();
    }

    let mut graph = G::with_capacity(vertex_count, vertex_count - 1);
    graph.add_vertices(0..vertex_count);

    for v in 1..vertex_count {
        let _ = graph.add_edge((v - 1, v).into());
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("edges emptiness does not agree with edge count ({0})")]
    EdgesEmptyMismatch(usize),
    #[error("edge #{0} (zero-based) in the edges iterator has an endpoint that is not a vertex")]
    DanglingEdge(usize),
    #[error("edge #{0} (zero-based) in the edges iterator is not reported as contained")]
    EdgeNotContained(usize),
    #[error("vertex #{0} (zero-based) is enumerated but not reported as contained")]
    VertexNotContained(usize),
    #[error("sum of out degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemmaOut(usize, usize),
    #[error("sum of in degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemmaIn(usize, usize),
    #[error("sum of adjacent degrees ({0}) is not equal to doubled edge count without self-edges ({1})")]
    HandshakingLemmaAdjacent(usize, usize),
    #[error("vertex #{0} (zero-based) has an incident edge that does not touch it")]
    ForeignIncidentEdge(usize),
}

fn cmp<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
where
    F: FnOnce(usize, usize) -> ConsistencyCheckError,
{
    if actual == expected {
        Ok(())
    } else {
        Err(error(actual, expected))
    }
}

/// Checks the invariants shared by all graphs: counts agree with the
/// enumerations, enumerated items are reported as contained and no edge is
/// dangling.
pub fn check_consistency<G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    G: VertexSet + EdgeSet,
{
    cmp(
        graph.vertices().count(),
        graph.vertex_count(),
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;
    cmp(
        graph.edges().count(),
        graph.edge_count(),
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    if let Some(i) = graph
        .vertices()
        .position(|vertex| !graph.contains_vertex(vertex))
    {
        return Err(ConsistencyCheckError::VertexNotContained(i));
    }

    for (i, edge) in graph.edges().enumerate() {
        let edge: &G::Edge = edge.borrow();

        if !graph.contains_vertex(edge.source()) || !graph.contains_vertex(edge.target()) {
            return Err(ConsistencyCheckError::DanglingEdge(i));
        }

        if !graph.contains_edge(edge) {
            return Err(ConsistencyCheckError::EdgeNotContained(i));
        }
    }

    if graph.is_edges_empty() != (graph.edge_count() == 0) {
        return Err(ConsistencyCheckError::EdgesEmptyMismatch(graph.edge_count()));
    }

    Ok(())
}

/// [`check_consistency`] plus the out-edge index.
pub fn check_directed_consistency<G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    G: VertexSet + EdgeSet + OutEdges,
{
    check_consistency(graph)?;

    let mut out_deg_sum = 0;

    for (i, vertex) in graph.vertices().enumerate() {
        let out_edges = graph
            .try_out_edges(vertex)
            .ok_or(ConsistencyCheckError::VertexNotContained(i))?;

        for edge in out_edges {
            let edge: &G::Edge = edge.borrow();
            if edge.source() != vertex {
                return Err(ConsistencyCheckError::ForeignIncidentEdge(i));
            }
            out_deg_sum += 1;
        }
    }

    cmp(
        out_deg_sum,
        graph.edge_count(),
        ConsistencyCheckError::HandshakingLemmaOut,
    )
}

/// [`check_directed_consistency`] plus the in-edge index.
pub fn check_bidirectional_consistency<G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    G: VertexSet + EdgeSet + InEdges,
{
    check_directed_consistency(graph)?;

    let mut in_deg_sum = 0;

    for (i, vertex) in graph.vertices().enumerate() {
        let in_edges = graph
            .try_in_edges(vertex)
            .ok_or(ConsistencyCheckError::VertexNotContained(i))?;

        for edge in in_edges {
            let edge: &G::Edge = edge.borrow();
            if edge.target() != vertex {
                return Err(ConsistencyCheckError::ForeignIncidentEdge(i));
            }
            in_deg_sum += 1;
        }
    }

    cmp(
        in_deg_sum,
        graph.edge_count(),
        ConsistencyCheckError::HandshakingLemmaIn,
    )
}

/// [`check_consistency`] plus the incident-edge index, in which a self-edge is
/// listed once and any other edge twice.
pub fn check_undirected_consistency<G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    G: VertexSet + EdgeSet + AdjacentEdges,
{
    check_consistency(graph)?;

    let mut adjacent_deg_sum = 0;

    for (i, vertex) in graph.vertices().enumerate() {
        let adjacent_edges = graph
            .try_adjacent_edges(vertex)
            .ok_or(ConsistencyCheckError::VertexNotContained(i))?;

        for edge in adjacent_edges {
            let edge: &G::Edge = edge.borrow();
            if !edge.is_adjacent(vertex) {
                return Err(ConsistencyCheckError::ForeignIncidentEdge(i));
            }
            adjacent_deg_sum += 1;
        }
    }

    let self_edges = graph
        .edges()
        .filter(|edge| {
            let edge: &G::Edge = edge.borrow();
            edge.is_self_edge()
        })
        .count();

    cmp(
        adjacent_deg_sum,
        (2 * graph.edge_count()).saturating_sub(self_edges),
        ConsistencyCheckError::HandshakingLemmaAdjacent,
    )
}

/// Removes every edge one by one and checks that the graph ends up without
/// edges. Catches lists that disagree on which edges they hold.
pub fn check_drain_edges<G>(graph: &mut G) -> Result<(), ConsistencyCheckError>
where
    G: EdgeSetMut,
    G::Edge: Clone,
{
    let edges = graph
        .edges()
        .map(|edge| {
            let edge: &G::Edge = edge.borrow();
            edge.clone()
        })
        .collect::<Vec<_>>();

    for (i, edge) in edges.iter().enumerate() {
        if !graph.remove_edge(edge) {
            return Err(ConsistencyCheckError::EdgeNotContained(i));
        }
    }

    cmp(
        graph.edge_count(),
        0,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )
}
