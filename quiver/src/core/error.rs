use std::fmt;

use thiserror::Error;

/// A vertex passed to a query is not in the graph (or is hidden by a filter).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("vertex does not exist")]
pub struct VertexNotFound;

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<E> {
    pub edge: E,
    pub kind: AddEdgeErrorKind,
}

impl<E> AddEdgeError<E> {
    pub fn new(edge: E, kind: AddEdgeErrorKind) -> Self {
        Self { edge, kind }
    }

    pub fn into_edge(self) -> E {
        self.edge
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    TargetAbsent,
    /// The storage has no room for a second edge between the endpoints.
    ParallelEdge,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::TargetAbsent => "target does not exist",
            AddEdgeErrorKind::ParallelEdge => {
                "an edge already exists and the graph cannot store parallel edges"
            }
        };
        f.write_str(reason)
    }
}

/// Malformed input to [`CompressedSparseRowGraph::from_ranges`](crate::storage::CompressedSparseRowGraph::from_ranges).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CsrError {
    #[error("range of vertex #{vertex} is inverted ({start} > {end})")]
    InvertedRange {
        vertex: usize,
        start: usize,
        end: usize,
    },
    #[error("range of vertex #{vertex} ends at {end}, but there are only {len} targets")]
    RangeOutOfBounds { vertex: usize, end: usize, len: usize },
    #[error("range of vertex #{vertex} overlaps another range at target {index}")]
    OverlappingRanges { vertex: usize, index: usize },
    #[error("vertex #{vertex} is listed more than once")]
    DuplicateVertex { vertex: usize },
    #[error("target at index {index} is not a vertex of the graph")]
    DanglingTarget { index: usize },
}
