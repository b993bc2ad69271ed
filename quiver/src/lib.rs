pub mod adapt;
pub mod common;
pub mod core;
pub mod infra;
pub mod storage;

pub mod prelude {
    pub use crate::core::{
        AdjacentEdges, AdjacentEdgesMut, Create, Edge, EdgeSet, EdgeSetMut, GraphBase, GraphMut,
        InEdges, InEdgesMut, OutEdges, OutEdgesMut, SEdge, TaggedEdge, VertexSet, VertexSetMut,
    };
}

#[cfg(feature = "derive")]
pub mod derive {
    pub use quiver_derive::*;
}
