use std::{borrow::Borrow, hash::Hash};

use super::edge::Edge;

/// Properties shared by all graphs.
///
/// Edges are handed out as [`EdgeRef`](GraphBase::EdgeRef)s. Graphs that store
/// their edges use plain references, graphs that synthesize edges on demand
/// (compressed sparse row, delegate-backed) hand out owned values.
pub trait GraphBase {
    type Vertex: Clone + Eq + Hash;
    type Edge: Edge<Self::Vertex> + PartialEq;
    type EdgeRef<'a>: Borrow<Self::Edge>
    where
        Self: 'a;

    fn is_directed(&self) -> bool;
    fn allow_parallel_edges(&self) -> bool;
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;
}

macro_rules! deref_graph_base {
    ($($ref_kind:tt)*) => {
        impl<G> GraphBase for $($ref_kind)* G
        where
            G: GraphBase,
        {
            type Vertex = G::Vertex;
            type Edge = G::Edge;
            type EdgeRef<'a> = G::EdgeRef<'a>
            where
                Self: 'a;

            fn is_directed(&self) -> bool {
                (**self).is_directed()
            }

            fn allow_parallel_edges(&self) -> bool {
                (**self).allow_parallel_edges()
            }

            fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
                (**self).contains_vertex(vertex)
            }
        }
    };
}

deref_graph_base!(&);
deref_graph_base!(&mut);
