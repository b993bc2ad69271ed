//! Strategies generating random mutation sequences.
//!
//! Additions are weighted higher than removals so that generated sequences
//! build graphs of a non-trivial size before tearing them down.

use proptest::{
    collection::{vec, SizeRange},
    prelude::*,
};

pub use super::mutation::{Index, MutOp, MutOpResult, MutOpsSeq};

/// Strategy for a single [`MutOp`] with vertex values and edge tags drawn from
/// the given strategies.
pub fn mut_op<V, T>(vertex: V, tag: T) -> impl Strategy<Value = MutOp<V::Value, T::Value>>
where
    V: Strategy,
    V::Value: Clone,
    T: Strategy,
    T::Value: Clone,
{
    prop_oneof![
        8 => vertex.prop_map(MutOp::AddVertex),
        12 => (any::<usize>(), any::<usize>(), tag)
            .prop_map(|(source, target, tag)| MutOp::AddEdge(Index(source), Index(target), tag)),
        3 => any::<usize>().prop_map(|index| MutOp::RemoveVertex(Index(index))),
        4 => (any::<usize>(), any::<usize>())
            .prop_map(|(source, target)| MutOp::RemoveEdge(Index(source), Index(target))),
        1 => Just(MutOp::ClearEdges),
        1 => Just(MutOp::Clear),
    ]
}

/// Strategy for a sequence of [`mut_op`] operations.
pub fn mut_ops<V, T>(
    vertex: V,
    tag: T,
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = MutOpsSeq<V::Value, T::Value>>
where
    V: Strategy,
    V::Value: Clone,
    T: Strategy,
    T::Value: Clone,
{
    vec(mut_op(vertex, tag), size).prop_map(MutOpsSeq)
}
