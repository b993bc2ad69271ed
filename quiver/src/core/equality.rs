//! Strategies deciding whether an edge connects a given pair of vertices.
//!
//! Undirected graphs use an [`EdgeEquality`] to reject parallel edges and to
//! look up edges by endpoints. The strategy is chosen when the graph is
//! created and can be any closure `Fn(&E, &V, &V) -> bool`.

use super::edge::Edge;

/// Decides whether `edge` connects `source` and `target`.
pub trait EdgeEquality<V, E> {
    fn connects(&self, edge: &E, source: &V, target: &V) -> bool;
}

/// Matches an edge regardless of the orientation of its endpoints. This is the
/// default for undirected graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UndirectedVertexEquality;

/// Matches an edge only in its stored orientation.
///
/// Useful for undirected graphs whose edges are normalized on insertion (for
/// example, the smaller vertex is always the source), where checking the
/// reversed orientation is wasted work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderedVertexEquality;

impl<V, E> EdgeEquality<V, E> for UndirectedVertexEquality
where
    V: PartialEq,
    E: Edge<V>,
{
    fn connects(&self, edge: &E, source: &V, target: &V) -> bool {
        (edge.source() == source && edge.target() == target)
            || (edge.source() == target && edge.target() == source)
    }
}

impl<V, E> EdgeEquality<V, E> for OrderedVertexEquality
where
    V: PartialEq,
    E: Edge<V>,
{
    fn connects(&self, edge: &E, source: &V, target: &V) -> bool {
        edge.source() == source && edge.target() == target
    }
}

impl<V, E, F> EdgeEquality<V, E> for F
where
    F: Fn(&E, &V, &V) -> bool,
{
    fn connects(&self, edge: &E, source: &V, target: &V) -> bool {
        self(edge, source, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SEdge;

    #[test]
    fn undirected_matches_both_orientations() {
        let edge = SEdge::new(1, 2);

        assert!(UndirectedVertexEquality.connects(&edge, &1, &2));
        assert!(UndirectedVertexEquality.connects(&edge, &2, &1));
        assert!(!UndirectedVertexEquality.connects(&edge, &1, &3));
    }

    #[test]
    fn ordered_matches_stored_orientation() {
        let edge = SEdge::new(1, 2);

        assert!(OrderedVertexEquality.connects(&edge, &1, &2));
        assert!(!OrderedVertexEquality.connects(&edge, &2, &1));
    }

    #[test]
    fn closure_strategy() {
        let same_source = |edge: &SEdge<i32>, source: &i32, _: &i32| edge.source() == source;

        assert!(same_source.connects(&SEdge::new(1, 2), &1, &5));
    }
}
