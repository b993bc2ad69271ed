use std::{borrow::Borrow, fmt, hash::Hash};

use crate::core::{AddEdgeError, Edge, EdgeSet, GraphMut, TaggedEdge, VertexSet};

/// Position in the current vertex list of a graph, taken modulo its length.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

/// Single mutation of a graph with [`TaggedEdge`] edges.
///
/// Existing vertices are addressed by [`Index`] into the vertex list of the
/// graph at the time the operation is applied. Operations addressing a vertex
/// of an empty graph are no-ops.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutOp<V, T> {
    AddVertex(V),
    RemoveVertex(Index),
    Clear,
    AddEdge(Index, Index, T),
    RemoveEdge(Index, Index),
    ClearEdges,
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<V, T> {
    AddVertex(bool),
    RemoveVertex(bool),
    Clear,
    AddEdge(Option<Result<bool, AddEdgeError<TaggedEdge<V, T>>>>),
    RemoveEdge(bool),
    ClearEdges,
}

fn nth_vertex<G: VertexSet>(graph: &G, index: Index) -> Option<G::Vertex> {
    let i = index.get(graph.vertex_count())?;
    graph.vertices().nth(i).cloned()
}

fn edge_between<G>(graph: &G, source: &G::Vertex, target: &G::Vertex) -> Option<G::Edge>
where
    G: EdgeSet,
    G::Edge: Clone,
{
    graph.edges().find_map(|edge| {
        let edge: &G::Edge = edge.borrow();
        (edge.source() == source && edge.target() == target).then(|| edge.clone())
    })
}

impl<V, T> MutOp<V, T>
where
    V: Clone + Eq + Hash,
    T: Clone,
{
    pub fn apply<G>(self, graph: &mut G) -> MutOpResult<V, T>
    where
        G: GraphMut<Vertex = V, Edge = TaggedEdge<V, T>>,
        TaggedEdge<V, T>: PartialEq,
    {
        match self {
            MutOp::AddVertex(vertex) => MutOpResult::AddVertex(graph.add_vertex(vertex)),
            MutOp::RemoveVertex(index) => {
                let removed = nth_vertex(graph, index)
                    .map_or(false, |vertex| graph.remove_vertex(&vertex));
                MutOpResult::RemoveVertex(removed)
            }
            MutOp::Clear => {
                graph.clear();
                MutOpResult::Clear
            }
            MutOp::AddEdge(source, target, tag) => {
                let endpoints = nth_vertex(graph, source).zip(nth_vertex(graph, target));
                MutOpResult::AddEdge(endpoints.map(|(source, target)| {
                    graph.add_edge(TaggedEdge::new(source, target, tag))
                }))
            }
            MutOp::RemoveEdge(source, target) => {
                let removed = nth_vertex(graph, source)
                    .zip(nth_vertex(graph, target))
                    .and_then(|(source, target)| edge_between(graph, &source, &target))
                    .map_or(false, |edge| graph.remove_edge(&edge));
                MutOpResult::RemoveEdge(removed)
            }
            MutOp::ClearEdges => {
                graph.clear_edges();
                MutOpResult::ClearEdges
            }
        }
    }

    /// Source code equivalent of the operation applied to the graph in its
    /// current state, or `None` if the operation would be a no-op.
    pub fn to_code<G>(&self, graph: &G) -> Option<String>
    where
        V: fmt::Debug,
        T: fmt::Debug,
        G: VertexSet<Vertex = V> + EdgeSet<Edge = TaggedEdge<V, T>>,
        TaggedEdge<V, T>: PartialEq,
    {
        let code = match self {
            MutOp::AddVertex(vertex) => format!("graph.add_vertex({vertex:?});"),
            MutOp::RemoveVertex(index) => {
                format!("graph.remove_vertex(&{:?});", nth_vertex(graph, *index)?)
            }
            MutOp::Clear => "graph.clear();".to_string(),
            MutOp::AddEdge(source, target, tag) => format!(
                "graph.add_edge(TaggedEdge::new({:?}, {:?}, {tag:?})).ok();",
                nth_vertex(graph, *source)?,
                nth_vertex(graph, *target)?,
            ),
            MutOp::RemoveEdge(source, target) => {
                let source = nth_vertex(graph, *source)?;
                let target = nth_vertex(graph, *target)?;
                let edge = edge_between(graph, &source, &target)?;
                format!(
                    "graph.remove_edge(&TaggedEdge::new({source:?}, {target:?}, {:?}));",
                    edge.tag
                )
            }
            MutOp::ClearEdges => "graph.clear_edges();".to_string(),
        };

        Some(code)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct MutOpsSeq<V, T>(pub Vec<MutOp<V, T>>);

impl<V, T> IntoIterator for MutOpsSeq<V, T> {
    type Item = MutOp<V, T>;
    type IntoIter = std::vec::IntoIter<MutOp<V, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V, T> MutOpsSeq<V, T>
where
    V: Clone + Eq + Hash + fmt::Debug,
    T: Clone + fmt::Debug,
{
    /// Applies the operations and prints equivalent source code, so that a
    /// failing sequence can be turned into a regular test.
    pub fn replay<G>(self, graph: &mut G)
    where
        G: GraphMut<Vertex = V, Edge = TaggedEdge<V, T>>,
        TaggedEdge<V, T>: PartialEq,
    {
        println!("let mut graph; // graph storage under test");
        println!();

        for op in self {
            if let Some(code) = op.to_code(graph) {
                println!("{code}");
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<V: fmt::Debug, T: fmt::Debug> fmt::Debug for MutOpsSeq<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test replay_mut_ops_seq`")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::VertexSetMut, infra::testing::check_directed_consistency, storage::AdjacencyGraph,
    };

    type Graph = AdjacencyGraph<u8, TaggedEdge<u8, u8>>;

    #[test]
    fn apply_addresses_vertices_by_index() {
        let mut graph = Graph::new();

        assert_eq!(
            MutOp::AddEdge(Index(0), Index(1), 0).apply(&mut graph),
            MutOpResult::AddEdge(None)
        );
        assert_eq!(
            MutOp::AddVertex(7).apply(&mut graph),
            MutOpResult::AddVertex(true)
        );
        assert_eq!(
            MutOp::AddVertex(7).apply(&mut graph),
            MutOpResult::AddVertex(false)
        );
        assert_eq!(
            MutOp::AddEdge(Index(3), Index(5), 1).apply(&mut graph),
            MutOpResult::AddEdge(Some(Ok(true)))
        );
        assert!(graph.contains_edge(&TaggedEdge::new(7, 7, 1)));

        assert_eq!(
            MutOp::RemoveEdge(Index(0), Index(0)).apply(&mut graph),
            MutOpResult::RemoveEdge(true)
        );
        assert_eq!(
            MutOp::RemoveEdge(Index(0), Index(0)).apply(&mut graph),
            MutOpResult::RemoveEdge(false)
        );
        assert_eq!(
            MutOp::RemoveVertex(Index(9)).apply(&mut graph),
            MutOpResult::RemoveVertex(true)
        );
        assert_eq!(
            MutOp::RemoveVertex(Index(9)).apply(&mut graph),
            MutOpResult::RemoveVertex(false)
        );
    }

    #[test]
    fn to_code() {
        let mut graph = Graph::new();

        assert_eq!(MutOp::<u8, u8>::RemoveVertex(Index(0)).to_code(&graph), None);

        graph.add_vertex(3);
        assert_eq!(
            MutOp::<u8, u8>::AddEdge(Index(1), Index(0), 2).to_code(&graph),
            Some("graph.add_edge(TaggedEdge::new(3, 3, 2)).ok();".to_string())
        );
    }

    #[test]
    #[ignore = "placeholder for fuzz findings"]
    fn replay_mut_ops_seq() {
        // Replace with the graph type under test.
        let mut graph = Graph::new();

        MutOpsSeq(vec![
            MutOp::AddVertex(0),
            MutOp::AddEdge(Index(0), Index(0), 0),
            MutOp::ClearEdges,
            MutOp::RemoveEdge(Index(0), Index(0)),
        ])
        .replay(&mut graph);

        check_directed_consistency(&graph).unwrap();
    }
}
