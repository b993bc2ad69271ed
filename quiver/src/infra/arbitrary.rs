//! Arbitrary mutation sequences for fuzzing.
//!
//! A plain `Vec<MutOp>` derived from fuzzer input is dominated by removals of
//! vertices that do not exist and rarely grows a graph of interesting size.
//! [`MutOpsSeq`] instead picks every operation with weights that depend on how
//! far the sequence is from a target size drawn at the beginning: additions
//! prevail while the graph is small and removals take over once it is big.

use arbitrary::{Arbitrary, Unstructured};

pub use super::mutation::{Index, MutOp, MutOpResult, MutOpsSeq};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OpKind {
    AddVertex,
    AddEdge,
    RemoveVertex,
    RemoveEdge,
    Clear,
    ClearEdges,
}

impl OpKind {
    const ALL: [OpKind; 6] = [
        OpKind::AddVertex,
        OpKind::AddEdge,
        OpKind::RemoveVertex,
        OpKind::RemoveEdge,
        OpKind::Clear,
        OpKind::ClearEdges,
    ];

    fn of<V, T>(op: &MutOp<V, T>) -> Self {
        match op {
            MutOp::AddVertex(_) => OpKind::AddVertex,
            MutOp::AddEdge(..) => OpKind::AddEdge,
            MutOp::RemoveVertex(_) => OpKind::RemoveVertex,
            MutOp::RemoveEdge(..) => OpKind::RemoveEdge,
            MutOp::Clear => OpKind::Clear,
            MutOp::ClearEdges => OpKind::ClearEdges,
        }
    }
}

/// Estimated size of the graph built by the sequence so far.
#[derive(Debug, Default)]
struct Tally {
    vertices: usize,
    edges: usize,
}

impl Tally {
    fn record<V, T>(&mut self, op: &MutOp<V, T>) {
        match OpKind::of(op) {
            OpKind::AddVertex => self.vertices += 1,
            OpKind::AddEdge => self.edges += 1,
            OpKind::RemoveVertex => self.vertices = self.vertices.saturating_sub(1),
            OpKind::RemoveEdge => self.edges = self.edges.saturating_sub(1),
            OpKind::Clear => *self = Tally::default(),
            OpKind::ClearEdges => self.edges = 0,
        }
    }
}

impl<'a, V, T> Arbitrary<'a> for MutOpsSeq<V, T>
where
    V: Arbitrary<'a>,
    T: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let vertex_target = u.int_in_range(10..=1000usize)?;
        let density = fraction(u)?;
        let edge_target =
            ((vertex_target * (vertex_target - 1) / 2) as f64 * density).round() as usize;

        let total = u.len();
        let mut tally = Tally::default();
        let mut ops = Vec::with_capacity(vertex_target);

        while !u.is_empty() {
            let progress = (total - u.len()) as f64 / total as f64;
            let vertex_fill = (tally.vertices as f64 / vertex_target as f64).min(1.0);
            let edge_fill = (tally.edges as f64 / edge_target.max(1) as f64).min(1.0);

            let Ok(op) = arbitrary_op(u, vertex_fill, edge_fill, progress) else {
                break;
            };

            tally.record(&op);
            ops.push(op);
        }

        Ok(MutOpsSeq(ops))
    }
}

fn arbitrary_op<'a, V, T>(
    u: &mut Unstructured<'a>,
    vertex_fill: f64,
    edge_fill: f64,
    progress: f64,
) -> arbitrary::Result<MutOp<V, T>>
where
    V: Arbitrary<'a>,
    T: Arbitrary<'a>,
{
    // Progress of the whole sequence is mixed in so that edges keep being
    // added even when the tally says there is enough of them.
    let add_vertex = decay(0.4 * vertex_fill + 0.6 * progress);
    let add_edge = decay(0.6 * edge_fill + 0.4 * progress);

    let weights = [
        add_vertex,
        add_edge,
        (1.0 - add_vertex) * 0.25,
        (1.0 - add_edge) * 0.5,
        0.01,
        0.01,
    ];

    let op = match choose_weighted(u, &OpKind::ALL, &weights)? {
        OpKind::AddVertex => MutOp::AddVertex(u.arbitrary()?),
        OpKind::AddEdge => MutOp::AddEdge(u.arbitrary()?, u.arbitrary()?, u.arbitrary()?),
        OpKind::RemoveVertex => MutOp::RemoveVertex(u.arbitrary()?),
        OpKind::RemoveEdge => MutOp::RemoveEdge(u.arbitrary()?, u.arbitrary()?),
        OpKind::Clear => MutOp::Clear,
        OpKind::ClearEdges => MutOp::ClearEdges,
    };

    Ok(op)
}

/// Number from `[0, 1]` in steps of one hundredth.
fn fraction(u: &mut Unstructured<'_>) -> arbitrary::Result<f64> {
    const RESOLUTION: u8 = 100;
    let int = u.int_in_range(0..=RESOLUTION)?;
    Ok(int as f64 / RESOLUTION as f64)
}

fn choose_weighted<T: Copy>(
    u: &mut Unstructured<'_>,
    choices: &[T],
    weights: &[f64],
) -> arbitrary::Result<T> {
    if choices.is_empty() || choices.len() != weights.len() {
        return Err(arbitrary::Error::EmptyChoose);
    }

    let bound = fraction(u)? * weights.iter().sum::<f64>();

    let mut acc = 0.0;
    for (choice, weight) in choices.iter().zip(weights) {
        acc += weight;

        if acc >= bound {
            return Ok(*choice);
        }
    }

    // Rounding errors of the accumulated sum.
    choices.last().copied().ok_or(arbitrary::Error::EmptyChoose)
}

// decay(0) = 1, decay(1) ~= 0.152
fn decay(x: f64) -> f64 {
    1.0 / (x + 1.0).powf(std::f64::consts::E)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use fastrand::Rng;

    use super::*;
    use crate::{
        core::TaggedEdge,
        infra::testing::check_undirected_consistency,
        storage::UndirectedGraph,
    };

    fn sequences(sizes: &[usize], seeds: &[u64]) -> Vec<MutOpsSeq<i8, i8>> {
        let mut sequences = Vec::new();

        for size in sizes {
            let mut raw = vec![0; *size];

            for seed in seeds {
                let mut rng = Rng::with_seed(*seed);
                rng.fill(&mut raw);

                let mut u = Unstructured::new(&raw);
                sequences.push(u.arbitrary().unwrap());
            }
        }

        sequences
    }

    #[test]
    fn additions_come_first() {
        let mut count = HashMap::<_, usize>::new();
        let mut position = HashMap::<_, f64>::new();

        for seq in sequences(&[1000, 5000], &[0, 7, 42, 666]) {
            let len = seq.0.len() as f64;

            for (i, op) in seq.into_iter().enumerate() {
                let kind = OpKind::of(&op);
                *count.entry(kind).or_default() += 1;
                *position.entry(kind).or_default() += i as f64 / len;
            }
        }

        let average = |kind: OpKind| position[&kind] / count[&kind] as f64;

        let rare = count.get(&OpKind::Clear).copied().unwrap_or_default()
            + count.get(&OpKind::ClearEdges).copied().unwrap_or_default();

        assert!(count[&OpKind::AddVertex] > rare);
        assert!(count[&OpKind::AddEdge] > rare);
        assert!(average(OpKind::AddVertex) < average(OpKind::RemoveVertex));
    }

    #[test]
    fn replaying_keeps_undirected_graph_consistent() {
        for seq in sequences(&[2000], &[1, 2, 3]) {
            let mut graph = UndirectedGraph::<i8, TaggedEdge<i8, i8>>::new();

            for op in seq {
                op.apply(&mut graph);
                check_undirected_consistency(&graph).unwrap();
            }
        }
    }
}
