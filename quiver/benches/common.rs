#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;
use quiver::core::{Create, TaggedEdge};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub type Tagged = TaggedEdge<usize, u32>;

/// Geometric sampling of the pairs `(v, w)` with `w < v < n`, each taken with
/// probability `p`, in increasing order.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        if self.v >= self.n {
            return None;
        }

        let r = rng.f32();
        let skip = ((1.0 - r).log10() / (1.0 - self.p).log10()).floor() as usize;
        self.w = self.w.wrapping_add(1) + skip;

        while self.w >= self.v && self.v < self.n {
            self.w -= self.v;
            self.v += 1;
        }

        (self.v < self.n).then_some((self.v, self.w))
    }
}

pub fn quiver_random<G>(vertex_count: usize, density: f32, rng: &mut Rng) -> G
where
    G: Create<Vertex = usize, Edge = Tagged>,
{
    let mut graph = G::with_capacity(vertex_count, 0);
    graph.add_vertices(0..vertex_count);

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let _ = graph.add_edge(TaggedEdge::new(u, v, rng.u32(..)));
    }

    graph
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<usize, u32, petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for vertex in 0..vertex_count {
        graph.add_node(vertex);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.u32(..));
    }

    graph
}
