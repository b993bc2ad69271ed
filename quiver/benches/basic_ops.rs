mod common;

use common::{petgraph_random, quiver_random, RandomEdges, Tagged, RANDOM_SEED};
use divan::Bencher;
use fastrand::Rng;
use petgraph::prelude::*;
use quiver::{
    core::{Create, EdgeSet, OutEdges, TaggedEdge, VertexSet},
    storage::{
        AdjacencyGraph, ArrayAdjacencyGraph, BidirectionalGraph, CompressedSparseRowGraph,
        UndirectedGraph,
    },
};

type Adjacency = AdjacencyGraph<usize, Tagged>;
type Bidirectional = BidirectionalGraph<usize, Tagged>;
type Undirected = UndirectedGraph<usize, Tagged>;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], types = [Adjacency, Bidirectional, Undirected], args = [0.05, 0.5])]
fn quiver_add_remove<const N: usize, G>(density: f32)
where
    G: Create<Vertex = usize, Edge = Tagged>,
{
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let mut graph = quiver_random::<G>(N, density, &mut rng);

    for _ in 0..(N / 4) {
        graph.remove_vertex(&rng.usize(..N));
    }

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        let _ = graph.add_edge(TaggedEdge::new(u, v, rng.u32(..)));
    }

    divan::black_box(graph.edge_count());
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn petgraph_add_remove<const N: usize>(density: f32) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let mut graph = petgraph_random(N, density, &mut rng);

    for _ in 0..(N / 4) {
        let u = rng.usize(..graph.node_count());
        graph.remove_node(NodeIndex::new(u));
    }

    let mut edges = RandomEdges::new(graph.node_count(), density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.u32(..));
    }

    divan::black_box(graph.edge_count());
}

fn sum_out_degrees<G: VertexSet + OutEdges>(graph: &G) -> usize {
    graph
        .vertices()
        .map(|vertex| graph.out_degree(vertex).unwrap_or_default())
        .sum()
}

#[divan::bench(consts = [1000])]
fn adjacency_out_edges<const N: usize>(bencher: Bencher) {
    let graph = quiver_random::<Adjacency>(N, 0.1, &mut Rng::with_seed(RANDOM_SEED));
    bencher.bench_local(|| sum_out_degrees(&graph));
}

#[divan::bench(consts = [1000])]
fn array_out_edges<const N: usize>(bencher: Bencher) {
    let graph = quiver_random::<Adjacency>(N, 0.1, &mut Rng::with_seed(RANDOM_SEED));
    let graph = ArrayAdjacencyGraph::from_graph(&graph);
    bencher.bench_local(|| sum_out_degrees(&graph));
}

#[divan::bench(consts = [1000])]
fn csr_out_edges<const N: usize>(bencher: Bencher) {
    let graph = quiver_random::<Adjacency>(N, 0.1, &mut Rng::with_seed(RANDOM_SEED));
    let graph = CompressedSparseRowGraph::from_graph(&graph);
    bencher.bench_local(|| sum_out_degrees(&graph));
}

#[divan::bench(consts = [1000])]
fn petgraph_out_edges<const N: usize>(bencher: Bencher) {
    let graph = petgraph_random(N, 0.1, &mut Rng::with_seed(RANDOM_SEED));
    bencher.bench_local(|| {
        graph
            .node_indices()
            .map(|node| graph.edges(node).count())
            .sum::<usize>()
    });
}

#[divan::bench(consts = [1000])]
fn freeze_into_array<const N: usize>(bencher: Bencher) {
    let graph = quiver_random::<Adjacency>(N, 0.1, &mut Rng::with_seed(RANDOM_SEED));
    bencher.bench_local(|| ArrayAdjacencyGraph::from_graph(&graph));
}
