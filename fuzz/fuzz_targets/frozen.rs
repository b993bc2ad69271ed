#![no_main]

use libfuzzer_sys::fuzz_target;

use quiver::{
    core::{EdgeSet, TaggedEdge, VertexSet},
    infra::{
        arbitrary::MutOpsSeq,
        testing::{check_bidirectional_consistency, check_directed_consistency},
    },
    storage::{ArrayBidirectionalGraph, BidirectionalGraph, CompressedSparseRowGraph},
};

fuzz_target!(|ops: MutOpsSeq<i8, i8>| {
    let mut graph = BidirectionalGraph::<i8, TaggedEdge<i8, i8>>::new();

    for op in ops {
        op.apply(&mut graph);
    }

    let array = ArrayBidirectionalGraph::from_graph(&graph);
    check_bidirectional_consistency(&array)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
    assert_eq!(array.vertex_count(), graph.vertex_count());
    assert_eq!(array.edge_count(), graph.edge_count());

    let csr = CompressedSparseRowGraph::from_graph(&graph);
    check_directed_consistency(&csr)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
    assert_eq!(csr.edge_count(), graph.edge_count());
});
