#![no_main]

use libfuzzer_sys::fuzz_target;

use quiver::{
    core::TaggedEdge,
    infra::{arbitrary::MutOpsSeq, testing::check_directed_consistency},
    storage::AdjacencyGraph,
};

fuzz_target!(|ops: MutOpsSeq<i8, i8>| {
    let mut graph = AdjacencyGraph::<i8, TaggedEdge<i8, i8>>::new();

    for op in ops {
        op.apply(&mut graph);
        check_directed_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
