#![no_main]

use libfuzzer_sys::fuzz_target;

use quiver::{
    core::{Config, TaggedEdge},
    infra::{arbitrary::MutOpsSeq, testing::check_undirected_consistency},
    storage::UndirectedGraph,
};

fuzz_target!(|input: (bool, MutOpsSeq<i8, i8>)| {
    let (allow_parallel_edges, ops) = input;
    let config = Config::default().parallel_edges(allow_parallel_edges);
    let mut graph = UndirectedGraph::<i8, TaggedEdge<i8, i8>>::with_config(config);

    for op in ops {
        op.apply(&mut graph);
        check_undirected_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
