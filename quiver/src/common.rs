pub mod edge_list;
pub mod vertex_map;

pub use edge_list::EdgeList;
pub use vertex_map::VertexEdgeMap;
