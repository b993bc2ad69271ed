//! Contracts shared by all graphs.
//!
//! Read access is split into capabilities: [`VertexSet`], [`EdgeSet`],
//! [`OutEdges`], [`InEdges`] (bidirectional graphs) and [`AdjacentEdges`]
//! (undirected graphs). Mutable graphs additionally implement the `*Mut`
//! counterparts and [`GraphMut`].

pub mod config;
pub mod equality;
pub mod error;
pub mod events;

mod base;
pub(crate) mod create;
mod edge;
mod edges;
mod graph;
mod incidence;
mod vertices;

pub use base::*;
pub use config::Config;
pub use create::*;
pub use edge::*;
pub use edges::*;
pub use equality::{EdgeEquality, OrderedVertexEquality, UndirectedVertexEquality};
pub use error::{AddEdgeError, AddEdgeErrorKind, CsrError, VertexNotFound};
pub use events::{GraphEvents, Observable, ObserverId, Observers};
pub use graph::*;
pub use incidence::*;
pub use vertices::*;
