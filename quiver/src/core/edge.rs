//! Edge identity.
//!
//! Graphs in quiver do not assign identifiers to edges. Instead, an edge is a
//! user-supplied value that knows its endpoints, and its [`PartialEq`]
//! implementation decides which stored edge a removal or containment query
//! refers to.
//!
//! Edges must not change their endpoints after they were inserted into a
//! graph. Graphs do not guard against it and the behavior is unspecified.

use std::{fmt, rc::Rc, sync::Arc};

use quiver_derive::Edge;

/// Minimal capability set of an edge: its source and target vertex.
///
/// The trait can be derived for structs with fields marked by `#[source]` and
/// `#[target]` attributes (requires the `derive` feature).
///
/// ```
/// use quiver::core::{Edge, SEdge};
///
/// let edge = SEdge::new("a", "b");
/// assert_eq!(edge.source(), &"a");
/// assert_eq!(edge.target(), &"b");
/// assert!(!edge.is_self_edge());
/// ```
pub trait Edge<V> {
    fn source(&self) -> &V;
    fn target(&self) -> &V;

    /// Returns `true` if the source and the target are the same vertex.
    fn is_self_edge(&self) -> bool
    where
        V: PartialEq,
    {
        self.source() == self.target()
    }

    /// Returns the endpoint on the other side of the edge, or `None` if the
    /// given vertex is not incident with this edge.
    fn other_vertex(&self, vertex: &V) -> Option<&V>
    where
        V: PartialEq,
    {
        if self.source() == vertex {
            Some(self.target())
        } else if self.target() == vertex {
            Some(self.source())
        } else {
            None
        }
    }

    /// Returns `true` if the given vertex is one of the endpoints.
    fn is_adjacent(&self, vertex: &V) -> bool
    where
        V: PartialEq,
    {
        self.source() == vertex || self.target() == vertex
    }
}

/// A plain edge, a pair of vertices with structural equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Edge)]
#[quiver_crate]
pub struct SEdge<V> {
    #[source]
    source: V,
    #[target]
    target: V,
}

impl<V> SEdge<V> {
    pub fn new(source: V, target: V) -> Self {
        Self { source, target }
    }

    pub fn into_endpoints(self) -> (V, V) {
        (self.source, self.target)
    }

    /// Returns the edge with swapped endpoints.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}

impl<V: fmt::Display> fmt::Display for SEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

impl<V> From<(V, V)> for SEdge<V> {
    fn from((source, target): (V, V)) -> Self {
        Self::new(source, target)
    }
}

/// An edge carrying an additional payload.
///
/// The payload takes part in equality, so two tagged edges between the same
/// pair of vertices with different tags are distinct edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Edge)]
#[quiver_crate]
pub struct TaggedEdge<V, T> {
    #[source]
    source: V,
    #[target]
    target: V,
    pub tag: T,
}

impl<V, T> TaggedEdge<V, T> {
    pub fn new(source: V, target: V, tag: T) -> Self {
        Self {
            source,
            target,
            tag,
        }
    }

    pub fn into_parts(self) -> (V, V, T) {
        (self.source, self.target, self.tag)
    }
}

impl<V> Edge<V> for (V, V) {
    fn source(&self) -> &V {
        &self.0
    }

    fn target(&self) -> &V {
        &self.1
    }
}

macro_rules! deref_edge {
    ($($ptr:tt)*) => {
        impl<V, E> Edge<V> for $($ptr)*<E>
        where
            E: Edge<V> + ?Sized,
        {
            fn source(&self) -> &V {
                (**self).source()
            }

            fn target(&self) -> &V {
                (**self).target()
            }
        }
    };
}

deref_edge!(Box);
deref_edge!(Rc);
deref_edge!(Arc);
