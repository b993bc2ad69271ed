use super::base::GraphBase;

pub trait VertexSet: GraphBase {
    type VerticesIter<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_>;

    fn vertex_count(&self) -> usize {
        // Should be overridden by an efficient implementation whenever
        // possible.
        self.vertices().count()
    }

    fn is_vertices_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

pub trait VertexSetMut: VertexSet {
    /// Returns `false` without any change if the vertex is already present.
    fn add_vertex(&mut self, vertex: Self::Vertex) -> bool;

    /// Returns `false` if the vertex is not present. Incident edges are removed
    /// together with the vertex.
    fn remove_vertex(&mut self, vertex: &Self::Vertex) -> bool;

    /// Returns the number of vertices that were actually added.
    fn add_vertices<I>(&mut self, vertices: I) -> usize
    where
        I: IntoIterator<Item = Self::Vertex>,
    {
        let mut added = 0;

        for vertex in vertices {
            if self.add_vertex(vertex) {
                added += 1;
            }
        }

        added
    }

    /// Removes all vertices satisfying the predicate. Returns the number of
    /// removed vertices.
    fn remove_vertex_if<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Vertex) -> bool,
    {
        let doomed = self
            .vertices()
            .filter(|vertex| predicate(vertex))
            .cloned()
            .collect::<Vec<_>>();

        doomed
            .iter()
            .filter(|vertex| self.remove_vertex(vertex))
            .count()
    }
}

macro_rules! deref_vertex_set {
    ($($ref_kind:tt)*) => {
        impl<G> VertexSet for $($ref_kind)* G
        where
            G: VertexSet,
        {
            type VerticesIter<'a> = G::VerticesIter<'a>
            where
                Self: 'a;

            fn vertices(&self) -> Self::VerticesIter<'_> {
                (**self).vertices()
            }

            fn vertex_count(&self) -> usize {
                (**self).vertex_count()
            }

            fn is_vertices_empty(&self) -> bool {
                (**self).is_vertices_empty()
            }
        }
    };
}

deref_vertex_set!(&);
deref_vertex_set!(&mut);

impl<G> VertexSetMut for &mut G
where
    G: VertexSetMut,
{
    fn add_vertex(&mut self, vertex: Self::Vertex) -> bool {
        (**self).add_vertex(vertex)
    }

    fn remove_vertex(&mut self, vertex: &Self::Vertex) -> bool {
        (**self).remove_vertex(vertex)
    }
}
