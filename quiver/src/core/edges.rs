use super::{base::GraphBase, error::AddEdgeError};

pub trait EdgeSet: GraphBase {
    type EdgesIter<'a>: Iterator<Item = Self::EdgeRef<'a>>
    where
        Self: 'a;

    /// Enumerates every edge exactly once.
    fn edges(&self) -> Self::EdgesIter<'_>;
    fn contains_edge(&self, edge: &Self::Edge) -> bool;

    fn edge_count(&self) -> usize {
        // Should be overridden by an efficient implementation whenever
        // possible.
        self.edges().count()
    }

    fn is_edges_empty(&self) -> bool {
        self.edge_count() == 0
    }
}

pub trait EdgeSetMut: EdgeSet {
    /// Inserts an edge.
    ///
    /// Returns `Ok(false)` without any change if the graph does not allow
    /// parallel edges and the endpoints are already connected. Fails if an
    /// endpoint is not in the graph or the storage cannot hold the edge; the
    /// edge is handed back in the error.
    fn add_edge(&mut self, edge: Self::Edge) -> Result<bool, AddEdgeError<Self::Edge>>;

    /// Removes the first stored edge equal to the given one.
    fn remove_edge(&mut self, edge: &Self::Edge) -> bool;

    /// Removes all edges satisfying the predicate. Returns the number of
    /// removed edges.
    fn remove_edge_if<P>(&mut self, predicate: P) -> usize
    where
        P: FnMut(&Self::Edge) -> bool;

    /// Returns the number of edges that were actually added. Stops at the first
    /// edge that fails.
    fn add_edges<I>(&mut self, edges: I) -> Result<usize, AddEdgeError<Self::Edge>>
    where
        I: IntoIterator<Item = Self::Edge>,
    {
        let mut added = 0;

        for edge in edges {
            if self.add_edge(edge)? {
                added += 1;
            }
        }

        Ok(added)
    }

    fn clear_edges(&mut self) {
        // Should be overridden by an efficient implementation whenever
        // possible.
        self.remove_edge_if(|_| true);
    }
}

macro_rules! deref_edge_set {
    ($($ref_kind:tt)*) => {
        impl<G> EdgeSet for $($ref_kind)* G
        where
            G: EdgeSet,
        {
            type EdgesIter<'a> = G::EdgesIter<'a>
            where
                Self: 'a;

            fn edges(&self) -> Self::EdgesIter<'_> {
                (**self).edges()
            }

            fn contains_edge(&self, edge: &Self::Edge) -> bool {
                (**self).contains_edge(edge)
            }

            fn edge_count(&self) -> usize {
                (**self).edge_count()
            }

            fn is_edges_empty(&self) -> bool {
                (**self).is_edges_empty()
            }
        }
    };
}

deref_edge_set!(&);
deref_edge_set!(&mut);

impl<G> EdgeSetMut for &mut G
where
    G: EdgeSetMut,
{
    fn add_edge(&mut self, edge: Self::Edge) -> Result<bool, AddEdgeError<Self::Edge>> {
        (**self).add_edge(edge)
    }

    fn remove_edge(&mut self, edge: &Self::Edge) -> bool {
        (**self).remove_edge(edge)
    }

    fn remove_edge_if<P>(&mut self, predicate: P) -> usize
    where
        P: FnMut(&Self::Edge) -> bool,
    {
        (**self).remove_edge_if(predicate)
    }

    fn clear_edges(&mut self) {
        (**self).clear_edges()
    }
}
