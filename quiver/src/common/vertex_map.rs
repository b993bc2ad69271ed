use std::{
    collections::hash_map::{Iter, IterMut, Keys, Values},
    hash::Hash,
};

use rustc_hash::FxHashMap;

use super::edge_list::EdgeList;

/// Mapping from every vertex of a graph to its edge list.
///
/// Presence of a key is the definition of vertex membership.
#[derive(Debug, Clone)]
pub struct VertexEdgeMap<V, E> {
    lists: FxHashMap<V, EdgeList<E>>,
    list_capacity: usize,
}

impl<V: Eq + Hash, E> VertexEdgeMap<V, E> {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// `list_capacity` is the initial capacity of every edge list created for
    /// a newly inserted vertex.
    pub fn with_capacity(vertex_capacity: usize, list_capacity: usize) -> Self {
        Self {
            lists: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            list_capacity,
        }
    }

    /// Inserts the vertex with an empty edge list. Returns `false` and leaves
    /// the existing list untouched if the vertex is already present.
    pub fn insert_vertex(&mut self, vertex: V) -> bool {
        if self.lists.contains_key(&vertex) {
            return false;
        }

        self.lists
            .insert(vertex, EdgeList::with_capacity(self.list_capacity));
        true
    }

    pub fn remove(&mut self, vertex: &V) -> Option<EdgeList<E>> {
        self.lists.remove(vertex)
    }

    pub fn get(&self, vertex: &V) -> Option<&EdgeList<E>> {
        self.lists.get(vertex)
    }

    pub fn get_mut(&mut self, vertex: &V) -> Option<&mut EdgeList<E>> {
        self.lists.get_mut(vertex)
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.lists.contains_key(vertex)
    }
}

impl<V, E> VertexEdgeMap<V, E> {
    pub fn vertices(&self) -> Keys<'_, V, EdgeList<E>> {
        self.lists.keys()
    }

    pub fn lists(&self) -> Values<'_, V, EdgeList<E>> {
        self.lists.values()
    }

    pub fn iter(&self) -> Iter<'_, V, EdgeList<E>> {
        self.lists.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V, EdgeList<E>> {
        self.lists.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Total number of edges over all lists.
    pub fn edge_count(&self) -> usize {
        self.lists.values().map(EdgeList::len).sum()
    }

    /// Removes all vertices.
    pub fn clear(&mut self) {
        self.lists.clear();
    }

    /// Empties every list, keeping the vertices.
    pub fn clear_lists(&mut self) {
        for list in self.lists.values_mut() {
            list.clear();
        }
    }

    pub fn trim_excess(&mut self) {
        for list in self.lists.values_mut() {
            list.trim_excess();
        }
    }
}

impl<V: Eq + Hash, E> Default for VertexEdgeMap<V, E> {
    fn default() -> Self {
        Self::new()
    }
}
