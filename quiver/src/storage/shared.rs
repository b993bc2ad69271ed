use std::{
    collections::hash_map::{self, Values},
    iter::Flatten,
    slice::Iter,
};

use crate::{common::EdgeList, core::Edge};

/// All edges of a vertex→edge-list map, list by list.
pub struct EdgesIter<'a, V, E> {
    inner: Flatten<Values<'a, V, EdgeList<E>>>,
}

impl<'a, V, E> EdgesIter<'a, V, E> {
    pub fn new(lists: Values<'a, V, EdgeList<E>>) -> Self {
        Self {
            inner: lists.flatten(),
        }
    }
}

impl<'a, V, E> Iterator for EdgesIter<'a, V, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Edges of a map where every edge is stored in the lists of both endpoints.
/// An edge is yielded only from the list of its source vertex, so each stored
/// edge is yielded exactly once.
pub struct SourceEdgesIter<'a, V, E> {
    lists: hash_map::Iter<'a, V, EdgeList<E>>,
    current: Option<(&'a V, Iter<'a, E>)>,
}

impl<'a, V, E> SourceEdgesIter<'a, V, E> {
    pub fn new(lists: hash_map::Iter<'a, V, EdgeList<E>>) -> Self {
        Self {
            lists,
            current: None,
        }
    }
}

impl<'a, V, E> Iterator for SourceEdgesIter<'a, V, E>
where
    V: PartialEq,
    E: Edge<V>,
{
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((vertex, edges)) = self.current.as_mut() {
                let vertex = *vertex;
                if let Some(edge) = edges.find(|edge| edge.source() == vertex) {
                    return Some(edge);
                }
            }

            let (vertex, list) = self.lists.next()?;
            self.current = Some((vertex, list.iter()));
        }
    }
}
