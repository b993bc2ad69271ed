use std::slice::Iter;

/// Ordered list of edges incident with a single vertex.
///
/// Insertion order is preserved by every operation, including removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList<E> {
    edges: Vec<E>,
}

impl<E> EdgeList<E> {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, edge: E) {
        self.edges.push(edge);
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, E> {
        self.edges.iter()
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.edges.get(index)
    }

    /// Keeps only the edges satisfying the predicate.
    pub fn retain<P>(&mut self, predicate: P)
    where
        P: FnMut(&E) -> bool,
    {
        self.edges.retain(predicate);
    }

    /// Removes all edges satisfying the predicate and returns them in their
    /// original order.
    ///
    /// The removal is done in two phases (first collect positions, then remove)
    /// so that the predicate always sees the list in a consistent state.
    pub fn extract_if<P>(&mut self, mut predicate: P) -> Vec<E>
    where
        P: FnMut(&E) -> bool,
    {
        let doomed = self
            .edges
            .iter()
            .map(|edge| predicate(edge))
            .collect::<Vec<_>>();

        if !doomed.contains(&true) {
            return Vec::new();
        }

        let mut extracted = Vec::new();
        let mut kept = Vec::with_capacity(self.edges.len());

        for (edge, remove) in std::mem::take(&mut self.edges).into_iter().zip(doomed) {
            if remove {
                extracted.push(edge);
            } else {
                kept.push(edge);
            }
        }

        self.edges = kept;
        extracted
    }

    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Releases the capacity not used by the stored edges.
    pub fn trim_excess(&mut self) {
        self.edges.shrink_to_fit();
    }

    pub fn capacity(&self) -> usize {
        self.edges.capacity()
    }
}

impl<E: PartialEq> EdgeList<E> {
    pub fn contains(&self, edge: &E) -> bool {
        self.edges.contains(edge)
    }

    /// Removes the first occurrence of an equal edge.
    pub fn remove(&mut self, edge: &E) -> Option<E> {
        let index = self.edges.iter().position(|other| other == edge)?;
        Some(self.edges.remove(index))
    }
}

impl<E> Default for EdgeList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> AsRef<[E]> for EdgeList<E> {
    fn as_ref(&self) -> &[E] {
        &self.edges
    }
}

impl<'a, E> IntoIterator for &'a EdgeList<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl<E> IntoIterator for EdgeList<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<E> FromIterator<E> for EdgeList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for EdgeList<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.edges.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_first_occurrence() {
        let mut list = [1, 2, 3, 2, 4].into_iter().collect::<EdgeList<_>>();

        assert_eq!(list.remove(&2), Some(2));
        assert_eq!(list.as_ref(), &[1, 3, 2, 4]);

        assert_eq!(list.remove(&5), None);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn extract_if_preserves_order() {
        let mut list = (0..10).collect::<EdgeList<_>>();

        let extracted = list.extract_if(|x| x % 3 == 0);

        assert_eq!(extracted, vec![0, 3, 6, 9]);
        assert_eq!(list.as_ref(), &[1, 2, 4, 5, 7, 8]);
    }

    #[test]
    fn extract_if_nothing() {
        let mut list = (0..4).collect::<EdgeList<_>>();
        let capacity = list.capacity();

        assert!(list.extract_if(|_| false).is_empty());
        assert_eq!(list.len(), 4);
        assert_eq!(list.capacity(), capacity);
    }

    #[test]
    fn clone_is_independent() {
        let mut list = EdgeList::new();
        list.push(1);
        list.push(2);

        let mut cloned = list.clone();
        cloned.push(3);
        list.remove(&1);

        assert_eq!(list.as_ref(), &[2]);
        assert_eq!(cloned.as_ref(), &[1, 2, 3]);
    }

    #[test]
    fn trim_excess() {
        let mut list = EdgeList::with_capacity(64);
        list.push(1);

        list.trim_excess();

        assert!(list.capacity() < 64);
        assert!(list.contains(&1));
    }
}
