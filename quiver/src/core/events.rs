//! Mutation notifications.
//!
//! Every mutable graph owns a [`GraphEvents`] with one observer list per kind
//! of mutation. Observers are invoked synchronously, in registration order,
//! before the mutating call returns. Since the graph is mutably borrowed for
//! the whole call, an observer cannot reach back into the graph.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use quiver::{
//!     core::{EdgeSetMut, Observable, SEdge, VertexSetMut},
//!     storage::AdjacencyGraph,
//! };
//!
//! let mut graph = AdjacencyGraph::<u32, SEdge<u32>>::new();
//! let added = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&added);
//! graph
//!     .events_mut()
//!     .vertex_added
//!     .subscribe(move |v: &u32| sink.lock().unwrap().push(*v));
//!
//! graph.add_vertex(1);
//! graph.add_vertex(2);
//! graph.add_vertex(1);
//!
//! assert_eq!(*added.lock().unwrap(), vec![1, 2]);
//! ```

use std::fmt;

use super::base::GraphBase;

/// Handle returned by [`Observers::subscribe`], used for unsubscribing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u64);

type Observer<T> = Box<dyn FnMut(&T) + Send + Sync>;

/// Ordered list of observers of one kind of event.
pub struct Observers<T> {
    observers: Vec<(ObserverId, Observer<T>)>,
    next_id: u64,
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&T) + Send + Sync + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if no observer with this id is subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        match self.observers.iter().position(|(other, _)| *other == id) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn notify(&mut self, value: &T) {
        for (_, observer) in self.observers.iter_mut() {
            observer(value);
        }
    }

    pub fn notify_all<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        if self.is_empty() {
            return;
        }

        for value in values {
            self.notify(value);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn clear(&mut self) {
        self.observers.clear();
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.observers.len())
            .finish()
    }
}

/// Observer lists of a mutable graph.
///
/// Observers are tied to the graph instance they were registered on. A clone
/// of the graph starts with no observers.
#[derive(Debug)]
pub struct GraphEvents<V, E> {
    pub vertex_added: Observers<V>,
    pub vertex_removed: Observers<V>,
    pub edge_added: Observers<E>,
    pub edge_removed: Observers<E>,
}

impl<V, E> GraphEvents<V, E> {
    pub fn new() -> Self {
        Self {
            vertex_added: Observers::new(),
            vertex_removed: Observers::new(),
            edge_added: Observers::new(),
            edge_removed: Observers::new(),
        }
    }

    pub fn clear(&mut self) {
        self.vertex_added.clear();
        self.vertex_removed.clear();
        self.edge_added.clear();
        self.edge_removed.clear();
    }
}

impl<V, E> Default for GraphEvents<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Clone for GraphEvents<V, E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

/// Graphs that notify observers about their mutations.
pub trait Observable: GraphBase {
    fn events(&self) -> &GraphEvents<Self::Vertex, Self::Edge>;
    fn events_mut(&mut self) -> &mut GraphEvents<Self::Vertex, Self::Edge>;
}

impl<G> Observable for &mut G
where
    G: Observable,
{
    fn events(&self) -> &GraphEvents<Self::Vertex, Self::Edge> {
        (**self).events()
    }

    fn events_mut(&mut self) -> &mut GraphEvents<Self::Vertex, Self::Edge> {
        (**self).events_mut()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn notify_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut observers = Observers::<i32>::new();

        let first = Arc::clone(&log);
        observers.subscribe(move |v| first.lock().unwrap().push(("first", *v)));
        let second = Arc::clone(&log);
        observers.subscribe(move |v| second.lock().unwrap().push(("second", *v)));

        observers.notify(&7);

        assert_eq!(*log.lock().unwrap(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn unsubscribe() {
        let count = Arc::new(Mutex::new(0));
        let mut observers = Observers::<()>::new();

        let sink = Arc::clone(&count);
        let id = observers.subscribe(move |_| *sink.lock().unwrap() += 1);

        observers.notify(&());
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(&());

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(observers.is_empty());
    }

    #[test]
    fn clone_drops_observers() {
        let mut events = GraphEvents::<u8, u8>::new();
        events.edge_added.subscribe(|_| {});

        let cloned = events.clone();

        assert_eq!(events.edge_added.len(), 1);
        assert!(cloned.edge_added.is_empty());
    }
}
