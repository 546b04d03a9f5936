//! Positions in a graph's edge sequence.
//!
//! An [`EdgeCursor`] names one entry of the ordered edge storage, or the end
//! position, without borrowing the graph.  That lets a cursor be held across
//! mutations and handed back to [`Graph::erase_edge_at`] and friends.  A
//! cursor keeps pointing at the same edge for as long as that edge exists,
//! whatever else is inserted or erased in the meantime.
//!
//! [`Iter`] is the borrowing counterpart, used for `for` loops.

use std::{collections::btree_map, iter::FusedIterator};

use derivative::Derivative;

use crate::{
    Graph,
    edge::EdgeValue,
    edge_store::{EdgeKey, EdgeLinks},
    graph_id::GraphId,
};

/// A position in the edge sequence of a [`Graph`]: either an edge or the end
/// position.
///
/// Two cursors are equal when they come from the same graph and name the same
/// position.  A default-constructed cursor belongs to no graph and is only
/// equal to other default-constructed cursors.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "N: Clone, E: Clone"),
    Debug(bound = "N: std::fmt::Debug, E: std::fmt::Debug"),
    Default(bound = "")
)]
pub struct EdgeCursor<N, E> {
    graph: Option<GraphId>,
    key: Option<EdgeKey<N, E>>,
}

impl<N, E> EdgeCursor<N, E> {
    pub(crate) fn new(graph: GraphId, key: Option<EdgeKey<N, E>>) -> Self {
        Self {
            graph: Some(graph),
            key,
        }
    }

    #[cfg(not(feature = "unchecked"))]
    pub(crate) fn graph_id(&self) -> Option<GraphId> {
        self.graph
    }

    pub(crate) fn key(&self) -> Option<&EdgeKey<N, E>> {
        self.key.as_ref()
    }

    /// Returns true for the end position (and for default-constructed
    /// cursors).
    pub fn is_end(&self) -> bool {
        self.key.is_none()
    }
}

impl<N, E> EdgeCursor<N, E>
where
    N: Ord + Clone,
    E: PartialOrd + Clone,
{
    /// Copies out the edge at this position.  Returns `None` at the end
    /// position, or if the edge has been erased since the cursor was made.
    pub fn get(&self, graph: &Graph<N, E>) -> Option<EdgeValue<N, E>> {
        graph.assert_valid_cursor(self);
        let key = self.key.as_ref()?;
        graph
            .edges
            .contains(key)
            .then(|| key.edge().to_value())
    }

    /// Moves to the next edge, or to the end position after the last edge.
    ///
    /// Advancing the end position is a contract violation; it panics in debug
    /// builds and leaves the cursor at the end otherwise.
    pub fn move_next(&mut self, graph: &Graph<N, E>) {
        graph.assert_valid_cursor(self);
        match &self.key {
            Some(key) => self.key = graph.edges.next_after(key).cloned(),
            None => {
                if cfg!(debug_assertions) {
                    panic!("cannot advance an EdgeCursor past the end");
                }
            }
        }
    }

    /// Moves to the previous edge.  From the end position this is the last
    /// edge.
    ///
    /// Retreating from the first edge is a contract violation; it panics in
    /// debug builds and leaves the cursor where it is otherwise.
    pub fn move_prev(&mut self, graph: &Graph<N, E>) {
        graph.assert_valid_cursor(self);
        let prev = match &self.key {
            Some(key) => graph.edges.prev_before(key),
            None => graph.edges.last(),
        };
        match prev {
            Some(prev) => self.key = Some(prev.clone()),
            None => {
                if cfg!(debug_assertions) {
                    panic!("cannot move an EdgeCursor before the first edge");
                }
            }
        }
    }
}

impl<N, E> PartialEq for EdgeCursor<N, E>
where
    N: Ord,
    E: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.graph == other.graph && self.key == other.key
    }
}

impl<N: Ord, E: PartialOrd> Eq for EdgeCursor<N, E> {}

/// Iterator over copies of a graph's edges in storage order.  Returned by
/// [`Graph::iter`].
pub struct Iter<'g, N, E> {
    keys: btree_map::Keys<'g, EdgeKey<N, E>, EdgeLinks>,
}

impl<'g, N, E> Iter<'g, N, E> {
    pub(crate) fn new(keys: btree_map::Keys<'g, EdgeKey<N, E>, EdgeLinks>) -> Self {
        Self { keys }
    }
}

impl<N: Clone, E: Clone> Iterator for Iter<'_, N, E> {
    type Item = EdgeValue<N, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next().map(|key| key.edge().to_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<N: Clone, E: Clone> DoubleEndedIterator for Iter<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys.next_back().map(|key| key.edge().to_value())
    }
}

impl<N: Clone, E: Clone> ExactSizeIterator for Iter<'_, N, E> {}

impl<N: Clone, E: Clone> FusedIterator for Iter<'_, N, E> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph<i32, i32> {
        let mut graph = Graph::from([1, 2, 3]);
        graph.insert_edge(&1, &2, Some(4)).unwrap();
        graph.insert_edge(&1, &2, None).unwrap();
        graph.insert_edge(&3, &1, Some(1)).unwrap();
        graph
    }

    fn value(from: i32, to: i32, weight: Option<i32>) -> EdgeValue<i32, i32> {
        EdgeValue { from, to, weight }
    }

    #[test]
    fn test_walk_forward_and_back() {
        let graph = sample();
        let mut cursor = graph.begin();
        assert_eq!(cursor.get(&graph), Some(value(1, 2, None)));
        cursor.move_next(&graph);
        assert_eq!(cursor.get(&graph), Some(value(1, 2, Some(4))));
        cursor.move_next(&graph);
        assert_eq!(cursor.get(&graph), Some(value(3, 1, Some(1))));
        cursor.move_next(&graph);
        assert_eq!(cursor, graph.end());
        assert_eq!(cursor.get(&graph), None);
        cursor.move_prev(&graph);
        assert_eq!(cursor.get(&graph), Some(value(3, 1, Some(1))));
        cursor.move_prev(&graph);
        cursor.move_prev(&graph);
        assert_eq!(cursor, graph.begin());
    }

    #[test]
    fn test_empty_graph_begin_is_end() {
        let graph = Graph::<i32, i32>::new();
        assert_eq!(graph.begin(), graph.end());
        assert!(graph.begin().is_end());
    }

    #[test]
    fn test_default_cursors() {
        let graph = Graph::<i32, i32>::new();
        assert_eq!(EdgeCursor::<i32, i32>::default(), EdgeCursor::default());
        assert_ne!(EdgeCursor::default(), graph.end());
    }

    #[test]
    fn test_dereferenced_value_is_a_copy() {
        let graph = sample();
        let mut copied = graph.begin().get(&graph).unwrap();
        copied.from = 99;
        copied.weight = Some(100);
        assert_eq!(copied, value(99, 2, Some(100)));
        assert_eq!(graph.begin().get(&graph), Some(value(1, 2, None)));
    }

    #[test]
    fn test_cursor_survives_unrelated_changes() {
        let mut graph = sample();
        let cursor = graph.find(&3, &1, Some(&1));
        graph.insert_node(0);
        graph.insert_edge(&0, &1, None).unwrap();
        graph.replace_node(&2, 20).unwrap();
        assert_eq!(cursor.get(&graph), Some(value(3, 1, Some(1))));
    }

    #[test]
    fn test_cursor_to_erased_edge() {
        let mut graph = sample();
        let mut cursor = graph.find(&1, &2, Some(&4));
        graph.erase_edge(&1, &2, Some(&4)).unwrap();
        assert_eq!(cursor.get(&graph), None);
        cursor.move_next(&graph);
        assert_eq!(cursor.get(&graph), Some(value(3, 1, Some(1))));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "past the end")]
    fn test_advance_end_panics() {
        let graph = sample();
        let mut cursor = graph.end();
        cursor.move_next(&graph);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "before the first edge")]
    fn test_retreat_begin_panics() {
        let graph = sample();
        let mut cursor = graph.begin();
        cursor.move_prev(&graph);
    }

    #[cfg(not(feature = "unchecked"))]
    #[test]
    #[should_panic(expected = "Invalid EdgeCursor")]
    fn test_foreign_cursor_panics() {
        let graph = sample();
        let other = graph.clone();
        other.begin().get(&graph);
    }

    #[test]
    fn test_iter_both_ways() {
        let graph = sample();
        let forward: Vec<_> = graph.iter().collect();
        let mut backward: Vec<_> = graph.iter().rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(graph.iter().len(), 3);
        assert_eq!(forward[0], value(1, 2, None));
    }
}
