use crate::{
    cursor::{EdgeCursor, Iter},
    edge::{Edge, EdgeValue},
    edge_store::{EdgeKey, EdgeStore},
    error::{GraphError, Operation, Result},
    graph_id::GraphId,
    node_store::{Merge, NodeStore, Rename},
    tracing_support::graph_event,
};

/// A directed, weighted multigraph whose nodes are unique values of type `N`
/// and whose edges optionally carry a weight of type `E`.
///
/// Nodes are kept in ascending order.  Between any two nodes there may be one
/// unweighted edge and any number of weighted edges with distinct weights.
/// Edges are kept in storage order: by source, then destination, then
/// unweighted before weighted, then by ascending weight.
///
/// Operations naming a node that does not exist fail with
/// [`GraphError::NodeNotFound`], except where documented otherwise.
pub struct Graph<N, E> {
    pub(crate) nodes: NodeStore<N>,
    pub(crate) edges: EdgeStore<N, E>,
    id: GraphId,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self {
            nodes: NodeStore::new(),
            edges: EdgeStore::new(),
            id: GraphId::fresh(),
        }
    }
}

impl<N, E> Graph<N, E>
where
    N: Ord + Clone,
    E: PartialOrd + Clone,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with the given nodes and no edges.  Repeated values
    /// are collapsed.
    pub fn from_nodes<I: IntoIterator<Item = N>>(values: I) -> Self {
        let mut graph = Self::new();
        for value in values {
            graph.insert_node(value);
        }
        graph
    }

    /// Adds a node.  Returns false, leaving the graph unchanged, if a node
    /// with an equal value already exists.
    pub fn insert_node(&mut self, value: N) -> bool {
        let inserted = self.nodes.insert(value);
        if !inserted {
            graph_event!(trace, "insert_node: node already present");
        }
        inserted
    }

    /// Adds an edge from `src` to `dst`, weighted if `weight` is given.
    /// Returns `Ok(false)`, leaving the graph unchanged, if an equal edge
    /// already exists.
    pub fn insert_edge(&mut self, src: &N, dst: &N, weight: Option<E>) -> Result<bool> {
        let (Some(src_handle), Some(dst_handle)) =
            (self.nodes.find_identity(src), self.nodes.find_identity(dst))
        else {
            return Err(GraphError::NodeNotFound(Operation::InsertEdge));
        };
        let weighted = weight.is_some();
        let inserted = self.edges.insert(
            src_handle,
            dst_handle,
            Edge::new(src.clone(), dst.clone(), weight),
        );
        if inserted {
            graph_event!(debug, weighted, edges = self.edges.len(), "insert_edge");
        } else {
            graph_event!(trace, "insert_edge: edge already present");
        }
        Ok(inserted)
    }

    /// Gives the node `old` the value `new`.  Every edge touching the node
    /// follows it.
    ///
    /// Returns `Ok(false)`, leaving the graph unchanged, if `new` already
    /// names a node other than `old`.  Renaming a node to its own value
    /// succeeds without doing anything.
    pub fn replace_node(&mut self, old: &N, new: N) -> Result<bool> {
        match self.nodes.rename(old, new) {
            None => Err(GraphError::NodeNotFound(Operation::ReplaceNode)),
            Some(Rename::Unchanged) => Ok(true),
            Some(Rename::Occupied) => {
                graph_event!(trace, "replace_node: new value already present");
                Ok(false)
            }
            Some(Rename::Renamed(handle)) => {
                self.edges.retarget(handle, handle, &self.nodes);
                graph_event!(debug, nodes = self.nodes.len(), "replace_node");
                Ok(true)
            }
        }
    }

    /// Folds the node `old` into the existing node `new`: every edge touching
    /// `old` is redirected to `new`, edges that become duplicates are
    /// dropped, and `old` is removed.  Merging a node into itself does
    /// nothing.
    pub fn merge_replace_node(&mut self, old: &N, new: &N) -> Result<()> {
        match self.nodes.merge(old, new) {
            None => Err(GraphError::NodeNotFound(Operation::MergeReplaceNode)),
            Some(Merge::Unchanged) => Ok(()),
            Some(Merge::Merged { removed, survivor }) => {
                let dropped = self.edges.retarget(removed, survivor, &self.nodes);
                self.nodes.release(removed);
                graph_event!(debug, dropped, edges = self.edges.len(), "merge_replace_node");
                Ok(())
            }
        }
    }

    /// Removes a node along with every edge into or out of it.  Returns false
    /// if there is no such node.
    pub fn erase_node(&mut self, value: &N) -> bool {
        match self.nodes.erase(value) {
            Some(handle) => {
                let dropped = self.edges.drop_touching(handle);
                graph_event!(debug, dropped, nodes = self.nodes.len(), "erase_node");
                true
            }
            None => {
                graph_event!(trace, "erase_node: no such node");
                false
            }
        }
    }

    /// Removes the edge from `src` to `dst` with the given weight (or the
    /// unweighted one, for `None`).  Returns `Ok(false)` if no such edge
    /// exists.
    pub fn erase_edge(&mut self, src: &N, dst: &N, weight: Option<&E>) -> Result<bool> {
        if !self.nodes.contains(src) || !self.nodes.contains(dst) {
            return Err(GraphError::NodeNotFound(Operation::EraseEdge));
        }
        let erased = self.edges.erase_by_value(src, dst, weight);
        if erased {
            graph_event!(debug, edges = self.edges.len(), "erase_edge");
        }
        Ok(erased)
    }

    /// Removes the edge at `position` and returns a cursor to the edge that
    /// followed it.  Erasing at the end position removes nothing and returns
    /// the end position.
    pub fn erase_edge_at(&mut self, position: &EdgeCursor<N, E>) -> EdgeCursor<N, E> {
        self.assert_valid_cursor(position);
        let Some(key) = position.key() else {
            return self.end();
        };
        if self.edges.remove(key) {
            graph_event!(debug, edges = self.edges.len(), "erase_edge_at");
        }
        self.cursor(self.edges.next_after(key).cloned())
    }

    /// Removes every edge from `first` up to, but not including, `last`, and
    /// returns a cursor equal to `last`.  An empty or reversed range removes
    /// nothing.
    pub fn erase_edge_range(
        &mut self,
        first: &EdgeCursor<N, E>,
        last: &EdgeCursor<N, E>,
    ) -> EdgeCursor<N, E> {
        self.assert_valid_cursor(first);
        self.assert_valid_cursor(last);
        if let Some(first) = first.key() {
            let doomed = self.edges.keys_between(first, last.key());
            for key in &doomed {
                self.edges.remove(key);
            }
            graph_event!(debug, erased = doomed.len(), "erase_edge_range");
        }
        self.cursor(last.key().cloned())
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.nodes.clear();
        graph_event!(debug, "clear");
    }

    pub fn is_node(&self, value: &N) -> bool {
        self.nodes.contains(value)
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Copies out every node value, in ascending order.
    pub fn nodes(&self) -> Vec<N> {
        self.nodes.all_values()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Checks whether at least one edge, weighted or not, leads from `src` to
    /// `dst`.
    pub fn is_connected(&self, src: &N, dst: &N) -> Result<bool> {
        if !self.nodes.contains(src) || !self.nodes.contains(dst) {
            return Err(GraphError::NodeNotFound(Operation::IsConnected));
        }
        Ok(self.edges.all_between(src, dst).next().is_some())
    }

    /// Copies out every edge from `src` to `dst`: the unweighted one first,
    /// then weighted ones by ascending weight.
    pub fn edges(&self, src: &N, dst: &N) -> Result<Vec<Edge<N, E>>> {
        if !self.nodes.contains(src) || !self.nodes.contains(dst) {
            return Err(GraphError::NodeNotFound(Operation::Edges));
        }
        Ok(self.edges.all_between(src, dst).cloned().collect())
    }

    /// Gets a cursor to the edge from `src` to `dst` with the given weight,
    /// or the end position if there is none.  Missing nodes are not an error
    /// here.
    pub fn find(&self, src: &N, dst: &N, weight: Option<&E>) -> EdgeCursor<N, E> {
        self.cursor(self.edges.find(src, dst, weight).cloned())
    }

    /// Gets the distinct destinations of the edges leaving `src`, in
    /// ascending order.
    pub fn connections(&self, src: &N) -> Result<Vec<N>> {
        if !self.nodes.contains(src) {
            return Err(GraphError::NodeNotFound(Operation::Connections));
        }
        Ok(self.edges.outgoing_targets(src))
    }

    /// Gets a cursor to the first edge in storage order, or the end position
    /// if there are no edges.
    pub fn begin(&self) -> EdgeCursor<N, E> {
        self.cursor(self.edges.first().cloned())
    }

    /// Gets the end position.
    pub fn end(&self) -> EdgeCursor<N, E> {
        self.cursor(None)
    }

    /// Iterates over copies of every edge in storage order.
    pub fn iter(&self) -> Iter<'_, N, E> {
        Iter::new(self.edges.iter())
    }

    fn cursor(&self, key: Option<EdgeKey<N, E>>) -> EdgeCursor<N, E> {
        EdgeCursor::new(self.id, key)
    }

    /// Checks that a cursor was created by this graph, returning a reason if
    /// it was not.
    pub(crate) fn check_valid_cursor(
        &self,
        cursor: &EdgeCursor<N, E>,
    ) -> std::result::Result<(), &'static str> {
        #[cfg(not(feature = "unchecked"))]
        {
            match cursor.graph_id() {
                None => Err("cursor does not belong to any graph"),
                Some(id) if id != self.id => Err("cursor belongs to another graph"),
                Some(_) => Ok(()),
            }
        }
        #[cfg(feature = "unchecked")]
        {
            let _ = cursor;
            Ok(())
        }
    }

    /// Panics if the cursor was not created by this graph.
    pub(crate) fn assert_valid_cursor(&self, cursor: &EdgeCursor<N, E>) {
        if let Err(reason) = self.check_valid_cursor(cursor) {
            panic!("Invalid EdgeCursor: {}", reason);
        }
    }

    fn copy_from(&mut self, source: &Self) {
        for value in source.nodes.iter() {
            self.nodes.insert(value.clone());
        }
        for key in source.edges.iter() {
            let edge = key.edge();
            let src = self
                .nodes
                .find_identity(edge.source())
                .expect("edge source is not a node");
            let dst = self
                .nodes
                .find_identity(edge.target())
                .expect("edge target is not a node");
            self.edges.insert(src, dst, edge.clone());
        }
    }
}

/// Copies are deep: the copy shares nothing with the original, and cursors
/// from one cannot be used with the other.
impl<N, E> Clone for Graph<N, E>
where
    N: Ord + Clone,
    E: PartialOrd + Clone,
{
    fn clone(&self) -> Self {
        let mut graph = Self::new();
        graph.copy_from(self);
        graph
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.copy_from(source);
    }
}

impl<N, E> PartialEq for Graph<N, E>
where
    N: Ord + Clone,
    E: PartialOrd + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.nodes.len() == other.nodes.len()
            && self.edges.len() == other.edges.len()
            && self.nodes.iter().eq(other.nodes.iter())
            && self
                .edges
                .iter()
                .map(|key| key.edge())
                .eq(other.edges.iter().map(|key| key.edge()))
    }
}

impl<N, E> FromIterator<N> for Graph<N, E>
where
    N: Ord + Clone,
    E: PartialOrd + Clone,
{
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self::from_nodes(iter)
    }
}

impl<N, E, const K: usize> From<[N; K]> for Graph<N, E>
where
    N: Ord + Clone,
    E: PartialOrd + Clone,
{
    fn from(values: [N; K]) -> Self {
        Self::from_nodes(values)
    }
}

impl<'g, N, E> IntoIterator for &'g Graph<N, E>
where
    N: Ord + Clone,
    E: PartialOrd + Clone,
{
    type Item = EdgeValue<N, E>;
    type IntoIter = Iter<'g, N, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
