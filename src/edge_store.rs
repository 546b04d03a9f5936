//! The edge store: every edge of a graph in one ordered map, sorted by
//! source value, then destination value, then the edge ordering of
//! [`Edge::cmp_weight`].  Each entry also records the identities of its two
//! endpoint nodes, which is how renames and node removals find the edges they
//! affect.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, btree_map},
    fmt::Debug,
    ops::Bound,
};

use crate::{
    edge::Edge,
    node_store::{NodeHandle, NodeStore},
};

/// An edge in its role as a storage key.  Unlike [`Edge`] itself, keys are
/// totally ordered, including across different endpoint pairs.
#[derive(Clone, Debug)]
pub(crate) struct EdgeKey<N, E>(Edge<N, E>);

impl<N, E> EdgeKey<N, E> {
    /// Builds the key an edge would be stored under.
    pub fn probe(src: &N, dst: &N, weight: Option<&E>) -> Self
    where
        N: Clone,
        E: Clone,
    {
        EdgeKey(Edge::new(src.clone(), dst.clone(), weight.cloned()))
    }

    /// The smallest key with the given endpoints.
    fn lower_bound(src: &N, dst: &N) -> Self
    where
        N: Clone,
    {
        EdgeKey(Edge::Unweighted {
            src: src.clone(),
            dst: dst.clone(),
        })
    }

    pub fn edge(&self) -> &Edge<N, E> {
        &self.0
    }
}

impl<N: Ord, E: PartialOrd> Ord for EdgeKey<N, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .source()
            .cmp(other.0.source())
            .then_with(|| self.0.target().cmp(other.0.target()))
            .then_with(|| self.0.cmp_weight(&other.0))
    }
}

impl<N: Ord, E: PartialOrd> PartialOrd for EdgeKey<N, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, E: PartialOrd> PartialEq for EdgeKey<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord, E: PartialOrd> Eq for EdgeKey<N, E> {}

/// The identities of an edge's endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EdgeLinks {
    pub src: NodeHandle,
    pub dst: NodeHandle,
}

impl EdgeLinks {
    fn touches(&self, node: NodeHandle) -> bool {
        self.src == node || self.dst == node
    }

    fn retarget(self, old: NodeHandle, new: NodeHandle) -> Self {
        let swap = |handle| if handle == old { new } else { handle };
        EdgeLinks {
            src: swap(self.src),
            dst: swap(self.dst),
        }
    }
}

pub(crate) struct EdgeStore<N, E> {
    map: BTreeMap<EdgeKey<N, E>, EdgeLinks>,
}

impl<N, E> EdgeStore<N, E> {
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl<N, E> EdgeStore<N, E>
where
    N: Ord + Clone,
    E: PartialOrd + Clone,
{
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterates over every stored edge in storage order.
    pub fn iter(&self) -> btree_map::Keys<'_, EdgeKey<N, E>, EdgeLinks> {
        self.map.keys()
    }

    /// Iterates over every stored edge together with its endpoint identities.
    #[cfg(test)]
    pub fn iter_links(&self) -> impl Iterator<Item = (&Edge<N, E>, EdgeLinks)> + '_ {
        self.map.iter().map(|(key, links)| (key.edge(), *links))
    }

    /// Stores `edge` between the given nodes.  Returns false, leaving the
    /// store unchanged, if an equal edge is already stored.
    pub fn insert(&mut self, src: NodeHandle, dst: NodeHandle, edge: Edge<N, E>) -> bool {
        match self.map.entry(EdgeKey(edge)) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(EdgeLinks { src, dst });
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Removes the edge matching the given endpoint values and weight.
    pub fn erase_by_value(&mut self, src: &N, dst: &N, weight: Option<&E>) -> bool {
        self.remove(&EdgeKey::probe(src, dst, weight))
    }

    /// Removes the entry stored under `key`.
    pub fn remove(&mut self, key: &EdgeKey<N, E>) -> bool {
        self.map.remove(key).is_some()
    }

    pub fn contains(&self, key: &EdgeKey<N, E>) -> bool {
        self.map.contains_key(key)
    }

    pub fn first(&self) -> Option<&EdgeKey<N, E>> {
        self.map.keys().next()
    }

    pub fn last(&self) -> Option<&EdgeKey<N, E>> {
        self.map.keys().next_back()
    }

    /// Gets the first key after `key`, whether or not `key` itself is stored.
    pub fn next_after(&self, key: &EdgeKey<N, E>) -> Option<&EdgeKey<N, E>> {
        self.map
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next()
            .map(|(key, _)| key)
    }

    /// Gets the last key before `key`, whether or not `key` itself is stored.
    pub fn prev_before(&self, key: &EdgeKey<N, E>) -> Option<&EdgeKey<N, E>> {
        self.map
            .range((Bound::Unbounded, Bound::Excluded(key)))
            .next_back()
            .map(|(key, _)| key)
    }

    /// Collects the keys in `[first, last)`, where `None` means past the end.
    pub fn keys_between(
        &self,
        first: &EdgeKey<N, E>,
        last: Option<&EdgeKey<N, E>>,
    ) -> Vec<EdgeKey<N, E>> {
        let upper = last.map_or(Bound::Unbounded, Bound::Excluded);
        if let Bound::Excluded(last) = upper
            && last < first
        {
            return Vec::new();
        }
        self.map
            .range((Bound::Included(first), upper))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Finds the stored key equal to the given edge description.
    pub fn find(&self, src: &N, dst: &N, weight: Option<&E>) -> Option<&EdgeKey<N, E>> {
        self.map
            .get_key_value(&EdgeKey::probe(src, dst, weight))
            .map(|(key, _)| key)
    }

    /// Iterates over the edges from `src` to `dst` in edge order.
    pub fn all_between<'a>(
        &'a self,
        src: &'a N,
        dst: &'a N,
    ) -> impl Iterator<Item = &'a Edge<N, E>> + 'a {
        self.map
            .range(EdgeKey::lower_bound(src, dst)..)
            .map(|(key, _)| key.edge())
            .take_while(move |edge| edge.source() == src && edge.target() == dst)
    }

    /// Iterates over the edges leaving `src`, ordered by destination and then
    /// by edge order.
    pub fn outgoing<'a>(&'a self, src: &'a N) -> impl Iterator<Item = &'a Edge<N, E>> + 'a {
        self.map
            .keys()
            .map(EdgeKey::edge)
            .skip_while(move |edge| edge.source() < src)
            .take_while(move |edge| edge.source() == src)
    }

    /// Gets the distinct destinations reachable from `src` by one edge, in
    /// ascending order.
    pub fn outgoing_targets(&self, src: &N) -> Vec<N> {
        let mut targets: Vec<N> = Vec::new();
        for edge in self.outgoing(src) {
            if targets.last() != Some(edge.target()) {
                targets.push(edge.target().clone());
            }
        }
        targets
    }

    /// Moves every edge touching `old` over to `new`, rewriting the recorded
    /// endpoint values from `nodes`.  Edges that become equal to an edge
    /// already stored are dropped.  Returns the number of edges dropped.
    ///
    /// Passing the same handle for `old` and `new` re-sorts the edges of a
    /// node whose value changed in place.
    pub fn retarget(&mut self, old: NodeHandle, new: NodeHandle, nodes: &NodeStore<N>) -> usize {
        let affected: Vec<EdgeKey<N, E>> = self
            .map
            .iter()
            .filter(|(_, links)| links.touches(old))
            .map(|(key, _)| key.clone())
            .collect();

        let mut moved = Vec::with_capacity(affected.len());
        for key in affected {
            if let Some((EdgeKey(mut edge), links)) = self.map.remove_entry(&key) {
                let links = links.retarget(old, new);
                let src = nodes.value(links.src).expect("edge source is not a live node");
                let dst = nodes.value(links.dst).expect("edge target is not a live node");
                edge.set_nodes(src.clone(), dst.clone());
                moved.push((links, edge));
            }
        }

        let mut dropped = 0;
        for (links, edge) in moved {
            if !self.insert(links.src, links.dst, edge) {
                dropped += 1;
            }
        }
        dropped
    }

    /// Removes every edge touching `node`.  Returns the number removed.
    pub fn drop_touching(&mut self, node: NodeHandle) -> usize {
        let before = self.map.len();
        self.map.retain(|_, links| !links.touches(node));
        before - self.map.len()
    }
}

impl<N: Debug, E: Debug> Debug for EdgeStore<N, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.map.keys().map(EdgeKey::edge))
            .finish()
    }
}
