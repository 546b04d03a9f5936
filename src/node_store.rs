//! The node identity store: every node value in ascending order, each backed
//! by an arena slot whose handle edges hold instead of a copy of the value.

use std::collections::BTreeMap;

use crate::id_vec::{IdVec, IdVecKey};

/// The identity of a node.  Renaming a node keeps its identity, so every edge
/// holding the handle follows the rename.
pub(crate) type NodeHandle = IdVecKey;

/// Outcome of [`NodeStore::rename`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rename {
    /// The old and new values are equal.
    Unchanged,
    /// The new value is already taken by another node.
    Occupied,
    /// The node now holds the new value.
    Renamed(NodeHandle),
}

/// Outcome of [`NodeStore::merge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Merge {
    /// The old and new values are equal.
    Unchanged,
    /// `removed` no longer exists; its edges belong to `survivor`.
    Merged {
        removed: NodeHandle,
        survivor: NodeHandle,
    },
}

pub(crate) struct NodeStore<N> {
    arena: IdVec<N>,
    index: BTreeMap<N, NodeHandle>,
}

impl<N> NodeStore<N> {
    pub fn new() -> Self {
        Self {
            arena: IdVec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl<N> NodeStore<N>
where
    N: Ord + Clone,
{
    pub fn contains(&self, value: &N) -> bool {
        self.index.contains_key(value)
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn len(&self) -> usize {
        debug_assert!(self.index.len() <= self.arena.len());
        self.index.len()
    }

    /// Iterates over the node values in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &N> + ExactSizeIterator + '_ {
        self.index.keys()
    }

    /// Copies every node value, in ascending order.
    pub fn all_values(&self) -> Vec<N> {
        self.iter().cloned().collect()
    }

    /// Adds a node, returning false if the value is already present.
    pub fn insert(&mut self, value: N) -> bool {
        if self.index.contains_key(&value) {
            return false;
        }
        let handle = self.arena.insert(value.clone());
        self.index.insert(value, handle);
        true
    }

    /// Gets the identity of the node holding `value`.
    pub fn find_identity(&self, value: &N) -> Option<NodeHandle> {
        self.index.get(value).copied()
    }

    /// Gets the current value of a node.
    pub fn value(&self, handle: NodeHandle) -> Option<&N> {
        self.arena.get(handle)
    }

    /// Checks that a handle refers to a node that still exists.
    #[cfg(test)]
    pub fn is_live(&self, handle: NodeHandle) -> bool {
        self.arena.contains_key(handle)
    }

    /// Gives the node holding `old` the value `new` in place, keeping its
    /// identity.  Returns `None` if `old` is not present.
    pub fn rename(&mut self, old: &N, new: N) -> Option<Rename> {
        let handle = self.find_identity(old)?;
        if *old == new {
            return Some(Rename::Unchanged);
        }
        if self.index.contains_key(&new) {
            return Some(Rename::Occupied);
        }
        self.index.remove(old);
        self.index.insert(new.clone(), handle);
        *self
            .arena
            .get_mut(handle)
            .expect("indexed node missing from arena") = new;
        Some(Rename::Renamed(handle))
    }

    /// Removes the node holding `old` so that its edges can be handed to the
    /// existing node holding `new`.  Returns `None` if either is absent.
    pub fn merge(&mut self, old: &N, new: &N) -> Option<Merge> {
        let removed = self.find_identity(old)?;
        let survivor = self.find_identity(new)?;
        if old == new {
            return Some(Merge::Unchanged);
        }
        self.index.remove(old);
        Some(Merge::Merged { removed, survivor })
    }

    /// Frees the arena slot of a node that [`Self::merge`] removed from the
    /// index, once no edge refers to it any more.
    pub fn release(&mut self, handle: NodeHandle) {
        self.arena.remove(handle);
    }

    /// Removes a node, returning the identity it had.
    pub fn erase(&mut self, value: &N) -> Option<NodeHandle> {
        let handle = self.index.remove(value)?;
        self.arena.remove(handle);
        Some(handle)
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.arena.clear();
    }

    /// Counts occupied arena slots, which must match [`Self::len`] outside of
    /// a merge.
    #[cfg(test)]
    pub fn slots_in_use(&self) -> usize {
        self.arena.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(values: &[&'static str]) -> NodeStore<&'static str> {
        let mut store = NodeStore::new();
        for value in values {
            store.insert(*value);
        }
        store
    }

    #[test]
    fn test_insert_is_unique_and_sorted() {
        let mut store = store(&["C", "A", "B"]);
        assert!(!store.insert("A"));
        assert_eq!(store.all_values(), vec!["A", "B", "C"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_all_values_is_a_copy() {
        let store = store(&["A"]);
        let mut values = store.all_values();
        values.push("Z");
        assert_eq!(store.all_values(), vec!["A"]);
    }

    #[test]
    fn test_rename_keeps_identity() {
        let mut store = store(&["A", "B"]);
        let a = store.find_identity(&"A").unwrap();
        assert_eq!(store.rename(&"A", "Z"), Some(Rename::Renamed(a)));
        assert_eq!(store.find_identity(&"Z"), Some(a));
        assert_eq!(store.value(a), Some(&"Z"));
        assert!(!store.contains(&"A"));
        assert_eq!(store.all_values(), vec!["B", "Z"]);
    }

    #[test]
    fn test_rename_edge_cases() {
        let mut store = store(&["A", "B"]);
        assert_eq!(store.rename(&"X", "Y"), None);
        assert_eq!(store.rename(&"A", "B"), Some(Rename::Occupied));
        assert_eq!(store.rename(&"A", "A"), Some(Rename::Unchanged));
        assert_eq!(store.all_values(), vec!["A", "B"]);
    }

    #[test]
    fn test_merge() {
        let mut store = store(&["A", "B"]);
        let a = store.find_identity(&"A").unwrap();
        let b = store.find_identity(&"B").unwrap();
        assert_eq!(store.merge(&"A", &"X"), None);
        assert_eq!(store.merge(&"X", &"A"), None);
        assert_eq!(store.merge(&"A", &"A"), Some(Merge::Unchanged));
        assert_eq!(
            store.merge(&"A", &"B"),
            Some(Merge::Merged {
                removed: a,
                survivor: b
            })
        );
        assert_eq!(store.all_values(), vec!["B"]);
        // The slot stays readable until released.
        assert_eq!(store.value(a), Some(&"A"));
        store.release(a);
        assert!(!store.is_live(a));
    }

    #[test]
    fn test_erase() {
        let mut store = store(&["A", "B"]);
        let a = store.find_identity(&"A").unwrap();
        assert_eq!(store.erase(&"A"), Some(a));
        assert_eq!(store.erase(&"A"), None);
        assert!(!store.is_live(a));
        store.clear();
        assert!(store.is_empty());
    }
}
