//! A vector with stable, generation-checked keys.
//!
//! Removing an entry frees its slot for reuse, but bumps the slot's
//! generation, so a key held from before the removal never aliases the new
//! occupant.

use std::fmt::Debug;

/// A stable key into an [`IdVec`].
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct IdVecKey {
    index: usize,
    generation: u32,
}

struct Slot<T> {
    value: Option<T>,
    generation: u32,
}

pub struct IdVec<T> {
    slots: Vec<Slot<T>>,
    /// Indices of empty slots, reused last-in first-out.
    free: Vec<usize>,
    len: usize,
}

impl<T> Default for IdVec<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }
}

impl<T> IdVec<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value and returns a stable key for accessing it.
    pub fn insert(&mut self, value: T) -> IdVecKey {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                debug_assert!(slot.value.is_none());
                slot.value = Some(value);
                IdVecKey {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    value: Some(value),
                    generation: 0,
                });
                IdVecKey {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    fn slot(&self, key: IdVecKey) -> Option<&Slot<T>> {
        self.slots
            .get(key.index)
            .filter(|slot| slot.generation == key.generation)
    }

    /// Returns a reference to the value for `key`, or `None` if it was removed.
    pub fn get(&self, key: IdVecKey) -> Option<&T> {
        self.slot(key).and_then(|slot| slot.value.as_ref())
    }

    /// Returns a mutable reference to the value for `key`, or `None` if it was
    /// removed.
    pub fn get_mut(&mut self, key: IdVecKey) -> Option<&mut T> {
        self.slots
            .get_mut(key.index)
            .filter(|slot| slot.generation == key.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    /// Checks whether `key` refers to a live entry.
    #[cfg(test)]
    pub fn contains_key(&self, key: IdVecKey) -> bool {
        self.get(key).is_some()
    }

    /// Removes the value for `key` and returns it, or `None` if already removed.
    pub fn remove(&mut self, key: IdVecKey) -> Option<T> {
        let slot = self
            .slots
            .get_mut(key.index)
            .filter(|slot| slot.generation == key.generation)?;
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(key.index);
        self.len -= 1;
        Some(value)
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes every entry.  Keys issued before the call stay dead.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
            }
        }
        self.len = 0;
    }

    /// Returns an iterator over the keys of live entries, in slot order.
    pub fn iter_keys(&self) -> impl Iterator<Item = IdVecKey> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.value.as_ref().map(|_| IdVecKey {
                index,
                generation: slot.generation,
            })
        })
    }
}

impl<T: Debug> Debug for IdVec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.iter_keys()
                    .filter_map(|key| self.get(key).map(|value| (key.index, value))),
            )
            .finish()
    }
}
