// SPDX-License-Identifier: MPL-2.0
//! Slot-limited set of currently presented items.

/// Insertion-ordered key/value set capped at a fixed number of slots.
///
/// Holds whatever is on screen right now, keyed by its id. The cap is the
/// admission gate: `insert` refuses once every slot is taken, and the owner
/// promotes from its backlog whenever `remove` frees one. Linear scans are
/// fine here, the limit is single digits in practice.
#[derive(Debug)]
pub struct ActiveSet<K, V> {
    entries: Vec<(K, V)>,
    limit: usize,
}

impl<K: Copy + PartialEq, V> ActiveSet<K, V> {
    /// Creates a set with `limit` slots. A zero limit is lifted to one.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: Vec::with_capacity(limit),
            limit,
        }
    }

    /// Returns true while at least one slot is free.
    #[must_use]
    pub fn has_slot(&self) -> bool {
        self.entries.len() < self.limit
    }

    /// Occupies a slot, or returns false when all slots are taken.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if !self.has_slot() {
            return false;
        }
        self.entries.push((key, value));
        true
    }

    /// Frees the slot held by `key`, returning its value.
    pub fn remove(&mut self, key: K) -> Option<V> {
        let index = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns true when `key` holds a slot.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    /// Iterates occupied slots in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Empties every slot, yielding the evicted pairs in insertion order.
    pub fn drain(&mut self) -> Vec<(K, V)> {
        std::mem::take(&mut self.entries)
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of slots.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_fills_slots_up_to_limit() {
        let mut set = ActiveSet::new(2);
        assert!(set.insert(1u32, "a"));
        assert!(set.insert(2, "b"));
        assert!(!set.insert(3, "c"));
        assert_eq!(set.len(), 2);
        assert!(!set.has_slot());
    }

    #[test]
    fn remove_frees_slot_and_returns_value() {
        let mut set = ActiveSet::new(2);
        set.insert(1u32, "a");
        set.insert(2, "b");
        assert_eq!(set.remove(1), Some("a"));
        assert!(set.has_slot());
        assert!(set.insert(3, "c"));
    }

    #[test]
    fn remove_unknown_key_is_none() {
        let mut set: ActiveSet<u32, &str> = ActiveSet::new(2);
        set.insert(1, "a");
        assert_eq!(set.remove(9), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let mut set = ActiveSet::new(3);
        set.insert(3u32, "c");
        set.insert(1, "a");
        set.insert(2, "b");
        let keys: Vec<u32> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![3, 1, 2]);
    }

    #[test]
    fn drain_empties_all_slots() {
        let mut set = ActiveSet::new(3);
        set.insert(1u32, "a");
        set.insert(2, "b");
        let drained = set.drain();
        assert_eq!(drained.len(), 2);
        assert!(set.is_empty());
        assert!(set.has_slot());
    }

    #[test]
    fn zero_limit_is_lifted_to_one() {
        let mut set = ActiveSet::new(0);
        assert_eq!(set.limit(), 1);
        assert!(set.insert(1u32, "a"));
        assert!(!set.insert(2, "b"));
    }
}
