// SPDX-License-Identifier: MPL-2.0
//! Bounded drop-oldest FIFO backlog.

use std::collections::VecDeque;

/// FIFO buffer that evicts its oldest item instead of growing past capacity.
///
/// Both queues stage pending work here: toasts waiting for a visible slot
/// and log lines waiting for a drain pass. Under sustained overload the
/// newest items are the ones worth keeping, so `push` returns the evicted
/// item rather than rejecting the new one.
#[derive(Debug)]
pub struct Backlog<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> Backlog<T> {
    /// Creates a backlog holding at most `capacity` items.
    ///
    /// Callers pass capacities already validated by the domain newtypes;
    /// a zero capacity is lifted to one so `push` stays total.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Appends an item, returning the evicted oldest item when full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    /// Removes and returns the oldest item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Removes and returns up to `count` items, oldest first.
    pub fn take(&mut self, count: usize) -> Vec<T> {
        let count = count.min(self.items.len());
        self.items.drain(..count).collect()
    }

    /// Removes the first item matching `predicate`, preserving order of the
    /// rest.
    pub fn remove_where<F>(&mut self, predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.items.iter().position(predicate)?;
        self.items.remove(index)
    }

    /// Number of buffered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of items held before eviction starts.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discards all buffered items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates buffered items oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
