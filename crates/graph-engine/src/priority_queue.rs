use crate::heap::{HeapEntry, PositionMap};

/// A minimum priority queue backed by an indexed binary heap.
///
/// Items are dense indices below the queue's capacity. Supports insert,
/// extract-min and O(log n) decrease-key.
#[derive(Debug)]
pub struct MinPriorityQueue {
    data: Vec<HeapEntry>,
    pos: PositionMap,
}

impl MinPriorityQueue {
    pub fn new(capacity: usize) -> Self {
        MinPriorityQueue {
            data: Vec::with_capacity(capacity),
            pos: PositionMap::new(capacity),
        }
    }

    pub fn contains(&self, item: usize) -> bool {
        self.pos.contains(item)
    }

    /// Insert a new item. An item already queued is re-prioritised instead,
    /// and only if the new priority is lower.
    pub fn insert(&mut self, item: usize, priority: u64) {
        debug_assert!(item < self.pos.capacity(), "item {item} beyond queue capacity");
        if self.contains(item) {
            self.decrease_key(item, priority);
            return;
        }
        self.data.push(HeapEntry::new(item, priority));
        let slot = self.data.len() - 1;
        self.pos.set(item, slot);
        self.bubble_up(slot);
    }

    /// Remove and return the entry with the lowest priority.
    pub fn extract_min(&mut self) -> Option<HeapEntry> {
        let top = match self.data.len() {
            0 => return None,
            1 => self.data.pop()?,
            _ => {
                let top = self.data.swap_remove(0);
                self.pos.set(self.data[0].item, 0);
                self.push_down(0);
                top
            }
        };
        self.pos.remove(top.item);
        Some(top)
    }

    /// Lower the priority of a queued item. Returns `false` when the item is
    /// not queued or `new_priority` is not lower than its current one.
    pub fn decrease_key(&mut self, item: usize, new_priority: u64) -> bool {
        let Some(slot) = self.pos.get(item) else {
            return false;
        };
        if new_priority >= self.data[slot].priority {
            return false;
        }
        self.data[slot].priority = new_priority;
        self.bubble_up(slot);
        true
    }

    /// Move the entry at `slot` towards the root while it precedes its parent.
    fn bubble_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.data[slot].precedes(&self.data[parent]) {
                return;
            }
            self.exchange(slot, parent);
            slot = parent;
        }
    }

    /// Move the entry at `slot` towards the leaves while a child precedes it.
    fn push_down(&mut self, mut slot: usize) {
        loop {
            let first_child = 2 * slot + 1;
            let Some(best) = (first_child..first_child + 2)
                .filter(|&c| c < self.data.len())
                .min_by_key(|&c| (self.data[c].priority, self.data[c].item))
            else {
                return;
            };
            if !self.data[best].precedes(&self.data[slot]) {
                return;
            }
            self.exchange(slot, best);
            slot = best;
        }
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        for slot in [a, b] {
            self.pos.set(self.data[slot].item, slot);
        }
    }
}
