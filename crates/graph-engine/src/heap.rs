/// A heap slot: a dense item index and its priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub priority: u64,
    pub item: usize,
}

impl HeapEntry {
    pub fn new(item: usize, priority: u64) -> Self {
        HeapEntry { priority, item }
    }

    /// Heap order: priority first, then item index so ties resolve
    /// towards the lower index.
    pub(crate) fn precedes(&self, other: &HeapEntry) -> bool {
        (self.priority, self.item) < (other.priority, other.item)
    }
}

/// Item index -> heap slot, for the items currently queued.
#[derive(Debug)]
pub struct PositionMap {
    slots: Vec<Option<usize>>,
}

impl PositionMap {
    pub fn new(capacity: usize) -> Self {
        PositionMap {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, item: usize) -> Option<usize> {
        *self.slots.get(item)?
    }

    /// Record that `item` now lives at heap slot `pos`. Items beyond the
    /// capacity are ignored.
    pub fn set(&mut self, item: usize, pos: usize) {
        self.update(item, Some(pos));
    }

    pub fn remove(&mut self, item: usize) {
        self.update(item, None);
    }

    pub fn contains(&self, item: usize) -> bool {
        self.get(item).is_some()
    }

    fn update(&mut self, item: usize, pos: Option<usize>) {
        if let Some(slot) = self.slots.get_mut(item) {
            *slot = pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_order_breaks_ties_by_item() {
        assert!(HeapEntry::new(3, 1).precedes(&HeapEntry::new(0, 2)));
        assert!(HeapEntry::new(0, 2).precedes(&HeapEntry::new(1, 2)));
        assert!(!HeapEntry::new(1, 2).precedes(&HeapEntry::new(1, 2)));
    }

    #[test]
    fn test_position_map_ignores_out_of_range_items() {
        let mut pos = PositionMap::new(2);
        pos.set(1, 0);
        pos.set(5, 3);
        assert_eq!(pos.get(1), Some(0));
        assert!(!pos.contains(5));

        pos.remove(1);
        assert!(!pos.contains(1));
        assert_eq!(pos.capacity(), 2);
    }
}
