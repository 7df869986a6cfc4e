/*
Indexed binary min-heap over (key, priority) pairs.

Keys are dense integers in 0..capacity. Next to the heap array we keep a position
index mapping every key to the slot it currently occupies, so an entry can be found
and moved up in O(log N) when its priority drops.

Slots are numbered from 1: parent(k) = k / 2, children are 2k and 2k + 1.
Slot k lives at entries[k - 1].

Supported operations are Insert, ExtractMin and DecreasePriority.
*/

use thiserror::Error;

pub type Key = usize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeapError {
    #[error("heap is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("key {key} is outside the key range 0..{capacity}")]
    KeyOutOfRange { key: Key, capacity: usize },

    #[error("key {0} is already in the heap")]
    KeyAlreadyPresent(Key),

    #[error("key {0} is not in the heap")]
    MissingKey(Key),
}

#[derive(Debug, Clone)]
pub struct IndexedMinHeap<P> {
    entries: Vec<(Key, P)>,
    // positions[key] is the 1-based slot of `key`, None once extracted (or never inserted).
    positions: Vec<Option<usize>>,
}

impl<P: PartialOrd + Copy> IndexedMinHeap<P> {
    /// Creates a heap holding at most `capacity` entries with keys in `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    pub fn contains(&self, key: Key) -> bool {
        self.positions.get(key).is_some_and(|slot| slot.is_some())
    }

    pub fn priority_of(&self, key: Key) -> Option<P> {
        let slot = (*self.positions.get(key)?)?;
        Some(self.priority(slot))
    }

    pub fn peek(&self) -> Option<(Key, P)> {
        self.entries.first().copied()
    }

    pub fn insert(&mut self, key: Key, priority: P) -> Result<(), HeapError> {
        self.check_key(key)?;
        if self.len() == self.capacity() {
            return Err(HeapError::Full {
                capacity: self.capacity(),
            });
        }
        if self.positions[key].is_some() {
            return Err(HeapError::KeyAlreadyPresent(key));
        }

        self.entries.push((key, priority));
        let slot = self.len();
        self.positions[key] = Some(slot);
        self.rise(slot);
        Ok(())
    }

    /// Removes and returns the entry with the smallest priority.
    pub fn extract_min(&mut self) -> Option<(Key, P)> {
        if self.entries.is_empty() {
            return None;
        }

        // The last entry takes over the root slot and sinks from there.
        let min = self.entries.swap_remove(0);
        self.positions[min.0] = None;
        if let Some(&(root_key, _)) = self.entries.first() {
            self.positions[root_key] = Some(1);
            self.sink(1);
        }
        Some(min)
    }

    /// Lowers the priority of `key`, which must already be in the heap.
    ///
    /// Priorities only ever go down here, so the entry can only need to move
    /// towards the root.
    pub fn decrease_priority(&mut self, key: Key, priority: P) -> Result<(), HeapError> {
        self.check_key(key)?;
        let slot = self.positions[key].ok_or(HeapError::MissingKey(key))?;
        debug_assert!(
            !(self.priority(slot) < priority),
            "decrease_priority called with a larger priority for key {}",
            key
        );
        self.entries[slot - 1].1 = priority;
        self.rise(slot);
        Ok(())
    }

    fn check_key(&self, key: Key) -> Result<(), HeapError> {
        if key < self.capacity() {
            Ok(())
        } else {
            Err(HeapError::KeyOutOfRange {
                key,
                capacity: self.capacity(),
            })
        }
    }

    #[inline(always)]
    fn priority(&self, slot: usize) -> P {
        self.entries[slot - 1].1
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i - 1, j - 1);
        self.positions[self.entries[i - 1].0] = Some(i);
        self.positions[self.entries[j - 1].0] = Some(j);
    }

    fn rise(&mut self, mut k: usize) {
        while k > 1 && self.priority(k) < self.priority(k / 2) {
            self.swap(k, k / 2);
            k /= 2;
        }
    }

    // Ties between the two children go to the right one.
    fn smallest_child(&self, k: usize) -> usize {
        if 2 * k == self.len() || self.priority(2 * k) < self.priority(2 * k + 1) {
            2 * k
        } else {
            2 * k + 1
        }
    }

    fn sink(&mut self, mut k: usize) {
        while 2 * k <= self.len() {
            let child = self.smallest_child(k);
            if self.priority(k) <= self.priority(child) {
                break;
            }
            self.swap(child, k);
            k = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(heap: &IndexedMinHeap<u32>) {
        for slot in 1..=heap.len() {
            let (key, priority) = heap.entries[slot - 1];
            assert_eq!(heap.positions[key], Some(slot), "position index out of sync for key {}", key);
            if slot > 1 {
                assert!(heap.priority(slot / 2) <= priority, "heap order broken at slot {}", slot);
            }
        }
        let indexed = heap.positions.iter().filter(|p| p.is_some()).count();
        assert_eq!(indexed, heap.len());
    }

    #[test]
    fn it_works() {
        let mut heap = IndexedMinHeap::with_capacity(5);
        heap.insert(0, 10.0).unwrap();
        heap.insert(3, 5.0).unwrap();
        heap.insert(2, 7.5).unwrap();
        heap.insert(4, 8.0).unwrap();
        assert_eq!(heap.peek(), Some((3, 5.0)));
        assert_eq!(heap.extract_min(), Some((3, 5.0)));
        assert_eq!(heap.extract_min(), Some((2, 7.5)));
        assert_eq!(heap.extract_min(), Some((4, 8.0)));
        assert_eq!(heap.extract_min(), Some((0, 10.0)));
        assert_eq!(heap.extract_min(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn decrease_priority_moves_entry_to_root() {
        let mut heap = IndexedMinHeap::with_capacity(8);
        for (key, priority) in [(0, 4), (1, 9), (2, 6), (3, 12), (4, 15), (5, 7)] {
            heap.insert(key, priority).unwrap();
        }
        heap.decrease_priority(4, 1).unwrap();
        assert_consistent(&heap);
        assert_eq!(heap.priority_of(4), Some(1));
        assert_eq!(heap.extract_min(), Some((4, 1)));
        assert_eq!(heap.extract_min(), Some((0, 4)));
    }

    #[test]
    fn extracted_keys_leave_the_index() {
        let mut heap = IndexedMinHeap::with_capacity(3);
        heap.insert(1, 2).unwrap();
        heap.insert(2, 1).unwrap();
        assert!(heap.contains(2));
        heap.extract_min();
        assert!(!heap.contains(2));
        assert_eq!(heap.priority_of(2), None);
        assert_eq!(heap.decrease_priority(2, 0), Err(HeapError::MissingKey(2)));
        // A key can come back after it was extracted.
        heap.insert(2, 0).unwrap();
        assert_eq!(heap.extract_min(), Some((2, 0)));
    }

    #[test]
    fn rejects_bad_keys_and_overflow() {
        let mut heap = IndexedMinHeap::with_capacity(2);
        assert_eq!(
            heap.insert(2, 1),
            Err(HeapError::KeyOutOfRange { key: 2, capacity: 2 })
        );
        heap.insert(0, 1).unwrap();
        assert_eq!(heap.insert(0, 3), Err(HeapError::KeyAlreadyPresent(0)));
        heap.insert(1, 1).unwrap();
        assert_eq!(heap.len(), heap.capacity());

        let mut full = IndexedMinHeap::with_capacity(1);
        full.insert(0, 1).unwrap();
        assert!(matches!(full.insert(0, 1), Err(HeapError::Full { capacity: 1 })));
    }

    #[test]
    fn equal_children_pick_the_right_one() {
        let mut heap = IndexedMinHeap::with_capacity(4);
        heap.insert(0, 1).unwrap();
        heap.insert(1, 5).unwrap();
        heap.insert(2, 5).unwrap();
        heap.insert(3, 9).unwrap();
        heap.extract_min();
        assert_eq!(heap.peek(), Some((2, 5)));
        assert_consistent(&heap);
    }

    #[test]
    fn index_stays_consistent_under_mixed_operations() {
        let n = 64;
        let mut heap = IndexedMinHeap::with_capacity(n);
        let mut state: u32 = 12345;
        let mut next = || {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) % 1000
        };

        for key in 0..n {
            heap.insert(key, next() + 1000).unwrap();
        }
        assert_consistent(&heap);

        for key in (0..n).step_by(3) {
            let current = heap.priority_of(key).unwrap();
            heap.decrease_priority(key, current - next() % 1000).unwrap();
            assert_consistent(&heap);
        }

        let mut last = 0;
        while let Some((_, priority)) = heap.extract_min() {
            assert!(priority >= last);
            last = priority;
            assert_consistent(&heap);
        }
    }
}
