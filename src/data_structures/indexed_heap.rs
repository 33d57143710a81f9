use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

/// An array-backed binary min-heap that tracks, for every stored value, the set of
/// array positions currently holding an equal value.
///
/// The position index is what makes [`remove`](IndexedBinaryHeap::remove) run in
/// O(log n): the slot of any stored value is found without scanning the array.
/// Values need not be unique.
///
/// Layout is the usual 0-indexed complete binary tree: the parent of `k` is
/// `(k - 1) / 2`, its children are `2k + 1` and `2k + 2`.
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap<T>
where
    T: Ord + Hash + Clone,
{
    /// Heap storage
    data: Vec<T>,

    /// Value -> every array position holding that value
    positions: HashMap<T, BTreeSet<usize>>,
}

impl<T> IndexedBinaryHeap<T>
where
    T: Ord + Hash + Clone,
{
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedBinaryHeap {
            data: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a heap from an arbitrary vector in O(n).
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut positions: HashMap<T, BTreeSet<usize>> = HashMap::with_capacity(data.len());
        for (index, value) in data.iter().enumerate() {
            positions.entry(value.clone()).or_default().insert(index);
        }

        let mut heap = IndexedBinaryHeap { data, positions };
        for index in (0..heap.data.len() / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if at least one element equal to `value` is stored
    pub fn contains(&self, value: &T) -> bool {
        self.positions.contains_key(value)
    }

    /// Returns the smallest element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts a value in O(log n)
    pub fn push(&mut self, value: T) {
        let index = self.data.len();
        self.track(value.clone(), index);
        self.data.push(value);
        self.sift_up(index);
    }

    /// Removes and returns the smallest element in O(log n)
    pub fn pop(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    /// Removes one occurrence of `value` in O(log n).
    ///
    /// Returns false, leaving the heap untouched, when no equal element is stored.
    /// When several equal elements are stored, which of them goes is unspecified.
    pub fn remove(&mut self, value: &T) -> bool {
        let index = match self.positions.get(value).and_then(|set| set.last()) {
            Some(&index) => index,
            None => return false,
        };
        self.remove_at(index).is_some()
    }

    /// Drops every element
    pub fn clear(&mut self) {
        self.data.clear();
        self.positions.clear();
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Swap-with-last, shrink, then restore heap order at `index` in whichever
    /// direction the swapped-in element needs.
    fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.data.len() {
            return None;
        }
        let last = self.data.len() - 1;
        if index < last {
            self.swap(index, last);
        }

        let removed = self.data.pop()?;
        self.untrack(&removed, last);

        if index < self.data.len() {
            let index = self.sift_up(index);
            self.sift_down(index);
        }
        Some(removed)
    }

    /// Moves the element at `index` towards the root while it is smaller than its
    /// parent. Returns its final position.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] >= self.data[parent] {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
        index
    }

    /// Moves the element at `index` towards the leaves while one of its children is
    /// smaller.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smallest = if right < len && self.data[right] < self.data[left] {
                right
            } else {
                left
            };
            if self.data[smallest] >= self.data[index] {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    /// Swaps two slots, keeping the position index in step with the array.
    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        // Equal values share one position set that already holds both slots.
        if self.data[i] != self.data[j] {
            if let Some(set) = self.positions.get_mut(&self.data[i]) {
                set.remove(&i);
                set.insert(j);
            }
            if let Some(set) = self.positions.get_mut(&self.data[j]) {
                set.remove(&j);
                set.insert(i);
            }
        }
        self.data.swap(i, j);
    }

    fn track(&mut self, value: T, index: usize) {
        self.positions.entry(value).or_default().insert(index);
    }

    fn untrack(&mut self, value: &T, index: usize) {
        let now_empty = match self.positions.get_mut(value) {
            Some(set) => {
                set.remove(&index);
                set.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.positions.remove(value);
        }
    }
}

impl<T> Default for IndexedBinaryHeap<T>
where
    T: Ord + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for IndexedBinaryHeap<T>
where
    T: Ord + Hash + Clone,
{
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T> FromIterator<T> for IndexedBinaryHeap<T>
where
    T: Ord + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Panics unless heap order holds and the position index matches the array exactly.
    fn assert_invariants<T: Ord + Hash + Clone + std::fmt::Debug>(heap: &IndexedBinaryHeap<T>) {
        for k in 1..heap.data.len() {
            let parent = (k - 1) / 2;
            assert!(
                heap.data[parent] <= heap.data[k],
                "heap order broken between {} and {}: {:?} > {:?}",
                parent,
                k,
                heap.data[parent],
                heap.data[k]
            );
        }

        let mut expected: HashMap<T, BTreeSet<usize>> = HashMap::new();
        for (index, value) in heap.data.iter().enumerate() {
            expected.entry(value.clone()).or_default().insert(index);
        }
        assert_eq!(heap.positions, expected, "position index out of step with array");
    }

    #[test]
    fn test_basic_operations() {
        let mut heap = IndexedBinaryHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);

        heap.push(5);
        heap.push(2);
        heap.push(3);
        heap.push(1);
        heap.push(7);
        heap.push(2);
        assert_invariants(&heap);

        assert_eq!(heap.len(), 6);
        assert_eq!(heap.peek(), Some(&1));

        let mut drained = Vec::new();
        while let Some(value) = heap.pop() {
            assert_invariants(&heap);
            drained.push(value);
        }
        assert_eq!(drained, vec![1, 2, 2, 3, 5, 7]);
    }

    #[test]
    fn test_remove_interior_sifts_up() {
        // Already a valid heap. Removing 11 moves the last element (3) under 10,
        // so it has to climb one level.
        let mut heap = IndexedBinaryHeap::from_vec(vec![0, 10, 1, 11, 12, 2, 3]);
        assert_invariants(&heap);

        assert!(heap.remove(&11));
        assert_invariants(&heap);
        assert_eq!(heap.data, vec![0, 3, 1, 10, 12, 2]);
        assert!(!heap.contains(&11));

        assert!(heap.remove(&0));
        assert_invariants(&heap);
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek(), Some(&1));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut heap: IndexedBinaryHeap<i32> = vec![3, 1, 2].into();
        let before = heap.data.clone();

        assert!(!heap.remove(&42));
        assert_eq!(heap.data, before);
        assert_invariants(&heap);

        let mut empty: IndexedBinaryHeap<i32> = IndexedBinaryHeap::new();
        assert!(!empty.remove(&1));
    }

    #[test]
    fn test_remove_one_of_many_duplicates() {
        let mut heap: IndexedBinaryHeap<u8> = [4, 4, 4, 1, 4].into_iter().collect();
        assert_eq!(heap.positions[&4].len(), 4);

        assert!(heap.remove(&4));
        assert_invariants(&heap);
        assert_eq!(heap.positions[&4].len(), 3);
        assert_eq!(heap.len(), 4);

        assert!(heap.remove(&1));
        assert_invariants(&heap);
        assert_eq!(heap.into_sorted_vec(), vec![4, 4, 4]);
    }

    #[test]
    fn test_bulk_heapify_keeps_index() {
        let heap = IndexedBinaryHeap::from_vec(vec![9, 8, 7, 6, 5, 5, 4, 3, 2, 1, 0]);
        assert_invariants(&heap);
        assert_eq!(heap.peek(), Some(&0));
    }

    #[test]
    fn test_randomized_operations_preserve_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut heap = IndexedBinaryHeap::new();
        let mut model: Vec<u32> = Vec::new();

        for _ in 0..4_000 {
            match rng.gen_range(0..10) {
                0..=4 => {
                    // Small value range forces plenty of duplicates
                    let value = rng.gen_range(0..40);
                    heap.push(value);
                    model.push(value);
                }
                5..=6 => {
                    let popped = heap.pop();
                    model.sort_unstable();
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    assert_eq!(popped, expected);
                }
                _ => {
                    let value = rng.gen_range(0..40);
                    let removed = heap.remove(&value);
                    let position = model.iter().position(|&v| v == value);
                    assert_eq!(removed, position.is_some());
                    if let Some(position) = position {
                        model.swap_remove(position);
                    }
                }
            }
            assert_invariants(&heap);
            assert_eq!(heap.len(), model.len());
        }
    }
}
