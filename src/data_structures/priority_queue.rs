use std::fmt::Debug;
use std::hash::Hash;

use crate::data_structures::IndexedBinaryHeap;

/// A (vertex, priority) record. Ordered by priority first, vertex second, so equal
/// priorities still give a total, deterministic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueueEntry<V, P> {
    pub priority: P,
    pub vertex: V,
}

/// A min-priority queue of vertices for shortest path algorithms, backed by
/// [`IndexedBinaryHeap`] so that a specific (vertex, priority) record can be evicted.
#[derive(Debug)]
pub struct PriorityQueue<V, P>
where
    V: Copy + Ord + Hash + Debug,
    P: Copy + Ord + Hash + Debug,
{
    /// The underlying indexed heap
    heap: IndexedBinaryHeap<QueueEntry<V, P>>,
}

impl<V, P> PriorityQueue<V, P>
where
    V: Copy + Ord + Hash + Debug,
    P: Copy + Ord + Hash + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        PriorityQueue {
            heap: IndexedBinaryHeap::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: IndexedBinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of records in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority. Earlier records for the same vertex
    /// are left in place.
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(QueueEntry { priority, vertex });
    }

    /// Removes the record with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|QueueEntry { priority, vertex }| (vertex, priority))
    }

    /// Returns the record with the smallest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|entry| (entry.vertex, entry.priority))
    }

    /// Removes one record for `vertex` carrying exactly `priority`
    pub fn remove(&mut self, vertex: V, priority: P) -> bool {
        self.heap.remove(&QueueEntry { priority, vertex })
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for PriorityQueue<V, P>
where
    V: Copy + Ord + Hash + Debug,
    P: Copy + Ord + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
