pub mod indexed_heap;
pub mod priority_queue;

pub use indexed_heap::IndexedBinaryHeap;
pub use priority_queue::{PriorityQueue, QueueEntry};
