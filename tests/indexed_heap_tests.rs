use indexed_sssp::data_structures::{IndexedBinaryHeap, PriorityQueue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_sorted_extraction() {
    let mut rng = StdRng::seed_from_u64(11);

    for len in [0usize, 1, 2, 7, 64, 500] {
        let values: Vec<i32> = (0..len).map(|_| rng.gen_range(-50..50)).collect();

        let mut heap = IndexedBinaryHeap::with_capacity(len);
        for &v in &values {
            heap.push(v);
        }

        let mut drained = Vec::with_capacity(len);
        while let Some(v) = heap.pop() {
            drained.push(v);
        }

        let mut expected = values.clone();
        expected.sort_unstable();
        assert_eq!(drained, expected, "len {}", len);
        assert!(heap.is_empty());
    }
}

#[test]
fn test_bulk_heapify_matches_pushes() {
    let mut rng = StdRng::seed_from_u64(3);
    let values: Vec<u16> = (0..1_000).map(|_| rng.gen_range(0..200)).collect();

    let heapified: IndexedBinaryHeap<u16> = values.iter().copied().collect();
    let mut pushed = IndexedBinaryHeap::new();
    for &v in &values {
        pushed.push(v);
    }

    assert_eq!(heapified.len(), values.len());
    assert_eq!(heapified.into_sorted_vec(), pushed.into_sorted_vec());
}

#[test]
fn test_peek_does_not_mutate() {
    let mut heap = IndexedBinaryHeap::from(vec![8, 3, 5]);

    assert_eq!(heap.peek(), Some(&3));
    assert_eq!(heap.peek(), Some(&3));
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.pop(), Some(3));
    assert_eq!(heap.peek(), Some(&5));
}

#[test]
fn test_remove_each_present_value() {
    let values = vec![5, 1, 9, 3, 3, 7, 1, 8, 2, 6];
    let mut heap = IndexedBinaryHeap::from_vec(values.clone());

    let mut remaining = values.clone();
    for v in [3, 9, 1, 1, 6] {
        assert!(heap.remove(&v), "{} should be present", v);
        let position = remaining.iter().position(|&x| x == v).unwrap();
        remaining.remove(position);
        assert_eq!(heap.len(), remaining.len());
    }

    assert!(heap.contains(&3));
    assert!(!heap.contains(&9));
    assert!(!heap.contains(&1));
    assert!(!heap.remove(&1));

    remaining.sort_unstable();
    assert_eq!(heap.into_sorted_vec(), remaining);
}

#[test]
fn test_randomized_remove_against_model() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut heap = IndexedBinaryHeap::new();
    let mut model: Vec<u32> = Vec::new();

    for _ in 0..2_000 {
        let value = rng.gen_range(0..25);
        if rng.gen_bool(0.6) {
            heap.push(value);
            model.push(value);
        } else {
            let expected = model.iter().position(|&x| x == value);
            assert_eq!(heap.remove(&value), expected.is_some());
            if let Some(position) = expected {
                model.swap_remove(position);
            }
        }
        assert_eq!(heap.len(), model.len());
        assert_eq!(heap.peek().copied(), model.iter().copied().min());
    }

    model.sort_unstable();
    assert_eq!(heap.into_sorted_vec(), model);
}

#[test]
fn test_clear() {
    let mut heap: IndexedBinaryHeap<u8> = (0..10).collect();
    heap.clear();

    assert!(heap.is_empty());
    assert!(!heap.contains(&3));
    assert!(!heap.remove(&3));
    heap.push(4);
    assert_eq!(heap.pop(), Some(4));
}

#[test]
fn test_priority_queue_orders_by_priority() {
    let mut queue = PriorityQueue::new();
    queue.push(7usize, 30u64);
    queue.push(2, 10);
    queue.push(5, 20);
    queue.push(2, 5);

    assert_eq!(queue.len(), 4);
    assert_eq!(queue.peek(), Some((2, 5)));
    assert_eq!(queue.pop(), Some((2, 5)));
    assert_eq!(queue.pop(), Some((2, 10)));
    assert_eq!(queue.pop(), Some((5, 20)));
    assert_eq!(queue.pop(), Some((7, 30)));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_priority_queue_ties_break_on_vertex() {
    let mut queue = PriorityQueue::with_capacity(3);
    queue.push(9usize, 1u32);
    queue.push(4, 1);
    queue.push(6, 1);

    assert_eq!(queue.pop(), Some((4, 1)));
    assert_eq!(queue.pop(), Some((6, 1)));
    assert_eq!(queue.pop(), Some((9, 1)));
}

#[test]
fn test_priority_queue_remove_specific_record() {
    let mut queue = PriorityQueue::new();
    queue.push(1usize, 8u64);
    queue.push(1, 3);
    queue.push(2, 5);

    // Only the exact (vertex, priority) record goes
    assert!(!queue.remove(1, 4));
    assert!(queue.remove(1, 3));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.pop(), Some((2, 5)));
    assert_eq!(queue.pop(), Some((1, 8)));

    queue.push(3, 1);
    queue.clear();
    assert!(queue.is_empty());
}
