use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use shortcut_graph::{error::HeapError, queue::IndexedBinaryHeap};

#[derive(Clone, Debug, PartialEq)]
struct Node {
    id: u32,
    priority: u32,
}

fn node_heap(nodes: Vec<Node>) -> IndexedBinaryHeap<Node, u32> {
    IndexedBinaryHeap::with_key(nodes, |a, b| a.priority < b.priority, |node| node.id).unwrap()
}

fn assert_keys_consistent(heap: &IndexedBinaryHeap<Node, u32>) {
    for (index, node) in heap.as_slice().iter().enumerate() {
        assert_eq!(heap.position(&node.id), Some(index));
    }
    assert!(heap.is_heap());
}

#[test]
fn extracts_shuffled_values_in_order() {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [0, 1, 2, 3, 10, 257] {
        let mut values: Vec<u32> = (0..n).collect();
        values.shuffle(&mut rng);

        let mut heap = IndexedBinaryHeap::new(values);
        assert!(heap.is_heap());

        let mut extracted = Vec::new();
        while let Ok(value) = heap.extract_min() {
            extracted.push(value);
            assert!(heap.is_heap());
        }
        assert_eq!(extracted, (0..n).collect::<Vec<_>>());
    }
}

#[test]
fn inserting_one_by_one_sorts() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut values: Vec<i64> = (-50..50).collect();
    values.shuffle(&mut rng);

    let mut heap = IndexedBinaryHeap::new(Vec::new());
    for value in values {
        heap.insert(value).unwrap();
        assert!(heap.is_heap());
    }

    let extracted: Vec<i64> = std::iter::from_fn(|| heap.extract_min().ok()).collect();
    assert_eq!(extracted, (-50..50).collect::<Vec<_>>());
}

#[test]
fn random_operations_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut nodes: Vec<Node> = (0..64)
        .map(|id| Node {
            id,
            priority: rng.gen_range(0..1000),
        })
        .collect();
    nodes.shuffle(&mut rng);

    let mut next_id = 64;
    let mut heap = node_heap(nodes);
    assert_keys_consistent(&heap);

    for _ in 0..2000 {
        match rng.gen_range(0..4) {
            0 => {
                heap.insert(Node {
                    id: next_id,
                    priority: rng.gen_range(0..1000),
                })
                .unwrap();
                next_id += 1;
            }
            1 => {
                let top = heap.peek().cloned();
                let extracted = heap.extract_min();
                assert_eq!(top.ok(), extracted.ok());
            }
            2 if !heap.is_empty() => {
                let index = rng.gen_range(0..heap.len());
                let node = heap.as_slice()[index].clone();
                let priority = rng.gen_range(0..=node.priority);
                heap.decrease_by_index(index, Node { id: node.id, priority })
                    .unwrap();
            }
            3 if !heap.is_empty() => {
                let index = rng.gen_range(0..heap.len());
                let id = heap.as_slice()[index].id;
                let priority = heap.as_slice()[index].priority / 2;
                heap.decrease_by_key(&id, Node { id, priority }).unwrap();
                assert!(heap.as_slice()[heap.position(&id).unwrap()].priority == priority);
            }
            _ => {}
        }
        assert_keys_consistent(&heap);
    }
}

#[test]
fn rejected_updates_leave_heap_unchanged() {
    let nodes = (0..10)
        .map(|id| Node {
            id,
            priority: 10 * id,
        })
        .collect();
    let mut heap = node_heap(nodes);
    let before = heap.as_slice().to_vec();

    let index = heap.position(&4).unwrap();
    assert_eq!(
        heap.decrease_by_index(index, Node { id: 4, priority: 41 }),
        Err(HeapError::NotDecreasing(index))
    );
    assert!(matches!(
        heap.decrease_by_index(index, Node { id: 5, priority: 0 }),
        Err(HeapError::KeyMismatch { .. })
    ));
    assert!(matches!(
        heap.decrease_by_key(&4, Node { id: 5, priority: 0 }),
        Err(HeapError::KeyMismatch { .. })
    ));
    assert_eq!(
        heap.decrease_by_key(&99, Node { id: 99, priority: 0 }),
        Err(HeapError::UnknownKey("99".to_string()))
    );
    assert_eq!(
        heap.insert(Node { id: 3, priority: 0 }),
        Err(HeapError::DuplicateKey("3".to_string()))
    );

    assert_eq!(heap.as_slice(), before.as_slice());
    assert_keys_consistent(&heap);
}

#[test]
fn extracted_keys_can_be_inserted_again() {
    let mut heap = node_heap(vec![
        Node { id: 1, priority: 5 },
        Node { id: 2, priority: 1 },
    ]);

    let top = heap.extract_min().unwrap();
    assert_eq!(top.id, 2);
    assert!(!heap.contains_key(&2));

    heap.insert(Node { id: 2, priority: 9 }).unwrap();
    assert_eq!(heap.peek().map(|node| node.id), Ok(1));
    assert_keys_consistent(&heap);
}
