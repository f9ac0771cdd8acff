use peekheap::{ByKey, Heap, HeapError, NaturalOrder, ReverseOrder};

fn heap_of(items: &[i32]) -> Heap<i32> {
    let mut heap = Heap::new();
    heap.push_array(items.iter().copied());
    heap
}

#[test]
fn test_heapsort_scenario() -> anyhow::Result<()> {
    let mut heap = heap_of(&[5, 3, 8, 1, 9, 2]);
    assert_eq!(heap.pop_array(None)?, vec![1, 2, 3, 5, 8, 9]);
    Ok(())
}

#[test]
fn test_max_heap_scenario() -> anyhow::Result<()> {
    let mut heap = Heap::with_comparator(|a: &i32, b: &i32| a > b);
    heap.push_array([5, 3, 8, 1, 9, 2]);
    assert_eq!(heap.pop()?, 9);
    assert_eq!(heap.pop()?, 8);
    Ok(())
}

#[test]
fn test_peek_array_scenario() -> anyhow::Result<()> {
    let heap = heap_of(&[5, 3, 8, 1, 9, 2]);
    assert_eq!(heap.peek_array(3)?, vec![1, 2, 3]);
    assert_eq!(heap.len(), 6);
    Ok(())
}

#[test]
fn test_pop_array_out_of_range_scenario() {
    let mut heap = heap_of(&[5, 3, 8, 1, 9, 2]);
    let err = heap.pop_array(10).unwrap_err();
    assert_eq!(err, HeapError::OutOfRange { requested: 10, len: 6 });
    assert_eq!(heap.len(), 6);
}

#[test]
fn test_drain_then_pop_is_empty() -> anyhow::Result<()> {
    let mut heap = heap_of(&[4, 4, 1, 7]);
    let len = heap.len();
    assert_eq!(heap.pop_array(len)?.len(), 4);
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), Err(HeapError::Empty));

    // Errors convert through `?` into application error types.
    let err: anyhow::Error = heap.peek().unwrap_err().into();
    assert_eq!(err.to_string(), "heap is empty");
    Ok(())
}

#[test]
fn test_over_request_by_one_does_not_mutate() {
    let mut heap = heap_of(&[6, 2, 9]);
    let before = heap.as_slice().to_vec();
    assert!(matches!(heap.pop_array(4), Err(HeapError::OutOfRange { .. })));
    assert_eq!(heap.as_slice(), before.as_slice());
    assert_eq!(heap.pop_array(None), Ok(vec![2, 6, 9]));
}

#[test]
fn test_peek_array_matches_pop_array_on_clone() {
    let heap = heap_of(&[12, -3, 7, 7, 0, 45, 19, -8, 3, 3, 21]);
    for n in 0..=heap.len() {
        let peeked = heap.peek_array(n).unwrap();
        let popped = heap.clone().pop_array(n).unwrap();
        assert_eq!(peeked, popped, "mismatch for n = {}", n);
    }
    assert_eq!(heap.len(), 11);
}

#[test]
fn test_comparators_need_no_code_change() {
    let items = [10, 40, 20, 30];

    let min: Heap<_, NaturalOrder> = items.into_iter().collect();
    let max: Heap<_, ReverseOrder> = items.into_iter().collect();
    let by_distance = {
        let mut heap = Heap::with_comparator(ByKey(|x: &i32| (x - 25).abs()));
        heap.extend(items);
        heap
    };

    assert_eq!(min.peek_array(None), Ok(vec![10, 20, 30, 40]));
    assert_eq!(max.peek_array(None), Ok(vec![40, 30, 20, 10]));
    assert_eq!(by_distance.peek_array(2).map(|v| v.len()), Ok(2));
    assert_eq!(by_distance.peek_ref().map(|x| (x - 25).abs()), Ok(5));
}

#[test]
fn test_strings_and_unsafe_style_refs() {
    let mut heap = Heap::new();
    heap.push_array(["pear", "apple", "fig", "banana"].map(String::from));

    let refs = heap.peek_array_ref(2).unwrap();
    assert_eq!(refs, vec!["apple", "banana"]);
    let first: Vec<&str> = heap.iter_sorted().map(String::as_str).take(3).collect();
    assert_eq!(first, ["apple", "banana", "fig"]);

    assert_eq!(heap.pop().as_deref(), Ok("apple"));
}

#[test]
fn test_large_heap_top_k() {
    let heap: Heap<u64> = (0..10_000u64).map(|i| (i * 2_654_435_761) % 10_007).collect();
    let top = heap.peek_array(5).unwrap();
    let mut expected: Vec<u64> = heap.iter().copied().collect();
    expected.sort_unstable();
    expected.truncate(5);
    assert_eq!(top, expected);
}

#[test]
fn test_json_snapshot_rebuilds_heap() -> anyhow::Result<()> {
    let heap = heap_of(&[5, 3, 8, 1, 9, 2]);
    let json = serde_json::to_value(&heap)?;
    assert!(json.is_array());

    let restored: Heap<i32> = serde_json::from_value(json)?;
    assert_eq!(restored.peek_array(None)?, heap.peek_array(None)?);
    Ok(())
}
