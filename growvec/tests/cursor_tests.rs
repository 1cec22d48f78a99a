use growvec::{Container, GrowVecError};

fn filled(values: &[u32]) -> Container<u32> {
    let mut container = Container::new().unwrap();
    for v in values {
        container.push_back(v).unwrap();
    }
    container
}

#[test]
fn test_walk_begin_to_end() {
    let container = filled(&[1, 2, 3, 4]);
    let mut cursor = container.begin().unwrap();
    let end = container.end().unwrap();

    let mut seen = Vec::new();
    while cursor != end {
        seen.push(*cursor.get(&container).unwrap());
        cursor.advance(&container).unwrap();
    }

    assert_eq!(seen, vec![1, 2, 3, 4]);
    assert_eq!(container.begin().unwrap().distance(&container, &end).unwrap(), 4);
}

#[test]
fn test_walk_backwards() {
    let container = filled(&[1, 2, 3]);
    let begin = container.begin().unwrap();
    let mut cursor = container.end().unwrap();

    let mut seen = Vec::new();
    while cursor != begin {
        cursor.previous(&container).unwrap();
        seen.push(*cursor.get(&container).unwrap());
    }

    assert_eq!(seen, vec![3, 2, 1]);
}

#[test]
fn test_get_at_end_is_out_of_range() {
    let container = filled(&[1]);
    let end = container.end().unwrap();

    assert_eq!(
        end.get(&container),
        Err(GrowVecError::OutOfRange {
            index: 1,
            length: 1
        })
    );
}

#[test]
fn test_set_through_cursor() {
    let mut container = filled(&[1, 2, 3]);
    let mut cursor = container.begin().unwrap();
    cursor.advance(&container).unwrap();

    cursor.set(&mut container, &20).unwrap();
    assert_eq!(container.data(), &[1, 20, 3]);

    // Overwriting a slot does not relocate, so the cursor stays valid
    assert_eq!(*cursor.get(&container).unwrap(), 20);

    let end = container.end().unwrap();
    assert!(matches!(
        end.set(&mut container, &4),
        Err(GrowVecError::OutOfRange { .. })
    ));
}

#[test]
fn test_push_within_capacity_keeps_cursor_valid() {
    let mut container = Container::with_capacity(16).unwrap();
    container.push_back(&1u32).unwrap();
    let cursor = container.begin().unwrap();

    container.push_back(&2).unwrap();
    container.push_back(&3).unwrap();

    assert_eq!(*cursor.get(&container).unwrap(), 1);
}

#[test]
fn test_relocating_push_invalidates_cursor() {
    let mut container = filled(&[1]);
    let cursor = container.begin().unwrap();
    let capacity = container.capacity();

    while container.capacity() == capacity {
        container.push_back(&0).unwrap();
    }

    assert_eq!(cursor.get(&container), Err(GrowVecError::StaleIterator));
    let mut moved = cursor;
    assert_eq!(moved.advance(&container), Err(GrowVecError::StaleIterator));
}

#[test]
fn test_invalidating_operations() {
    let mut container = Container::with_capacity(32).unwrap();
    container.push_back(&1u32).unwrap();
    container.push_back(&2).unwrap();

    let cursor = container.begin().unwrap();
    container.insert(0, &0).unwrap();
    assert_eq!(cursor.get(&container), Err(GrowVecError::StaleIterator));

    let cursor = container.begin().unwrap();
    container.resize(2).unwrap();
    assert_eq!(cursor.get(&container), Err(GrowVecError::StaleIterator));

    let cursor = container.begin().unwrap();
    container.pop_back().unwrap();
    assert_eq!(cursor.get(&container), Err(GrowVecError::StaleIterator));

    let cursor = container.begin().unwrap();
    container.clear().unwrap();
    assert_eq!(cursor.get(&container), Err(GrowVecError::StaleIterator));

    let cursor = container.begin().unwrap();
    container.destroy().unwrap();
    assert_eq!(cursor.get(&container), Err(GrowVecError::NotInitialized));
}

#[test]
fn test_cursor_from_other_container() {
    let mut a = filled(&[1, 2]);
    let b = filled(&[1, 2]);
    let foreign = b.begin().unwrap();

    assert_eq!(
        a.insert_at(foreign, &9),
        Err(GrowVecError::InvalidParameter {
            reason: "cursor belongs to a different container"
        })
    );
    assert!(matches!(
        a.begin().unwrap().distance(&a, &foreign),
        Err(GrowVecError::InvalidParameter { .. })
    ));
    assert_eq!(a.data(), &[1, 2]);
}

#[test]
fn test_insert_at_cursor() {
    let mut container = filled(&[1, 3]);
    let mut cursor = container.begin().unwrap();
    cursor.advance(&container).unwrap();

    container.insert_at(cursor, &2).unwrap();

    assert_eq!(container.data(), &[1, 2, 3]);
    assert_eq!(cursor.get(&container), Err(GrowVecError::StaleIterator));
}

#[test]
fn test_distance_across_generations() {
    let mut container = filled(&[1, 2]);
    let before = container.begin().unwrap();
    container.reserve(100).unwrap();
    let after = container.end().unwrap();

    assert_eq!(
        before.distance(&container, &after),
        Err(GrowVecError::StaleIterator)
    );
    assert_eq!(
        after.distance(&container, &before),
        Err(GrowVecError::StaleIterator)
    );
}

#[test]
fn test_distance_after_relocation() {
    let mut container = filled(&[1]);
    let begin = container.begin().unwrap();
    let end = container.end().unwrap();
    assert_eq!(begin.distance(&container, &end).unwrap(), 1);

    container.reserve(100).unwrap();
    assert_eq!(
        begin.distance(&container, &end),
        Err(GrowVecError::StaleIterator)
    );

    let fresh_begin = container.begin().unwrap();
    let fresh_end = container.end().unwrap();
    assert_eq!(fresh_begin.distance(&container, &fresh_end).unwrap(), 1);
}

#[test]
fn test_distance_after_destroy() {
    let mut container = filled(&[1]);
    let begin = container.begin().unwrap();
    let end = container.end().unwrap();

    container.destroy().unwrap();
    assert_eq!(
        begin.distance(&container, &end),
        Err(GrowVecError::NotInitialized)
    );
}
