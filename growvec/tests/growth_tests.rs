use growvec::{Container, GrowVecError, GrowthPolicy};

#[test]
fn test_reserve_prevents_reallocation() {
    let mut container = Container::new().unwrap();
    container.reserve(100).unwrap();
    assert_eq!(container.capacity(), 100);

    for v in 0..100u32 {
        container.push_back(&v).unwrap();
        assert_eq!(container.capacity(), 100);
    }
}

#[test]
fn test_reserve_smaller_is_noop() {
    let mut container: Container<u8> = Container::with_capacity(20).unwrap();
    container.reserve(5).unwrap();
    assert_eq!(container.capacity(), 20);
}

#[test]
fn test_append_growth_formula() {
    let policy = GrowthPolicy::new().with_initial_capacity(0);
    let mut container = Container::with_policy(policy).unwrap();
    assert_eq!(container.capacity(), 0);

    container.push_back(&0u8).unwrap();
    assert_eq!(container.capacity(), 4); // 1 * 3 / 2 + 3

    for v in 1..5u8 {
        container.push_back(&v).unwrap();
    }
    assert_eq!(container.capacity(), 10); // 5 * 3 / 2 + 3
}

#[test]
fn test_resize_reserves_exactly() {
    let policy = GrowthPolicy::new().with_initial_capacity(0);
    let mut container: Container<u64> = Container::with_policy(policy).unwrap();
    container.resize(7).unwrap();
    assert_eq!(container.len(), 7);
    assert_eq!(container.capacity(), 7);
}

#[test]
fn test_custom_factor() {
    let policy = GrowthPolicy::new()
        .with_initial_capacity(0)
        .with_factor(2, 1)
        .with_slack(0);
    let mut container = Container::with_policy(policy).unwrap();

    let mut capacities = Vec::new();
    for v in 0..9u8 {
        container.push_back(&v).unwrap();
        capacities.push(container.capacity());
    }
    assert_eq!(capacities, vec![2, 2, 6, 6, 6, 6, 14, 14, 14]);
}

#[test]
fn test_ceiling_allows_filling_to_the_limit() {
    let policy = GrowthPolicy::new().with_max_capacity(10);
    let mut container = Container::with_policy(policy).unwrap();

    for v in 0..10u8 {
        container.push_back(&v).unwrap();
    }
    assert_eq!(container.capacity(), 10);

    assert!(matches!(
        container.push_back(&10),
        Err(GrowVecError::AllocationFailure { .. })
    ));
    assert!(matches!(
        container.reserve(11),
        Err(GrowVecError::AllocationFailure { requested: 11 })
    ));
    assert_eq!(container.len(), 10);
}

#[test]
fn test_huge_reserve_fails_cleanly() {
    let mut container: Container<u64> = Container::new().unwrap();
    container.push_back(&1).unwrap();

    assert!(matches!(
        container.reserve(usize::MAX / 2),
        Err(GrowVecError::AllocationFailure { .. })
    ));
    assert_eq!(container.data(), &[1]);
}
