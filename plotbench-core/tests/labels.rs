use plotbench_core::LabelPool;

#[test]
fn free_labels_come_back_unchanged() {
    let mut pool = LabelPool::new();
    assert_eq!(pool.allocate("Line 1"), "Line 1");
    assert_eq!(pool.allocate("Scatter 1"), "Scatter 1");
    assert!(pool.is_used("Line 1"));
    assert!(!pool.is_used("Line 2"));
}

#[test]
fn collisions_bump_the_trailing_integer() {
    let mut pool = LabelPool::new();
    assert_eq!(pool.allocate("Line 1"), "Line 1");
    assert_eq!(pool.allocate("Line 1"), "Line 2");
    assert_eq!(pool.allocate("Line 1"), "Line 3");
}

#[test]
fn labels_without_a_suffix_get_one_appended() {
    let mut pool = LabelPool::new();
    assert_eq!(pool.allocate("Temperature"), "Temperature");
    assert_eq!(pool.allocate("Temperature"), "Temperature 1");
    assert_eq!(pool.allocate("Temperature"), "Temperature 2");
}

#[test]
fn two_digit_suffixes_keep_their_space() {
    let mut pool = LabelPool::new();
    for expected in 1..=10 {
        assert_eq!(pool.allocate("Line 1"), format!("Line {}", expected));
    }
    assert_eq!(pool.allocate("Line 1"), "Line 11");
}

#[test]
fn labels_stay_consumed_until_reset() {
    let mut pool = LabelPool::new();
    assert_eq!(pool.allocate("Line 1"), "Line 1");
    // No release on overlay delete: the next request still bumps.
    assert_eq!(pool.allocate("Line 1"), "Line 2");

    pool.reset();
    assert_eq!(pool.allocate("Line 1"), "Line 1");
}
