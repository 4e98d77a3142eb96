use roaring::RoaringBitmap;

#[test]
fn flip_bit_toggles_presence() {
    let mut rb = RoaringBitmap::new();
    rb.flip_bit(1);
    assert!(rb.contains(1));
    rb.flip_bit(1);
    assert!(!rb.contains(1));
}

#[test]
fn flip_range_is_its_own_inverse() {
    let mut rb: RoaringBitmap = vec![1, 100_000, 999_999].into_iter().collect();
    let before = rb.clone();

    rb.flip_range(0..2_000_000);
    assert_ne!(rb, before);

    rb.flip_range(0..2_000_000);
    assert_eq!(rb, before);
}

#[test]
fn flip_range_drops_containers_that_become_full() {
    let mut rb: RoaringBitmap = (0..=100_000u32).collect();
    assert!(rb.contains(0));

    // The key-0 container holds exactly 0..=65535, all 65536 values: flipping
    // that whole sub-range empties it and it should be dropped from the index.
    rb.flip_range(0..65536);
    assert!(!rb.contains(0));
    assert!(!rb.contains(65535));
    assert!(rb.contains(100_000));
}

#[test]
fn flip_pure_leaves_original_untouched() {
    let mut rb = RoaringBitmap::new();
    rb.insert(1);

    let flipped = rb.flip(0..3);
    assert!(flipped.contains(0));
    assert!(!flipped.contains(1));
    assert!(flipped.contains(2));

    // original is untouched
    assert!(rb.contains(1));
    assert!(!rb.contains(0));
    assert!(!rb.contains(2));
}

#[test]
fn flip_range_on_absent_bucket_creates_full_run() {
    let mut rb = RoaringBitmap::new();
    rb.flip_range(23_000_000..23_000_010);
    for v in 23_000_000..23_000_010 {
        assert!(rb.contains(v));
    }
    assert_eq!(rb.len(), 10);
}
