use roaring::RoaringBitmap;

#[test]
fn array_grows_into_bitmap_past_max_array_length() {
    let mut rb = RoaringBitmap::new();
    for v in 0..4097u32 {
        rb.insert(v);
    }
    assert_eq!(rb.len(), 4097);
    // every value is still reachable regardless of which representation
    // backs the key-0 container
    for v in 0..4097u32 {
        assert!(rb.contains(v));
    }
    assert!(!rb.contains(4097));
}

#[test]
fn bitmap_downgrades_to_array_at_max_array_length() {
    let mut rb: RoaringBitmap = (0..5000u32).collect();
    for v in 4096..5000u32 {
        rb.remove(v);
    }
    assert_eq!(rb.len(), 4096);
    for v in 0..4096u32 {
        assert!(rb.contains(v));
    }
}

#[test]
fn optimize_collapses_consecutive_run_to_single_run_container() {
    let mut rb = RoaringBitmap::new();
    rb.insert_range(0..5000);
    assert!(!rb.has_run_compression());
    rb.optimize();
    assert!(rb.has_run_compression());
    assert_eq!(rb.len(), 5000);
    for v in 0..5000u32 {
        assert!(rb.contains(v));
    }
}

#[test]
fn removing_every_other_value_from_a_run_stays_correct_through_fragmentation() {
    let mut rb = RoaringBitmap::new();
    rb.insert_range(0..6000);
    rb.optimize();
    assert!(rb.has_run_compression());

    for v in (0..6000u32).step_by(2) {
        rb.remove(v);
    }

    assert_eq!(rb.len(), 3000);
    for v in 0..6000u32 {
        assert_eq!(rb.contains(v), v % 2 == 1);
    }
}

#[test]
fn optimize_is_idempotent() {
    let mut rb = RoaringBitmap::new();
    rb.insert_range(0..20_000);
    rb.insert(50_000);
    rb.insert(100_000);

    rb.optimize();
    let once: Vec<u32> = rb.iter().collect();
    rb.optimize();
    let twice: Vec<u32> = rb.iter().collect();

    assert_eq!(once, twice);
}

#[test]
fn optimize_is_idempotent_past_max_runs_permitted_above_max_array_length() {
    // 2048 runs of 23 values each, one value apart: run_count (2048) is past
    // MAX_RUNS_PERMITTED (2047) and cardinality (47104) is well past
    // ARRAY_LIMIT (4096), with run_count * 2 still far below cardinality -
    // the exact combination that used to make the bitmap and run branches of
    // `optimize` disagree and flip the container back and forth forever.
    let mut rb = RoaringBitmap::new();
    for i in 0u64..2048 {
        let start = i * 24;
        rb.insert_range(start..start + 23);
    }
    assert_eq!(rb.len(), 2048 * 23);

    rb.optimize();
    let once: Vec<u32> = rb.iter().collect();
    let size_once = rb.serialized_size();
    let run_compression_once = rb.has_run_compression();

    rb.optimize();
    let twice: Vec<u32> = rb.iter().collect();
    let size_twice = rb.serialized_size();
    let run_compression_twice = rb.has_run_compression();

    assert_eq!(once, twice);
    assert_eq!(size_once, size_twice);
    assert_eq!(run_compression_once, run_compression_twice);
}
