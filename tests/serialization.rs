use roaring::RoaringBitmap;

#[test]
fn round_trip_spans_all_three_representations() {
    let mut rb = RoaringBitmap::new();

    // Array container (small, scattered).
    rb.insert(0);
    rb.insert(1);
    rb.insert(2);

    // Bitmap container (dense, unoptimized).
    for v in 200_000..210_000u32 {
        rb.insert(v);
    }

    // Run container once optimized (long consecutive stretch).
    rb.insert_range(400_000..450_000);
    rb.optimize();
    assert!(rb.has_run_compression());

    let mut bytes = Vec::new();
    rb.serialize_into(&mut bytes).unwrap();
    assert_eq!(bytes.len(), rb.serialized_size());

    let round_tripped = RoaringBitmap::deserialize_from(&bytes[..]).unwrap();
    assert_eq!(rb, round_tripped);

    let original: Vec<u32> = rb.iter().collect();
    let after: Vec<u32> = round_tripped.iter().collect();
    assert_eq!(original, after);
}

#[test]
fn empty_bitmap_round_trips() {
    let rb = RoaringBitmap::new();
    let mut bytes = Vec::new();
    rb.serialize_into(&mut bytes).unwrap();
    let round_tripped = RoaringBitmap::deserialize_from(&bytes[..]).unwrap();
    assert_eq!(rb, round_tripped);
    assert!(round_tripped.is_empty());
}

#[test]
fn deserialize_rejects_truncated_stream() {
    let rb: RoaringBitmap = (0..500_000u32).step_by(3).collect();
    let mut bytes = Vec::new();
    rb.serialize_into(&mut bytes).unwrap();

    for cut in [1, bytes.len() / 2, bytes.len() - 1] {
        let truncated = &bytes[..bytes.len() - cut];
        assert!(RoaringBitmap::deserialize_from(truncated).is_err());
    }
}
