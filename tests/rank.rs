use roaring::RoaringBitmap;

#[test]
fn rank() {
    let mut bitmap = RoaringBitmap::from_sorted_iter(0..2000).unwrap();
    bitmap.insert_range(200_000..210_000);

    assert_eq!(bitmap.rank(80_000), 2000);
    assert_eq!(bitmap.rank(u32::MAX), 12_000);

    assert_eq!(bitmap.rank(0), 1);
    assert_eq!(bitmap.rank(100), 101);
    assert_eq!(bitmap.rank(1999), 2000);

    assert_eq!(bitmap.rank(200_000), 2001);
    assert_eq!(bitmap.rank(209_999), 12_000);
}

#[test]
fn rank_array() {
    let bitmap = RoaringBitmap::from_sorted_iter(0..2000).unwrap();

    assert_eq!(bitmap.rank(u32::MAX), 2000);
    assert_eq!(bitmap.rank(0), 1);
    assert_eq!(bitmap.rank(100), 101);
    assert_eq!(bitmap.rank(1999), 2000);
    assert_eq!(bitmap.rank(3000), 2000);
}

#[test]
fn rank_empty() {
    let bitmap = RoaringBitmap::new();
    assert_eq!(bitmap.rank(0), 0);
    assert_eq!(bitmap.rank(u32::MAX), 0);
}
