use roaring::RoaringBitmap;

#[test]
fn append() {
    let values = (0..10u32).map(|x| 13 * x).collect::<Vec<u32>>();
    let mut rb1 = RoaringBitmap::new();
    rb1.append(values.clone()).unwrap();

    for (x, y) in rb1.iter().zip(values.iter()) {
        assert_eq!(x, *y);
    }
}

#[test]
fn append_rejects_non_increasing() {
    let mut rb = RoaringBitmap::new();
    assert_eq!(rb.append(vec![5, 5]).unwrap_err().valid_until(), 1);
}

#[test]
fn push_rejects_values_not_greater_than_max() {
    let mut rb = RoaringBitmap::new();
    assert!(rb.push(5));
    assert!(!rb.push(5));
    assert!(!rb.push(4));
    assert!(rb.push(6));
}
