#[cfg(test)]
#[allow(clippy::eq_op)]
mod test {
    use crate::RoaringBitmap;
    use proptest::prelude::*;

    // Tests algebraic set properties in terms of RoaringBitmaps.
    // Follows the wikipedia article regarding ordering and heading:
    // https://en.wikipedia.org/wiki/Algebra_of_sets
    //
    // Note: no universe set or complement operator is exercised here, same
    // reasoning as for any other finite subset of u32: a universe set would
    // be close to 512 MiB and slow to build on every case.
    //
    // Bitmaps are generated directly from a bag of u32s rather than through
    // any container-aware sampling strategy, so array/bitmap/run containers
    // all end up covered incidentally through proptest's own shrinking and
    // the occasional large input.
    fn bitmap() -> impl Strategy<Item = RoaringBitmap> {
        prop::collection::vec(any::<u32>(), 0..500).prop_map(|v| v.into_iter().collect())
    }

    // Commutative property
    // --------------------

    proptest! {
        #[test]
        fn unions_are_commutative(a in bitmap(), b in bitmap()) {
            prop_assert_eq!(&a | &b, &b | &a);

            {
                let mut x = a.clone();
                let mut y = b.clone();
                x |= &b;
                y |= &a;
                prop_assert_eq!(x, y);
            }

            {
                let mut x = a.clone();
                let mut y = b.clone();
                x |= b;
                y |= a;
                prop_assert_eq!(x, y);
            }
        }

        #[test]
        fn intersections_are_commutative(a in bitmap(), b in bitmap()) {
            prop_assert_eq!(&a & &b, &b & &a);

            {
                let mut x = a.clone();
                let mut y = b.clone();
                x &= &b;
                y &= &a;
                prop_assert_eq!(x, y);
            }

            {
                let mut x = a.clone();
                let mut y = b.clone();
                x &= b;
                y &= a;
                prop_assert_eq!(x, y);
            }
        }

        #[test]
        fn symmetric_differences_are_commutative(a in bitmap(), b in bitmap()) {
            prop_assert_eq!(&a ^ &b, &b ^ &a);

            {
                let mut x = a.clone();
                let mut y = b.clone();
                x ^= &b;
                y ^= &a;
                prop_assert_eq!(x, y);
            }

            {
                let mut x = a.clone();
                let mut y = b.clone();
                x ^= b;
                y ^= a;
                prop_assert_eq!(x, y);
            }
        }
    }

    // Associative property
    // ---------------------

    proptest! {
        #[test]
        fn unions_are_associative(a in bitmap(), b in bitmap(), c in bitmap()) {
            prop_assert_eq!(&a | (&b | &c), (&a | &b) | &c);
        }

        #[test]
        fn intersections_are_associative(a in bitmap(), b in bitmap(), c in bitmap()) {
            prop_assert_eq!(&a & (&b & &c), (&a & &b) & &c);
        }

        #[test]
        fn symmetric_differences_are_associative(a in bitmap(), b in bitmap(), c in bitmap()) {
            prop_assert_eq!(&a ^ (&b ^ &c), (&a ^ &b) ^ &c);
        }
    }

    // Distributive property
    // ---------------------

    proptest! {
        #[test]
        fn union_distributes_over_intersection(a in bitmap(), b in bitmap(), c in bitmap()) {
            prop_assert_eq!(&a | (&b & &c), (&a | &b) & (&a | &c));
        }

        #[test]
        fn intersection_distributes_over_union(a in bitmap(), b in bitmap(), c in bitmap()) {
            prop_assert_eq!(&a & (&b | &c), (&a & &b) | (&a & &c));
        }

        #[test]
        fn intersection_distributes_over_symmetric_difference(a in bitmap(), b in bitmap(), c in bitmap()) {
            prop_assert_eq!(&a & (&b ^ &c), (&a & &b) ^ (&a & &c));
        }
    }

    // Identity
    // --------

    proptest! {
        #[test]
        fn the_empty_set_is_the_identity_for_union(a in bitmap()) {
            prop_assert_eq!(&a | &empty_set(), a);
        }

        #[test]
        fn the_empty_set_is_the_identity_for_symmetric_difference(a in bitmap()) {
            prop_assert_eq!(&a ^ &empty_set(), a);
        }
    }

    // Idempotent laws
    // ---------------

    proptest! {
        #[test]
        fn unions_are_idempotent(a in bitmap()) {
            prop_assert_eq!(&a | &a, a);
        }

        #[test]
        fn intersections_are_idempotent(a in bitmap()) {
            prop_assert_eq!(&a & &a, a);
        }
    }

    // Domination laws
    // ---------------

    proptest! {
        #[test]
        fn empty_set_domination(a in bitmap()) {
            prop_assert_eq!(&a & &empty_set(), empty_set());
        }
    }

    // The algebra of inclusion
    // ========================
    // Note that for inclusion we don't also assert for the assignment
    // operators: inclusion is the property under test, not the operation.

    proptest! {
        #[test]
        fn reflexivity(a in bitmap()) {
            prop_assert!(a.is_subset(&a));
        }

        #[test]
        fn antisymmetry(a in bitmap()) {
            let mut b = a.clone();
            prop_assert_eq!(&a, &b);
            prop_assert!(a.is_subset(&b) && b.is_subset(&a));

            let mut c = RoaringBitmap::new();
            c.insert(0);
            b ^= c;

            prop_assert_ne!(&a, &b);
            prop_assert!(!(a.is_subset(&b) && b.is_subset(&a)));
        }

        #[test]
        fn transitivity(a in bitmap(), mut b in bitmap(), mut c in bitmap()) {
            b |= &a;
            c |= &b;
            prop_assert!(a.is_subset(&b));
            prop_assert!(b.is_subset(&c));
            prop_assert!(a.is_subset(&c));
        }

        #[test]
        fn existence_of_joins(a in bitmap(), b in bitmap()) {
            prop_assert!(a.is_subset(&(&a | &b)));
        }

        #[test]
        fn existence_of_meets(a in bitmap(), b in bitmap()) {
            prop_assert!((&a & &b).is_subset(&a));
        }

        #[test]
        fn inclusion_can_be_characterized_by_union_or_intersection(b in bitmap(), c in bitmap()) {
            let a = &b - &c;

            prop_assert!(a.is_subset(&b));
            prop_assert_eq!(&a & &b, a.clone());
            prop_assert_eq!(&a | &b, b.clone());
            prop_assert_eq!(&a - &b, empty_set());
        }
    }

    // The algebra of relative complements
    // ===================================

    proptest! {
        #[test]
        fn relative_complements(a in bitmap(), b in bitmap(), c in bitmap()) {
            prop_assert_eq!(&c - (&a & &b), (&c - &a) | (&c - &b));
            prop_assert_eq!(&c - (&a | &b), (&c - &a) & (&c - &b));
            prop_assert_eq!(&c - (&b - &a), (&a & &c) | (&c - &b));
            prop_assert_eq!((&b - &a) & &c, (&b & &c) - &a);
            prop_assert_eq!((&b & &c) - &a, &b & (&c - &a));
            prop_assert_eq!((&b - &a) | &c, (&b | &c) - (&a - &c));
            prop_assert_eq!((&b - &a) - &c, &b - (&a | &c));
            prop_assert_eq!(&a - &a, empty_set());
            prop_assert_eq!(empty_set() - &a, empty_set());

            let u = &a | &b | &c;
            prop_assert_eq!(&a - &u, empty_set());
        }
    }

    // Additional properties of symmetric differences
    // ==============================================

    proptest! {
        #[test]
        fn symmetric_difference_triangle_inequality(a in bitmap(), b in bitmap(), c in bitmap()) {
            prop_assert_eq!((&a ^ &b) ^ (&b ^ &c), &a ^ &c);
        }

        #[test]
        fn symmetric_difference_empty_set_neutral(a in bitmap()) {
            prop_assert_eq!(&a ^ &empty_set(), a);
        }

        #[test]
        fn symmetric_difference_inverse_of_itself(a in bitmap()) {
            prop_assert_eq!(&a ^ &a, empty_set());
        }

        #[test]
        fn symmetric_difference_relative_complements(a in bitmap(), b in bitmap()) {
            prop_assert_eq!(&a ^ &b, (&a - &b) | (&b - &a));
            prop_assert_eq!(&a ^ &b, (&a | &b) - (&a & &b));
        }
    }

    // Cardinality and rank/select
    // ===========================

    proptest! {
        #[test]
        fn union_cardinality_inclusion_exclusion(a in bitmap(), b in bitmap()) {
            let union_len = (&a | &b).len();
            let intersection_len = (&a & &b).len();
            prop_assert_eq!(union_len + intersection_len, a.len() + b.len());
        }

        #[test]
        fn rank_select_are_inverses(a in bitmap()) {
            for (i, value) in a.iter().enumerate() {
                prop_assert_eq!(a.select(i as u32), Some(value));
                prop_assert_eq!(a.rank(value), i as u64 + 1);
            }
        }
    }

    fn empty_set() -> RoaringBitmap {
        RoaringBitmap::new()
    }
}
