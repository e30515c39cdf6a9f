//! Property-based checks of the operator laws.

use futures::executor::block_on;
use proptest::prelude::*;
use pullseq::prelude::*;

proptest! {
    #[test]
    fn test_distinct_matches_dedup(items in prop::collection::vec(0u8..4, 0..64)) {
        let mut expected = items.clone();
        expected.dedup();

        let seq = from_iter(items).distinct_until_changed();
        prop_assert_eq!(seq.to_vec().unwrap(), expected);
    }

    #[test]
    fn test_distinct_is_idempotent(items in prop::collection::vec(0i32..5, 0..64), modulus in 1i32..4) {
        let options = DistinctOptions::new().key_selector(move |n: &i32| n % modulus);
        let once = from_iter(items).distinct_until_changed_with(options);
        let twice = once.clone().distinct_until_changed_with(options);

        prop_assert_eq!(once.to_vec().unwrap(), twice.to_vec().unwrap());
    }

    #[test]
    fn test_max_is_the_scanned_maximum(items in prop::collection::vec(-1.0e9f64..1.0e9, 1..64)) {
        let expected = items.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(from_iter(items).max(), Ok(expected));
    }

    #[test]
    fn test_max_of_nothing_is_empty(offset in any::<i16>()) {
        let seq = empty::<&str, ()>();
        prop_assert_eq!(seq.max_by(|s| s.len() as f64 + f64::from(offset)), Err(SeqError::Empty));
    }

    #[test]
    fn test_sequence_equal_is_reflexive(items in prop::collection::vec(any::<i64>(), 0..32)) {
        let seq = from_iter(items);
        prop_assert_eq!(seq.sequence_equal(&seq), Ok(true));
    }

    #[test]
    fn test_sequence_equal_rejects_different_lengths(
        items in prop::collection::vec(any::<u16>(), 0..32),
        extra in prop::collection::vec(any::<u16>(), 1..8),
    ) {
        let longer: Vec<_> = items.iter().chain(&extra).copied().collect();
        let shorter = from_iter(items);
        let longer = from_iter(longer);

        prop_assert_eq!(shorter.sequence_equal(&longer), Ok(false));
        prop_assert_eq!(longer.sequence_equal(&shorter), Ok(false));
    }

    #[test]
    fn test_async_agrees_with_sync(
        a in prop::collection::vec(0u8..3, 0..24),
        b in prop::collection::vec(0u8..3, 0..24),
    ) {
        let (sa, sb) = (from_iter(a), from_iter(b));
        let (aa, ab) = (sa.clone().into_async(), sb.clone().into_async());

        prop_assert_eq!(
            block_on(aa.clone().distinct_until_changed().to_vec()),
            sa.clone().distinct_until_changed().to_vec()
        );
        prop_assert_eq!(block_on(aa.max()), sa.max());
        prop_assert_eq!(block_on(aa.sequence_equal(&ab)), sa.sequence_equal(&sb));
    }
}
