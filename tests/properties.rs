//! Property-based tests for `OrderedBuffer`.

use proptest::prelude::*;
use sortvec::OrderedBuffer;

// =============================================================================
// Test helpers
// =============================================================================

#[derive(Clone, Debug)]
enum Op {
    Insert(i16),
    /// Erase at a position given as a fraction of the current length
    Erase(f64),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i16>().prop_map(Op::Insert),
        1 => (0.0..1.0f64).prop_map(Op::Erase),
    ]
}

fn insert_all(values: &[i16]) -> OrderedBuffer<i16> {
    let mut buffer = OrderedBuffer::new();
    for &value in values {
        buffer.insert(value);
    }
    buffer
}

fn is_ascending(values: &[i16]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Inserting one by one gives the same sequence as a stable sort
    #[test]
    fn inserts_match_stable_sort(values in prop::collection::vec(-50i16..50, 0..200)) {
        let buffer = insert_all(&values);

        let mut reference = values.clone();
        reference.sort();

        prop_assert_eq!(buffer.as_slice(), reference.as_slice());
    }

    /// Any mix of inserts and erases keeps the buffer ascending
    #[test]
    fn order_survives_inserts_and_erases(ops in prop::collection::vec(arbitrary_op(), 1..150)) {
        let mut buffer = OrderedBuffer::new();

        for op in &ops {
            match *op {
                Op::Insert(value) => {
                    let len = buffer.len();
                    let position = buffer.insert(value);
                    prop_assert_eq!(buffer.len(), len + 1);
                    prop_assert_eq!(buffer[position], value);
                }
                Op::Erase(fraction) => {
                    if buffer.is_empty() {
                        continue;
                    }
                    let len = buffer.len();
                    let capacity = buffer.capacity();
                    let target = ((fraction * len as f64) as usize).min(len - 1);
                    let follower = buffer.get(target + 1).copied();

                    let position = buffer.erase(target);

                    prop_assert_eq!(position, target);
                    prop_assert_eq!(buffer.len(), len - 1);
                    prop_assert_eq!(buffer.capacity(), capacity);
                    prop_assert_eq!(buffer.get(position).copied(), follower);
                }
            }
            prop_assert!(is_ascending(buffer.as_slice()));
            prop_assert!(buffer.len() <= buffer.capacity());
        }
    }

    /// The same multiset inserted in two orders compares equal
    #[test]
    fn insertion_order_does_not_matter(
        values in prop::collection::vec(any::<i16>(), 0..100),
        seed in any::<u64>(),
    ) {
        let mut shuffled = values.clone();
        // Cheap deterministic shuffle driven by the seed
        let mut state = seed | 1;
        for i in (1..shuffled.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            shuffled.swap(i, (state % (i as u64 + 1)) as usize);
        }

        let a = insert_all(&values);
        let b = insert_all(&shuffled);
        prop_assert!(a == b);
        prop_assert_eq!(a.len(), b.len());
    }

    /// Bulk construction agrees with repeated insertion
    #[test]
    fn from_unsorted_matches_inserts(values in prop::collection::vec(any::<i16>(), 0..100)) {
        let bulk = OrderedBuffer::from_unsorted(values.iter().copied());
        prop_assert_eq!(bulk.capacity(), values.len());
        prop_assert_eq!(bulk, insert_all(&values));
    }

    /// find lands on an equal element when present, None otherwise
    #[test]
    fn find_is_correct(
        values in prop::collection::vec(-20i16..20, 0..60),
        probe in -25i16..25,
    ) {
        let buffer = insert_all(&values);
        match buffer.find(&probe) {
            Some(position) => prop_assert_eq!(buffer[position], probe),
            None => prop_assert!(!values.contains(&probe)),
        }
    }

    /// at fails exactly from len() onward
    #[test]
    fn at_is_bounds_checked(
        values in prop::collection::vec(any::<i16>(), 0..40),
        extra in 0usize..5,
    ) {
        let buffer = insert_all(&values);
        if !buffer.is_empty() {
            prop_assert!(buffer.at(buffer.len() - 1).is_ok());
        }
        prop_assert!(buffer.at(buffer.len() + extra).is_err());
    }

    /// Capacity only ever doubles, starting from 1
    #[test]
    fn capacity_is_power_of_two(values in prop::collection::vec(any::<i16>(), 1..300)) {
        let buffer = insert_all(&values);
        prop_assert!(buffer.capacity().is_power_of_two());
        prop_assert!(buffer.capacity() < 2 * buffer.len());
    }

    /// Moving out leaves an empty source and an identical destination
    #[test]
    fn take_transfers_everything(values in prop::collection::vec(any::<i16>(), 0..50)) {
        let mut source = insert_all(&values);
        let before = source.clone();
        let capacity = source.capacity();

        let destination = source.take();

        prop_assert!(source.is_empty());
        prop_assert_eq!(source.capacity(), 0);
        prop_assert_eq!(destination.capacity(), capacity);
        prop_assert_eq!(destination, before);
    }
}
