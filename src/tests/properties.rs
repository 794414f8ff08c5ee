//! Model-based property tests against `std::collections::HashMap`.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::LongKeyMap;

#[derive(Debug, Clone)]
enum Op {
    Put(i64, u32),
    Remove(i64),
}

/// Narrow key range so probe chains collide and tombstones get reused.
fn clustered_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-64_i64..64, any::<u32>()).prop_map(|(k, v)| Op::Put(k, v)),
        2 => (-64_i64..64).prop_map(Op::Remove),
    ]
}

fn wide_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<i64>(), any::<u32>()).prop_map(|(k, v)| Op::Put(k, v)),
        1 => any::<i64>().prop_map(Op::Remove),
    ]
}

fn check_against_model(
    capacity: usize,
    load_factor: u8,
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut map = LongKeyMap::with_capacity_and_load_factor(capacity, load_factor).unwrap();
    let mut model = HashMap::new();

    for op in ops {
        match op {
            Op::Put(k, v) => prop_assert_eq!(map.put(k, v), model.insert(k, v)),
            Op::Remove(k) => prop_assert_eq!(map.remove(k), model.remove(&k)),
        }
        prop_assert!(map.capacity().is_power_of_two());
        prop_assert_eq!(map.len(), model.len());
    }

    for (k, v) in &model {
        prop_assert_eq!(map.get(*k), Some(v), "key {}", k);
    }

    let mut values: Vec<u32> = map.values().into_iter().copied().collect();
    let mut expected: Vec<u32> = model.values().copied().collect();
    values.sort_unstable();
    expected.sort_unstable();
    prop_assert_eq!(values, expected);

    let keys: Vec<i64> = map.keys().collect();
    prop_assert_eq!(keys.len(), model.len());
    prop_assert!(keys.iter().all(|k| model.contains_key(k)));
    Ok(())
}

proptest! {
    #[test]
    fn clustered_keys_behave_like_hashmap(
        capacity_exp in 0_u32..6,
        load_factor in 1_u8..=100,
        ops in prop::collection::vec(clustered_op(), 0..300),
    ) {
        check_against_model(1_usize << capacity_exp, load_factor, ops)?;
    }

    #[test]
    fn arbitrary_keys_behave_like_hashmap(
        load_factor in 1_u8..=100,
        ops in prop::collection::vec(wide_op(), 0..300),
    ) {
        check_against_model(8, load_factor, ops)?;
    }
}
