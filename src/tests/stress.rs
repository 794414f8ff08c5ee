use crate::LongKeyMap;

/// 10 000 entries: insert all, verify all, remove all.
#[test]
fn ten_thousand_entries() {
    let mut map = LongKeyMap::new();
    for i in 0_i64..10_000 {
        map.put(i, i * 3);
    }
    assert_eq!(map.len(), 10_000);
    assert!(map.capacity().is_power_of_two());

    for i in 0_i64..10_000 {
        assert_eq!(map.get(i), Some(&(i * 3)), "missing key {i}");
    }

    for i in 0_i64..10_000 {
        assert!(map.remove(i).is_some(), "failed to remove key {i}");
    }
    assert!(map.is_empty());
    assert_eq!(map.tombstones(), 10_000);
}

/// Keys that are multiples of the capacity all share home slot 0.
#[test]
fn same_home_slot() {
    let mut map = LongKeyMap::with_capacity(1024).unwrap();
    for i in 0_i64..300 {
        map.put(i << 20, i);
    }
    assert_eq!(map.len(), 300);
    for i in 0_i64..300 {
        assert_eq!(map.get(i << 20), Some(&i));
    }
}

/// Negative and positive keys with equal magnitude share a home slot.
#[test]
fn mirrored_keys() {
    let mut map = LongKeyMap::with_capacity(16).unwrap();
    for i in 1_i64..500 {
        map.put(i, i);
        map.put(-i, -i);
    }
    assert_eq!(map.len(), 998);
    for i in 1_i64..500 {
        assert_eq!(map.get(i), Some(&i));
        assert_eq!(map.get(-i), Some(&-i));
    }
}

/// Put + overwrite + remove interleaved, with tombstone churn.
#[test]
fn interleaved_operations() {
    let mut map = LongKeyMap::with_capacity(64).unwrap();
    for i in 0_i64..200 {
        map.put(i, i);
    }
    // Overwrite even keys.
    for i in (0_i64..200).step_by(2) {
        map.put(i, i + 1000);
    }
    // Remove odd keys.
    for i in (1_i64..200).step_by(2) {
        assert!(map.remove(i).is_some());
    }
    assert_eq!(map.len(), 100);
    for i in (0_i64..200).step_by(2) {
        assert_eq!(map.get(i), Some(&(i + 1000)));
    }

    // Churn: remove and reinsert without growing.
    let capacity = map.capacity();
    for round in 0_i64..20 {
        for i in (0_i64..200).step_by(2) {
            map.remove(i);
            map.put(i, i + round);
        }
    }
    assert_eq!(map.capacity(), capacity);
    assert_eq!(map.len(), 100);
    assert_eq!(map.values().len(), 100);
    for i in (0_i64..200).step_by(2) {
        assert_eq!(map.get(i), Some(&(i + 19)));
    }
}
