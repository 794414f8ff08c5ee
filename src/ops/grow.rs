//! Growth: doubles the slot vector and rehashes live entries.

use std::mem;

use crate::ops::probe::find_slot_for_insert;
use crate::slot::Slot;

/// Replaces `slots` with a vector of `new_capacity` empty slots and
/// reinserts every live entry in ascending old-slot order.
///
/// Tombstones are dropped. Does not re-check the threshold: the caller
/// sized the new table so it always has room.
pub fn rehash_into<V>(slots: &mut Vec<Slot<V>>, new_capacity: usize) {
    debug_assert!(new_capacity.is_power_of_two());
    let old = mem::replace(slots, empty_slots(new_capacity));

    for entry in old {
        if let Slot::Occupied { key, value } = entry {
            // Fresh table: every key is distinct and a free slot exists.
            if let Some(idx) = find_slot_for_insert(slots, key) {
                slots[idx] = Slot::Occupied { key, value };
            }
        }
    }
}

/// Allocates `capacity` empty slots.
pub fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || Slot::Empty);
    slots
}
