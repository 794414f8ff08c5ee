//! Probe searches over the slot vector.
//!
//! Both searches walk the same triangular sequence from the key's home
//! slot: `h, h+1, h+3, h+6, ...` modulo the capacity. With a power-of-two
//! capacity that sequence is a permutation of all slots.

use crate::slot::{self, Slot};

/// Finds the slot an insert of `key` should write to.
///
/// Returns the slot holding `key` if it is live. Otherwise returns the
/// first tombstone on the probe path, or failing that the first empty
/// slot. Returns `None` only if the table holds no live `key` and has
/// neither tombstones nor empty slots, which the growth policy rules out.
pub fn find_slot_for_insert<V>(slots: &[Slot<V>], key: i64) -> Option<usize> {
    let capacity = slots.len();
    let mut hash = slot::base_hash(key, capacity);
    let mut first_tombstone = None;

    for step in 1..=capacity {
        match &slots[hash] {
            Slot::Empty => return first_tombstone.or(Some(hash)),
            Slot::Tombstone => {
                first_tombstone.get_or_insert(hash);
            }
            Slot::Occupied { key: k, .. } if *k == key => return Some(hash),
            Slot::Occupied { .. } => {}
        }
        hash = slot::next_probe(hash, step, capacity);
    }

    first_tombstone
}

/// Finds the slot holding a live entry for `key`.
///
/// Skips tombstones and other keys; gives up on the first empty slot or
/// after `capacity` probes.
pub fn find_slot_for_existing<V>(slots: &[Slot<V>], key: i64) -> Option<usize> {
    let capacity = slots.len();
    let mut hash = slot::base_hash(key, capacity);

    for step in 1..=capacity {
        match &slots[hash] {
            Slot::Empty => return None,
            s if s.holds(key) => return Some(hash),
            _ => {}
        }
        hash = slot::next_probe(hash, step, capacity);
    }

    None
}
