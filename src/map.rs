//! Single-threaded `i64`-keyed open-addressing map.

use std::fmt;
use std::mem;
use std::ops;

use crate::config::MapConfig;
use crate::error::{Error, Result};
use crate::iter::{Iter, Keys};
use crate::ops::grow::{empty_slots, rehash_into};
use crate::ops::probe::{find_slot_for_existing, find_slot_for_insert};
use crate::slot::{self, Slot};

/// Open-addressing hash map from `i64` keys to values of type `V`.
///
/// Capacity is always a power of two. Once the number of live entries
/// reaches `capacity * load_factor / 100` the table doubles and every live
/// entry is rehashed; removed entries leave tombstones until then.
#[derive(Clone)]
pub struct LongKeyMap<V> {
    slots: Vec<Slot<V>>,
    len: usize,
    tombstones: usize,
    load_factor: u8,
    threshold: usize,
}

// ---------------------------------------------------------------------------
// Construction & accessors, no trait bounds
// ---------------------------------------------------------------------------

impl<V> LongKeyMap<V> {
    /// Creates an empty map with capacity 256 and load factor 60.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid(MapConfig::default())
    }

    /// Creates an empty map with the given capacity and load factor 60.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `capacity` is zero, not a
    /// power of two, or above [`MAX_CAPACITY`](crate::MAX_CAPACITY).
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(MapConfig::default().with_capacity(capacity))
    }

    /// Creates an empty map with the given capacity and load factor
    /// percentage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `load_factor` is outside
    /// `1..=100` or `capacity` is not a valid power of two.
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: u8) -> Result<Self> {
        Self::with_config(MapConfig::new(capacity, load_factor))
    }

    /// Creates an empty map from a config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the config does not
    /// [`validate`](MapConfig::validate).
    pub fn with_config(config: MapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: MapConfig) -> Self {
        let threshold = slot::resize_threshold(config.capacity, config.load_factor);
        tracing::debug!(
            capacity = config.capacity,
            load_factor = config.load_factor,
            threshold,
            "created LongKeyMap"
        );
        Self {
            slots: empty_slots(config.capacity),
            len: 0,
            tombstones: 0,
            load_factor: config.load_factor,
            threshold,
        }
    }

    /// Returns the number of live entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map holds no live entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current slot count. Always a power of two.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the load factor percentage.
    #[must_use]
    pub const fn load_factor(&self) -> u8 {
        self.load_factor
    }

    /// Returns the live-entry count at which the next insert grows the table.
    #[must_use]
    pub const fn resize_threshold(&self) -> usize {
        self.threshold
    }

    /// Returns the number of tombstoned slots awaiting the next rehash.
    #[must_use]
    pub const fn tombstones(&self) -> usize {
        self.tombstones
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: i64) -> Option<&V> {
        let idx = find_slot_for_existing(&self.slots, key)?;
        self.slots[idx].entry().map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        let idx = find_slot_for_existing(&self.slots, key)?;
        match &mut self.slots[idx] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Empty | Slot::Tombstone => None,
        }
    }

    /// Returns `true` if `key` has a live entry.
    #[must_use]
    pub fn contains_key(&self, key: i64) -> bool {
        find_slot_for_existing(&self.slots, key).is_some()
    }

    /// Returns a snapshot of every live value in ascending slot order.
    ///
    /// The order is neither insertion order nor key order.
    #[must_use]
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// Returns an iterator over `(key, &value)` in ascending slot order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.slots, self.len)
    }

    /// Returns an iterator over live keys in ascending slot order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(self.iter())
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Inserts `value` under `key`.
    ///
    /// Returns `None` if `key` had no live entry, or `Some(old_value)` if an
    /// existing value was replaced. Reaching the resize threshold doubles
    /// the capacity.
    pub fn put(&mut self, key: i64, value: V) -> Option<V> {
        let idx = loop {
            if let Some(idx) = find_slot_for_insert(&self.slots, key) {
                break idx;
            }
            // Only reachable if the table is saturated with live entries.
            self.grow();
        };

        let old = match mem::replace(&mut self.slots[idx], Slot::Occupied { key, value }) {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Tombstone => {
                self.tombstones -= 1;
                None
            }
            Slot::Empty => None,
        };
        tracing::trace!(key, slot = idx, replaced = old.is_some(), "put");

        if old.is_none() {
            self.len += 1;
            if self.len >= self.threshold {
                self.grow();
            }
        }
        old
    }

    /// Inserts a value that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `value` is `None`; the map is
    /// left untouched.
    pub fn try_put(&mut self, key: i64, value: Option<V>) -> Result<Option<V>> {
        let value = value
            .ok_or_else(|| Error::invalid_argument(format!("no value supplied for key {key}")))?;
        Ok(self.put(key, value))
    }

    /// Removes `key`, returning its value if it was live.
    ///
    /// The slot becomes a tombstone; capacity never shrinks.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        let idx = find_slot_for_existing(&self.slots, key)?;
        let Slot::Occupied { value, .. } = mem::replace(&mut self.slots[idx], Slot::Tombstone)
        else {
            unreachable!("existing-slot search returned a dead slot");
        };
        self.len -= 1;
        self.tombstones += 1;
        tracing::trace!(key, slot = idx, "remove");
        Some(value)
    }

    /// Doubles the capacity and rehashes live entries, dropping tombstones.
    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity * 2;
        rehash_into(&mut self.slots, new_capacity);
        self.tombstones = 0;
        self.threshold = slot::resize_threshold(new_capacity, self.load_factor);
        tracing::debug!(
            old_capacity,
            new_capacity,
            live = self.len,
            threshold = self.threshold,
            "grew LongKeyMap"
        );
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<V> Default for LongKeyMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for LongKeyMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LongKeyMap")
            .field("len", &self.len)
            .field("capacity", &self.slots.len())
            .field("load_factor", &self.load_factor)
            .field("tombstones", &self.tombstones)
            .finish_non_exhaustive()
    }
}

impl<V> Extend<(i64, V)> for LongKeyMap<V> {
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<V> FromIterator<(i64, V)> for LongKeyMap<V> {
    fn from_iter<I: IntoIterator<Item = (i64, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<V> ops::Index<i64> for LongKeyMap<V> {
    type Output = V;

    fn index(&self, key: i64) -> &V {
        self.get(key).expect("key not found")
    }
}

impl<'a, V> IntoIterator for &'a LongKeyMap<V> {
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}
