//! Slot states and hash helpers.

use std::fmt;

/// One cell of the backing vector.
///
/// Transitions:
/// - `Empty → Occupied` on insert into an untouched slot
/// - `Occupied → Tombstone` on remove
/// - `Tombstone → Occupied` on insert reusing a deleted slot
/// - `Occupied → Occupied` on overwrite of the same key
///
/// A slot never goes from `Empty` straight to `Tombstone`.
#[derive(Clone, PartialEq, Eq)]
pub enum Slot<V> {
    /// Never written since the vector was allocated.
    Empty,
    /// Previously held an entry that was removed.
    Tombstone,
    /// Holds a live entry.
    Occupied {
        /// The key.
        key: i64,
        /// The value.
        value: V,
    },
}

impl<V> Slot<V> {
    /// Returns `true` for a live entry.
    #[inline]
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied { .. })
    }

    /// Returns `true` if the slot holds a live entry for `key`.
    #[inline]
    #[must_use]
    pub const fn holds(&self, key: i64) -> bool {
        matches!(self, Self::Occupied { key: k, .. } if *k == key)
    }

    /// Returns the live key and value, if any.
    #[inline]
    #[must_use]
    pub const fn entry(&self) -> Option<(i64, &V)> {
        match self {
            Self::Occupied { key, value } => Some((*key, value)),
            Self::Empty | Self::Tombstone => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Hash helpers
// ---------------------------------------------------------------------------

/// Home slot of `key` in a table of `capacity` slots.
///
/// `|key rem capacity|` with truncating remainder, so `-5` in a table of 4
/// lands on slot 1, not 3. Widened to `i128` so neither the remainder nor
/// its absolute value can overflow, `i64::MIN` included.
#[inline]
#[must_use]
pub fn base_hash(key: i64, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    let modulus = i128::try_from(capacity).unwrap_or(i128::MAX);
    let rem = (i128::from(key) % modulus).unsigned_abs();
    // rem < capacity, so it fits.
    usize::try_from(rem).unwrap_or(0)
}

/// Next probe position after `hash` at probe step `step` (1, 2, 3, ...).
#[inline]
#[must_use]
pub const fn next_probe(hash: usize, step: usize, capacity: usize) -> usize {
    (hash + step) & (capacity - 1)
}

/// Live-entry count at which a table of `capacity` slots grows.
///
/// `floor(capacity * load_factor / 100)`, split so the product cannot
/// overflow.
#[inline]
#[must_use]
pub fn resize_threshold(capacity: usize, load_factor: u8) -> usize {
    let lf = usize::from(load_factor);
    capacity / 100 * lf + capacity % 100 * lf / 100
}

// Manual Debug, no `V: Debug` bound.

impl<V> fmt::Debug for Slot<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Tombstone => f.write_str("Tombstone"),
            Self::Occupied { key, .. } => f
                .debug_struct("Occupied")
                .field("key", key)
                .finish_non_exhaustive(),
        }
    }
}
