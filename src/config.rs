//! Construction parameters.

use crate::error::{Error, Result};

/// Capacity used by [`LongKeyMap::new`](crate::LongKeyMap::new).
pub const DEFAULT_CAPACITY: usize = 256;

/// Load factor percentage used when none is given.
pub const DEFAULT_LOAD_FACTOR: u8 = 60;

/// Largest initial capacity accepted at construction (2⁴⁰ slots).
pub const MAX_CAPACITY: usize = 1 << 40;

/// Initial capacity and load factor of a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapConfig {
    /// Initial slot count. Must be a non-zero power of two.
    pub capacity: usize,
    /// Occupancy percentage (`1..=100`) at which the table doubles.
    pub load_factor: u8,
}

impl MapConfig {
    /// Creates a config from raw parts. Call [`validate`](Self::validate)
    /// before use, or hand it to [`LongKeyMap::with_config`](crate::LongKeyMap::with_config).
    #[must_use]
    pub const fn new(capacity: usize, load_factor: u8) -> Self {
        Self {
            capacity,
            load_factor,
        }
    }

    /// Returns a copy with the given capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns a copy with the given load factor.
    #[must_use]
    pub const fn with_load_factor(mut self, load_factor: u8) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks both parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the load factor is outside
    /// `1..=100`, or the capacity is zero, not a power of two, or above
    /// [`MAX_CAPACITY`].
    pub fn validate(&self) -> Result<()> {
        if self.load_factor == 0 || self.load_factor > 100 {
            return Err(Error::invalid_configuration(format!(
                "load factor must be in 1..=100, got {}",
                self.load_factor
            )));
        }
        if !self.capacity.is_power_of_two() {
            return Err(Error::invalid_configuration(format!(
                "capacity must be a positive power of two, got {}",
                self.capacity
            )));
        }
        if self.capacity > MAX_CAPACITY {
            return Err(Error::invalid_configuration(format!(
                "capacity {} exceeds maximum {MAX_CAPACITY}",
                self.capacity
            )));
        }
        Ok(())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR)
    }
}
