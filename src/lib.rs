//! Open-addressing hash map keyed by `i64`.
//!
//! Every entry lives directly in one flat slot vector. Collisions are
//! resolved by triangular probing (steps of 1, 2, 3, ...), which visits
//! every slot of a power-of-two table exactly once before repeating.
//!
//! # Key properties
//!
//! - **Tombstone deletion**: removed slots stay marked so other keys' probe
//!   chains remain intact; tombstones are reclaimed only by a rehash
//! - **Doubling growth**: capacity doubles once the live count reaches the
//!   load-factor threshold; the table never shrinks
//! - **Single-threaded**: no internal locking, mutation takes `&mut self`
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # Example
//!
//! ```
//! use long_key_map::LongKeyMap;
//!
//! let mut map = LongKeyMap::with_capacity_and_load_factor(4, 75)?;
//! map.put(0, "a");
//! map.put(4, "b");
//! map.put(8, "c");
//!
//! assert_eq!(map.capacity(), 8);
//! assert_eq!(map.get(4), Some(&"b"));
//! # Ok::<(), long_key_map::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod iter;
pub mod slot;

mod map;
mod ops;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, MAX_CAPACITY, MapConfig};
pub use error::{Error, Result};
pub use map::LongKeyMap;
