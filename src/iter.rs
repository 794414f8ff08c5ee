//! Iterator types for [`LongKeyMap`](crate::LongKeyMap).

use std::iter::FusedIterator;
use std::slice;

use crate::slot::Slot;

/// Iterator over `(key, &value)` pairs in ascending slot order.
pub struct Iter<'a, V> {
    slots: slice::Iter<'a, Slot<V>>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    /// Creates an iterator over `slots`, which hold exactly `live` entries.
    pub fn new(slots: &'a [Slot<V>], live: usize) -> Self {
        Self {
            slots: slots.iter(),
            remaining: live,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.slots.by_ref().find_map(Slot::entry)?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

/// Iterator over live keys in ascending slot order.
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Keys<'a, V> {
    /// Wraps an entry iterator.
    pub const fn new(inner: Iter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<V> Iterator for Keys<'_, V> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

impl<V> FusedIterator for Keys<'_, V> {}
