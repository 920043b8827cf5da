use std::alloc::Layout;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::element::Element;
use crate::error::{Error, Result};

/// Occupancy of a ring buffer, derived from `count` alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No elements stored
    Empty,
    /// Some, but not all, slots occupied
    Partial,
    /// Every slot occupied; `put` is rejected
    Full,
}

/// Fixed-capacity FIFO ring buffer with a guard sentinel
///
/// - Single backing allocation of `capacity + 1` slots, made once
/// - Reject-on-full: `put` never overwrites unread data
/// - Last slot holds [`Element::GUARD`]; see [`RingBuffer::verify_integrity`]
pub struct RingBuffer<T: Element = u32> {
    /// Backing store, `capacity + 1` slots, guard in the last one
    values: NonNull<T>,
    /// Layout used for the backing allocation
    layout: Layout,
    /// Logical capacity (excludes the guard slot)
    capacity: usize,
    /// Number of unread elements
    count: usize,
    /// Slot the next `put` writes
    write_index: usize,
    /// Slot the next `get` reads
    read_index: usize,
    _owns: PhantomData<T>,
}

// The store holds plain integers and is only reachable through `&self`/`&mut self`.
unsafe impl<T: Element> Send for RingBuffer<T> {}
unsafe impl<T: Element> Sync for RingBuffer<T> {}

impl<T: Element> RingBuffer<T> {
    /// Create a new ring buffer holding up to `capacity` elements
    ///
    /// A capacity of 0 is accepted and yields a buffer that is both empty and
    /// full.
    ///
    /// # Returns
    /// * `Ok(RingBuffer)` on success
    /// * `Err(Error::AllocFailed)` if the backing store cannot be allocated
    pub fn new(capacity: usize) -> Result<Self> {
        let alloc_failed = Error::AllocFailed { capacity };

        let slots = capacity.checked_add(1).ok_or(alloc_failed)?;
        let layout = Layout::array::<T>(slots).map_err(|_| alloc_failed)?;

        // Safety: layout is never zero-sized (at least one slot of a non-ZST),
        // and every `Element` is valid when zeroed.
        let raw = unsafe { std::alloc::alloc_zeroed(layout) };
        let values = NonNull::new(raw.cast::<T>()).ok_or_else(|| {
            debug!(capacity, "ring buffer allocation failed");
            alloc_failed
        })?;

        let mut rb = RingBuffer {
            values,
            layout,
            capacity,
            count: 0,
            write_index: 0,
            read_index: 0,
            _owns: PhantomData,
        };
        rb.slots_mut()[capacity] = T::GUARD;

        debug!(capacity, bytes = layout.size(), "ring buffer allocated");
        Ok(rb)
    }

    /// Create a ring buffer from a [`Config`]
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.capacity)
    }

    /// Release the backing store
    ///
    /// Equivalent to dropping the buffer; provided so construction and
    /// destruction can be paired explicitly.
    pub fn destroy(self) {
        drop(self);
    }

    /// Whole backing store, guard slot included
    fn slots(&self) -> &[T] {
        // Safety: `values` points to `capacity + 1` initialized elements owned by self.
        unsafe { std::slice::from_raw_parts(self.values.as_ptr(), self.capacity + 1) }
    }

    fn slots_mut(&mut self) -> &mut [T] {
        // Safety: as in `slots`, and `&mut self` guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.values.as_ptr(), self.capacity + 1) }
    }

    /// Index following `index`, wrapping to 0 at `capacity`
    #[inline]
    fn advance(&self, index: usize) -> usize {
        let next = index + 1;
        if next >= self.capacity {
            0
        } else {
            next
        }
    }

    /// Check that the guard slot still holds its sentinel
    ///
    /// This is an O(1) check against stray writes past the end of the store.
    /// It does not validate `count` or the indices.
    pub fn verify_integrity(&self) -> bool {
        let guard = self.slots()[self.capacity];
        let intact = guard == T::GUARD;
        if !intact {
            warn!(
                capacity = self.capacity,
                found = ?guard,
                expected = ?T::GUARD,
                "ring buffer guard overwritten"
            );
        }
        intact
    }

    /// Returns `true` if no elements are stored
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    /// Get the capacity in elements
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of unread elements
    pub fn len(&self) -> usize {
        self.count
    }

    /// Number of free slots
    pub fn remaining(&self) -> usize {
        self.capacity - self.count
    }

    /// Current occupancy state
    ///
    /// A zero-capacity buffer always reports [`State::Empty`].
    pub fn state(&self) -> State {
        if self.is_empty() {
            State::Empty
        } else if self.is_full() {
            State::Full
        } else {
            State::Partial
        }
    }

    /// Guard value written into the last slot
    pub fn guard(&self) -> T {
        T::GUARD
    }

    /// Append `value` at the back
    ///
    /// # Returns
    /// * `Ok(())` if the value was stored
    /// * `Err(Error::OutOfBounds)` if the buffer is full; nothing is modified
    pub fn put(&mut self, value: T) -> Result<()> {
        if self.count >= self.capacity {
            trace!(capacity = self.capacity, "put rejected, buffer full");
            return Err(Error::OutOfBounds);
        }

        self.count += 1;
        let index = self.write_index;
        self.slots_mut()[index] = value;
        self.write_index = self.advance(index);
        Ok(())
    }

    /// Remove and return the oldest value
    ///
    /// # Returns
    /// * `Ok(value)` in insertion order
    /// * `Err(Error::NoData)` if the buffer is empty; nothing is modified
    pub fn get(&mut self) -> Result<T> {
        if self.count == 0 {
            trace!(capacity = self.capacity, "get rejected, buffer empty");
            return Err(Error::NoData);
        }

        let value = self.slots()[self.read_index];
        self.read_index = self.advance(self.read_index);
        self.count -= 1;
        Ok(value)
    }

    /// Oldest value without removing it
    pub fn peek(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots()[self.read_index])
        }
    }

    /// Discard all unread elements and rewind both indices
    ///
    /// Stored values are left in place; only the guard slot is guaranteed
    /// content.
    pub fn clear(&mut self) {
        self.count = 0;
        self.write_index = 0;
        self.read_index = 0;
    }

    /// Iterate over unread elements, oldest first, without removing them
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            pos: self.read_index,
            remaining: self.count,
        }
    }

    /// Remove unread elements, oldest first
    ///
    /// Elements not consumed before the iterator is dropped are discarded.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { ring: self }
    }

    /// Write `value` straight into the guard slot
    ///
    /// Simulates a stray write past the end of the store, which
    /// [`verify_integrity`](Self::verify_integrity) should then report.
    #[cfg(any(test, feature = "fault-injection"))]
    pub fn overwrite_guard(&mut self, value: T) {
        let capacity = self.capacity;
        self.slots_mut()[capacity] = value;
    }
}

impl<T: Element> std::fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity)
            .field("count", &self.count)
            .field("write_index", &self.write_index)
            .field("read_index", &self.read_index)
            .field("guard", &self.slots()[self.capacity])
            .finish()
    }
}

impl<T: Element> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        // Safety: `values` was allocated in `new` with exactly this layout.
        unsafe {
            std::alloc::dealloc(self.values.as_ptr().cast::<u8>(), self.layout);
        }
        debug!(capacity = self.capacity, "ring buffer released");
    }
}

impl<'a, T: Element> IntoIterator for &'a RingBuffer<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator returned by [`RingBuffer::iter`]
#[derive(Debug)]
pub struct Iter<'a, T: Element> {
    ring: &'a RingBuffer<T>,
    pos: usize,
    remaining: usize,
}

impl<T: Element> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.ring.slots()[self.pos];
        self.pos = self.ring.advance(self.pos);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Element> ExactSizeIterator for Iter<'_, T> {}
impl<T: Element> FusedIterator for Iter<'_, T> {}

/// Consuming iterator returned by [`RingBuffer::drain`]
#[derive(Debug)]
pub struct Drain<'a, T: Element> {
    ring: &'a mut RingBuffer<T>,
}

impl<T: Element> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.ring.get().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len(), Some(self.ring.len()))
    }
}

impl<T: Element> ExactSizeIterator for Drain<'_, T> {}
impl<T: Element> FusedIterator for Drain<'_, T> {}

impl<T: Element> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.ring.clear();
    }
}
