//! The ring buffer implementation.
//!
//! Index convention: `front` names the slot immediately *before* the
//! oldest stored byte and `rear` the slot of the newest, both advanced
//! modulo `N`. `front == rear` therefore always means empty, and the slot
//! at `front` is never a valid data slot; that reserved sentinel is what
//! keeps "empty" and "full" distinguishable, at the cost of one byte of
//! capacity.

use crate::error::RingError;

/// Capacity used when the const parameter of [`RingBuffer`] is left at its
/// default.
pub const DEFAULT_CAPACITY: usize = 50;

/// A fixed-capacity byte ring buffer.
///
/// The buffer owns an `N`-byte backing array and two indices delimiting
/// the occupied region. One slot stays reserved as a sentinel, so the
/// usable capacity is `N - 1` bytes, never `N`.
///
/// All operations run to completion without suspension: insufficient
/// space or data is reported immediately as a [`RingError`], never
/// awaited. The type is not synchronized; a single logical owner is
/// assumed to perform all reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingBuffer<const N: usize = DEFAULT_CAPACITY> {
    data: [u8; N],
    front: usize,
    rear: usize,
}

impl<const N: usize> RingBuffer<N> {
    /// Creates an empty buffer with zeroed storage.
    ///
    /// `N` must be at least 2: one data slot plus the reserved sentinel
    /// slot. Smaller capacities fail to compile.
    #[must_use]
    pub const fn new() -> Self {
        const {
            assert!(N >= 2, "ring buffer capacity must be at least 2");
        }
        Self {
            data: [0; N],
            front: 0,
            rear: 0,
        }
    }

    /// Discards all contents, returning the buffer to its initial state.
    pub fn reset(&mut self) {
        self.data = [0; N];
        self.front = 0;
        self.rear = 0;
    }

    /// Total slot count of the backing array. The usable capacity is one
    /// less than this.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if no bytes are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    /// Returns `true` if the usable capacity of `N - 1` bytes is
    /// exhausted.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        (self.rear + 1) % N == self.front
    }

    /// Number of stored, unread bytes.
    #[must_use]
    pub const fn used_space(&self) -> usize {
        if self.rear >= self.front {
            self.rear - self.front
        } else {
            // rear has wrapped back past the start
            N - (self.front - self.rear)
        }
    }

    /// Number of bytes that can still be added before [`push_byte`]
    /// reports [`RingError::Full`].
    ///
    /// Always equals `N - 1 - used_space()`.
    ///
    /// [`push_byte`]: Self::push_byte
    #[must_use]
    pub const fn available_space(&self) -> usize {
        if self.front > self.rear {
            // wrapped: the gap between rear and front, minus the sentinel
            self.front - self.rear - 1
        } else {
            N - (self.rear - self.front + 1)
        }
    }

    /// Inserts one byte.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::Full`] if the buffer is full; the buffer is
    /// unchanged.
    pub fn push_byte(&mut self, byte: u8) -> Result<(), RingError> {
        if self.is_full() {
            return Err(RingError::Full);
        }
        self.rear = (self.rear + 1) % N;
        self.data[self.rear] = byte;
        Ok(())
    }

    /// Removes and returns the oldest stored byte.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::Empty`] if no bytes are stored.
    pub fn pop_byte(&mut self) -> Result<u8, RingError> {
        if self.is_empty() {
            return Err(RingError::Empty);
        }
        self.front = (self.front + 1) % N;
        Ok(self.data[self.front])
    }

    /// Inserts the bytes of `s` followed by one terminator byte (0), so a
    /// fixed-count read of the same length recovers a valid
    /// null-terminated string.
    ///
    /// The space check happens once, up front: on failure no bytes are
    /// written at all.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::Overflow`] if `s.len() + 1` exceeds
    /// [`available_space`]; the buffer is unchanged.
    ///
    /// [`available_space`]: Self::available_space
    pub fn push_str(&mut self, s: &str) -> Result<(), RingError> {
        if self.available_space() < s.len() + 1 {
            return Err(RingError::Overflow);
        }
        for &byte in s.as_bytes() {
            self.push_byte(byte)?;
        }
        self.push_byte(0)
    }

    /// Removes exactly `length` bytes, oldest first, into `dest`, then
    /// writes a terminator byte (0) at `dest[length]`.
    ///
    /// `length` is caller-chosen and independent of any terminator stored
    /// in the buffer: this is a fixed-count read, not a scan for a
    /// terminator, so stored strings with embedded or missing terminator
    /// bytes behave predictably.
    ///
    /// # Errors
    ///
    /// - [`RingError::DestinationTooSmall`] if `dest` cannot hold
    ///   `length + 1` bytes.
    /// - [`RingError::OutOfRange`] if fewer than `length` bytes are
    ///   stored.
    ///
    /// Both checks run before any byte moves; on failure the buffer and
    /// `dest` are unchanged.
    pub fn pop_str(&mut self, length: usize, dest: &mut [u8]) -> Result<(), RingError> {
        if dest.len() <= length {
            return Err(RingError::DestinationTooSmall);
        }
        if self.used_space() < length {
            return Err(RingError::OutOfRange);
        }
        for slot in dest.iter_mut().take(length) {
            *slot = self.pop_byte()?;
        }
        dest[length] = 0;
        Ok(())
    }

    /// Returns the byte at logical offset `index` from the oldest stored
    /// byte without removing anything (`index = 0` is the oldest).
    ///
    /// # Errors
    ///
    /// Returns [`RingError::OutOfRange`] if `index` is at or past
    /// [`used_space`](Self::used_space).
    pub fn peek(&self, index: usize) -> Result<u8, RingError> {
        if index >= self.used_space() {
            return Err(RingError::OutOfRange);
        }
        Ok(self.data[(self.front + index + 1) % N])
    }

    /// Iterates over the stored bytes, oldest to newest, without removing
    /// them.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.used_space()).map(move |offset| self.data[(self.front + offset + 1) % N])
    }
}

impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
