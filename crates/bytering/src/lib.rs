//! A fixed-capacity byte ring buffer for environments where dynamic
//! allocation is undesirable.
//!
//! The crate provides a single value type, [`RingBuffer`], backed by an
//! owned `N`-byte array with no heap allocation at all (`no_std`,
//! no `alloc`). It supports byte-wise and null-terminated string
//! enqueue/dequeue, non-destructive indexed inspection, and capacity
//! accounting. One array slot is reserved as a sentinel so that "empty"
//! and "full" stay distinguishable across wrap-around; the usable
//! capacity is therefore `N - 1` bytes.
//!
//! Every operation is synchronous and non-blocking. Insufficient space or
//! data is reported immediately as a [`RingError`]; nothing ever blocks,
//! retries, or logs.
//!
//! # Examples
//!
//! ```rust
//! use bytering::{RingBuffer, RingError};
//!
//! let mut ring: RingBuffer = RingBuffer::new();
//! ring.push_str("ping")?;
//!
//! let mut out = [0u8; 5];
//! ring.pop_str(4, &mut out)?;
//! assert_eq!(&out, b"ping\0");
//! # Ok::<(), RingError>(())
//! ```
#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod ring;


pub use error::RingError;
pub use ring::{DEFAULT_CAPACITY, RingBuffer};
