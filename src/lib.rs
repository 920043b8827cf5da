//! # guardring - Guarded fixed-capacity ring buffer
//!
//! A FIFO ring buffer for resource-constrained code: the backing store is
//! allocated once, never resized, and ends in a guard slot that reveals
//! stray writes past its end.
//!
//! ## Design
//!
//! - One allocation of `capacity + 1` slots, released on drop
//! - Reject-on-full: `put` fails with [`Error::OutOfBounds`] rather than
//!   overwriting the oldest element
//! - `get` on an empty buffer fails with [`Error::NoData`]
//! - The last slot holds [`GUARD_SENTINEL`]; [`RingBuffer::verify_integrity`]
//!   polls it on demand
//! - Single-threaded: mutation requires `&mut self`, no internal locking
//!
//! ## Example
//!
//! ```
//! use guardring::{Error, RingBuffer};
//!
//! let mut rb: RingBuffer = RingBuffer::new(3).unwrap();
//!
//! rb.put(1).unwrap();
//! rb.put(2).unwrap();
//! assert_eq!(rb.get(), Ok(1));
//! rb.put(3).unwrap();
//! rb.put(4).unwrap();
//! assert_eq!(rb.put(5), Err(Error::OutOfBounds));
//!
//! assert_eq!(rb.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
//! assert!(rb.verify_integrity());
//! ```

#![warn(missing_docs)]

mod config;
mod element;
mod error;
mod ring_buffer;

pub use config::{Config, DEFAULT_CAPACITY};
pub use element::{Element, GUARD_SENTINEL};
pub use error::{Error, Result};
pub use ring_buffer::{Drain, Iter, RingBuffer, State};
