//! A module containing [`CircularBuffer`] and associated types.
//!
//! A CircularBuffer has a fixed capacity but never refuses a push. Pushing onto a full buffer
//! evicts the element at the opposite end, so the buffer always holds the most recently pushed
//! elements. This is useful for streaming through large amounts of data while only looking at a
//! small window of it at a time.

mod circular_buffer;
mod error;
mod iter;
mod tests;

pub use circular_buffer::*;
pub use error::*;
pub use iter::*;

#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, ZeroCapacityError};
