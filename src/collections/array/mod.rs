//! Helpers for boxed slices which are always kept at exactly the length of their contents.
//!
//! A `Box<[T]>` has no spare capacity, so every helper here reallocates. They are intended for
//! small arrays that change rarely and are read often, where the memory saved by not keeping
//! spare capacity matters more than the cost of the occasional reallocation.

mod extension;
mod tests;

pub use extension::*;

#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
