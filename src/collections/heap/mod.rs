//! A module containing [`Heap`], an indexed binary max-heap, and its associated types.
//!
//! Unlike [`std::collections::BinaryHeap`], elements stored in a [`Heap`] remember their own
//! position (their slot) through the [`HeapItem`] trait. This allows an element whose priority
//! changed while it was inside the heap to be re-sorted in `O(log n)` using
//! [`Heap::reprioritize`] or [`Heap::deprioritize`], and allows [`Heap::contains`] to be an `O(1)`
//! identity check instead of a search.
//!
//! Elements are shared with the caller as [`HeapRef`]s. The caller keeps ownership of each element
//! and may mutate its key between heap operations; the heap only reads keys and writes slots.
//!
//! # Examples
//! ```
//! # use std::cmp::Ordering;
//! # use toolbox_collections::collections::heap::{Heap, HeapItem};
//! #[derive(Debug)]
//! struct Tile {
//!     score: u32,
//!     slot: usize,
//! }
//!
//! impl HeapItem for Tile {
//!     fn heap_index(&self) -> usize {
//!         self.slot
//!     }
//!
//!     fn set_heap_index(&mut self, index: usize) {
//!         self.slot = index;
//!     }
//! }
//!
//! impl Ord for Tile {
//!     fn cmp(&self, other: &Self) -> Ordering {
//!         self.score.cmp(&other.score)
//!     }
//! }
//! # impl PartialOrd for Tile {
//! #     fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
//! # }
//! # impl PartialEq for Tile {
//! #     fn eq(&self, other: &Self) -> bool { self.score == other.score }
//! # }
//! # impl Eq for Tile {}
//!
//! let mut heap = Heap::with_cap(4).unwrap();
//! let low = Tile { score: 1, slot: 0 }.into_ref();
//! let high = Tile { score: 7, slot: 0 }.into_ref();
//! heap.insert(&low).unwrap();
//! heap.insert(&high).unwrap();
//!
//! low.borrow_mut().score = 10;
//! heap.reprioritize(&low).unwrap();
//!
//! assert!(std::rc::Rc::ptr_eq(&heap.extract_max().unwrap(), &low));
//! ```

mod error;
mod heap;
mod item;

pub use error::*;
pub use heap::*;
pub use item::*;

#[doc(inline)]
pub use crate::util::error::ZeroCapacityError;
