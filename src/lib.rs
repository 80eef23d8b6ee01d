//! A toolbox of single-threaded collection types for game-engine code.
//!
//! # Contents
//! - [`Heap`](collections::heap::Heap): a fixed-capacity max-heap whose elements track their own
//!   slot, allowing `O(log n)` re-prioritization and `O(1)` membership checks.
//! - [`CircularBuffer`](collections::circ::CircularBuffer): a fixed-capacity ring which overwrites
//!   its oldest (or newest) element instead of refusing a push.
//! - [`ArrayExtension`](collections::array::ArrayExtension): add, insert and remove helpers for
//!   boxed slices kept at exactly the length of their contents.
//! - [`ScratchPool`](collections::pool::ScratchPool): reusable temporary lists, handed out as
//!   scoped leases.
//!
//! # Error Handling
//! Misuse that the caller can reasonably recover from, such as inserting into a full heap or
//! extracting from an empty one, is reported through [`Result`]s with strongly typed errors. Each
//! error is a small struct implementing [`Error`](std::error::Error), and operations that can fail
//! in several ways return an enum over those structs. Indexing with `[]` panics on an out of
//! bounds index, as it does for the standard library's collections.
//!
//! # Logging
//! Rejected operations and notable internal events (such as a full buffer evicting an element)
//! are emitted through [`tracing`]. Installing a subscriber is left to the application.
//!
//! # Threading
//! None of these types synchronize internally. They are meant to be owned by a single thread. The
//! heap shares its elements through [`Rc`](std::rc::Rc), so it can't leave its thread at all, and
//! the pool hands out leases through a [`RefCell`](std::cell::RefCell), so it can't be shared.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
