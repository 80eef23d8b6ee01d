//! Various general-purpose collection types.
//!
//! # Purpose
//! These are the small, self-contained containers that keep showing up in game code: a priority
//! queue for pathfinding whose entries can be re-prioritized in place, a ring buffer for streaming
//! data, exactly-sized boxed arrays and a pool of scratch lists.
//!
//! Each collection lives behind a Cargo feature of the same name, all of which are enabled by
//! default through `collections-all`.

#[cfg(feature = "array")]
pub mod array;
#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "pool")]
pub mod pool;
