//! A module containing [`ScratchPool`] and its scoped [`Lease`] type.
//!
//! Temporary lists are often needed for the duration of a single function, (e.g. collecting
//! results of a spatial query) and allocating a fresh one every frame is wasteful. A ScratchPool
//! keeps the allocations of returned lists around so that later leases can reuse them.
//!
//! # Examples
//! ```
//! # use toolbox_collections::collections::pool::ScratchPool;
//! let pool = ScratchPool::new();
//!
//! let mut hits = pool.lease();
//! hits.extend([3_u32, 1, 2]);
//! hits.sort();
//! assert_eq!(&**hits, &[1, 2, 3]);
//! drop(hits);
//!
//! // The next lease reuses the returned allocation, but not its contents.
//! let hits = pool.lease();
//! assert!(hits.is_empty());
//! assert!(hits.capacity() >= 3);
//! ```

mod lease;
mod scratch_pool;
mod tests;

pub use lease::*;
pub use scratch_pool::*;
