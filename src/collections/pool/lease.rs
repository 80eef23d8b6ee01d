use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

use super::ScratchPool;

/// A Vec borrowed from a [`ScratchPool`], which is returned to the pool when dropped.
///
/// The contents of a Lease are never persisted: they are cleared on return, and the next lease
/// starts out empty.
pub struct Lease<'a, T> {
    pub(crate) pool: &'a ScratchPool<T>,
    pub(crate) buf: Vec<T>,
}

impl<T> Lease<'_, T> {
    /// Keeps the leased Vec instead of returning it to the pool.
    ///
    /// # Examples
    /// ```
    /// # use toolbox_collections::collections::pool::ScratchPool;
    /// let pool = ScratchPool::new();
    /// let mut lease = pool.lease();
    /// lease.push("kept");
    ///
    /// let kept = lease.detach();
    /// assert_eq!(kept, ["kept"]);
    /// assert_eq!(pool.idle(), 0);
    /// ```
    pub fn detach(mut self) -> Vec<T> {
        // Leaves an unallocated Vec behind, which the pool won't keep.
        mem::take(&mut self.buf)
    }
}

impl<T> Deref for Lease<'_, T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<T> DerefMut for Lease<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl<T> Drop for Lease<'_, T> {
    fn drop(&mut self) {
        self.pool.restore(mem::take(&mut self.buf));
    }
}

impl<T: Debug> Debug for Lease<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Lease").field(&self.buf).finish()
    }
}
