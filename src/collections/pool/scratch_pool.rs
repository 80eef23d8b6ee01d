use std::cell::RefCell;
use std::fmt::{self, Debug, Formatter};

use tracing::{debug, trace};

use super::Lease;

const DEFAULT_MAX_IDLE: usize = 8;

/// A pool of reusable [`Vec`] allocations, handed out as scoped [`Lease`]s.
///
/// Any number of leases can be alive at once. When a lease is dropped, its Vec is cleared and
/// returned to the pool, unless the pool already holds `max_idle` idle Vecs.
///
/// A ScratchPool is intended to be owned by a single thread, and as such isn't [`Sync`].
pub struct ScratchPool<T> {
    pub(crate) idle: RefCell<Vec<Vec<T>>>,
    pub(crate) max_idle: usize,
}

impl<T> ScratchPool<T> {
    /// Creates an empty pool which keeps up to 8 idle allocations.
    pub const fn new() -> ScratchPool<T> {
        Self::with_max_idle(DEFAULT_MAX_IDLE)
    }

    /// Creates an empty pool which keeps up to `max_idle` idle allocations. With a `max_idle` of
    /// 0, every lease allocates anew.
    pub const fn with_max_idle(max_idle: usize) -> ScratchPool<T> {
        ScratchPool {
            idle: RefCell::new(Vec::new()),
            max_idle,
        }
    }

    /// Returns the number of allocations waiting to be reused.
    pub fn idle(&self) -> usize {
        self.idle.borrow().len()
    }

    pub const fn max_idle(&self) -> usize {
        self.max_idle
    }

    /// Leases an empty Vec, reusing an idle allocation if there is one.
    pub fn lease(&self) -> Lease<'_, T> {
        let reused = self.idle.borrow_mut().pop();

        let buf = match reused {
            Some(buf) => {
                trace!(cap = buf.capacity(), "reused scratch allocation");
                buf
            }
            None => {
                debug!(idle = 0, "allocated new scratch buffer");
                Vec::new()
            }
        };

        Lease { pool: self, buf }
    }

    /// Leases a Vec containing `len` default values.
    ///
    /// # Examples
    /// ```
    /// # use toolbox_collections::collections::pool::ScratchPool;
    /// let pool = ScratchPool::new();
    /// let mut weights = pool.lease_filled(4);
    /// weights[2] = 1.5_f32;
    /// assert_eq!(&**weights, &[0.0, 0.0, 1.5, 0.0]);
    /// ```
    pub fn lease_filled(&self, len: usize) -> Lease<'_, T>
    where
        T: Clone + Default,
    {
        let mut lease = self.lease();
        lease.resize(len, T::default());
        lease
    }

    /// Drops all idle allocations.
    pub fn shrink(&self) {
        let mut idle = self.idle.borrow_mut();
        trace!(count = idle.len(), "dropped idle scratch allocations");
        idle.clear();
    }

    /// Takes back the allocation of a finished lease.
    pub(crate) fn restore(&self, mut buf: Vec<T>) {
        // Nothing worth keeping.
        if buf.capacity() == 0 {
            return;
        }

        buf.clear();

        let mut idle = self.idle.borrow_mut();
        if idle.len() >= self.max_idle {
            debug!(
                max_idle = self.max_idle,
                cap = buf.capacity(),
                "discarded scratch allocation returned to a full pool"
            );
            return;
        }

        idle.push(buf);
    }
}

impl<T> Default for ScratchPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for ScratchPool<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScratchPool")
            .field("idle", &self.idle())
            .field("max_idle", &self.max_idle)
            .finish()
    }
}
