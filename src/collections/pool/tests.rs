#![cfg(test)]

use super::*;
use crate::util::drop::CountedDrop;

#[test]
fn test_allocation_reuse() {
    let pool = ScratchPool::new();

    let mut lease = pool.lease();
    lease.extend(0_u64..100);
    let ptr = lease.as_ptr();
    let cap = lease.capacity();
    drop(lease);
    assert_eq!(pool.idle(), 1, "A dropped lease should return its allocation.");

    let lease = pool.lease();
    assert!(lease.is_empty(), "A reused allocation should be cleared.");
    assert_eq!(lease.as_ptr(), ptr, "The returned allocation should be reused.");
    assert_eq!(lease.capacity(), cap);
    assert_eq!(pool.idle(), 0);
}

#[test]
fn test_concurrent_leases() {
    let pool = ScratchPool::new();
    let mut a = pool.lease();
    let mut b = pool.lease();
    a.push('a');
    b.push('b');
    assert_eq!((a.as_slice(), b.as_slice()), (&['a'][..], &['b'][..]));

    drop(a);
    drop(b);
    assert_eq!(pool.idle(), 2);
}

#[test]
fn test_max_idle() {
    let pool = ScratchPool::with_max_idle(2);
    let leases: Vec<_> = (0..4)
        .map(|i| {
            let mut lease = pool.lease();
            lease.push(i);
            lease
        })
        .collect();

    drop(leases);
    assert_eq!(pool.idle(), 2, "Allocations beyond max_idle should be discarded.");

    let unpooled = ScratchPool::with_max_idle(0);
    unpooled.lease_filled(3).push(1_u8);
    assert_eq!(unpooled.idle(), 0);

    pool.shrink();
    assert_eq!(pool.idle(), 0);
}

#[test]
fn test_unused_lease_isnt_kept() {
    let pool: ScratchPool<u8> = ScratchPool::new();
    drop(pool.lease());
    assert_eq!(pool.idle(), 0, "An allocation that never grew shouldn't be kept.");
}

#[test]
fn test_lease_filled() {
    let pool = ScratchPool::new();
    let mut lease = pool.lease();
    lease.extend([7_i32; 10]);
    drop(lease);

    let filled = pool.lease_filled(4);
    assert_eq!(
        **filled,
        [0, 0, 0, 0],
        "A filled lease should only contain default values."
    );
}

#[test]
fn test_contents_dropped_on_return() {
    let counter = CountedDrop::new();
    let pool = ScratchPool::new();

    let mut lease = pool.lease();
    lease.extend(std::iter::repeat_with(|| counter.clone()).take(5));
    drop(lease);
    assert_eq!(counter.take(), 5, "Returning a lease should drop its contents.");

    let mut lease = pool.lease();
    lease.push(counter.clone());
    let detached = lease.detach();
    assert_eq!(counter.take(), 0, "Detaching shouldn't drop anything.");
    assert_eq!(pool.idle(), 0);

    drop(detached);
    assert_eq!(counter.take(), 1);
}
