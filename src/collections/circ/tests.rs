#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

fn contents<T: Clone>(buffer: &CircularBuffer<T>) -> Vec<T> {
    buffer.iter().cloned().collect()
}

#[test]
fn test_zero_capacity() {
    assert_eq!(CircularBuffer::<u8>::with_cap(0).unwrap_err(), ZeroCapacityError);
}

#[test]
fn test_push_back_overwrites_oldest() {
    let mut buffer = CircularBuffer::with_cap(3).unwrap();
    let evicted: Vec<_> = (0..7).map(|i| buffer.push_back(i)).collect();

    assert_eq!(
        evicted,
        [None, None, None, Some(0), Some(1), Some(2), Some(3)],
        "Each push onto a full buffer should evict the oldest element."
    );
    assert_eq!(contents(&buffer), [4, 5, 6]);
    assert_eq!(buffer.front(), Some(&4));
    assert_eq!(buffer.back(), Some(&6));
    assert!(buffer.is_full());
}

#[test]
fn test_push_front() {
    let mut buffer = CircularBuffer::with_cap(3).unwrap();
    buffer.push_front(1);
    buffer.push_front(0);
    buffer.push_back(2);
    assert_eq!(contents(&buffer), [0, 1, 2]);

    assert_eq!(
        buffer.push_front(-1),
        Some(2),
        "Pushing onto the front of a full buffer should evict the newest element."
    );
    assert_eq!(contents(&buffer), [-1, 0, 1]);
    assert_eq!(buffer.len(), 3);
}

#[test]
fn test_pop() {
    let mut buffer: CircularBuffer<_> = "abcd".chars().collect();
    assert_eq!(buffer.cap(), 4);
    buffer.push_back('e');

    assert_eq!(buffer.pop_front(), Ok('b'));
    assert_eq!(buffer.pop_back(), Some('e'));
    assert_eq!(buffer.pop_front(), Ok('c'));
    assert_eq!(buffer.pop_front(), Ok('d'));
    assert_eq!(buffer.pop_front(), Err(EmptyBufferError));
    assert_eq!(buffer.pop_back(), None);
    assert!(buffer.front().is_none() && buffer.back().is_none());

    buffer.push_back('x');
    assert_eq!(
        contents(&buffer),
        ['x'],
        "The buffer should remain usable after a rejected pop."
    );
}

#[test]
fn test_wrapping_window() {
    let mut buffer = CircularBuffer::with_cap(4).unwrap();
    let mut expected = std::collections::VecDeque::new();

    for i in 0..50 {
        if i % 3 == 0 {
            assert_eq!(buffer.pop_front().ok(), expected.pop_front());
        }
        buffer.push_back(i);
        expected.push_back(i);
        if expected.len() > 4 {
            expected.pop_front();
        }

        assert!(
            buffer.iter().eq(expected.iter()),
            "The buffer should always hold the newest elements in order."
        );
        assert!(buffer.iter().rev().eq(expected.iter().rev()));
        assert_eq!(buffer.iter().len(), expected.len());
    }
}

#[test]
fn test_indexing() {
    let mut buffer = CircularBuffer::with_cap(3).unwrap();
    buffer.extend([10, 20, 30, 40]);

    assert_eq!(buffer[0], 20);
    assert_eq!(buffer[2], 40);
    buffer[1] *= 2;
    assert_eq!(buffer.get(1), Some(&60));
    assert_eq!(buffer.get(3), None);

    assert_panics!({
        let buffer: CircularBuffer<u8> = CircularBuffer::new();
        let value = buffer[0];
        assert_eq!(value, 0);
    });
}

#[test]
fn test_clear_and_contains() {
    let mut buffer = CircularBuffer::new();
    buffer.extend(["a", "b", "c"]);
    assert!(buffer.contains(&"b"));
    assert!(!buffer.contains(&"z"));

    buffer.clear();
    assert!(buffer.is_empty());
    assert!(!buffer.contains(&"b"), "Cleared elements shouldn't be found.");
    assert_eq!(buffer.cap(), 5, "Clearing should keep the capacity.");
    assert_eq!(buffer.iter().next(), None);
}

#[test]
fn test_equality_and_iteration() {
    let mut rotated = CircularBuffer::with_cap(3).unwrap();
    rotated.extend([0, 1, 2, 3]);
    let collected: CircularBuffer<_> = [1, 2, 3].into_iter().collect();

    assert_eq!(
        rotated, collected,
        "Buffers with the same elements in the same order should be equal."
    );
    assert_eq!(rotated.clone(), rotated);

    let owned: Vec<_> = rotated.into_iter().rev().collect();
    assert_eq!(owned, [3, 2, 1]);

    let empty: CircularBuffer<u8> = std::iter::empty().collect();
    assert_eq!(empty.cap(), 1);
    assert!(empty.is_empty());
}
