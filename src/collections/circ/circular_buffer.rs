use std::fmt::{self, Debug, Formatter};
use std::iter;
use std::ops::{Index, IndexMut};

use tracing::debug;

use super::{EmptyBufferError, Iter};
use crate::util::error::{IndexOutOfBounds, ZeroCapacityError};
use crate::util::result::ResultExtension;

const DEFAULT_CAP: usize = 5;

/// A fixed-capacity double-ended queue which overwrites the element at the opposite end when
/// pushed while full.
///
/// Elements are indexed logically, with index 0 being the oldest (front) element and `len - 1`
/// being the newest (back).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the CircularBuffer.
/// - `c`: The capacity of the CircularBuffer.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(1)` |
/// | `clear` | `O(c)` |
/// | `contains` | `O(n)` |
pub struct CircularBuffer<T> {
    pub(crate) buf: Box<[Option<T>]>,
    pub(crate) head: usize,
    pub(crate) len: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates an empty CircularBuffer with the default capacity of 5.
    ///
    /// # Examples
    /// ```
    /// # use toolbox_collections::collections::circ::CircularBuffer;
    /// let buffer: CircularBuffer<u8> = CircularBuffer::new();
    /// assert_eq!(buffer.cap(), 5);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> CircularBuffer<T> {
        CircularBuffer {
            buf: Self::empty_slots(DEFAULT_CAP),
            head: 0,
            len: 0,
        }
    }

    /// Creates an empty CircularBuffer holding at most `cap` elements.
    ///
    /// # Errors
    /// Returns [`ZeroCapacityError`] if `cap` is 0.
    pub fn with_cap(cap: usize) -> Result<CircularBuffer<T>, ZeroCapacityError> {
        if cap == 0 {
            return Err(ZeroCapacityError);
        }

        Ok(CircularBuffer {
            buf: Self::empty_slots(cap),
            head: 0,
            len: 0,
        })
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    /// Pushes `value` onto the back of the buffer, making it the newest element. If the buffer was
    /// full, the oldest element is evicted and returned.
    ///
    /// # Examples
    /// ```
    /// # use toolbox_collections::collections::circ::CircularBuffer;
    /// let mut buffer = CircularBuffer::with_cap(3).unwrap();
    /// for i in 0..3 {
    ///     assert_eq!(buffer.push_back(i), None);
    /// }
    /// assert_eq!(buffer.push_back(3), Some(0));
    /// assert!(buffer.iter().eq(&[1, 2, 3]));
    /// ```
    pub fn push_back(&mut self, value: T) -> Option<T> {
        if self.is_full() {
            let evicted = self.buf[self.head].replace(value);
            self.head = self.wrap_add(self.head, 1);
            debug!(cap = self.cap(), "evicted oldest element of full circular buffer");
            evicted
        } else {
            let index = self.physical(self.len);
            self.buf[index] = Some(value);
            self.len += 1;
            None
        }
    }

    /// Pushes `value` onto the front of the buffer, making it the oldest element. If the buffer
    /// was full, the newest element is evicted and returned.
    ///
    /// # Examples
    /// ```
    /// # use toolbox_collections::collections::circ::CircularBuffer;
    /// let mut buffer = CircularBuffer::with_cap(2).unwrap();
    /// buffer.push_back('b');
    /// buffer.push_front('a');
    /// assert_eq!(buffer.push_front('z'), Some('b'));
    /// assert!(buffer.iter().eq(&['z', 'a']));
    /// ```
    pub fn push_front(&mut self, value: T) -> Option<T> {
        // The slot before head is either empty or, when full, holds the newest element.
        self.head = self.wrap_add(self.head, self.cap() - 1);
        let evicted = self.buf[self.head].replace(value);

        if self.is_full() {
            debug!(cap = self.cap(), "evicted newest element of full circular buffer");
        } else {
            self.len += 1;
        }

        evicted
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    /// Returns [`EmptyBufferError`] if the buffer is empty.
    pub fn pop_front(&mut self) -> Result<T, EmptyBufferError> {
        if self.is_empty() {
            debug!("rejected pop from empty circular buffer");
            return Err(EmptyBufferError);
        }

        let value = self.buf[self.head].take();
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
        value.ok_or(EmptyBufferError)
    }

    /// Removes and returns the newest element, or None if the buffer is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let index = self.physical(self.len - 1);
        self.len -= 1;
        self.buf[index].take()
    }

    /// Returns the oldest element.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the newest element.
    pub fn back(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Returns the element `index` places from the front, or None if out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.buf[self.physical(index)].as_ref()
    }

    /// Returns the element `index` places from the front mutably, or None if out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let physical = self.physical(index);
        self.buf[physical].as_mut()
    }

    /// Drops all elements, keeping the allocation.
    pub fn clear(&mut self) {
        for slot in self.buf.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Returns true if any element is equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Returns an iterator over references to all elements, from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            front: 0,
            back: self.len,
        }
    }

    /// Converts a logical index into an index of the underlying storage.
    pub(crate) fn physical(&self, index: usize) -> usize {
        self.wrap_add(self.head, index)
    }

    pub(crate) fn wrap_add(&self, index: usize, offset: usize) -> usize {
        (index + offset) % self.cap()
    }

    fn empty_slots(cap: usize) -> Box<[Option<T>]> {
        iter::repeat_with(|| None).take(cap).collect()
    }
}

impl<T> Default for CircularBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for CircularBuffer<T> {
    type Output = T;

    /// # Panics
    /// Panics if the provided index is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
            .ok_or(IndexOutOfBounds { index, len: self.len })
            .throw()
    }
}

impl<T> IndexMut<usize> for CircularBuffer<T> {
    /// # Panics
    /// Panics if the provided index is out of bounds.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;
        self.get_mut(index)
            .ok_or(IndexOutOfBounds { index, len })
            .throw()
    }
}

impl<T> Extend<T> for CircularBuffer<T> {
    /// Pushes every item onto the back, evicting the oldest elements as required.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for CircularBuffer<T> {
    /// Creates a CircularBuffer with capacity equal to the number of items, (or 1 if there are
    /// none) filled with all items.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let slots: Box<[Option<T>]> = iter.into_iter().map(Some).collect();

        if slots.is_empty() {
            return CircularBuffer {
                buf: Self::empty_slots(1),
                head: 0,
                len: 0,
            };
        }

        CircularBuffer {
            len: slots.len(),
            buf: slots,
            head: 0,
        }
    }
}

impl<T: Clone> Clone for CircularBuffer<T> {
    fn clone(&self) -> Self {
        CircularBuffer {
            buf: self.buf.clone(),
            head: self.head,
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for CircularBuffer<T> {
    /// Compares the logical contents of two buffers, ignoring capacity and where in storage the
    /// elements happen to sit.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularBuffer<T> {}

impl<T: Debug> Debug for CircularBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularBuffer")
            .field("contents", &DebugContents(self))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

struct DebugContents<'a, T>(&'a CircularBuffer<T>);

impl<T: Debug> Debug for DebugContents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
