use std::mem;

use tracing::debug;

use crate::util::error::IndexOutOfBounds;

/// Resizing operations for boxed slices. Each successful modification reallocates the slice to
/// exactly its new length.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the slice.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_element` | `O(n)` |
/// | `insert_element` | `O(n)` |
/// | `remove_element` | `O(n)` |
/// | `index_of` | `O(n)` |
/// | `contains_element` | `O(n)` |
pub trait ArrayExtension<T> {
    /// Appends `element` to the end of the array.
    ///
    /// # Examples
    /// ```
    /// # use toolbox_collections::collections::array::ArrayExtension;
    /// let mut arr: Box<[u8]> = Box::new([1, 2]);
    /// arr.add_element(3);
    /// assert_eq!(&*arr, &[1, 2, 3]);
    /// ```
    fn add_element(&mut self, element: T);

    /// Inserts `element` at `index`, shifting all following elements back. An `index` equal to
    /// the length appends.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` is greater than the length, leaving the array
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// # use toolbox_collections::collections::array::ArrayExtension;
    /// let mut arr: Box<[char]> = Box::new(['a', 'c']);
    /// arr.insert_element('b', 1).unwrap();
    /// assert_eq!(&*arr, &['a', 'b', 'c']);
    /// assert!(arr.insert_element('z', 5).is_err());
    /// ```
    fn insert_element(&mut self, element: T, index: usize) -> Result<(), IndexOutOfBounds>;

    /// Removes the first element equal to `element`, returning whether one was found.
    fn remove_element(&mut self, element: &T) -> bool
    where
        T: PartialEq;

    /// Returns the index of the first element equal to `element`.
    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns true if any element is equal to `element`.
    fn contains_element(&self, element: &T) -> bool
    where
        T: PartialEq;
}

impl<T> ArrayExtension<T> for Box<[T]> {
    fn add_element(&mut self, element: T) {
        let mut vec = take_vec(self, 1);
        vec.push(element);
        *self = vec.into_boxed_slice();
    }

    fn insert_element(&mut self, element: T, index: usize) -> Result<(), IndexOutOfBounds> {
        if index > self.len() {
            debug!(index, len = self.len(), "rejected out of bounds array insertion");
            return Err(IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }

        let mut vec = take_vec(self, 1);
        vec.insert(index, element);
        *self = vec.into_boxed_slice();
        Ok(())
    }

    fn remove_element(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(index) = self.index_of(element) else {
            return false;
        };

        let mut vec = take_vec(self, 0);
        vec.remove(index);
        *self = vec.into_boxed_slice();
        true
    }

    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == element)
    }

    fn contains_element(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }
}

/// Moves the contents of `array` into a Vec with room for exactly `extra` more elements, leaving
/// an empty array behind.
fn take_vec<T>(array: &mut Box<[T]>, extra: usize) -> Vec<T> {
    let mut vec = mem::take(array).into_vec();
    vec.reserve_exact(extra);
    vec
}
