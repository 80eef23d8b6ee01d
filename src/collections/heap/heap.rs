use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;
use std::slice;

use tracing::{debug, trace};

use super::{
    CapacityExceededError, DuplicateItemError, EmptyHeapError, HeapItem, HeapRef, InsertError,
    PriorityDecreasedError, PriorityIncreasedError, StaleSlotError, UpdateError,
};
use crate::util::error::ZeroCapacityError;

/// A fixed-capacity binary max-heap over shared elements which track their own slot.
///
/// The maximum element (according to [`Ord`]) is always at the root. Each element's slot, exposed
/// through [`HeapItem`], equals its index in the heap's storage for as long as it is a member.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Heap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `insert` | `O(log n)` |
/// | `extract_max` | `O(log n)` |
/// | `reprioritize` | `O(log n)` |
/// | `deprioritize` | `O(log n)` |
/// | `contains` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// # Panics
/// Every method which compares or re-slots elements borrows them through their [`RefCell`]. These
/// methods panic if the caller is holding a conflicting borrow of a member at the time of the call.
///
/// [`RefCell`]: std::cell::RefCell
pub struct Heap<T: HeapItem> {
    pub(crate) items: Vec<HeapRef<T>>,
    pub(crate) cap: usize,
}

impl<T: HeapItem> Heap<T> {
    /// Creates an empty Heap able to hold exactly `cap` elements. The storage is allocated up front
    /// and never grows.
    ///
    /// # Errors
    /// Returns [`ZeroCapacityError`] if `cap` is 0.
    pub fn with_cap(cap: usize) -> Result<Heap<T>, ZeroCapacityError> {
        if cap == 0 {
            return Err(ZeroCapacityError);
        }

        Ok(Heap {
            items: Vec::with_capacity(cap),
            cap,
        })
    }

    /// Returns the number of elements in the Heap.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Heap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum number of elements the Heap can hold.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns true if no more elements can be inserted.
    pub fn is_full(&self) -> bool {
        self.len() == self.cap
    }

    /// Returns the maximum element without removing it.
    pub fn peek(&self) -> Option<&HeapRef<T>> {
        self.items.first()
    }

    /// Returns an iterator over all elements in storage order. Only the first element is
    /// guaranteed to be the maximum.
    pub fn iter(&self) -> slice::Iter<'_, HeapRef<T>> {
        self.items.iter()
    }

    /// Inserts a clone of the provided handle, recording its slot and sorting it upward into
    /// place. The caller keeps its own handle.
    ///
    /// # Errors
    /// - [`CapacityExceededError`] if the Heap is full.
    /// - [`DuplicateItemError`] if this exact element is already a member.
    ///
    /// In both cases the Heap is left unchanged.
    ///
    /// An element records a single slot, so it can only be a member of one Heap at a time.
    /// Inserting an element which is still a member of another Heap is a logic error: that Heap
    /// can no longer find the element through [`contains`](Heap::contains), rejects updates to it
    /// with [`StaleSlotError`] and re-slots it when sorting, corrupting the slot this Heap relies
    /// on. Extract the element or clear the other Heap first.
    ///
    /// # Examples
    /// ```
    /// # use toolbox_collections::collections::heap::{Heap, HeapItem};
    /// # use std::cmp::Ordering;
    /// # struct Key(u8, usize);
    /// # impl HeapItem for Key {
    /// #     fn heap_index(&self) -> usize { self.1 }
    /// #     fn set_heap_index(&mut self, index: usize) { self.1 = index; }
    /// # }
    /// # impl Ord for Key {
    /// #     fn cmp(&self, other: &Self) -> Ordering { self.0.cmp(&other.0) }
    /// # }
    /// # impl PartialOrd for Key {
    /// #     fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
    /// # }
    /// # impl PartialEq for Key {
    /// #     fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
    /// # }
    /// # impl Eq for Key {}
    /// let mut heap = Heap::with_cap(1).unwrap();
    /// let a = Key(1, 0).into_ref();
    /// assert!(heap.insert(&a).is_ok());
    /// assert!(heap.insert(&Key(2, 0).into_ref()).unwrap_err().is_capacity_exceeded());
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn insert(&mut self, item: &HeapRef<T>) -> Result<(), InsertError> {
        if self.is_full() {
            debug!(cap = self.cap, "rejected insertion into full heap");
            return Err(CapacityExceededError { cap: self.cap }.into());
        }

        if self.contains(item) {
            debug!(slot = item.borrow().heap_index(), "rejected duplicate heap insertion");
            return Err(DuplicateItemError.into());
        }

        let index = self.items.len();
        item.borrow_mut().set_heap_index(index);
        self.items.push(Rc::clone(item));
        self.sort_up(index);
        Ok(())
    }

    /// Removes and returns the maximum element. The last element takes its place at the root and
    /// is sorted downward.
    ///
    /// The slot recorded on the returned element is left as it was (0, the root). Use
    /// [`contains`](Heap::contains) rather than the slot to decide membership.
    ///
    /// # Errors
    /// Returns [`EmptyHeapError`] if the Heap is empty.
    ///
    /// # Examples
    /// ```
    /// # use toolbox_collections::collections::heap::{Heap, HeapItem};
    /// # use std::cmp::Ordering;
    /// # struct Key(u8, usize);
    /// # impl HeapItem for Key {
    /// #     fn heap_index(&self) -> usize { self.1 }
    /// #     fn set_heap_index(&mut self, index: usize) { self.1 = index; }
    /// # }
    /// # impl Ord for Key {
    /// #     fn cmp(&self, other: &Self) -> Ordering { self.0.cmp(&other.0) }
    /// # }
    /// # impl PartialOrd for Key {
    /// #     fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
    /// # }
    /// # impl PartialEq for Key {
    /// #     fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
    /// # }
    /// # impl Eq for Key {}
    /// let mut heap = Heap::with_cap(5).unwrap();
    /// for key in [3, 1, 4, 1, 5] {
    ///     heap.insert(&Key(key, 0).into_ref()).unwrap();
    /// }
    ///
    /// let mut order = Vec::new();
    /// while let Ok(max) = heap.extract_max() {
    ///     order.push(max.borrow().0);
    /// }
    /// assert_eq!(order, [5, 4, 3, 1, 1]);
    /// ```
    pub fn extract_max(&mut self) -> Result<HeapRef<T>, EmptyHeapError> {
        if self.items.is_empty() {
            debug!("rejected extraction from empty heap");
            return Err(EmptyHeapError);
        }

        // The last element is moved into the root slot.
        let max = self.items.swap_remove(0);

        if let Some(root) = self.items.first() {
            root.borrow_mut().set_heap_index(0);
            self.sort_down(0);
        }

        Ok(max)
    }

    /// Re-sorts an element whose priority was increased while it was a member, moving it toward
    /// the root as required.
    ///
    /// Only increases are supported here. For a decrease, use
    /// [`deprioritize`](Heap::deprioritize), or extract and re-insert the element.
    ///
    /// # Errors
    /// - [`StaleSlotError`] if the element isn't at its recorded slot in this Heap.
    /// - [`PriorityDecreasedError`] if the element now compares less than one of its children.
    ///
    /// In both cases the Heap is left unchanged.
    pub fn reprioritize(&mut self, item: &HeapRef<T>) -> Result<(), UpdateError> {
        let index = self.locate(item).inspect_err(|error| {
            debug!(slot = error.slot, len = error.len, "rejected update of a stale heap slot");
        })?;

        if let Some(child) = self.greater_child(index)
            && self.compare(index, child) == Ordering::Less
        {
            debug!(slot = index, "rejected upward re-sort of a decreased priority");
            return Err(PriorityDecreasedError.into());
        }

        self.sort_up(index);
        Ok(())
    }

    /// Re-sorts an element whose priority was decreased while it was a member, moving it toward
    /// the leaves as required.
    ///
    /// # Errors
    /// - [`StaleSlotError`] if the element isn't at its recorded slot in this Heap.
    /// - [`PriorityIncreasedError`] if the element now compares greater than its parent.
    ///
    /// In both cases the Heap is left unchanged.
    pub fn deprioritize(&mut self, item: &HeapRef<T>) -> Result<(), UpdateError> {
        let index = self.locate(item).inspect_err(|error| {
            debug!(slot = error.slot, len = error.len, "rejected update of a stale heap slot");
        })?;

        if index > 0 && self.compare(index, parent_of(index)) == Ordering::Greater {
            debug!(slot = index, "rejected downward re-sort of an increased priority");
            return Err(PriorityIncreasedError.into());
        }

        self.sort_down(index);
        Ok(())
    }

    /// Checks whether this exact element is a member, by looking only at its recorded slot.
    ///
    /// This is an identity check, not a search: an equal but distinct element is never contained.
    pub fn contains(&self, item: &HeapRef<T>) -> bool {
        self.locate(item).is_ok()
    }

    /// Removes all elements, resetting each of their slots to 0. The allocated storage is kept.
    pub fn clear(&mut self) {
        for item in self.items.iter() {
            item.borrow_mut().set_heap_index(0);
        }

        trace!(len = self.items.len(), "cleared heap");
        self.items.clear();
    }

    /// Returns the index of `item`, provided that its recorded slot actually holds it.
    pub(crate) fn locate(&self, item: &HeapRef<T>) -> Result<usize, StaleSlotError> {
        let slot = item.borrow().heap_index();

        match self.items.get(slot) {
            Some(stored) if Rc::ptr_eq(stored, item) => Ok(slot),
            _ => Err(StaleSlotError {
                slot,
                len: self.items.len(),
            }),
        }
    }

    /// Moves the element at `index` toward the root while it compares greater than its parent.
    fn sort_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent_of(index);

            if self.compare(index, parent) != Ordering::Greater {
                break;
            }

            self.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the element at `index` toward the leaves while it compares less than its greater
    /// child.
    fn sort_down(&mut self, mut index: usize) {
        while let Some(child) = self.greater_child(index) {
            if self.compare(index, child) != Ordering::Less {
                break;
            }

            self.swap(index, child);
            index = child;
        }
    }

    /// Returns the index of the greater child of `index`, if it has any children. The right child
    /// is only chosen when it is strictly greater than the left.
    fn greater_child(&self, index: usize) -> Option<usize> {
        let left = index * 2 + 1;
        let right = left + 1;

        if left >= self.items.len() {
            None
        } else if right < self.items.len() && self.compare(right, left) == Ordering::Greater {
            Some(right)
        } else {
            Some(left)
        }
    }

    fn compare(&self, a: usize, b: usize) -> Ordering {
        self.items[a].borrow().cmp(&self.items[b].borrow())
    }

    /// Swaps two elements, along with their recorded slots.
    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.items[a].borrow_mut().set_heap_index(a);
        self.items[b].borrow_mut().set_heap_index(b);
    }
}

const fn parent_of(index: usize) -> usize {
    (index - 1) / 2
}

impl<'a, T: HeapItem> IntoIterator for &'a Heap<T> {
    type Item = &'a HeapRef<T>;

    type IntoIter = slice::Iter<'a, HeapRef<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: HeapItem + Debug> Debug for Heap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("items", &self.items)
            .field("len", &self.len())
            .field("cap", &self.cap)
            .finish()
    }
}
