use std::cell::RefCell;
use std::rc::Rc;

/// A shared handle to an element stored in a [`Heap`](super::Heap). The caller and the heap each
/// hold a clone; element identity is the identity of the allocation behind the handle.
pub type HeapRef<T> = Rc<RefCell<T>>;

/// The capability an element needs to be stored in a [`Heap`](super::Heap): a total order against
/// other elements of the same type, and a slot the heap uses to record where the element lives.
///
/// The slot belongs to the heap while the element is a member. Writing to it from outside the
/// heap's API is a logic error, which the heap reports as a
/// [`StaleSlotError`](super::StaleSlotError) where it can detect it.
pub trait HeapItem: Ord {
    /// Returns the slot most recently recorded by a heap.
    fn heap_index(&self) -> usize;

    /// Records the element's slot. Only called by the heap.
    fn set_heap_index(&mut self, index: usize);

    /// Wraps the element in a new [`HeapRef`], ready for insertion.
    fn into_ref(self) -> HeapRef<Self>
    where
        Self: Sized,
    {
        Rc::new(RefCell::new(self))
    }
}
