use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("heap is at capacity ({cap} elements)")]
pub struct CapacityExceededError {
    pub cap: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("item is already contained in the heap")]
pub struct DuplicateItemError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("unable to extract from an empty heap")]
pub struct EmptyHeapError;

/// The slot recorded on an item doesn't refer to that item, either because it was never inserted,
/// has since been removed or had its slot modified outside of the heap.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("item records slot {slot}, which doesn't hold it in a heap of {len} elements")]
pub struct StaleSlotError {
    pub slot: usize,
    pub len: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("item priority was decreased, but only increases can be sorted upward")]
pub struct PriorityDecreasedError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("item priority was increased, but only decreases can be sorted downward")]
pub struct PriorityIncreasedError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum InsertError {
    CapacityExceeded(CapacityExceededError),
    DuplicateItem(DuplicateItemError),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum UpdateError {
    StaleSlot(StaleSlotError),
    PriorityDecreased(PriorityDecreasedError),
    PriorityIncreased(PriorityIncreasedError),
}
