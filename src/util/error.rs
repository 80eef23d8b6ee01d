use derive_more::{Display, Error};

/// An index was outside of the live elements of a collection.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A fixed-capacity collection was asked to hold no elements at all.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("fixed-capacity collection created with capacity 0")]
pub struct ZeroCapacityError;
