use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("unable to pop from an empty circular buffer")]
pub struct EmptyBufferError;
