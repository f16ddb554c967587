use thiserror::Error;

/// The failure modes of a [`List`](crate::List) operation.
///
/// Every check runs before any mutation: a call that returns an error
/// leaves the list exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// An index (or slice endpoint) fell outside its accepted raw range
    /// `[low, high)`.
    #[error("index {index} out of range [{low}, {high})")]
    OutOfBounds { index: isize, low: isize, high: isize },

    /// The operation requires at least one element.
    #[error("list is empty")]
    Empty,

    /// An insertion was attempted while the list already holds
    /// [`MAX_CAPACITY`](crate::MAX_CAPACITY) elements.
    #[error("list capacity exceeded")]
    CapacityExceeded,

    /// A zero slice step or a negative repeat count.
    #[error("{0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = core::result::Result<T, ListError>;
