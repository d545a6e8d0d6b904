use thiserror::Error;

/// Errors that can occur when operating on a [`LinkedList`].
///
/// [`LinkedList`]: crate::LinkedList
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// A removal was requested from a list without elements.
    #[error("cannot remove element from empty list")]
    EmptyCollection,

    /// The position does not resolve to an element of the list.
    #[error("position {pos} is out of range for a list of length {len}")]
    IndexOutOfRange { pos: isize, len: usize },
}
