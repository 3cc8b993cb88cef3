//! Errors reported by [`GenericArray`](crate::array::GenericArray) operations.
//!
//! Every variant is a broken caller contract. Nothing here is transient, so
//! the array never retries and never clamps its input.

/// The ways an array operation can be rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// `index` was outside of `[0, len)`.
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// An array was requested with room for zero elements.
    #[error("invalid capacity `{requested}`: capacity must be greater than zero")]
    InvalidCapacity { requested: usize },

    /// An element was requested from an array holding none.
    #[error("cannot remove an element from an empty array")]
    EmptyContainer,
}
