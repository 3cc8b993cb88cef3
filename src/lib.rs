#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

pub mod array;
pub(crate) mod buffer;
pub mod error;
pub mod policy;

pub use array::{DoublingArray, DynamicArray, GenericArray};
pub use error::ArrayError;

/// Construct a [`DynamicArray`](crate::array::DynamicArray) from a sequence of elements
#[macro_export]
macro_rules! dyn_array {
    () => { $crate::array::DynamicArray::new() };

    ( $($x:expr),+ $(,)? ) => {{
        vec![$(
            $x,
        ) *].into_iter().collect::<$crate::array::DynamicArray<_>>()
    }};
}

/// Construct a [`DoublingArray`](crate::array::DoublingArray) from a sequence of elements
#[macro_export]
macro_rules! doubling_array {
    () => { $crate::array::DoublingArray::new() };

    ( $($x:expr),+ $(,)? ) => {{
        vec![$(
            $x,
        ) *].into_iter().collect::<$crate::array::DoublingArray<_>>()
    }};
}
