//! Capacity policies decide how far an array grows once it is full, and when
//! it gives memory back.
//!
//! A policy is a type family with no runtime state, selected through the
//! second type parameter of [`GenericArray`](crate::array::GenericArray).

/// Growth and shrink rules for a [`GenericArray`](crate::array::GenericArray).
pub trait CapacityPolicy {
    /// The capacity to move to when an array of `capacity` slots is full.
    ///
    /// Must return something strictly greater than `capacity`, or `None` if
    /// that cannot be represented.
    fn grow(capacity: usize) -> Option<usize>;

    /// The capacity to move to after the element count dropped to `len`,
    /// or `None` to keep the current one.
    ///
    /// Halves the capacity once at most a quarter of it is in use. Since
    /// `capacity / 2 >= capacity / 4 >= len` this never cuts into the
    /// occupied slots, and it never goes below a single slot.
    fn shrink(len: usize, capacity: usize) -> Option<usize> {
        let half = capacity / 2;
        if len <= capacity / 4 && half > 0 {
            Some(half)
        } else {
            None
        }
    }
}

/// Squares the capacity on every growth: 2 → 4 → 16 → 256 → 65536.
///
/// This over-allocates aggressively and is kept for parity with the array's
/// established behaviour. A single slot grows to two, since `1 * 1` would
/// never make room.
pub struct SquaringPolicy;

impl CapacityPolicy for SquaringPolicy {
    fn grow(capacity: usize) -> Option<usize> {
        capacity
            .checked_mul(capacity)
            .map(|squared| squared.max(capacity + 1))
    }
}

/// Doubles the capacity on every growth, the way `Vec` does.
pub struct DoublingPolicy;

impl CapacityPolicy for DoublingPolicy {
    fn grow(capacity: usize) -> Option<usize> {
        capacity.checked_mul(2).map(|doubled| doubled.max(1))
    }
}
