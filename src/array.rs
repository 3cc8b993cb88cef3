//! A resizable, contiguous array.
//!
//! Elements live in a single block of slots that is reallocated as the array
//! fills up or drains. How far it grows is decided by a [`CapacityPolicy`];
//! [`DynamicArray`] squares its capacity, [`DoublingArray`] doubles it.
//! Either way the capacity is halved once no more than a quarter of it is in use.
//!
//! Positional operations (`insert`, `prepend`, `delete`) shift the trailing
//! elements, so they are linear in the distance to the end.

use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::FromIterator,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use log::{debug, trace};

use crate::{
    buffer::SlotBuffer,
    error::ArrayError,
    policy::{CapacityPolicy, DoublingPolicy, SquaringPolicy},
};

#[cfg(test)]
mod proptests;

/// Capacity of an array built with [`GenericArray::new`].
pub const DEFAULT_CAPACITY: usize = 32;

/// An array that squares its capacity whenever it runs out of room.
pub type DynamicArray<T> = GenericArray<T, SquaringPolicy>;

/// An array that doubles its capacity whenever it runs out of room.
pub type DoublingArray<T> = GenericArray<T, DoublingPolicy>;

/// A resizable array, generic over the policy deciding its capacity.
///
/// Most code wants one of the aliases, [`DynamicArray`] or [`DoublingArray`].
///
/// Vacant slots are empty rather than filled with placeholder values, so `T`
/// needs neither `Default` nor `Clone`. Value based operations like
/// [`find`](GenericArray::find) and [`remove`](GenericArray::remove) need
/// `T: PartialEq`.
///
/// The array is owned by a single caller at a time; there is no internal
/// synchronization.
pub struct GenericArray<T, P: CapacityPolicy = SquaringPolicy> {
    buffer: SlotBuffer<T>,
    len: usize,
    policy: PhantomData<P>,
}

impl<T, P: CapacityPolicy> GenericArray<T, P> {
    /// Construct an empty array with room for [`DEFAULT_CAPACITY`] elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::array::{DynamicArray, DEFAULT_CAPACITY};
    /// let array: DynamicArray<usize> = DynamicArray::new();
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self::from_buffer(SlotBuffer::vacant(DEFAULT_CAPACITY))
    }

    /// Construct an empty array with room for `capacity` elements.
    ///
    /// Fails with [`ArrayError::InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::array::DynamicArray;
    /// # use dyn_array::error::ArrayError;
    /// let array: DynamicArray<usize> = DynamicArray::with_capacity(5).unwrap();
    /// assert_eq!(array.capacity(), 5);
    ///
    /// let array: Result<DynamicArray<usize>, _> = DynamicArray::with_capacity(0);
    /// assert_eq!(array.unwrap_err(), ArrayError::InvalidCapacity { requested: 0 });
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        if capacity == 0 {
            return Err(rejected(ArrayError::InvalidCapacity {
                requested: capacity,
            }));
        }
        Ok(Self::from_buffer(SlotBuffer::vacant(capacity)))
    }

    fn from_buffer(buffer: SlotBuffer<T>) -> Self {
        GenericArray {
            buffer,
            len: 0,
            policy: PhantomData,
        }
    }

    /// Get the number of elements in the array
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias for [`len`](GenericArray::len)
    pub fn size(&self) -> usize {
        self.len
    }

    /// Get the number of elements the array can hold before it has to grow
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Checks whether the array is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get a reference to the value at `index`.
    ///
    /// Fails with [`ArrayError::IndexOutOfBounds`] unless `index < len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dyn_array;
    /// let array = dyn_array![3, 4, 5];
    /// assert_eq!(array.at(1), Ok(&4));
    /// assert!(array.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len;
        self.get(index)
            .ok_or_else(|| rejected(ArrayError::IndexOutOfBounds { index, len }))
    }

    /// Get a reference to the value at `index`.
    /// Returns `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.buffer.get(index)
        } else {
            None
        }
    }

    /// Get a mutable reference to the value at `index`.
    /// Returns `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            self.buffer.get_mut(index)
        } else {
            None
        }
    }

    /// Get a reference to the first element, if there is one
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Get a reference to the last element, if there is one
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Append `value` to the end of the array, growing it if it is full.
    ///
    /// Time: amortized O(1)
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity does not fit in a `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::array::DynamicArray;
    /// let mut array = DynamicArray::with_capacity(2).unwrap();
    /// for i in 0..5 {
    ///     array.push(i);
    /// }
    /// assert_eq!(array.len(), 5);
    /// assert_eq!(array.capacity(), 16);
    /// ```
    pub fn push(&mut self, value: T) {
        self.reserve_one();
        self.buffer.put(self.len, value);
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting it and every element after it one
    /// position to the right.
    ///
    /// `index` must point at an existing element, so inserting at `len` (the
    /// end of the array) is rejected with [`ArrayError::IndexOutOfBounds`].
    /// Use [`push`](GenericArray::push) to append.
    ///
    /// Time: O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dyn_array;
    /// let mut array = dyn_array![5, 6, 7, 8, 9];
    /// array.insert(2, 47).unwrap();
    /// assert_eq!(array, dyn_array![5, 6, 47, 7, 8, 9]);
    ///
    /// assert!(array.insert(6, 10).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        self.check_index(index)?;

        self.reserve_one();
        self.buffer.open_gap(index, self.len);
        self.buffer.put(index, value);
        self.len += 1;
        Ok(())
    }

    /// Insert `value` at the front of the array, shifting every element one
    /// position to the right.
    ///
    /// Same as `insert(0, value)`, which means an empty array rejects it.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dyn_array;
    /// let mut array = dyn_array![1, 2, 3];
    /// array.prepend(15).unwrap();
    /// assert_eq!(array, dyn_array![15, 1, 2, 3]);
    /// ```
    pub fn prepend(&mut self, value: T) -> Result<(), ArrayError> {
        self.insert(0, value)
    }

    /// Remove the last element and return it, shrinking the array if it is
    /// now at most a quarter full.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dyn_array;
    /// # use dyn_array::error::ArrayError;
    /// let mut array = dyn_array![1, 2];
    /// assert_eq!(array.pop(), Ok(2));
    /// assert_eq!(array.pop(), Ok(1));
    /// assert_eq!(array.pop(), Err(ArrayError::EmptyContainer));
    /// ```
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        if self.is_empty() {
            return Err(rejected(ArrayError::EmptyContainer));
        }

        let value = self
            .buffer
            .take(self.len - 1)
            .ok_or_else(|| rejected(ArrayError::EmptyContainer))?;
        self.len -= 1;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Remove the element at `index` and return it, shifting every element
    /// after it one position to the left. Shrinks the array if it is now at
    /// most a quarter full.
    ///
    /// Time: O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dyn_array;
    /// let mut array = dyn_array![1, 2, 3, 4];
    /// assert_eq!(array.delete(1), Ok(2));
    /// assert_eq!(array, dyn_array![1, 3, 4]);
    /// ```
    pub fn delete(&mut self, index: usize) -> Result<T, ArrayError> {
        if self.is_empty() {
            return Err(rejected(ArrayError::EmptyContainer));
        }
        self.check_index(index)?;

        // Nothing has shifted yet if the slot turns out vacant
        let len = self.len;
        let value = self
            .buffer
            .take(index)
            .ok_or_else(|| rejected(ArrayError::IndexOutOfBounds { index, len }))?;
        self.buffer.close_gap(index, self.len);
        self.len -= 1;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Remove every element equal to `value`, returning how many were removed.
    ///
    /// Elements are visited from the back so that shifting after a removal
    /// never skips an unvisited element.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dyn_array;
    /// let mut array = dyn_array![12, 3, 41, 12, 12, 12];
    /// assert_eq!(array.remove(&12), 4);
    /// assert_eq!(array, dyn_array![3, 41]);
    /// ```
    pub fn remove(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        let mut removed = 0;
        for index in (0..self.len).rev() {
            if self.buffer.get(index) == Some(value) && self.delete(index).is_ok() {
                removed += 1;
            }
        }

        self.shrink_if_sparse();
        removed
    }

    /// Get the index of the first element equal to `value`, or `None` if
    /// there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate dyn_array;
    /// let array = dyn_array![1, 2, 3, 2];
    /// assert_eq!(array.find(&2), Some(1));
    /// assert_eq!(array.find(&7), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == value)
    }

    /// Checks whether any element is equal to `value`
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some()
    }

    /// Drop every element. The array shrinks once, like after a single removal.
    pub fn clear(&mut self) {
        for slot in self.buffer.occupied_mut(self.len) {
            *slot = None;
        }
        self.len = 0;
        self.shrink_if_sparse();
    }

    /// Constructs an iterator over the array
    pub fn iter(&self) -> IterRef<'_, T> {
        self.into_iter()
    }

    /// Constructs an iterator over mutable references to the elements
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index < self.len {
            Ok(())
        } else {
            Err(rejected(ArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            }))
        }
    }

    // Makes sure there is a vacant slot at `len`.
    fn reserve_one(&mut self) {
        let capacity = self.capacity();
        if self.len < capacity {
            return;
        }

        match P::grow(capacity) {
            Some(next) => self.resize(next),
            None => capacity_overflow(),
        }
    }

    fn shrink_if_sparse(&mut self) {
        if let Some(next) = P::shrink(self.len, self.capacity()) {
            self.resize(next);
        }
    }

    fn resize(&mut self, capacity: usize) {
        debug!(
            "resizing array from {} to {} slots with {} elements",
            self.capacity(),
            capacity,
            self.len
        );
        self.buffer = self.buffer.resized(self.len, capacity);
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let capacity = self.capacity();
        assert!(capacity >= 1, "Capacity dropped to zero");
        assert!(
            self.len <= capacity,
            "Length {} exceeds capacity {}",
            self.len,
            capacity
        );
        for index in 0..capacity {
            assert_eq!(
                self.buffer.get(index).is_some(),
                index < self.len,
                "Slot {} is in the wrong state for length {}",
                index,
                self.len
            );
        }
    }
}

fn rejected(error: ArrayError) -> ArrayError {
    trace!("rejected array operation: {}", error);
    error
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T, P: CapacityPolicy> Default for GenericArray<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P: CapacityPolicy> Clone for GenericArray<T, P> {
    fn clone(&self) -> Self {
        GenericArray {
            buffer: self.buffer.clone(),
            len: self.len,
            policy: PhantomData,
        }
    }
}

impl<T, P: CapacityPolicy> Index<usize> for GenericArray<T, P> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T, P: CapacityPolicy> IndexMut<usize> for GenericArray<T, P> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", ArrayError::IndexOutOfBounds { index, len }),
        }
    }
}

impl<T: PartialEq, P: CapacityPolicy> PartialEq for GenericArray<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, P: CapacityPolicy> Eq for GenericArray<T, P> {}

impl<T: Hash, P: CapacityPolicy> Hash for GenericArray<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug, P: CapacityPolicy> fmt::Debug for GenericArray<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T, P: CapacityPolicy> Extend<T> for GenericArray<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, P: CapacityPolicy> FromIterator<T> for GenericArray<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T, P: CapacityPolicy> From<Vec<T>> for GenericArray<T, P> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

/// Iterator over references to the elements of an array
pub struct IterRef<'a, T>(std::iter::Flatten<std::slice::Iter<'a, Option<T>>>);

impl<'a, T> Iterator for IterRef<'a, T> {
    type Item = &'a T;

    impl_iter!();
}

impl<'a, T, P: CapacityPolicy> IntoIterator for &'a GenericArray<T, P> {
    type Item = &'a T;
    type IntoIter = IterRef<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        IterRef(self.buffer.occupied(self.len).iter().flatten())
    }
}

/// Iterator over mutable references to the elements of an array
pub struct IterMut<'a, T>(std::iter::Flatten<std::slice::IterMut<'a, Option<T>>>);

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    impl_iter!();
}

impl<'a, T, P: CapacityPolicy> IntoIterator for &'a mut GenericArray<T, P> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        IterMut(self.buffer.occupied_mut(self.len).iter_mut().flatten())
    }
}

/// Consuming iterator over the elements of an array
pub struct Iter<T>(std::iter::Flatten<std::vec::IntoIter<Option<T>>>);

impl<T> Iterator for Iter<T> {
    type Item = T;

    impl_iter!();
}

impl<T, P: CapacityPolicy> IntoIterator for GenericArray<T, P> {
    type Item = T;
    type IntoIter = Iter<T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        Iter(self.buffer.into_occupied(self.len).into_iter().flatten())
    }
}
