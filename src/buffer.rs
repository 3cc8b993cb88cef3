use std::iter;

// A fixed block of slots. Slots in [0, len) hold a value, everything after
// that is vacant. The block never changes size in place, growing or shrinking
// means building a new one with `resized`.
#[derive(Clone)]
pub(crate) struct SlotBuffer<T> {
    slots: Box<[Option<T>]>,
}

impl<T> SlotBuffer<T> {
    pub(crate) fn vacant(capacity: usize) -> Self {
        SlotBuffer {
            slots: iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    // Moves the first `len` values into a new block of `capacity` slots.
    pub(crate) fn resized(&mut self, len: usize, capacity: usize) -> Self {
        debug_assert!(len <= capacity, "Resize would drop occupied slots");

        let mut next = SlotBuffer::vacant(capacity);
        for (to, from) in next.slots.iter_mut().zip(&mut self.slots[..len]) {
            *to = from.take();
        }
        next
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    pub(crate) fn put(&mut self, index: usize, value: T) {
        self.slots[index] = Some(value);
    }

    pub(crate) fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    // Shifts [index, len) one slot to the right, leaving `index` vacant.
    // Requires a vacant slot at `len`.
    pub(crate) fn open_gap(&mut self, index: usize, len: usize) {
        debug_assert!(len < self.capacity(), "No room to shift right");
        debug_assert!(self.slots[len].is_none());

        self.slots[index..=len].rotate_right(1);
    }

    // Shifts (index, len) one slot to the left over a vacated `index`,
    // leaving `len - 1` vacant.
    pub(crate) fn close_gap(&mut self, index: usize, len: usize) {
        debug_assert!(self.slots[index].is_none());

        self.slots[index..len].rotate_left(1);
    }

    pub(crate) fn occupied(&self, len: usize) -> &[Option<T>] {
        &self.slots[..len]
    }

    pub(crate) fn occupied_mut(&mut self, len: usize) -> &mut [Option<T>] {
        &mut self.slots[..len]
    }

    pub(crate) fn into_occupied(self, len: usize) -> Vec<Option<T>> {
        let mut slots = self.slots.into_vec();
        slots.truncate(len);
        slots
    }
}
