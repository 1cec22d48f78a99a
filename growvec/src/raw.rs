use alloc::vec::Vec;
use tracing::{debug, warn};

use crate::config::GrowthPolicy;
use crate::error::{GrowVecError, Result};

/// Buffer core: an exclusively owned block of `capacity` slots, of which
/// the first `len` hold live elements.
///
/// `capacity` is the logical capacity this buffer asked for; the block may
/// physically be larger, but growth decisions only ever look at the logical
/// value. Every method that may relocate returns `true` when it did, so the
/// owner can invalidate the cursors it issued.
///
/// Relocation allocates the new block before touching the old one and then
/// moves the elements over, so a failed growth leaves the buffer exactly as
/// it was.
#[derive(Debug)]
pub struct RawBuffer<T> {
    slots: Vec<T>,
    capacity: usize,
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RawBuffer<T> {
    /// Creates a buffer without any storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            capacity: 0,
        }
    }

    /// Creates an empty buffer with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the block cannot be obtained.
    pub fn with_capacity(capacity: usize, policy: &GrowthPolicy) -> Result<Self> {
        let mut raw = Self::new();
        raw.ensure_capacity(capacity, policy)?;
        Ok(raw)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    fn allocate(capacity: usize, policy: &GrowthPolicy) -> Result<Vec<T>> {
        policy.admit(capacity)?;
        let mut block = Vec::new();
        block.try_reserve_exact(capacity).map_err(|_| {
            warn!(capacity, "allocator refused block");
            GrowVecError::AllocationFailure {
                requested: capacity,
            }
        })?;
        Ok(block)
    }

    /// Guarantees room for at least `capacity` elements without changing the length.
    ///
    /// Returns `true` if the storage was relocated.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the new block cannot be
    /// obtained; the buffer is left unchanged.
    pub fn ensure_capacity(&mut self, capacity: usize, policy: &GrowthPolicy) -> Result<bool> {
        if self.capacity >= capacity {
            return Ok(false);
        }

        let mut block = Self::allocate(capacity, policy)?;
        block.append(&mut self.slots);
        debug!(
            old_capacity = self.capacity,
            new_capacity = capacity,
            length = block.len(),
            "relocated buffer"
        );
        self.slots = block;
        self.capacity = capacity;
        Ok(true)
    }

    /// Makes room for `additional` more elements using the amortized growth target.
    ///
    /// Returns `true` if the storage was relocated.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the new block cannot be obtained.
    pub fn grow_for_append(&mut self, additional: usize, policy: &GrowthPolicy) -> Result<bool> {
        let required = self
            .len()
            .checked_add(additional)
            .ok_or(GrowVecError::AllocationFailure {
                requested: usize::MAX,
            })?;
        if required <= self.capacity {
            return Ok(false);
        }
        let target = policy.append_target(required)?;
        self.ensure_capacity(target, policy)
    }

    /// Appends one element, growing if needed.
    ///
    /// Returns `true` if the storage was relocated.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if growth fails; `value` is dropped.
    pub fn push(&mut self, value: T, policy: &GrowthPolicy) -> Result<bool> {
        let relocated = self.grow_for_append(1, policy)?;
        self.slots.push(value);
        Ok(relocated)
    }

    /// Moves every element of `other` to the end of this buffer.
    ///
    /// Returns `true` if the storage was relocated.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if growth fails; both
    /// buffers are left unchanged.
    pub fn append(&mut self, other: &mut RawBuffer<T>, policy: &GrowthPolicy) -> Result<bool> {
        let relocated = self.grow_for_append(other.len(), policy)?;
        self.slots.append(&mut other.slots);
        Ok(relocated)
    }

    /// Inserts `values` at `offset`, shifting `[offset, len)` right.
    ///
    /// When the current block is too small, the new layout is assembled in
    /// a scratch block that is allocated before anything moves, and then
    /// swapped in. Exactly `values.len()` items are taken from the iterator.
    ///
    /// Returns `true` if the storage was relocated.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::OutOfRange` if `offset > len`
    /// - `GrowVecError::AllocationFailure` if the scratch block cannot be obtained
    ///
    /// On error the buffer is left unchanged.
    pub fn insert_iter<I>(&mut self, offset: usize, values: I, policy: &GrowthPolicy) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let length = self.len();
        if offset > length {
            return Err(GrowVecError::OutOfRange {
                index: offset,
                length,
            });
        }

        let values = values.into_iter();
        let count = values.len();
        let required = length
            .checked_add(count)
            .ok_or(GrowVecError::AllocationFailure {
                requested: usize::MAX,
            })?;

        if required <= self.capacity {
            self.slots.extend(values.take(count));
            self.slots[offset..].rotate_right(count);
            return Ok(false);
        }

        let target = policy.append_target(required)?;
        let mut scratch = Self::allocate(target, policy)?;
        scratch.extend(self.slots.drain(..offset));
        scratch.extend(values.take(count));
        scratch.append(&mut self.slots);
        debug!(
            offset,
            count,
            old_capacity = self.capacity,
            new_capacity = target,
            "insert assembled in scratch block"
        );
        self.slots = scratch;
        self.capacity = target;
        Ok(true)
    }

    /// Inserts one element at `offset`.
    ///
    /// # Errors
    ///
    /// Same as [`RawBuffer::insert_iter`].
    pub fn insert(&mut self, offset: usize, value: T, policy: &GrowthPolicy) -> Result<bool> {
        self.insert_iter(offset, core::iter::once(value), policy)
    }

    /// Replaces the element at `index`, dropping the old one.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::OutOfRange` if `index >= len`.
    pub fn replace(&mut self, index: usize, value: T) -> Result<T> {
        let length = self.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(GrowVecError::OutOfRange { index, length })?;
        Ok(core::mem::replace(slot, value))
    }

    pub fn pop(&mut self) -> Option<T> {
        self.slots.pop()
    }

    /// Drops every element past `length`. Capacity is unchanged.
    pub fn truncate(&mut self, length: usize) {
        self.slots.truncate(length);
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Drops every element and frees the block.
    pub fn release(&mut self) {
        self.slots = Vec::new();
        self.capacity = 0;
    }
}
