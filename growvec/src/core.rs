use core::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use crate::config::GrowthPolicy;
use crate::cursor::Cursor;
use crate::error::{GrowVecError, Result};
use crate::iter::{ContainerIter, ContainerRevIter};
use crate::policy::Element;
use crate::raw::RawBuffer;

// Id 0 is reserved for records that were never created. Ids are never
// reused: once the counter is exhausted, creating a container fails.
// Needs pointer-width atomics on the target.
static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

fn issue_id(counter: &AtomicUsize) -> Result<usize> {
    counter
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
        .map_err(|_| GrowVecError::AllocationFailure { requested: 1 })
}

/// Lifecycle of a [`Container`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Declared but never created; every operation reports `NotInitialized`
    Uninitialized,
    Initialized,
    /// Destroyed once; every further operation reports `NotInitialized`
    Destroyed,
}

/// A growable, randomly indexable sequence of elements.
///
/// Elements are deep-copied in and out through their [`Element`] policy.
/// Operations that relocate or resize the storage bump a generation
/// counter, which invalidates every [`Cursor`] issued before them.
#[derive(Debug)]
pub struct Container<T> {
    raw: RawBuffer<T>,
    policy: GrowthPolicy,
    state: State,
    id: usize,
    generation: u64,
}

impl<T> Container<T> {
    /// Returns a container record that has not been created yet.
    #[must_use]
    pub const fn uninitialized() -> Self {
        Self {
            raw: RawBuffer::new(),
            policy: GrowthPolicy::new(),
            state: State::Uninitialized,
            id: 0,
            generation: 0,
        }
    }

    /// Creates an empty container with the default growth policy.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the initial block cannot be obtained.
    pub fn new() -> Result<Self> {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Creates an empty container that grows according to `policy`.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::InvalidParameter` if the policy does not validate
    /// - `GrowVecError::AllocationFailure` if the initial block cannot be
    ///   obtained or container ids are exhausted
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self> {
        policy.validate()?;
        let raw = RawBuffer::with_capacity(policy.initial_capacity(), &policy)?;
        Ok(Self {
            raw,
            policy,
            state: State::Initialized,
            id: issue_id(&NEXT_ID)?,
            generation: 0,
        })
    }

    /// Creates an empty container with room for at least `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the block cannot be obtained.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut container = Self::new()?;
        container.reserve(capacity)?;
        Ok(container)
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.state == State::Initialized {
            Ok(())
        } else {
            Err(GrowVecError::NotInitialized)
        }
    }

    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn track(&mut self, relocated: bool) {
        if relocated {
            self.invalidate();
        }
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// The live elements, in order.
    #[must_use]
    pub fn data(&self) -> &[T] {
        self.raw.as_slice()
    }

    /// Borrows the element at `index`.
    ///
    /// Returns `None` if the index is out of bounds or the container is not initialized.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if self.state != State::Initialized {
            return None;
        }
        self.raw.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if self.state != State::Initialized {
            return None;
        }
        self.raw.as_mut_slice().get_mut(index)
    }

    /// Guarantees room for at least `capacity` elements without changing the length.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the container is not initialized
    /// - `GrowVecError::AllocationFailure` if the block cannot be obtained;
    ///   the container is left unchanged
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        self.ensure_initialized()?;
        let relocated = self.raw.ensure_capacity(capacity, &self.policy)?;
        self.track(relocated);
        Ok(())
    }

    /// Moves `value` to the end of the container.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the container is not initialized
    /// - `GrowVecError::AllocationFailure` if growth fails
    pub fn push(&mut self, value: T) -> Result<()> {
        self.ensure_initialized()?;
        let relocated = self.raw.push(value, &self.policy)?;
        self.track(relocated);
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// Returns `Ok(None)` if the container is empty.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::NotInitialized` if the container is not initialized.
    pub fn pop_back(&mut self) -> Result<Option<T>> {
        self.ensure_initialized()?;
        let popped = self.raw.pop();
        self.track(popped.is_some());
        Ok(popped)
    }

    /// Drops every element. Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::NotInitialized` if the container is not initialized.
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.raw.clear();
        self.invalidate();
        Ok(())
    }

    /// Drops every element and frees the storage. The container becomes unusable.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::NotInitialized` if the container was never
    /// created or is already destroyed.
    pub fn destroy(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        debug!(
            length = self.raw.len(),
            capacity = self.raw.capacity(),
            "destroying container"
        );
        self.raw.release();
        self.state = State::Destroyed;
        self.invalidate();
        Ok(())
    }

    /// Cursor at the first element.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::NotInitialized` if the container is not initialized.
    pub fn begin(&self) -> Result<Cursor> {
        self.ensure_initialized()?;
        Ok(Cursor::new(self.id, self.generation, 0))
    }

    /// Cursor one past the last element.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::NotInitialized` if the container is not initialized.
    pub fn end(&self) -> Result<Cursor> {
        self.ensure_initialized()?;
        Ok(Cursor::new(self.id, self.generation, self.raw.len()))
    }

    /// Checks that `cursor` was issued by this container and is still valid.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the container is not initialized
    /// - `GrowVecError::InvalidParameter` if the cursor belongs to another container
    /// - `GrowVecError::StaleIterator` if the container was relocated or resized since
    pub fn check_cursor(&self, cursor: &Cursor) -> Result<()> {
        self.ensure_initialized()?;
        if cursor.owner() != self.id {
            return Err(GrowVecError::InvalidParameter {
                reason: "cursor belongs to a different container",
            });
        }
        if cursor.generation() != self.generation {
            return Err(GrowVecError::StaleIterator);
        }
        Ok(())
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> ContainerIter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the elements, last to first.
    #[must_use]
    pub fn iter_rev(&self) -> ContainerRevIter<'_, T> {
        ContainerRevIter::new(self.data())
    }
}

impl<T: Element> Container<T> {
    /// Creates a container holding `size` default-constructed elements.
    ///
    /// # Errors
    ///
    /// Returns an error if allocation or element construction fails.
    pub fn with_size(size: usize) -> Result<Self> {
        let mut container = Self::new()?;
        container.resize(size)?;
        Ok(container)
    }

    /// Deep-copies `value` to the end of the container.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the container is not initialized
    /// - `GrowVecError::AllocationFailure` if growth or the copy fails;
    ///   the container is left unchanged
    pub fn push_back(&mut self, value: &T) -> Result<()> {
        self.ensure_initialized()?;
        let copy = value.try_clone()?;
        self.push(copy)
    }

    /// Deep-copies the element at `index` out of the container.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the container is not initialized
    /// - `GrowVecError::OutOfRange` if `index >= len`
    pub fn at_get(&self, index: usize) -> Result<T> {
        self.ensure_initialized()?;
        self.raw
            .as_slice()
            .get(index)
            .ok_or(GrowVecError::OutOfRange {
                index,
                length: self.raw.len(),
            })?
            .try_clone()
    }

    /// Deep-copies `value` into slot `index`, dropping the previous element.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the container is not initialized
    /// - `GrowVecError::OutOfRange` if `index >= len`
    /// - any error of the element copy; the slot keeps its old value
    pub fn at_set(&mut self, index: usize, value: &T) -> Result<()> {
        self.ensure_initialized()?;
        let length = self.raw.len();
        if index >= length {
            return Err(GrowVecError::OutOfRange { index, length });
        }
        let copy = value.try_clone()?;
        self.raw.replace(index, copy)?;
        Ok(())
    }

    /// Inserts a deep copy of `value` at `offset`, shifting later elements right.
    ///
    /// The operation is atomic: the copy is made and any larger block is
    /// obtained before a single element moves.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the container is not initialized
    /// - `GrowVecError::OutOfRange` if `offset > len`
    /// - `GrowVecError::AllocationFailure` if growth or the copy fails
    pub fn insert(&mut self, offset: usize, value: &T) -> Result<()> {
        self.ensure_initialized()?;
        let length = self.raw.len();
        if offset > length {
            return Err(GrowVecError::OutOfRange {
                index: offset,
                length,
            });
        }
        let copy = value.try_clone()?;
        self.raw.insert(offset, copy, &self.policy)?;
        self.invalidate();
        Ok(())
    }

    /// Inserts a deep copy of `value` at the position of `at`.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::InvalidParameter` if `at` was issued by another container
    /// - `GrowVecError::StaleIterator` if `at` has been invalidated
    /// - any error of [`Container::insert`]
    pub fn insert_at(&mut self, at: Cursor, value: &T) -> Result<()> {
        self.check_cursor(&at)?;
        self.insert(at.index(), value)
    }

    /// Sets the length to `size`.
    ///
    /// Growing default-constructs the new slots; shrinking drops the
    /// removed elements. The new elements are all constructed before the
    /// container is touched, so a failed construction leaves it unchanged.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the container is not initialized
    /// - `GrowVecError::AllocationFailure` if growth or element construction fails
    pub fn resize(&mut self, size: usize) -> Result<()> {
        self.ensure_initialized()?;
        let length = self.raw.len();
        if size <= length {
            self.raw.truncate(size);
        } else {
            let mut fresh = RawBuffer::with_capacity(size - length, &self.policy)?;
            for _ in length..size {
                fresh.push(T::try_default()?, &self.policy)?;
            }
            self.raw.ensure_capacity(size, &self.policy)?;
            self.raw.append(&mut fresh, &self.policy)?;
        }
        self.invalidate();
        Ok(())
    }

    /// Creates an independent container with deep copies of every element.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the container is not initialized
    /// - `GrowVecError::AllocationFailure` if allocation or an element copy fails
    pub fn copy(&self) -> Result<Self> {
        self.ensure_initialized()?;
        let mut raw = RawBuffer::with_capacity(self.raw.len(), &self.policy)?;
        for element in self.raw.as_slice() {
            raw.push(element.try_clone()?, &self.policy)?;
        }
        Ok(Self {
            raw,
            policy: self.policy,
            state: State::Initialized,
            id: issue_id(&NEXT_ID)?,
            generation: 0,
        })
    }
}

impl<T: Element> Element for Container<T> {
    fn try_default() -> Result<Self> {
        Self::new()
    }

    fn try_clone(&self) -> Result<Self> {
        self.copy()
    }
}

impl<T: PartialEq> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.data() == other.data()
    }
}

impl<T: PartialEq> PartialEq<[T]> for Container<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.data() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_initialization() {
        let container: Container<u32> = Container::new().unwrap();

        assert_eq!(container.len(), 0);
        assert!(container.is_empty());
        assert_eq!(container.capacity(), 3);
        assert_eq!(container.state(), State::Initialized);
    }

    #[test]
    fn test_uninitialized_reports_not_initialized() {
        let mut container: Container<u32> = Container::uninitialized();

        assert_eq!(container.push_back(&1), Err(GrowVecError::NotInitialized));
        assert_eq!(container.reserve(4), Err(GrowVecError::NotInitialized));
        assert_eq!(container.destroy(), Err(GrowVecError::NotInitialized));
        assert!(container.get(0).is_none());
    }

    #[test]
    fn test_generation_bumps_only_on_relocation() {
        let mut container: Container<u8> = Container::new().unwrap();
        let before = container.generation;

        container.push_back(&1).unwrap();
        assert_eq!(container.generation, before);

        container.reserve(100).unwrap();
        assert_eq!(container.generation, before + 1);

        container.reserve(10).unwrap();
        assert_eq!(container.generation, before + 1);
    }

    #[test]
    fn test_copy_gets_new_identity() {
        let mut container: Container<u8> = Container::new().unwrap();
        container.push_back(&7).unwrap();
        let copy = container.copy().unwrap();

        assert_ne!(copy.id, container.id);
        assert_eq!(copy, container);
    }

    #[test]
    fn test_exhausted_ids_are_not_reused() {
        let counter = AtomicUsize::new(usize::MAX - 1);

        assert_eq!(issue_id(&counter).unwrap(), usize::MAX - 1);
        assert_eq!(
            issue_id(&counter),
            Err(GrowVecError::AllocationFailure { requested: 1 })
        );
        assert_eq!(counter.load(Ordering::Relaxed), usize::MAX);
    }
}
