use crate::core::Container;
use crate::error::{GrowVecError, Result};
use crate::policy::Element;

/// A position inside a [`Container`].
///
/// A cursor does not borrow the container: it records which container
/// issued it, the container's generation at that time, and an index. Every
/// operation takes the container explicitly and re-validates against its
/// live state, so bounds are always computed from the current length and a
/// cursor that outlived a relocation reports `StaleIterator` instead of
/// reading moved storage.
///
/// Movement is clamped: `advance` at the end and `previous` at the
/// beginning do nothing. `move_by` refuses destinations outside
/// `[begin, end)` and leaves the cursor where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    owner: usize,
    generation: u64,
    index: usize,
}

impl Cursor {
    pub(crate) const fn new(owner: usize, generation: u64, index: usize) -> Self {
        Self {
            owner,
            generation,
            index,
        }
    }

    pub(crate) fn owner(&self) -> usize {
        self.owner
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Element index this cursor points at.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves one element forward; a no-op at the end.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Container::check_cursor`].
    pub fn advance<T>(&mut self, container: &Container<T>) -> Result<()> {
        container.check_cursor(self)?;
        if self.index < container.len() {
            self.index += 1;
        }
        Ok(())
    }

    /// Moves one element back; a no-op at the beginning.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Container::check_cursor`].
    pub fn previous<T>(&mut self, container: &Container<T>) -> Result<()> {
        container.check_cursor(self)?;
        self.index = self.index.saturating_sub(1);
        Ok(())
    }

    /// Moves by `offset` elements, which may be negative.
    ///
    /// # Errors
    ///
    /// - the errors of [`Container::check_cursor`]
    /// - `GrowVecError::OutOfRange` if the destination is not a live
    ///   element; the error carries the unchanged position of the cursor
    pub fn move_by<T>(&mut self, container: &Container<T>, offset: isize) -> Result<()> {
        container.check_cursor(self)?;
        let length = container.len();
        match self.index.checked_add_signed(offset) {
            Some(target) if target < length => {
                self.index = target;
                Ok(())
            }
            _ => Err(GrowVecError::OutOfRange {
                index: self.index,
                length,
            }),
        }
    }

    /// Number of elements from `self` to `other`; negative when `other` comes first.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Container::check_cursor`] for either cursor.
    #[allow(clippy::cast_possible_wrap)]
    pub fn distance<T>(&self, container: &Container<T>, other: &Cursor) -> Result<isize> {
        container.check_cursor(self)?;
        container.check_cursor(other)?;
        Ok((other.index as isize).wrapping_sub(self.index as isize))
    }

    /// Borrows the element under the cursor.
    ///
    /// # Errors
    ///
    /// - the errors of [`Container::check_cursor`]
    /// - `GrowVecError::OutOfRange` if the cursor is at the end
    pub fn get<'c, T>(&self, container: &'c Container<T>) -> Result<&'c T> {
        container.check_cursor(self)?;
        container.get(self.index).ok_or(GrowVecError::OutOfRange {
            index: self.index,
            length: container.len(),
        })
    }

    /// Deep-copies `value` into the slot under the cursor.
    ///
    /// # Errors
    ///
    /// - the errors of [`Container::check_cursor`]
    /// - `GrowVecError::OutOfRange` if the cursor is at the end
    /// - any error of the element copy
    pub fn set<T: Element>(&self, container: &mut Container<T>, value: &T) -> Result<()> {
        container.check_cursor(self)?;
        container.at_set(self.index, value)
    }
}
