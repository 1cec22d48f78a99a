use core::fmt;

use growvec::{Container, Element, GrowVecError, GrowthPolicy, RawBuffer, Result, State};
use tracing::debug;

use crate::iter::Bytes;
use crate::search;

/// Capacity of a freshly created string: room for the terminator only.
pub const DEFAULT_STRING_CAPACITY: usize = 0;

/// A growable byte string that always keeps a NUL after its last byte.
///
/// The bytes live in a [`RawBuffer<u8>`] whose last slot is the
/// terminator, so while the string is initialized the buffer holds
/// `len() + 1` bytes and [`as_bytes_with_nul`](Self::as_bytes_with_nul) can
/// be handed to anything expecting a C string. Embedded NUL bytes are
/// allowed and count towards the length.
///
/// Lengths and capacities are in bytes and never include the terminator.
pub struct GrowableString {
    raw: RawBuffer<u8>,
    policy: GrowthPolicy,
    state: State,
}

impl GrowableString {
    /// Returns a string record that has not been created yet.
    #[must_use]
    pub const fn uninitialized() -> Self {
        Self {
            raw: RawBuffer::new(),
            policy: GrowthPolicy::new(),
            state: State::Uninitialized,
        }
    }

    /// Creates an empty string.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the initial block cannot be obtained.
    pub fn new() -> Result<Self> {
        Self::with_policy(GrowthPolicy::new().with_initial_capacity(DEFAULT_STRING_CAPACITY))
    }

    /// Creates an empty string that grows according to `policy`.
    ///
    /// The policy's initial capacity counts characters; one more slot is
    /// always reserved for the terminator. The ceiling counts slots, so a
    /// string under `max_capacity(n)` holds at most `n - 1` characters.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::InvalidParameter` if the policy does not validate or
    ///   its ceiling leaves no slot for the terminator
    /// - `GrowVecError::AllocationFailure` if the initial block cannot be obtained
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self> {
        policy.validate()?;
        let slots = policy
            .initial_capacity()
            .checked_add(1)
            .ok_or(GrowVecError::AllocationFailure {
                requested: usize::MAX,
            })?;
        if policy.max_capacity().is_some_and(|max| slots > max) {
            return Err(GrowVecError::InvalidParameter {
                reason: "max capacity leaves no room for the terminator",
            });
        }
        let mut raw = RawBuffer::with_capacity(slots, &policy)?;
        raw.push(0, &policy)?;
        Ok(Self {
            raw,
            policy,
            state: State::Initialized,
        })
    }

    /// Creates an empty string with room for `capacity` characters.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the block cannot be obtained.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut string = Self::new()?;
        string.reserve(capacity)?;
        Ok(string)
    }

    /// Creates a string of `length` copies of `byte`.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the block cannot be obtained.
    pub fn with_fill(length: usize, byte: u8) -> Result<Self> {
        let mut string = Self::new()?;
        string.resize(length)?;
        string.fill(length, byte)?;
        Ok(string)
    }

    /// Creates a string holding a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the block cannot be obtained.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut string = Self::with_capacity(bytes.len())?;
        string.insert_bytes(0, bytes)?;
        Ok(string)
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.state == State::Initialized {
            Ok(())
        } else {
            Err(GrowVecError::NotInitialized)
        }
    }

    fn out_of_range(&self, index: usize) -> GrowVecError {
        GrowVecError::OutOfRange {
            index,
            length: self.len(),
        }
    }

    // Rewrites the terminator after a shrink.
    fn terminate(&mut self) {
        if let Some(last) = self.raw.as_mut_slice().last_mut() {
            *last = 0;
        }
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len().saturating_sub(1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of characters the string can hold without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity().saturating_sub(1)
    }

    /// The characters, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        let length = self.len();
        &self.raw.as_slice()[..length]
    }

    /// The characters followed by the terminating NUL.
    ///
    /// Empty if the string is not initialized.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.raw.as_slice()
    }

    /// The characters as text, if they are valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    #[must_use]
    pub fn bytes(&self) -> Bytes<'_> {
        Bytes::new(self.as_bytes())
    }

    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the string is not initialized
    /// - `GrowVecError::OutOfRange` if `index >= len`
    pub fn at_get(&self, index: usize) -> Result<u8> {
        self.ensure_initialized()?;
        self.as_bytes()
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the string is not initialized
    /// - `GrowVecError::OutOfRange` if `index >= len`
    pub fn at_set(&mut self, index: usize, byte: u8) -> Result<()> {
        self.ensure_initialized()?;
        if index >= self.len() {
            return Err(self.out_of_range(index));
        }
        self.raw.replace(index, byte)?;
        Ok(())
    }

    /// Appends one byte.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the string is not initialized
    /// - `GrowVecError::AllocationFailure` if growth fails; the string is unchanged
    pub fn push_back(&mut self, byte: u8) -> Result<()> {
        self.ensure_initialized()?;
        let length = self.len();
        // The new slot becomes the terminator, the old terminator the byte.
        self.raw.push(0, &self.policy)?;
        self.raw.replace(length, byte)?;
        Ok(())
    }

    /// Removes and returns the last byte, or `None` if the string is empty.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::NotInitialized` if the string is not initialized.
    pub fn pop_back(&mut self) -> Result<Option<u8>> {
        self.ensure_initialized()?;
        if self.is_empty() {
            return Ok(None);
        }
        self.raw.pop();
        let last = self.len();
        Ok(Some(self.raw.replace(last, 0)?))
    }

    /// Guarantees room for at least `capacity` characters.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the string is not initialized
    /// - `GrowVecError::AllocationFailure` if the block cannot be obtained
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        self.ensure_initialized()?;
        let slots = capacity
            .checked_add(1)
            .ok_or(GrowVecError::AllocationFailure {
                requested: usize::MAX,
            })?;
        self.raw.ensure_capacity(slots, &self.policy)?;
        Ok(())
    }

    /// Sets the length to `length`; new characters are NUL bytes.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the string is not initialized
    /// - `GrowVecError::AllocationFailure` if the block cannot be obtained
    pub fn resize(&mut self, length: usize) -> Result<()> {
        self.ensure_initialized()?;
        let current = self.len();
        if length <= current {
            self.raw.truncate(length + 1);
            self.terminate();
            return Ok(());
        }
        self.reserve(length)?;
        for _ in current..length {
            self.raw.push(0, &self.policy)?;
        }
        Ok(())
    }

    /// Empties the string. Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::NotInitialized` if the string is not initialized.
    pub fn clear(&mut self) -> Result<()> {
        self.resize(0)
    }

    /// Overwrites the first `min(count, len)` characters with `byte`.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::NotInitialized` if the string is not initialized.
    pub fn fill(&mut self, count: usize, byte: u8) -> Result<()> {
        self.ensure_initialized()?;
        let count = count.min(self.len());
        self.raw.as_mut_slice()[..count].fill(byte);
        Ok(())
    }

    /// Returns an independent copy.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the string is not initialized
    /// - `GrowVecError::AllocationFailure` if the block cannot be obtained
    pub fn copy(&self) -> Result<Self> {
        self.ensure_initialized()?;
        let mut copy = Self::with_policy(self.policy.with_initial_capacity(self.len()))?;
        copy.insert_bytes(0, self.as_bytes())?;
        Ok(copy)
    }

    /// Position of the first `byte` at or after `offset`.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the string is not initialized
    /// - `GrowVecError::NotFound` if there is no such byte
    pub fn find(&self, offset: usize, byte: u8) -> Result<usize> {
        self.ensure_initialized()?;
        search::find_byte(self.as_bytes(), offset, byte).ok_or(GrowVecError::NotFound)
    }

    /// Position of the first full occurrence of `needle` at or after `offset`.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the string is not initialized
    /// - `GrowVecError::InvalidParameter` if `needle` is empty
    /// - `GrowVecError::NotFound` if `needle` does not occur in full
    pub fn find_substring(&self, offset: usize, needle: &[u8]) -> Result<usize> {
        self.ensure_initialized()?;
        if needle.is_empty() {
            return Err(GrowVecError::InvalidParameter {
                reason: "needle must not be empty",
            });
        }
        search::find_bytes(self.as_bytes(), offset, needle).ok_or(GrowVecError::NotFound)
    }

    /// Copies up to `length` characters starting at `offset`.
    ///
    /// Both arguments are clamped to the string, so out-of-range input
    /// yields a shorter or empty string rather than an error.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the string is not initialized
    /// - `GrowVecError::AllocationFailure` if the block cannot be obtained
    pub fn substr(&self, offset: usize, length: usize) -> Result<Self> {
        self.ensure_initialized()?;
        let bytes = self.as_bytes();
        let start = offset.min(bytes.len());
        let end = start + length.min(bytes.len() - start);
        Self::from_bytes(&bytes[start..end])
    }

    /// Inserts one byte at `offset`.
    ///
    /// # Errors
    ///
    /// Same as [`GrowableString::insert_bytes`].
    pub fn insert_char(&mut self, offset: usize, byte: u8) -> Result<()> {
        self.insert_bytes(offset, &[byte])
    }

    /// Inserts `bytes` at `offset`, shifting the tail right.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if the string is not initialized
    /// - `GrowVecError::OutOfRange` if `offset > len`
    /// - `GrowVecError::AllocationFailure` if growth fails
    ///
    /// On error the string is unchanged.
    pub fn insert_bytes(&mut self, offset: usize, bytes: &[u8]) -> Result<()> {
        self.ensure_initialized()?;
        if offset > self.len() {
            return Err(self.out_of_range(offset));
        }
        self.raw.insert_iter(offset, bytes.iter().copied(), &self.policy)?;
        Ok(())
    }

    /// Inserts the characters of `other` at `offset`.
    ///
    /// # Errors
    ///
    /// Same as [`GrowableString::insert_bytes`], plus `NotInitialized` if
    /// `other` is not initialized.
    pub fn insert_string(&mut self, offset: usize, other: &GrowableString) -> Result<()> {
        other.ensure_initialized()?;
        self.insert_bytes(offset, other.as_bytes())
    }

    /// Inserts the bytes held by `container` at `offset`.
    ///
    /// # Errors
    ///
    /// Same as [`GrowableString::insert_bytes`], plus `NotInitialized` if
    /// `container` is not initialized.
    pub fn insert_container(&mut self, offset: usize, container: &Container<u8>) -> Result<()> {
        if container.state() != State::Initialized {
            return Err(GrowVecError::NotInitialized);
        }
        self.insert_bytes(offset, container.data())
    }

    /// Appends `bytes`.
    ///
    /// # Errors
    ///
    /// Same as [`GrowableString::insert_bytes`].
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.insert_bytes(self.len(), bytes)
    }

    /// Frees the storage. Every later operation reports `NotInitialized`.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::NotInitialized` if the string is not initialized.
    pub fn destroy(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        debug!(length = self.len(), "destroying string");
        self.raw.release();
        self.state = State::Destroyed;
        Ok(())
    }
}

impl Element for GrowableString {
    fn try_default() -> Result<Self> {
        Self::new()
    }

    fn try_clone(&self) -> Result<Self> {
        self.copy()
    }
}

impl TryFrom<&[u8]> for GrowableString {
    type Error = GrowVecError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&str> for GrowableString {
    type Error = GrowVecError;

    fn try_from(text: &str) -> Result<Self> {
        Self::from_bytes(text.as_bytes())
    }
}

impl fmt::Display for GrowableString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.as_bytes() {
            fmt::Write::write_char(f, char::from(byte))?;
        }
        Ok(())
    }
}

impl fmt::Debug for GrowableString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("GrowableString");
        match self.as_str() {
            Some(text) => tuple.field(&text),
            None => tuple.field(&self.as_bytes()),
        };
        tuple.field(&self.state).finish()
    }
}

impl PartialEq for GrowableString {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for GrowableString {}

impl PartialEq<[u8]> for GrowableString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for GrowableString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for GrowableString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for GrowableString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
