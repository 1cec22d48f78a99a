use growstr::GrowableString;
use growvec::{GrowVecError, GrowthPolicy};
use tracing::trace;

use crate::error::{Result, StreamError};

/// Character capacity of a new stream.
pub const DEFAULT_STREAM_CAPACITY: usize = 16;

/// Reference point of a seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOrigin {
    Begin,
    Current,
    End,
}

/// A byte buffer with independent read and write cursors.
///
/// Writes land at the write cursor: inside the buffer they overwrite,
/// at the end they append and the buffer grows. Reads consume from the
/// read cursor; reading never removes bytes, so a stream can be rewound
/// with [`seek_read`](Self::seek_read) and read again.
///
/// Both cursors always stay within `0..=len`.
#[derive(Debug)]
pub struct TokenStream {
    buffer: GrowableString,
    read: usize,
    write: usize,
}

impl TokenStream {
    /// Creates an empty stream.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the buffer cannot be obtained.
    pub fn new() -> Result<Self> {
        Self::with_capacity(DEFAULT_STREAM_CAPACITY)
    }

    /// Creates an empty stream with room for `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the buffer cannot be obtained.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let policy = GrowthPolicy::new().with_initial_capacity(capacity);
        Ok(Self {
            buffer: GrowableString::with_policy(policy)?,
            read: 0,
            write: 0,
        })
    }

    /// Creates a stream holding a copy of `text`, with the write cursor at the end.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if `text` is not initialized
    /// - `GrowVecError::AllocationFailure` if the buffer cannot be obtained
    pub fn from_string(text: &GrowableString) -> Result<Self> {
        let mut stream = Self::with_capacity(text.len().max(DEFAULT_STREAM_CAPACITY))?;
        stream.write_string(text)?;
        Ok(stream)
    }

    /// Number of bytes in the buffer, read or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The whole buffer, including bytes already read.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// The bytes not yet read.
    #[must_use]
    pub fn remaining(&self) -> &[u8] {
        &self.buffer.as_bytes()[self.read..]
    }

    #[must_use]
    pub fn at_end(&self) -> bool {
        self.read >= self.buffer.len()
    }

    #[must_use]
    pub fn tell_read(&self) -> usize {
        self.read
    }

    #[must_use]
    pub fn tell_write(&self) -> usize {
        self.write
    }

    /// Writes one byte at the write cursor.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the buffer cannot grow.
    pub fn write_char(&mut self, byte: u8) -> Result<()> {
        self.write_bytes(&[byte])
    }

    /// Writes `bytes` at the write cursor.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the buffer cannot grow;
    /// the stream is left unchanged.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let overlap = bytes.len().min(self.buffer.len() - self.write);
        let (head, tail) = bytes.split_at(overlap);

        // Append first: it is the only part that can fail.
        self.buffer.push_bytes(tail)?;
        for (i, &byte) in head.iter().enumerate() {
            self.buffer.at_set(self.write + i, byte)?;
        }
        self.write += bytes.len();
        Ok(())
    }

    /// Writes the characters of `text` at the write cursor.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::NotInitialized` if `text` is not initialized
    /// - `GrowVecError::AllocationFailure` if the buffer cannot grow
    pub fn write_string(&mut self, text: &GrowableString) -> Result<()> {
        if text.state() != growvec::State::Initialized {
            return Err(GrowVecError::NotInitialized.into());
        }
        self.write_bytes(text.as_bytes())
    }

    /// Consumes the next byte; `None` at the end of the stream.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::NotInitialized` if the buffer was torn down.
    pub fn read_char(&mut self) -> Result<Option<u8>> {
        if self.at_end() {
            return Ok(None);
        }
        let byte = self.buffer.at_get(self.read)?;
        self.read += 1;
        Ok(Some(byte))
    }

    /// Consumes up to `buf.len()` bytes into `buf`; returns how many.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> usize {
        let rest = self.remaining();
        let n = rest.len().min(buf.len());
        buf[..n].copy_from_slice(&rest[..n]);
        self.read += n;
        n
    }

    /// Moves the read cursor past any ASCII whitespace.
    pub fn skip_whitespace(&mut self) {
        let skipped = self
            .remaining()
            .iter()
            .take_while(|b| b.is_ascii_whitespace())
            .count();
        self.read += skipped;
    }

    /// Reads up to the next whitespace byte or the end of the stream.
    ///
    /// The delimiter is consumed but not returned. Leading whitespace is not
    /// skipped, so a read cursor sitting on a delimiter yields an empty token.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the token cannot be allocated.
    pub fn extract_token(&mut self) -> Result<GrowableString> {
        let rest = self.remaining();
        let length = rest
            .iter()
            .position(u8::is_ascii_whitespace)
            .unwrap_or(rest.len());
        let token = GrowableString::from_bytes(&rest[..length])?;

        let start = self.read;
        self.read += length;
        if !self.at_end() {
            self.read += 1;
        }
        trace!(start, length, "extracted token");
        Ok(token)
    }

    /// Skips whitespace and extracts the next token; `None` once only
    /// whitespace is left.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the token cannot be allocated.
    pub fn next_word(&mut self) -> Result<Option<GrowableString>> {
        self.skip_whitespace();
        if self.at_end() {
            return Ok(None);
        }
        self.extract_token().map(Some)
    }

    fn seek_target(&self, from: usize, offset: isize, origin: SeekOrigin) -> Result<usize> {
        let length = self.buffer.len();
        let base = match origin {
            SeekOrigin::Begin => 0,
            SeekOrigin::Current => from,
            SeekOrigin::End => length,
        };
        base.checked_add_signed(offset)
            .filter(|&target| target <= length)
            .ok_or(StreamError::InvalidSeek {
                offset,
                origin,
                length,
            })
    }

    /// Moves the read cursor; returns the new position.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::InvalidSeek` if the target is outside
    /// `0..=len`; the cursor is left unchanged.
    pub fn seek_read(&mut self, offset: isize, origin: SeekOrigin) -> Result<usize> {
        self.read = self.seek_target(self.read, offset, origin)?;
        Ok(self.read)
    }

    /// Moves the write cursor; returns the new position.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::InvalidSeek` if the target is outside
    /// `0..=len`; the cursor is left unchanged.
    pub fn seek_write(&mut self, offset: isize, origin: SeekOrigin) -> Result<usize> {
        self.write = self.seek_target(self.write, offset, origin)?;
        Ok(self.write)
    }

    /// Copies the whole buffer, read or not, into a new string.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the copy cannot be allocated.
    pub fn contents(&self) -> Result<GrowableString> {
        Ok(self.buffer.copy()?)
    }

    /// Gives up the stream and returns its buffer.
    #[must_use]
    pub fn into_string(self) -> GrowableString {
        self.buffer
    }
}
