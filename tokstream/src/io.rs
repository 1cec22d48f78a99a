//! `embedded_io` plumbing: the stream as a reader and a writer, and
//! filling a stream from any reader.

use embedded_io::{ErrorType, Read, Write};

use crate::error::{Result, StreamError};
use crate::stream::TokenStream;

/// Size of the scratch block used by [`TokenStream::fill_from`].
pub const FILL_CHUNK_SIZE: usize = 64;

impl ErrorType for TokenStream {
    type Error = StreamError;
}

impl Read for TokenStream {
    /// Copies unread bytes into `buf` and advances the read cursor.
    /// Returns `Ok(0)` at the end of the stream.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.read_bytes(buf))
    }
}

impl Write for TokenStream {
    /// Writes all of `buf` at the write cursor; never short.
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl TokenStream {
    /// Writes everything `reader` produces until it reports end of input.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// - `StreamError::Source` with the reader's error kind
    /// - `GrowVecError::AllocationFailure` if the buffer cannot grow; bytes
    ///   from earlier chunks stay written
    pub fn fill_from<R: Read>(&mut self, reader: &mut R) -> Result<usize> {
        let mut chunk = [0u8; FILL_CHUNK_SIZE];
        let mut total = 0;
        loop {
            let n = reader
                .read(&mut chunk)
                .map_err(|e| StreamError::Source(embedded_io::Error::kind(&e)))?;
            if n == 0 {
                return Ok(total);
            }
            self.write_bytes(&chunk[..n])?;
            total += n;
        }
    }
}
