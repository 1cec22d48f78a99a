#![allow(dead_code)]

use embedded_io::{ErrorKind, ErrorType, Read};

/// Yields one byte per `read` call.
pub struct OneByteReader<I>
where
    I: Iterator<Item = u8>,
{
    iter: I,
}

impl<I> OneByteReader<I>
where
    I: Iterator<Item = u8>,
{
    pub fn new(iter: I) -> Self {
        OneByteReader { iter }
    }
}

impl<I> ErrorType for OneByteReader<I>
where
    I: Iterator<Item = u8>,
{
    type Error = ErrorKind;
}

impl<I> Read for OneByteReader<I>
where
    I: Iterator<Item = u8>,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        if let Some(next_byte) = self.iter.next() {
            buf[0] = next_byte;
            Ok(1)
        } else {
            Ok(0)
        }
    }
}

/// Serves `data` in the given chunk sizes, then fails with `error`.
pub struct FailingReader<'a> {
    data: &'a [u8],
    error: ErrorKind,
}

impl<'a> FailingReader<'a> {
    pub fn new(data: &'a [u8], error: ErrorKind) -> Self {
        FailingReader { data, error }
    }
}

impl ErrorType for FailingReader<'_> {
    type Error = ErrorKind;
}

impl Read for FailingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.data.is_empty() {
            return Err(self.error);
        }
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}
