use core::iter::Copied;
use core::slice;

use crate::string::GrowableString;

/// Iterator over the characters of a `GrowableString`, excluding the terminator
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct Bytes<'a> {
    inner: Copied<slice::Iter<'a, u8>>,
}

impl<'a> Bytes<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self {
            inner: bytes.iter().copied(),
        }
    }
}

impl Iterator for Bytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Bytes<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Bytes<'_> {}

impl<'a> IntoIterator for &'a GrowableString {
    type Item = u8;
    type IntoIter = Bytes<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes()
    }
}
