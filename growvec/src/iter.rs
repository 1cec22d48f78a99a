use core::iter::Rev;
use core::slice;

use crate::core::Container;

/// Iterator over the elements of a `Container`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct ContainerIter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for ContainerIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for ContainerIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for ContainerIter<'_, T> {}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = ContainerIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        ContainerIter {
            inner: self.data().iter(),
        }
    }
}

/// Reverse iterator over the elements of a `Container`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct ContainerRevIter<'a, T> {
    inner: Rev<slice::Iter<'a, T>>,
}

impl<'a, T> ContainerRevIter<'a, T> {
    pub(crate) fn new(data: &'a [T]) -> Self {
        Self {
            inner: data.iter().rev(),
        }
    }
}

impl<'a, T> Iterator for ContainerRevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ContainerRevIter<'_, T> {}
