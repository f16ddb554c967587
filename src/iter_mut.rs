use core::iter::FusedIterator;
use core::slice;

use crate::List;

/// A mutable iterator over the elements of a List.
///
/// This struct is created by List::iter_mut().
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<T> Default for IterMut<'_, T> {
    fn default() -> Self {
        Self {
            inner: [].iter_mut(),
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn from_list(list: &'a mut List<T>) -> Self {
        Self {
            inner: list.as_mut_slice().iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> core::fmt::Debug for IterMut<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.inner.as_slice())
            .finish()
    }
}
