use core::iter::FusedIterator;
use core::slice;

use crate::List;

/// An iterator over the elements of a List.
///
/// This struct is created by List::iter().
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self { inner: [].iter() }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a List<T>) -> Self {
        Self {
            inner: list.as_slice().iter(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

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

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter").field(&self.inner.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::List;

    use super::Iter;

    #[test]
    fn test_default_iterator_yields_nothing() {
        let mut sut: Iter<i32> = Default::default();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn test_iter_forward() {
        let mut list = List::from([0, 1, 2, 3, 4]);
        let sut = list.iter();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[0, 1, 2, 3, 4]);

        list.clear();
        let sut = list.iter();
        assert_eq!(&sut.copied().collect::<Vec<usize>>(), &[]);
    }

    #[test]
    fn test_iter_backward() {
        let mut list = List::from([0, 1, 2, 3, 4]);
        let sut = list.iter().rev();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[4, 3, 2, 1, 0]);

        list.clear();
        let sut = list.iter().rev();
        assert_eq!(&sut.copied().collect::<Vec<usize>>(), &[]);
    }

    #[test]
    fn test_double_ended_iterator_works_correctly() {
        let list = List::from([0, 1, 2, 3, 4]);

        let mut sut = list.iter();
        assert_eq!(sut.len(), 5);

        assert_eq!(sut.next(), Some(&0));
        assert_eq!(sut.len(), 4);

        assert_eq!(sut.next_back(), Some(&4));
        assert_eq!(sut.len(), 3);

        assert_eq!(sut.next(), Some(&1));
        assert_eq!(sut.len(), 2);

        assert_eq!(sut.next_back(), Some(&3));
        assert_eq!(sut.len(), 1);

        assert_eq!(sut.next(), Some(&2));
        assert_eq!(sut.len(), 0);

        assert_eq!(sut.next_back(), None);
        assert_eq!(sut.len(), 0);

        assert_eq!(sut.next(), None);
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn test_last_works_correctly() {
        let list = List::from([0, 1, 2, 3, 4]);
        let sut = list.iter();
        assert_eq!(sut.last(), Some(&4));
    }

    #[test]
    fn test_clone_works_correctly() {
        let list = List::from([0, 1, 2, 3, 4]);

        let mut base = list.iter();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[0, 1, 2, 3, 4]);

        base.next();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[1, 2, 3, 4]);

        base.next_back();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<Vec<_>>(), &[1, 2, 3]);
    }

    #[test]
    fn test_debug_works_correctly() {
        let array = [0, 1, 2, 3, 4];
        let list = List::from(array);
        let sut = list.iter();
        assert_eq!(format!("{sut:?}"), format!("Iter({array:?})"));
    }
}
