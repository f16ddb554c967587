use core::iter::FusedIterator;
use core::mem::ManuallyDrop;
use core::ptr;
use core::slice;

use crate::raw::RawBuf;
use crate::{INIT_CAPACITY, List};

/// An owning iterator over the elements of a List.
///
/// This struct is created by List::into_iter().
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    start: usize,
    end: usize,
}

const _: () = assert!(
    core::mem::size_of::<IntoIter<usize>>() == core::mem::size_of::<usize>() * 4,
    "unexpected memory layout"
);

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            buf: RawBuf::with_capacity(INIT_CAPACITY),
            start: 0,
            end: 0,
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(list: List<T>) -> Self {
        // the buffer changes owner; the List must not run its destructor
        let list = ManuallyDrop::new(list);

        Self {
            buf: unsafe { ptr::read(&list.buf) },
            start: 0,
            end: list.size,
        }
    }

    fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> Clone for IntoIter<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.as_slice()
            .iter()
            .cloned()
            .collect::<List<T>>()
            .into_iter()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        let element = unsafe { ptr::read(self.buf.as_ptr().add(self.start)) };
        self.start += 1;
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // drop the unvisited elements; RawBuf releases the allocation
        unsafe {
            ptr::drop_in_place(slice::from_raw_parts_mut(
                self.buf.as_ptr().add(self.start),
                self.end - self.start,
            ));
        }
    }
}

impl<T> core::fmt::Debug for IntoIter<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use quickcheck_macros::quickcheck;

    use crate::List;

    use super::IntoIter;

    #[test]
    fn test_default_iterator_yields_nothing() {
        let mut sut: IntoIter<i32> = Default::default();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn test_iter_forward() {
        let seed: [usize; 0] = [];
        let list = List::from(seed);
        assert!(seed.into_iter().eq(list.into_iter()));

        let seed = [0, 1, 2, 3, 4];
        let list = List::from(seed);
        assert!(seed.into_iter().eq(list.into_iter()));
    }

    #[test]
    fn test_iter_backward() {
        let seed = [0, 1, 2, 3, 4];
        let list = List::from(seed);
        assert!(seed.into_iter().rev().eq(list.into_iter().rev()));
    }

    #[test]
    fn test_double_ended_iterator_works_correctly() {
        let list = List::from([0, 1, 2, 3, 4]);

        let mut sut = list.into_iter();
        assert_eq!(sut.next(), Some(0));
        assert_eq!(sut.next_back(), Some(4));
        assert_eq!(sut.next(), Some(1));
        assert_eq!(sut.next_back(), Some(3));
        assert_eq!(sut.next(), Some(2));
        assert_eq!(sut.next_back(), None);
        assert_eq!(sut.next(), None);
    }

    #[test]
    fn test_last_works_correctly() {
        let list = List::from([0, 1, 2, 3, 4]);
        let sut = list.into_iter();
        assert_eq!(sut.last(), Some(4));
    }

    #[test]
    fn test_clone_works_correctly() {
        let list = List::from([0, 1, 2, 3, 4]);

        let mut base = list.into_iter();

        let sut = base.clone();
        assert_eq!(&sut.collect::<Vec<_>>(), &[0, 1, 2, 3, 4]);

        base.next();

        let sut = base.clone();
        assert_eq!(&sut.collect::<Vec<_>>(), &[1, 2, 3, 4]);

        base.next_back();

        let sut = base.clone();
        assert_eq!(&sut.collect::<Vec<_>>(), &[1, 2, 3]);
    }

    #[test]
    fn test_debug_works_correctly() {
        let array = [0, 1, 2, 3, 4];
        let list = List::from(array);
        let sut = list.into_iter();
        assert_eq!(format!("{sut:?}"), format!("IntoIter({array:?})"));
    }

    #[test]
    fn test_unvisited_elements_are_dropped_with_the_iterator() {
        struct Counted(Rc<Cell<usize>>);

        impl Drop for Counted {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));

        let mut list = List::new();
        for _ in 0..6 {
            list.push(Counted(Rc::clone(&drops))).unwrap();
        }

        let mut sut = list.into_iter();
        drop(sut.next());
        drop(sut.next_back());
        assert_eq!(drops.get(), 2);

        drop(sut);
        assert_eq!(drops.get(), 6);
    }

    #[quickcheck]
    fn test_iter_behavioural(seed: Vec<i32>) {
        let actual: List<i32> = seed.iter().copied().collect();

        assert!(actual.clone().into_iter().eq(seed.iter().copied()));
        assert!(
            actual
                .clone()
                .into_iter()
                .rev()
                .eq(seed.iter().copied().rev())
        );
        assert_eq!(actual.clone().into_iter().count(), seed.len());
        assert_eq!(actual.clone().into_iter().collect::<List<_>>(), actual);
    }
}
