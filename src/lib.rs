//! # pylist
//!
//! `pylist` implements a dynamic array list with **Python-list ergonomics**
//! on top of a manually managed contiguous buffer.
//!
//! ## Features
//! - Negative indexing: `list[-1]` is the last element.
//! - Slicing with `start`, `stop` and a (possibly negative) `step`.
//! - Arithmetic-style operators: `+` / `+=` concatenate, `-` / `-=` remove
//!   the first occurrence, `*` / `*=` repeat.
//! - A stable sort, an order-preserving `uniquify`, `reverse`, plus
//!   `find` / `contains` / `count` / `min` / `max` queries.
//! - Amortized-O(1) append backed by capacity doubling with an explicit
//!   ceiling and a small initial capacity.
//!
//! Fallible operations report [`ListError`] values; the operator sugar
//! (`Index`, `Mul`, ...) panics with the same messages, mirroring how the
//! std containers split `get` and `[]`.
//!
//! ## Example
//! ```rust
//! use pylist::{List, list};
//!
//! let mut list: List<i64> = list![3, 1, 2] + list![1, 1];
//! assert_eq!(list, [3, 1, 2, 1, 1]);
//!
//! assert_eq!(list.find(&1), Some(1));
//! assert_eq!(list.count(&1), 3);
//! assert_eq!(list[-1], 1);
//!
//! list.uniquify();
//! assert_eq!(list, [3, 1, 2]);
//!
//! list.sort();
//! assert_eq!(list, [1, 2, 3]);
//! ```

mod error;
mod index;
mod into_iter;
mod iter;
mod iter_mut;
mod raw;

pub use error::{ListError, Result};
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use std::ptr;

use crate::raw::RawBuf;

/// The capacity every list starts with.
///
/// Deliberately small so that capacity growth is exercised by ordinary
/// workloads and tests.
pub const INIT_CAPACITY: usize = 4;

/// The hard capacity ceiling: one below the largest non-negative `isize`
/// index, so `size + 1` can never overflow index arithmetic.
pub const MAX_CAPACITY: usize = isize::MAX as usize - 1;

/// Creates a [`List`] from a literal sequence of elements.
///
/// # Example
/// ```rust
/// use pylist::{List, list};
///
/// let list: List<i32> = list![3, 1, 2];
/// assert_eq!(list, [3, 1, 2]);
///
/// let empty: List<i32> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => { $crate::List::new() };
    ($($element:expr),+ $(,)?) => { $crate::List::from([$($element),+]) };
}

/// A dynamic array list with Python-list ergonomics.
///
/// Elements live in a single exclusively-owned contiguous buffer; the
/// first [`len`](List::len) slots are live, the rest are allocated spare
/// capacity. Every index-accepting operation understands Python-style
/// negative indices (`-1` is the last element) and checks its raw index
/// range before mutating anything: a call that returns an error leaves
/// the list untouched.
///
/// # Type Parameters
/// - `T`: the type of elements stored in the list. Zero-sized types are
///   not supported and are rejected at construction.
///
/// # Example
/// ```rust
/// use pylist::{List, list};
///
/// let mut list: List<i32> = list![1, 2, 3];
/// assert_eq!(list[-1], 3);
///
/// list += 4;
/// assert_eq!(list.slice(1, 4, 1).unwrap(), [2, 3, 4]);
/// ```
pub struct List<T> {
    buf: RawBuf<T>,
    size: usize,
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_infallible(element);
        }
    }
}

impl<'a, T> Extend<&'a T> for List<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Creates a new, empty `List` owning an [`INIT_CAPACITY`]-slot buffer.
    ///
    /// # Example
    /// ```rust
    /// use pylist::List;
    ///
    /// let list: List<i64> = List::new();
    ///
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            buf: RawBuf::with_capacity(INIT_CAPACITY),
            size: 0,
        }
    }

    /// Returns the number of elements currently stored in the list.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// assert_eq!(list![1, 2].len(), 2);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Checks if the list is empty.
    ///
    /// # Example
    /// ```rust
    /// use pylist::{List, list};
    ///
    /// assert!(List::<i64>::new().is_empty());
    /// assert!(!list![1].is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots the owned buffer currently holds.
    ///
    /// Never below [`INIT_CAPACITY`], never above [`MAX_CAPACITY`].
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.buf.as_ptr(), self.size) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.buf.as_ptr(), self.size) }
    }

    /// Push that treats the capacity ceiling as unreachable.
    fn push_infallible(&mut self, element: T) {
        if let Err(err) = self.push(element) {
            panic!("{err}");
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// The index can be negative, like Python's list: `list.get(-1)` gets
    /// the last element. The accepted range is `-len() <= index < len()`.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let list = list![1, 2, 3];
    /// assert_eq!(list.get(0), Ok(&1));
    /// assert_eq!(list.get(-1), Ok(&3));
    /// assert!(list.get(3).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&T> {
        let size = self.size as isize;
        let index = index::normalize(index, self.size, -size, size)? as usize;

        Ok(&self.as_slice()[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Accepts the same Python-style indices as [`get`](List::get).
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let mut list = list![1, 2, 3];
    /// *list.get_mut(-1).unwrap() = 9;
    /// assert_eq!(list, [1, 2, 9]);
    /// ```
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let size = self.size as isize;
        let index = index::normalize(index, self.size, -size, size)? as usize;

        Ok(&mut self.as_mut_slice()[index])
    }

    /// Inserts `element` at `index`, shifting subsequent elements right.
    ///
    /// The accepted range is `-len() <= index <= len()`; `len()` appends.
    /// Fails with [`ListError::CapacityExceeded`] when the list already
    /// holds [`MAX_CAPACITY`] elements, before any growth is attempted.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let mut list = list![1, 3];
    /// list.insert(1, 2)?;
    /// assert_eq!(list, [1, 2, 3]);
    ///
    /// list.insert(-1, 0)?; // before the last element
    /// assert_eq!(list, [1, 2, 0, 3]);
    ///
    /// assert!(list.insert(9, 9).is_err());
    /// # Ok::<(), pylist::ListError>(())
    /// ```
    pub fn insert(&mut self, index: isize, element: T) -> Result<()> {
        index::check_full(self.size, MAX_CAPACITY)?;

        let size = self.size as isize;
        let index = index::normalize(index, self.size, -size, size + 1)? as usize;

        if self.size == self.buf.capacity() {
            self.buf.grow(self.size);
        }

        unsafe {
            let spot = self.buf.as_ptr().add(index);
            ptr::copy(spot, spot.add(1), self.size - index);
            ptr::write(spot, element);
        }
        self.size += 1;

        Ok(())
    }

    /// Removes and returns the element at `index`, shifting subsequent
    /// elements left.
    ///
    /// The accepted range is `-len() <= index < len()`; an empty list
    /// fails with [`ListError::Empty`].
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let mut list = list![1, 2, 3];
    /// assert_eq!(list.remove(-2), Ok(2));
    /// assert_eq!(list, [1, 3]);
    /// ```
    pub fn remove(&mut self, index: isize) -> Result<T> {
        index::check_empty(self.size)?;

        let size = self.size as isize;
        let index = index::normalize(index, self.size, -size, size)? as usize;

        let element = unsafe {
            let spot = self.buf.as_ptr().add(index);
            let element = ptr::read(spot);
            ptr::copy(spot.add(1), spot, self.size - index - 1);
            element
        };
        self.size -= 1;

        Ok(element)
    }

    /// Appends `element` to the end of the list. Amortized O(1).
    ///
    /// Equivalent to `insert(len(), element)`; the only possible failure
    /// is [`ListError::CapacityExceeded`].
    ///
    /// # Example
    /// ```rust
    /// use pylist::List;
    ///
    /// let mut list = List::new();
    /// list.push(1)?;
    /// list.push(2)?;
    /// assert_eq!(list, [1, 2]);
    /// # Ok::<(), pylist::ListError>(())
    /// ```
    pub fn push(&mut self, element: T) -> Result<()> {
        self.insert(self.size as isize, element)
    }

    /// Appends a clone of every element of `other`, in order.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let mut list = list![1, 2];
    /// list.extend_from_list(&list![3, 4]);
    /// assert_eq!(list, [1, 2, 3, 4]);
    /// ```
    pub fn extend_from_list(&mut self, other: &Self)
    where
        T: Clone,
    {
        // An operand aliasing the receiver would be invalidated by growth
        // reallocation partway through the loop; snapshot it first.
        if ptr::eq(self, other) {
            let snapshot: List<T> = other.iter().cloned().collect();
            for element in snapshot {
                self.push_infallible(element);
            }
            return;
        }

        for element in other {
            self.push_infallible(element.clone());
        }
    }

    /// Removes the first occurrence of `element`, if it is present.
    ///
    /// Returns whether an element was removed; an absent element leaves
    /// the list unchanged.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let mut list = list![1, 2, 1];
    /// assert!(list.remove_first(&1));
    /// assert_eq!(list, [2, 1]);
    /// assert!(!list.remove_first(&9));
    /// ```
    pub fn remove_first(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.find(element) {
            Some(index) => {
                // the index came from find, it is always in range
                let _ = self.remove(index as isize);
                true
            }
            None => false,
        }
    }

    /// Replaces the list with `times` concatenated copies of itself.
    ///
    /// `0` empties the list; a negative count fails with
    /// [`ListError::InvalidArgument`].
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let mut list = list![1, 2];
    /// list.repeat_in_place(2)?;
    /// assert_eq!(list, [1, 2, 1, 2]);
    ///
    /// list.repeat_in_place(0)?;
    /// assert!(list.is_empty());
    /// # Ok::<(), pylist::ListError>(())
    /// ```
    pub fn repeat_in_place(&mut self, times: isize) -> Result<()>
    where
        T: Clone,
    {
        // The repetition is built in a scratch list so the receiver is
        // never both the operand and the destination of a concatenation.
        let repeated = self.repeat(times)?;
        *self = repeated;

        Ok(())
    }

    /// Returns a new list holding `times` concatenated copies of this one.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// assert_eq!(list![1, 2].repeat(2)?, [1, 2, 1, 2]);
    /// assert_eq!(list![1, 2].repeat(0)?, []);
    /// assert!(list![1, 2].repeat(-1).is_err());
    /// # Ok::<(), pylist::ListError>(())
    /// ```
    pub fn repeat(&self, times: isize) -> Result<Self>
    where
        T: Clone,
    {
        if times < 0 {
            return Err(ListError::InvalidArgument("repeat count cannot be negative"));
        }

        let mut repeated = Self::new();
        for _ in 0..times {
            repeated.extend_from_list(self);
        }

        Ok(repeated)
    }

    /// Removes every element and resets the capacity to [`INIT_CAPACITY`],
    /// releasing an over-grown buffer instead of merely zeroing the size.
    ///
    /// # Example
    /// ```rust
    /// use pylist::{INIT_CAPACITY, List};
    ///
    /// let mut list: List<i32> = (0..100).collect();
    /// assert!(list.capacity() > INIT_CAPACITY);
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), INIT_CAPACITY);
    /// ```
    pub fn clear(&mut self) {
        let live = self.size;
        self.size = 0;
        unsafe {
            ptr::drop_in_place(std::slice::from_raw_parts_mut(self.buf.as_ptr(), live));
        }

        if self.buf.capacity() != INIT_CAPACITY {
            self.buf = RawBuf::with_capacity(INIT_CAPACITY);
        }
    }

    /// Reverses the list in place.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let mut list = list![1, 2, 3];
    /// list.reverse();
    /// assert_eq!(list, [3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        let data = self.as_mut_slice();

        let (mut i, mut j) = (0, data.len().saturating_sub(1));
        while i < j {
            data.swap(i, j);
            i += 1;
            j -= 1;
        }
    }

    /// Removes duplicate elements, keeping the first occurrence of each
    /// distinct value in its original relative order.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let mut list = list![3, 1, 2, 1, 1];
    /// list.uniquify();
    /// assert_eq!(list, [3, 1, 2]);
    /// ```
    pub fn uniquify(&mut self)
    where
        T: PartialEq,
    {
        let mut i = 0;
        while i < self.size {
            // remove later occurrences while the value at i is duplicated
            let mut j = i + 1;
            while j < self.size {
                if self.as_slice()[j] == self.as_slice()[i] {
                    let _ = self.remove(j as isize);
                } else {
                    j += 1;
                }
            }
            i += 1;
        }
    }

    /// Sorts the list in ascending order. The sort is stable.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let mut list = list![3, 1, 2];
    /// list.sort();
    /// assert_eq!(list, [1, 2, 3]);
    /// ```
    pub fn sort(&mut self)
    where
        T: PartialOrd,
    {
        self.sort_by(|a, b| a < b);
    }

    /// Sorts the list with a strict-weak-ordering "less-than" predicate.
    ///
    /// The sort is stable: elements the predicate considers equivalent
    /// keep their relative order. Bubble sort with an early exit on a
    /// clean pass; only strictly out-of-order adjacent pairs swap.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let mut list = list![1, 3, 2];
    /// list.sort_by(|a, b| a > b);
    /// assert_eq!(list, [3, 2, 1]);
    /// ```
    pub fn sort_by(&mut self, mut less: impl FnMut(&T, &T) -> bool) {
        let data = self.as_mut_slice();
        let len = data.len();

        for i in 0..len.saturating_sub(1) {
            let mut swapped = false;
            for j in 0..len - i - 1 {
                if less(&data[j + 1], &data[j]) {
                    data.swap(j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }

    /// Exchanges the contents of two lists in O(1).
    ///
    /// Only buffer ownership, capacity and size move; no element is
    /// copied.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let mut first = list![1, 2];
    /// let mut second = list![3];
    /// first.swap(&mut second);
    /// assert_eq!(first, [3]);
    /// assert_eq!(second, [1, 2]);
    /// ```
    pub fn swap(&mut self, that: &mut Self) {
        mem::swap(self, that);
    }

    /// Returns the index of the first occurrence of `element`, if any.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let list = list![3, 1, 2, 1, 1];
    /// assert_eq!(list.find(&1), Some(1));
    /// assert_eq!(list.find(&9), None);
    /// ```
    pub fn find(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_in(element, 0, self.size)
    }

    /// Returns the index of the first occurrence of `element` at or after
    /// `start` and before `stop`; `stop` is clamped to `len()`.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let list = list![3, 1, 2, 1, 1];
    /// assert_eq!(list.find_in(&1, 2, list.len()), Some(3));
    /// assert_eq!(list.find_in(&1, 2, 3), None);
    /// ```
    pub fn find_in(&self, element: &T, start: usize, stop: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        let stop = stop.min(self.size);
        (start..stop).find(|&i| self.as_slice()[i] == *element)
    }

    /// Returns true if the list contains `element`.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// assert!(list![1, 2].contains(&2));
    /// assert!(!list![1, 2].contains(&3));
    /// ```
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(element).is_some()
    }

    /// Counts the occurrences of `element` in the list.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// assert_eq!(list![3, 1, 2, 1, 1].count(&1), 3);
    /// ```
    pub fn count(&self, element: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|e| *e == element).count()
    }

    /// Returns the smallest element; ties go to the first one.
    ///
    /// # Example
    /// ```rust
    /// use pylist::{List, list};
    ///
    /// assert_eq!(list![3, 1, 2].min(), Ok(&1));
    /// assert!(List::<i32>::new().min().is_err());
    /// ```
    pub fn min(&self) -> Result<&T>
    where
        T: PartialOrd,
    {
        index::check_empty(self.size)?;

        let mut smallest = &self.as_slice()[0];
        for element in self.iter().skip(1) {
            if element < smallest {
                smallest = element;
            }
        }

        Ok(smallest)
    }

    /// Returns the largest element; ties go to the first one.
    ///
    /// # Example
    /// ```rust
    /// use pylist::{List, list};
    ///
    /// assert_eq!(list![3, 1, 2].max(), Ok(&3));
    /// assert!(List::<i32>::new().max().is_err());
    /// ```
    pub fn max(&self) -> Result<&T>
    where
        T: PartialOrd,
    {
        index::check_empty(self.size)?;

        let mut largest = &self.as_slice()[0];
        for element in self.iter().skip(1) {
            if element > largest {
                largest = element;
            }
        }

        Ok(largest)
    }

    /// Returns the slice from `start` (included) to `stop` (excluded)
    /// walking in strides of `step`; the receiver is unchanged.
    ///
    /// Indices and the step can be negative. `start` accepts
    /// `-len() ..= len()`, `stop` accepts `-len()-1 ..= len()` (one past
    /// either end, in negative or positive form). A step direction that
    /// never reaches `stop` yields an empty list rather than an error; a
    /// zero step fails with [`ListError::InvalidArgument`].
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let list = list![0, 1, 2, 3, 4];
    /// assert_eq!(list.slice(1, 4, 2)?, [1, 3]);
    /// assert_eq!(list.slice(-1, -6, -1)?, [4, 3, 2, 1, 0]);
    /// assert_eq!(list.slice(3, 1, 1)?, []);
    /// assert!(list.slice(0, 5, 0).is_err());
    /// # Ok::<(), pylist::ListError>(())
    /// ```
    pub fn slice(&self, start: isize, stop: isize, step: isize) -> Result<Self>
    where
        T: Clone,
    {
        if step == 0 {
            return Err(ListError::InvalidArgument("slice step cannot be zero"));
        }

        let size = self.size as isize;
        let start = index::normalize(start, self.size, -size, size + 1)?;
        let stop = index::normalize(stop, self.size, -size - 1, size + 1)?;

        let mut slice = Self::new();

        // a backward walk starting one past the end begins at the last
        // element, like Python's list[n::-1]
        let mut i = if step < 0 && start == size {
            size - 1
        } else {
            start
        };
        while if step > 0 { i < stop } else { i > stop } {
            slice.push_infallible(self.as_slice()[i as usize].clone());
            // a stride this large has left the index range anyway
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }

        Ok(slice)
    }

    /// [`slice`](List::slice) with the default step of 1.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// assert_eq!(list![0, 1, 2, 3].slice_to(1, 3)?, [1, 2]);
    /// # Ok::<(), pylist::ListError>(())
    /// ```
    pub fn slice_to(&self, start: isize, stop: isize) -> Result<Self>
    where
        T: Clone,
    {
        self.slice(start, stop, 1)
    }

    /// Provides an iterator over the list's elements.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let list = list![0, 1, 2];
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    /// Provides a mutable iterator over the list's elements.
    ///
    /// # Example
    /// ```rust
    /// use pylist::list;
    ///
    /// let mut list = list![0, 1, 2];
    /// for element in list.iter_mut() {
    ///     *element *= 10;
    /// }
    /// assert_eq!(list, [0, 10, 20]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::from_list(self)
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(self.as_mut_slice() as *mut [T]);
        }
    }
}

impl<T: Clone> Clone for List<T> {
    /// Deep-copies the live prefix into a fresh buffer sized to the
    /// source's capacity.
    fn clone(&self) -> Self {
        let mut list = Self {
            buf: RawBuf::with_capacity(self.buf.capacity()),
            size: 0,
        };
        for element in self {
            unsafe {
                ptr::write(list.buf.as_ptr().add(list.size), element.clone());
            }
            list.size += 1;
        }
        list
    }
}

impl<T, const N: usize> PartialEq<[T; N]> for List<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; N]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for List<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for List<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq for List<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> Eq for List<T> where T: Eq {}

// No Ord/PartialOrd between lists: Ord::min/Ord::max would shadow the
// inherent min()/max() queries on owned receivers.

impl<T> Hash for List<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T> fmt::Debug for List<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list as `[e1, e2, ..., en]`, `[]` when empty.
///
/// # Example
/// ```rust
/// use pylist::{List, list};
///
/// assert_eq!(list![1, 2, 3].to_string(), "[1, 2, 3]");
/// assert_eq!(List::<i32>::new().to_string(), "[]");
/// ```
impl<T> fmt::Display for List<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for element in iter {
                write!(f, ", {element}")?;
            }
        }
        write!(f, "]")
    }
}

impl<T> Index<isize> for List<T> {
    type Output = T;

    /// `list[index]` with Python-style negative indices.
    ///
    /// # Panics
    /// Panics when the index is out of range; [`get`](List::get) is the
    /// non-panicking form.
    fn index(&self, index: isize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<isize> for List<T> {
    fn index_mut(&mut self, index: isize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> AddAssign<T> for List<T> {
    /// `list += element` appends the element.
    ///
    /// # Panics
    /// Panics when the list already holds [`MAX_CAPACITY`] elements;
    /// [`push`](List::push) is the non-panicking form.
    fn add_assign(&mut self, element: T) {
        self.push_infallible(element);
    }
}

impl<T> AddAssign<List<T>> for List<T> {
    /// `list += other` appends every element of `other`, consuming it.
    fn add_assign(&mut self, list: List<T>) {
        self.extend(list);
    }
}

impl<T> AddAssign<&List<T>> for List<T>
where
    T: Clone,
{
    /// `list += &other` appends a clone of every element of `other`.
    fn add_assign(&mut self, list: &List<T>) {
        self.extend_from_list(list);
    }
}

impl<T> Add<T> for List<T> {
    type Output = List<T>;

    fn add(mut self, element: T) -> List<T> {
        self += element;
        self
    }
}

impl<T> Add<List<T>> for List<T> {
    type Output = List<T>;

    fn add(mut self, list: List<T>) -> List<T> {
        self += list;
        self
    }
}

impl<T> Add<&List<T>> for List<T>
where
    T: Clone,
{
    type Output = List<T>;

    fn add(mut self, list: &List<T>) -> List<T> {
        self += list;
        self
    }
}

impl<T> Add<T> for &List<T>
where
    T: Clone,
{
    type Output = List<T>;

    fn add(self, element: T) -> List<T> {
        self.clone() + element
    }
}

impl<T> Add<&List<T>> for &List<T>
where
    T: Clone,
{
    type Output = List<T>;

    fn add(self, list: &List<T>) -> List<T> {
        self.clone() + list
    }
}

impl<T> SubAssign<T> for List<T>
where
    T: PartialEq,
{
    /// `list -= element` removes the first occurrence, if any.
    fn sub_assign(&mut self, element: T) {
        self.remove_first(&element);
    }
}

impl<T> Sub<T> for List<T>
where
    T: PartialEq,
{
    type Output = List<T>;

    fn sub(mut self, element: T) -> List<T> {
        self -= element;
        self
    }
}

impl<T> Sub<T> for &List<T>
where
    T: PartialEq + Clone,
{
    type Output = List<T>;

    fn sub(self, element: T) -> List<T> {
        self.clone() - element
    }
}

impl<T> MulAssign<isize> for List<T>
where
    T: Clone,
{
    /// `list *= times` repeats the list in place.
    ///
    /// # Panics
    /// Panics when `times` is negative;
    /// [`repeat_in_place`](List::repeat_in_place) is the non-panicking
    /// form.
    fn mul_assign(&mut self, times: isize) {
        if let Err(err) = self.repeat_in_place(times) {
            panic!("{err}");
        }
    }
}

impl<T> Mul<isize> for List<T>
where
    T: Clone,
{
    type Output = List<T>;

    fn mul(mut self, times: isize) -> List<T> {
        self *= times;
        self
    }
}

impl<T> Mul<isize> for &List<T>
where
    T: Clone,
{
    type Output = List<T>;

    fn mul(self, times: isize) -> List<T> {
        self.clone() * times
    }
}

impl<T> Mul<List<T>> for isize
where
    T: Clone,
{
    type Output = List<T>;

    /// `times * list`, same as `list * times`.
    fn mul(self, list: List<T>) -> List<T> {
        list * self
    }
}

impl<T> Mul<&List<T>> for isize
where
    T: Clone,
{
    type Output = List<T>;

    fn mul(self, list: &List<T>) -> List<T> {
        list.clone() * self
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::from_list(self)
    }
}
