//! The owned allocation behind a [`List`](crate::List).
//!
//! `RawBuf` manages capacity and the raw memory only; element lifetimes
//! (initialization and dropping of the live prefix) are the owner's job.

use std::alloc::{self, Layout};
use std::ptr::{self, NonNull};

use crate::MAX_CAPACITY;

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
}

unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// Allocates a buffer of exactly `cap` slots.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        assert!(
            size_of::<T>() != 0,
            "zero-sized element types are not supported"
        );
        debug_assert!(cap >= 1 && cap <= MAX_CAPACITY);

        Self {
            ptr: Self::allocate(cap),
            cap,
        }
    }

    fn allocate(cap: usize) -> NonNull<T> {
        let layout = Layout::array::<T>(cap).unwrap();
        assert!(layout.size() <= isize::MAX as usize, "allocation too large");

        let ptr = unsafe { alloc::alloc(layout) };
        match NonNull::new(ptr as *mut T) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(layout),
        }
    }

    /// Doubles the capacity, clamped to [`MAX_CAPACITY`]; once past the
    /// halfway point the capacity jumps straight to the ceiling.
    ///
    /// The `live` initialized slots are moved bitwise into the new
    /// allocation and the old one is released.
    pub(crate) fn grow(&mut self, live: usize) {
        debug_assert!(live <= self.cap);
        debug_assert!(self.cap < MAX_CAPACITY);

        let new_cap = if self.cap < MAX_CAPACITY / 2 {
            self.cap * 2
        } else {
            MAX_CAPACITY
        };

        let new_ptr = Self::allocate(new_cap);
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), live);
            alloc::dealloc(self.ptr.as_ptr() as *mut u8, Layout::array::<T>(self.cap).unwrap());
        }

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        // the live prefix has already been dropped by the owner
        unsafe {
            alloc::dealloc(self.ptr.as_ptr() as *mut u8, Layout::array::<T>(self.cap).unwrap());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::RawBuf;

    #[test]
    fn test_with_capacity_allocates_exactly_the_requested_slots() {
        let buf: RawBuf<i64> = RawBuf::with_capacity(4);
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn test_grow_doubles_the_capacity() {
        let mut buf: RawBuf<i64> = RawBuf::with_capacity(4);

        buf.grow(0);
        assert_eq!(buf.capacity(), 8);

        buf.grow(0);
        assert_eq!(buf.capacity(), 16);
    }

    #[test]
    fn test_grow_carries_the_live_prefix_over() {
        let mut buf: RawBuf<i64> = RawBuf::with_capacity(4);
        for i in 0..4 {
            unsafe { ptr::write(buf.as_ptr().add(i as usize), i * 10) };
        }

        buf.grow(4);
        assert_eq!(buf.capacity(), 8);
        for i in 0..4 {
            assert_eq!(unsafe { ptr::read(buf.as_ptr().add(i as usize)) }, i * 10);
        }
    }

    #[test]
    fn test_zero_sized_elements_are_rejected() {
        let result = std::panic::catch_unwind(|| RawBuf::<()>::with_capacity(4));
        assert!(result.is_err());
    }
}
