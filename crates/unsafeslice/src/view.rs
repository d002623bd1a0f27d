//! Typed, non-owning windows over contiguous memory.
//!
//! A [`View`] is a pointer plus a length and a capacity, both counted in
//! elements of `T`. Elements in `[0, len)` are accessible through the usual
//! slice API; elements in `[len, cap)` still belong to the region and come
//! back into reach with [`View::with_len`]. Conversions in
//! [`convert`](mod@crate::convert) preserve both dimensions in bytes.

#![allow(unsafe_code)]

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

use crate::layout::ElemLayout;

/// A mutable, non-owning view of `len` elements of `T`, backed by a region
/// with room for `cap` elements.
///
/// The view borrows its region for `'a`. It never allocates and never
/// frees; dropping a view leaves the memory untouched.
pub struct View<'a, T> {
    ptr: NonNull<T>,
    len: usize,
    cap: usize,
    _marker: PhantomData<&'a mut [T]>,
}

// SAFETY: a View is semantically a `&'a mut [T]`, which is Send/Sync under
// the same bounds.
unsafe impl<T: Send> Send for View<'_, T> {}
unsafe impl<T: Sync> Sync for View<'_, T> {}

impl<'a, T> View<'a, T> {
    /// An empty view. Its pointer is dangling but well aligned for `T`.
    pub const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// View the whole of `slice`. Length and capacity are both `slice.len()`.
    pub fn from_mut_slice(slice: &'a mut [T]) -> Self {
        let len = slice.len();
        // SAFETY: the slice is valid for reads and writes of `len` elements
        // for `'a`, and the borrow is held by the returned view.
        unsafe { Self::from_raw_parts(NonNull::from(slice).cast::<T>(), len, len) }
    }

    /// Assemble a view from its parts.
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned for `T` and valid for reads and writes of `cap`
    /// initialised elements for `'a`, with no other live reference to that
    /// memory. `len <= cap`, and `cap * size_of::<T>()` must not exceed
    /// `isize::MAX`.
    pub(crate) unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize, cap: usize) -> Self {
        debug_assert!(len <= cap);
        Self {
            ptr,
            len,
            cap,
            _marker: PhantomData,
        }
    }

    /// Number of accessible elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of elements the underlying region can hold.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Whether the view has no accessible elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Accessible size in bytes: `len * size_of::<T>()`.
    pub fn byte_len(&self) -> usize {
        self.len * ElemLayout::of::<T>().size
    }

    /// Region size in bytes: `capacity * size_of::<T>()`.
    pub fn byte_capacity(&self) -> usize {
        self.cap * ElemLayout::of::<T>().size
    }

    /// Reslice to `len` elements, keeping the capacity.
    ///
    /// Growing back up to the capacity exposes elements that were hidden by
    /// an earlier shrink.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the capacity.
    #[track_caller]
    pub fn with_len(mut self, len: usize) -> Self {
        assert!(
            len <= self.cap,
            "unsafeslice: length {len} out of range for capacity {}",
            self.cap
        );
        self.len = len;
        self
    }

    /// Raw pointer to the first element.
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable raw pointer to the first element.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// The accessible elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: construction guarantees `len` initialised elements behind
        // an aligned pointer; `&self` prevents concurrent mutation.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The accessible elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`, with `&mut self` guaranteeing uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Give up the view and keep the accessible elements for the full `'a`.
    pub fn into_mut_slice(self) -> &'a mut [T] {
        // SAFETY: the view held the unique borrow for `'a` and is consumed.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// A shorter-lived view of the same region.
    ///
    /// While the returned view is alive `self` is mutably borrowed; once it
    /// is dropped, every write made through it is visible through `self`.
    pub fn reborrow(&mut self) -> View<'_, T> {
        // SAFETY: same region and bounds as `self`, and `self` is mutably
        // borrowed for the lifetime of the result.
        unsafe { View::from_raw_parts(self.ptr, self.len, self.cap) }
    }

    pub(crate) fn non_null(&self) -> NonNull<T> {
        self.ptr
    }
}

impl<T> Default for View<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T> From<&'a mut [T]> for View<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        Self::from_mut_slice(slice)
    }
}

impl<T> Deref for View<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for View<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("len", &self.len)
            .field("cap", &self.cap)
            .field("data", &self.as_slice())
            .finish()
    }
}
