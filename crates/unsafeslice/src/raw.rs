//! Low-level primitives for building views from raw memory.
//!
//! This is the only place where a caller-supplied raw pointer becomes a
//! [`View`]. Everything downstream of [`of`] works on views whose bounds
//! were established here or by a safe borrow.

#![allow(unsafe_code)]

use std::ptr::{self, NonNull};

use crate::layout::ElemLayout;
use crate::view::View;

/// Build a view of `count` elements of `T` starting at `ptr`.
///
/// Returns an empty view, without reading `ptr`, when `ptr` is null or
/// `count` is zero. No `T` is ever constructed or moved, so arbitrarily
/// large element types are fine.
///
/// # Safety
///
/// Unless the view is empty by the rule above, `ptr` must be aligned for
/// `T` and valid for reads and writes of `count` initialised elements for
/// all of `'a`, and nothing else may access that memory while the view (or
/// any view derived from it) is alive.
///
/// # Panics
///
/// Panics if `count * size_of::<T>()` exceeds `isize::MAX`.
///
/// # Example
///
/// ```
/// let mut original = *b"Hello, world!";
/// let (p, n) = unsafeslice::as_raw_parts(&mut original);
///
/// // SAFETY: `p` and `n` describe `original`, which is not touched again
/// // until `alias` is gone.
/// let mut alias = unsafe { unsafeslice::of(p, n) };
/// alias[..5].copy_from_slice(b"Adios");
///
/// assert_eq!(&original, b"Adios, world!");
/// ```
#[track_caller]
pub unsafe fn of<'a, T>(ptr: *mut T, count: usize) -> View<'a, T> {
    let Some(ptr) = NonNull::new(ptr) else {
        return View::empty();
    };
    if count == 0 {
        return View::empty();
    }
    let fits = ElemLayout::of::<T>()
        .bytes_for(count)
        .is_some_and(|bytes| bytes <= isize::MAX as usize);
    assert!(
        fits,
        "unsafeslice: {count} elements of {} bytes overflow the address space",
        ElemLayout::of::<T>().size
    );
    // SAFETY: non-null, in bounds per the size check, and the caller
    // vouches for alignment, initialisation and exclusivity.
    unsafe { View::from_raw_parts(ptr, count, count) }
}

/// Split a slice into a C-style `(pointer, length)` pair.
///
/// An empty slice yields a null pointer, matching what foreign code
/// usually hands back for "no data". The pair is suitable input for [`of`].
pub fn as_raw_parts<T>(slice: &mut [T]) -> (*mut T, usize) {
    if slice.is_empty() {
        return (ptr::null_mut(), 0);
    }
    (slice.as_mut_ptr(), slice.len())
}
