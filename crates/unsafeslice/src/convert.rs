//! Zero-copy reinterpretation of a view as another element type.
//!
//! A conversion keeps the base address and recomputes length and capacity
//! in units of the target type. Both must come out exact: the capacity is
//! checked first, then the length, then the target alignment. Any failure
//! is a [`SliceError`]; the panicking forms turn it into a panic and never
//! produce a partial view.
//!
//! Element types must be [`Pod`] on both sides, so any bytes written
//! through one view are valid values in the other.

#![allow(unsafe_code)]

use std::any::type_name;

use bytemuck::Pod;
use tracing::{debug, trace};

use crate::error::{Extent, SliceError};
use crate::layout::{rescale, ElemLayout};
use crate::view::View;

/// Target `(len, cap)` for a conversion, or `None` if the region is empty.
fn plan<U, T>(src: &View<'_, T>) -> Result<Option<(usize, usize)>, SliceError> {
    let from = ElemLayout::of::<T>();
    let to = ElemLayout::of::<U>();

    let cap = rescale(src.capacity(), from, to, Extent::Capacity)?;
    if cap == 0 {
        return Ok(None);
    }
    let len = rescale(src.len(), from, to, Extent::Length)?;

    let addr = src.as_ptr() as usize;
    if !to.is_aligned(addr) {
        return Err(SliceError::Misaligned {
            addr,
            align: to.align,
        });
    }
    Ok(Some((len, cap)))
}

/// Reinterpret `src` as a view of `U`, or explain why it cannot be.
///
/// An empty region (zero byte capacity) always converts to an empty view.
pub fn try_convert<'a, U: Pod, T: Pod>(src: View<'a, T>) -> Result<View<'a, U>, SliceError> {
    let planned = plan::<U, T>(&src).inspect_err(|err| {
        debug!(
            from = type_name::<T>(),
            to = type_name::<U>(),
            len = src.len(),
            cap = src.capacity(),
            %err,
            "rejected slice conversion"
        );
    })?;

    let Some((len, cap)) = planned else {
        return Ok(View::empty());
    };
    trace!(
        from = type_name::<T>(),
        to = type_name::<U>(),
        len,
        cap,
        "converted slice view"
    );
    // SAFETY: the byte span is unchanged (exact rescale), the base address
    // is aligned for `U` (checked in `plan`), every bit pattern is a valid
    // `U` (`Pod`), and `src` is consumed so its borrow moves to the result.
    Ok(unsafe { View::from_raw_parts(src.non_null().cast::<U>(), len, cap) })
}

/// Reinterpret `src` as a view of `U` without copying.
///
/// # Panics
///
/// Panics if the capacity or length of `src` is not a whole number of `U`
/// elements, or if its address is not aligned for `U`. See [`try_convert`]
/// for the non-panicking form.
///
/// # Example
///
/// ```
/// use unsafeslice::{convert, View};
///
/// let input = b"HELLO, WORLD!";
/// let mut buf = vec![0u32; input.len().div_ceil(4)];
///
/// let mut alias: View<'_, u8> = convert(View::from_mut_slice(&mut buf));
/// alias[..input.len()].copy_from_slice(input);
/// alias.iter_mut().for_each(|b| *b |= 0x20);
///
/// assert_eq!(&alias[..input.len()], b"hello, world!");
/// ```
#[track_caller]
pub fn convert<'a, U: Pod, T: Pod>(src: View<'a, T>) -> View<'a, U> {
    match try_convert(src) {
        Ok(view) => view,
        Err(err) => panic!("unsafeslice: {err}"),
    }
}

/// Reinterpret `src` and store the result in `dst`.
///
/// Useful where the target type is easiest to state through the
/// destination's declared type. On error `dst` is left as it was.
pub fn try_convert_at<'a, U: Pod, T: Pod>(
    dst: &mut View<'a, U>,
    src: View<'a, T>,
) -> Result<(), SliceError> {
    *dst = try_convert(src)?;
    Ok(())
}

/// Reinterpret `src` and store the result in `dst`.
///
/// # Panics
///
/// Under the same conditions as [`convert`]. `dst` is not modified when
/// the call panics.
#[track_caller]
pub fn convert_at<'a, U: Pod, T: Pod>(dst: &mut View<'a, U>, src: View<'a, T>) {
    if let Err(err) = try_convert_at(dst, src) {
        panic!("unsafeslice: {err}");
    }
}

impl<'a, T: Pod> View<'a, T> {
    /// Reinterpret a reborrow of this view as `U`.
    ///
    /// Writes through the result land in the same bytes and are visible
    /// through `self` once the result is dropped.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`convert`].
    #[track_caller]
    pub fn convert_ref<U: Pod>(&mut self) -> View<'_, U> {
        convert(self.reborrow())
    }

    /// Fallible form of [`convert_ref`](Self::convert_ref).
    pub fn try_convert_ref<U: Pod>(&mut self) -> Result<View<'_, U>, SliceError> {
        try_convert(self.reborrow())
    }

    /// View the same region as raw bytes. Never fails.
    pub fn into_bytes(self) -> View<'a, u8> {
        let size = ElemLayout::of::<T>().size;
        if size == 0 || self.capacity() == 0 {
            return View::empty();
        }
        let (len, cap) = (self.len() * size, self.capacity() * size);
        // SAFETY: same byte span, `u8` has alignment 1, and every byte of a
        // `Pod` value is initialised.
        unsafe { View::from_raw_parts(self.non_null().cast::<u8>(), len, cap) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C, align(8))]
    struct Aligned([u8; 16]);

    #[test]
    fn words_to_bytes_scales_len_and_cap() {
        let mut words = [0x0010_2030u32, 0x4050_6070];
        let v = View::from_mut_slice(&mut words).with_len(1);
        let b: View<'_, u8> = convert(v);
        assert_eq!(b.len(), 4);
        assert_eq!(b.capacity(), 8);
    }

    #[test]
    fn bytes_to_words_requires_alignment() {
        let mut buf = Aligned([0; 16]);
        let bytes = &mut buf.0[1..5];
        let err = try_convert::<u32, u8>(View::from_mut_slice(bytes)).unwrap_err();
        assert!(matches!(err, SliceError::Misaligned { align: 4, .. }));
    }

    #[test]
    fn aligned_bytes_to_words() {
        let mut buf = Aligned([0; 16]);
        buf.0[..4].copy_from_slice(&7u32.to_ne_bytes());
        let w: View<'_, u32> = convert(View::from_mut_slice(&mut buf.0));
        assert_eq!(w.len(), 4);
        assert_eq!(w[0], 7);
    }

    #[test]
    fn capacity_checked_before_length() {
        let mut buf = Aligned([0; 16]);
        let v = View::from_mut_slice(&mut buf.0[..6]).with_len(4);
        assert_eq!(
            try_convert::<u32, u8>(v).unwrap_err(),
            SliceError::SizeMismatch {
                extent: Extent::Capacity,
                bytes: 6,
                elem_size: 4,
            }
        );
    }

    #[test]
    fn length_mismatch_reported() {
        let mut buf = Aligned([0; 16]);
        let v = View::from_mut_slice(&mut buf.0[..8]).with_len(6);
        assert_eq!(
            try_convert::<u32, u8>(v).unwrap_err(),
            SliceError::SizeMismatch {
                extent: Extent::Length,
                bytes: 6,
                elem_size: 4,
            }
        );
    }

    #[test]
    fn empty_source_converts_to_anything() {
        let empty: View<'_, u8> = View::empty();
        let big: View<'_, [u64; 512]> = convert(empty);
        assert!(big.is_empty());
        let unit: View<'_, ()> = convert(View::<u32>::empty());
        assert_eq!(unit.capacity(), 0);
    }

    #[test]
    fn zero_sized_target_rejected() {
        let mut data = [1u8, 2];
        let err = try_convert::<(), u8>(View::from_mut_slice(&mut data)).unwrap_err();
        assert_eq!(err, SliceError::ZeroSizedTarget { bytes: 2 });
    }

    #[test]
    fn zero_sized_source_is_empty() {
        let mut units = [(); 5];
        let v: View<'_, u32> = convert(View::from_mut_slice(&mut units));
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn try_convert_at_leaves_dst_on_error() {
        let mut keep = [9u32; 2];
        let mut dst = View::from_mut_slice(&mut keep);
        let mut bytes = Aligned([0; 16]);
        let src = View::from_mut_slice(&mut bytes.0[..3]);
        assert!(try_convert_at(&mut dst, src).is_err());
        assert_eq!(dst.as_slice(), &[9, 9]);
    }

    #[test]
    #[should_panic(expected = "unsafeslice: size mismatch: length of 6 bytes")]
    fn convert_panics_with_error_message() {
        let mut buf = Aligned([0; 16]);
        let v = View::from_mut_slice(&mut buf.0[..8]).with_len(6);
        let _: View<'_, u32> = convert(v);
    }

    #[test]
    fn convert_ref_writes_back() {
        let mut words = [0u32; 2];
        let mut v = View::from_mut_slice(&mut words);
        {
            let mut bytes = v.convert_ref::<u8>();
            bytes.fill(0xff);
        }
        assert_eq!(v.as_slice(), &[u32::MAX, u32::MAX]);
    }

    #[test]
    fn into_bytes_preserves_span() {
        let mut halves = [1u16, 2, 3];
        let b = View::from_mut_slice(&mut halves).with_len(2).into_bytes();
        assert_eq!(b.len(), 4);
        assert_eq!(b.capacity(), 6);
    }
}
