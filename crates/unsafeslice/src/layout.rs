//! Element layouts and exact byte rescaling.
//!
//! All size arithmetic for a conversion lives here so it can be checked
//! without touching memory. A [`ElemLayout`] is the `(size, align)` pair of
//! an element type; [`rescale`] turns an element count under one layout into
//! an element count under another, failing unless the byte size divides
//! exactly.

use std::mem::{align_of, size_of};

use crate::error::{Extent, SliceError};

/// Size and alignment of an element type, in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElemLayout {
    /// `size_of` the element type.
    pub size: usize,
    /// `align_of` the element type.
    pub align: usize,
}

impl ElemLayout {
    /// Layout of `T`.
    pub const fn of<T>() -> Self {
        Self {
            size: size_of::<T>(),
            align: align_of::<T>(),
        }
    }

    /// Whether the element type occupies no bytes.
    pub const fn is_zero_sized(&self) -> bool {
        self.size == 0
    }

    /// Byte size of `count` elements, or `None` on overflow.
    pub const fn bytes_for(&self, count: usize) -> Option<usize> {
        count.checked_mul(self.size)
    }

    /// Whether `addr` is a valid base address for this element type.
    pub const fn is_aligned(&self, addr: usize) -> bool {
        addr % self.align == 0
    }
}

/// Convert `count` elements of layout `from` into a count of `to` elements.
///
/// `extent` only labels the error. Returns [`SliceError::SizeMismatch`] when
/// the byte size is not a whole number of `to` elements and
/// [`SliceError::ZeroSizedTarget`] when `to` is zero-sized but the byte size
/// is not, and [`SliceError::Overflow`] when the byte size does not fit in
/// `isize::MAX`. A zero byte size always rescales to zero.
pub fn rescale(
    count: usize,
    from: ElemLayout,
    to: ElemLayout,
    extent: Extent,
) -> Result<usize, SliceError> {
    let bytes = match from.bytes_for(count) {
        Some(bytes) if bytes <= isize::MAX as usize => bytes,
        _ => {
            return Err(SliceError::Overflow {
                extent,
                count,
                elem_size: from.size,
            })
        }
    };
    if bytes == 0 {
        return Ok(0);
    }
    if to.is_zero_sized() {
        return Err(SliceError::ZeroSizedTarget { bytes });
    }
    if bytes % to.size != 0 {
        return Err(SliceError::SizeMismatch {
            extent,
            bytes,
            elem_size: to.size,
        });
    }
    Ok(bytes / to.size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const U8: ElemLayout = ElemLayout::of::<u8>();
    const U32: ElemLayout = ElemLayout::of::<u32>();
    const U64: ElemLayout = ElemLayout::of::<u64>();
    const UNIT: ElemLayout = ElemLayout::of::<()>();

    #[test]
    fn layout_matches_std() {
        assert_eq!(U32, ElemLayout { size: 4, align: 4 });
        assert_eq!(ElemLayout::of::<[u8; 3]>(), ElemLayout { size: 3, align: 1 });
        assert!(UNIT.is_zero_sized());
    }

    #[test]
    fn widening_divides_exactly() {
        assert_eq!(rescale(8, U8, U32, Extent::Length), Ok(2));
        assert_eq!(rescale(3, U32, U64, Extent::Length), Err(SliceError::SizeMismatch {
            extent: Extent::Length,
            bytes: 12,
            elem_size: 8,
        }));
    }

    #[test]
    fn narrowing_always_succeeds() {
        assert_eq!(rescale(2, U32, U8, Extent::Capacity), Ok(8));
        assert_eq!(rescale(5, U64, U32, Extent::Capacity), Ok(10));
    }

    #[test]
    fn six_bytes_into_words_fails() {
        let err = rescale(6, U8, U32, Extent::Capacity).unwrap_err();
        assert_eq!(
            err,
            SliceError::SizeMismatch {
                extent: Extent::Capacity,
                bytes: 6,
                elem_size: 4,
            }
        );
    }

    #[test]
    fn empty_rescales_to_empty_even_for_zst() {
        assert_eq!(rescale(0, U8, UNIT, Extent::Length), Ok(0));
        assert_eq!(rescale(1000, UNIT, U32, Extent::Length), Ok(0));
    }

    #[test]
    fn zst_target_rejects_bytes() {
        assert_eq!(
            rescale(4, U8, UNIT, Extent::Capacity),
            Err(SliceError::ZeroSizedTarget { bytes: 4 })
        );
    }

    #[test]
    fn byte_size_beyond_address_space_is_rejected() {
        assert_eq!(
            rescale(usize::MAX, U32, U8, Extent::Length),
            Err(SliceError::Overflow {
                extent: Extent::Length,
                count: usize::MAX,
                elem_size: 4,
            })
        );
        assert!(matches!(
            rescale(isize::MAX as usize, U8, U8, Extent::Capacity),
            Ok(n) if n == isize::MAX as usize
        ));
        assert!(matches!(
            rescale(isize::MAX as usize + 1, U8, U8, Extent::Capacity),
            Err(SliceError::Overflow { .. })
        ));
    }

    #[test]
    fn alignment_check() {
        assert!(U32.is_aligned(0x1000));
        assert!(!U32.is_aligned(0x1002));
        assert!(U8.is_aligned(0x1003));
    }
}
