//! Reinterpretation error types.

use std::error::Error;
use std::fmt;

/// Which dimension of a view failed a size check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extent {
    /// The number of accessible elements.
    Length,
    /// The number of elements the underlying region can hold.
    Capacity,
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "length"),
            Self::Capacity => write!(f, "capacity"),
        }
    }
}

/// Errors that can occur when reinterpreting a view as another element type.
///
/// Every variant describes a programming error: the panicking entry points
/// ([`convert`](crate::convert()), [`convert_at`](crate::convert_at)) abort
/// the call with this error's message, and the `try_*` entry points hand it
/// back untouched. No variant ever comes with a partially converted view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// The byte size of the source extent is not a whole number of target
    /// elements.
    SizeMismatch {
        /// The extent that failed the check.
        extent: Extent,
        /// Byte size of that extent in the source view.
        bytes: usize,
        /// `size_of` the target element type.
        elem_size: usize,
    },
    /// The region's base address does not satisfy the target element's
    /// alignment.
    Misaligned {
        /// Base address of the source view.
        addr: usize,
        /// `align_of` the target element type.
        align: usize,
    },
    /// The byte size of an extent does not fit in `isize::MAX`.
    Overflow {
        /// The extent that failed the check.
        extent: Extent,
        /// Element count of that extent.
        count: usize,
        /// `size_of` the element type the count is measured in.
        elem_size: usize,
    },
    /// A non-empty region was converted to a zero-sized element type, which
    /// has no well-defined element count.
    ZeroSizedTarget {
        /// Byte capacity of the source view.
        bytes: usize,
    },
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                extent,
                bytes,
                elem_size,
            } => {
                write!(
                    f,
                    "size mismatch: {extent} of {bytes} bytes is not a multiple of element size {elem_size}"
                )
            }
            Self::Misaligned { addr, align } => {
                write!(f, "misaligned: address {addr:#x} is not aligned to {align}")
            }
            Self::Overflow {
                extent,
                count,
                elem_size,
            } => {
                write!(
                    f,
                    "overflow: {extent} of {count} elements of {elem_size} bytes exceeds the address space"
                )
            }
            Self::ZeroSizedTarget { bytes } => {
                write!(
                    f,
                    "cannot view {bytes} bytes as a zero-sized element type"
                )
            }
        }
    }
}

impl Error for SliceError {}
