//! Zero-copy typed views over raw memory.
//!
//! A [`View`] is a non-owning window of `T` elements with a length and a
//! capacity. Views come from a borrow ([`View::from_mut_slice`]) or from a
//! raw pointer and element count ([`of`]), and can be reinterpreted as a
//! different element type with [`convert()`] or [`convert_at`]. Conversion
//! never copies: both views alias the same bytes.
//!
//! # Size rules
//!
//! Converting a view of `T` to a view of `U` keeps the byte length and byte
//! capacity fixed, so both `len * size_of::<T>()` and
//! `cap * size_of::<T>()` must be exact multiples of `size_of::<U>()`, and
//! the base address must be aligned for `U`. Breaking any of these is a
//! programming error: [`convert()`] panics with the [`SliceError`] message,
//! [`try_convert`] returns it. Empty regions always convert to an empty
//! view, whatever the target type.
//!
//! ```text
//! View<u32>  len=1 cap=2   [20 30 10 00 | 70 60 50 40]
//!                                │
//!                       convert::<u8, u32>
//!                                ▼
//! View<u8>   len=4 cap=8   [20 30 10 00 | 70 60 50 40]
//! ```
//!
//! # Safety
//!
//! Only [`of`] is `unsafe`: the caller vouches that the pointer describes
//! live, exclusive, initialised memory for the chosen lifetime. Every other
//! entry point takes a view whose borrow is already tracked, and element
//! types that take part in a conversion must be [`bytemuck::Pod`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod convert;
pub mod error;
pub mod layout;
mod raw;
pub mod view;

// Public re-exports for the primary API surface.
pub use convert::{convert, convert_at, try_convert, try_convert_at};
pub use error::{Extent, SliceError};
pub use layout::ElemLayout;
pub use raw::{as_raw_parts, of};
pub use view::View;
