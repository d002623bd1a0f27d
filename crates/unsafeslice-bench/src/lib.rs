//! Workloads for benchmarking zero-copy reinterpretation.
//!
//! Each workload has a byte-at-a-time baseline and a word-at-a-time variant
//! that goes through [`unsafeslice::convert`], so the benches measure what
//! the aliasing actually buys.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use unsafeslice::View;

/// Mask that sets the ASCII lowercase bit in each byte of a word.
pub const LOWER_MASK: u32 = 0x2020_2020;

/// Lowercase ASCII letters and punctuation in place, one byte at a time.
pub fn lower_bytes(text: &mut [u8]) {
    for b in text {
        *b |= 0x20;
    }
}

/// Copy `text` into `words` through a byte view, then lowercase it one
/// word at a time. Returns the byte view trimmed to the text.
///
/// # Panics
///
/// Panics if `words` is too small to hold `text`.
pub fn lower_words<'a>(words: &'a mut [u32], text: &[u8]) -> &'a [u8] {
    let mut view = View::from_mut_slice(words);
    {
        let mut bytes = view.convert_ref::<u8>();
        bytes[..text.len()].copy_from_slice(text);
    }
    for w in view.iter_mut() {
        *w |= LOWER_MASK;
    }
    let bytes: View<'a, u8> = unsafeslice::convert(view);
    bytes.with_len(text.len()).into_mut_slice()
}

/// Sum a byte buffer by reinterpreting it as `u64` words.
///
/// # Panics
///
/// Panics if `bytes` is not 8-byte aligned or not a multiple of 8 long.
pub fn sum_words(bytes: &mut [u8]) -> u64 {
    let words: View<'_, u64> = unsafeslice::convert(View::from_mut_slice(bytes));
    words.iter().fold(0u64, |acc, &w| acc.wrapping_add(w))
}
