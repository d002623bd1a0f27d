//! Aliasing a C-style (pointer, length) pair as a typed view.
//!
//! Demonstrates:
//!   1. Splitting a slice into a raw pointer and a length
//!   2. Rebuilding a view over the same bytes with `of`
//!   3. Writing through the view and observing the change in the original
//!
//! Run with:
//!   cargo run -p unsafeslice --example alias

use unsafeslice::{as_raw_parts, of};

fn main() {
    let mut original = *b"Hello, world!";
    let (p, n) = as_raw_parts(&mut original);

    // SAFETY: `p` and `n` describe `original`, which is not touched until
    // `alias` has been used for the last time.
    let mut alias = unsafe { of(p, n) };

    println!("original: {}", String::from_utf8_lossy(&original));
    println!("alias: {}", String::from_utf8_lossy(&alias));
    alias[..5].copy_from_slice(b"Adios");
    println!("alias: {}", String::from_utf8_lossy(&alias));
    println!("original: {}", String::from_utf8_lossy(&original));
}
