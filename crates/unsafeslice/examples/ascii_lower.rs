//! Word-at-a-time ASCII lowering through an aliased byte view.
//!
//! The transformation (setting bit 5 of every byte) does not depend on
//! endianness, so text copied into a `u32` buffer can be processed four
//! bytes per operation and read back as bytes.
//!
//! Run with:
//!   cargo run -p unsafeslice --example ascii_lower

use unsafeslice::{convert, convert_at, View};

const INPUT: &str = "HELLO, WORLD!";

fn with_convert() -> String {
    // A `u32` buffer gives the byte view word alignment for free.
    let mut buf = vec![0u32; INPUT.len().div_ceil(4)];
    let mut words = View::from_mut_slice(&mut buf);

    words.convert_ref::<u8>()[..INPUT.len()].copy_from_slice(INPUT.as_bytes());
    for w in words.iter_mut() {
        *w |= 0x2020_2020;
    }

    let alias: View<'_, u8> = convert(words);
    String::from_utf8_lossy(&alias[..INPUT.len()]).into_owned()
}

fn with_convert_at() -> String {
    let mut buf = vec![0u32; INPUT.len().div_ceil(4)];

    // The target type comes from the declaration of `alias`.
    let mut alias: View<'_, u8> = View::empty();
    convert_at(&mut alias, View::from_mut_slice(&mut buf));
    alias[..INPUT.len()].copy_from_slice(INPUT.as_bytes());

    let mut words: View<'_, u32> = View::empty();
    convert_at(&mut words, alias);
    words.iter_mut().for_each(|w| *w |= 0x2020_2020);

    let bytes = words.into_bytes();
    String::from_utf8_lossy(&bytes[..INPUT.len()]).into_owned()
}

fn main() {
    println!("{}", with_convert());
    println!("{}", with_convert_at());
}
