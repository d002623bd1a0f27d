//! Reusable buffers and data for reinterpretation tests.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A 1 MiB element type. Large enough that materialising one on the stack
/// by accident would show up in tests.
pub type Big = [u8; 1 << 20];

/// Two words whose bytes are all distinct, so any misplaced byte is visible.
pub const WORDS: [u32; 2] = [0x0010_2030, 0x4050_6070];

/// ASCII text whose lowercase form differs in every letter.
pub const SHOUT: &str = "HELLO, WORLD!";

/// A heap-allocated [`Big`], built without a stack temporary.
pub fn boxed_big() -> Box<Big> {
    vec![0u8; std::mem::size_of::<Big>()]
        .into_boxed_slice()
        .try_into()
        .expect("boxed slice has exactly size_of::<Big>() bytes")
}

/// `len` bytes from a ChaCha8 stream seeded with `seed`.
pub fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = vec![0u8; len];
    rng.fill_bytes(&mut out);
    out
}

/// A byte buffer whose start is aligned to 8 bytes.
///
/// Backed by `Vec<u64>`, so any prefix of it can be viewed as `u16`, `u32`
/// or `u64` elements.
pub struct AlignedBytes {
    words: Vec<u64>,
    len: usize,
}

impl AlignedBytes {
    /// A zeroed buffer of `len` bytes.
    pub fn zeroed(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(8)],
            len,
        }
    }

    /// A buffer holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = Self::zeroed(bytes.len());
        buf.as_mut_bytes().copy_from_slice(bytes);
        buf
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &bytemuck::cast_slice::<u64, u8>(&self.words)[..self.len]
    }

    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut::<u64, u8>(&mut self.words)[..self.len]
    }
}
