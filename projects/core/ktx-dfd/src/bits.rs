//! Bit addressed access into buffers of 32-bit words.

use alloc::{vec, vec::Vec};
use bitfield::{bitfield_bitrange, Bit, BitMut, BitRange, BitRangeMut};

/// A view over 32-bit words that addresses individual bits.
///
/// Bit 0 is the least significant bit of the first word, bit 32 the least significant
/// bit of the second word and so on. Ranges may straddle word boundaries.
///
/// Out of range access panics; callers validate offsets before reaching for this type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordBits<T>(pub T);
bitfield_bitrange! {struct WordBits([u32])}

impl<T: AsRef<[u32]>> WordBits<T> {
    /// Reads `len` bits (1 to 32) starting at bit `offset`.
    #[inline]
    pub fn read(&self, offset: usize, len: usize) -> u32 {
        debug_assert!((1..=32).contains(&len));
        self.bit_range(offset + len - 1, offset)
    }

    /// Reads the single bit at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.bit(index)
    }

    /// Number of addressable bits.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.0.as_ref().len() * 32
    }
}

impl<T: AsRef<[u32]> + AsMut<[u32]>> WordBits<T> {
    /// Writes the low `len` bits (1 to 32) of `value` starting at bit `offset`.
    #[inline]
    pub fn write(&mut self, offset: usize, len: usize, value: u32) {
        debug_assert!((1..=32).contains(&len));
        self.set_bit_range(offset + len - 1, offset, value);
    }

    /// Sets the single bit at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        self.set_bit(index, value);
    }
}

impl WordBits<Vec<u32>> {
    /// Creates a zeroed bitmap able to hold at least `bits` bits.
    pub fn zeroed(bits: usize) -> Self {
        Self(vec![0; bits.div_ceil(32)])
    }

    /// Grows the bitmap with zero bits until it can hold at least `bits` bits.
    pub fn ensure_len(&mut self, bits: usize) {
        let words = bits.div_ceil(32);
        if self.0.len() < words {
            self.0.resize(words, 0);
        }
    }
}
