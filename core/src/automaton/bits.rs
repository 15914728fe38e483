//! automaton/bits.rs
//! Byte <-> bit-vector conversion for one pixel.
//!
//! Index 0 is the most significant bit. Both directions are total over `u8`.

use crate::constants::BITS_PER_PIXEL;

/// Eight bits of one pixel, MSB first. Each entry is 0 or 1.
pub type BitVector = [u8; BITS_PER_PIXEL];

/// Expand a byte into its MSB-first bit vector.
#[inline]
pub fn encode(value: u8) -> BitVector {
    let mut bits = [0u8; BITS_PER_PIXEL];
    for (k, bit) in bits.iter_mut().enumerate() {
        *bit = (value >> (BITS_PER_PIXEL - 1 - k)) & 1;
    }
    bits
}

/// Collapse an MSB-first bit vector back into a byte.
///
/// Only the low bit of each entry is read.
#[inline]
pub fn decode(bits: &BitVector) -> u8 {
    bits.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1))
}
