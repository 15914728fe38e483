//! cipher/mask.rs
//! Multiplicative byte mask modulo 256.
//!
//! `u8` wrapping multiplication is multiplication mod 256, and
//! `MASK_FORWARD * MASK_INVERSE == 1 (mod 256)`, so the pair is a bijection.

use crate::constants::{MASK_FORWARD, MASK_INVERSE};

#[inline]
pub fn mask_byte(value: u8) -> u8 {
    value.wrapping_mul(MASK_FORWARD)
}

#[inline]
pub fn unmask_byte(value: u8) -> u8 {
    value.wrapping_mul(MASK_INVERSE)
}

pub fn mask_in_place(pixels: &mut [u8]) {
    for p in pixels.iter_mut() {
        *p = mask_byte(*p);
    }
}

pub fn unmask_in_place(pixels: &mut [u8]) {
    for p in pixels.iter_mut() {
        *p = unmask_byte(*p);
    }
}
