//! automaton/step.rs
//! One synchronous evolution round of a single pixel.
//!
//! The neighbourhood never leaves the pixel: position 0 sees a fixed 0 on its
//! left, position 7 a fixed 0 on its right. All eight next bits are computed
//! from the round-start bits.

use crate::constants::BITS_PER_PIXEL;
use super::bits::{decode, encode, BitVector};
use super::types::RuleTable;

/// `(left, centre, right)` for bit position `k`, with zero boundaries.
#[inline]
pub fn neighbourhood(bits: &BitVector, k: usize) -> (u8, u8, u8) {
    let a = if k == 0 { 0 } else { bits[k - 1] };
    let c = if k + 1 == BITS_PER_PIXEL { 0 } else { bits[k + 1] };
    (a, bits[k], c)
}

/// Evolve one pixel by one round.
#[inline]
pub fn step_pixel(value: u8, rules: &RuleTable) -> u8 {
    let current = encode(value);
    let mut next: BitVector = [0; BITS_PER_PIXEL];
    for (k, slot) in next.iter_mut().enumerate() {
        let (a, b, c) = neighbourhood(&current, k);
        *slot = rules[k].evaluate(a, b, c);
    }
    decode(&next)
}

/// Evolve one pixel by `cycles` rounds.
pub fn evolve_pixel(value: u8, rules: &RuleTable, cycles: u32) -> u8 {
    (0..cycles).fold(value, |v, _| step_pixel(v, rules))
}

/// Per-byte lookup of `evolve_pixel` for a fixed table and cycle count.
///
/// A pixel's next value depends only on its own byte, so a full grid pass can
/// index this table instead of re-running the rule evaluation.
pub fn evolution_table(rules: &RuleTable, cycles: u32) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (v, slot) in table.iter_mut().enumerate() {
        *slot = evolve_pixel(v as u8, rules, cycles);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::rules::Rule;
    use crate::constants::REFERENCE_RULES;

    #[test]
    fn edges_use_zero_boundary() {
        let bits = [1u8; 8];
        assert_eq!(neighbourhood(&bits, 0), (0, 1, 1));
        assert_eq!(neighbourhood(&bits, 7), (1, 1, 0));
        assert_eq!(neighbourhood(&bits, 3), (1, 1, 1));
    }

    #[test]
    fn identity_like_table_shifts_right() {
        // Rule 240 copies the left neighbour: a logical right shift by one.
        let table = RuleTable::new([Rule::Rule240; 8]);
        assert_eq!(step_pixel(0b1000_0001, &table), 0b0100_0000);
        assert_eq!(step_pixel(0xFF, &table), 0x7F);
    }

    #[test]
    fn reference_table_known_values() {
        let table = RuleTable::from_ids(&REFERENCE_RULES).unwrap();
        assert_eq!(evolve_pixel(0, &table, 4), 66);
        assert_eq!(evolve_pixel(255, &table, 4), 59);
        assert_eq!(evolve_pixel(128, &table, 4), 194);
    }

    #[test]
    fn zero_cycles_is_identity() {
        let table = RuleTable::from_ids(&REFERENCE_RULES).unwrap();
        assert_eq!(evolve_pixel(173, &table, 0), 173);
    }
}
