#[cfg(test)]
mod tests {
    use automata_cipher_core::automaton::{decode, encode};
    use proptest::prelude::*;

// # ✅ 1. Exhaustive byte round trip

    #[test]
    fn every_byte_round_trips() {
        for v in 0..=255u8 {
            let bits = encode(v);
            assert_eq!(bits.len(), 8);
            assert!(bits.iter().all(|&b| b <= 1), "non-bit entry for {}", v);
            assert_eq!(decode(&bits), v, "round trip failed for {}", v);
        }
    }

// # ✅ 2. Bit order is MSB first

    #[test]
    fn index_zero_is_most_significant() {
        for k in 0..8 {
            let v = 1u8 << (7 - k);
            let bits = encode(v);
            assert_eq!(bits[k], 1);
            assert_eq!(bits.iter().map(|&b| b as u32).sum::<u32>(), 1);
        }
    }

    proptest! {
        #[test]
        fn prop_decode_is_weighted_sum(bits in any::<[bool; 8]>()) {
            let vector = bits.map(|b| b as u8);
            let expected: u32 = vector
                .iter()
                .enumerate()
                .map(|(i, &b)| (b as u32) << (7 - i))
                .sum();
            prop_assert_eq!(decode(&vector) as u32, expected);
            prop_assert_eq!(encode(decode(&vector)), vector);
        }
    }
}
