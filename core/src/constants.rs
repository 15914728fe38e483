//! constants.rs
//! Fixed engine constants shared by the automaton and the cipher layer.

/// Bits carried by one grayscale sample.
pub const BITS_PER_PIXEL: usize = 8;

/// One rule per bit position.
pub const RULE_TABLE_LEN: usize = BITS_PER_PIXEL;

/// Forward multiplicative mask, applied after evolution.
pub const MASK_FORWARD: u8 = 187;
/// Modular inverse of `MASK_FORWARD` (187 * 115 = 21505 = 84 * 256 + 1).
pub const MASK_INVERSE: u8 = 115;

/// Defaults when no configuration is supplied
pub const DEFAULT_CYCLES: u32 = 4;
/// Reference rule table. Four rounds of this table applied twice is the identity.
pub const REFERENCE_RULES: [u8; RULE_TABLE_LEN] = [102, 102, 102, 102, 51, 86, 240, 153];

/// Grids smaller than this are evolved on the calling thread.
pub const PARALLEL_MIN_PIXELS: usize = 64 * 1024;

/// Raw rule identifiers (mirrored in `Rule`).
pub mod rule_ids {
    pub const RULE_51: u8  = 51;
    pub const RULE_85: u8  = 85;
    pub const RULE_86: u8  = 86;
    pub const RULE_102: u8 = 102;
    pub const RULE_105: u8 = 105;
    pub const RULE_150: u8 = 150;
    pub const RULE_153: u8 = 153;
    pub const RULE_165: u8 = 165;
    pub const RULE_240: u8 = 240;
}
