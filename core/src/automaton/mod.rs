//! Per-pixel cellular automaton.
//!
//! - `bits`: byte <-> MSB-first bit vector
//! - `rules`: the nine supported elementary rules
//! - `step`: one fixed-boundary round over the eight bits of a pixel
//!
//! Everything here is pure and stateless.

pub mod bits;
pub mod rules;
pub mod step;
pub mod types;

pub use bits::{decode, encode, BitVector};
pub use rules::Rule;
pub use step::{evolution_table, evolve_pixel, neighbourhood, step_pixel};
pub use types::{RuleError, RuleTable};
