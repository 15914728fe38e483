//! Grid-level cipher built on the per-pixel automaton.
//!
//! - `grid`: the row-major pixel container
//! - `mask`: the 187 / 115 multiplicative mask pair
//! - `config`: serializable configuration and validation
//! - `engine`: encrypt / decrypt orchestration

pub mod config;
pub mod engine;
pub mod grid;
pub mod mask;

pub use config::{self_inverse_period_ok, CipherConfig, ConfigError, CycleCount, ValidatedConfig};
pub use engine::{decrypt, encrypt, run_cycles, CipherEngine};
pub use grid::{GridError, PixelGrid};
pub use mask::{mask_byte, mask_in_place, unmask_byte, unmask_in_place};
