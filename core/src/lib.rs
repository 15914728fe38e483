//! automata-cipher-core
//!
//! Reversible grayscale pixel scrambler built on elementary cellular automata.
//! Each pixel's eight bits evolve as a fixed-boundary automaton for a number of
//! rounds, then a multiplicative mask mod 256 is applied. Decryption unmasks
//! and replays the same evolution.
//!
//! Not a security primitive.
//!
//! ```
//! use automata_cipher_core::prelude::*;
//!
//! let grid = PixelGrid::new(2, 2, vec![0, 64, 128, 255]).unwrap();
//! let engine = CipherEngine::new(&CipherConfig::default()).unwrap();
//!
//! let encrypted = engine.encrypt(&grid).unwrap();
//! assert_ne!(encrypted, grid);
//! assert_eq!(engine.decrypt(&encrypted).unwrap(), grid);
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod parallelism;
pub mod types;

pub mod automaton;
pub mod cipher;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::automaton::{Rule, RuleError, RuleTable};
    pub use crate::cipher::{
        decrypt, encrypt, run_cycles, CipherConfig, CipherEngine, ConfigError, CycleCount,
        GridError, PixelGrid, ValidatedConfig,
    };
    pub use crate::constants::{DEFAULT_CYCLES, REFERENCE_RULES};
    pub use crate::parallelism::ParallelismProfile;
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::CipherError;
}
