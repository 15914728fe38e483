//! cipher/config.rs
//! Caller-facing cipher configuration and its validation.
//!
//! `CipherConfig` is the raw, serializable form (plain rule ids and a cycle count).
//! `ValidatedConfig` is what the engine runs on; it can only be built through
//! `CipherConfig::validate`, so a bad table never reaches the pixel loop.

use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::automaton::{evolution_table, RuleError, RuleTable};
use crate::constants::{DEFAULT_CYCLES, REFERENCE_RULES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Rule(RuleError),
    ZeroCycles,
    Json(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Rule(e) => write!(f, "invalid rule table: {}", e),
            ConfigError::ZeroCycles => write!(f, "cycle count must be at least 1"),
            ConfigError::Json(msg) => write!(f, "malformed config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<RuleError> for ConfigError {
    fn from(e: RuleError) -> Self {
        ConfigError::Rule(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e.to_string())
    }
}

/// Number of evolution rounds. Always at least 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CycleCount(u32);

impl CycleCount {
    pub fn new(cycles: u32) -> Result<Self, ConfigError> {
        if cycles == 0 {
            return Err(ConfigError::ZeroCycles);
        }
        Ok(Self(cycles))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherConfig {
    pub rules: Vec<u8>,
    pub cycles: u32,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            rules: REFERENCE_RULES.to_vec(),
            cycles: DEFAULT_CYCLES,
        }
    }
}

impl CipherConfig {
    pub fn new(rules: &[u8], cycles: u32) -> Self {
        Self { rules: rules.to_vec(), cycles }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let rules = RuleTable::from_ids(&self.rules).inspect_err(|e| {
            warn!(rules = ?self.rules, error = %e, "rejecting rule table");
        })?;
        let cycles = CycleCount::new(self.cycles).inspect_err(|_| {
            warn!("rejecting zero cycle count");
        })?;
        Ok(ValidatedConfig { rules, cycles })
    }
}

/// Rule table and cycle count that passed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub rules: RuleTable,
    pub cycles: CycleCount,
}

impl ValidatedConfig {
    pub fn new(rules: RuleTable, cycles: CycleCount) -> Self {
        Self { rules, cycles }
    }

    /// Whether decrypt undoes encrypt for this table and cycle count.
    ///
    /// Decryption re-runs the same evolution, so this holds exactly when two
    /// runs of `cycles` rounds return every byte to itself.
    pub fn round_trips(&self) -> bool {
        self_inverse_period_ok(&self.rules, self.cycles.get())
    }
}

/// True if evolving any byte `cycles` rounds, then `cycles` more, restores it.
pub fn self_inverse_period_ok(rules: &RuleTable, cycles: u32) -> bool {
    let forward = evolution_table(rules, cycles);
    (0..=255u8).all(|v| forward[forward[v as usize] as usize] == v)
}
