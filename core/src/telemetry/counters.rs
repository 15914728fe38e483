//! telemetry/counters.rs
//! Mutable counters used during one encrypt/decrypt call.
//!
//! Summary: pixel and round counts collected while the engine runs.
//! Converted into an immutable TelemetrySnapshot at the end of the call.

use std::ops::AddAssign;
use serde::{Deserialize, Serialize};

/// Deterministic counters collected during a cipher call
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub pixels_in: u64,
    pub pixels_out: u64,
    pub cycles: u64,
    /// Single-pixel rounds executed (pixels * cycles).
    pub pixel_steps: u64,
    pub masked_pixels: u64,
    pub unmasked_pixels: u64,
    pub workers: u64,
}

impl TelemetryCounters {
    /// Record one full-grid evolution round.
    pub fn add_cycle(&mut self, pixels: usize) {
        self.cycles += 1;
        self.pixel_steps += pixels as u64;
    }

    pub fn add_mask(&mut self, pixels: usize) {
        self.masked_pixels += pixels as u64;
    }

    pub fn add_unmask(&mut self, pixels: usize) {
        self.unmasked_pixels += pixels as u64;
    }

    // Worker count is a high-water mark, not a sum.
    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.pixels_in += other.pixels_in;
        self.pixels_out += other.pixels_out;
        self.cycles += other.cycles;
        self.pixel_steps += other.pixel_steps;
        self.masked_pixels += other.masked_pixels;
        self.unmasked_pixels += other.unmasked_pixels;
        self.workers = self.workers.max(other.workers);
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
