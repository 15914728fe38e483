//! telemetry/snapshot.rs
//! Immutable summary of one cipher call.

use std::time::Duration;
use serde::{Deserialize, Serialize};

use super::counters::TelemetryCounters;
use super::timers::{Stage, StageTimes, TelemetryTimer};

/// Counters, throughput and stage timings captured at the end of a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub counters: TelemetryCounters,
    pub throughput_pixels_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.pixels_in as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            counters: counters.clone(),
            throughput_pixels_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Internal consistency:
    /// - every input pixel was emitted
    /// - one step per pixel per cycle
    /// - stage time never exceeds wall time
    pub fn sanity_check(&self) -> bool {
        let c = &self.counters;
        c.pixels_in == c.pixels_out
            && c.pixel_steps == c.pixels_in * c.cycles
            && self.total_stage_time() <= self.elapsed
    }
}
