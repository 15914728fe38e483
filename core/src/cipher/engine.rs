//! cipher/engine.rs
//! Grid-wide evolution plus the mask/unmask step.
//!
//! encrypt: evolve `cycles` rounds, then mask every pixel.
//! decrypt: unmask every pixel, then evolve the same `cycles` rounds.
//!
//! Rounds are double-buffered: every round reads only the previous round's
//! buffer and writes a second one, then the two are swapped. Inside a round the
//! back buffer is split into disjoint row bands, one per worker.

use tracing::{debug, trace};

use crate::automaton::evolution_table;
use crate::parallelism::ParallelismProfile;
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::CipherError;
use super::config::{CipherConfig, ValidatedConfig};
use super::grid::PixelGrid;
use super::mask::{mask_in_place, unmask_in_place};

/// Stateless between calls; holds only validated configuration.
#[derive(Debug, Clone)]
pub struct CipherEngine {
    config: ValidatedConfig,
    profile: ParallelismProfile,
}

impl CipherEngine {
    pub fn new(config: &CipherConfig) -> Result<Self, CipherError> {
        Self::with_profile(config, ParallelismProfile::dynamic())
    }

    pub fn with_profile(config: &CipherConfig, profile: ParallelismProfile) -> Result<Self, CipherError> {
        let config = config.validate()?;
        debug!(rules = %config.rules, cycles = config.cycles.get(), workers = profile.worker_count, "cipher engine ready");
        Ok(Self { config, profile })
    }

    pub fn from_validated(config: ValidatedConfig, profile: ParallelismProfile) -> Self {
        Self { config, profile }
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    pub fn profile(&self) -> &ParallelismProfile {
        &self.profile
    }

    pub fn run_cycles(&self, grid: &PixelGrid) -> Result<PixelGrid, CipherError> {
        let mut counters = TelemetryCounters::default();
        let mut buf = grid.as_slice().to_vec();
        evolve(&mut buf, grid.dimensions(), &self.config, &self.profile, &mut counters)?;
        Ok(grid.with_data(buf))
    }

    pub fn encrypt(&self, grid: &PixelGrid) -> Result<PixelGrid, CipherError> {
        self.encrypt_with_telemetry(grid).map(|(out, _)| out)
    }

    pub fn decrypt(&self, grid: &PixelGrid) -> Result<PixelGrid, CipherError> {
        self.decrypt_with_telemetry(grid).map(|(out, _)| out)
    }

    pub fn encrypt_with_telemetry(
        &self,
        grid: &PixelGrid,
    ) -> Result<(PixelGrid, TelemetrySnapshot), CipherError> {
        let mut timer = TelemetryTimer::new();
        let mut counters = TelemetryCounters { pixels_in: grid.len() as u64, ..Default::default() };
        debug!(height = grid.height(), width = grid.width(), "encrypt start");

        let mut buf = grid.as_slice().to_vec();
        timer.measure(Stage::Evolve, || {
            evolve(&mut buf, grid.dimensions(), &self.config, &self.profile, &mut counters)
        })?;
        timer.measure(Stage::Mask, || mask_in_place(&mut buf));
        counters.add_mask(buf.len());

        counters.pixels_out = buf.len() as u64;
        timer.finish();
        debug!(elapsed_us = timer.elapsed().as_micros() as u64, "encrypt done");
        Ok((grid.with_data(buf), TelemetrySnapshot::from(&counters, &timer)))
    }

    pub fn decrypt_with_telemetry(
        &self,
        grid: &PixelGrid,
    ) -> Result<(PixelGrid, TelemetrySnapshot), CipherError> {
        let mut timer = TelemetryTimer::new();
        let mut counters = TelemetryCounters { pixels_in: grid.len() as u64, ..Default::default() };
        debug!(height = grid.height(), width = grid.width(), "decrypt start");

        let mut buf = grid.as_slice().to_vec();
        timer.measure(Stage::Unmask, || unmask_in_place(&mut buf));
        counters.add_unmask(buf.len());
        timer.measure(Stage::Evolve, || {
            evolve(&mut buf, grid.dimensions(), &self.config, &self.profile, &mut counters)
        })?;

        counters.pixels_out = buf.len() as u64;
        timer.finish();
        debug!(elapsed_us = timer.elapsed().as_micros() as u64, "decrypt done");
        Ok((grid.with_data(buf), TelemetrySnapshot::from(&counters, &timer)))
    }
}

/// Evolve `buf` in place by `config.cycles` synchronous rounds.
fn evolve(
    buf: &mut Vec<u8>,
    (height, width): (usize, usize),
    config: &ValidatedConfig,
    profile: &ParallelismProfile,
    counters: &mut TelemetryCounters,
) -> Result<(), CipherError> {
    let workers = profile.workers_for(height, width);
    counters.workers = counters.workers.max(workers as u64);
    if buf.is_empty() {
        return Ok(());
    }

    // A round maps each byte through the same function, so tabulate it once.
    let step = evolution_table(&config.rules, 1);
    let mut back = vec![0u8; buf.len()];
    let band_len = height.div_ceil(workers).max(1) * width;

    for cycle in 0..config.cycles.get() {
        if workers <= 1 {
            apply_step(&step, buf, &mut back);
        } else {
            let step = &step;
            crossbeam::thread::scope(|s| {
                for (src, dst) in buf.chunks(band_len).zip(back.chunks_mut(band_len)) {
                    s.spawn(move |_| apply_step(step, src, dst));
                }
            })
            .map_err(|_| CipherError::WorkerPanicked)?;
        }
        std::mem::swap(buf, &mut back);
        counters.add_cycle(buf.len());
        trace!(cycle, workers, "round complete");
    }
    Ok(())
}

#[inline]
fn apply_step(step: &[u8; 256], src: &[u8], dst: &mut [u8]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = step[s as usize];
    }
}

// Every configuration failure surfaces as `CipherError::Config`.
fn engine_for(rules: &[u8], cycles: u32) -> Result<CipherEngine, CipherError> {
    CipherEngine::new(&CipherConfig::new(rules, cycles))
}

/// Evolve every pixel of `grid` for `cycles` rounds with the given rule ids.
pub fn run_cycles(grid: &PixelGrid, rules: &[u8], cycles: u32) -> Result<PixelGrid, CipherError> {
    engine_for(rules, cycles)?.run_cycles(grid)
}

pub fn encrypt(grid: &PixelGrid, rules: &[u8], cycles: u32) -> Result<PixelGrid, CipherError> {
    engine_for(rules, cycles)?.encrypt(grid)
}

pub fn decrypt(grid: &PixelGrid, rules: &[u8], cycles: u32) -> Result<PixelGrid, CipherError> {
    engine_for(rules, cycles)?.decrypt(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{evolve_pixel, RuleError, RuleTable};
    use crate::cipher::config::ConfigError;
    use crate::constants::REFERENCE_RULES;

    fn gradient(height: usize, width: usize) -> PixelGrid {
        let data = (0..height * width).map(|i| (i * 7 % 256) as u8).collect();
        PixelGrid::new(height, width, data).unwrap()
    }

    #[test]
    fn grid_evolution_matches_per_pixel_evolution() {
        let grid = gradient(5, 9);
        let table = RuleTable::from_ids(&REFERENCE_RULES).unwrap();
        let out = run_cycles(&grid, &REFERENCE_RULES, 3).unwrap();
        for (i, &v) in grid.as_slice().iter().enumerate() {
            assert_eq!(out.as_slice()[i], evolve_pixel(v, &table, 3));
        }
    }

    #[test]
    fn banded_workers_match_single_thread() {
        let grid = gradient(37, 13);
        let cfg = CipherConfig::default();
        let single = CipherEngine::with_profile(&cfg, ParallelismProfile::single_threaded()).unwrap();
        let banded = CipherEngine::with_profile(
            &cfg,
            ParallelismProfile::with_workers(4).with_min_parallel_pixels(0),
        )
        .unwrap();
        assert_eq!(single.encrypt(&grid).unwrap(), banded.encrypt(&grid).unwrap());
    }

    #[test]
    fn empty_grid_passes_through() {
        let grid = PixelGrid::new(3, 0, Vec::new()).unwrap();
        let engine = CipherEngine::with_profile(
            &CipherConfig::default(),
            ParallelismProfile::with_workers(4).with_min_parallel_pixels(0),
        )
        .unwrap();
        assert_eq!(engine.encrypt(&grid).unwrap(), grid);
    }

    #[test]
    fn free_functions_and_engine_report_the_same_error() {
        let grid = gradient(2, 2);
        let bad = [102u8; 7];
        let from_fn = encrypt(&grid, &bad, 4).unwrap_err();
        let from_engine = CipherEngine::new(&CipherConfig::new(&bad, 4)).unwrap_err();

        let expected = ConfigError::Rule(RuleError::WrongTableLength { expected: 8, actual: 7 });
        assert!(matches!(&from_fn, CipherError::Config(e) if *e == expected));
        assert!(matches!(&from_engine, CipherError::Config(e) if *e == expected));
        assert!(matches!(run_cycles(&grid, &bad, 4), Err(CipherError::Config(_))));
        assert!(matches!(decrypt(&grid, &REFERENCE_RULES, 0), Err(CipherError::Config(ConfigError::ZeroCycles))));
    }

    #[test]
    fn engine_exposes_its_profile() {
        let profile = ParallelismProfile::with_workers(3);
        let engine = CipherEngine::with_profile(&CipherConfig::default(), profile.clone()).unwrap();
        assert_eq!(engine.profile(), &profile);
        assert_eq!(engine.config().rules.ids(), REFERENCE_RULES);
    }
}
