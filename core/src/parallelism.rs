//! parallelism.rs
//! Worker sizing for grid evolution.

use crate::constants::PARALLEL_MIN_PIXELS;

/// Parallelism configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelismProfile {
    pub worker_count: usize,
    /// Grids with fewer pixels than this stay on the calling thread.
    pub min_parallel_pixels: usize,
}

impl Default for ParallelismProfile {
    fn default() -> Self {
        Self::dynamic()
    }
}

impl ParallelismProfile {
    pub fn single_threaded() -> Self {
        Self {
            worker_count: 1,
            min_parallel_pixels: PARALLEL_MIN_PIXELS,
        }
    }

    /// One worker per core, leaving one core free.
    pub fn dynamic() -> Self {
        let cores = num_cpus::get();
        Self {
            worker_count: cores.saturating_sub(1).max(1),
            min_parallel_pixels: PARALLEL_MIN_PIXELS,
        }
    }

    pub fn with_workers(worker_count: usize) -> Self {
        Self {
            worker_count: worker_count.max(1),
            min_parallel_pixels: PARALLEL_MIN_PIXELS,
        }
    }

    pub fn with_min_parallel_pixels(mut self, min_parallel_pixels: usize) -> Self {
        self.min_parallel_pixels = min_parallel_pixels;
        self
    }

    /// Workers to use for a `height x width` grid. Never more than one per row.
    pub fn workers_for(&self, height: usize, width: usize) -> usize {
        let pixels = height * width;
        if self.worker_count <= 1 || pixels < self.min_parallel_pixels || height <= 1 {
            return 1;
        }
        self.worker_count.min(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_grids_stay_single_threaded() {
        let p = ParallelismProfile::with_workers(8);
        assert_eq!(p.workers_for(4, 4), 1);
    }

    #[test]
    fn workers_capped_by_rows() {
        let p = ParallelismProfile::with_workers(8).with_min_parallel_pixels(0);
        assert_eq!(p.workers_for(3, 1000), 3);
        assert_eq!(p.workers_for(100, 100), 8);
    }

    #[test]
    fn dynamic_has_at_least_one_worker() {
        assert!(ParallelismProfile::dynamic().worker_count >= 1);
        assert_eq!(ParallelismProfile::with_workers(0).worker_count, 1);
    }
}
