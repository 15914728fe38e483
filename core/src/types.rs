use thiserror::Error;

use crate::cipher::{ConfigError, GridError};

/// Unified engine error covering configuration, grid and worker failures.
/// - Bad rule tables and cycle counts always arrive as `Config`.
/// - `From<T>` impls enable `?` across the cipher layer.
/// - Every variant is a caller defect or a bug; nothing here is retryable.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// A row-band worker panicked; the cycle's output is discarded.
    #[error("evolution worker panicked")]
    WorkerPanicked,
}
