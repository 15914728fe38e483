//! telemetry/mod.rs
//! Per-call telemetry: counters, stage timers, and immutable snapshots.

pub mod counters;
pub mod snapshot;
pub mod timers;

pub use counters::*;
pub use snapshot::*;
pub use timers::*;
