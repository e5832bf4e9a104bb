//! Concurrent sampling of Gini coefficients across a height range.
//!
//! This module derives the heights to sample and drives the per-height
//! fetch-and-compute tasks under a concurrency cap. Samples are
//! independent of each other and are only combined after every task has
//! resolved.

pub mod heights;
pub mod limiter;

// Re-export main functions
pub use heights::sample_heights;
pub use limiter::run_limited;

/// One sampled block height paired with its Gini coefficient
#[derive(Debug, Clone, PartialEq)]
pub struct HeightSample {
    /// Block height the validator set was fetched at
    pub height: u64,

    /// Gini coefficient of the voting powers at that height
    pub coefficient: f64,
}

/// Outcome of one scan across a height range
///
/// Samples are in height order. The result lives only for the duration
/// of one invocation; nothing is persisted.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Per-height samples, ordered by height
    pub samples: Vec<HeightSample>,

    /// Arithmetic mean of the per-height coefficients
    pub average: f64,
}
