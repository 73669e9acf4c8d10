//! Error types for subgraph sampling.

use thiserror::Error;

/// Error type for sampling operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Sampling fraction outside the unit interval.
    #[error("sampling fraction {0} is outside [0, 1]")]
    InvalidFraction(f64),

    /// Weight map does not cover the candidate set, or weights are unusable.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    /// A component decomposition produced an empty vertex set.
    #[error("empty component in graph decomposition")]
    EmptyComponent,

    /// The candidate pool ran out before the requested sample size was met.
    #[error("candidate pool exhausted: needed {needed} vertices, selected {selected}")]
    ExhaustedCandidates {
        /// Number of vertices the sample required.
        needed: usize,
        /// Number of vertices actually selected before exhaustion.
        selected: usize,
    },

    /// A traversal frontier drained before its component was fully visited.
    #[error("frontier drained before component was fully explored")]
    DisconnectedComponent,
}

/// Result type for sampling operations.
pub type Result<T> = std::result::Result<T, Error>;
