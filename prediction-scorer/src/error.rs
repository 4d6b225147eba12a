//! Error types raised while configuring the spot scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when constructing a scorer.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ScorerError {
    /// Provided weights were unusable.
    #[error(
        "weights must be finite, non-negative, and sum to a positive value \
         (quality {quality}, proximity {proximity})"
    )]
    InvalidWeights {
        /// Rejected quality weight.
        quality: f64,
        /// Rejected proximity weight.
        proximity: f64,
    },
}
