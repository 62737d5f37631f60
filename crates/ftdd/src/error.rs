//! Feature Extraction Error Types

use thiserror::Error;

/// Errors detected before a feature scan begins.
///
/// Numeric degeneracies (zero-variance windows, equal moments) are not
/// errors; they surface as NaN or infinite entries in the output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeatureError {
    /// Window size of zero
    #[error("window size must be at least 1 sample")]
    EmptyWindow,

    /// Window increment of zero
    #[error("window increment must be at least 1 sample")]
    ZeroIncrement,

    /// Window longer than the signal
    #[error("window size {window_size} exceeds signal length {samples}")]
    WindowTooLarge { window_size: usize, samples: usize },

    /// Too few windows to pair every position with a lookback window
    #[error("{numwin} windows fit the signal, not enough for a lookback of {steps} steps")]
    InsufficientWindows { numwin: usize, steps: usize },
}
