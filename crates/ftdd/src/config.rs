//! Extraction Configuration

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};

/// What to do with the trailing rows of the feature matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrimPolicy {
    /// Return every computed row
    KeepComputed,
    /// Drop the last `steps` computed rows, for pipelines that discard the
    /// lookback tail of the scan
    TrimTrailingSteps,
}

/// Fused time-domain descriptor extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FtddConfig {
    /// Lookback offset between fused windows, in units of `window_increment`
    pub steps: usize,

    /// Analysis window length (samples)
    pub window_size: usize,

    /// Spacing between consecutive window starts (samples)
    pub window_increment: usize,

    /// Trailing-row trim policy
    pub trim: TrimPolicy,
}

impl Default for FtddConfig {
    fn default() -> Self {
        Self {
            steps: 3,
            window_size: 200,
            window_increment: 50,
            trim: TrimPolicy::KeepComputed,
        }
    }
}

impl FtddConfig {
    /// Validate the configuration against a signal length, returning the raw
    /// window count.
    ///
    /// Runs before any window is sliced, so a misconfiguration surfaces as an
    /// error instead of an out-of-bounds slice mid-scan.
    pub fn validate(&self, samples: usize) -> Result<usize, FeatureError> {
        if self.window_size == 0 {
            return Err(FeatureError::EmptyWindow);
        }
        if self.window_increment == 0 {
            return Err(FeatureError::ZeroIncrement);
        }
        if self.window_size > samples {
            return Err(FeatureError::WindowTooLarge {
                window_size: self.window_size,
                samples,
            });
        }
        let numwin = (samples - self.window_size) / self.window_increment + 1;
        if numwin <= self.steps {
            return Err(FeatureError::InsufficientWindows {
                numwin,
                steps: self.steps,
            });
        }
        Ok(numwin)
    }
}
