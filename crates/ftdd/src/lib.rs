//! Fused Time-Domain Descriptors
//!
//! Extracts fixed-length feature vectors from multichannel time-series
//! signals (e.g. surface EMG) for pattern classification. A fixed-size
//! analysis window slides over the signal; per position, spectral-moment
//! descriptors of the raw and nonlinear-mapped window are fused through an
//! orientation measure, for the current window and for a lookback window a
//! few increments earlier, and the two orientation vectors are multiplied
//! into one feature row.

mod config;
mod error;
mod extractor;
mod matrix;
mod moments;
mod nonlinear;
mod orientation;
mod scanner;

pub use config::{FtddConfig, TrimPolicy};
pub use error::FeatureError;
pub use extractor::{compute_features, FtddExtractor};
pub use moments::{window_descriptors, SpectralMoments, DESCRIPTORS_PER_CHANNEL};
pub use nonlinear::nonlinear_map;
pub use orientation::orientation;
