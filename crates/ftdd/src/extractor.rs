//! Fused Feature Extraction

use crate::config::FtddConfig;
use crate::error::FeatureError;
use crate::matrix::FeatureMatrixAssembler;
use crate::moments::DESCRIPTORS_PER_CHANNEL;
use crate::scanner::WindowScanner;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use tracing::debug;

/// Extractor turning a multichannel signal into fused descriptor rows
pub struct FtddExtractor {
    config: FtddConfig,
}

impl FtddExtractor {
    /// Create an extractor with the given settings
    pub fn new(config: FtddConfig) -> Self {
        Self { config }
    }

    /// Extract the fused feature matrix from a `(samples, channels)` signal.
    ///
    /// One row per usable window position, `6 * channels` columns in
    /// descriptor-major order. Degenerate windows (zero variance, equal
    /// moments) yield NaN or infinite entries; they are part of the result,
    /// not errors. Windowing tapers and normalization are a caller concern
    /// and should be applied to `signal` beforehand.
    pub fn extract(&self, signal: ArrayView2<'_, f64>) -> Result<Array2<f64>, FeatureError> {
        let samples = signal.nrows();
        let channels = signal.ncols();
        let numwin = self.config.validate(samples)?;
        let rows = numwin - self.config.steps;

        debug!(
            "Extracting fTDD features: {} samples, {} channels, {} of {} windows usable",
            samples, channels, rows, numwin
        );

        let columns = DESCRIPTORS_PER_CHANNEL * channels;
        let mut assembler =
            FeatureMatrixAssembler::new(rows, columns, self.config.steps, self.config.trim);
        for row in WindowScanner::new(signal, &self.config, rows) {
            assembler.push_row(row.view());
        }
        Ok(assembler.finish())
    }

    /// Extract from a single-channel slice by treating it as an `(n, 1)`
    /// signal matrix.
    pub fn extract_single_channel(&self, samples: &[f64]) -> Result<Array2<f64>, FeatureError> {
        let signal = ArrayView1::from(samples).insert_axis(Axis(1));
        self.extract(signal)
    }
}

impl Default for FtddExtractor {
    fn default() -> Self {
        Self::new(FtddConfig::default())
    }
}

/// Compute fused time-domain features with positional parameters and the
/// default trim policy.
pub fn compute_features(
    signal: ArrayView2<'_, f64>,
    steps: usize,
    window_size: usize,
    window_increment: usize,
) -> Result<Array2<f64>, FeatureError> {
    let config = FtddConfig {
        steps,
        window_size,
        window_increment,
        ..FtddConfig::default()
    };
    FtddExtractor::new(config).extract(signal)
}
