//! Time-Domain Spectral Moment Descriptors

use ndarray::{Array1, ArrayView2, Axis};

/// Number of descriptors produced per channel
pub const DESCRIPTORS_PER_CHANNEL: usize = 6;

/// Log-domain spectral moment descriptors for one channel of one window.
///
/// The zero-, second- and fourth-order power spectral moments are computed
/// directly in the time domain from finite differences, power-compressed,
/// then every descriptor is passed through `ln(|v|)`.
#[derive(Debug, Clone, Copy)]
pub struct SpectralMoments {
    /// Zero-order moment (signal power)
    pub m0: f64,
    /// Zero- minus second-order moment
    pub m0_minus_m2: f64,
    /// Zero- minus fourth-order moment
    pub m0_minus_m4: f64,
    /// Sparseness of the moment triple
    pub sparseness: f64,
    /// Irregularity factor
    pub irregularity: f64,
    /// Waveform length ratio of the first to second difference
    pub waveform_length_ratio: f64,
}

impl SpectralMoments {
    /// Compute the descriptors for one channel's window of samples.
    ///
    /// Degenerate inputs are not patched: a single sample divides by zero in
    /// the moment normalization, a zero-variance window makes the waveform
    /// length ratio 0/0, and equal moments drive `ln(0)` to negative
    /// infinity. All of these propagate into the descriptor values.
    pub fn compute(samples: &[f64]) -> Self {
        let n = samples.len() as f64;

        let energy: f64 = samples.iter().map(|v| v * v).sum();
        let d1 = padded_diff(samples);
        let d2 = padded_diff(&d1);

        let m0 = compress(energy.sqrt());
        let m2 = compress((sum_squares(&d1) / (n - 1.0)).sqrt());
        let m4 = compress((sum_squares(&d2) / (n - 1.0)).sqrt());

        let sparseness = m0 / ((m0 - m2) * (m0 - m4)).abs().sqrt();
        let irregularity = m2 / (m0 * m4).sqrt();
        let waveform_length_ratio =
            d1.iter().map(|v| v.abs()).sum::<f64>() / d2.iter().map(|v| v.abs()).sum::<f64>();

        Self {
            m0: log_abs(m0),
            m0_minus_m2: log_abs(m0 - m2),
            m0_minus_m4: log_abs(m0 - m4),
            sparseness: log_abs(sparseness),
            irregularity: log_abs(irregularity),
            waveform_length_ratio: log_abs(waveform_length_ratio),
        }
    }

    /// Descriptors in output order
    pub fn to_array(self) -> [f64; DESCRIPTORS_PER_CHANNEL] {
        [
            self.m0,
            self.m0_minus_m2,
            self.m0_minus_m4,
            self.sparseness,
            self.irregularity,
            self.waveform_length_ratio,
        ]
    }
}

/// Flattened descriptors for a multichannel window, descriptor-major:
/// index `d * channels + c` holds descriptor `d` of channel `c`.
pub fn window_descriptors(window: ArrayView2<'_, f64>) -> Array1<f64> {
    let channels = window.ncols();
    let mut flat = Array1::zeros(DESCRIPTORS_PER_CHANNEL * channels);
    for (c, column) in window.axis_iter(Axis(1)).enumerate() {
        let samples = column.to_vec();
        let moments = SpectralMoments::compute(&samples);
        for (d, value) in moments.to_array().into_iter().enumerate() {
            flat[d * channels + c] = value;
        }
    }
    flat
}

/// Zero-padded first difference: one zero is prepended before differencing,
/// so the output keeps the input length and `out[0] == x[0]`.
pub(crate) fn padded_diff(x: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(x.len());
    let mut prev = 0.0;
    for &v in x {
        out.push(v - prev);
        prev = v;
    }
    out
}

// Monotonic compressive rescaling, the divide by 0.1 included.
fn compress(moment: f64) -> f64 {
    moment.powf(0.1) / 0.1
}

fn sum_squares(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum()
}

fn log_abs(value: f64) -> f64 {
    value.abs().ln()
}
