//! Nonlinear Window Transform

use ndarray::{Array2, ArrayView2};

// Floor inside the logarithm so zero samples stay finite
const LOG_FLOOR: f64 = f64::EPSILON;

/// Elementwise `ln(x^2 + eps)^2` over a window.
///
/// Applied to a window before a second descriptor pass, it yields a signal
/// whose spectral moments respond to energy/amplitude nonlinearity rather
/// than raw amplitude.
pub fn nonlinear_map(window: ArrayView2<'_, f64>) -> Array2<f64> {
    window.mapv(|v| (v * v + LOG_FLOOR).ln().powi(2))
}
