//! Sliding-Window Feature Scan

use crate::config::FtddConfig;
use crate::moments::window_descriptors;
use crate::nonlinear::nonlinear_map;
use crate::orientation::orientation;
use ndarray::{s, Array1, ArrayView2};

/// Orientation vector for one window: raw-signal descriptors combined with
/// the descriptors of the nonlinear-mapped window. Used for the current and
/// the lookback window alike.
pub(crate) fn combine(window: ArrayView2<'_, f64>) -> Array1<f64> {
    let raw = window_descriptors(window);
    let mapped_window = nonlinear_map(window);
    let mapped = window_descriptors(mapped_window.view());
    orientation(&raw, &mapped)
}

/// Iterator over fused feature rows, one per usable window position.
///
/// Each row is the elementwise product of the orientation vectors of the
/// window starting `steps * window_increment` samples back and of the
/// current window.
pub(crate) struct WindowScanner<'a> {
    signal: ArrayView2<'a, f64>,
    window_size: usize,
    window_increment: usize,
    lookback: usize,
    start: usize,
    remaining: usize,
}

impl<'a> WindowScanner<'a> {
    /// `rows` is the usable position count, `numwin - steps`, already
    /// validated against the signal length.
    pub(crate) fn new(signal: ArrayView2<'a, f64>, config: &FtddConfig, rows: usize) -> Self {
        let lookback = config.steps * config.window_increment;
        Self {
            signal,
            window_size: config.window_size,
            window_increment: config.window_increment,
            lookback,
            start: lookback,
            remaining: rows,
        }
    }
}

impl Iterator for WindowScanner<'_> {
    type Item = Array1<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let st = self.start;
        let lb = st - self.lookback;
        let lookback = self.signal.slice(s![lb..lb + self.window_size, ..]);
        let current = self.signal.slice(s![st..st + self.window_size, ..]);
        let row = &combine(lookback) * &combine(current);

        self.start += self.window_increment;
        self.remaining -= 1;
        Some(row)
    }
}
