//! Descriptor Orientation Combination

use ndarray::Array1;

/// Bounded orientation score between two descriptor vectors, elementwise:
/// `(-2 * a * b) / (a^2 + b^2)`.
///
/// Approaches -1 where the descriptors agree and 0 where one dominates.
/// A 0/0 component is returned as NaN rather than patched.
pub fn orientation(raw: &Array1<f64>, mapped: &Array1<f64>) -> Array1<f64> {
    assert_eq!(
        raw.len(),
        mapped.len(),
        "descriptor vectors disagree in length"
    );
    let mut out = Array1::zeros(raw.len());
    for (o, (&a, &b)) in out.iter_mut().zip(raw.iter().zip(mapped.iter())) {
        *o = (-2.0 * a * b) / (a * a + b * b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_agreement_scores_minus_one() {
        let a = array![1.0, -3.0, 0.5];
        let scores = orientation(&a, &a.clone());
        for &s in scores.iter() {
            assert!((s + 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_dominance_approaches_zero() {
        let a = array![1.0];
        let b = array![1e9];
        let scores = orientation(&a, &b);
        assert!(scores[0].abs() < 1e-8);
    }

    #[test]
    fn test_zero_pair_is_nan() {
        let scores = orientation(&array![0.0, 1.0], &array![0.0, 1.0]);
        assert!(scores[0].is_nan());
        assert!((scores[1] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_nan_input_propagates() {
        let scores = orientation(&array![f64::NAN], &array![2.0]);
        assert!(scores[0].is_nan());
    }

    #[test]
    #[should_panic(expected = "descriptor vectors disagree in length")]
    fn test_length_mismatch_panics() {
        orientation(&array![1.0, 2.0], &array![1.0]);
    }
}
