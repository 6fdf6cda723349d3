//! Deterministic numeric and statistical helpers.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
///
/// Exact ties go to the even neighbour: `0.0078125` at six places is
/// `0.007812`.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Return `numer / denom` rounded to `decimals`, or 0.0 when `denom` is zero.
#[must_use]
pub fn safe_ratio(numer: usize, denom: usize, decimals: u32) -> f64 {
    if denom == 0 {
        0.0
    } else {
        round_f64(numer as f64 / denom as f64, decimals)
    }
}

/// Arithmetic mean; 0.0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Arithmetic mean of integer samples; 0.0 for an empty slice.
#[must_use]
pub fn mean_usize(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().map(|v| *v as f64).sum();
    sum / values.len() as f64
}
