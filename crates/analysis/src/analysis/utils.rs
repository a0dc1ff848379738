//! Utility functions for analysis module
//!
//! Shared helper functions used across analysis submodules.

use crate::errors::AnalysisError;
use agepop_sim::Statistics;

/// Calculate mean of a slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator). Zero for fewer than two
/// values.
pub fn std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Quantile of an ascending slice by linear interpolation between order
/// statistics (the "type 7" definition).
pub fn quantile(sorted: &[f64], q: f64) -> Result<f64, AnalysisError> {
    if !(0.0..=1.0).contains(&q) {
        return Err(AnalysisError::InvalidQuantile(q));
    }
    let n = sorted.len();
    if n == 0 {
        return Err(AnalysisError::EmptySample);
    }

    let h = (n - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    Ok(sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo]))
}

pub(crate) fn require_runs(statistics: &Statistics) -> Result<(), AnalysisError> {
    if statistics.runs() == 0 {
        return Err(AnalysisError::NoRuns);
    }
    Ok(())
}
