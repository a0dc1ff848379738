//! Extinction risk
//!
//! Fractions of runs that are extinct, or have fallen to a critical size,
//! by each year.

use crate::analysis::utils::require_runs;
use crate::errors::AnalysisError;
use agepop_sim::Statistics;
use rayon::prelude::*;

/// Fraction of runs with no live individuals, per year slot.
///
/// Extinction is absorbing, so the result is non-decreasing in the year.
pub fn extinction_probability(statistics: &Statistics) -> Result<Vec<f64>, AnalysisError> {
    require_runs(statistics)?;
    let runs = statistics.runs();

    Ok((0..=statistics.years())
        .into_par_iter()
        .map(|year| {
            let extinct = (0..runs)
                .filter(|&run| statistics.total(run, year) == 0.0)
                .count();
            extinct as f64 / runs as f64
        })
        .collect())
}

/// Fraction of runs whose total population has been at or below
/// `threshold` in any year up to and including each year slot.
pub fn quasi_extinction_probability(
    statistics: &Statistics,
    threshold: f64,
) -> Result<Vec<f64>, AnalysisError> {
    require_runs(statistics)?;
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(AnalysisError::InvalidThreshold(threshold));
    }
    let runs = statistics.runs();
    let slots = statistics.years() + 1;

    // First year slot each run reaches the threshold, if any.
    let first_hit: Vec<Option<usize>> = (0..runs)
        .into_par_iter()
        .map(|run| {
            statistics
                .run_totals(run)
                .iter()
                .position(|&total| total <= threshold)
        })
        .collect();

    let mut hits = vec![0usize; slots];
    for year in first_hit.into_iter().flatten() {
        hits[year] += 1;
    }

    let mut cumulative = 0;
    Ok(hits
        .into_iter()
        .map(|h| {
            cumulative += h;
            cumulative as f64 / runs as f64
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 4 runs, 3 years, 1 class
    fn block() -> Statistics {
        #[rustfmt::skip]
        let counts = vec![
            5.0, 3.0, 0.0, 0.0,
            5.0, 6.0, 7.0, 8.0,
            5.0, 2.0, 4.0, 9.0,
            5.0, 0.0, 0.0, 0.0,
        ];
        Statistics::from_vec(4, 3, 1, counts).unwrap()
    }

    #[test]
    fn test_extinction_probability() {
        let p = extinction_probability(&block()).unwrap();
        assert_eq!(p, vec![0.0, 0.25, 0.5, 0.5]);
    }

    #[test]
    fn test_quasi_extinction_counts_past_dips() {
        // Run 2 dips to 2 in year 1 and recovers; it still counts afterwards.
        let p = quasi_extinction_probability(&block(), 2.0).unwrap();
        assert_eq!(p, vec![0.0, 0.5, 0.75, 0.75]);
    }

    #[test]
    fn test_quasi_extinction_zero_matches_extinction() {
        let stats = block();
        assert_eq!(
            quasi_extinction_probability(&stats, 0.0).unwrap(),
            extinction_probability(&stats).unwrap()
        );
    }

    #[test]
    fn test_invalid_threshold() {
        assert_eq!(
            quasi_extinction_probability(&block(), -1.0),
            Err(AnalysisError::InvalidThreshold(-1.0))
        );
    }
}
