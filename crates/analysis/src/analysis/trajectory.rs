//! Total population trajectory
//!
//! Distribution of the total population size across runs, year by year.

use crate::analysis::utils::{mean, quantile, require_runs, std_dev};
use crate::errors::AnalysisError;
use agepop_sim::Statistics;
use rayon::prelude::*;
use serde::Serialize;

/// Distribution of the total population across runs in one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: usize,
    pub mean: f64,
    pub sd: f64,
    pub min: f64,
    pub max: f64,
    /// 2.5% quantile
    pub q025: f64,
    pub median: f64,
    /// 97.5% quantile
    pub q975: f64,
}

/// Summarize the total population for every year slot, year 0 included.
///
/// Runs that went extinct contribute zeros for the years after extinction.
///
/// # Examples
///
/// ```
/// use agepop_analysis::total_trajectory;
/// use agepop_sim::Statistics;
///
/// // 2 runs, 1 year, 1 class
/// let stats = Statistics::from_vec(2, 1, 1, vec![4.0, 6.0, 4.0, 2.0]).unwrap();
/// let summary = total_trajectory(&stats).unwrap();
/// assert_eq!(summary[1].mean, 4.0);
/// assert_eq!(summary[1].min, 2.0);
/// ```
pub fn total_trajectory(statistics: &Statistics) -> Result<Vec<YearSummary>, AnalysisError> {
    require_runs(statistics)?;

    (0..=statistics.years())
        .into_par_iter()
        .map(|year| -> Result<YearSummary, AnalysisError> {
            let mut totals: Vec<f64> = (0..statistics.runs())
                .map(|run| statistics.total(run, year))
                .collect();
            totals.sort_by(f64::total_cmp);

            Ok(YearSummary {
                year,
                mean: mean(&totals),
                sd: std_dev(&totals),
                min: totals[0],
                max: totals[totals.len() - 1],
                q025: quantile(&totals, 0.025)?,
                median: quantile(&totals, 0.5)?,
                q975: quantile(&totals, 0.975)?,
            })
        })
        .collect()
}

/// Mean count per age class across runs, indexed `[year][class]`.
pub fn class_means(statistics: &Statistics) -> Result<Vec<Vec<f64>>, AnalysisError> {
    require_runs(statistics)?;
    let runs = statistics.runs() as f64;

    Ok((0..=statistics.years())
        .into_par_iter()
        .map(|year| {
            let mut sums = vec![0.0; statistics.classes()];
            for run in 0..statistics.runs() {
                for (sum, count) in sums.iter_mut().zip(statistics.row(run, year)) {
                    *sum += count;
                }
            }
            sums.into_iter().map(|s| s / runs).collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3 runs, 2 years, 2 classes
    fn block() -> Statistics {
        #[rustfmt::skip]
        let counts = vec![
            // run 0
            2.0, 1.0,   4.0, 0.0,   6.0, 2.0,
            // run 1
            2.0, 1.0,   1.0, 1.0,   0.0, 0.0,
            // run 2
            2.0, 1.0,   3.0, 3.0,   2.0, 5.0,
        ];
        Statistics::from_vec(3, 2, 2, counts).unwrap()
    }

    #[test]
    fn test_total_trajectory() {
        let summary = total_trajectory(&block()).unwrap();
        assert_eq!(summary.len(), 3);

        assert_eq!(summary[0].mean, 3.0);
        assert_eq!(summary[0].sd, 0.0);

        // totals in year 2: 8, 0, 7
        let y2 = &summary[2];
        assert_eq!(y2.year, 2);
        assert_eq!(y2.mean, 5.0);
        assert_eq!(y2.min, 0.0);
        assert_eq!(y2.max, 8.0);
        assert_eq!(y2.median, 7.0);
        assert!(y2.q025 > 0.0 && y2.q025 < 7.0);
        assert!(y2.q975 > 7.0 && y2.q975 < 8.0);
    }

    #[test]
    fn test_class_means() {
        let means = class_means(&block()).unwrap();
        assert_eq!(means[0], vec![2.0, 1.0]);
        assert_eq!(means[1], vec![8.0 / 3.0, 4.0 / 3.0]);
        assert_eq!(means[2], vec![8.0 / 3.0, 7.0 / 3.0]);
    }

    #[test]
    fn test_no_runs() {
        let empty = Statistics::zeroed(0, 3, 2);
        assert_eq!(total_trajectory(&empty), Err(AnalysisError::NoRuns));
        assert_eq!(class_means(&empty), Err(AnalysisError::NoRuns));
    }
}
