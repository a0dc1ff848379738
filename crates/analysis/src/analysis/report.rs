//! Combined summary of one results block.

use crate::analysis::{
    class_means, extinction_probability, growth_rates, quasi_extinction_probability,
    total_trajectory, YearSummary,
};
use crate::errors::AnalysisError;
use agepop_sim::Statistics;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub runs: usize,
    pub years: usize,
    pub classes: usize,
    pub trajectory: Vec<YearSummary>,
    pub class_means: Vec<Vec<f64>>,
    pub extinction: Vec<f64>,
    /// Present when a quasi-extinction threshold was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quasi_extinction: Option<QuasiExtinction>,
    pub growth_rates: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuasiExtinction {
    pub threshold: f64,
    pub probability: Vec<f64>,
}

/// Compute every summary for `statistics`.
pub fn summarize(
    statistics: &Statistics,
    quasi_threshold: Option<f64>,
) -> Result<Summary, AnalysisError> {
    let (runs, years, classes) = statistics.shape();
    let quasi_extinction = quasi_threshold
        .map(|threshold| {
            quasi_extinction_probability(statistics, threshold).map(|probability| {
                QuasiExtinction {
                    threshold,
                    probability,
                }
            })
        })
        .transpose()?;

    Ok(Summary {
        runs,
        years,
        classes,
        trajectory: total_trajectory(statistics)?,
        class_means: class_means(statistics)?,
        extinction: extinction_probability(statistics)?,
        quasi_extinction,
        growth_rates: growth_rates(statistics)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_shapes() {
        let stats = Statistics::from_vec(2, 2, 2, vec![1.0; 12]).unwrap();
        let summary = summarize(&stats, Some(1.0)).unwrap();

        assert_eq!((summary.runs, summary.years, summary.classes), (2, 2, 2));
        assert_eq!(summary.trajectory.len(), 3);
        assert_eq!(summary.class_means.len(), 3);
        assert_eq!(summary.extinction, vec![0.0; 3]);
        assert_eq!(summary.growth_rates, vec![Some(1.0); 2]);
        assert_eq!(summary.quasi_extinction.unwrap().probability, vec![0.0; 3]);
    }

    #[test]
    fn test_summarize_without_threshold() {
        let stats = Statistics::from_vec(1, 1, 1, vec![2.0, 0.0]).unwrap();
        let summary = summarize(&stats, None).unwrap();
        assert!(summary.quasi_extinction.is_none());
        assert_eq!(summary.extinction, vec![0.0, 1.0]);
    }
}
