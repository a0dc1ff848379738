//! Year-over-year growth

use crate::analysis::utils::{mean, require_runs};
use crate::errors::AnalysisError;
use agepop_sim::Statistics;
use rayon::prelude::*;

/// Mean ratio `N(t+1) / N(t)` of total population across the runs alive at
/// year `t`.
///
/// Entry `t` covers the transition from year slot `t` to `t + 1`, so the
/// result has `years` entries. It is `None` when every run is extinct at
/// year `t`.
pub fn growth_rates(statistics: &Statistics) -> Result<Vec<Option<f64>>, AnalysisError> {
    require_runs(statistics)?;

    Ok((0..statistics.years())
        .into_par_iter()
        .map(|year| {
            let ratios: Vec<f64> = (0..statistics.runs())
                .filter_map(|run| {
                    let now = statistics.total(run, year);
                    (now > 0.0).then(|| statistics.total(run, year + 1) / now)
                })
                .collect();
            (!ratios.is_empty()).then(|| mean(&ratios))
        })
        .collect())
}
