//! Per-run, per-year, per-class live counts.

use crate::simulation::Population;
use serde::{Deserialize, Serialize};

/// Dense block of counts indexed by `[run][year][class]`.
///
/// Year 0 holds the initial population; year `y >= 1` holds the population
/// after the `y`-th transition. The block is zero-filled on creation, so
/// years after a run goes extinct read as zero without being written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    runs: usize,
    years: usize,
    classes: usize,
    counts: Vec<f64>,
}

impl Statistics {
    /// A zeroed block for `runs` runs of `years` simulated years over
    /// `classes` age classes (`years + 1` year slots per run).
    pub fn zeroed(runs: usize, years: usize, classes: usize) -> Self {
        Self {
            runs,
            years,
            classes,
            counts: vec![0.0; runs * (years + 1) * classes],
        }
    }

    /// Rebuild a block from flat row-major data, checking its length.
    pub fn from_vec(runs: usize, years: usize, classes: usize, counts: Vec<f64>) -> Option<Self> {
        if counts.len() != runs * (years + 1) * classes {
            return None;
        }
        Some(Self {
            runs,
            years,
            classes,
            counts,
        })
    }

    /// `(runs, years, classes)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.runs, self.years, self.classes)
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Number of simulated years; there are `years() + 1` slots per run.
    pub fn years(&self) -> usize {
        self.years
    }

    pub fn classes(&self) -> usize {
        self.classes
    }

    #[inline]
    fn offset(&self, run: usize, year: usize) -> usize {
        assert!(run < self.runs, "run {run} out of range ({})", self.runs);
        assert!(year <= self.years, "year {year} out of range ({})", self.years);
        (run * (self.years + 1) + year) * self.classes
    }

    /// Overwrite the `(run, year)` row with the live counts of `population`.
    pub fn record(&mut self, run: usize, year: usize, population: &Population) {
        let start = self.offset(run, year);
        let row = &mut self.counts[start..start + self.classes];
        row.fill(0.0);
        for ind in population.iter().filter(|ind| ind.is_alive()) {
            row[ind.age()] += 1.0;
        }
    }

    pub fn get(&self, run: usize, year: usize, class: usize) -> f64 {
        assert!(class < self.classes, "class {class} out of range ({})", self.classes);
        self.counts[self.offset(run, year) + class]
    }

    /// Counts per class for one `(run, year)`.
    pub fn row(&self, run: usize, year: usize) -> &[f64] {
        let start = self.offset(run, year);
        &self.counts[start..start + self.classes]
    }

    /// Total individuals alive in `run` at `year`.
    pub fn total(&self, run: usize, year: usize) -> f64 {
        self.row(run, year).iter().sum()
    }

    /// Totals for every year slot of `run`.
    pub fn run_totals(&self, run: usize) -> Vec<f64> {
        (0..=self.years).map(|year| self.total(run, year)).collect()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.counts
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.counts
    }
}
