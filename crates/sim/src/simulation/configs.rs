//! Job configuration.
//!
//! A [`SimulationConfig`] is built once, validated, and then only read. It
//! can be stored as JSON to reproduce a job exactly (together with `seed`
//! and `reseed = true`).

use crate::demography::VitalRate;
use crate::errors::{ConfigError, RateKind};
use serde::{Deserialize, Serialize};

/// Everything needed to run a Monte Carlo projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Starting individuals per age class. Its length defines the number of
    /// age classes.
    pub initial_population: Vec<u32>,
    /// Survival probability per age class (mean and sd across years).
    pub survival: Vec<VitalRate>,
    /// Mean litter size per age class (mean and sd across years).
    pub litter_size: Vec<VitalRate>,
    /// Number of yearly transitions per run
    pub years: usize,
    /// Number of independent Monte Carlo runs
    pub runs: usize,
    /// Reseed the random stream from `seed` once before the first run
    #[serde(default)]
    pub reseed: bool,
    /// Seed used when `reseed` is set
    #[serde(default)]
    pub seed: u64,
}

impl SimulationConfig {
    /// Create a configuration that continues whatever stream it is given
    /// (`reseed = false`).
    pub fn new(
        initial_population: Vec<u32>,
        survival: Vec<VitalRate>,
        litter_size: Vec<VitalRate>,
        years: usize,
        runs: usize,
    ) -> Self {
        Self {
            initial_population,
            survival,
            litter_size,
            years,
            runs,
            reseed: false,
            seed: 0,
        }
    }

    /// Request a reseed from `seed` at job start.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed = true;
        self.seed = seed;
        self
    }

    pub fn num_classes(&self) -> usize {
        self.initial_population.len()
    }

    /// Total size of the starting cohort.
    pub fn initial_size(&self) -> u64 {
        self.initial_population.iter().map(|&c| c as u64).sum()
    }

    /// Number of cells in the statistics block.
    pub fn statistics_len(&self) -> usize {
        self.runs * (self.years + 1) * self.num_classes()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let classes = self.num_classes();
        if classes == 0 {
            return Err(ConfigError::NoAgeClasses);
        }
        if self.survival.len() != classes {
            return Err(ConfigError::LengthMismatch {
                field: "survival",
                expected: classes,
                found: self.survival.len(),
            });
        }
        if self.litter_size.len() != classes {
            return Err(ConfigError::LengthMismatch {
                field: "litter_size",
                expected: classes,
                found: self.litter_size.len(),
            });
        }
        if self.years == 0 {
            return Err(ConfigError::ZeroCount("years"));
        }
        if self.runs == 0 {
            return Err(ConfigError::ZeroCount("runs"));
        }

        for (class, rate) in self.survival.iter().enumerate() {
            check_rate(RateKind::Survival, class, rate)?;
            if !(0.0..=1.0).contains(&rate.mean) {
                return Err(ConfigError::SurvivalOutOfRange {
                    class,
                    mean: rate.mean,
                });
            }
        }

        for (class, rate) in self.litter_size.iter().enumerate() {
            check_rate(RateKind::LitterSize, class, rate)?;
            if rate.mean < 0.0 {
                return Err(ConfigError::NegativeLitterSize {
                    class,
                    mean: rate.mean,
                });
            }
        }

        Ok(())
    }
}

fn check_rate(kind: RateKind, class: usize, rate: &VitalRate) -> Result<(), ConfigError> {
    if !rate.mean.is_finite() || !rate.sd.is_finite() {
        return Err(ConfigError::NonFinite { kind, class });
    }
    if rate.sd < 0.0 {
        return Err(ConfigError::NegativeSd {
            kind,
            class,
            sd: rate.sd,
        });
    }
    Ok(())
}
