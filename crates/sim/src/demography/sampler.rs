//! Moment matching and per-year resampling of vital rates.
//!
//! Survival probabilities are drawn from a Beta distribution and litter sizes
//! from a Gamma distribution, each parameterized so that its mean and
//! standard deviation match the configured values. Negative parameters that
//! come out of the formulas are clipped to zero rather than reported.

use crate::base::RandomSource;
use crate::simulation::SimulationConfig;
use serde::{Deserialize, Serialize};

/// First Beta shape parameter for mean `mu` and standard deviation `sigma`.
pub fn beta_shape(mu: f64, sigma: f64) -> f64 {
    let var = sigma * sigma;
    clip((mu * mu - mu * mu * mu - mu * var) / var)
}

/// Second Beta shape parameter for mean `mu` and standard deviation `sigma`.
pub fn beta_rate(mu: f64, sigma: f64) -> f64 {
    let var = sigma * sigma;
    clip((mu - 2.0 * mu * mu + mu * mu * mu - var + mu * var) / var)
}

/// Gamma shape for mean `mu` and standard deviation `sigma`; 0 when
/// `sigma <= 0`.
pub fn gamma_shape(mu: f64, sigma: f64) -> f64 {
    if sigma > 0.0 {
        (mu * mu) / (sigma * sigma)
    } else {
        0.0
    }
}

/// Gamma rate for mean `mu` and standard deviation `sigma`, so that
/// `gamma_shape / gamma_rate == mu`; 0 when `sigma <= 0`.
pub fn gamma_rate(mu: f64, sigma: f64) -> f64 {
    if sigma > 0.0 {
        mu / (sigma * sigma)
    } else {
        0.0
    }
}

// NaN (e.g. 0/0) compares false against 0, so it is clipped too.
#[inline]
fn clip(x: f64) -> f64 {
    if x > 0.0 {
        x
    } else {
        0.0
    }
}

/// Mean and standard deviation of one vital rate for one age class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalRate {
    pub mean: f64,
    #[serde(default)]
    pub sd: f64,
}

impl VitalRate {
    pub fn new(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }

    /// A rate with no year-to-year variation.
    pub fn fixed(mean: f64) -> Self {
        Self { mean, sd: 0.0 }
    }

    /// Draw this year's survival probability.
    ///
    /// With `sd == 0` the mean is used as-is and nothing is drawn.
    pub fn sample_survival<S: RandomSource + ?Sized>(&self, source: &mut S) -> f64 {
        if self.sd == 0.0 {
            self.mean
        } else {
            source.beta(beta_shape(self.mean, self.sd), beta_rate(self.mean, self.sd))
        }
    }

    /// Draw this year's mean litter size.
    ///
    /// With `mean == 0` or `sd == 0` the mean is used as-is and nothing is
    /// drawn.
    pub fn sample_litter_size<S: RandomSource + ?Sized>(&self, source: &mut S) -> f64 {
        if self.mean == 0.0 || self.sd == 0.0 {
            self.mean
        } else {
            source.gamma(
                gamma_shape(self.mean, self.sd),
                gamma_rate(self.mean, self.sd),
            )
        }
    }
}

/// The survival probability and mean litter size in force for the current
/// year, one entry per age class.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VitalRates {
    pub survival: Vec<f64>,
    pub litter_size: Vec<f64>,
}

impl VitalRates {
    /// All-zero rates for `num_classes` classes.
    pub fn zeroed(num_classes: usize) -> Self {
        Self {
            survival: vec![0.0; num_classes],
            litter_size: vec![0.0; num_classes],
        }
    }

    /// The configured means, without any sampling.
    pub fn means(config: &SimulationConfig) -> Self {
        Self {
            survival: config.survival.iter().map(|r| r.mean).collect(),
            litter_size: config.litter_size.iter().map(|r| r.mean).collect(),
        }
    }

    /// Draw a fresh set of rates for one year.
    ///
    /// Survival is drawn for every class before any litter size, which fixes
    /// the order of draws on the stream.
    pub fn sample<S: RandomSource + ?Sized>(config: &SimulationConfig, source: &mut S) -> Self {
        let mut rates = Self::zeroed(config.num_classes());
        rates.resample(config, source);
        rates
    }

    /// Redraw in place, reusing the existing buffers.
    pub fn resample<S: RandomSource + ?Sized>(&mut self, config: &SimulationConfig, source: &mut S) {
        self.survival.clear();
        self.survival
            .extend(config.survival.iter().map(|r| r.sample_survival(source)));
        self.litter_size.clear();
        self.litter_size
            .extend(config.litter_size.iter().map(|r| r.sample_litter_size(source)));
    }

    pub fn num_classes(&self) -> usize {
        self.survival.len()
    }
}
