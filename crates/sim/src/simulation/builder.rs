//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for assembling a [`SimulationConfig`] from
//! per-class vectors, with validation at the end.

use crate::demography::VitalRate;
pub use crate::errors::BuilderError;
use crate::simulation::{Simulation, SimulationConfig};

/// Builder for constructing Simulation instances with a fluent API.
///
/// # Examples
///
/// ```
/// use agepop_sim::simulation::SimulationBuilder;
///
/// let mut sim = SimulationBuilder::new()
///     .initial_population(vec![50, 30, 10])
///     .survival(&[0.5, 0.8, 0.7], &[0.05, 0.05, 0.1])
///     .litter_size(&[0.0, 1.2, 2.0], &[0.0, 0.3, 0.5])
///     .years(25)
///     .runs(100)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let stats = sim.run();
/// assert_eq!(stats.shape(), (100, 25, 3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    // Required parameters
    initial_population: Option<Vec<u32>>,
    survival: Option<Vec<VitalRate>>,
    litter_size: Option<Vec<VitalRate>>,
    years: Option<usize>,

    runs: usize,         // Default: 1
    seed: Option<u64>,   // Default: None (entropy)
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self {
            runs: 1,
            ..Default::default()
        }
    }

    /// Set the starting individuals per age class (required). Its length
    /// defines the number of age classes.
    pub fn initial_population(mut self, counts: Vec<u32>) -> Self {
        self.initial_population = Some(counts);
        self
    }

    /// Set survival means and standard deviations per class (required).
    ///
    /// The slices are zipped, so a shorter `sds` slice leaves the remaining
    /// classes without variation.
    pub fn survival(mut self, means: &[f64], sds: &[f64]) -> Self {
        self.survival = Some(zip_rates(means, sds));
        self
    }

    /// Set litter size means and standard deviations per class (required).
    pub fn litter_size(mut self, means: &[f64], sds: &[f64]) -> Self {
        self.litter_size = Some(zip_rates(means, sds));
        self
    }

    /// Set survival rates directly.
    pub fn survival_rates(mut self, rates: Vec<VitalRate>) -> Self {
        self.survival = Some(rates);
        self
    }

    /// Set litter size rates directly.
    pub fn litter_size_rates(mut self, rates: Vec<VitalRate>) -> Self {
        self.litter_size = Some(rates);
        self
    }

    /// Set the number of years to project (required).
    pub fn years(mut self, years: usize) -> Self {
        self.years = Some(years);
        self
    }

    /// Set the number of Monte Carlo runs (default: 1).
    pub fn runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Set the random seed for reproducibility (default: None = entropy).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Assemble and validate the configuration without creating a
    /// simulation.
    pub fn build_config(self) -> Result<SimulationConfig, BuilderError> {
        let initial_population = self
            .initial_population
            .ok_or(BuilderError::MissingRequired("initial_population"))?;
        let survival = self
            .survival
            .ok_or(BuilderError::MissingRequired("survival"))?;
        let litter_size = self
            .litter_size
            .ok_or(BuilderError::MissingRequired("litter_size"))?;
        let years = self.years.ok_or(BuilderError::MissingRequired("years"))?;

        let mut config =
            SimulationConfig::new(initial_population, survival, litter_size, years, self.runs);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate()?;
        Ok(config)
    }

    /// Build and validate the simulation.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        let config = self.build_config()?;
        Ok(Simulation::new(config)?)
    }
}

fn zip_rates(means: &[f64], sds: &[f64]) -> Vec<VitalRate> {
    means
        .iter()
        .enumerate()
        .map(|(i, &mean)| VitalRate::new(mean, sds.get(i).copied().unwrap_or(0.0)))
        .collect()
}
