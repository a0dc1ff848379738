//! Flat-array boundary for embedding the engine in a host runtime.
//!
//! A host passes plain numeric vectors: initial counts per class, and for
//! each vital rate one array holding all class means followed by all class
//! standard deviations. The result is a single row-major
//! `runs x (years + 1) x classes` vector.

use crate::base::RandomSource;
use crate::demography::VitalRate;
use crate::errors::InterfaceError;
use crate::simulation::{Simulation, SimulationConfig};
use serde::{Deserialize, Serialize};

/// One projection request in host layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostRequest {
    /// Reseed the stream once before the first run
    pub reseed: bool,
    /// Seed used when `reseed` is set
    #[serde(default)]
    pub seed: u64,
    pub years: i64,
    pub runs: i64,
    /// Starting individuals per age class
    pub initial_population: Vec<i64>,
    /// Survival means for every class, then survival sds for every class
    pub survival: Vec<f64>,
    /// Litter size means for every class, then litter size sds for every class
    pub litter_size: Vec<f64>,
}

impl HostRequest {
    /// Unpack into a validated [`SimulationConfig`].
    pub fn into_config(self) -> Result<SimulationConfig, InterfaceError> {
        let classes = self.initial_population.len();
        let survival = split_rates("survival", &self.survival, classes)?;
        let litter_size = split_rates("litter_size", &self.litter_size, classes)?;
        let years = non_negative("years", self.years)?;
        let runs = non_negative("runs", self.runs)?;

        let initial_population = self
            .initial_population
            .iter()
            .map(|&count| {
                u32::try_from(count).map_err(|_| InterfaceError::Negative {
                    field: "initial_population",
                    value: count,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut config =
            SimulationConfig::new(initial_population, survival, litter_size, years, runs);
        config.reseed = self.reseed;
        config.seed = self.seed;
        config.validate()?;
        Ok(config)
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<usize, InterfaceError> {
    usize::try_from(value).map_err(|_| InterfaceError::Negative { field, value })
}

fn split_rates(
    field: &'static str,
    values: &[f64],
    classes: usize,
) -> Result<Vec<VitalRate>, InterfaceError> {
    if values.len() != 2 * classes {
        return Err(InterfaceError::RateArrayLength {
            field,
            expected: 2 * classes,
            found: values.len(),
        });
    }
    let (means, sds) = values.split_at(classes);
    Ok(means
        .iter()
        .zip(sds)
        .map(|(&mean, &sd)| VitalRate::new(mean, sd))
        .collect())
}

/// Run a whole job synchronously and return the flat count block.
pub fn montecarlo<S: RandomSource>(
    request: HostRequest,
    source: S,
) -> Result<Vec<f64>, InterfaceError> {
    let config = request.into_config()?;
    let mut sim = Simulation::with_source(config, source)?;
    sim.run();
    Ok(sim.into_statistics().into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::DrawStream;

    fn request() -> HostRequest {
        HostRequest {
            reseed: true,
            seed: 3,
            years: 4,
            runs: 2,
            initial_population: vec![10, 5],
            survival: vec![0.5, 0.9, 0.1, 0.0],
            litter_size: vec![0.0, 2.0, 0.0, 0.5],
        }
    }

    #[test]
    fn test_means_then_sds() {
        let config = request().into_config().unwrap();
        assert_eq!(config.survival, vec![VitalRate::new(0.5, 0.1), VitalRate::new(0.9, 0.0)]);
        assert_eq!(
            config.litter_size,
            vec![VitalRate::new(0.0, 0.0), VitalRate::new(2.0, 0.5)]
        );
        assert!(config.reseed);
    }

    #[test]
    fn test_wrong_rate_length() {
        let mut req = request();
        req.survival.pop();
        assert_eq!(
            req.into_config(),
            Err(InterfaceError::RateArrayLength {
                field: "survival",
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_negative_count() {
        let mut req = request();
        req.initial_population[1] = -1;
        assert!(matches!(
            req.into_config(),
            Err(InterfaceError::Negative {
                field: "initial_population",
                value: -1
            })
        ));
    }

    #[test]
    fn test_negative_runs() {
        let mut req = request();
        req.runs = -2;
        assert!(matches!(
            req.into_config(),
            Err(InterfaceError::Negative { field: "runs", .. })
        ));
    }

    #[test]
    fn test_montecarlo_output_size() {
        let out = montecarlo(request(), DrawStream::seeded(0)).unwrap();
        assert_eq!(out.len(), 2 * 5 * 2);
        assert_eq!(&out[0..2], &[10.0, 5.0]);
        assert_eq!(&out[10..12], &[10.0, 5.0]);
    }

    #[test]
    fn test_montecarlo_reseed_ignores_incoming_state() {
        let a = montecarlo(request(), DrawStream::seeded(1)).unwrap();
        let b = montecarlo(request(), DrawStream::seeded(2)).unwrap();
        assert_eq!(a, b);
    }
}
