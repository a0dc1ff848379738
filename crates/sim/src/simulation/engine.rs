//! Monte Carlo driver.
//!
//! Runs are simulated one after another on a single random stream. Within a
//! run, each year first resamples the vital rates and then applies one
//! demographic transition. A run stops early once its population is extinct;
//! the remaining year slots keep their zero value.

use crate::base::{DrawStream, RandomSource};
use crate::demography::cycle_year;
use crate::errors::ConfigError;
use crate::simulation::{Population, SimulationConfig, Statistics};
use tracing::{debug, info};

/// Summary of one finished run, handed to progress callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Zero-based run index
    pub run: usize,
    /// Transitions applied before the run ended
    pub years_simulated: usize,
    /// Individuals alive at the end of the run
    pub final_size: usize,
    /// Individuals created over the run, initial cohort included
    pub ever_created: u64,
    /// Total offspring born over the run
    pub births: u64,
    pub extinct: bool,
}

/// Main simulation driver.
///
/// The random source is generic so callers can supply their own stream. Each
/// call to [`run`](Self::run) simulates the whole job and overwrites the
/// statistics. When `config.reseed` is set the stream is reseeded from
/// `config.seed` at the start of every job, so repeated calls give identical
/// results; otherwise the stream simply continues.
#[derive(Debug)]
pub struct Simulation<S: RandomSource = DrawStream> {
    config: SimulationConfig,
    source: S,
    statistics: Statistics,
}

impl Simulation<DrawStream> {
    /// Create a simulation on the default stream.
    ///
    /// With `reseed` set the stream starts from `seed`; otherwise it is seeded
    /// from operating-system entropy.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let source = if config.reseed {
            DrawStream::seeded(config.seed)
        } else {
            DrawStream::from_os_rng()
        };
        Self::with_source(config, source)
    }
}

impl<S: RandomSource> Simulation<S> {
    /// Create a simulation drawing from `source`.
    pub fn with_source(config: SimulationConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let statistics = Statistics::zeroed(config.runs, config.years, config.num_classes());
        Ok(Self {
            config,
            source,
            statistics,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The random source in its current state.
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Statistics from the last job (all zeros before the first run).
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn into_statistics(self) -> Statistics {
        self.statistics
    }

    /// Run every Monte Carlo run and return the filled statistics.
    pub fn run(&mut self) -> &Statistics {
        self.run_with_progress(|_| {})
    }

    /// Like [`run`](Self::run), calling `on_run` after each run finishes.
    pub fn run_with_progress<F>(&mut self, mut on_run: F) -> &Statistics
    where
        F: FnMut(&RunReport),
    {
        let (runs, years, classes) = (self.config.runs, self.config.years, self.config.num_classes());
        info!(runs, years, classes, reseed = self.config.reseed, "starting projection");

        self.statistics = Statistics::zeroed(runs, years, classes);
        if self.config.reseed {
            self.source.reseed(self.config.seed);
        }

        let mut extinctions = 0;
        for run in 0..runs {
            let report = self.simulate_run(run);
            if report.extinct {
                extinctions += 1;
            }
            on_run(&report);
        }

        info!(runs, extinctions, "projection complete");
        &self.statistics
    }

    fn simulate_run(&mut self, run: usize) -> RunReport {
        let mut population = Population::new(&self.config);
        self.statistics.record(run, 0, &population);

        let mut years_simulated = 0;
        let mut births = 0;
        for year in 1..=self.config.years {
            population
                .rates_mut()
                .resample(&self.config, &mut self.source);
            let outcome = cycle_year(
                &mut population,
                &mut self.source,
                &mut self.statistics,
                run,
                year,
            );
            years_simulated = year;
            births += outcome.births;

            if population.is_empty() {
                debug!(run, year, "population extinct");
                break;
            }
        }

        let report = RunReport {
            run,
            years_simulated,
            final_size: population.size(),
            ever_created: population.ever_created(),
            births,
            extinct: population.is_empty(),
        };
        debug!(?report, "run finished");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demography::VitalRate;

    fn config(initial: Vec<u32>, survival: Vec<VitalRate>, litter: Vec<VitalRate>) -> SimulationConfig {
        SimulationConfig::new(initial, survival, litter, 5, 3).with_seed(42)
    }

    #[test]
    fn test_simulation_new_validates() {
        let bad = SimulationConfig::new(vec![1], vec![], vec![], 5, 1);
        assert!(Simulation::new(bad).is_err());
    }

    #[test]
    fn test_initial_snapshot_recorded() {
        let mut sim = Simulation::new(config(
            vec![4, 2],
            vec![VitalRate::fixed(0.5); 2],
            vec![VitalRate::fixed(1.0); 2],
        ))
        .unwrap();
        let stats = sim.run();
        for run in 0..3 {
            assert_eq!(stats.row(run, 0), &[4.0, 2.0]);
        }
    }

    #[test]
    fn test_run_reports_every_run() {
        let mut sim = Simulation::new(config(
            vec![10],
            vec![VitalRate::fixed(1.0)],
            vec![VitalRate::fixed(0.0)],
        ))
        .unwrap();
        let mut reports = Vec::new();
        sim.run_with_progress(|r| reports.push(*r));

        assert_eq!(reports.len(), 3);
        // A single class always ages out after one year.
        for (i, r) in reports.iter().enumerate() {
            assert_eq!(r.run, i);
            assert_eq!(r.years_simulated, 1);
            assert_eq!(r.final_size, 0);
            assert_eq!(r.ever_created, 10);
            assert_eq!(r.births, 0);
            assert!(r.extinct);
        }
    }

    #[test]
    fn test_extinction_stops_run() {
        let mut sim = Simulation::new(config(
            vec![5],
            vec![VitalRate::fixed(0.0)],
            vec![VitalRate::fixed(3.0)],
        ))
        .unwrap();
        let mut reports = Vec::new();
        sim.run_with_progress(|r| reports.push(*r));

        assert!(reports.iter().all(|r| r.extinct && r.years_simulated == 1));
        let stats = sim.statistics();
        for year in 1..=5 {
            assert_eq!(stats.total(0, year), 0.0);
        }
    }

    #[test]
    fn test_repeated_runs_with_reseed_match() {
        let mut sim = Simulation::new(config(
            vec![20, 10],
            vec![VitalRate::new(0.6, 0.1), VitalRate::new(0.8, 0.05)],
            vec![VitalRate::fixed(0.0), VitalRate::new(1.5, 0.5)],
        ))
        .unwrap();
        let first = sim.run().clone();
        let second = sim.run().clone();
        assert_eq!(first, second);
    }
}
