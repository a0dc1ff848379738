//! The yearly demographic transition.
//!
//! A year is four phases applied in a fixed order:
//!
//! 1. **Survival**: every individual draws a Bernoulli outcome with its age
//!    class's survival probability. Losers are flagged dead but stay in the
//!    list.
//! 2. **Reproduction and aging**: every individual still flagged alive draws a
//!    Poisson litter at its class's mean litter size, the offspring are added
//!    at age 0, and the parent moves up one class. A parent whose new age
//!    equals the number of classes is flagged dead after it has reproduced.
//! 3. **Removal**: every flagged individual is unlinked and dropped.
//! 4. **Snapshot**: live counts per age class are written to the statistics.
//!
//! Offspring are inserted at the head of the list while the reproduction pass
//! walks towards the tail, so they are never visited in the year they are
//! born.

use crate::base::RandomSource;
use crate::simulation::{Population, Statistics};

/// Bookkeeping for one call to [`cycle_year`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearOutcome {
    /// Individuals that failed their survival draw.
    pub deaths: usize,
    /// Parents that reached the maximum age this year.
    pub senescent: usize,
    /// Offspring created this year.
    pub births: u64,
    /// Live individuals after removal.
    pub size: usize,
}

/// Phase 1. Returns the number of individuals that did not survive.
pub fn survival_phase<S: RandomSource + ?Sized>(population: &mut Population, source: &mut S) -> usize {
    let mut deaths = 0;
    let mut cursor = population.individuals().head();

    while let Some(handle) = cursor {
        cursor = population.individuals().next(handle);

        let Some(age) = population.individuals().get(handle).map(|ind| ind.age()) else {
            continue;
        };
        let survived = source.bernoulli(population.rates().survival[age]);
        if let Some(ind) = population.individuals_mut().get_mut(handle) {
            ind.set_alive(survived);
        }
        if !survived {
            deaths += 1;
        }
    }

    deaths
}

/// Phase 2. Returns `(births, senescent)`: offspring created and parents
/// forced dead by reaching the maximum age.
pub fn reproduction_phase<S: RandomSource + ?Sized>(
    population: &mut Population,
    source: &mut S,
) -> (u64, usize) {
    let num_classes = population.num_classes();
    let mut births = 0;
    let mut senescent = 0;
    let mut cursor = population.individuals().head();

    while let Some(handle) = cursor {
        // Captured before any offspring are linked in ahead of the head.
        cursor = population.individuals().next(handle);

        let age = match population.individuals().get(handle) {
            Some(ind) if ind.is_alive() => ind.age(),
            _ => continue,
        };

        let litter = source.poisson(population.rates().litter_size[age]);
        for _ in 0..litter {
            population.create_individual(0);
        }
        births += litter;

        if let Some(parent) = population.individuals_mut().get_mut(handle) {
            if parent.grow_older(num_classes) {
                senescent += 1;
            }
        }
    }

    (births, senescent)
}

/// Phase 3. Drops every individual flagged dead and returns how many were
/// removed.
pub fn removal_phase(population: &mut Population) -> usize {
    population.remove_dead()
}

/// Apply one full year to `population` and record the resulting snapshot in
/// `statistics` at `(run, year)`.
///
/// The rates in force must already be set on the population. All phases run
/// even if the population is empty.
pub fn cycle_year<S: RandomSource + ?Sized>(
    population: &mut Population,
    source: &mut S,
    statistics: &mut Statistics,
    run: usize,
    year: usize,
) -> YearOutcome {
    let deaths = survival_phase(population, source);
    let (births, senescent) = reproduction_phase(population, source);
    removal_phase(population);
    statistics.record(run, year, population);

    YearOutcome {
        deaths,
        senescent,
        births,
        size: population.size(),
    }
}
