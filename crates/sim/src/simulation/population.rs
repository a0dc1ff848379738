//! Population state for a single Monte Carlo run.

use crate::base::{arena, Handle, ListArena};
use crate::demography::{Individual, VitalRates};
use crate::simulation::SimulationConfig;

/// The living individuals of one run together with the rates in force for
/// the current year.
///
/// Individuals are kept in a [`ListArena`] with the most recently created at
/// the head. Ids come from a per-run counter that is never reset, so they are
/// unique within the run even after individuals are removed.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: ListArena<Individual>,
    num_classes: usize,
    ever_created: u64,
    initial_counts: Vec<u32>,
    rates: VitalRates,
}

impl Population {
    /// Build the starting cohort for a run: `initial_population[k]`
    /// individuals in each age class `k`.
    pub fn new(config: &SimulationConfig) -> Self {
        Self::with_counts(&config.initial_population)
    }

    /// Build a population from per-class counts. The number of classes is
    /// `counts.len()`. Rates start at zero.
    pub fn with_counts(counts: &[u32]) -> Self {
        let total: usize = counts.iter().map(|&c| c as usize).sum();
        let mut pop = Self {
            individuals: ListArena::with_capacity(total),
            num_classes: counts.len(),
            ever_created: 0,
            initial_counts: counts.to_vec(),
            rates: VitalRates::zeroed(counts.len()),
        };

        for (age, &count) in counts.iter().enumerate() {
            for _ in 0..count {
                pop.create_individual(age);
            }
        }

        pop
    }

    /// Add a live individual in class `age` at the head of the list.
    pub fn create_individual(&mut self, age: usize) -> Handle {
        debug_assert!(age < self.num_classes, "age class {age} out of range");
        self.ever_created += 1;
        self.individuals
            .push_front(Individual::new(self.ever_created, age))
    }

    /// Unlink and drop every individual flagged dead. Returns the number
    /// removed.
    pub fn remove_dead(&mut self) -> usize {
        self.individuals.retain(Individual::is_alive)
    }

    /// Number of individuals currently in the list.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Total individuals created over the run, including the initial cohort.
    pub fn ever_created(&self) -> u64 {
        self.ever_created
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Per-class starting counts this population was seeded with.
    pub fn initial_counts(&self) -> &[u32] {
        &self.initial_counts
    }

    pub fn rates(&self) -> &VitalRates {
        &self.rates
    }

    pub fn rates_mut(&mut self) -> &mut VitalRates {
        &mut self.rates
    }

    pub fn set_rates(&mut self, rates: VitalRates) {
        debug_assert_eq!(rates.num_classes(), self.num_classes);
        self.rates = rates;
    }

    /// Individuals from newest to oldest.
    pub fn iter(&self) -> arena::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn individuals(&self) -> &ListArena<Individual> {
        &self.individuals
    }

    pub(crate) fn individuals_mut(&mut self) -> &mut ListArena<Individual> {
        &mut self.individuals
    }

    /// Live individuals per age class.
    pub fn age_counts(&self) -> Vec<u32> {
        let mut counts = vec![0; self.num_classes];
        for ind in self.individuals.iter().filter(|ind| ind.is_alive()) {
            counts[ind.age()] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demography::VitalRate;

    #[test]
    fn test_population_from_config() {
        let config = SimulationConfig::new(
            vec![3, 0, 2],
            vec![VitalRate::fixed(0.5); 3],
            vec![VitalRate::fixed(1.0); 3],
            10,
            2,
        );
        let pop = Population::new(&config);
        assert_eq!(pop.size(), 5);
        assert_eq!(pop.ever_created(), 5);
        assert_eq!(pop.num_classes(), 3);
        assert_eq!(pop.age_counts(), vec![3, 0, 2]);
        assert_eq!(pop.initial_counts(), &[3, 0, 2]);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut pop = Population::with_counts(&[2, 1]);
        pop.create_individual(0);
        let mut ids: Vec<u64> = pop.iter().map(|ind| ind.id()).collect();
        // Head is the newest.
        assert_eq!(ids, vec![4, 3, 2, 1]);
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut pop = Population::with_counts(&[3]);
        let head = pop.individuals().head().unwrap();
        pop.individuals_mut().get_mut(head).unwrap().set_alive(false);
        assert_eq!(pop.remove_dead(), 1);
        pop.create_individual(0);
        assert_eq!(pop.size(), 3);
        assert_eq!(pop.ever_created(), 4);
        assert_eq!(pop.iter().next().map(|ind| ind.id()), Some(4));
    }

    #[test]
    fn test_empty_population() {
        let pop = Population::with_counts(&[0, 0]);
        assert!(pop.is_empty());
        assert_eq!(pop.age_counts(), vec![0, 0]);
        assert_eq!(pop.rates().num_classes(), 2);
    }

    #[test]
    fn test_remove_dead_keeps_alive() {
        let mut pop = Population::with_counts(&[2, 2]);
        let handles: Vec<_> = {
            let mut out = Vec::new();
            let mut cursor = pop.individuals().head();
            while let Some(h) = cursor {
                out.push(h);
                cursor = pop.individuals().next(h);
            }
            out
        };
        // Kill the first and third nodes.
        for &h in [handles[0], handles[2]].iter() {
            pop.individuals_mut().get_mut(h).unwrap().set_alive(false);
        }
        assert_eq!(pop.remove_dead(), 2);
        assert_eq!(pop.size(), 2);
        assert!(pop.iter().all(|ind| ind.is_alive()));
        assert_eq!(pop.age_counts().iter().sum::<u32>(), 2);
    }
}
