use serde::{Deserialize, Serialize};

/// Biological sex. Carried on every individual but not used by any vital
/// rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sex {
    #[default]
    Female,
    Male,
}

/// One animal in an age-structured population.
///
/// `id` is unique within a single run and increases with creation order.
/// `age` is an age-class index; an individual is forced dead in the year its
/// age would reach the number of classes, so a live individual always has
/// `age < num_classes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    id: u64,
    alive: bool,
    age: usize,
    sex: Sex,
}

impl Individual {
    /// Create a live individual in age class `age`.
    pub fn new(id: u64, age: usize) -> Self {
        Self {
            id,
            alive: true,
            age,
            sex: Sex::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    #[inline]
    pub fn age(&self) -> usize {
        self.age
    }

    #[inline]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Move to the next age class. Returns `true` if the new age reaches
    /// `num_classes`, in which case the individual is marked dead.
    pub fn grow_older(&mut self, num_classes: usize) -> bool {
        self.age += 1;
        if self.age == num_classes {
            self.alive = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_individual_is_alive() {
        let ind = Individual::new(3, 1);
        assert_eq!(ind.id(), 3);
        assert_eq!(ind.age(), 1);
        assert!(ind.is_alive());
        assert_eq!(ind.sex(), Sex::Female);
    }

    #[test]
    fn test_grow_older_forces_death_at_last_class() {
        let mut ind = Individual::new(1, 1);
        assert!(ind.grow_older(2));
        assert_eq!(ind.age(), 2);
        assert!(!ind.is_alive());
    }

    #[test]
    fn test_grow_older_keeps_alive_before_limit() {
        let mut ind = Individual::new(1, 0);
        assert!(!ind.grow_older(3));
        assert_eq!(ind.age(), 1);
        assert!(ind.is_alive());
    }
}
