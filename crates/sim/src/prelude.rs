//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use agepop_sim::prelude::*;
//!
//! let config = SimulationConfig::new(
//!     vec![10],
//!     vec![VitalRate::fixed(1.0)],
//!     vec![VitalRate::fixed(0.0)],
//!     5,
//!     1,
//! )
//! .with_seed(1);
//! let mut sim = Simulation::new(config).unwrap();
//! let stats = sim.run();
//! assert_eq!(stats.total(0, 0), 10.0);
//! assert_eq!(stats.total(0, 1), 0.0);
//! ```

pub use crate::base::{DrawStream, RandomSource, RngSource};
pub use crate::demography::{Individual, VitalRate, VitalRates};
pub use crate::errors;
pub use crate::simulation::{
    Population, RunReport, Simulation, SimulationBuilder, SimulationConfig, Statistics,
};
