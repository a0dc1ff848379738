//! Simulation driver, population state and statistics.
//!
//! Re-exports
//!
//! - `Simulation`: the Monte Carlo driver that runs every run and year.
//! - `Population`: the individuals of one run and the rates in force.
//! - `Statistics`: the `[run][year][class]` count block.
//! - `SimulationBuilder`: fluent builder for constructing `Simulation`
//!   instances with validation.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod population;
pub mod statistics;

pub use builder::SimulationBuilder;
pub use configs::SimulationConfig;
pub use engine::{RunReport, Simulation};
pub use population::Population;
pub use statistics::Statistics;
