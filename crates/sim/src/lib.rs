//! # Simulation Crate
//!
//! The `sim` crate provides an individual-based, age-structured population
//! projection engine. Each Monte Carlo run starts from a fixed cohort and is
//! stepped year by year through survival, reproduction, aging and removal,
//! with vital rates resampled every year. The result is a count of live
//! individuals per run, year and age class.

pub mod base;
pub mod demography;
pub mod errors;
pub mod interface;
pub mod prelude;
pub mod simulation;
pub mod storage;

pub use base::{DrawStream, RandomSource};
pub use simulation::{Simulation, SimulationConfig, Statistics};
