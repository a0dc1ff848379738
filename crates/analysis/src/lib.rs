//! # Analysis Crate
//!
//! Summary statistics over a finished [`Statistics`] block: the distribution
//! of population totals per year, per-class means, extinction risk and
//! growth rates.
//!
//! [`Statistics`]: agepop_sim::Statistics

pub mod analysis;
pub mod errors;

pub use analysis::*;
pub use errors::AnalysisError;
