//! Monte Carlo summaries
//!
//! This module provides:
//! - Total population trajectory (mean, sd, range, quantiles per year)
//! - Mean counts per age class
//! - Extinction and quasi-extinction probabilities
//! - Year-over-year growth rates

pub mod extinction;
pub mod growth;
pub mod report;
pub mod trajectory;
pub mod utils;

pub use extinction::{extinction_probability, quasi_extinction_probability};
pub use growth::growth_rates;
pub use report::{summarize, QuasiExtinction, Summary};
pub use trajectory::{class_means, total_trajectory, YearSummary};
