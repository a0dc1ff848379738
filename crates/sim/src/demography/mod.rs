//! Demographic model: individuals, vital-rate sampling and the yearly
//! transition.

mod individual;
pub mod sampler;
pub mod transition;

pub use individual::{Individual, Sex};
pub use sampler::{beta_rate, beta_shape, gamma_rate, gamma_shape, VitalRate, VitalRates};
pub use transition::{cycle_year, YearOutcome};
