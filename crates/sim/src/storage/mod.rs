//! Persistence of finished projections.
//!
//! Provides a JSON results file that bundles the configuration with its
//! statistics, and a long-format CSV export.

mod results;

pub use results::{write_csv, ResultsFile};
