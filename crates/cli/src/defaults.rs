//! Shared default values for projection configuration.
//! These values are used by the `init` command (via clap) and by the output
//! paths of the other commands.

pub const CONFIG_FILE: &str = "job.json";
pub const RESULTS_FILE: &str = "results.json";

pub const INITIAL_POPULATION: [u32; 3] = [50, 30, 20];
pub const SURVIVAL_MEAN: [f64; 3] = [0.5, 0.8, 0.7];
pub const SURVIVAL_SD: [f64; 3] = [0.05, 0.05, 0.1];
pub const LITTER_SIZE_MEAN: [f64; 3] = [0.0, 1.2, 1.8];
pub const LITTER_SIZE_SD: [f64; 3] = [0.0, 0.3, 0.4];

pub const YEARS: usize = 50;
pub const RUNS: usize = 100;

pub const SUMMARY_FORMAT: &str = "pretty";
