use crate::defaults;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration path
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub output: PathBuf,

    /// Starting individuals per age class (comma separated)
    ///
    /// The number of values sets the number of age classes.
    #[arg(long, value_delimiter = ',', default_values_t = defaults::INITIAL_POPULATION)]
    pub initial: Vec<u32>,

    /// Mean survival probability per age class
    #[arg(long, value_delimiter = ',', default_values_t = defaults::SURVIVAL_MEAN)]
    pub survival: Vec<f64>,

    /// Between-year standard deviation of survival per age class
    ///
    /// Missing entries default to 0 (no variation).
    #[arg(long, value_delimiter = ',', default_values_t = defaults::SURVIVAL_SD)]
    pub survival_sd: Vec<f64>,

    /// Mean litter size per age class
    #[arg(long, value_delimiter = ',', default_values_t = defaults::LITTER_SIZE_MEAN)]
    pub litter_size: Vec<f64>,

    /// Between-year standard deviation of litter size per age class
    #[arg(long, value_delimiter = ',', default_values_t = defaults::LITTER_SIZE_SD)]
    pub litter_size_sd: Vec<f64>,

    /// Number of years to project
    #[arg(short = 'y', long, default_value_t = defaults::YEARS)]
    pub years: usize,

    /// Number of Monte Carlo runs
    #[arg(short = 'r', long, default_value_t = defaults::RUNS)]
    pub runs: usize,

    /// Random seed (omit for a fresh stream on every run)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Configuration file
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub config: PathBuf,

    /// Results file to write
    #[arg(short, long, default_value = defaults::RESULTS_FILE)]
    pub output: PathBuf,

    /// Override random seed (default: use configured seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override number of runs
    #[arg(long)]
    pub runs: Option<usize>,

    /// Override number of years
    #[arg(long)]
    pub years: Option<usize>,

    /// Also write the counts as CSV (run,year,class,count)
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Results file
    #[arg(short, long, default_value = defaults::RESULTS_FILE)]
    pub input: PathBuf,

    /// Output format (pretty, json)
    #[arg(short, long, default_value = defaults::SUMMARY_FORMAT)]
    pub format: String,

    /// Also report the probability of falling to or below this total size
    #[arg(long)]
    pub quasi_extinction: Option<f64>,

    /// Only print every Nth year in the pretty table (year 0 and the last
    /// year are always shown)
    #[arg(long, default_value_t = 1)]
    pub every: usize,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
