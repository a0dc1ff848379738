mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use args::{InitArgs, RunArgs, SummarizeArgs};
use commands::{init, run, summarize, validate};

/// agepop: Monte Carlo projection of age-structured populations
///
/// This tool follows every individual of a population through yearly
/// survival, reproduction and aging, many times over, and reports how many
/// individuals of each age class are alive in every run and year.
#[derive(Parser, Debug)]
#[command(name = "agepop")]
#[command(author, version, about = "Projects age-structured populations with individual-based Monte Carlo runs", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel summaries
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v for info, -vv for debug)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a new projection configuration.
    ///
    /// Sets up the starting population and vital rates but does not run
    /// anything yet.
    Init(Box<InitArgs>),

    /// Check a configuration file for errors.
    Validate {
        /// Configuration file
        #[arg(short, long, default_value = defaults::CONFIG_FILE)]
        config: PathBuf,
    },

    /// Run every Monte Carlo run of a configuration and save the counts.
    Run(RunArgs),

    /// Summarize a results file (population trajectory, extinction risk).
    Summarize(SummarizeArgs),
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Init(args) => {
            init::init_projection(&args)?;
        }
        Commands::Validate { config } => {
            validate::validate_config(&config)?;
        }
        Commands::Run(args) => {
            run::run_projection(&args)?;
        }
        Commands::Summarize(args) => {
            summarize::summarize_results(&args)?;
        }
    }

    Ok(())
}
