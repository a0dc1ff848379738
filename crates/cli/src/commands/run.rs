use anyhow::{Context, Result};
use agepop_sim::storage::{write_csv, ResultsFile};
use agepop_sim::Simulation;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufWriter;
use tracing::info;

use crate::args::RunArgs;
use crate::commands::load_config;
use crate::printing::print_parameters;

pub fn run_projection(args: &RunArgs) -> Result<()> {
    println!("🐾 agepop - Running Projection");
    println!("============================================\n");

    let mut config = load_config(&args.config)?;

    // Apply overrides
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(runs) = args.runs {
        config.runs = runs;
    }
    if let Some(years) = args.years {
        config.years = years;
    }

    let mut sim = Simulation::new(config).context("Failed to initialize projection")?;

    println!("Configuration:");
    print_parameters(sim.config());

    let runs = sim.config().runs;
    println!("Running {runs} runs of {} years...", sim.config().years);

    let pb = if args.progress {
        let pb = ProgressBar::new(runs as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut extinctions = 0;
    sim.run_with_progress(|report| {
        if report.extinct {
            extinctions += 1;
        }
        if let Some(pb) = &pb {
            pb.set_message(format!("{extinctions} extinct"));
            pb.inc(1);
        }
    });

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let config = sim.config().clone();
    let results = ResultsFile::new(config, sim.into_statistics());
    results
        .save(&args.output)
        .with_context(|| format!("Failed to write results to {}", args.output.display()))?;
    info!(path = %args.output.display(), "results written");

    if let Some(csv) = &args.csv {
        let file = File::create(csv)
            .with_context(|| format!("Failed to create {}", csv.display()))?;
        write_csv(&results.statistics, BufWriter::new(file))
            .with_context(|| format!("Failed to write {}", csv.display()))?;
        println!("✓ Counts exported to {}", csv.display());
    }

    println!("\n✓ Projection complete!");
    println!("  Runs: {runs}");
    println!("  Extinct runs: {extinctions}");
    println!("  Results: {}", args.output.display());

    println!(
        "\n💡 Use 'agepop summarize -i {}' to view a summary",
        args.output.display()
    );

    Ok(())
}
