use anyhow::{Context, Result};
use agepop_sim::simulation::SimulationBuilder;
use agepop_sim::SimulationConfig;
use tracing::info;

use crate::args::InitArgs;
use crate::printing::print_parameters;

pub fn init_projection(args: &InitArgs) -> Result<()> {
    println!("🐾 agepop - Age-Structured Population Projection");
    println!("============================================\n");

    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            args.output.display()
        );
    }

    let config = build_config(args)?;

    println!("Configuration:");
    print_parameters(&config);

    let json = serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!(path = %args.output.display(), "configuration written");

    println!("✓ Configuration written to {}", args.output.display());
    println!(
        "\n💡 Use 'agepop run -c {}' to run the projection",
        args.output.display()
    );

    Ok(())
}

pub fn build_config(args: &InitArgs) -> Result<SimulationConfig> {
    let mut builder = SimulationBuilder::new()
        .initial_population(args.initial.clone())
        .survival(&args.survival, &args.survival_sd)
        .litter_size(&args.litter_size, &args.litter_size_sd)
        .years(args.years)
        .runs(args.runs);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    builder
        .build_config()
        .context("Failed to build configuration")
}
