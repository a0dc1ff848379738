use agepop_sim::SimulationConfig;

pub fn print_parameters(config: &SimulationConfig) {
    println!("\n📋 Projection Configuration");
    println!("  • Age Classes: {}", config.num_classes());
    println!(
        "  • Initial Population: {:?} ({} individuals) [--initial]",
        config.initial_population,
        config.initial_size()
    );
    println!("  • Years: {} [-y, --years]", config.years);
    println!("  • Runs: {} [-r, --runs]", config.runs);
    if config.reseed {
        println!("  • Random Seed: {} [--seed]", config.seed);
    } else {
        println!("  • Random Seed: Random [--seed]");
    }

    println!("\n🌱 Vital Rates (mean ± sd across years)");
    println!("  class   survival [--survival]   litter size [--litter-size]");
    for (class, (s, l)) in config
        .survival
        .iter()
        .zip(&config.litter_size)
        .enumerate()
    {
        println!(
            "  {class:>5}   {:>6.3} ± {:<6.3}        {:>6.3} ± {:<6.3}",
            s.mean, s.sd, l.mean, l.sd
        );
    }
    println!(
        "  • Maximum lifespan: {} years (individuals die on reaching age {})",
        config.num_classes(),
        config.num_classes()
    );
    println!();
}
