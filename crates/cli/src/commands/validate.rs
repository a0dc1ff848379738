use anyhow::{Context, Result};
use std::path::Path;

use crate::commands::load_config;
use crate::printing::print_parameters;

pub fn validate_config(path: &Path) -> Result<()> {
    println!("🔍 Validating configuration: {}", path.display());

    if !path.exists() {
        anyhow::bail!("Configuration file does not exist");
    }

    let config = load_config(path)?;
    config.validate().context("✗ Configuration is invalid")?;

    print_parameters(&config);
    println!(
        "✓ Configuration is valid ({} cells of output per job)",
        config.statistics_len()
    );

    Ok(())
}
