pub mod init;
pub mod run;
pub mod summarize;
pub mod validate;

use agepop_sim::SimulationConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Read a configuration file without validating it.
pub fn load_config(path: &Path) -> Result<SimulationConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse configuration {}", path.display()))
}
