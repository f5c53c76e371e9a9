use anyhow::{Context, Result};
use std::path::Path;

use clario::collect::{DataSource, SimulatedSource};

/// Write a simulated raw dataset to `output` as JSON
pub fn sample(source: SimulatedSource, output: &Path) -> Result<()> {
    let records = source.fetch()?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(output, json)
        .with_context(|| format!("Failed to write sample file: {}", output.display()))?;

    println!(
        "Wrote {} {} records to {}",
        records.len(),
        source.name(),
        output.display()
    );
    println!(
        "Available sources: {}",
        SimulatedSource::available_sources().join(", ")
    );
    Ok(())
}
