pub mod analyze;
pub mod inspect;
pub mod sample;

// Re-export command functions for convenience
pub use analyze::{analyze, AnalyzeParams};
pub use inspect::{emergent, growth, insights, seasonality, stats};
pub use sample::sample;

use anyhow::{Context, Result};
use std::path::PathBuf;

use clario::collect::{DataSource, JsonFileSource, SimulatedSource};
use clario::config::Config;
use clario::dataset::{clean, Dataset};

/// Where a command reads its observations from
#[derive(Debug, Clone)]
pub enum InputSelection {
    File(PathBuf),
    Simulated(SimulatedSource),
}

impl InputSelection {
    /// An explicit file wins over the configured path, which wins over simulated data
    pub fn resolve(input: Option<PathBuf>, config: &Config, simulated: SimulatedSource) -> Self {
        match input.or_else(|| config.input.path.clone()) {
            Some(path) => Self::File(path),
            None => Self::Simulated(simulated),
        }
    }

    fn source(&self) -> Box<dyn DataSource> {
        match self {
            Self::File(path) => Box::new(JsonFileSource::new(path.clone())),
            Self::Simulated(source) => Box::new(source.clone()),
        }
    }
}

/// Fetch and clean observations into a dataset
pub fn load_dataset(selection: &InputSelection, config: &Config) -> Result<Dataset> {
    let source = selection.source();
    tracing::info!(source = source.name(), "Collecting observations");

    let records = source
        .fetch()
        .with_context(|| format!("Failed to collect data from {}", source.name()))?;

    let (dataset, stats) = clean(&records, &config.input.date_formats)?;

    println!(
        "Loaded {} observations ({} dropped during cleaning)",
        stats.rows_after, stats.rows_dropped
    );

    Ok(dataset)
}
