//! Report export and dataset persistence
//!
//! The analysis engine hands a finished [`Report`] to a [`ReportExporter`];
//! encoding and file naming live entirely on this side.

pub mod json;
pub mod markdown;

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::models::Report;

pub use json::JsonReportWriter;
pub use markdown::MarkdownReportWriter;

/// Persists a finished report
pub trait ReportExporter {
    /// Write the report and return the path it was written to
    fn export(&self, report: &Report) -> Result<PathBuf>;
}

/// File name for a report generated at `generated_at`
///
/// Format: `trend_report_{YYYYmmdd_HHMMSS}.{extension}`
#[must_use]
pub fn report_filename(generated_at: DateTime<Utc>, extension: &str) -> String {
    format!(
        "trend_report_{}.{extension}",
        generated_at.format("%Y%m%d_%H%M%S")
    )
}

/// Save a cleaned dataset as a JSON array of observations
pub fn save_dataset(dataset: &Dataset, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(dataset)?;
    fs::write(path, json)?;

    tracing::info!(
        path = %path.display(),
        observations = dataset.len(),
        "Saved processed dataset"
    );
    Ok(path.to_path_buf())
}
