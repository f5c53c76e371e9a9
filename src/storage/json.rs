//! JSON report writer

use std::fs;
use std::path::{Path, PathBuf};

use super::{report_filename, ReportExporter};
use crate::error::Result;
use crate::models::Report;

/// Writes reports as pretty-printed JSON files
#[derive(Debug, Clone)]
pub struct JsonReportWriter {
    output_dir: PathBuf,
}

impl JsonReportWriter {
    /// Create a writer, creating `output_dir` if needed
    pub fn new(output_dir: &Path) -> Result<Self> {
        fs::create_dir_all(output_dir)?;

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Read a previously exported report
    pub fn load(path: &Path) -> Result<Report> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ReportExporter for JsonReportWriter {
    fn export(&self, report: &Report) -> Result<PathBuf> {
        let filepath = self
            .output_dir
            .join(report_filename(report.generated_at, "json"));

        let json = serde_json::to_string_pretty(report)?;
        fs::write(&filepath, json)?;

        tracing::info!(path = %filepath.display(), "Saved JSON report");
        Ok(filepath)
    }
}
