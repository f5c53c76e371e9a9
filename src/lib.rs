//! clario - Trend analysis engine
//!
//! Turns time-stamped popularity observations for named trends into growth,
//! emergence, seasonality and insight metrics, assembled into a report.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`analytics`] - The analysis engine (growth, emergence, seasonality, insights, report)
//! - [`dataset`] - Immutable, time-ordered dataset and the cleaning step
//! - [`collect`] - Data sources delivering raw records
//! - [`storage`] - Report exporters and dataset persistence
//! - [`config`] - Configuration management and settings
//! - [`models`] - Core data structures and types
//! - [`error`] - Unified error type
//!
//! # Example
//!
//! ```no_run
//! use clario::analytics::TrendAnalyzer;
//! use clario::collect::{DataSource, SimulatedSource};
//! use clario::dataset::clean;
//!
//! fn main() -> anyhow::Result<()> {
//!     let records = SimulatedSource::generated(30, 42).fetch()?;
//!     let (dataset, _stats) = clean(&records, &[])?;
//!     let report = TrendAnalyzer::default().report(&dataset)?;
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod collect;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod storage;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{AnalysisError, AnalysisResult, TrendAnalyzer};
    pub use crate::collect::{DataSource, JsonFileSource, SimulatedSource};
    pub use crate::config::Config;
    pub use crate::dataset::{clean, Dataset};
    pub use crate::error::{ClarioErrorTrait, Error, ErrorCategory, Result};
    pub use crate::models::{Direction, GrowthResult, Observation, Report, SeasonalitySummary};
    pub use crate::storage::{JsonReportWriter, MarkdownReportWriter, ReportExporter};
}

// Direct re-exports for convenience
pub use models::{Direction, GrowthResult, Observation, Report, SeasonalitySummary};
