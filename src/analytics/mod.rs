//! Trend analysis engine
//!
//! Pure, synchronous computations over an immutable [`Dataset`]:
//! - [`growth`] - first-vs-last growth per trend
//! - [`emergence`] - threshold filter over growth results
//! - [`seasonality`] - mean popularity per calendar month
//! - [`insights`] - ordered qualitative statements
//! - [`report`] - assembly of all results into a [`Report`]

pub mod emergence;
pub mod error;
pub mod growth;
pub mod insights;
pub mod report;
pub mod seasonality;
pub mod stats;

pub use emergence::{emergent_trends, DEFAULT_EMERGENCE_THRESHOLD};
pub use error::{AnalysisError, AnalysisResult};
pub use growth::calculate_growth;
pub use insights::{generate_insights, Variability};
pub use report::build_report;
pub use seasonality::analyze_seasonality;
pub use stats::{summarize_trends, DatasetStats, SourceAverage};

use crate::dataset::Dataset;
use crate::models::{GrowthMap, Insight, Report, SeasonalitySummary, TrendSummary};

/// Entry point bundling the analyses with a caller-chosen emergence threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendAnalyzer {
    emergence_threshold: f64,
}

impl TrendAnalyzer {
    /// Create a new analyzer
    ///
    /// # Arguments
    /// * `emergence_threshold` - Percentage growth threshold (default: 10.0)
    ///
    /// # Errors
    /// `AnalysisError::Validation` if the threshold is not finite.
    pub fn new(emergence_threshold: Option<f64>) -> AnalysisResult<Self> {
        let emergence_threshold = emergence_threshold.unwrap_or(DEFAULT_EMERGENCE_THRESHOLD);
        if !emergence_threshold.is_finite() {
            return Err(AnalysisError::validation(format!(
                "emergence threshold must be a finite number, got {emergence_threshold}"
            )));
        }

        Ok(Self {
            emergence_threshold,
        })
    }

    /// Threshold used by [`TrendAnalyzer::emergent`]
    #[must_use]
    pub fn emergence_threshold(&self) -> f64 {
        self.emergence_threshold
    }

    pub fn growth(&self, dataset: &Dataset) -> AnalysisResult<GrowthMap> {
        calculate_growth(dataset)
    }

    /// Growth followed by the emergence filter at this analyzer's threshold
    pub fn emergent(&self, dataset: &Dataset) -> AnalysisResult<GrowthMap> {
        let growth = calculate_growth(dataset)?;
        emergent_trends(&growth, self.emergence_threshold)
    }

    pub fn seasonality(&self, dataset: &Dataset) -> AnalysisResult<SeasonalitySummary> {
        analyze_seasonality(dataset)
    }

    /// Insights always use [`DEFAULT_EMERGENCE_THRESHOLD`]
    pub fn insights(&self, dataset: &Dataset) -> AnalysisResult<Vec<Insight>> {
        generate_insights(dataset)
    }

    pub fn stats(&self, dataset: &Dataset) -> AnalysisResult<DatasetStats> {
        DatasetStats::compute(dataset)
    }

    /// Per-trend mean, extremes and direction
    #[must_use]
    pub fn trend_summaries(&self, dataset: &Dataset) -> Vec<TrendSummary> {
        summarize_trends(dataset)
    }

    pub fn report(&self, dataset: &Dataset) -> AnalysisResult<Report> {
        build_report(dataset)
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self {
            emergence_threshold: DEFAULT_EMERGENCE_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_threshold() {
        assert_eq!(
            TrendAnalyzer::default().emergence_threshold(),
            DEFAULT_EMERGENCE_THRESHOLD
        );
        assert_eq!(TrendAnalyzer::new(Some(-5.0)).unwrap().emergence_threshold(), -5.0);
        assert!(TrendAnalyzer::new(Some(f64::NAN)).is_err());
    }
}
