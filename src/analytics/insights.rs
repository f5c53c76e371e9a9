//! Qualitative insight statements derived from the other analyses
//!
//! Statements are produced in a fixed order:
//! 1. The single most popular observation
//! 2. The first emergent trend at the default threshold (omitted when none)
//! 3. The source with the highest mean popularity
//! 4. Variability class from the population standard deviation
//! 5. Peak and low month (omitted when both are the same month)

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::models::{month_name, Insight, InsightKind};

use super::emergence::{emergent_trends, DEFAULT_EMERGENCE_THRESHOLD};
use super::error::{AnalysisError, AnalysisResult};
use super::growth::calculate_growth;
use super::seasonality::analyze_seasonality;
use super::stats::DatasetStats;

/// Popularity variability category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variability {
    /// std dev < 10
    VeryStable,

    /// 10 <= std dev < 20
    ModeratelyVariable,

    /// std dev >= 20
    HighlyVariable,
}

impl Variability {
    /// Classify a standard deviation; boundary values belong to the lower class
    #[must_use]
    pub fn from_std_dev(std_dev: f64) -> Self {
        if std_dev < 10.0 {
            Self::VeryStable
        } else if std_dev < 20.0 {
            Self::ModeratelyVariable
        } else {
            Self::HighlyVariable
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryStable => "very stable",
            Self::ModeratelyVariable => "moderately variable",
            Self::HighlyVariable => "highly variable",
        }
    }
}

impl std::fmt::Display for Variability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Generate insight statements for a dataset
///
/// Pure function of the dataset and [`DEFAULT_EMERGENCE_THRESHOLD`].
///
/// # Errors
/// `AnalysisError::Validation` for an empty dataset; any error from the
/// growth calculation (such as a zero baseline) is propagated unchanged.
pub fn generate_insights(dataset: &Dataset) -> AnalysisResult<Vec<Insight>> {
    let stats = DatasetStats::compute(dataset)?;
    let mut insights = Vec::with_capacity(5);

    insights.push(Insight::new(
        InsightKind::MostPopular,
        format!(
            "The most popular trend is '{}' with a popularity of {}",
            stats.most_popular_trend, stats.max_popularity
        ),
    ));

    let growth = calculate_growth(dataset)?;
    let emergent = emergent_trends(&growth, DEFAULT_EMERGENCE_THRESHOLD)?;
    // Growth entries keep first-appearance order
    if let Some(trend) = emergent.keys().next() {
        insights.push(Insight::new(
            InsightKind::Emergent,
            format!("'{trend}' is an emergent trend that is growing rapidly"),
        ));
    }

    let top_source = stats
        .top_source()
        .ok_or_else(|| AnalysisError::validation("dataset has no sources"))?;
    insights.push(Insight::new(
        InsightKind::TopSource,
        format!("'{}' is the most reliable data source", top_source.source),
    ));

    let variability = Variability::from_std_dev(stats.std_dev);
    insights.push(Insight::new(
        InsightKind::Variability,
        format!("Trend popularity is {variability}"),
    ));

    let seasonality = analyze_seasonality(dataset)?;
    if seasonality.highest_period != seasonality.lowest_period {
        insights.push(Insight::new(
            InsightKind::Seasonal,
            format!(
                "Popularity peaks in {} and is lowest in {}",
                month_name(seasonality.highest_period).unwrap_or("an unknown month"),
                month_name(seasonality.lowest_period).unwrap_or("an unknown month"),
            ),
        ));
    }

    tracing::debug!(count = insights.len(), "Generated insights");
    Ok(insights)
}
