// Core data structures for the clario trend analysis engine

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One timestamped popularity reading for a trend from a given source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: NaiveDate,
    pub trend_name: String,
    pub popularity: f64, // Expected 0-100, not enforced
    pub category: String,
    pub source: String,
}

impl Observation {
    pub fn new(
        timestamp: NaiveDate,
        trend_name: impl Into<String>,
        popularity: f64,
        category: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            trend_name: trend_name.into(),
            popularity,
            category: category.into(),
            source: source.into(),
        }
    }
}

/// Uncleaned record as delivered by a data source
///
/// Every field may be missing; the timestamp is still text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub trend_name: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl RawObservation {
    /// Create a fully populated raw record
    pub fn complete(
        timestamp: impl Into<String>,
        trend_name: impl Into<String>,
        popularity: f64,
        category: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            trend_name: Some(trend_name.into()),
            popularity: Some(popularity),
            category: Some(category.into()),
            source: Some(source.into()),
        }
    }
}

/// Direction of change between the first and last observation of a trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increasing,
    Decreasing,
    Stable,
}

impl Direction {
    /// Classify an absolute change; exactly zero is `Stable`
    #[must_use]
    pub fn from_change(absolute_change: f64) -> Self {
        if absolute_change > 0.0 {
            Self::Increasing
        } else if absolute_change < 0.0 {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Growth of a single trend across the observation window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    /// Last minus first popularity value
    pub absolute_change: f64,

    /// `absolute_change / first * 100`
    pub percent_change: f64,

    pub direction: Direction,
}

/// Growth results keyed by trend name
///
/// Entries keep the order in which each trend first appears in the dataset.
pub type GrowthMap = IndexMap<String, GrowthResult>;

/// Mean popularity per calendar month plus the identified extremes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalitySummary {
    /// Month number (1-12) to mean popularity
    pub per_month: BTreeMap<u32, f64>,

    /// Month with the highest mean
    pub highest_period: u32,

    /// Month with the lowest mean
    pub lowest_period: u32,
}

impl SeasonalitySummary {
    /// Mean popularity of the highest month
    #[must_use]
    pub fn highest_mean(&self) -> Option<f64> {
        self.per_month.get(&self.highest_period).copied()
    }

    /// Mean popularity of the lowest month
    #[must_use]
    pub fn lowest_mean(&self) -> Option<f64> {
        self.per_month.get(&self.lowest_period).copied()
    }
}

/// What a derived insight statement is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    MostPopular,
    Emergent,
    TopSource,
    Variability,
    Seasonal,
}

/// A single derived textual statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
}

impl Insight {
    pub fn new(kind: InsightKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Insight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Descriptive statistics of one trend's popularity values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub trend_name: String,
    pub observations: usize,
    pub mean_popularity: f64,
    pub max_popularity: f64,
    pub min_popularity: f64,

    /// Sign of last minus first value; `None` with a single observation
    pub direction: Option<Direction>,
}

/// Dataset-wide counts included in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of distinct trend names
    pub total_trends: usize,

    /// First and last observation date
    pub date_range: (NaiveDate, NaiveDate),

    /// Distinct sources in first-appearance order
    pub sources: Vec<String>,
}

/// Immutable snapshot of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Wall-clock time at assembly; the only non-deterministic field
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub growth: GrowthMap,
    pub seasonality: SeasonalitySummary,
    pub insights: Vec<String>,

    /// Per-trend statistics in first-appearance order
    #[serde(default)]
    pub trends: Vec<TrendSummary>,
}

impl Report {
    /// Compare every field except `generated_at`
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.summary == other.summary
            && self.growth.iter().eq(other.growth.iter())
            && self.seasonality == other.seasonality
            && self.insights == other.insights
            && self.trends == other.trends
    }
}

/// English name of a calendar month (1-12)
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    month
        .checked_sub(1)
        .and_then(|idx| NAMES.get(idx as usize))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_change() {
        assert_eq!(Direction::from_change(3.5), Direction::Increasing);
        assert_eq!(Direction::from_change(-0.1), Direction::Decreasing);
        assert_eq!(Direction::from_change(0.0), Direction::Stable);
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&Direction::Increasing).unwrap();
        assert_eq!(json, "\"increasing\"");
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
