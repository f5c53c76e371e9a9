//! Dataset-wide descriptive statistics

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::dataset::{Dataset, TrendSeries};
use crate::models::{Direction, TrendSummary};

use super::error::{AnalysisError, AnalysisResult};

/// Mean popularity reported by one source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAverage {
    pub source: String,
    pub mean_popularity: f64,
    pub observations: usize,
}

/// Summary statistics over every observation in a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    /// Number of observations
    pub total_observations: usize,

    /// Trend of the single most popular observation (first on ties)
    pub most_popular_trend: String,

    /// Popularity of that observation
    pub max_popularity: f64,

    /// Arithmetic mean of all popularity values
    pub mean_popularity: f64,

    /// Population standard deviation of all popularity values
    pub std_dev: f64,

    /// Per-source means in first-appearance order
    pub per_source: Vec<SourceAverage>,
}

impl DatasetStats {
    /// Compute statistics for a non-empty dataset
    ///
    /// # Errors
    /// `AnalysisError::Validation` if the dataset is empty.
    pub fn compute(dataset: &Dataset) -> AnalysisResult<Self> {
        let mut iter = dataset.iter();
        let first = iter
            .next()
            .ok_or_else(|| AnalysisError::validation("cannot compute statistics of an empty dataset"))?;

        // Strict comparison keeps the first occurrence on ties
        let peak = iter.fold(first, |best, obs| {
            if obs.popularity > best.popularity {
                obs
            } else {
                best
            }
        });

        let values = dataset.popularities();
        let per_source = dataset
            .by_source()
            .into_iter()
            .map(|(source, values)| SourceAverage {
                source: source.to_string(),
                mean_popularity: values.iter().mean(),
                observations: values.len(),
            })
            .collect();

        Ok(Self {
            total_observations: dataset.len(),
            most_popular_trend: peak.trend_name.clone(),
            max_popularity: peak.popularity,
            mean_popularity: values.iter().mean(),
            std_dev: values.iter().population_std_dev(),
            per_source,
        })
    }

    /// Source with the highest mean popularity (first on ties)
    #[must_use]
    pub fn top_source(&self) -> Option<&SourceAverage> {
        let mut iter = self.per_source.iter();
        let first = iter.next()?;
        Some(iter.fold(first, |best, avg| {
            if avg.mean_popularity > best.mean_popularity {
                avg
            } else {
                best
            }
        }))
    }
}

/// Mean, extremes and direction for every trend, in first-appearance order
#[must_use]
pub fn summarize_trends(dataset: &Dataset) -> Vec<TrendSummary> {
    dataset.by_trend().iter().map(trend_summary).collect()
}

fn trend_summary(series: &TrendSeries<'_>) -> TrendSummary {
    let values: Vec<f64> = series.observations.iter().map(|obs| obs.popularity).collect();

    TrendSummary {
        trend_name: series.trend_name.to_string(),
        observations: values.len(),
        mean_popularity: Statistics::mean(&values),
        max_popularity: Statistics::max(&values),
        min_popularity: Statistics::min(&values),
        direction: series
            .window()
            .map(|(first, last)| Direction::from_change(last.popularity - first.popularity)),
    }
}
