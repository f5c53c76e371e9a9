//! Per-trend growth across the observation window
//!
//! Growth compares the first and last observation of each trend in the
//! dataset's time order. Trends with a single observation have no window and
//! are left out of the result.

use crate::dataset::{Dataset, TrendSeries};
use crate::models::{Direction, GrowthMap, GrowthResult, Observation};

use super::error::{AnalysisError, AnalysisResult};

impl GrowthResult {
    /// Compute growth between two observations of the same trend
    ///
    /// # Errors
    /// `AnalysisError::Division` when the first popularity value is zero.
    pub fn between(trend: &str, first: &Observation, last: &Observation) -> AnalysisResult<Self> {
        if first.popularity == 0.0 {
            return Err(AnalysisError::division(trend));
        }

        let absolute_change = last.popularity - first.popularity;
        let percent_change = absolute_change / first.popularity * 100.0;

        Ok(Self {
            absolute_change,
            percent_change,
            direction: Direction::from_change(absolute_change),
        })
    }
}

/// Compute growth for every trend with at least two observations
///
/// The dataset's time order is trusted; [`Dataset`] guarantees it at
/// construction.
pub fn calculate_growth(dataset: &Dataset) -> AnalysisResult<GrowthMap> {
    let mut results = GrowthMap::new();

    for series in dataset.by_trend() {
        let Some(result) = series_growth(&series)? else {
            tracing::debug!(
                trend = series.trend_name,
                "Skipping trend with a single observation"
            );
            continue;
        };

        tracing::debug!(
            trend = series.trend_name,
            absolute_change = result.absolute_change,
            percent_change = result.percent_change,
            direction = %result.direction,
            "Computed trend growth"
        );
        results.insert(series.trend_name.to_string(), result);
    }

    Ok(results)
}

fn series_growth(series: &TrendSeries<'_>) -> AnalysisResult<Option<GrowthResult>> {
    series
        .window()
        .map(|(first, last)| GrowthResult::between(series.trend_name, first, last))
        .transpose()
}
