//! Monthly seasonality of aggregate popularity

use statrs::statistics::Statistics;
use std::collections::BTreeMap;

use crate::dataset::Dataset;
use crate::models::{month_name, SeasonalitySummary};

use super::error::{AnalysisError, AnalysisResult};

/// Mean popularity per calendar month with the highest and lowest months
///
/// Ties on either extreme resolve to the smallest month number.
///
/// # Errors
/// `AnalysisError::Validation` if the dataset is empty.
pub fn analyze_seasonality(dataset: &Dataset) -> AnalysisResult<SeasonalitySummary> {
    if dataset.is_empty() {
        return Err(AnalysisError::validation(
            "cannot analyze seasonality of an empty dataset",
        ));
    }

    let per_month: BTreeMap<u32, f64> = dataset
        .by_month()
        .into_iter()
        .map(|(month, values)| (month, values.iter().mean()))
        .collect();

    let (highest_period, lowest_period) = extremes(&per_month)
        .ok_or_else(|| AnalysisError::validation("no months to aggregate"))?;

    tracing::debug!(
        months = per_month.len(),
        highest = month_name(highest_period).unwrap_or("?"),
        lowest = month_name(lowest_period).unwrap_or("?"),
        "Analyzed seasonality"
    );

    Ok(SeasonalitySummary {
        per_month,
        highest_period,
        lowest_period,
    })
}

/// Months with the maximum and minimum mean, scanning in ascending order
///
/// Only a strictly better value replaces the current pick, which keeps the
/// smallest month on ties.
fn extremes(per_month: &BTreeMap<u32, f64>) -> Option<(u32, u32)> {
    let mut iter = per_month.iter();
    let (&first_month, &first_mean) = iter.next()?;

    let mut highest = (first_month, first_mean);
    let mut lowest = (first_month, first_mean);

    for (&month, &mean) in iter {
        if mean > highest.1 {
            highest = (month, mean);
        }
        if mean < lowest.1 {
            lowest = (month, mean);
        }
    }

    Some((highest.0, lowest.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Observation;
    use chrono::NaiveDate;

    fn obs(month: u32, day: u32, popularity: f64) -> Observation {
        Observation::new(
            NaiveDate::from_ymd_opt(2024, month, day).unwrap(),
            "Streetwear",
            popularity,
            "Clothing",
            "Instagram",
        )
    }

    #[test]
    fn test_monthly_means_and_extremes() {
        let dataset = Dataset::new(vec![
            obs(1, 1, 60.0),
            obs(1, 2, 80.0),
            obs(2, 1, 90.0),
            obs(3, 1, 40.0),
        ])
        .unwrap();

        let summary = analyze_seasonality(&dataset).unwrap();
        assert_eq!(summary.per_month[&1], 70.0);
        assert_eq!(summary.per_month[&2], 90.0);
        assert_eq!(summary.highest_period, 2);
        assert_eq!(summary.lowest_period, 3);
        assert_eq!(summary.highest_mean(), Some(90.0));
    }

    #[test]
    fn test_empty_dataset_is_validation_error() {
        let err = analyze_seasonality(&Dataset::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }

    #[test]
    fn test_single_month_highest_equals_lowest() {
        let dataset = Dataset::new(vec![obs(5, 1, 10.0), obs(5, 20, 90.0)]).unwrap();

        let summary = analyze_seasonality(&dataset).unwrap();
        assert_eq!(summary.highest_period, 5);
        assert_eq!(summary.lowest_period, 5);
    }

    #[test]
    fn test_ties_resolve_to_smallest_month() {
        let dataset = Dataset::new(vec![
            obs(2, 1, 50.0),
            obs(4, 1, 80.0),
            obs(6, 1, 50.0),
            obs(9, 1, 80.0),
        ])
        .unwrap();

        let summary = analyze_seasonality(&dataset).unwrap();
        assert_eq!(summary.highest_period, 4);
        assert_eq!(summary.lowest_period, 2);
    }
}
