//! Cleaning of raw source records into a validated [`Dataset`]
//!
//! Rows with a missing or blank field, a non-finite popularity value or an
//! unparseable date are dropped. Surviving rows are stable-sorted by date.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use super::Dataset;
use crate::analytics::AnalysisResult;
use crate::models::{Observation, RawObservation};

/// Date formats tried, in order, before any configured extras
pub const DEFAULT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];

/// Row counts before and after cleaning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleaningStats {
    pub rows_before: usize,
    pub rows_after: usize,
    pub rows_dropped: usize,
}

/// Clean raw records into a time-ordered dataset
///
/// # Arguments
/// * `records` - Raw records from a data source
/// * `extra_formats` - Additional `chrono` date formats to accept
pub fn clean(
    records: &[RawObservation],
    extra_formats: &[String],
) -> AnalysisResult<(Dataset, CleaningStats)> {
    let rows_before = records.len();

    let observations: Vec<Observation> = records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            let observation = to_observation(record, extra_formats);
            if observation.is_none() {
                tracing::warn!(row = idx, record = ?record, "Dropping incomplete row");
            }
            observation
        })
        .collect();

    let rows_after = observations.len();
    let stats = CleaningStats {
        rows_before,
        rows_after,
        rows_dropped: rows_before - rows_after,
    };

    tracing::info!(
        rows_before = stats.rows_before,
        rows_after = stats.rows_after,
        rows_dropped = stats.rows_dropped,
        "Cleaning completed"
    );

    let dataset = Dataset::from_unsorted(observations)?;
    Ok((dataset, stats))
}

/// Parse a date string using the default formats, RFC 3339, then `extra_formats`
#[must_use]
pub fn parse_date(value: &str, extra_formats: &[String]) -> Option<NaiveDate> {
    let value = value.trim();

    DEFAULT_DATE_FORMATS
        .iter()
        .copied()
        .chain(extra_formats.iter().map(String::as_str))
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

fn to_observation(record: &RawObservation, extra_formats: &[String]) -> Option<Observation> {
    let timestamp = parse_date(record.timestamp.as_deref()?, extra_formats)?;
    let trend_name = non_blank(record.trend_name.as_deref())?;
    let category = non_blank(record.category.as_deref())?;
    let source = non_blank(record.source.as_deref())?;
    let popularity = record.popularity.filter(|p| p.is_finite())?;

    Some(Observation::new(
        timestamp,
        trend_name,
        popularity,
        category,
        source,
    ))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
