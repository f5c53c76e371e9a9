//! Immutable, time-ordered view over observations
//!
//! A [`Dataset`] can only be built through a validating constructor, so every
//! analysis can rely on:
//! - required text fields being non-blank
//! - popularity values being finite
//! - observations being sorted by timestamp (non-decreasing)
//!
//! Grouping helpers are pure queries that preserve first-appearance order.

pub mod cleaning;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::analytics::{AnalysisError, AnalysisResult};
use crate::models::Observation;

pub use cleaning::{clean, CleaningStats, DEFAULT_DATE_FORMATS};

/// Observations of a single trend, in time order
#[derive(Debug, Clone)]
pub struct TrendSeries<'a> {
    pub trend_name: &'a str,
    pub observations: Vec<&'a Observation>,
}

impl<'a> TrendSeries<'a> {
    /// First and last observation of the window, if there are at least two
    #[must_use]
    pub fn window(&self) -> Option<(&'a Observation, &'a Observation)> {
        match self.observations.as_slice() {
            [first, .., last] => Some((first, last)),
            _ => None,
        }
    }
}

/// Ordered-by-timestamp collection of observations
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    /// Build a dataset from observations already sorted by timestamp
    ///
    /// # Errors
    /// `AnalysisError::Validation` if a required field is blank, a popularity
    /// value is not finite, or the observations are out of time order.
    pub fn new(observations: Vec<Observation>) -> AnalysisResult<Self> {
        for (idx, obs) in observations.iter().enumerate() {
            validate_observation(idx, obs)?;
        }

        if let Some(idx) = observations
            .windows(2)
            .position(|pair| pair[1].timestamp < pair[0].timestamp)
        {
            return Err(AnalysisError::validation(format!(
                "observations are not sorted by timestamp: row {} ({}) precedes row {} ({})",
                idx,
                observations[idx].timestamp,
                idx + 1,
                observations[idx + 1].timestamp
            )));
        }

        Ok(Self { observations })
    }

    /// Build a dataset, stable-sorting the observations by timestamp first
    ///
    /// Rows sharing a date keep their relative order.
    pub fn from_unsorted(mut observations: Vec<Observation>) -> AnalysisResult<Self> {
        observations.sort_by_key(|obs| obs.timestamp);
        Self::new(observations)
    }

    /// Number of observations
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if there are no observations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// All observations in time order
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// All popularity values in dataset order
    #[must_use]
    pub fn popularities(&self) -> Vec<f64> {
        self.observations.iter().map(|obs| obs.popularity).collect()
    }

    /// Distinct trend names in first-appearance order
    #[must_use]
    pub fn trend_names(&self) -> Vec<&str> {
        group_in_order(self.observations.iter().map(|obs| (obs.trend_name.as_str(), ())))
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    /// Distinct sources in first-appearance order
    #[must_use]
    pub fn sources(&self) -> Vec<&str> {
        group_in_order(self.observations.iter().map(|obs| (obs.source.as_str(), ())))
            .into_iter()
            .map(|(source, _)| source)
            .collect()
    }

    /// Observations grouped by trend, trends in first-appearance order
    #[must_use]
    pub fn by_trend(&self) -> Vec<TrendSeries<'_>> {
        group_in_order(
            self.observations
                .iter()
                .map(|obs| (obs.trend_name.as_str(), obs)),
        )
        .into_iter()
        .map(|(trend_name, observations)| TrendSeries {
            trend_name,
            observations,
        })
        .collect()
    }

    /// Popularity values grouped by calendar month (1-12)
    #[must_use]
    pub fn by_month(&self) -> BTreeMap<u32, Vec<f64>> {
        let mut months: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
        for obs in &self.observations {
            months
                .entry(obs.timestamp.month())
                .or_default()
                .push(obs.popularity);
        }
        months
    }

    /// Popularity values grouped by source, sources in first-appearance order
    #[must_use]
    pub fn by_source(&self) -> Vec<(&str, Vec<f64>)> {
        group_in_order(
            self.observations
                .iter()
                .map(|obs| (obs.source.as_str(), obs.popularity)),
        )
    }

    /// First and last observation date
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.observations.first()?;
        let last = self.observations.last()?;
        Some((first.timestamp, last.timestamp))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

fn validate_observation(idx: usize, obs: &Observation) -> AnalysisResult<()> {
    let fields = [
        ("trend_name", obs.trend_name.as_str()),
        ("category", obs.category.as_str()),
        ("source", obs.source.as_str()),
    ];

    if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(AnalysisError::validation(format!(
            "row {idx} is missing required field '{field}'"
        )));
    }

    if !obs.popularity.is_finite() {
        return Err(AnalysisError::validation(format!(
            "row {idx} has a non-finite popularity value for trend '{}'",
            obs.trend_name
        )));
    }

    Ok(())
}

/// Group values by key, keeping keys in first-appearance order
fn group_in_order<'a, V>(items: impl Iterator<Item = (&'a str, V)>) -> Vec<(&'a str, Vec<V>)> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, Vec<V>)> = Vec::new();

    for (key, value) in items {
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(value);
    }

    groups
}
