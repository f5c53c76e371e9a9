//! Data sources that deliver raw observation records
//!
//! Sources hand back [`RawObservation`]s; turning them into a validated
//! [`Dataset`](crate::dataset::Dataset) is the job of
//! [`dataset::clean`](crate::dataset::clean).

use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::RawObservation;

/// A supplier of raw observation records
pub trait DataSource {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Fetch every available record
    fn fetch(&self) -> Result<Vec<RawObservation>>;
}

/// Platforms the simulated source claims to collect from
const AVAILABLE_SOURCES: &[&str] = &["Google Trends", "Twitter", "Instagram", "News"];

/// Longest generated series, roughly one century of daily readings
pub const MAX_GENERATED_DAYS: usize = 36_600;

/// Built-in data for demos and tests
#[derive(Debug, Clone)]
pub enum SimulatedSource {
    /// Five fashion trends, one observation each
    FashionSample,

    /// Deterministic daily series for three trends
    Generated { days: usize, seed: u64 },
}

impl SimulatedSource {
    pub fn fashion_sample() -> Self {
        Self::FashionSample
    }

    /// Daily series split into consecutive blocks for Streetwear, Vintage and Minimalista
    ///
    /// # Arguments
    /// * `days` - Total number of observations
    /// * `seed` - RNG seed; the same seed always yields the same data
    pub fn generated(days: usize, seed: u64) -> Self {
        Self::Generated { days, seed }
    }

    /// Platforms available for simulated collection
    pub fn available_sources() -> &'static [&'static str] {
        AVAILABLE_SOURCES
    }

    fn fashion_records() -> Vec<RawObservation> {
        [
            ("2024-01-01", "Streetwear", 85.0, "Instagram"),
            ("2024-01-02", "Vintage", 72.0, "Twitter"),
            ("2024-01-03", "Minimalista", 91.0, "Google Trends"),
            ("2024-01-04", "Colorido", 68.0, "Instagram"),
            ("2024-01-05", "Deportivo", 79.0, "Twitter"),
        ]
        .into_iter()
        .map(|(date, trend, popularity, source)| {
            RawObservation::complete(date, trend, popularity, "Clothing", source)
        })
        .collect()
    }

    fn generated_records(days: usize, seed: u64) -> Result<Vec<RawObservation>> {
        const TRENDS: [&str; 3] = ["Streetwear", "Vintage", "Minimalista"];
        const SOURCES: [&str; 2] = ["Instagram", "Twitter"];

        if days > MAX_GENERATED_DAYS {
            return Err(Error::other(format!(
                "cannot generate {days} days of data, the maximum is {MAX_GENERATED_DAYS}"
            )));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
        let block = days.div_ceil(TRENDS.len()).max(1);

        (0..days)
            .map(|day| -> Result<RawObservation> {
                let date = start
                    .checked_add_days(Days::new(day as u64))
                    .ok_or_else(|| Error::other(format!("day {day} is outside the calendar")))?;
                let trend = TRENDS[(day / block).min(TRENDS.len() - 1)];
                let source = SOURCES[day % SOURCES.len()];
                let popularity = f64::from(rng.gen_range(60_u32..95));

                Ok(RawObservation::complete(
                    date.format("%Y-%m-%d").to_string(),
                    trend,
                    popularity,
                    "Clothing",
                    source,
                ))
            })
            .collect()
    }
}

impl DataSource for SimulatedSource {
    fn name(&self) -> &str {
        match self {
            Self::FashionSample => "fashion-sample",
            Self::Generated { .. } => "generated",
        }
    }

    fn fetch(&self) -> Result<Vec<RawObservation>> {
        let records = match self {
            Self::FashionSample => Self::fashion_records(),
            Self::Generated { days, seed } => Self::generated_records(*days, *seed)?,
        };

        tracing::info!(
            source = self.name(),
            records = records.len(),
            "Simulated collection completed"
        );
        Ok(records)
    }
}

/// Reads a JSON array of raw records from disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn fetch(&self) -> Result<Vec<RawObservation>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::with_source(format!("Failed to read input file: {}", self.path.display()), e)
        })?;

        let records: Vec<RawObservation> = serde_json::from_str(&content)?;

        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            "Loaded raw observations"
        );
        Ok(records)
    }
}
