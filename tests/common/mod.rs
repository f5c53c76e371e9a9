//! Common test utilities

use chrono::NaiveDate;
use clario::dataset::Dataset;
use clario::models::Observation;

/// Create an observation with a fixed category
pub fn observation(date: (i32, u32, u32), trend: &str, popularity: f64, source: &str) -> Observation {
    Observation::new(
        NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        trend,
        popularity,
        "Clothing",
        source,
    )
}

/// Five fashion trends, one observation each
#[allow(dead_code)]
pub fn fashion_dataset() -> Dataset {
    Dataset::new(vec![
        observation((2024, 1, 1), "Streetwear", 85.0, "Instagram"),
        observation((2024, 1, 2), "Vintage", 72.0, "Twitter"),
        observation((2024, 1, 3), "Minimalista", 91.0, "Google Trends"),
        observation((2024, 1, 4), "Colorido", 68.0, "Instagram"),
        observation((2024, 1, 5), "Deportivo", 79.0, "Twitter"),
    ])
    .unwrap()
}

/// Three trends across January to March with mixed growth
#[allow(dead_code)]
pub fn quarterly_dataset() -> Dataset {
    Dataset::new(vec![
        observation((2024, 1, 5), "Streetwear", 60.0, "Instagram"),
        observation((2024, 1, 6), "Vintage", 80.0, "Twitter"),
        observation((2024, 1, 7), "Minimalista", 50.0, "Google Trends"),
        observation((2024, 2, 5), "Streetwear", 70.0, "Instagram"),
        observation((2024, 2, 6), "Vintage", 75.0, "Twitter"),
        observation((2024, 3, 5), "Streetwear", 78.0, "Instagram"),
        observation((2024, 3, 6), "Vintage", 64.0, "Twitter"),
        observation((2024, 3, 7), "Minimalista", 52.0, "Google Trends"),
    ])
    .unwrap()
}
