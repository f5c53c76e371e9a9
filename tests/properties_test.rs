//! Property tests for growth and emergence

mod common;

use clario::analytics::{calculate_growth, emergent_trends};
use clario::dataset::Dataset;
use clario::models::Direction;
use proptest::prelude::*;

use common::observation;

fn two_point_dataset(first: f64, last: f64) -> Dataset {
    Dataset::new(vec![
        observation((2024, 1, 1), "Trend", first, "Source"),
        observation((2024, 2, 1), "Trend", last, "Source"),
    ])
    .unwrap()
}

fn trend_dataset(values: &[(f64, f64)]) -> Dataset {
    let mut observations = Vec::new();
    for (idx, (first, _)) in values.iter().enumerate() {
        observations.push(observation((2024, 1, 1), &format!("T{idx}"), *first, "S"));
    }
    for (idx, (_, last)) in values.iter().enumerate() {
        observations.push(observation((2024, 6, 1), &format!("T{idx}"), *last, "S"));
    }
    Dataset::new(observations).unwrap()
}

proptest! {
    #[test]
    fn percent_change_recovers_absolute_change(first in 1.0f64..1000.0, last in 0.0f64..1000.0) {
        let growth = calculate_growth(&two_point_dataset(first, last)).unwrap();
        let result = growth["Trend"];

        prop_assert!((result.absolute_change - (last - first)).abs() < 1e-9);
        let recovered = result.percent_change * first / 100.0;
        prop_assert!((recovered - result.absolute_change).abs() < 1e-6);
    }

    #[test]
    fn direction_follows_sign(first in 1.0f64..1000.0, last in 0.0f64..1000.0) {
        let growth = calculate_growth(&two_point_dataset(first, last)).unwrap();
        let result = growth["Trend"];

        let expected = if last > first {
            Direction::Increasing
        } else if last < first {
            Direction::Decreasing
        } else {
            Direction::Stable
        };
        prop_assert_eq!(result.direction, expected);
    }

    #[test]
    fn emergent_is_strict_subset_above_threshold(
        values in prop::collection::vec((1.0f64..100.0, 0.0f64..200.0), 1..8),
        threshold in -100.0f64..200.0,
    ) {
        let growth = calculate_growth(&trend_dataset(&values)).unwrap();
        let emergent = emergent_trends(&growth, threshold).unwrap();

        for (trend, result) in &emergent {
            prop_assert!(result.percent_change > threshold);
            prop_assert_eq!(growth.get(trend), Some(result));
        }
        for (trend, result) in &growth {
            if result.percent_change > threshold {
                prop_assert!(emergent.contains_key(trend));
            }
        }
    }
}
