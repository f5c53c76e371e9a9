//! Tests for the analysis engine

mod common;

use clario::analytics::{
    analyze_seasonality, calculate_growth, emergent_trends, generate_insights, AnalysisError,
    TrendAnalyzer, DEFAULT_EMERGENCE_THRESHOLD,
};
use clario::collect::{DataSource, SimulatedSource};
use clario::dataset::{clean, Dataset};
use clario::models::{Direction, InsightKind};

use common::observation;

#[test]
fn test_quarterly_growth() {
    let growth = calculate_growth(&common::quarterly_dataset()).unwrap();

    assert_eq!(
        growth.keys().collect::<Vec<_>>(),
        vec!["Streetwear", "Vintage", "Minimalista"]
    );
    assert_eq!(growth["Streetwear"].absolute_change, 18.0);
    assert!((growth["Streetwear"].percent_change - 30.0).abs() < 1e-9);
    assert_eq!(growth["Vintage"].direction, Direction::Decreasing);
    assert!((growth["Vintage"].percent_change + 20.0).abs() < 1e-9);
    assert!((growth["Minimalista"].percent_change - 4.0).abs() < 1e-9);
}

#[test]
fn test_growth_is_deterministic() {
    let dataset = common::quarterly_dataset();
    assert_eq!(
        calculate_growth(&dataset).unwrap(),
        calculate_growth(&dataset).unwrap()
    );
}

#[test]
fn test_zero_first_value_raises_division_error() {
    for later in [1.0, 55.5, -3.0] {
        let dataset = Dataset::new(vec![
            observation((2024, 1, 1), "Colorido", 0.0, "Instagram"),
            observation((2024, 1, 2), "Colorido", later, "Instagram"),
        ])
        .unwrap();

        match calculate_growth(&dataset) {
            Err(AnalysisError::Division { trend }) => assert_eq!(trend, "Colorido"),
            other => panic!("expected division error, got {other:?}"),
        }
    }
}

#[test]
fn test_emergence_on_quarterly_data() {
    let growth = calculate_growth(&common::quarterly_dataset()).unwrap();

    let emergent = emergent_trends(&growth, DEFAULT_EMERGENCE_THRESHOLD).unwrap();
    assert_eq!(emergent.keys().collect::<Vec<_>>(), vec!["Streetwear"]);

    let all_but_vintage = emergent_trends(&growth, -15.0).unwrap();
    assert_eq!(all_but_vintage.len(), 2);
    assert!(!all_but_vintage.contains_key("Vintage"));
}

#[test]
fn test_analyzer_uses_custom_threshold() {
    let dataset = common::quarterly_dataset();
    let analyzer = TrendAnalyzer::new(Some(2.0)).unwrap();

    let emergent = analyzer.emergent(&dataset).unwrap();
    assert!(emergent.contains_key("Streetwear"));
    assert!(emergent.contains_key("Minimalista"));
}

#[test]
fn test_quarterly_seasonality() {
    let summary = analyze_seasonality(&common::quarterly_dataset()).unwrap();

    assert_eq!(summary.per_month.len(), 3);
    assert!((summary.per_month[&2] - 72.5).abs() < 1e-9);
    assert_eq!(summary.highest_period, 2);
    assert_eq!(summary.lowest_period, 1);
}

#[test]
fn test_seasonality_two_tied_months() {
    let dataset = Dataset::new(vec![
        observation((2024, 3, 1), "A", 40.0, "X"),
        observation((2024, 7, 1), "A", 40.0, "X"),
    ])
    .unwrap();

    let summary = analyze_seasonality(&dataset).unwrap();
    assert_eq!(summary.highest_period, 3);
    assert_eq!(summary.lowest_period, 3);
}

#[test]
fn test_seasonality_empty_dataset() {
    assert!(matches!(
        analyze_seasonality(&Dataset::default()),
        Err(AnalysisError::Validation(_))
    ));
}

#[test]
fn test_quarterly_insights() {
    let insights = generate_insights(&common::quarterly_dataset()).unwrap();
    let messages: Vec<&str> = insights.iter().map(|i| i.message.as_str()).collect();

    assert_eq!(
        messages,
        vec![
            "The most popular trend is 'Vintage' with a popularity of 80",
            "'Streetwear' is an emergent trend that is growing rapidly",
            "'Twitter' is the most reliable data source",
            "Trend popularity is moderately variable",
            "Popularity peaks in February and is lowest in January",
        ]
    );
}

#[test]
fn test_emergent_insight_follows_first_appearance() {
    let dataset = Dataset::new(vec![
        observation((2024, 1, 1), "Zeta", 50.0, "X"),
        observation((2024, 1, 2), "Alpha", 50.0, "X"),
        observation((2024, 2, 1), "Zeta", 100.0, "X"),
        observation((2024, 2, 2), "Alpha", 60.0, "X"),
    ])
    .unwrap();

    let growth = calculate_growth(&dataset).unwrap();
    assert_eq!(growth.keys().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);

    let emergent = emergent_trends(&growth, DEFAULT_EMERGENCE_THRESHOLD).unwrap();
    assert_eq!(emergent.keys().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);

    let insights = generate_insights(&dataset).unwrap();
    assert_eq!(insights[1].kind, InsightKind::Emergent);
    assert_eq!(
        insights[1].message,
        "'Zeta' is an emergent trend that is growing rapidly"
    );
}

#[test]
fn test_first_insight_names_peak_observation() {
    let dataset = Dataset::new(vec![
        observation((2024, 1, 1), "B", 40.0, "X"),
        observation((2024, 1, 2), "A", 91.0, "X"),
        observation((2024, 1, 3), "C", 60.0, "Y"),
    ])
    .unwrap();

    let insights = generate_insights(&dataset).unwrap();
    assert_eq!(insights[0].kind, InsightKind::MostPopular);
    assert!(insights[0].message.contains("'A'"));
    assert!(insights[0].message.contains("91"));
}

#[test]
fn test_highly_variable_dataset() {
    let dataset = Dataset::new(vec![
        observation((2024, 1, 1), "A", 10.0, "X"),
        observation((2024, 1, 2), "B", 90.0, "X"),
    ])
    .unwrap();

    let insights = generate_insights(&dataset).unwrap();
    let variability = insights
        .iter()
        .find(|i| i.kind == InsightKind::Variability)
        .unwrap();
    assert_eq!(variability.message, "Trend popularity is highly variable");
}

#[test]
fn test_insights_are_repeatable() {
    let dataset = common::quarterly_dataset();
    assert_eq!(
        generate_insights(&dataset).unwrap(),
        generate_insights(&dataset).unwrap()
    );
}

#[test]
fn test_fashion_sample_end_to_end() {
    let records = SimulatedSource::fashion_sample().fetch().unwrap();
    let (dataset, stats) = clean(&records, &[]).unwrap();
    assert_eq!(stats.rows_dropped, 0);
    assert_eq!(dataset, common::fashion_dataset());

    let growth = calculate_growth(&dataset).unwrap();
    assert!(growth.is_empty());

    let insights = generate_insights(&dataset).unwrap();
    assert!(insights[0].message.contains("Minimalista"));
    assert!(insights[0].message.contains("91"));
    assert!(insights.iter().all(|i| i.kind != InsightKind::Emergent));
}

#[test]
fn test_generated_series_analysis() {
    let records = SimulatedSource::generated(30, 42).fetch().unwrap();
    let (dataset, _) = clean(&records, &[]).unwrap();

    let growth = calculate_growth(&dataset).unwrap();
    assert_eq!(growth.len(), 3);

    let summary = analyze_seasonality(&dataset).unwrap();
    assert_eq!(summary.per_month.len(), 1);
    assert_eq!(summary.highest_period, summary.lowest_period);
}
