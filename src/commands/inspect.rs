use anyhow::Result;

use clario::analytics::TrendAnalyzer;
use clario::config::Config;
use clario::models::month_name;

use super::{load_dataset, InputSelection};

pub fn growth(config: &Config, input: &InputSelection) -> Result<()> {
    let dataset = load_dataset(input, config)?;
    let growth = TrendAnalyzer::default().growth(&dataset)?;

    println!("\nGrowth analysis:");
    if growth.is_empty() {
        println!("  No trend has at least two observations.");
    }
    for (trend, result) in &growth {
        println!(
            "  {trend}: {:+.2} ({:+.2}%, {})",
            result.absolute_change, result.percent_change, result.direction
        );
    }
    Ok(())
}

pub fn emergent(config: &Config, input: &InputSelection, threshold: Option<f64>) -> Result<()> {
    let dataset = load_dataset(input, config)?;
    let analyzer =
        TrendAnalyzer::new(Some(threshold.unwrap_or(config.analysis.emergence_threshold)))?;
    let emergent = analyzer.emergent(&dataset)?;

    println!(
        "\nEmergent trends (threshold: {}%):",
        analyzer.emergence_threshold()
    );
    if emergent.is_empty() {
        println!("  None");
    }
    for (trend, result) in &emergent {
        println!("  {trend}: {:+.2}%", result.percent_change);
    }
    Ok(())
}

pub fn seasonality(config: &Config, input: &InputSelection) -> Result<()> {
    let dataset = load_dataset(input, config)?;
    let summary = TrendAnalyzer::default().seasonality(&dataset)?;

    println!("\nMean popularity by month:");
    for (month, mean) in &summary.per_month {
        println!("  {:<10} {mean:.2}", month_name(*month).unwrap_or("?"));
    }
    println!(
        "\nHighest: {} ({:.2})",
        month_name(summary.highest_period).unwrap_or("?"),
        summary.highest_mean().unwrap_or_default()
    );
    println!(
        "Lowest:  {} ({:.2})",
        month_name(summary.lowest_period).unwrap_or("?"),
        summary.lowest_mean().unwrap_or_default()
    );
    Ok(())
}

pub fn insights(config: &Config, input: &InputSelection) -> Result<()> {
    let dataset = load_dataset(input, config)?;
    let insights = TrendAnalyzer::default().insights(&dataset)?;

    println!("\nInsights:");
    for (i, insight) in insights.iter().enumerate() {
        println!("  {}. {insight}", i + 1);
    }
    Ok(())
}

pub fn stats(config: &Config, input: &InputSelection) -> Result<()> {
    let dataset = load_dataset(input, config)?;
    let analyzer = TrendAnalyzer::default();
    let stats = analyzer.stats(&dataset)?;

    println!("\nDataset statistics:");
    println!("  Observations: {}", stats.total_observations);
    println!(
        "  Most popular: {} ({})",
        stats.most_popular_trend, stats.max_popularity
    );
    println!("  Mean popularity: {:.2}", stats.mean_popularity);
    println!("  Standard deviation: {:.2}", stats.std_dev);
    println!("\n  By source:");
    for avg in &stats.per_source {
        println!(
            "    {}: {:.2} ({} observations)",
            avg.source, avg.mean_popularity, avg.observations
        );
    }
    println!("\n  By trend:");
    for summary in analyzer.trend_summaries(&dataset) {
        println!(
            "    {}: mean {:.2}, max {:.2}, min {:.2} ({} observations, {})",
            summary.trend_name,
            summary.mean_popularity,
            summary.max_popularity,
            summary.min_popularity,
            summary.observations,
            summary.direction.map_or("n/a", |d| d.as_str())
        );
    }
    Ok(())
}
