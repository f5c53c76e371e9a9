//! Report assembly

use chrono::Utc;

use crate::dataset::Dataset;
use crate::models::{Report, ReportSummary};

use super::error::{AnalysisError, AnalysisResult};
use super::growth::calculate_growth;
use super::insights::generate_insights;
use super::seasonality::analyze_seasonality;
use super::stats::summarize_trends;

/// Run growth, seasonality and insight analysis once each and assemble a report
///
/// `generated_at` is captured from the wall clock after every analysis has
/// succeeded. Any failure aborts assembly; no partial report is produced.
pub fn build_report(dataset: &Dataset) -> AnalysisResult<Report> {
    let growth = calculate_growth(dataset)?;
    let seasonality = analyze_seasonality(dataset)?;
    let insights = generate_insights(dataset)?;

    let date_range = dataset
        .date_range()
        .ok_or_else(|| AnalysisError::validation("cannot build a report for an empty dataset"))?;

    let summary = ReportSummary {
        total_trends: dataset.trend_names().len(),
        date_range,
        sources: dataset.sources().into_iter().map(str::to_string).collect(),
    };

    let report = Report {
        generated_at: Utc::now(),
        summary,
        growth,
        seasonality,
        insights: insights.into_iter().map(|insight| insight.message).collect(),
        trends: summarize_trends(dataset),
    };

    tracing::info!(
        total_trends = report.summary.total_trends,
        growth_entries = report.growth.len(),
        insights = report.insights.len(),
        "Report assembled"
    );

    Ok(report)
}
