use anyhow::{Context, Result};
use std::path::PathBuf;

use clario::analytics::TrendAnalyzer;
use clario::config::{Config, ReportFormat};
use clario::models::month_name;
use clario::storage::{save_dataset, JsonReportWriter, MarkdownReportWriter, ReportExporter};

use super::{load_dataset, InputSelection};

/// Parameters for the analyze command
#[derive(Debug, Clone)]
pub struct AnalyzeParams {
    pub input: InputSelection,
    pub output_dir: PathBuf,
    pub formats: Vec<ReportFormat>,
    pub save_dataset: bool,
}

pub fn analyze(config: &Config, params: AnalyzeParams) -> Result<()> {
    println!("Trend Analysis");
    println!("==============");

    let dataset = load_dataset(&params.input, config)?;
    let analyzer = TrendAnalyzer::new(Some(config.analysis.emergence_threshold))?;

    let report = analyzer.report(&dataset)?;

    println!("\nTrends analyzed: {}", report.summary.total_trends);
    println!(
        "Period: {} - {}",
        report.summary.date_range.0, report.summary.date_range.1
    );
    println!("Sources: {}", report.summary.sources.join(", "));

    if report.growth.is_empty() {
        println!("\nNo trend has at least two observations; growth was not computed.");
    } else {
        println!("\nGrowth:");
        for (trend, result) in &report.growth {
            println!(
                "  {trend}: {:+.2}% ({})",
                result.percent_change, result.direction
            );
        }
    }

    let emergent = analyzer.emergent(&dataset)?;
    if !emergent.is_empty() {
        println!(
            "\nEmergent trends (> {}%):",
            analyzer.emergence_threshold()
        );
        for trend in emergent.keys() {
            println!("  {trend}");
        }
    }

    println!(
        "\nHighest month: {}  Lowest month: {}",
        month_name(report.seasonality.highest_period).unwrap_or("?"),
        month_name(report.seasonality.lowest_period).unwrap_or("?")
    );

    println!("\nInsights:");
    for (i, insight) in report.insights.iter().enumerate() {
        println!("  {}. {insight}", i + 1);
    }

    println!();
    for format in &params.formats {
        let path = match format {
            ReportFormat::Json => JsonReportWriter::new(&params.output_dir)?.export(&report),
            ReportFormat::Markdown => match &config.output.template {
                Some(template) => MarkdownReportWriter::with_template(&params.output_dir, template)?,
                None => MarkdownReportWriter::new(&params.output_dir)?,
            }
            .export(&report),
        }
        .with_context(|| format!("Failed to export {format:?} report"))?;
        println!("Report saved to: {}", path.display());
    }

    if params.save_dataset {
        let path = params.output_dir.join("processed_observations.json");
        save_dataset(&dataset, &path)?;
        println!("Processed dataset saved to: {}", path.display());
    }

    Ok(())
}
