//! Markdown report rendering with Handlebars template engine

use handlebars::Handlebars;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::{report_filename, ReportExporter};
use crate::error::Result;
use crate::models::{month_name, Report};

/// Default report template
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/report.hbs");

const TEMPLATE_NAME: &str = "report";

/// Template data for rendering
#[derive(Debug, Serialize)]
struct ReportTemplateData {
    generated_at: String,
    total_trends: usize,
    date_start: String,
    date_end: String,
    sources: String,
    growth: Vec<GrowthRow>,
    months: Vec<MonthRow>,
    highest: String,
    lowest: String,
    insights: Vec<String>,
    trends: Vec<TrendRow>,
}

#[derive(Debug, Serialize)]
struct GrowthRow {
    trend: String,
    absolute_change: String,
    percent_change: String,
    direction: String,
}

#[derive(Debug, Serialize)]
struct TrendRow {
    trend: String,
    observations: usize,
    mean: String,
    max: String,
    min: String,
    direction: &'static str,
}

#[derive(Debug, Serialize)]
struct MonthRow {
    name: String,
    mean: String,
}

fn month_label(month: u32) -> String {
    month_name(month).map_or_else(|| format!("Month {month}"), str::to_string)
}

impl From<&Report> for ReportTemplateData {
    fn from(report: &Report) -> Self {
        let (start, end) = report.summary.date_range;

        Self {
            generated_at: report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            total_trends: report.summary.total_trends,
            date_start: start.format("%Y-%m-%d").to_string(),
            date_end: end.format("%Y-%m-%d").to_string(),
            sources: report.summary.sources.join(", "),
            growth: report
                .growth
                .iter()
                .map(|(trend, result)| GrowthRow {
                    trend: trend.clone(),
                    absolute_change: format!("{:+.2}", result.absolute_change),
                    percent_change: format!("{:+.2}%", result.percent_change),
                    direction: result.direction.to_string(),
                })
                .collect(),
            months: report
                .seasonality
                .per_month
                .iter()
                .map(|(&month, mean)| MonthRow {
                    name: month_label(month),
                    mean: format!("{mean:.2}"),
                })
                .collect(),
            highest: month_label(report.seasonality.highest_period),
            lowest: month_label(report.seasonality.lowest_period),
            insights: report.insights.clone(),
            trends: report
                .trends
                .iter()
                .map(|summary| TrendRow {
                    trend: summary.trend_name.clone(),
                    observations: summary.observations,
                    mean: format!("{:.2}", summary.mean_popularity),
                    max: format!("{:.2}", summary.max_popularity),
                    min: format!("{:.2}", summary.min_popularity),
                    direction: summary.direction.map_or("n/a", |d| d.as_str()),
                })
                .collect(),
        }
    }
}

/// Markdown report writer with Handlebars template engine
pub struct MarkdownReportWriter<'a> {
    /// Handlebars template engine
    handlebars: Handlebars<'a>,

    /// Output directory
    output_dir: PathBuf,
}

impl<'a> MarkdownReportWriter<'a> {
    /// Create a new writer with the default template
    ///
    /// # Arguments
    /// * `output_dir` - Directory to save markdown files
    pub fn new(output_dir: &Path) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_template_string(TEMPLATE_NAME, DEFAULT_TEMPLATE)?;

        fs::create_dir_all(output_dir)?;

        Ok(Self {
            handlebars,
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Create with custom template file
    ///
    /// # Arguments
    /// * `output_dir` - Directory to save markdown files
    /// * `template_path` - Path to custom Handlebars template
    pub fn with_template(output_dir: &Path, template_path: &Path) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_template_file(TEMPLATE_NAME, template_path)?;

        fs::create_dir_all(output_dir)?;

        Ok(Self {
            handlebars,
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Render report to markdown string
    pub fn render(&self, report: &Report) -> Result<String> {
        let data = ReportTemplateData::from(report);
        Ok(self.handlebars.render(TEMPLATE_NAME, &data)?)
    }

    /// Get output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ReportExporter for MarkdownReportWriter<'_> {
    fn export(&self, report: &Report) -> Result<PathBuf> {
        let markdown = self.render(report)?;
        let filepath = self
            .output_dir
            .join(report_filename(report.generated_at, "md"));

        fs::write(&filepath, markdown)?;

        tracing::info!(path = %filepath.display(), "Saved markdown report");
        Ok(filepath)
    }
}
