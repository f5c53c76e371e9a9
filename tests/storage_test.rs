//! Report export tests

mod common;

use clario::analytics::build_report;
use clario::storage::{
    report_filename, save_dataset, JsonReportWriter, MarkdownReportWriter, ReportExporter,
};
use tempfile::TempDir;

#[test]
fn test_json_export_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let report = build_report(&common::quarterly_dataset()).unwrap();

    let writer = JsonReportWriter::new(temp_dir.path()).unwrap();
    let path = writer.export(&report).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        report_filename(report.generated_at, "json")
    );
    let loaded = JsonReportWriter::load(&path).unwrap();
    assert_eq!(loaded, report);
}

#[test]
fn test_json_export_shape() {
    let temp_dir = TempDir::new().unwrap();
    let report = build_report(&common::quarterly_dataset()).unwrap();

    let path = JsonReportWriter::new(temp_dir.path())
        .unwrap()
        .export(&report)
        .unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

    assert!(value["generated_at"].is_string());
    assert_eq!(value["summary"]["total_trends"], 3);
    assert_eq!(value["growth"]["Streetwear"]["direction"], "increasing");
    assert_eq!(value["growth"]["Vintage"]["direction"], "decreasing");
    assert_eq!(value["seasonality"]["per_month"]["2"], 72.5);
    assert_eq!(value["seasonality"]["highest_period"], 2);
    assert_eq!(value["insights"].as_array().unwrap().len(), 5);
    assert_eq!(value["trends"][0]["trend_name"], "Streetwear");
    assert_eq!(value["trends"][1]["max_popularity"], 80.0);
    assert_eq!(value["trends"][2]["direction"], "increasing");
}

#[test]
fn test_json_growth_keeps_first_appearance_order() {
    let temp_dir = TempDir::new().unwrap();
    let report = build_report(&common::quarterly_dataset()).unwrap();

    let path = JsonReportWriter::new(temp_dir.path())
        .unwrap()
        .export(&report)
        .unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    let streetwear = content.find("\"Streetwear\": {").unwrap();
    let vintage = content.find("\"Vintage\": {").unwrap();
    let minimalista = content.find("\"Minimalista\": {").unwrap();
    assert!(streetwear < vintage && vintage < minimalista);

    let loaded = JsonReportWriter::load(&path).unwrap();
    assert!(loaded.same_content(&report));
    assert_eq!(
        loaded.growth.keys().collect::<Vec<_>>(),
        vec!["Streetwear", "Vintage", "Minimalista"]
    );
}

#[test]
fn test_markdown_export() {
    let temp_dir = TempDir::new().unwrap();
    let report = build_report(&common::quarterly_dataset()).unwrap();

    let writer = MarkdownReportWriter::new(temp_dir.path()).unwrap();
    let path = writer.export(&report).unwrap();

    assert_eq!(path.extension().unwrap(), "md");
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("| Streetwear | +18.00 | +30.00% | increasing |"));
    assert!(content.contains("'Streetwear' is an emergent trend that is growing rapidly"));
    assert!(content.contains("| Vintage | 3 | 73.00 | 80.00 | 64.00 | decreasing |"));
}

#[test]
fn test_markdown_export_without_growth() {
    let temp_dir = TempDir::new().unwrap();
    let report = build_report(&common::fashion_dataset()).unwrap();

    let content = MarkdownReportWriter::new(temp_dir.path())
        .unwrap()
        .render(&report)
        .unwrap();
    assert!(content.contains("No trend has enough observations to measure growth."));
}

#[test]
fn test_save_dataset_creates_parent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("processed.json");

    save_dataset(&common::fashion_dataset(), &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[2]["trend_name"], "Minimalista");
}

#[test]
fn test_markdown_custom_template() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("short.hbs");
    std::fs::write(
        &template,
        "{{total_trends}} trends\n{{#each insights}}* {{this}}\n{{/each}}",
    )
    .unwrap();
    let report = build_report(&common::quarterly_dataset()).unwrap();

    let writer = MarkdownReportWriter::with_template(temp_dir.path(), &template).unwrap();
    let content = writer.render(&report).unwrap();

    assert!(content.starts_with("3 trends\n"));
    assert!(content.contains("* 'Twitter' is the most reliable data source"));
}
