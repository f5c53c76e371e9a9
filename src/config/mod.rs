//! Configuration management for clario
//!
//! Configuration can come from defaults, a TOML file, or `CLARIO_*`
//! environment variables. Command-line flags override whichever was loaded.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::analytics::DEFAULT_EMERGENCE_THRESHOLD;
use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Analysis parameters
    pub analysis: AnalysisConfig,

    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Output configuration
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Analysis parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Percentage growth above which a trend is emergent
    pub emergence_threshold: f64,
}

/// Input configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// JSON file of raw observations; simulated data is used when unset
    pub path: Option<PathBuf>,

    /// Extra `chrono` date formats accepted during cleaning
    #[serde(default)]
    pub date_formats: Vec<String>,
}

/// Output format for exported reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Json,
    Markdown,
}

impl ReportFormat {
    /// Parse a format name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory reports are written to
    pub dir: PathBuf,

    /// Report formats to write
    pub formats: Vec<ReportFormat>,

    /// Also persist the cleaned dataset as JSON
    #[serde(default)]
    pub save_dataset: bool,

    /// Handlebars template overriding the built-in Markdown layout
    #[serde(default)]
    pub template: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults; a set but malformed variable is an
    /// error.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let emergence_threshold = env_parsed("CLARIO_EMERGENCE_THRESHOLD")?
            .unwrap_or(defaults.analysis.emergence_threshold);

        let input_path = env_var("CLARIO_INPUT").map(PathBuf::from);

        let date_formats = env_var("CLARIO_DATE_FORMATS")
            .map(|value| split_list(&value))
            .unwrap_or(defaults.input.date_formats);

        let output_dir = env_var("CLARIO_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output.dir);

        let formats = match env_var("CLARIO_OUTPUT_FORMATS") {
            Some(value) => parse_formats(&value)?,
            None => defaults.output.formats,
        };

        let save_dataset =
            env_parsed("CLARIO_SAVE_DATASET")?.unwrap_or(defaults.output.save_dataset);

        let template = env_var("CLARIO_TEMPLATE").map(PathBuf::from);

        let log_level = env_var("CLARIO_LOG_LEVEL").unwrap_or(defaults.logging.level);

        let log_format = env_var("CLARIO_LOG_FORMAT").unwrap_or(defaults.logging.format);

        Ok(Self {
            analysis: AnalysisConfig {
                emergence_threshold,
            },
            input: InputConfig {
                path: input_path,
                date_formats,
            },
            output: OutputConfig {
                dir: output_dir,
                formats,
                save_dataset,
                template,
            },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::with_source(format!("Failed to read config file: {}", path.display()), e)
        })?;

        toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse TOML config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.analysis.emergence_threshold.is_finite() {
            return Err(Error::config("emergence_threshold must be a finite number"));
        }

        if self.output.formats.is_empty() {
            return Err(Error::config("at least one output format is required"));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(Error::config("log format must be 'text' or 'json'"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig {
                emergence_threshold: DEFAULT_EMERGENCE_THRESHOLD,
            },
            input: InputConfig::default(),
            output: OutputConfig {
                dir: PathBuf::from("data"),
                formats: vec![ReportFormat::Json],
                save_dataset: false,
                template: None,
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}

/// Parse a comma-separated list of report formats
pub fn parse_formats(value: &str) -> Result<Vec<ReportFormat>> {
    split_list(value)
        .iter()
        .map(|s| {
            ReportFormat::parse(s)
                .ok_or_else(|| Error::config(format!("Unknown report format: {s}")))
        })
        .collect()
}

/// Parse the value of environment variable `name`
pub fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::config(format!("Invalid {name}: {value}")))
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn env_parsed<T: FromStr>(name: &str) -> Result<Option<T>> {
    env_var(name)
        .map(|value| parse_var(name, &value))
        .transpose()
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
