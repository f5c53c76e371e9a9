mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clario::collect::SimulatedSource;
use clario::config::{parse_formats, Config};
use clario::error::{AnalysisError, ClarioErrorTrait, Error};

use commands::{AnalyzeParams, InputSelection};

#[derive(Parser)]
#[command(
    name = "clario",
    version,
    about = "Trend analysis: growth, emergent trends, seasonality and insights",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); overrides the configured format
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// TOML configuration file (defaults to CLARIO_* environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

/// Built-in datasets
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Sample {
    /// Five fashion trends, one observation each
    Fashion,
    /// Deterministic daily series for three trends
    Generated,
}

#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// JSON file of raw observations
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Built-in dataset used when no input file is configured
    #[arg(long, value_enum, default_value_t = Sample::Fashion)]
    sample: Sample,

    /// Number of days for the generated dataset
    #[arg(long, default_value = "90")]
    days: usize,

    /// Seed for the generated dataset
    #[arg(long, default_value = "42")]
    seed: u64,
}

impl InputArgs {
    fn simulated(&self) -> SimulatedSource {
        match self.sample {
            Sample::Fashion => SimulatedSource::fashion_sample(),
            Sample::Generated => SimulatedSource::generated(self.days, self.seed),
        }
    }

    fn selection(&self, config: &Config) -> InputSelection {
        InputSelection::resolve(self.input.clone(), config, self.simulated())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build and export a full trend report
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory for reports
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Comma-separated report formats (json, markdown)
        #[arg(short, long)]
        format: Option<String>,

        /// Emergence threshold in percent
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<f64>,

        /// Also save the cleaned dataset
        #[arg(long, default_value = "false")]
        save_dataset: bool,
    },

    /// Show growth per trend
    Growth {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show emergent trends
    Emergent {
        #[command(flatten)]
        input: InputArgs,

        /// Emergence threshold in percent
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<f64>,
    },

    /// Show mean popularity per month
    Seasonality {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show generated insights
    Insights {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show descriptive statistics
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Write a simulated raw dataset to a JSON file
    Sample {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Which built-in dataset to write
        #[arg(long, value_enum, default_value_t = Sample::Generated)]
        kind: Sample,

        /// Number of days for the generated dataset
        #[arg(long, default_value = "90")]
        days: usize,

        /// Seed for the generated dataset
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    config.validate().context("Invalid configuration")?;

    // Initialize tracing/logging
    setup_tracing(&config.logging.format, &config.logging.level, cli.verbose)?;

    tracing::info!("clario starting");

    match cli.command {
        Commands::Analyze {
            input,
            output_dir,
            format,
            threshold,
            save_dataset,
        } => {
            if let Some(threshold) = threshold {
                config.analysis.emergence_threshold = threshold;
            }
            let formats = match format {
                Some(value) => parse_formats(&value)?,
                None => config.output.formats.clone(),
            };
            let params = AnalyzeParams {
                input: input.selection(&config),
                output_dir: output_dir.unwrap_or_else(|| config.output.dir.clone()),
                formats,
                save_dataset: save_dataset || config.output.save_dataset,
            };
            tracing::info!(
                output_dir = %params.output_dir.display(),
                formats = ?params.formats,
                threshold = config.analysis.emergence_threshold,
                "Starting analyze command"
            );
            commands::analyze(&config, params)?;
        }

        Commands::Growth { input } => {
            commands::growth(&config, &input.selection(&config))?;
        }

        Commands::Emergent { input, threshold } => {
            commands::emergent(&config, &input.selection(&config), threshold)?;
        }

        Commands::Seasonality { input } => {
            commands::seasonality(&config, &input.selection(&config))?;
        }

        Commands::Insights { input } => {
            commands::insights(&config, &input.selection(&config))?;
        }

        Commands::Stats { input } => {
            commands::stats(&config, &input.selection(&config))?;
        }

        Commands::Sample {
            output,
            kind,
            days,
            seed,
        } => {
            let source = match kind {
                Sample::Fashion => SimulatedSource::fashion_sample(),
                Sample::Generated => SimulatedSource::generated(days, seed),
            };
            commands::sample(source, &output)?;
        }
    }

    tracing::info!("clario completed successfully");
    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("clario=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_new(format!("clario={level},warn"))
            .context("Invalid log level")?
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Print a message matching the kind of failure
fn report_failure(err: &anyhow::Error) {
    let classified = err
        .chain()
        .find_map(|cause| {
            cause
                .downcast_ref::<Error>()
                .map(|e| (e.category(), e.user_message(), e.is_recoverable()))
                .or_else(|| {
                    cause
                        .downcast_ref::<AnalysisError>()
                        .map(|e| (e.category(), e.user_message(), e.is_recoverable()))
                })
        });

    match classified {
        Some((category, message, recoverable)) => {
            eprintln!("Error ({}): {message}", category.label());
            if recoverable {
                eprintln!("Hint: remove or fix the affected rows and run again.");
            }
        }
        None => eprintln!("Error: {err:#}"),
    }
}
