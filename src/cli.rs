//! CLI argument parsing for spikefreq

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the study summary
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report (default)
    Text,
    /// JSON document for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "spikefreq")]
#[command(version)]
#[command(
    about = "Spike-frequency statistics and Welch comparison for two-group recordings",
    long_about = None
)]
pub struct Cli {
    /// TOML study file with recording duration and group counts
    #[arg(short = 's', long = "study", value_name = "FILE")]
    pub study: Option<PathBuf>,

    /// Recording duration in seconds (overrides the study file)
    #[arg(short = 'd', long = "duration", value_name = "SECONDS")]
    pub duration: Option<f32>,

    /// Label for the first group
    #[arg(long = "label-a", value_name = "LABEL")]
    pub label_a: Option<String>,

    /// Spike counts for the first group, one value per cell
    #[arg(long = "counts-a", value_name = "COUNT", num_args = 1..)]
    pub counts_a: Option<Vec<f32>>,

    /// Label for the second group
    #[arg(long = "label-b", value_name = "LABEL")]
    pub label_b: Option<String>,

    /// Spike counts for the second group, one value per cell
    #[arg(long = "counts-b", value_name = "COUNT", num_args = 1..)]
    pub counts_b: Option<Vec<f32>>,

    /// Output path for the frequency table
    #[arg(long = "csv", value_name = "PATH", default_value = "frequency_data.csv")]
    pub csv: PathBuf,

    /// Output path for the chart
    #[arg(long = "plot", value_name = "PATH", default_value = "frequency_plot.svg")]
    pub plot: PathBuf,

    /// Skip chart rendering
    #[arg(long = "no-plot")]
    pub no_plot: bool,

    /// Output format for the summary
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
