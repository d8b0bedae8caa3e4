use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aquafarm",
    version,
    about = "Weather-driven irrigation advice for farm fields"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend irrigation from current weather and forecast payloads
    Advise {
        /// OpenWeatherMap current weather JSON
        #[arg(long)]
        current: PathBuf,

        /// OpenWeatherMap 5-day/3-hour forecast JSON (omit to assume no rain)
        #[arg(long)]
        forecast: Option<PathBuf>,

        #[command(flatten)]
        field: FieldArgs,
    },
    /// Summarize a forecast by day
    Forecast {
        /// OpenWeatherMap 5-day/3-hour forecast JSON
        #[arg(long)]
        forecast: PathBuf,
    },
    /// Water usage statistics from logged irrigation records
    Usage {
        /// JSON array of water usage records
        #[arg(long)]
        records: PathBuf,

        /// Period in days (default from config)
        #[arg(long)]
        period: Option<u32>,
    },
    /// Show crop water profiles
    Crops,
    /// Interactively write a config file
    Init,
    /// Validate config
    Check,
}

/// Field overrides; anything omitted comes from the config
#[derive(clap::Args, Debug, Default)]
pub struct FieldArgs {
    /// Crop type (wheat, rice, corn, cotton, sugarcane, vegetables, fruits, other)
    #[arg(long)]
    pub crop: Option<String>,

    /// Field area
    #[arg(long)]
    pub area: Option<f64>,

    /// Area unit (acres, hectares, sqft)
    #[arg(long)]
    pub unit: Option<String>,
}
