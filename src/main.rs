use anyhow::Context;
use aquafarm::cli::{Cli, Commands, FieldArgs};
use aquafarm::config::{Config, OutputFormat};
use aquafarm::datasources::{parse_current, parse_forecast};
use aquafarm::error::AquaFarmError;
use aquafarm::logic::{usage_stats, Advisor};
use aquafarm::models::{AreaUnit, CropType, FieldSpec, ForecastWindow, WaterUsageRecord};
use aquafarm::report::{self, IrrigationReport};
use clap::Parser;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging (stderr, so stdout stays parseable)
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Init = cli.command {
        let (config, path) = Config::setup_interactive()?;
        config.validate()?;
        tracing::info!(path = %path.display(), "Config written");
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let format = cli.format.unwrap_or(config.output.format);

    match cli.command {
        Commands::Advise {
            current,
            forecast,
            field,
        } => {
            let observation = parse_current(&read_file(&current)?)
                .with_context(|| format!("parsing current weather from {}", current.display()))?;

            let window = match forecast {
                Some(path) => parse_forecast(&read_file(&path)?)
                    .with_context(|| format!("parsing forecast from {}", path.display()))?,
                None => {
                    tracing::warn!("No forecast given, assuming no rain");
                    ForecastWindow::default()
                }
            };

            let field = resolve_field(&config, &field)?;
            let recommendation = Advisor::new().recommend(&observation, &window, &field);
            let report = IrrigationReport::new(&observation, &window, &field, recommendation);

            match format {
                OutputFormat::Json => print_json(&report, config.output.pretty)?,
                OutputFormat::Text => print!("{}", report.render_text()),
            }
        }
        Commands::Forecast { forecast } => {
            let window = parse_forecast(&read_file(&forecast)?)
                .with_context(|| format!("parsing forecast from {}", forecast.display()))?;
            let days = window.daily_summary();

            match format {
                OutputFormat::Json => print_json(&days, config.output.pretty)?,
                OutputFormat::Text => print!("{}", report::render_daily_forecast(&days)),
            }
        }
        Commands::Usage { records, period } => {
            let period_days = period.unwrap_or(config.usage.period_days);
            if period_days == 0 {
                anyhow::bail!("period must be at least 1 day");
            }

            let records: Vec<WaterUsageRecord> = serde_json::from_str(&read_file(&records)?)
                .with_context(|| format!("parsing usage records from {}", records.display()))?;
            for record in &records {
                record.validate()?;
            }

            let today = chrono::Utc::now().date_naive();
            let since = usage_stats::period_start(today, period_days)?;
            let stats = usage_stats::summarize_usage(&records, since);

            match format {
                OutputFormat::Json => print_json(&stats, config.output.pretty)?,
                OutputFormat::Text => print!("{}", report::render_usage(&stats, period_days)),
            }
        }
        Commands::Crops => {
            let rows = report::crop_profile_rows();
            match format {
                OutputFormat::Json => print_json(&rows, config.output.pretty)?,
                OutputFormat::Text => print!("{}", report::render_crop_profiles(&rows)),
            }
        }
        Commands::Check => {
            config.validate()?;
            let field = config.field.to_field_spec()?;
            println!(
                "Config OK: default field {} {} of {}",
                field.area, field.area_unit, field.crop_type
            );
        }
        Commands::Init => unreachable!("handled above"),
    }

    Ok(())
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .map_err(AquaFarmError::from)
        .with_context(|| format!("reading {}", path.display()))
}

/// Command-line values win over the configured default field
fn resolve_field(config: &Config, args: &FieldArgs) -> aquafarm::Result<FieldSpec> {
    let mut field = config.field.to_field_spec()?;

    if let Some(ref crop) = args.crop {
        field.crop_type = CropType::from_str_lossy(crop);
    }
    if let Some(area) = args.area {
        if !area.is_finite() || area <= 0.0 {
            return Err(AquaFarmError::InvalidData(format!(
                "area must be positive, got {}",
                area
            )));
        }
        field.area = area;
    }
    if let Some(ref unit) = args.unit {
        field.area_unit = AreaUnit::from_str(unit).ok_or_else(|| {
            AquaFarmError::InvalidData(format!(
                "unknown area unit '{}' (expected acres, hectares or sqft)",
                unit
            ))
        })?;
    }

    Ok(field)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
