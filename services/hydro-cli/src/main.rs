//! Groundwater anomaly command-line tool.
//!
//! Loads preprocessed GRACE snapshot series (JSON), runs the per-country
//! pipeline and prints the resulting datasets as JSON on stdout. Logs go to
//! stderr.

mod commands;
mod loader;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use hydro_common::{BoundingBox, HydroError};
use hydro_processor::{Processor, ProcessorConfig};
use serde_json::Value;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "hydro-cli")]
#[command(about = "Groundwater anomaly extraction and trend analysis")]
struct Args {
    /// Directory of per-country reference YAML files (default: built-in tables)
    #[arg(long, global = true, env = "HYDRO_REFERENCE_DIR")]
    reference_dir: Option<PathBuf>,

    /// Multiplier applied to raw grid values (default: 100, meters to centimeters)
    #[arg(long, global = true)]
    unit_scale: Option<f64>,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process one country's series into a visualization dataset
    Process {
        /// Snapshot series JSON file
        #[arg(short, long)]
        data: PathBuf,

        /// Country key, e.g. "ghana"
        #[arg(short, long)]
        country: String,

        /// Target date (YYYY-MM-DD); nearest snapshot is used
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// Process every country with a <key>_groundwater.json file in a directory
    Batch {
        #[arg(long)]
        data_dir: PathBuf,

        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// Fit a linear trend over the most recent snapshots
    Trend {
        #[arg(short, long)]
        data: PathBuf,

        /// Number of recent snapshots to fit (default: 12)
        #[arg(long)]
        window: Option<usize>,
    },

    /// Heatmap data for one snapshot
    Map {
        #[arg(short, long)]
        data: PathBuf,

        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        /// Crop to a registered country's extent
        #[arg(long, conflicts_with = "bbox")]
        country: Option<String>,

        /// Crop to "minLon,minLat,maxLon,maxLat"
        #[arg(long, value_parser = parse_bbox_arg, allow_hyphen_values = true)]
        bbox: Option<BoundingBox>,
    },

    /// List registered countries
    Countries,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    hydro_common::parse_date(s).map_err(|e| e.to_string())
}

fn parse_bbox_arg(s: &str) -> Result<BoundingBox, String> {
    BoundingBox::from_bbox_string(s).map_err(|e| e.to_string())
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.json_logs)?;

    match run(args).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            let code = e
                .chain()
                .find_map(|cause| cause.downcast_ref::<HydroError>())
                .map(HydroError::exit_code)
                .unwrap_or(1);
            error!(error = %format!("{:#}", e), exit_code = code, "Command failed");
            eprintln!("error: {:#}", e);
            std::process::exit(code);
        }
    }
}

async fn run(args: Args) -> Result<Value> {
    let mut config = ProcessorConfig::from_env();
    if let Some(scale) = args.unit_scale {
        config.unit_scale = scale;
    }
    if let Command::Trend {
        window: Some(window),
        ..
    } = &args.command
    {
        config.trend_window = *window;
    }
    if let Err(e) = config.validate() {
        bail!(HydroError::config(e));
    }

    let timeout = Duration::from_secs(config.io_timeout_secs);
    let reference = Arc::new(loader::load_reference(args.reference_dir.clone(), timeout).await?);
    info!(
        countries = reference.len(),
        unit_scale = config.unit_scale,
        trend_window = config.trend_window,
        "Starting hydro-cli"
    );

    let processor = Arc::new(Processor::new(reference.clone(), config));

    let output = match args.command {
        Command::Process {
            data,
            country,
            date,
        } => commands::process(processor, &data, &country, date, timeout).await?,
        Command::Batch { data_dir, date } => commands::batch(processor, &data_dir, date, timeout).await?,
        Command::Trend { data, .. } => commands::trend(processor, &data, timeout).await?,
        Command::Map {
            data,
            date,
            country,
            bbox,
        } => {
            let crop = match country {
                Some(key) => Some(reference.bounding_box(&key)?),
                None => bbox,
            };
            commands::map(&data, date, crop, timeout).await?
        }
        Command::Countries => commands::countries(&reference)?,
    };

    Ok(output)
}
