//! # relief-cli
//!
//! Command-line interface for disaster relief demand forecasting, demand
//! prediction and supply allocation.

mod config;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::ReliefConfig;
use data_facade::{CsvDatasetSource, DatasetSource, InMemoryDatasetSource};
use forecast_facade::{AdditiveForecaster, DemandForecaster};
use optimizer_facade::{AllocationOptimizer, PairedResourceAllocator};
use predictor_facade::ForestDemandPredictor;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Engine warnings plus CLI progress when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn,relief=info";

#[derive(Parser)]
#[command(name = "relief")]
#[command(about = "Disaster relief planning CLI", long_about = None)]
struct Cli {
    /// Engine configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output file (optional, defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast one demand metric 12 weeks ahead with intervals
    Forecast {
        /// Demand CSV (Weeks plus one column per metric); sample data when omitted
        #[arg(short, long)]
        demand: Option<PathBuf>,

        /// Demand column to forecast
        #[arg(short, long)]
        metric: String,

        /// Interval width, e.g. 0.95
        #[arg(long)]
        interval_width: Option<f64>,
    },

    /// Predict one demand metric 10 weeks ahead with a random forest
    Predict {
        /// Demand CSV; sample data when omitted
        #[arg(short, long)]
        demand: Option<PathBuf>,

        /// Demand column to predict
        #[arg(short, long)]
        metric: String,

        /// Bootstrap seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Allocate aggregated supplies across the three resource links
    Allocate {
        /// Region CSV; sample data when omitted
        #[arg(short, long)]
        regions: Option<PathBuf>,
    },

    /// Run every engine, reporting each failure in place
    Plan {
        /// Region CSV
        #[arg(short, long)]
        regions: Option<PathBuf>,

        /// Demand CSV
        #[arg(short, long)]
        demand: Option<PathBuf>,

        /// Bootstrap seed
        #[arg(long)]
        seed: Option<u64>,

        /// Interval width
        #[arg(long)]
        interval_width: Option<f64>,
    },
}

/// CSV source over the given tables, or the bundled sample when none is given.
fn dataset(
    regions: Option<PathBuf>,
    demand: Option<PathBuf>,
    config: &ReliefConfig,
) -> Box<dyn DatasetSource> {
    if regions.is_none() && demand.is_none() {
        tracing::info!("no input files, using sample dataset");
        return Box::new(InMemoryDatasetSource::sample());
    }

    let mut source = CsvDatasetSource::new().with_config(config.dataset.clone());
    if let Some(path) = regions {
        source = source.with_regions(path);
    }
    if let Some(path) = demand {
        source = source.with_demand(path);
    }
    Box::new(source)
}

/// Write JSON to file or stdout
fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output {}", path.display()))?;
        serde_json::to_writer_pretty(file, value).context("Failed to write JSON")?;
        tracing::info!(path = %path.display(), "results written");
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let base = ReliefConfig::load(cli.config.as_deref())?;
    let output = cli.output.as_deref();

    match cli.command {
        Commands::Forecast {
            demand,
            metric,
            interval_width,
        } => {
            let config = base.with_overrides(None, interval_width);
            let source = dataset(None, demand, &config);
            let series = source.load_series(&metric)?;
            tracing::info!(metric = %metric, weeks = series.len(), "forecasting");

            let result = AdditiveForecaster::new(config.forecast).forecast(&series)?;
            write_json(&result, output)
        }

        Commands::Predict {
            demand,
            metric,
            seed,
        } => {
            let config = base.with_overrides(seed, None);
            let source = dataset(None, demand, &config);
            let series = source.load_series(&metric)?;
            tracing::info!(metric = %metric, weeks = series.len(), seed = config.predictor.seed, "predicting");

            let predictor = ForestDemandPredictor::new(config.predictor);
            let report = report::predict_report(&predictor, series)?;
            write_json(&report, output)
        }

        Commands::Allocate { regions } => {
            let source = dataset(regions, None, &base);
            let snapshot = source.load_snapshot()?;
            tracing::info!(regions = snapshot.len(), "allocating");

            let plan = PairedResourceAllocator::new(base.optimizer).optimize(snapshot.regions())?;
            write_json(&plan, output)
        }

        Commands::Plan {
            regions,
            demand,
            seed,
            interval_width,
        } => {
            let config = base.with_overrides(seed, interval_width);
            let source = dataset(regions, demand, &config);
            tracing::info!(source = source.name(), "running plan");

            let report = report::build_plan(source.as_ref(), &config);
            write_json(&report, output)
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
