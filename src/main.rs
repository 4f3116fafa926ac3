//! ALM report CLI
//!
//! Forecasts asset values, computes liabilities and risk margins, and writes
//! the five-sheet ALM workbook. Set RUST_LOG=info (or debug) for progress logs.

use alm_system::{
    config::AlmConfig,
    forecast::ForecastModel,
    history::load_history,
    output::{CsvPlotExport, XlsxWriter},
    ReportRunner,
};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Build an asset-liability management workbook
#[derive(Parser)]
#[command(name = "alm_system", version, about)]
struct Cli {
    /// JSON configuration file (defaults apply to every missing option)
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV file of historical asset values (date,value)
    #[arg(long)]
    history_csv: Option<PathBuf>,

    /// Workbook path
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Number of periods to forecast
    #[arg(long)]
    horizon: Option<usize>,

    /// Forecasting model
    #[arg(long, value_enum)]
    model: Option<ModelArg>,

    /// Disable the seasonal component of the trend model
    #[arg(long)]
    no_seasonality: bool,

    /// Export the asset forecast series to this CSV file
    #[arg(long)]
    plot_csv: Option<PathBuf>,

    /// Print the full report as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelArg {
    SeasonalTrend,
    Drift,
}

impl From<ModelArg> for ForecastModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::SeasonalTrend => ForecastModel::SeasonalTrend,
            ModelArg::Drift => ForecastModel::Drift,
        }
    }
}

fn load_config(cli: &Cli) -> Result<AlmConfig> {
    let mut config = match &cli.config {
        Some(path) => AlmConfig::from_json_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AlmConfig::default(),
    };

    if let Some(path) = &cli.history_csv {
        config.history = load_history(path)
            .with_context(|| format!("Failed to load history from {}", path.display()))?;
    }
    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }
    if let Some(horizon) = cli.horizon {
        config.forecast_horizon_periods = horizon;
    }
    if let Some(model) = cli.model {
        config.forecast_model = model.into();
    }
    if cli.no_seasonality {
        config.seasonality = false;
    }

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let output_path = config.output_path.clone();

    let mut runner = ReportRunner::new(config);
    if let Some(path) = &cli.plot_csv {
        runner = runner.with_plot(Box::new(CsvPlotExport::new(path)));
    }

    let report = runner
        .run(&XlsxWriter)
        .context("ALM report run failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("ALM model saved to {}", output_path.display());
    println!("  Periods:            {}", report.assets.len());
    if let Some(bel) = report.best_estimate_liability() {
        println!("  Best Estimate:      {:.2}", bel);
    }
    println!("  Funding Ratio:      {:.4}", report.metrics.funding_ratio);
    println!("  Duration Gap:       {:.2}", report.metrics.duration_gap);
    println!("  Total Risk Margin:  {:.2}", report.metrics.total_risk_margin);

    Ok(())
}
