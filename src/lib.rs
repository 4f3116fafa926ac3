//! ALM System - Asset-liability management reporting
//!
//! This library provides:
//! - Historical asset series loading and validation
//! - Asset value forecasting (seasonal trend and drift models)
//! - Best-estimate liability and risk margin calculations
//! - Assembly of the Assumptions, Assets, Liabilities, Risk Assessment and ALM Metrics tables
//! - All-or-nothing Excel workbook output

pub mod assumptions;
pub mod config;
pub mod error;
pub mod forecast;
pub mod history;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod reserves;

// Re-export commonly used types
pub use assumptions::{AlmAssumptions, AssetProfile, LiabilityProfile, RiskFactor};
pub use config::AlmConfig;
pub use error::{AlmError, Result};
pub use forecast::{ForecastModel, ForecastPoint, Forecaster};
pub use history::{PeriodUnit, TimeSeriesPoint};
pub use output::{WorkbookWriter, XlsxWriter};
pub use pipeline::ReportRunner;
pub use report::AlmReport;
pub use reserves::{calculate_bel, calculate_risk_margin};
