//! Report configuration
//!
//! Every option has a default, so `{}` is a complete configuration producing
//! the standard report. Economic parameters sit at the top level of the JSON
//! object alongside the forecast options:
//!
//! ```json
//! {
//!   "discount_rate": 0.035,
//!   "forecast_horizon_periods": 24,
//!   "history": [{"date": "2023-01-31", "value": 1000000.0}]
//! }
//! ```

use crate::assumptions::{
    standard_risk_factors, AlmAssumptions, AssetProfile, LiabilityProfile, RiskFactor,
};
use crate::error::{AlmError, Result};
use crate::forecast::ForecastModel;
use crate::history::{default_history, validate_series, PeriodUnit, TimeSeriesPoint};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default workbook location
pub const DEFAULT_OUTPUT_PATH: &str = "ALM_model.xlsx";

/// Complete input for one report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlmConfig {
    #[serde(flatten)]
    pub assumptions: AlmAssumptions,

    /// Number of periods to forecast past the end of the history
    #[serde(default = "default_horizon")]
    pub forecast_horizon_periods: usize,

    #[serde(default)]
    pub period_unit: PeriodUnit,

    #[serde(default = "default_history")]
    pub history: Vec<TimeSeriesPoint>,

    #[serde(default)]
    pub forecast_model: ForecastModel,

    /// Fit a yearly seasonal component when the model supports it
    #[serde(default = "default_true")]
    pub seasonality: bool,

    #[serde(default)]
    pub asset_profile: AssetProfile,

    #[serde(default)]
    pub liability_profile: LiabilityProfile,

    #[serde(default = "standard_risk_factors")]
    pub risk_factors: Vec<RiskFactor>,

    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_horizon() -> usize { 12 }
fn default_true() -> bool { true }
fn default_output_path() -> PathBuf { PathBuf::from(DEFAULT_OUTPUT_PATH) }

impl AlmConfig {
    /// Load configuration from a JSON file
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| AlmError::io(path, e))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Check inputs that would otherwise fail deep inside the run
    pub fn validate(&self) -> Result<()> {
        validate_series(&self.history, self.period_unit)?;

        if self.liability_profile.bel_periods == 0 {
            return Err(AlmError::domain("BEL periods must be positive"));
        }
        if self.assumptions.discount_rate <= -1.0 || !self.assumptions.discount_rate.is_finite() {
            return Err(AlmError::domain(format!(
                "discount rate must be finite and exceed -1, got {}",
                self.assumptions.discount_rate
            )));
        }
        if self.risk_factors.is_empty() {
            return Err(AlmError::data("at least one risk factor is required"));
        }

        Ok(())
    }

    /// Number of rows expected on the Assets and Liabilities sheets
    pub fn expected_periods(&self) -> usize {
        self.history.len() + self.forecast_horizon_periods
    }
}

impl Default for AlmConfig {
    fn default() -> Self {
        Self {
            assumptions: AlmAssumptions::standard(),
            forecast_horizon_periods: default_horizon(),
            period_unit: PeriodUnit::Month,
            history: default_history(),
            forecast_model: ForecastModel::default(),
            seasonality: true,
            asset_profile: AssetProfile::default(),
            liability_profile: LiabilityProfile::default(),
            risk_factors: standard_risk_factors(),
            output_path: default_output_path(),
        }
    }
}
