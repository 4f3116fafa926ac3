//! ALM assumptions: economic parameters, asset and liability profiles, risk factors

mod profile;
mod risk;

pub use profile::{AssetProfile, LiabilityProfile};
pub use risk::{standard_risk_factors, RiskFactor};

use serde::{Deserialize, Serialize};

/// Named assumption as shown on the Assumptions sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumption {
    pub name: String,
    pub value: f64,
}

impl Assumption {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The six economic parameters of the ALM model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlmAssumptions {
    pub initial_assets: f64,
    /// Annual rate used to discount liability cash flows
    pub discount_rate: f64,
    pub risk_free_rate: f64,
    pub credit_spread: f64,
    /// Liability duration in years; also the duration on every liability row
    pub liability_duration: f64,
    pub target_funding_ratio: f64,
}

impl AlmAssumptions {
    /// Standard valuation basis
    pub fn standard() -> Self {
        Self {
            initial_assets: 1_000_000.0,
            discount_rate: 0.03,
            risk_free_rate: 0.02,
            credit_spread: 0.01,
            liability_duration: 10.0,
            target_funding_ratio: 1.10,
        }
    }

    /// Rows for the Assumptions sheet, in display order
    pub fn to_records(&self) -> Vec<Assumption> {
        vec![
            Assumption::new("Initial Assets", self.initial_assets),
            Assumption::new("Discount Rate", self.discount_rate),
            Assumption::new("Risk-Free Rate", self.risk_free_rate),
            Assumption::new("Credit Spread", self.credit_spread),
            Assumption::new("Liability Duration", self.liability_duration),
            Assumption::new("Target Funding Ratio", self.target_funding_ratio),
        ]
    }
}

impl Default for AlmAssumptions {
    fn default() -> Self {
        Self::standard()
    }
}
