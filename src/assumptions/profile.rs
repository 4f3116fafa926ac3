//! Asset and liability profiles attached to every forecast period

use serde::{Deserialize, Serialize};

/// Characteristics attached to each asset row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetProfile {
    pub expected_return: f64,
    pub duration: f64,
    pub credit_quality: String,
}

impl Default for AssetProfile {
    fn default() -> Self {
        Self {
            expected_return: 0.05,
            duration: 8.0,
            credit_quality: "AA".to_string(),
        }
    }
}

/// Expected liability cash flow stream used for the best estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiabilityProfile {
    /// Expected claims per period
    pub expected_cashflow: f64,
    /// Number of level cash flows in the stream
    pub cashflow_count: usize,
    /// Number of leading cash flows discounted into the BEL
    pub bel_periods: usize,
}

impl LiabilityProfile {
    /// Level stream of `cashflow_count` payments of `expected_cashflow`
    pub fn cash_flows(&self) -> Vec<f64> {
        vec![self.expected_cashflow; self.cashflow_count]
    }
}

impl Default for LiabilityProfile {
    fn default() -> Self {
        Self {
            expected_cashflow: 50_000.0,
            cashflow_count: 12,
            bel_periods: 10,
        }
    }
}
