//! Risk categories scored on the Risk Assessment sheet

use serde::{Deserialize, Serialize};

/// Inputs for one risk category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub risk_type: String,
    pub impact: f64,
    pub probability: f64,
    pub risk_weight: f64,
}

impl RiskFactor {
    pub fn new(
        risk_type: impl Into<String>,
        impact: f64,
        probability: f64,
        risk_weight: f64,
    ) -> Self {
        Self {
            risk_type: risk_type.into(),
            impact,
            probability,
            risk_weight,
        }
    }
}

/// Market, credit, insurance and operational risk, in report order
pub fn standard_risk_factors() -> Vec<RiskFactor> {
    vec![
        RiskFactor::new("Market Risk", 5_000_000.0, 0.05, 1.5),
        RiskFactor::new("Credit Risk", 3_000_000.0, 0.03, 1.3),
        RiskFactor::new("Insurance Risk", 2_000_000.0, 0.04, 1.2),
        RiskFactor::new("Operational Risk", 1_000_000.0, 0.02, 1.1),
    ]
}
