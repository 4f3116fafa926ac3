//! Aggregate ALM metrics over the asset, liability and risk tables

use super::tables::{AssetRecord, LiabilityRecord, MetricRecord, RiskRecord};
use crate::error::{AlmError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlmMetrics {
    /// Mean asset market value over mean liability best estimate
    pub funding_ratio: f64,
    /// Mean asset duration minus mean liability duration
    pub duration_gap: f64,
    pub total_risk_margin: f64,
}

impl AlmMetrics {
    pub fn compute(
        assets: &[AssetRecord],
        liabilities: &[LiabilityRecord],
        risks: &[RiskRecord],
    ) -> Result<Self> {
        let mean_assets = mean(assets.iter().map(|a| a.market_value))
            .ok_or_else(|| AlmError::data("asset table is empty"))?;
        let mean_bel = mean(liabilities.iter().map(|l| l.best_estimate))
            .ok_or_else(|| AlmError::data("liability table is empty"))?;

        if mean_bel == 0.0 {
            return Err(AlmError::domain(
                "funding ratio undefined: mean best estimate liability is zero",
            ));
        }

        let asset_duration = mean(assets.iter().map(|a| a.duration)).unwrap_or_default();
        let liability_duration = mean(liabilities.iter().map(|l| l.duration)).unwrap_or_default();

        Ok(Self {
            funding_ratio: mean_assets / mean_bel,
            duration_gap: asset_duration - liability_duration,
            total_risk_margin: risks.iter().map(|r| r.risk_margin).sum(),
        })
    }

    /// Rows for the ALM Metrics sheet, in display order
    pub fn to_records(&self) -> Vec<MetricRecord> {
        vec![
            MetricRecord::new("Funding Ratio", self.funding_ratio),
            MetricRecord::new("Duration Gap", self.duration_gap),
            MetricRecord::new("Total Risk Margin", self.total_risk_margin),
        ]
    }
}

/// Arithmetic mean, `None` for an empty sequence
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
