//! Row types for the five report tables

use super::metrics::AlmMetrics;
use crate::assumptions::Assumption;
use chrono::NaiveDate;
use serde::Serialize;

/// One forecast period on the Assets sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetRecord {
    pub date: NaiveDate,
    pub market_value: f64,
    pub expected_return: f64,
    pub duration: f64,
    pub credit_quality: String,
}

/// One forecast period on the Liabilities sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiabilityRecord {
    pub date: NaiveDate,
    pub expected_cashflow: f64,
    pub duration: f64,
    /// Same BEL on every row
    pub best_estimate: f64,
}

/// One risk category on the Risk Assessment sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskRecord {
    pub risk_type: String,
    pub impact: f64,
    pub probability: f64,
    pub risk_weight: f64,
    pub risk_margin: f64,
}

/// Named scalar on the ALM Metrics sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRecord {
    pub metric_name: String,
    pub value: f64,
}

impl MetricRecord {
    pub fn new(metric_name: impl Into<String>, value: f64) -> Self {
        Self {
            metric_name: metric_name.into(),
            value,
        }
    }
}

/// Complete ALM report, built once and written once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlmReport {
    pub assumptions: Vec<Assumption>,
    pub assets: Vec<AssetRecord>,
    pub liabilities: Vec<LiabilityRecord>,
    pub risks: Vec<RiskRecord>,
    pub metrics: AlmMetrics,
}

impl AlmReport {
    /// Rows for the ALM Metrics sheet
    pub fn metric_records(&self) -> Vec<MetricRecord> {
        self.metrics.to_records()
    }

    /// The single BEL broadcast across liability rows
    pub fn best_estimate_liability(&self) -> Option<f64> {
        self.liabilities.first().map(|l| l.best_estimate)
    }
}
