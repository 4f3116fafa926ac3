//! Worksheet layout of the ALM workbook

use super::tables::AlmReport;
use crate::output::{Cell, Sheet};

pub const ASSUMPTIONS_SHEET: &str = "Assumptions";
pub const ASSETS_SHEET: &str = "Assets";
pub const LIABILITIES_SHEET: &str = "Liabilities";
pub const RISK_SHEET: &str = "Risk Assessment";
pub const METRICS_SHEET: &str = "ALM Metrics";

const DATE_FORMAT: &str = "%Y-%m-%d";

impl AlmReport {
    /// The five worksheets in workbook order
    pub fn to_sheets(&self) -> Vec<Sheet> {
        vec![
            Sheet::new(
                ASSUMPTIONS_SHEET,
                &["Parameter", "Value"],
                self.assumptions
                    .iter()
                    .map(|a| vec![Cell::text(&a.name), Cell::Number(a.value)])
                    .collect(),
            ),
            Sheet::new(
                ASSETS_SHEET,
                &["Date", "Market Value", "Expected Return", "Duration", "Credit Quality"],
                self.assets
                    .iter()
                    .map(|a| {
                        vec![
                            Cell::Text(a.date.format(DATE_FORMAT).to_string()),
                            Cell::Number(a.market_value),
                            Cell::Number(a.expected_return),
                            Cell::Number(a.duration),
                            Cell::text(&a.credit_quality),
                        ]
                    })
                    .collect(),
            ),
            Sheet::new(
                LIABILITIES_SHEET,
                &["Date", "Expected Cashflow", "Duration", "Best Estimate"],
                self.liabilities
                    .iter()
                    .map(|l| {
                        vec![
                            Cell::Text(l.date.format(DATE_FORMAT).to_string()),
                            Cell::Number(l.expected_cashflow),
                            Cell::Number(l.duration),
                            Cell::Number(l.best_estimate),
                        ]
                    })
                    .collect(),
            ),
            Sheet::new(
                RISK_SHEET,
                &["Risk Type", "Impact", "Probability", "Risk Weight", "Risk Margin"],
                self.risks
                    .iter()
                    .map(|r| {
                        vec![
                            Cell::text(&r.risk_type),
                            Cell::Number(r.impact),
                            Cell::Number(r.probability),
                            Cell::Number(r.risk_weight),
                            Cell::Number(r.risk_margin),
                        ]
                    })
                    .collect(),
            ),
            Sheet::new(
                METRICS_SHEET,
                &["Metric", "Value"],
                self.metric_records()
                    .into_iter()
                    .map(|m| vec![Cell::Text(m.metric_name), Cell::Number(m.value)])
                    .collect(),
            ),
        ]
    }
}
