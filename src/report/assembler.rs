//! Report assembler: joins the forecast with assumptions and calculator outputs

use super::metrics::AlmMetrics;
use super::tables::{AlmReport, AssetRecord, LiabilityRecord, RiskRecord};
use crate::assumptions::{AlmAssumptions, AssetProfile, LiabilityProfile, RiskFactor};
use crate::config::AlmConfig;
use crate::error::{AlmError, Result};
use crate::forecast::ForecastPoint;
use crate::reserves::{calculate_bel, calculate_risk_margin};
use log::{debug, warn};

/// Builds the five report tables from a forecast
pub struct ReportAssembler<'a> {
    assumptions: &'a AlmAssumptions,
    asset_profile: &'a AssetProfile,
    liability_profile: &'a LiabilityProfile,
    risk_factors: &'a [RiskFactor],
}

impl<'a> ReportAssembler<'a> {
    pub fn new(
        assumptions: &'a AlmAssumptions,
        asset_profile: &'a AssetProfile,
        liability_profile: &'a LiabilityProfile,
        risk_factors: &'a [RiskFactor],
    ) -> Self {
        Self {
            assumptions,
            asset_profile,
            liability_profile,
            risk_factors,
        }
    }

    pub fn from_config(config: &'a AlmConfig) -> Self {
        Self::new(
            &config.assumptions,
            &config.asset_profile,
            &config.liability_profile,
            &config.risk_factors,
        )
    }

    /// Assemble the full report. `expected_periods` is the number of forecast
    /// points the forecaster must have produced (history plus horizon).
    pub fn assemble(
        &self,
        forecast: &[ForecastPoint],
        expected_periods: usize,
    ) -> Result<AlmReport> {
        validate_forecast(forecast, expected_periods)?;

        let assets = self.asset_table(forecast);
        let liabilities = self.liability_table(forecast)?;
        let risks = self.risk_table();
        let metrics = AlmMetrics::compute(&assets, &liabilities, &risks)?;

        if metrics.funding_ratio < self.assumptions.target_funding_ratio {
            warn!(
                "Funding ratio {:.4} is below target {:.4}",
                metrics.funding_ratio, self.assumptions.target_funding_ratio
            );
        }

        Ok(AlmReport {
            assumptions: self.assumptions.to_records(),
            assets,
            liabilities,
            risks,
            metrics,
        })
    }

    /// Forecast values pass through unchanged as market values
    pub fn asset_table(&self, forecast: &[ForecastPoint]) -> Vec<AssetRecord> {
        forecast
            .iter()
            .map(|point| AssetRecord {
                date: point.date,
                market_value: point.predicted_value,
                expected_return: self.asset_profile.expected_return,
                duration: self.asset_profile.duration,
                credit_quality: self.asset_profile.credit_quality.clone(),
            })
            .collect()
    }

    /// One row per forecast date, all carrying the same BEL
    pub fn liability_table(&self, forecast: &[ForecastPoint]) -> Result<Vec<LiabilityRecord>> {
        let best_estimate = self.best_estimate_liability()?;

        Ok(forecast
            .iter()
            .map(|point| LiabilityRecord {
                date: point.date,
                expected_cashflow: self.liability_profile.expected_cashflow,
                duration: self.assumptions.liability_duration,
                best_estimate,
            })
            .collect())
    }

    pub fn best_estimate_liability(&self) -> Result<f64> {
        let bel = calculate_bel(
            &self.liability_profile.cash_flows(),
            self.assumptions.discount_rate,
            self.liability_profile.bel_periods,
        )?;
        debug!(
            "BEL {:.2} from {} cash flows over {} periods at {:.4}",
            bel,
            self.liability_profile.cashflow_count,
            self.liability_profile.bel_periods,
            self.assumptions.discount_rate
        );
        Ok(bel)
    }

    pub fn risk_table(&self) -> Vec<RiskRecord> {
        self.risk_factors
            .iter()
            .map(|factor| RiskRecord {
                risk_type: factor.risk_type.clone(),
                impact: factor.impact,
                probability: factor.probability,
                risk_weight: factor.risk_weight,
                risk_margin: calculate_risk_margin(
                    factor.impact,
                    factor.probability,
                    factor.risk_weight,
                ),
            })
            .collect()
    }
}

/// Reject forecasts the report cannot be built from
pub fn validate_forecast(forecast: &[ForecastPoint], expected_periods: usize) -> Result<()> {
    if forecast.is_empty() {
        return Err(AlmError::data("forecast is empty"));
    }
    if forecast.len() != expected_periods {
        return Err(AlmError::data(format!(
            "forecast has {} periods, expected {}",
            forecast.len(),
            expected_periods
        )));
    }
    if let Some(point) = forecast.iter().find(|p| !p.predicted_value.is_finite()) {
        return Err(AlmError::data(format!(
            "forecast value at {} is not finite ({})",
            point.date, point.predicted_value
        )));
    }
    if let Some(pair) = forecast.windows(2).find(|w| w[1].date <= w[0].date) {
        return Err(AlmError::data(format!(
            "forecast dates not strictly increasing: {} then {}",
            pair[0].date, pair[1].date
        )));
    }
    Ok(())
}
