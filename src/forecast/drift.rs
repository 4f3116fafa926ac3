//! Random walk with drift

use super::{forecast_dates, label_points, ForecastPoint, Forecaster};
use crate::error::Result;
use crate::history::{validate_series, PeriodUnit, TimeSeriesPoint};

/// Historical values pass through as fitted values; future values continue
/// from the last observation at the average per-period change of the history.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriftForecaster;

impl DriftForecaster {
    /// Average change per period, zero for a single observation
    pub fn drift(history: &[TimeSeriesPoint]) -> f64 {
        match (history.first(), history.last()) {
            (Some(first), Some(last)) if history.len() > 1 => {
                (last.value - first.value) / (history.len() - 1) as f64
            }
            _ => 0.0,
        }
    }
}

impl Forecaster for DriftForecaster {
    fn name(&self) -> &'static str {
        "drift"
    }

    fn forecast(
        &self,
        history: &[TimeSeriesPoint],
        horizon: usize,
        unit: PeriodUnit,
    ) -> Result<Vec<ForecastPoint>> {
        validate_series(history, unit)?;

        let drift = Self::drift(history);
        let last_index = history.len() - 1;
        let last_value = history[last_index].value;
        let dates = forecast_dates(history, horizon, unit)?;

        Ok(label_points(dates, history.len(), |t| {
            if t <= last_index {
                history[t].value
            } else {
                last_value + drift * (t - last_index) as f64
            }
        }))
    }
}
