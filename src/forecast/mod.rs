//! Asset value forecasting
//!
//! A forecaster takes an ordered history and returns fitted values for every
//! historical date followed by `horizon` extrapolated periods. The report only
//! depends on the [`Forecaster`] trait, so any model meeting that contract can
//! be plugged into [`crate::ReportRunner`].

mod drift;
mod trend;

pub use drift::DriftForecaster;
pub use trend::SeasonalTrendForecaster;

use crate::error::{AlmError, Result};
use crate::history::{PeriodUnit, TimeSeriesPoint};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fitted or extrapolated value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_value: f64,
    /// False for fitted historical points, true for extrapolated ones
    pub is_future: bool,
}

/// Common interface for forecasting models
pub trait Forecaster {
    /// Short model name for logs
    fn name(&self) -> &'static str;

    /// Fit `history` and extrapolate `horizon` periods of `unit` beyond it
    fn forecast(
        &self,
        history: &[TimeSeriesPoint],
        horizon: usize,
        unit: PeriodUnit,
    ) -> Result<Vec<ForecastPoint>>;
}

/// Selectable forecasting model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForecastModel {
    /// Linear trend with additive yearly seasonality
    #[default]
    SeasonalTrend,
    /// Random walk with drift
    Drift,
}

impl ForecastModel {
    pub fn build(self, seasonality: bool) -> Box<dyn Forecaster> {
        match self {
            ForecastModel::SeasonalTrend => Box::new(SeasonalTrendForecaster::new(seasonality)),
            ForecastModel::Drift => Box::new(DriftForecaster),
        }
    }
}

/// Dates for `history.len() + horizon` periods, stepping from the first historical date
pub(crate) fn forecast_dates(
    history: &[TimeSeriesPoint],
    horizon: usize,
    unit: PeriodUnit,
) -> Result<Vec<NaiveDate>> {
    let anchor = history
        .first()
        .ok_or_else(|| AlmError::data("cannot forecast from an empty history"))?
        .date;

    (0..history.len() + horizon)
        .map(|i| {
            u32::try_from(i)
                .ok()
                .and_then(|n| unit.nth_after(anchor, n))
                .ok_or_else(|| {
                    AlmError::data(format!("forecast date out of range at period {}", i))
                })
        })
        .collect()
}

/// Pair dates with model values, flagging the periods past the history
pub(crate) fn label_points(
    dates: Vec<NaiveDate>,
    history_len: usize,
    value_at: impl Fn(usize) -> f64,
) -> Vec<ForecastPoint> {
    dates
        .into_iter()
        .enumerate()
        .map(|(t, date)| ForecastPoint {
            date,
            predicted_value: value_at(t),
            is_future: t >= history_len,
        })
        .collect()
}
