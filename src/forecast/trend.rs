//! Linear trend plus additive seasonal forecaster

use super::{forecast_dates, label_points, ForecastPoint, Forecaster};
use crate::error::Result;
use crate::history::{validate_series, PeriodUnit, TimeSeriesPoint};
use log::debug;

/// Least-squares trend on the period index with an additive seasonal term.
///
/// The seasonal term for each position in the yearly cycle is the mean trend
/// residual at that position, centred so the cycle sums to zero. It is only
/// fitted when at least one full cycle of history is available.
#[derive(Debug, Clone, Copy)]
pub struct SeasonalTrendForecaster {
    seasonality: bool,
}

/// Parameters of a fitted trend model
#[derive(Debug, Clone, PartialEq)]
pub struct FittedTrend {
    pub intercept: f64,
    pub slope: f64,
    /// One entry per position in the seasonal cycle; empty when not fitted
    pub seasonal: Vec<f64>,
}

impl FittedTrend {
    pub fn trend_at(&self, t: usize) -> f64 {
        self.intercept + self.slope * t as f64
    }

    pub fn value_at(&self, t: usize) -> f64 {
        let season = if self.seasonal.is_empty() {
            0.0
        } else {
            self.seasonal[t % self.seasonal.len()]
        };
        self.trend_at(t) + season
    }
}

impl SeasonalTrendForecaster {
    pub fn new(seasonality: bool) -> Self {
        Self { seasonality }
    }

    pub fn fit(&self, history: &[TimeSeriesPoint], unit: PeriodUnit) -> Result<FittedTrend> {
        validate_series(history, unit)?;

        let n = history.len();
        let x_mean = (n as f64 - 1.0) / 2.0;
        let y_mean = history.iter().map(|p| p.value).sum::<f64>() / n as f64;

        let (sxx, sxy) = history
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(sxx, sxy), (i, p)| {
                let dx = i as f64 - x_mean;
                (sxx + dx * dx, sxy + dx * (p.value - y_mean))
            });

        let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
        let mut fitted = FittedTrend {
            intercept: y_mean - slope * x_mean,
            slope,
            seasonal: Vec::new(),
        };

        let cycle = unit.season_length();
        if self.seasonality && cycle > 1 && n >= cycle {
            let mut sums = vec![0.0; cycle];
            let mut counts = vec![0usize; cycle];
            for (i, p) in history.iter().enumerate() {
                sums[i % cycle] += p.value - fitted.trend_at(i);
                counts[i % cycle] += 1;
            }

            let mut seasonal: Vec<f64> = sums
                .iter()
                .zip(&counts)
                .map(|(sum, &count)| sum / count as f64)
                .collect();
            let centre = seasonal.iter().sum::<f64>() / cycle as f64;
            seasonal.iter_mut().for_each(|s| *s -= centre);
            fitted.seasonal = seasonal;
        }

        debug!(
            "Fitted trend: intercept={:.4} slope={:.4} seasonal_terms={}",
            fitted.intercept,
            fitted.slope,
            fitted.seasonal.len()
        );

        Ok(fitted)
    }
}

impl Default for SeasonalTrendForecaster {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Forecaster for SeasonalTrendForecaster {
    fn name(&self) -> &'static str {
        "seasonal-trend"
    }

    fn forecast(
        &self,
        history: &[TimeSeriesPoint],
        horizon: usize,
        unit: PeriodUnit,
    ) -> Result<Vec<ForecastPoint>> {
        let fitted = self.fit(history, unit)?;
        let dates = forecast_dates(history, horizon, unit)?;
        Ok(label_points(dates, history.len(), |t| fitted.value_at(t)))
    }
}
