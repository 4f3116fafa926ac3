//! Historical asset value series and date sequence validation

mod calendar;
pub mod loader;

pub use calendar::{is_month_end, PeriodUnit};
pub use loader::{load_history, load_history_from_reader};

use crate::error::{AlmError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observation of a periodic value series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Month-end asset values for 2023, used when no history is configured
pub fn default_history() -> Vec<TimeSeriesPoint> {
    const VALUES: [f64; 12] = [
        1_000_000.0, 1_020_000.0, 1_040_000.0, 1_065_000.0,
        1_080_000.0, 1_100_000.0, 1_120_000.0, 1_140_000.0,
        1_160_000.0, 1_180_000.0, 1_200_000.0, 1_220_000.0,
    ];

    let Some(anchor) = NaiveDate::from_ymd_opt(2023, 1, 31) else {
        return Vec::new();
    };
    VALUES
        .iter()
        .enumerate()
        .filter_map(|(i, &value)| {
            PeriodUnit::Month
                .nth_after(anchor, i as u32)
                .map(|date| TimeSeriesPoint::new(date, value))
        })
        .collect()
}

/// Check that a series is non-empty, finite, and has exactly one point per period
/// counted from its first date
pub fn validate_series(points: &[TimeSeriesPoint], unit: PeriodUnit) -> Result<()> {
    let first = points
        .first()
        .ok_or_else(|| AlmError::data("history series is empty"))?;

    for (i, point) in points.iter().enumerate() {
        if !point.value.is_finite() {
            return Err(AlmError::data(format!(
                "history value at {} is not finite ({})",
                point.date, point.value
            )));
        }

        let expected = unit.nth_after(first.date, i as u32).ok_or_else(|| {
            AlmError::data(format!("history date out of range at position {}", i))
        })?;
        if point.date != expected {
            return Err(AlmError::data(format!(
                "history date {} at position {} breaks the {} sequence (expected {})",
                point.date, i, unit, expected
            )));
        }
    }

    Ok(())
}
