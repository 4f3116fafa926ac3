//! Forecast visualization
//!
//! Plotting is a side effect outside the report itself. The CSV export writes
//! a `Date,<title>,Segment` table that any charting tool can pick up.

use super::persist_atomically;
use crate::error::{AlmError, Result};
use crate::forecast::ForecastPoint;
use log::info;
use std::path::PathBuf;

pub trait SeriesPlot {
    fn plot(&self, series: &[ForecastPoint], title: &str) -> Result<()>;
}

/// Skips plotting entirely
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlot;

impl SeriesPlot for NoPlot {
    fn plot(&self, _series: &[ForecastPoint], _title: &str) -> Result<()> {
        Ok(())
    }
}

/// Exports the series to a CSV file
#[derive(Debug, Clone)]
pub struct CsvPlotExport {
    path: PathBuf,
}

impl CsvPlotExport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeriesPlot for CsvPlotExport {
    fn plot(&self, series: &[ForecastPoint], title: &str) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["Date", title, "Segment"])?;

        for point in series {
            let segment = if point.is_future { "forecast" } else { "fitted" };
            writer.write_record([
                point.date.format("%Y-%m-%d").to_string().as_str(),
                point.predicted_value.to_string().as_str(),
                segment,
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AlmError::io(&self.path, e.into_error()))?;
        persist_atomically(&self.path, &bytes)?;
        info!(
            "Exported '{}' ({} points) to {}",
            title,
            series.len(),
            self.path.display()
        );
        Ok(())
    }
}
