//! Report runner: forecast, assemble, write, plot
//!
//! Holds the configuration and collaborators for one report. Each step takes
//! the previous step's complete output; any failure aborts the run before the
//! workbook is written.

use crate::config::AlmConfig;
use crate::error::Result;
use crate::forecast::{ForecastPoint, Forecaster};
use crate::output::{NoPlot, SeriesPlot, WorkbookWriter};
use crate::report::{AlmReport, ReportAssembler};
use log::info;

const FORECAST_PLOT_TITLE: &str = "Asset Value Forecast";

/// Orchestrates one ALM report
///
/// # Example
/// ```ignore
/// let runner = ReportRunner::new(AlmConfig::default());
/// let report = runner.run(&XlsxWriter)?;
/// println!("Funding ratio: {:.4}", report.metrics.funding_ratio);
/// ```
pub struct ReportRunner {
    config: AlmConfig,
    forecaster: Box<dyn Forecaster>,
    plot: Box<dyn SeriesPlot>,
}

impl ReportRunner {
    /// Runner using the forecast model selected in the configuration
    pub fn new(config: AlmConfig) -> Self {
        let forecaster = config.forecast_model.build(config.seasonality);
        Self::with_forecaster(config, forecaster)
    }

    pub fn with_forecaster(config: AlmConfig, forecaster: Box<dyn Forecaster>) -> Self {
        Self {
            config,
            forecaster,
            plot: Box::new(NoPlot),
        }
    }

    pub fn with_plot(mut self, plot: Box<dyn SeriesPlot>) -> Self {
        self.plot = plot;
        self
    }

    pub fn config(&self) -> &AlmConfig {
        &self.config
    }

    pub fn forecast(&self) -> Result<Vec<ForecastPoint>> {
        self.config.validate()?;

        let forecast = self.forecaster.forecast(
            &self.config.history,
            self.config.forecast_horizon_periods,
            self.config.period_unit,
        )?;
        info!(
            "Forecast {} {} periods ({} historical) with {}",
            forecast.len(),
            self.config.period_unit,
            self.config.history.len(),
            self.forecaster.name()
        );
        Ok(forecast)
    }

    /// Build the report in memory without plotting or writing anything
    pub fn build_report(&self) -> Result<AlmReport> {
        let forecast = self.forecast()?;
        self.assemble(&forecast)
    }

    /// Full run: forecast, assemble, write the workbook to the configured path, then plot.
    ///
    /// The plot is only produced once the workbook is on disk.
    pub fn run(&self, writer: &dyn WorkbookWriter) -> Result<AlmReport> {
        let forecast = self.forecast()?;
        let report = self.assemble(&forecast)?;
        writer.write_workbook(&self.config.output_path, &report.to_sheets())?;

        self.plot.plot(&forecast, FORECAST_PLOT_TITLE)?;
        Ok(report)
    }

    fn assemble(&self, forecast: &[ForecastPoint]) -> Result<AlmReport> {
        let report = ReportAssembler::from_config(&self.config)
            .assemble(forecast, self.config.expected_periods())?;
        info!(
            "Report assembled: funding ratio {:.4}, duration gap {:.2}, total risk margin {:.2}",
            report.metrics.funding_ratio,
            report.metrics.duration_gap,
            report.metrics.total_risk_margin
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlmError;
    use crate::history::PeriodUnit;
    use crate::history::TimeSeriesPoint;
    use crate::output::{Cell, CsvPlotExport, Sheet, XlsxWriter};
    use crate::report::{
        ASSETS_SHEET, ASSUMPTIONS_SHEET, LIABILITIES_SHEET, METRICS_SHEET, RISK_SHEET,
    };
    use approx::assert_relative_eq;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    /// Captures what would be written
    #[derive(Default)]
    struct RecordingWriter {
        written: RefCell<Vec<(PathBuf, Vec<Sheet>)>>,
    }

    impl WorkbookWriter for RecordingWriter {
        fn write_workbook(&self, path: &Path, sheets: &[Sheet]) -> Result<()> {
            self.written
                .borrow_mut()
                .push((path.to_path_buf(), sheets.to_vec()));
            Ok(())
        }
    }

    /// Returns a forecast one period short of what was asked for
    struct ShortForecaster;

    impl Forecaster for ShortForecaster {
        fn name(&self) -> &'static str {
            "short"
        }

        fn forecast(
            &self,
            history: &[TimeSeriesPoint],
            _horizon: usize,
            _unit: PeriodUnit,
        ) -> Result<Vec<ForecastPoint>> {
            Ok(history
                .iter()
                .map(|p| ForecastPoint {
                    date: p.date,
                    predicted_value: p.value,
                    is_future: false,
                })
                .collect())
        }
    }

    #[test]
    fn test_standard_report_values() {
        let report = ReportRunner::new(AlmConfig::default()).build_report().unwrap();

        let bel = report.best_estimate_liability().unwrap();
        assert!((bel - 426_511.0).abs() <= 1.0, "BEL was {}", bel);

        let margins: Vec<f64> = report.risks.iter().map(|r| r.risk_margin).collect();
        for (margin, expected) in margins.iter().zip([375_000.0, 117_000.0, 96_000.0, 22_000.0]) {
            assert_relative_eq!(*margin, expected, max_relative = 1e-12);
        }
        assert_relative_eq!(report.metrics.total_risk_margin, 610_000.0, max_relative = 1e-12);
        assert_relative_eq!(report.metrics.duration_gap, -2.0);

        let mean_assets = report.assets.iter().map(|a| a.market_value).sum::<f64>() / 24.0;
        assert_relative_eq!(report.metrics.funding_ratio, mean_assets / bel, max_relative = 1e-12);
    }

    #[test]
    fn test_workbook_layout() {
        let writer = RecordingWriter::default();
        ReportRunner::new(AlmConfig::default()).run(&writer).unwrap();

        let written = writer.written.borrow();
        assert_eq!(written.len(), 1);
        let (path, sheets) = &written[0];
        assert_eq!(path, Path::new("ALM_model.xlsx"));

        let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [ASSUMPTIONS_SHEET, ASSETS_SHEET, LIABILITIES_SHEET, RISK_SHEET, METRICS_SHEET]
        );
        assert_eq!(
            names,
            ["Assumptions", "Assets", "Liabilities", "Risk Assessment", "ALM Metrics"]
        );

        let headers: Vec<Vec<&str>> = sheets
            .iter()
            .map(|s| s.headers.iter().map(String::as_str).collect())
            .collect();
        assert_eq!(headers[0], ["Parameter", "Value"]);
        assert_eq!(
            headers[1],
            ["Date", "Market Value", "Expected Return", "Duration", "Credit Quality"]
        );
        assert_eq!(headers[2], ["Date", "Expected Cashflow", "Duration", "Best Estimate"]);
        assert_eq!(
            headers[3],
            ["Risk Type", "Impact", "Probability", "Risk Weight", "Risk Margin"]
        );
        assert_eq!(headers[4], ["Metric", "Value"]);

        let row_counts: Vec<usize> = sheets.iter().map(|s| s.rows.len()).collect();
        assert_eq!(row_counts, [6, 24, 24, 4, 3]);

        // Dates as ISO text, values as numbers
        assert_eq!(sheets[1].rows[0][0], Cell::text("2023-01-31"));
        assert_eq!(sheets[1].rows[12][0], Cell::text("2024-01-31"));
        assert!(matches!(sheets[1].rows[0][1], Cell::Number(_)));
        assert_eq!(sheets[1].rows[0][4], Cell::text("AA"));
        assert_eq!(
            sheets[0].rows[0],
            vec![Cell::text("Initial Assets"), Cell::Number(1_000_000.0)]
        );
    }

    #[test]
    fn test_runs_are_identical() {
        let runner = ReportRunner::new(AlmConfig::default());
        let first = runner.build_report().unwrap();
        let second = runner.build_report().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_sheets(), second.to_sheets());
    }

    #[test]
    fn test_short_forecast_aborts_before_writing() {
        let writer = RecordingWriter::default();
        let runner = ReportRunner::with_forecaster(AlmConfig::default(), Box::new(ShortForecaster));

        let err = runner.run(&writer).unwrap_err();
        assert!(matches!(err, AlmError::Data(_)));
        assert!(writer.written.borrow().is_empty());
    }

    #[test]
    fn test_invalid_config_aborts_before_writing() {
        let mut config = AlmConfig::default();
        config.assumptions.discount_rate = -1.0;
        let writer = RecordingWriter::default();

        let err = ReportRunner::new(config).run(&writer).unwrap_err();
        assert!(matches!(err, AlmError::Domain(_)));
        assert!(writer.written.borrow().is_empty());
    }

    #[test]
    fn test_zero_horizon_reports_history_only() {
        let config = AlmConfig {
            forecast_horizon_periods: 0,
            ..AlmConfig::default()
        };
        let report = ReportRunner::new(config).build_report().unwrap();
        assert_eq!(report.assets.len(), 12);
        assert!(report.assets.iter().all(|a| a.date.format("%Y").to_string() == "2023"));
    }

    #[test]
    fn test_full_run_writes_xlsx() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ALM_model.xlsx");
        let plot_path = dir.path().join("forecast.csv");
        let config = AlmConfig {
            output_path: output.clone(),
            ..AlmConfig::default()
        };

        let report = ReportRunner::new(config)
            .with_plot(Box::new(CsvPlotExport::new(&plot_path)))
            .run(&XlsxWriter)
            .unwrap();

        assert_eq!(report.assets.len(), 24);
        let plot = std::fs::read_to_string(&plot_path).unwrap();
        assert_eq!(plot.lines().count(), 25);

        let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
        assert_eq!(
            workbook.sheet_names(),
            ["Assumptions", "Assets", "Liabilities", "Risk Assessment", "ALM Metrics"]
        );

        let expected = [
            ("Assumptions", vec!["Parameter", "Value"], 6),
            (
                "Assets",
                vec!["Date", "Market Value", "Expected Return", "Duration", "Credit Quality"],
                24,
            ),
            (
                "Liabilities",
                vec!["Date", "Expected Cashflow", "Duration", "Best Estimate"],
                24,
            ),
            (
                "Risk Assessment",
                vec!["Risk Type", "Impact", "Probability", "Risk Weight", "Risk Margin"],
                4,
            ),
            ("ALM Metrics", vec!["Metric", "Value"], 3),
        ];
        for (name, headers, rows) in expected {
            let range = workbook.worksheet_range(name).unwrap();
            let header_row: Vec<String> = range
                .rows()
                .next()
                .unwrap()
                .iter()
                .map(|cell| cell.to_string())
                .collect();
            assert_eq!(header_row, headers, "headers of '{}'", name);
            assert_eq!(range.height(), rows + 1, "rows of '{}'", name);
        }

        let assets = workbook.worksheet_range("Assets").unwrap();
        assert_eq!(assets.get((1, 0)), Some(&Data::String("2023-01-31".to_string())));
        match assets.get((1, 1)) {
            Some(Data::Float(value)) => {
                assert_relative_eq!(*value, report.assets[0].market_value, max_relative = 1e-12)
            }
            other => panic!("market value read back as {:?}", other),
        }
    }

    #[test]
    fn test_failed_assembly_leaves_no_output_files() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ALM_model.xlsx");
        let plot_path = dir.path().join("forecast.csv");
        let mut config = AlmConfig {
            output_path: output.clone(),
            ..AlmConfig::default()
        };
        config.liability_profile.expected_cashflow = 0.0;

        let err = ReportRunner::new(config)
            .with_plot(Box::new(CsvPlotExport::new(&plot_path)))
            .run(&XlsxWriter)
            .unwrap_err();

        assert!(matches!(err, AlmError::Domain(_)));
        assert!(!output.exists());
        assert!(!plot_path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_write_skips_plot() {
        let dir = tempfile::tempdir().unwrap();
        let plot_path = dir.path().join("forecast.csv");
        let config = AlmConfig {
            output_path: dir.path().join("missing").join("ALM_model.xlsx"),
            ..AlmConfig::default()
        };

        let err = ReportRunner::new(config)
            .with_plot(Box::new(CsvPlotExport::new(&plot_path)))
            .run(&XlsxWriter)
            .unwrap_err();

        assert!(matches!(err, AlmError::Io { .. }));
        assert!(!plot_path.exists());
    }
}
