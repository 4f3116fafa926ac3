//! Load historical asset values from CSV
//!
//! Expected columns: `date,value` (also accepted: `Date`/`ds`, `Value`/`y`),
//! dates in ISO format.

use super::TimeSeriesPoint;
use crate::error::{AlmError, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::fs::File;
use std::path::Path;

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(alias = "Date", alias = "ds")]
    date: NaiveDate,
    #[serde(alias = "Value", alias = "y")]
    value: f64,
}

impl From<CsvRow> for TimeSeriesPoint {
    fn from(row: CsvRow) -> Self {
        TimeSeriesPoint::new(row.date, row.value)
    }
}

/// Load a history series from a CSV file
pub fn load_history<P: AsRef<Path>>(path: P) -> Result<Vec<TimeSeriesPoint>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AlmError::io(path, e))?;
    let points = load_history_from_reader(file)?;
    debug!("Loaded {} history points from {}", points.len(), path.display());
    Ok(points)
}

/// Load a history series from any reader (e.g. string buffer, stdin)
pub fn load_history_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<TimeSeriesPoint>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut points = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        points.push(row.into());
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_reader() {
        let data = "date,value\n2023-01-31,1000000\n2023-02-28, 1020000.5\n";
        let points = load_history_from_reader(data.as_bytes()).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2023, 1, 31).unwrap());
        assert_eq!(points[1].value, 1_020_000.5);
    }

    #[test]
    fn test_prophet_style_headers() {
        let data = "ds,y\n2023-01-31,5\n";
        let points = load_history_from_reader(data.as_bytes()).unwrap();
        assert_eq!(points[0].value, 5.0);
    }

    #[test]
    fn test_missing_value_is_csv_error() {
        let data = "date,value\n2023-01-31,\n";
        let err = load_history_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AlmError::Csv(_)));
    }

    #[test]
    fn test_bad_date_is_csv_error() {
        let data = "date,value\n31/01/2023,1\n";
        assert!(load_history_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Date,Value").unwrap();
        writeln!(file, "2023-01-31,1").unwrap();
        writeln!(file, "2023-02-28,2").unwrap();

        let points = load_history(file.path()).unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_history("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, AlmError::Io { .. }));
    }
}
