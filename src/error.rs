//! Error types shared by every stage of the report pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or writing an ALM report
#[derive(Debug, Error)]
pub enum AlmError {
    /// Invalid numeric input to a formula (e.g. discount rate at or below -100%)
    #[error("Domain error: {0}")]
    Domain(String),

    /// Empty or malformed series, table or sheet
    #[error("Data error: {0}")]
    Data(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl AlmError {
    pub fn domain(msg: impl Into<String>) -> Self {
        AlmError::Domain(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        AlmError::Data(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AlmError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AlmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_kind() {
        let err = AlmError::domain("discount rate -1 must exceed -1");
        assert!(err.to_string().starts_with("Domain error"));

        let err = AlmError::data("forecast is empty");
        assert_eq!(err.to_string(), "Data error: forecast is empty");
    }

    #[test]
    fn test_io_error_carries_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AlmError::io("/tmp/ALM_model.xlsx", source);
        let msg = err.to_string();
        assert!(msg.contains("/tmp/ALM_model.xlsx"));
        assert!(msg.contains("denied"));
    }
}
