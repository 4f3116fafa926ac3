//! ALM report tables and their assembly
//!
//! The report has five logical tables, written to the workbook in this order:
//! 1. **Assumptions**: the six economic parameters
//! 2. **Assets**: forecast market values with the asset profile attached
//! 3. **Liabilities**: expected cash flow, duration and the broadcast BEL per period
//! 4. **Risk Assessment**: one row per risk category with its margin
//! 5. **ALM Metrics**: funding ratio, duration gap, total risk margin

mod assembler;
mod metrics;
mod sheets;
mod tables;

pub use assembler::{validate_forecast, ReportAssembler};
pub use metrics::{mean, AlmMetrics};
pub use sheets::{ASSETS_SHEET, ASSUMPTIONS_SHEET, LIABILITIES_SHEET, METRICS_SHEET, RISK_SHEET};
pub use tables::{AlmReport, AssetRecord, LiabilityRecord, MetricRecord, RiskRecord};
