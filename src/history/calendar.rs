//! Period arithmetic for forecast date sequences

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of one period in a date sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    #[default]
    Month,
    Quarter,
    Year,
}

impl PeriodUnit {
    pub fn months_per_period(self) -> u32 {
        match self {
            PeriodUnit::Month => 1,
            PeriodUnit::Quarter => 3,
            PeriodUnit::Year => 12,
        }
    }

    /// Number of periods in one seasonal (yearly) cycle
    pub fn season_length(self) -> usize {
        match self {
            PeriodUnit::Month => 12,
            PeriodUnit::Quarter => 4,
            PeriodUnit::Year => 1,
        }
    }

    /// Date `n` periods after `anchor`.
    ///
    /// Month-end anchors stay on month ends (2023-01-31 -> 2023-02-28 -> 2023-03-31),
    /// other anchors keep their day of month, clamped to the month length.
    /// Always stepping from the anchor avoids drift from repeated clamping.
    pub fn nth_after(self, anchor: NaiveDate, n: u32) -> Option<NaiveDate> {
        let months = Months::new(self.months_per_period().checked_mul(n)?);
        if is_month_end(anchor) {
            let first = anchor.with_day(1)?.checked_add_months(months)?;
            last_day_of_month(first)
        } else {
            anchor.checked_add_months(months)
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PeriodUnit::Month => "monthly",
            PeriodUnit::Quarter => "quarterly",
            PeriodUnit::Year => "yearly",
        };
        f.write_str(name)
    }
}

pub fn is_month_end(date: NaiveDate) -> bool {
    date.succ_opt().map_or(true, |next| next.month() != date.month())
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    first.checked_add_months(Months::new(1))?.pred_opt()
}
