//! Discount curve for best-estimate liability calculations
//!
//! Cash flows are indexed by period starting at 1: the t-th cash flow is
//! discounted by `(1 + rate)^t`.

use crate::error::{AlmError, Result};
use serde::{Deserialize, Serialize};

/// Flat discount curve at a single per-period rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountCurve {
    /// Discount rate per period (annual for the standard report)
    rate: f64,
}

impl DiscountCurve {
    /// Create a flat curve. Rates at or below -100% make `1 + rate` non-positive
    /// and are rejected.
    pub fn single_rate(rate: f64) -> Result<Self> {
        if !rate.is_finite() {
            return Err(AlmError::domain(format!(
                "discount rate must be finite, got {}",
                rate
            )));
        }
        if rate <= -1.0 {
            return Err(AlmError::domain(format!(
                "discount rate must exceed -1, got {}",
                rate
            )));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Discount factor for a cash flow at the end of period `t`
    pub fn discount_factor(&self, t: u32) -> f64 {
        (1.0 + self.rate).powf(-(t as f64))
    }

    /// Present value of the first `periods` cash flows (fewer if the stream is shorter)
    pub fn present_value(&self, cash_flows: &[f64], periods: usize) -> f64 {
        cash_flows
            .iter()
            .take(periods)
            .zip(1u32..)
            .map(|(cf, t)| cf * self.discount_factor(t))
            .sum()
    }
}
