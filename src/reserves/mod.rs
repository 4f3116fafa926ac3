//! Actuarial calculator: best-estimate liability and risk margins
//!
//! Both functions are pure. `calculate_bel` validates its discount rate;
//! `calculate_risk_margin` performs no validation and leaves input sanity to
//! the caller.

mod discount;

pub use discount::DiscountCurve;

use crate::error::Result;

/// Best Estimate Liability: present value of the first `periods` cash flows.
///
/// The t-th cash flow (1-indexed) is discounted by `(1 + discount_rate)^t`.
/// Extra cash flows beyond `periods` are ignored; `periods == 0` gives zero.
///
/// # Errors
/// `AlmError::Domain` when `discount_rate <= -1` or is not finite.
pub fn calculate_bel(cash_flows: &[f64], discount_rate: f64, periods: usize) -> Result<f64> {
    let curve = DiscountCurve::single_rate(discount_rate)?;
    Ok(curve.present_value(cash_flows, periods))
}

/// Risk margin for one risk category: impact x probability x risk weight
pub fn calculate_risk_margin(impact: f64, probability: f64, risk_weight: f64) -> f64 {
    impact * probability * risk_weight
}
