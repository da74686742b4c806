//! Fixed-rate annuity math: level payment and per-payment split.
//!
//! Rates here are nominal annual *percentages* (`6.5` for 6.5%),
//! compounded monthly.

use crate::core::error::{ensure_non_negative, ensure_year_count, ProjectionError};
use serde::{Deserialize, Serialize};

/// Interest and principal components of a single monthly payment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentSplit {
    pub interest: f64,
    pub principal: f64,
}

impl PaymentSplit {
    pub fn total(&self) -> f64 {
        self.interest + self.principal
    }
}

fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

fn payment_count(term_years: u32) -> u32 {
    term_years * 12
}

fn check_inputs(principal: f64, annual_rate_percent: f64, term_years: u32) -> Result<(), ProjectionError> {
    ensure_non_negative("principal", principal)?;
    ensure_non_negative("annual_rate_percent", annual_rate_percent)?;
    ensure_year_count("term_years", term_years)?;
    // (1+r)^n must stay finite for the closed forms below.
    let growth = (1.0 + monthly_rate(annual_rate_percent)).powi(payment_count(term_years) as i32);
    if !growth.is_finite() {
        return Err(ProjectionError::invalid(
            "annual_rate_percent",
            annual_rate_percent,
            "compounds past the floating-point range over this term",
        ));
    }
    Ok(())
}

/// Level monthly payment that retires `principal` over `term_years * 12`
/// payments.
///
/// Uses `P * r * (1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate; a zero
/// rate degrades to `P / n`.
///
/// # Examples
///
/// ```
/// use rent_vs_buy::amortization::monthly_payment;
///
/// let payment = monthly_payment(200_000.0, 4.5, 30).unwrap();
/// assert!((payment - 1013.37).abs() < 0.01);
///
/// assert_eq!(monthly_payment(120_000.0, 0.0, 10).unwrap(), 1_000.0);
/// ```
pub fn monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> Result<f64, ProjectionError> {
    check_inputs(principal, annual_rate_percent, term_years)?;
    Ok(level_payment(principal, monthly_rate(annual_rate_percent), payment_count(term_years)))
}

fn level_payment(principal: f64, r: f64, n: u32) -> f64 {
    if r == 0.0 {
        return principal / f64::from(n);
    }
    let growth = (1.0 + r).powi(n as i32);
    principal * r * growth / (growth - 1.0)
}

/// Outstanding balance after `k` level payments.
fn balance_after(principal: f64, r: f64, payment: f64, k: u32) -> f64 {
    if r == 0.0 {
        return principal - payment * f64::from(k);
    }
    let growth = (1.0 + r).powi(k as i32);
    principal * growth - payment * (growth - 1.0) / r
}

/// Interest/principal split of the 1-indexed payment `payment_index`.
///
/// Interest is the balance before the payment times the monthly rate; the
/// rest of the level payment retires principal. The balance follows the
/// closed-form schedule, so summing `principal` over all payments returns
/// the original loan.
///
/// # Errors
///
/// `InvalidParameter` for a term outside `1..=MAX_YEARS`, negative inputs,
/// a rate that overflows over the term, or an index outside
/// `1..=term_years * 12`.
pub fn payment_breakdown(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
    payment_index: u32,
) -> Result<PaymentSplit, ProjectionError> {
    check_inputs(principal, annual_rate_percent, term_years)?;
    let n = payment_count(term_years);
    if payment_index == 0 || payment_index > n {
        return Err(ProjectionError::invalid(
            "payment_index",
            payment_index,
            "must lie within the loan's payment schedule",
        ));
    }

    let r = monthly_rate(annual_rate_percent);
    let payment = level_payment(principal, r, n);
    let opening = balance_after(principal, r, payment, payment_index - 1);
    let interest = opening * r;
    let split = PaymentSplit {
        interest,
        principal: payment - interest,
    };
    log::trace!(
        "payment {}/{}: balance {:.2}, interest {:.2}, principal {:.2}",
        payment_index,
        n,
        opening,
        split.interest,
        split.principal
    );
    Ok(split)
}
