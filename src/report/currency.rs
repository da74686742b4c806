//! Dollar and percentage rendering for report output.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Round an amount to whole dollars, halves away from zero.
///
/// Non-finite amounts render as zero.
pub fn whole_dollars(amount: f64) -> Decimal {
    let rounded = Decimal::from_f64_retain(amount)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `$12,345` / `-$5,000`.
///
/// # Examples
///
/// ```
/// use rent_vs_buy::report::format_currency;
///
/// assert_eq!(format_currency(12_345.4), "$12,345");
/// assert_eq!(format_currency(-5_000.0), "-$5,000");
/// ```
pub fn format_currency(amount: f64) -> String {
    let dollars = whole_dollars(amount);
    let sign = if dollars.is_sign_negative() { "-" } else { "" };
    let digits = dollars.abs().normalize().to_string();
    format!("{}${}", sign, group_thousands(&digits))
}

/// Like [`format_currency`], but millions collapse to `$1.50M`.
pub fn format_compact(amount: f64) -> String {
    let dollars = whole_dollars(amount);
    if dollars.abs() < dec!(1_000_000) {
        return format_currency(amount);
    }
    let sign = if dollars.is_sign_negative() { "-" } else { "" };
    let millions = (dollars.abs() / dec!(1_000_000))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}${:.2}M", sign, millions)
}

/// Fraction rendered as a percentage: `0.065` becomes `6.5%`.
pub fn format_percent(fraction: f64) -> String {
    let percent = Decimal::from_f64_retain(fraction * 100.0)
        .unwrap_or(Decimal::ZERO)
        .round_dp(4)
        .normalize();
    format!("{}%", percent)
}
