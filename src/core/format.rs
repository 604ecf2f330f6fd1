//! Locale-stable display formatting for currency amounts, quantities,
//! and dates.
//!
//! The renderer's output is only reproducible if these helpers are
//! deterministic for fixed inputs, so nothing here consults the system
//! locale or clock.

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::calc::round_half_up;

/// Display style for a currency: symbol prefix and ISO 4217 minor units.
/// Sorted by code for binary search.
static CURRENCY_STYLES: &[(&str, &str, u32)] = &[
    ("AUD", "A$", 2),
    ("BRL", "R$", 2),
    ("CAD", "CA$", 2),
    ("CHF", "CHF ", 2),
    ("CNY", "CN¥", 2),
    ("DKK", "kr ", 2),
    ("EUR", "€", 2),
    ("GBP", "£", 2),
    ("HKD", "HK$", 2),
    ("INR", "₹", 2),
    ("JPY", "¥", 0),
    ("KRW", "₩", 0),
    ("MXN", "MX$", 2),
    ("NOK", "kr ", 2),
    ("NZD", "NZ$", 2),
    ("PLN", "zł ", 2),
    ("SEK", "kr ", 2),
    ("SGD", "S$", 2),
    ("USD", "$", 2),
    ("ZAR", "R ", 2),
];

fn currency_style(code: &str) -> Option<(&'static str, u32)> {
    CURRENCY_STYLES
        .binary_search_by(|(c, _, _)| (*c).cmp(code))
        .ok()
        .map(|i| (CURRENCY_STYLES[i].1, CURRENCY_STYLES[i].2))
}

/// Format a monetary amount for the given ISO 4217 currency code:
/// symbol prefix, thousands-grouped integer digits, and the currency's
/// minor-unit count of fraction digits (half-up rounded). Unknown codes
/// fall back to `CODE amount` with 2 fraction digits.
///
/// ```
/// use billkit::core::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(1234.5), "USD"), "$1,234.50");
/// assert_eq!(format_currency(dec!(1234.5), "JPY"), "¥1,235");
/// ```
pub fn format_currency(amount: Decimal, currency_code: &str) -> String {
    let (prefix, minor) = match currency_style(currency_code) {
        Some((symbol, minor)) => (symbol.to_string(), minor),
        None => (format!("{currency_code} "), 2),
    };

    let rounded = round_half_up(amount, minor);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = rounded.abs();
    let int_part = abs.trunc().to_i128().unwrap_or_default();
    let grouped = int_part.to_formatted_string(&Locale::en);

    if minor == 0 {
        format!("{sign}{prefix}{grouped}")
    } else {
        let fixed = format!("{:.*}", minor as usize, abs);
        let fraction = fixed.split('.').nth(1).unwrap_or("");
        format!("{sign}{prefix}{grouped}.{fraction}")
    }
}

/// Format a quantity for display, dropping trailing fractional zeros.
pub fn format_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}

/// Format a date as a stable `Mon D, YYYY` string (e.g. `Jun 5, 2024`),
/// independent of system locale.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
