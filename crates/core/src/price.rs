//! Currency string parsing and formatting.
//!
//! Catalog prices are authored as localized display strings ("$1.250.000",
//! es-AR convention: `$` prefix, `.` as the thousands separator, `,` as the
//! decimal separator). All arithmetic happens on [`Decimal`] values obtained
//! through [`parse_amount`]; [`format_amount`] converts back for display.
//!
//! Parsing is deliberately fail-soft: a malformed price contributes zero to
//! any total instead of propagating an error. This keeps every pricing
//! computation a total function, at the cost of silently under-counting when
//! catalog data is bad. Known precision hazard - do not mask it further
//! downstream.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Parse a localized price string into a numeric amount.
///
/// Strips the `$` symbol and `.` grouping separators, then converts a decimal
/// comma to a decimal point. Unparseable input yields `Decimal::ZERO`.
///
/// ```
/// use nordic_home_core::price::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("$1.250.000"), Decimal::from(1_250_000));
/// assert_eq!(parse_amount("no es un precio"), Decimal::ZERO);
/// ```
#[must_use]
pub fn parse_amount(display: &str) -> Decimal {
    let cleaned: String = display
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    Decimal::from_str(cleaned.trim()).unwrap_or(Decimal::ZERO)
}

/// Format a numeric amount as an es-AR price string.
///
/// Rounds half-away-from-zero to a whole number, groups digits with `.` every
/// three, and prefixes `$`. Cents are never displayed.
///
/// Not a strict inverse of [`parse_amount`]: fractional amounts lose their
/// cents here, so round-tripping is only idempotent after the first rounding.
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0);

    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
