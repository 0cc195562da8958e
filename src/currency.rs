//! Formats amounts of money as Brazilian Real for display.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};

use crate::Error;

/// The prefix shown before every formatted amount.
pub const CURRENCY_SYMBOL: &str = "R$";

/// numfmt switches to scientific notation from this magnitude on.
const POSITIONAL_NOTATION_LIMIT: i64 = 1_000_000_000_000;

/// Format `amount` as Brazilian Real, e.g. `5000.0` becomes `"R$ 5.000,00"`.
///
/// The amount is rounded to two decimal places, rounding half away from zero.
/// Negative amounts get a leading minus sign, e.g. `"-R$ 12,50"`.
///
/// # Errors
///
/// Returns [Error::InvalidAmount] if `amount` is NaN or infinite.
pub fn format_currency(amount: f64) -> Result<String, Error> {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();
    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    if !amount.is_finite() {
        return Err(Error::InvalidAmount(amount));
    }

    let Some(rounded) = Decimal::from_f64(amount)
        .map(|decimal| decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    else {
        // Past the range of `Decimal` every f64 is a whole number, so the
        // standard formatter prints its digits exactly.
        return Ok(format_positional(
            amount.is_sign_negative(),
            &format!("{:.2}", amount.abs()),
        ));
    };

    if rounded.is_zero() {
        // numfmt renders zero as "0", so we must specify the formatted string for zero
        return Ok(format!("{CURRENCY_SYMBOL} 0,00"));
    }

    if rounded.abs() >= Decimal::from(POSITIONAL_NOTATION_LIMIT) {
        return Ok(format_positional(
            rounded.is_sign_negative(),
            &format!("{:.2}", rounded.abs()),
        ));
    }

    let formatter = if rounded.is_sign_negative() {
        NEGATIVE_FMT.get_or_init(|| real_formatter("-R$ "))
    } else {
        POSITIVE_FMT.get_or_init(|| real_formatter("R$ "))
    };

    let value = rounded.abs().to_f64().ok_or(Error::InvalidAmount(amount))?;
    let mut formatted_string = formatter.fmt_string(value);

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12,50" is rendered as "12,5" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b',' {
        formatted_string.push('0');
    }

    Ok(formatted_string)
}

fn real_formatter(prefix: &str) -> Formatter {
    // Both the prefix and the separator are within numfmt's limits.
    Formatter::currency(prefix)
        .and_then(|formatter| formatter.separator('.'))
        .map(|formatter| formatter.comma(true).precision(Precision::Decimals(2)))
        .unwrap_or_default()
}

/// Lay out `digits`, formatted as `"<integer>.<two digits>"`, without going
/// through numfmt.
fn format_positional(is_negative: bool, digits: &str) -> String {
    let (integer_part, fraction_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let groups: Vec<&str> = integer_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .filter_map(|group| std::str::from_utf8(group).ok())
        .collect();

    let sign = if is_negative { "-" } else { "" };

    format!("{sign}{CURRENCY_SYMBOL} {},{fraction_part}", groups.join("."))
}
