use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{IncomeError, IncomeResult};

/// Converts a host currency float into an exact decimal.
///
/// The float is printed with `frac_digits` places first, so a value the host
/// already rounded to the locale's currency precision comes back exactly,
/// without its binary representation error.
pub fn currency_to_decimal(value: f64, frac_digits: u32) -> IncomeResult<Decimal> {
    if !value.is_finite() {
        return Err(IncomeError::invalid_amount(value, "not a finite number"));
    }
    let printed = format!("{:.*}", frac_digits as usize, value);
    Decimal::from_str(&printed).map_err(|e| IncomeError::invalid_amount(printed, e))
}

/// Parses a user-entered currency string.
///
/// Accepts surrounding whitespace, a leading `$` and `,` thousands
/// separators. An empty string means "no value" and yields `None`.
pub fn parse_currency(input: &str) -> IncomeResult<Option<Decimal>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest);
    let digits: String = rest.chars().filter(|c| *c != ',').collect();
    let num = Decimal::from_str(&digits).map_err(|e| IncomeError::invalid_amount(input, e))?;
    Ok(Some(if negative { -num } else { num }))
}
