//! Price and percentage strings

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::{Currency, EUR, GBP, INR, USD};

use crate::fixtures::FixtureError;

/// Parse price string (e.g., "15.00 INR") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal number, or if the currency
/// code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "INR" => INR,
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

/// Parse percentage string (e.g., "8%" or "0.08") into a `Percentage`
///
/// # Errors
///
/// Returns an error if the string is not a number, with or without a `%` suffix.
pub fn parse_percentage(s: &str) -> Result<Percentage, FixtureError> {
    let trimmed = s.trim();

    let invalid = || FixtureError::InvalidPercentage(s.to_string());

    if let Some(percent_str) = trimmed.strip_suffix('%') {
        let points = percent_str
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| invalid())?;

        let value = points.checked_div(Decimal::ONE_HUNDRED).ok_or_else(invalid)?;

        Ok(Percentage::from(value))
    } else {
        let value = trimmed.parse::<Decimal>().map_err(|_err| invalid())?;

        Ok(Percentage::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_reads_rupees_into_paise() -> Result<(), FixtureError> {
        assert_eq!(parse_price("15.00 INR")?, (1500, INR));
        assert_eq!(parse_price("7.99 INR")?, (799, INR));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_missing_currency() {
        let result = parse_price("15.00");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_non_numeric_amount() {
        let result = parse_price("fifteen INR");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_negative_amount() {
        let result = parse_price("-10.00 INR");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(price)) if price == "-10.00 INR"));
    }

    #[test]
    fn parse_price_accepts_free_items() -> Result<(), FixtureError> {
        assert_eq!(parse_price("0.00 INR")?, (0, INR));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_percentage_accepts_both_formats() -> Result<(), FixtureError> {
        assert_eq!(parse_percentage("8%")?, Percentage::from(0.08));
        assert_eq!(parse_percentage(" 10 % ")?, Percentage::from(0.1));
        assert_eq!(parse_percentage("0.08")?, Percentage::from(0.08));

        Ok(())
    }

    #[test]
    fn parse_percentage_rejects_invalid_format() {
        let result = parse_percentage("ten percent");

        assert!(matches!(result, Err(FixtureError::InvalidPercentage(_))));
    }

    #[test]
    fn parse_percentage_rejects_non_finite_values() {
        assert!(matches!(parse_percentage("NaN%"), Err(FixtureError::InvalidPercentage(_))));
        assert!(matches!(parse_percentage("inf"), Err(FixtureError::InvalidPercentage(_))));
    }

    #[test]
    fn parse_percentage_is_exact() -> Result<(), FixtureError> {
        assert_eq!(parse_percentage("8%")?, Percentage::from(Decimal::new(8, 2)));
        assert_eq!(parse_percentage("12.5%")?, Percentage::from(Decimal::new(125, 3)));

        Ok(())
    }
}
