//! Money amounts.
//!
//! Amounts arrive as JSON strings or numbers and become [`Decimal`]s
//! without passing through binary floating point: numbers are converted
//! from their textual JSON form.
//!
//! A [`Decimal`] holds 28 significant digits and at most 28 fractional
//! digits. Well-formed numbers beyond that are reported as out of range
//! rather than rounded.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use schemars::{Schema, SchemaGenerator, json_schema};
use serde_json::Value;

/// Message for input that is not a number at all.
pub const INVALID_INPUT: &str = "Invalid input";

/// Message for a well-formed number that a [`Decimal`] cannot hold exactly.
pub const OUT_OF_RANGE: &str = "Number is outside the supported decimal range";

static NUMERIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?\d+(\.\d+)?([eE][+-]?\d+)?$").expect("numeric pattern is valid")
});

/// Sign constraint applied after a value has been read as a decimal.
#[derive(Debug, Clone, Copy)]
pub struct DecimalRule {
    /// Accept zero (`>= 0`) instead of requiring `> 0`.
    pub allow_zero: bool,
    /// Message reported when the sign check fails.
    pub message: &'static str,
}

impl DecimalRule {
    /// Strictly positive.
    pub const fn positive(message: &'static str) -> Self {
        Self {
            allow_zero: false,
            message,
        }
    }

    /// Zero or more.
    pub const fn non_negative(message: &'static str) -> Self {
        Self {
            allow_zero: true,
            message,
        }
    }

    fn accepts(&self, value: Decimal) -> bool {
        if self.allow_zero {
            value >= Decimal::ZERO
        } else {
            value > Decimal::ZERO
        }
    }
}

/// Read a decimal from its textual form (plain or exponent notation).
///
/// The text is checked against the plain numeric grammar first, so digit
/// separators and other extensions of the underlying parser are refused.
pub fn decimal_from_str(s: &str) -> Result<Decimal, &'static str> {
    if !NUMERIC_RE.is_match(s) {
        return Err(INVALID_INPUT);
    }
    Decimal::from_str_exact(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| OUT_OF_RANGE)
}

/// Coerce a JSON value into a decimal, then apply the sign check.
///
/// Non-numeric input reports `Invalid input`, an unrepresentable number
/// reports the range message, and a failed sign check reports the rule's
/// message.
pub fn parse_decimal(value: &Value, rule: DecimalRule) -> Result<Decimal, String> {
    let parsed = match value {
        Value::String(s) => decimal_from_str(s),
        Value::Number(n) => decimal_from_str(&n.to_string()),
        _ => Err(INVALID_INPUT),
    }
    .map_err(str::to_string)?;

    if rule.accepts(parsed) {
        Ok(parsed)
    } else {
        Err(rule.message.to_string())
    }
}

/// Advertised schema for an amount: a decimal string or a JSON number.
pub fn amount_schema(_: &mut SchemaGenerator) -> Schema {
    json_schema!({ "type": ["string", "number"] })
}

/// Advertised schema for a map of category names to amounts.
pub fn amount_map_schema(generator: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "object",
        "additionalProperties": amount_schema(generator)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    const POSITIVE: DecimalRule = DecimalRule::positive("Amount must be greater than zero");
    const NON_NEGATIVE: DecimalRule = DecimalRule::non_negative("Budget has to be more than zero");

    #[test]
    fn test_string_amount_is_exact() {
        let amount = parse_decimal(&json!("10.005"), POSITIVE).unwrap();
        assert_eq!(amount, Decimal::from_str("10.005").unwrap());
        assert_eq!(amount.to_string(), "10.005");
    }

    #[test]
    fn test_number_amount_uses_textual_form() {
        let amount = parse_decimal(&json!(0.1), POSITIVE).unwrap();
        assert_eq!(amount.to_string(), "0.1");

        let amount = parse_decimal(&json!(10.005), POSITIVE).unwrap();
        assert_eq!(amount.to_string(), "10.005");

        let amount = parse_decimal(&json!(250), POSITIVE).unwrap();
        assert_eq!(amount, Decimal::from(250));
    }

    #[test]
    fn test_exponent_notation() {
        let amount = parse_decimal(&json!("1.5e3"), POSITIVE).unwrap();
        assert_eq!(amount, Decimal::from(1500));
    }

    #[test]
    fn test_zero_and_negative_rejected_when_strict() {
        assert_eq!(
            parse_decimal(&json!(0), POSITIVE).unwrap_err(),
            "Amount must be greater than zero"
        );
        assert_eq!(
            parse_decimal(&json!("-5"), POSITIVE).unwrap_err(),
            "Amount must be greater than zero"
        );
    }

    #[test]
    fn test_zero_allowed_when_requested() {
        assert_eq!(parse_decimal(&json!("0"), NON_NEGATIVE).unwrap(), Decimal::ZERO);
        assert_eq!(
            parse_decimal(&json!(-1), NON_NEGATIVE).unwrap_err(),
            "Budget has to be more than zero"
        );
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert_eq!(parse_decimal(&json!("abc"), POSITIVE).unwrap_err(), "Invalid input");
        assert_eq!(parse_decimal(&json!(""), POSITIVE).unwrap_err(), "Invalid input");
        assert_eq!(parse_decimal(&json!(true), POSITIVE).unwrap_err(), "Invalid input");
        assert_eq!(parse_decimal(&json!(null), POSITIVE).unwrap_err(), "Invalid input");
        assert_eq!(parse_decimal(&json!([1]), POSITIVE).unwrap_err(), "Invalid input");
    }

    #[test]
    fn test_digit_separators_rejected() {
        assert_eq!(parse_decimal(&json!("1_000"), POSITIVE).unwrap_err(), "Invalid input");
        assert_eq!(parse_decimal(&json!("1 000"), POSITIVE).unwrap_err(), "Invalid input");
        assert_eq!(parse_decimal(&json!("1e"), POSITIVE).unwrap_err(), "Invalid input");
        assert_eq!(parse_decimal(&json!("0x10"), POSITIVE).unwrap_err(), "Invalid input");
    }

    #[test]
    fn test_unrepresentable_numbers_report_range() {
        for value in [
            json!("1e30"),
            json!(1e30),
            json!("79228162514264337593543950336"),
            json!("0.00000000000000000000000000001"),
        ] {
            assert_eq!(
                parse_decimal(&value, POSITIVE).unwrap_err(),
                OUT_OF_RANGE,
                "{}",
                value
            );
        }
    }

    #[test]
    fn test_largest_decimal_accepted() {
        let max = parse_decimal(&json!("79228162514264337593543950335"), POSITIVE).unwrap();
        assert_eq!(max, Decimal::MAX);
        assert_eq!(
            parse_decimal(&json!("+2.50"), POSITIVE).unwrap(),
            Decimal::from_str("2.5").unwrap()
        );
    }

    #[test]
    fn test_amount_schema_allows_strings_and_numbers() {
        let mut generator = SchemaGenerator::default();
        let schema = amount_schema(&mut generator);
        assert_eq!(schema.get("type"), Some(&json!(["string", "number"])));

        let map = amount_map_schema(&mut generator);
        assert_eq!(
            map.get("additionalProperties"),
            Some(&json!({ "type": ["string", "number"] }))
        );
    }
}
