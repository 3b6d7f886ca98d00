//! Currency preference schema.
//!
//! The currency value is passed through to the API as given; there is no
//! local currency table.

use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use super::validation::{Fields, Parsed, string_min};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CurrencyPreferenceInput {
    /// Preferred currency, for example "INR", "USD" or "EUR"
    pub currency: String,
}

pub fn parse_currency_preference_input(raw: &Value) -> Parsed<CurrencyPreferenceInput> {
    let mut fields = Fields::new(raw)?;
    let currency = fields.required("currency", |v| {
        string_min(v, 1, Some("Currency cannot be empty"))
    });
    fields.finish(|| {
        Some(CurrencyPreferenceInput {
            currency: currency?,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_currency_echoed() {
        let input = parse_currency_preference_input(&json!({ "currency": "EUR" })).unwrap();
        assert_eq!(input.currency, "EUR");
        assert_eq!(serde_json::to_value(&input).unwrap(), json!({ "currency": "EUR" }));
    }

    #[test]
    fn test_currency_required() {
        let errors = parse_currency_preference_input(&json!({})).unwrap_err();
        assert_eq!(errors.get("currency"), Some("Required"));

        let errors = parse_currency_preference_input(&json!({ "currency": "" })).unwrap_err();
        assert_eq!(errors.get("currency"), Some("Currency cannot be empty"));

        let errors = parse_currency_preference_input(&json!({ "currency": 978 })).unwrap_err();
        assert_eq!(errors.get("currency"), Some("Expected string, received number"));
    }
}
