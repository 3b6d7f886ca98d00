//! Structural validation of untyped tool arguments.
//!
//! Every schema reads its fields through [`Fields`], which records at most
//! one message per top-level field (a later issue on the same field
//! replaces the earlier one) and never panics on malformed input.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use super::decimal::{DecimalRule, parse_decimal};
use rust_decimal::Decimal;

/// Key used for issues that concern the argument object itself.
pub const ROOT_FIELD: &str = "input";

static EMPTY_OBJECT: Lazy<Map<String, Value>> = Lazy::new(Map::new);

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

static DATETIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?Z$").expect("datetime pattern is valid")
});

static MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("month pattern is valid"));

// ============================================================================
// Field error map
// ============================================================================

/// Field name to message, one entry per offending top-level field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// Record an issue, replacing any earlier one for the same field.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{:?}", self.0),
        }
    }
}

impl std::error::Error for FieldErrors {}

/// Outcome of a validation entry point.
pub type Parsed<T> = Result<T, FieldErrors>;

// ============================================================================
// Closed string sets
// ============================================================================

/// A closed set of string literals (an enum on the wire).
pub trait Literal: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    /// `'a' | 'b' | 'c'`
    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|v| format!("'{}'", v.as_str()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

// ============================================================================
// Value parsers
// ============================================================================

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(kind: &str, value: &Value) -> String {
    format!("Expected {}, received {}", kind, type_name(value))
}

/// A string of at least `min` characters.
pub fn string_min(value: &Value, min: usize, message: Option<&str>) -> Result<String, String> {
    let s = value.as_str().ok_or_else(|| expected("string", value))?;
    if s.chars().count() < min {
        return Err(message.map(str::to_string).unwrap_or_else(|| {
            format!("String must contain at least {} character(s)", min)
        }));
    }
    Ok(s.to_string())
}

pub fn literal<T: Literal>(value: &Value) -> Result<T, String> {
    match value {
        Value::String(s) => T::parse(s).ok_or_else(|| {
            format!(
                "Invalid enum value. Expected {}, received '{}'",
                T::expected(),
                s
            )
        }),
        other => Err(format!(
            "Expected {}, received {}",
            T::expected(),
            type_name(other)
        )),
    }
}

pub fn boolean(value: &Value) -> Result<bool, String> {
    value.as_bool().ok_or_else(|| expected("boolean", value))
}

/// Calendar date in `YYYY-MM-DD` form.
pub fn date(value: &Value) -> Result<String, String> {
    let s = value.as_str().ok_or_else(|| expected("string", value))?;
    if DATE_RE.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
        Ok(s.to_string())
    } else {
        Err("Invalid date".to_string())
    }
}

/// UTC timestamp in `YYYY-MM-DDTHH:MM:SS[.fff]Z` form.
pub fn datetime(value: &Value) -> Result<String, String> {
    let s = value.as_str().ok_or_else(|| expected("string", value))?;
    if DATETIME_RE.is_match(s) && DateTime::parse_from_rfc3339(s).is_ok() {
        Ok(s.to_string())
    } else {
        Err("Invalid datetime".to_string())
    }
}

/// Month in `YYYY-MM` form.
pub fn month(value: &Value, message: &str) -> Result<String, String> {
    let s = value.as_str().ok_or_else(|| expected("string", value))?;
    if MONTH_RE.is_match(s) {
        Ok(s.to_string())
    } else {
        Err(message.to_string())
    }
}

/// Integer within `[min, max]`; every failing check is evaluated and the
/// last one reported.
pub fn integer(value: &Value, min: i64, min_message: &str, max: i64) -> Result<i64, String> {
    let n = value
        .as_f64()
        .filter(|_| value.is_number())
        .ok_or_else(|| expected("number", value))?;

    let mut issue = None;
    if n.fract() != 0.0 {
        issue = Some("Expected integer, received float".to_string());
    }
    if n < min as f64 {
        issue = Some(min_message.to_string());
    }
    if n > max as f64 {
        issue = Some(format!("Number must be less than or equal to {}", max));
    }

    match issue {
        Some(message) => Err(message),
        None => Ok(n as i64),
    }
}

/// Array whose items each pass `item`, with at least `min` entries.
///
/// Item issues take precedence over the length issue.
pub fn list<T>(
    value: &Value,
    min: Option<(usize, &str)>,
    item: impl Fn(&Value) -> Result<T, String>,
) -> Result<Vec<T>, String> {
    let items = value.as_array().ok_or_else(|| expected("array", value))?;

    let mut issue = None;
    if let Some((min_len, message)) = min {
        if items.len() < min_len {
            issue = Some(message.to_string());
        }
    }

    let mut parsed = Vec::with_capacity(items.len());
    for raw in items {
        match item(raw) {
            Ok(v) => parsed.push(v),
            Err(message) => issue = Some(message),
        }
    }

    match issue {
        Some(message) => Err(message),
        None => Ok(parsed),
    }
}

// ============================================================================
// Object reader
// ============================================================================

/// Reads fields out of an argument object and accumulates issues.
///
/// Readers return `None` when the field failed; once all fields are read,
/// [`Fields::finish`] yields either the built value or the error map.
pub struct Fields<'a> {
    object: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> Fields<'a> {
    /// Absent or `null` arguments read as an empty object.
    pub fn new(raw: &'a Value) -> Parsed<Self> {
        let object = match raw {
            Value::Object(map) => map,
            Value::Null => &*EMPTY_OBJECT,
            other => {
                return Err(FieldErrors::single(ROOT_FIELD, expected("object", other)));
            }
        };
        Ok(Self {
            object,
            errors: FieldErrors::new(),
        })
    }

    fn record<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(message) => {
                self.errors.insert(field, message);
                None
            }
        }
    }

    /// Field must be present; `null` is handed to `parse`, which rejects it.
    pub fn required<T>(
        &mut self,
        field: &str,
        parse: impl FnOnce(&Value) -> Result<T, String>,
    ) -> Option<T> {
        let result = match self.object.get(field) {
            None => Err("Required".to_string()),
            Some(value) => parse(value),
        };
        self.record(field, result)
    }

    /// Field may be absent; `null` is handed to `parse`.
    pub fn optional<T>(
        &mut self,
        field: &str,
        parse: impl FnOnce(&Value) -> Result<T, String>,
    ) -> Option<Option<T>> {
        let result = match self.object.get(field) {
            None => Ok(None),
            Some(value) => parse(value).map(Some),
        };
        self.record(field, result)
    }

    /// Field may be absent or `null`.
    pub fn nullish<T>(
        &mut self,
        field: &str,
        parse: impl FnOnce(&Value) -> Result<T, String>,
    ) -> Option<Option<T>> {
        let result = match self.object.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => parse(value).map(Some),
        };
        self.record(field, result)
    }

    /// Field may be absent, in which case `default` is used.
    pub fn defaulted<T>(
        &mut self,
        field: &str,
        default: T,
        parse: impl FnOnce(&Value) -> Result<T, String>,
    ) -> Option<T> {
        self.optional(field, parse).map(|v| v.unwrap_or(default))
    }

    /// Required decimal checked against `rule`.
    pub fn decimal(&mut self, field: &str, rule: DecimalRule) -> Option<Decimal> {
        self.required(field, |v| parse_decimal(v, rule))
    }

    /// Record an issue that no single reader produced.
    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field, message);
    }

    /// The built value when no issue was recorded.
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Parsed<T> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        build().ok_or_else(|| FieldErrors::single(ROOT_FIELD, "Invalid input"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Color {
        Red,
        Blue,
    }

    impl Literal for Color {
        const ALL: &'static [Self] = &[Self::Red, Self::Blue];

        fn as_str(&self) -> &'static str {
            match self {
                Self::Red => "red",
                Self::Blue => "blue",
            }
        }
    }

    #[test]
    fn test_missing_field_is_required() {
        let raw = json!({});
        let mut fields = Fields::new(&raw).unwrap();
        assert!(fields.required("name", |v| string_min(v, 1, None)).is_none());
        let errors = fields.finish(|| Some(())).unwrap_err();
        assert_eq!(errors.get("name"), Some("Required"));
    }

    #[test]
    fn test_null_arguments_read_as_empty_object() {
        let raw = Value::Null;
        let mut fields = Fields::new(&raw).unwrap();
        let value = fields.optional("name", |v| string_min(v, 1, None)).unwrap();
        assert!(value.is_none());
        assert!(fields.finish(|| Some(())).is_ok());
    }

    #[test]
    fn test_non_object_arguments_rejected() {
        let raw = json!(["a"]);
        let errors = Fields::new(&raw).err().unwrap();
        assert_eq!(errors.get(ROOT_FIELD), Some("Expected object, received array"));
    }

    #[test]
    fn test_string_min_messages() {
        assert_eq!(
            string_min(&json!("abc"), 5, None).unwrap_err(),
            "String must contain at least 5 character(s)"
        );
        assert_eq!(
            string_min(&json!(""), 1, Some("Please select a category")).unwrap_err(),
            "Please select a category"
        );
        assert_eq!(
            string_min(&json!(3), 1, None).unwrap_err(),
            "Expected string, received number"
        );
    }

    #[test]
    fn test_literal_messages() {
        assert_eq!(literal::<Color>(&json!("red")).unwrap(), Color::Red);
        assert_eq!(
            literal::<Color>(&json!("green")).unwrap_err(),
            "Invalid enum value. Expected 'red' | 'blue', received 'green'"
        );
        assert_eq!(
            literal::<Color>(&json!(1)).unwrap_err(),
            "Expected 'red' | 'blue', received number"
        );
    }

    #[test]
    fn test_date_validation() {
        assert!(date(&json!("2024-02-29")).is_ok());
        assert_eq!(date(&json!("2023-02-29")).unwrap_err(), "Invalid date");
        assert_eq!(date(&json!("2024-1-1")).unwrap_err(), "Invalid date");
        assert_eq!(
            date(&json!("2024-01-01T00:00:00Z")).unwrap_err(),
            "Invalid date"
        );
    }

    #[test]
    fn test_datetime_validation() {
        assert!(datetime(&json!("2024-01-01T00:00:00Z")).is_ok());
        assert!(datetime(&json!("2024-01-01T10:30:00.123Z")).is_ok());
        assert_eq!(
            datetime(&json!("2024-01-01T00:00:00+02:00")).unwrap_err(),
            "Invalid datetime"
        );
        assert_eq!(datetime(&json!("2024-01-01")).unwrap_err(), "Invalid datetime");
    }

    #[test]
    fn test_month_validation() {
        assert!(month(&json!("2024-12"), "bad").is_ok());
        assert_eq!(month(&json!("2024-12-01"), "bad").unwrap_err(), "bad");
        assert_eq!(month(&json!("24-12"), "bad").unwrap_err(), "bad");
    }

    #[test]
    fn test_integer_checks_report_last_issue() {
        assert_eq!(integer(&json!(3), 1, "too small", 500).unwrap(), 3);
        assert_eq!(integer(&json!(3.0), 1, "too small", 500).unwrap(), 3);
        assert_eq!(
            integer(&json!(2.5), 1, "too small", 500).unwrap_err(),
            "Expected integer, received float"
        );
        assert_eq!(
            integer(&json!(0.5), 1, "too small", 500).unwrap_err(),
            "too small"
        );
        assert_eq!(
            integer(&json!(501), 1, "too small", 500).unwrap_err(),
            "Number must be less than or equal to 500"
        );
        assert_eq!(
            integer(&json!("3"), 1, "too small", 500).unwrap_err(),
            "Expected number, received string"
        );
    }

    #[test]
    fn test_list_prefers_item_issue_over_length() {
        let parse = |v: &Value| string_min(v, 1, Some("empty"));
        assert_eq!(
            list(&json!([]), Some((1, "need one")), parse).unwrap_err(),
            "need one"
        );
        assert_eq!(
            list(&json!(["a", ""]), Some((1, "need one")), parse).unwrap_err(),
            "empty"
        );
        assert_eq!(
            list(&json!(["a", "b"]), Some((1, "need one")), parse).unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_nullish_accepts_null() {
        let raw = json!({ "note": null });
        let mut fields = Fields::new(&raw).unwrap();
        let note = fields.nullish("note", |v| string_min(v, 0, None)).unwrap();
        assert!(note.is_none());

        let optional = fields.optional("note", |v| string_min(v, 0, None));
        assert!(optional.is_none());
        let errors = fields.finish(|| Some(())).unwrap_err();
        assert!(errors.contains("note"));
    }

    #[test]
    fn test_later_issue_replaces_earlier_for_same_field() {
        let raw = json!({});
        let mut fields = Fields::new(&raw).unwrap();
        fields.reject("amount", "first");
        fields.reject("amount", "second");
        let errors = fields.finish(|| Some(())).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("amount"), Some("second"));
    }

    #[test]
    fn test_field_errors_display_as_json() {
        let mut errors = FieldErrors::new();
        errors.insert("amount", "Amount must be greater than zero");
        assert_eq!(
            errors.to_string(),
            r#"{"amount":"Amount must be greater than zero"}"#
        );
    }
}
