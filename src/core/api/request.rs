//! Request shapes sent to the finance API.

use reqwest::Method;
use serde_json::Value;

/// Ordered query-parameter multimap.
///
/// Keys may repeat; entries are encoded in insertion order, one
/// `key=value` pair per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single entry.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Append one entry per value under the same key.
    pub fn extend<I, V>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        for value in values {
            self.push(key, value);
        }
    }

    /// Append an entry only when a value is present.
    pub fn push_opt(&mut self, key: &str, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All values recorded for a key, in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// URL-encoded form (`a=1&a=2&b=3`).
    pub fn encode(&self) -> String {
        // Encoding a sequence of string pairs cannot fail.
        serde_urlencoded::to_string(&self.0).unwrap_or_default()
    }
}

/// A single outbound call: method, path relative to the API base,
/// query entries and an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: QueryParams::new(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Path plus encoded query string, as it appears on the wire.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.encode())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_keys_keep_order() {
        let mut query = QueryParams::new();
        query.extend("category", ["Food", "Rent"]);
        query.push("type", "expense");
        assert_eq!(query.encode(), "category=Food&category=Rent&type=expense");
        assert_eq!(query.get_all("category"), vec!["Food", "Rent"]);
    }

    #[test]
    fn test_absent_values_are_skipped() {
        let mut query = QueryParams::new();
        query.push_opt("endDate", None::<String>);
        query.push_opt("startDate", Some("2024-01-01"));
        assert_eq!(query.len(), 1);
        assert_eq!(query.encode(), "startDate=2024-01-01");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let mut query = QueryParams::new();
        query.push("paymentMode", "Credit Card");
        query.push("category", "Food & Drinks");
        assert_eq!(
            query.encode(),
            "paymentMode=Credit+Card&category=Food+%26+Drinks"
        );
    }

    #[test]
    fn test_path_and_query() {
        let mut query = QueryParams::new();
        query.push("transactionId", "txn123456789012");
        let request = ApiRequest::delete("/transactions/delete").with_query(query);
        assert_eq!(
            request.path_and_query(),
            "/transactions/delete?transactionId=txn123456789012"
        );
        assert!(request.body.is_none());

        let bare = ApiRequest::get("/currency/get");
        assert_eq!(bare.path_and_query(), "/currency/get");
    }
}
