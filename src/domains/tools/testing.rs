//! Test doubles for tool tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::api::{ApiError, ApiRequest, ApiResponse, FinanceApi, UpstreamError};

/// Records every request and answers with a canned outcome.
pub struct RecordingApi {
    requests: Mutex<Vec<ApiRequest>>,
    outcome: Result<Value, UpstreamError>,
}

impl RecordingApi {
    pub fn ok(data: Value) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            outcome: Ok(data),
        }
    }

    pub fn failing(error: UpstreamError) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            outcome: Err(error),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request sent; panics unless exactly one was recorded.
    pub fn single_request(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl FinanceApi for RecordingApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        match &self.outcome {
            Ok(data) => Ok(ApiResponse {
                data: data.clone(),
                status: 200,
                status_text: "OK".to_string(),
            }),
            Err(error) => Err(error.clone().into()),
        }
    }
}
