use crate::core::errors::SdkError;
use crate::core::kernel::rest::RestClient;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub endpoint: String,
    pub body: Value,
}

impl RecordedRequest {
    pub fn method(&self) -> &str {
        self.body["method"].as_str().unwrap_or_default()
    }

    pub fn params(&self) -> &Value {
        &self.body["params"]
    }
}

/// In-memory transport answering by JSON-RPC method name
#[derive(Debug, Clone, Default)]
pub struct MockRest {
    responses: Arc<Mutex<HashMap<String, Value>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockRest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the full response body returned for `method`
    pub fn respond(self, method: &str, body: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(method.to_string(), body);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RestClient for MockRest {
    async fn post(&self, endpoint: &str, body: &Value) -> Result<Value, SdkError> {
        let request = RecordedRequest {
            endpoint: endpoint.to_string(),
            body: body.clone(),
        };
        let method = request.method().to_string();
        self.requests.lock().unwrap().push(request);

        self.responses
            .lock()
            .unwrap()
            .get(&method)
            .cloned()
            .ok_or_else(|| SdkError::NetworkError(format!("no mock response for {}", method)))
    }

    fn base_url(&self) -> &str {
        "http://mock"
    }
}
