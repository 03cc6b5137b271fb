use crate::core::errors::SdkError;
use crate::core::kernel::rest::RestClient;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{instrument, trace};

pub const JSONRPC_VERSION: &str = "2.0";

/// Path of the application RPC under the base URL
pub const APPLICATION_RPC_PATH: &str = "/rpc";

/// Which server a JSON-RPC call is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcEndpoint {
    /// Token service, `<base_url>/rpc`
    Application,
    /// Chain node, `<base_url>` itself
    Node,
}

impl RpcEndpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Application => APPLICATION_RPC_PATH,
            Self::Node => "",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a, P: Serialize> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: P,
    pub id: u64,
}

impl<'a, P: Serialize> RpcRequest<'a, P> {
    pub fn new(method: &'a str, params: P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            id: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

impl RpcResponse {
    /// Unwrap the envelope: a present `error` wins over any `result`
    pub fn into_result(self) -> Result<Value, SdkError> {
        match self.error {
            Some(error) => Err(SdkError::RpcError {
                code: error.code,
                message: error.message,
            }),
            None => Ok(self.result),
        }
    }
}

/// JSON-RPC 2.0 client layered over a `RestClient`
#[derive(Debug, Clone)]
pub struct RpcClient<R: RestClient> {
    rest: R,
}

impl<R: RestClient> RpcClient<R> {
    pub fn new(rest: R) -> Self {
        Self { rest }
    }

    pub fn rest(&self) -> &R {
        &self.rest
    }

    /// Perform one call and return the raw `result` payload
    #[instrument(skip(self, params), fields(endpoint = ?endpoint, method = %method))]
    pub async fn call<P: Serialize + Send + Sync>(
        &self,
        endpoint: RpcEndpoint,
        method: &str,
        params: P,
    ) -> Result<Value, SdkError> {
        let request = RpcRequest::new(method, params);
        let body = serde_json::to_value(&request).map_err(|e| {
            SdkError::SerializationError(format!("Failed to serialize {} request: {}", method, e))
        })?;

        let raw = self.rest.post(endpoint.path(), &body).await?;
        trace!("Raw {} response: {}", method, raw);

        let response: RpcResponse = serde_json::from_value(raw).map_err(|e| {
            SdkError::DeserializationError(format!("Malformed JSON-RPC envelope: {}", e))
        })?;

        response.into_result()
    }

    /// Perform one call and decode `result` into `T`
    pub async fn call_json<T: DeserializeOwned, P: Serialize + Send + Sync>(
        &self,
        endpoint: RpcEndpoint,
        method: &str,
        params: P,
    ) -> Result<T, SdkError> {
        let result = self.call(endpoint, method, params).await?;
        serde_json::from_value(result).map_err(|e| {
            SdkError::DeserializationError(format!("Failed to decode {} result: {}", method, e))
        })
    }
}
