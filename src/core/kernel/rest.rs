use crate::core::config::{ClientConfig, ConfigError};
use crate::core::errors::SdkError;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{instrument, trace};

/// REST client trait for JSON POST round trips
///
/// Both the application RPC and the chain node speak JSON over POST, so this
/// is the only verb the SDK needs. Implementations resolve `endpoint` against
/// their own base URL; an empty endpoint addresses the base URL itself.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// POST a JSON body and return the parsed JSON response
    ///
    /// # Arguments
    /// * `endpoint` - Path appended to the base URL (`""` or `"/rpc"`)
    /// * `body` - Request body as JSON value
    async fn post(&self, endpoint: &str, body: &Value) -> Result<Value, SdkError>;

    /// Base URL requests are resolved against
    fn base_url(&self) -> &str;
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout_seconds: crate::core::config::DEFAULT_TIMEOUT_SECONDS,
            user_agent: concat!("alchemy-chain-sdk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Derive the transport settings from a client configuration
    pub fn from_client_config(config: &ClientConfig) -> Self {
        let mut rest_config =
            Self::new(config.base_url.clone()).with_timeout(config.timeout_seconds);
        if let Some(user_agent) = &config.user_agent {
            rest_config = rest_config.with_user_agent(user_agent.clone());
        }
        rest_config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self { config }
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, SdkError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                ConfigError::InvalidConfiguration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
        })
    }
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone, Debug)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
}

impl ReqwestRest {
    /// Create a client with default settings for `base_url`
    pub fn new(base_url: String) -> Result<Self, SdkError> {
        RestClientBuilder::new(RestClientConfig::new(base_url)).build()
    }

    /// Build the full URL for an endpoint
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    /// Handle the response and extract JSON
    #[instrument(skip(self, response), fields(status = %response.status()))]
    async fn handle_response(&self, response: Response) -> Result<Value, SdkError> {
        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| SdkError::NetworkError(format!("Failed to read response body: {}", e)))?;

        trace!("Response body: {}", response_text);

        if status.is_success() {
            return serde_json::from_str(&response_text).map_err(|e| {
                SdkError::DeserializationError(format!("Failed to parse JSON response: {}", e))
            });
        }

        // JSON-RPC servers may pair an error envelope with a non-2xx status
        if let Ok(Value::Object(envelope)) = serde_json::from_str::<Value>(&response_text) {
            if envelope.get("error").is_some_and(|e| !e.is_null()) {
                return Ok(Value::Object(envelope));
            }
        }

        Err(SdkError::ApiError {
            code: status.as_u16(),
            message: response_text,
        })
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, body), fields(base_url = %self.config.base_url, endpoint = %endpoint))]
    async fn post(&self, endpoint: &str, body: &Value) -> Result<Value, SdkError> {
        let body_bytes = serde_json::to_vec(body).map_err(|e| {
            SdkError::SerializationError(format!("Failed to serialize request body: {}", e))
        })?;

        let response = self
            .client
            .post(self.build_url(endpoint))
            .header("Content-Type", "application/json")
            .body(body_bytes)
            .send()
            .await?;

        self.handle_response(response).await
    }

    fn base_url(&self) -> &str {
        &self.config.base_url
    }
}
