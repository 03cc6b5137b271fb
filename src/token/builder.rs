use crate::core::config::ClientConfig;
use crate::core::errors::SdkError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::token::client::TokenClient;

/// Builder for creating token clients
pub struct TokenClientBuilder {
    config: ClientConfig,
}

impl TokenClientBuilder {
    /// Create a new builder with the provided config
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config = self.config.timeout_seconds(timeout_seconds);
        self
    }

    /// Build a client over the reqwest transport
    pub fn build(self) -> Result<TokenClient<ReqwestRest>, SdkError> {
        let rest_config = RestClientConfig::from_client_config(&self.config);
        let rest = RestClientBuilder::new(rest_config).build()?;

        Ok(TokenClient::new(rest, self.config.private_key))
    }
}

/// Convenience function to build a token client from a config
pub fn build_token_client(config: ClientConfig) -> Result<TokenClient<ReqwestRest>, SdkError> {
    TokenClientBuilder::new(config).build()
}

/// Build a client straight from an endpoint URL and a hex private key
pub fn connect(base_url: &str, private_key: &str) -> Result<TokenClient<ReqwestRest>, SdkError> {
    build_token_client(ClientConfig::new(
        base_url.to_string(),
        private_key.to_string(),
    ))
}
