use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

/// Default per-request timeout for both the application RPC and the chain node
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub private_key: Secret<String>,
    pub timeout_seconds: u64,
    pub user_agent: Option<String>,
}

// Custom Serialize implementation - never expose the key in serialization
impl Serialize for ClientConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ClientConfig", 4)?;
        state.serialize_field("base_url", &self.base_url)?;
        state.serialize_field("private_key", "[REDACTED]")?;
        state.serialize_field("timeout_seconds", &self.timeout_seconds)?;
        state.serialize_field("user_agent", &self.user_agent)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ClientConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ClientConfigHelper {
            base_url: String,
            private_key: String,
            #[serde(default)]
            timeout_seconds: Option<u64>,
            #[serde(default)]
            user_agent: Option<String>,
        }

        let helper = ClientConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            base_url: helper.base_url,
            private_key: Secret::new(helper.private_key),
            timeout_seconds: helper.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            user_agent: helper.user_agent,
        })
    }
}

impl ClientConfig {
    /// Create a configuration from an endpoint URL and a hex private key.
    ///
    /// The key is not validated here; a malformed key is reported by the
    /// first operation that has to sign.
    #[must_use]
    pub fn new(base_url: String, private_key: String) -> Self {
        Self {
            base_url,
            private_key: Secret::new(private_key),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: None,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_RPC_URL` (e.g., `ALCHEMY_RPC_URL`)
    /// - `{PREFIX}_PRIVATE_KEY` (e.g., `ALCHEMY_PRIVATE_KEY`)
    /// - `{PREFIX}_TIMEOUT_SECONDS` (optional, defaults to 30)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let prefix = prefix.to_uppercase();
        let url_var = format!("{}_RPC_URL", prefix);
        let key_var = format!("{}_PRIVATE_KEY", prefix);
        let timeout_var = format!("{}_TIMEOUT_SECONDS", prefix);

        let base_url =
            env::var(&url_var).map_err(|_| ConfigError::MissingEnvironmentVariable(url_var))?;

        let private_key =
            env::var(&key_var).map_err(|_| ConfigError::MissingEnvironmentVariable(key_var))?;

        let timeout_seconds = match env::var(&timeout_var) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidConfiguration(format!("{} is not a number: {}", timeout_var, e))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECONDS,
        };

        Ok(Self::new(base_url, private_key).timeout_seconds(timeout_seconds))
    }

    /// Create configuration from a .env file and environment variables
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    ///
    /// A missing file is not an error; the process environment is used as is.
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(_) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// Set the per-request timeout
    #[must_use]
    pub const fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set a custom user agent
    #[must_use]
    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Get the private key (use carefully - exposes secret)
    pub fn private_key(&self) -> &str {
        self.private_key.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
