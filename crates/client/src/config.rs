//! Client configuration.

use std::time::Duration;

use thiserror::Error;

/// Public endpoint used when no server is configured.
const DEFAULT_SERVER: &str = "https://eu-ext.stocklink.io";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the remote stock service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base server URL, without a trailing slash.
    pub server: String,
    /// Session token sent in the `Authorization` header.
    pub token: String,
    /// Per-request timeout applied by the transport.
    pub timeout: Duration,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The session token has no safe default.
    #[error("STOCKLINK_TOKEN is not set")]
    MissingToken,
}

impl ApiConfig {
    pub fn new(server: impl Into<String>, token: impl Into<String>) -> Self {
        let mut server = server.into();
        while server.ends_with('/') {
            server.pop();
        }
        Self {
            server,
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `STOCKLINK_SERVER` and `STOCKLINK_TOKEN` from the environment.
    ///
    /// The server falls back to the public endpoint; the token must be set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let server = std::env::var("STOCKLINK_SERVER").unwrap_or_else(|_| {
            tracing::warn!("STOCKLINK_SERVER not set; using {}", DEFAULT_SERVER);
            DEFAULT_SERVER.to_owned()
        });
        let token = std::env::var("STOCKLINK_TOKEN").map_err(|_| ConfigError::MissingToken)?;
        Ok(Self::new(server, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_normalized_off() {
        let config = ApiConfig::new("https://api.example.test/", "t");
        assert_eq!(config.server, "https://api.example.test");
    }

    #[test]
    fn default_timeout_applies() {
        let config = ApiConfig::new("https://api.example.test", "t");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
