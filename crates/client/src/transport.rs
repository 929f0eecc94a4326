//! Transport seam: one HTTP round trip per invocation.

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Raw transport-level response, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireResponse {
    pub status: u16,
    pub body: String,
}

impl WireResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the network round trip for one invocation.
///
/// Implementations own HTTP semantics (TLS, pooling, timeouts); the
/// invocation layer only ever sees `(status, body)`. Implementations must
/// not retry: callers may be performing non-idempotent mutations.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, endpoint: &str, body: String) -> Result<WireResponse, ApiError>;
}

/// `reqwest`-backed transport POSTing form bodies to `{server}/api/{endpoint}`.
pub struct HttpTransport {
    client: reqwest::Client,
    server: String,
    token: String,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            client,
            server: config.server.clone(),
            token: config.token.clone(),
        })
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}/api/{}", self.server, endpoint)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, endpoint: &str, body: String) -> Result<WireResponse, ApiError> {
        let response = self
            .client
            .post(self.url_for(endpoint))
            .header(reqwest::header::AUTHORIZATION, self.token.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(WireResponse { status, body })
    }
}
