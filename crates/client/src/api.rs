//! The invocation layer: encode parameters, perform one round trip, decode.
//!
//! Every remote operation reduces to [`ApiClient::call`] (or
//! [`ApiClient::call_unit`] for void operations), so wire-format correctness
//! and error classification are verified in exactly one place.

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::error::ApiError;
use crate::params::Params;
use crate::transport::{Transport, WireResponse};

/// Longest payload fragment preserved in a decode error.
const FRAGMENT_LIMIT: usize = 200;

/// Generic remote-call client over a [`Transport`].
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform the round trip and return the raw payload of a successful
    /// call. Exactly one request is sent; a non-success status becomes
    /// [`ApiError::Status`] with the body preserved.
    pub async fn invoke(&self, endpoint: &str, params: Params) -> Result<String, ApiError> {
        debug_assert!(!endpoint.is_empty(), "endpoint must be non-empty");

        let body = params.encode();
        trace!(endpoint, body = body.as_str(), "sending request");

        let response = self.transport.send(endpoint, body).await?;
        debug!(endpoint, status = response.status, "remote call completed");

        if !response.is_success() {
            let WireResponse { status, body } = response;
            return Err(ApiError::Status { status, body });
        }
        Ok(response.body)
    }

    /// Decode a payload into the declared result shape. There is no partial
    /// result and no coercion: a mismatch is [`ApiError::Decode`].
    pub fn decode<R: DeserializeOwned>(payload: &str) -> Result<R, ApiError> {
        serde_json::from_str(payload).map_err(|source| ApiError::Decode {
            expected: std::any::type_name::<R>(),
            fragment: fragment_of(payload),
            source,
        })
    }

    /// `decode` after `invoke`: the shape every remote operation uses.
    pub async fn call<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Params,
    ) -> Result<R, ApiError> {
        let payload = self.invoke(endpoint, params).await?;
        Self::decode(&payload)
    }

    /// Invoke a void operation; the payload is discarded without decoding.
    pub async fn call_unit(&self, endpoint: &str, params: Params) -> Result<(), ApiError> {
        self.invoke(endpoint, params).await?;
        Ok(())
    }
}

fn fragment_of(payload: &str) -> String {
    let mut end = FRAGMENT_LIMIT.min(payload.len());
    while !payload.is_char_boundary(end) {
        end -= 1;
    }
    payload[..end].to_owned()
}
