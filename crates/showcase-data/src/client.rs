//! Platform fetch client.

use serde::de::DeserializeOwned;
use showcase_core::RequestId;
use spin_sdk::http::Method;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

/// Outbound JSON fetch, tagged with the caller's request id.
///
/// One attempt per call: no retry and no timeout beyond what the host applies.
#[derive(Debug, Clone)]
pub struct FetchClient {
    request_id: RequestId,
}

impl FetchClient {
    pub fn new(request_id: RequestId) -> Self {
        Self { request_id }
    }

    /// GET `url` and decode the JSON body.
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let req = spin_sdk::http::Request::builder()
            .method(Method::Get)
            .uri(url)
            .header("accept", "application/json")
            .header("x-request-id", &self.request_id.0)
            .build();

        let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = *resp.status();
        if status >= 400 {
            return Err(FetchError::Http {
                status,
                url: url.to_string(),
            });
        }

        decode(resp.body())
    }
}

/// Decode a JSON response body.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Deserialization(e.to_string()))
}
