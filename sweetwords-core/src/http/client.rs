//! HTTP client implementation using reqwest

use crate::config::SecretString;
use crate::providers::{ProviderError, ProviderResult};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;
use uuid::Uuid;

/// Maximum response size (a love message is tiny; 2MB is generous)
pub const MAX_RESPONSE_SIZE: usize = 2 * 1024 * 1024;

/// Default user agent
const USER_AGENT: &str = concat!("sweetwords/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client with connection pooling
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The underlying reqwest client (internally reference counted)
    client: Client,

    /// Maximum response size to prevent OOM
    max_response_size: usize,
}

impl HttpClient {
    /// Create a new HTTP client without a whole-request timeout
    pub fn new() -> ProviderResult<Self> {
        Self::with_timeout(None)
    }

    /// Create a new HTTP client, optionally bounding each request
    pub fn with_timeout(request_timeout: Option<Duration>) -> ProviderResult<Self> {
        let mut builder = ClientBuilder::new()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(USER_AGENT)
            .gzip(true);

        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ProviderError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            max_response_size: MAX_RESPONSE_SIZE,
        })
    }

    /// Cap the size of response bodies this client will read
    pub fn with_max_response_size(mut self, max: usize) -> Self {
        self.max_response_size = max;
        self
    }

    /// POST a JSON body and return the parsed JSON response
    ///
    /// Exactly one request is sent; there is no retry at this layer.
    pub async fn post_json<B>(
        &self,
        url: Url,
        bearer: Option<&SecretString>,
        body: &B,
        request_id: Uuid,
    ) -> ProviderResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let target = redacted(&url);
        debug!("POST {} [request_id: {}]", target, request_id);

        let payload = serde_json::to_vec(body).map_err(|e| {
            ProviderError::Serialization(format!("{} [request_id: {}]", e, request_id))
        })?;

        let mut req_builder = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header("X-Request-ID", request_id.to_string())
            .body(payload);

        if let Some(key) = bearer {
            req_builder = req_builder.bearer_auth(key.expose_secret());
        }

        let response = req_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                warn!("Request timeout for {} [request_id: {}]", target, request_id);
            } else {
                error!("Request error for {} [request_id: {}]: {}", target, request_id, e);
            }
            ProviderError::from(e)
        })?;

        let status = response.status();
        debug!("Response status: {} [request_id: {}]", status, request_id);

        if !status.is_success() {
            // An oversized error body is dropped; the status alone still maps
            let body = self
                .read_body(response, request_id)
                .await
                .ok()
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned());
            return Err(super::error::map_http_error(status, body, request_id));
        }

        let bytes = self.read_body(response, request_id).await?;

        serde_json::from_slice(&bytes).map_err(|e| {
            error!(
                "Failed to parse response from {} [request_id: {}]: {}",
                target, request_id, e
            );
            ProviderError::Envelope(format!("body is not valid JSON: {}", e))
        })
    }

    /// Read a response body, giving up as soon as it exceeds `max_response_size`
    async fn read_body(
        &self,
        mut response: reqwest::Response,
        request_id: Uuid,
    ) -> ProviderResult<Vec<u8>> {
        let max = self.max_response_size;
        if let Some(length) = response.content_length() {
            if length as usize > max {
                return Err(ProviderError::ResponseTooLarge {
                    size: length as usize,
                    max,
                });
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| {
            ProviderError::Network(format!(
                "Failed to read response body: {} [request_id: {}]",
                e, request_id
            ))
        })? {
            if body.len() + chunk.len() > max {
                return Err(ProviderError::ResponseTooLarge {
                    size: body.len() + chunk.len(),
                    max,
                });
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

/// URL without its query string, safe to log when the key travels as a query param
fn redacted(url: &Url) -> String {
    format!("{}{}", url.origin().ascii_serialization(), url.path())
}
