/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;

use crate::auth::AuthHeaders;
use crate::http::{PlazaError, Result};

/// Base URL for the Plaza API
const API_BASE_URL: &str = "https://api.plaza.xyz";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the Plaza API
#[derive(Debug, Clone)]
pub struct PlazaClient {
    http_client: Client,
    base_url: Url,
}

impl PlazaClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, API_BASE_URL)
    }

    /// Create a new client against an explicit base URL (test servers, staging)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint path
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build request builder for an endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build a request with the wallet auth header set applied.
    ///
    /// The header bundle is single-use; obtain a fresh one from
    /// [`AuthManager::get_auth_headers`](crate::auth::AuthManager::get_auth_headers)
    /// for every call.
    pub fn authenticated_request(
        &self,
        method: Method,
        endpoint: &str,
        auth: &AuthHeaders,
    ) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        Ok(self
            .http_client
            .request(method, url)
            .headers(auth.to_header_map()?))
    }

    /// Send a request and deserialize a success response as JSON
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "request rejected by API");
            return Err(PlazaError::api_error(status, message));
        }
        Ok(response.json().await?)
    }
}
