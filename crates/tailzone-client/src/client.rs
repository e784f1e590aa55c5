//! Main Tailscale API client implementation.

use crate::api::DevicesApi;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tailzone_core::{Device, DeviceSource, Result, TailzoneError};
use tracing::{debug, warn};
use url::Url;

/// The Tailscale API base URL
const DEFAULT_BASE_URL: &str = "https://api.tailscale.com";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Tailscale API client scoped to one tailnet
#[derive(Clone)]
pub struct TailscaleClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_key: String,
    tailnet: String,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for TailscaleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TailscaleClient")
            .field("tailnet", &self.inner.tailnet)
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl TailscaleClient {
    /// Create a new client with default settings
    pub fn new(api_key: impl Into<String>, tailnet: impl Into<String>) -> Result<Self> {
        TailscaleClientBuilder::new(api_key, tailnet).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(
        api_key: impl Into<String>,
        tailnet: impl Into<String>,
    ) -> TailscaleClientBuilder {
        TailscaleClientBuilder::new(api_key, tailnet)
    }

    /// The tailnet this client is scoped to
    #[must_use]
    pub fn tailnet(&self) -> &str {
        &self.inner.tailnet
    }

    /// Access device endpoints
    #[must_use]
    pub fn devices(&self) -> DevicesApi<'_> {
        DevicesApi::new(self)
    }

    /// Perform a GET request against a path under the tailnet
    pub(crate) async fn get_tailnet<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(
            &["api", "v2", "tailnet", self.inner.tailnet.as_str(), resource],
            params,
        )?;
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .bearer_auth(&self.inner.api_key)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.handle_response(response).await
    }

    /// Build a URL from path segments and query parameters
    fn build_url(&self, segments: &[&str], params: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&self.inner.base_url)
            .map_err(|e| TailzoneError::Config(format!("invalid base URL: {e}")))?;

        url.path_segments_mut()
            .map_err(|()| TailzoneError::Config("base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    /// Classify a transport-level failure
    fn transport_error(&self, err: &reqwest::Error) -> TailzoneError {
        if err.is_timeout() {
            TailzoneError::Timeout(self.inner.timeout.as_secs())
        } else {
            TailzoneError::Http(err.to_string())
        }
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| self.transport_error(&e))?;
            serde_json::from_str(&body).map_err(TailzoneError::Json)
        } else {
            Self::handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to a `TailzoneError`
    async fn handle_error<T>(status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();

        // Tailscale reports errors as {"message": "..."}
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or(body);

        match status {
            401 | 403 => {
                warn!(status, "Tailscale API rejected the API key");
                Err(TailzoneError::Unauthorized)
            }
            404 => Err(TailzoneError::NotFound { resource: message }),
            _ => Err(TailzoneError::Api {
                code: status,
                message,
            }),
        }
    }
}

#[async_trait]
impl DeviceSource for TailscaleClient {
    async fn fetch_devices(&self) -> Result<Vec<Device>> {
        self.devices().list().await
    }
}

/// Builder for configuring a [`TailscaleClient`]
pub struct TailscaleClientBuilder {
    api_key: String,
    tailnet: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl TailscaleClientBuilder {
    /// Create a new builder for the given API key and tailnet
    #[must_use]
    pub fn new(api_key: impl Into<String>, tailnet: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            tailnet: tailnet.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("tailzone/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<TailscaleClient> {
        if self.api_key.trim().is_empty() {
            return Err(TailzoneError::Config("API key must not be empty".into()));
        }
        if self.tailnet.trim().is_empty() {
            return Err(TailzoneError::Config("tailnet must not be empty".into()));
        }

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| TailzoneError::Http(e.to_string()))?;

        Ok(TailscaleClient {
            inner: Arc::new(ClientInner {
                http,
                api_key: self.api_key,
                tailnet: self.tailnet,
                base_url: self.base_url,
                timeout: self.timeout,
            }),
        })
    }
}
