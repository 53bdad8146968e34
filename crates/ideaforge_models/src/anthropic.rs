use crate::{Transport, TransportFailure, TransportResponse};
use async_trait::async_trait;
use ideaforge_core::MessagesRequest;
use ideaforge_error::ConfigError;
use ideaforge_rate_limit::AnthropicConfig;
use reqwest::Client;
use tracing::{debug, error, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// HTTP transport for the Anthropic Messages API.
///
/// Sends one POST per call with the `x-api-key`, `anthropic-version` and
/// `content-type` headers. Request and connect deadlines are enforced by the
/// underlying reqwest client.
#[derive(Clone)]
pub struct AnthropicTransport {
    client: Client,
    api_key: String,
    endpoint: String,
    api_version: String,
}

impl std::fmt::Debug for AnthropicTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicTransport")
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl AnthropicTransport {
    /// Creates a transport against the public endpoint with reqwest's default timeouts.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    pub fn new(api_key: impl Into<String>) -> Self {
        debug!("Creating new Anthropic transport");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: ANTHROPIC_API_URL.to_string(),
            api_version: ANTHROPIC_VERSION.to_string(),
        }
    }

    /// Creates a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    #[instrument(skip(config, api_key), fields(endpoint = %config.endpoint))]
    pub fn from_config(
        config: &AnthropicConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        debug!("Creating Anthropic transport from configuration");
        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: config.endpoint.clone(),
            api_version: config.api_version.clone(),
        })
    }

    /// Endpoint requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn failure_from(err: &reqwest::Error) -> TransportFailure {
    if err.is_timeout() {
        TransportFailure::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportFailure::Connect(err.to_string())
    } else {
        TransportFailure::Other(err.to_string())
    }
}

#[async_trait]
impl Transport for AnthropicTransport {
    #[instrument(skip(self, request), fields(model = %request.model()))]
    async fn send(
        &self,
        request: &MessagesRequest,
    ) -> Result<TransportResponse, TransportFailure> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                failure_from(&e)
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            error!(error = ?e, status, "Failed to read Anthropic response body");
            failure_from(&e)
        })?;

        debug!(status, body_len = body.len(), "Received response from Anthropic");
        Ok(TransportResponse { status, body })
    }
}
