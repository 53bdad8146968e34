//! Rate-limited gateway to the generative-content provider.

use crate::metrics::{GatewayMetrics, OUTCOME_SUCCESS};
use crate::{Transport, classify_outcome};
use ideaforge_core::{MessagesRequest, MessagesResponse};
use ideaforge_error::{GatewayError, GatewayErrorKind, GatewayResult};
use ideaforge_rate_limit::{AnthropicConfig, PermitPool};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Default time a caller waits for a permit before failing fast.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Generation parameters copied into every outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    /// Model identifier
    pub model: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl From<&AnthropicConfig> for GenerationSettings {
    fn from(config: &AnthropicConfig) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

/// Admission-controlled gateway to the provider.
///
/// Every call first takes a permit from the shared [`PermitPool`]. Without a
/// permit the call fails with [`GatewayErrorKind::LocalQuotaExceeded`] and the
/// transport is never touched. With one, exactly one request is sent and its
/// outcome is classified. The gateway never retries.
///
/// # Example
///
/// ```no_run
/// use ideaforge_models::{AnthropicTransport, Gateway, GenerationSettings};
/// use ideaforge_rate_limit::PermitPool;
/// use std::num::NonZeroU32;
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = Arc::new(PermitPool::new(NonZeroU32::new(5).unwrap()));
/// let settings = GenerationSettings {
///     model: "claude-3-5-haiku-latest".to_string(),
///     max_tokens: 512,
///     temperature: 0.7,
/// };
/// let gateway = Gateway::new(pool, AnthropicTransport::new("sk-..."), settings);
///
/// let text = gateway.generate_text("Name three uses for a paperclip").await?;
/// println!("{}", text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Gateway<T: Transport> {
    pool: Arc<PermitPool>,
    transport: T,
    settings: GenerationSettings,
    acquire_timeout: Duration,
}

impl<T: Transport> Gateway<T> {
    /// Creates a gateway using the default acquire timeout.
    pub fn new(pool: Arc<PermitPool>, transport: T, settings: GenerationSettings) -> Self {
        debug!(model = %settings.model, "Creating gateway");
        Self {
            pool,
            transport,
            settings,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    /// Overrides how long callers wait for a permit.
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Generation parameters used for outbound requests.
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// How long callers wait for a permit.
    pub fn acquire_timeout(&self) -> Duration {
        self.acquire_timeout
    }

    /// The permit pool this gateway draws from.
    pub fn pool(&self) -> &Arc<PermitPool> {
        &self.pool
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Single-turn request for `prompt` with the configured parameters.
    pub fn build_request(&self, prompt: &str) -> MessagesRequest {
        MessagesRequest::single_turn(
            self.settings.model.as_str(),
            self.settings.max_tokens,
            self.settings.temperature,
            prompt,
        )
    }

    /// Send `prompt` to the provider as a single user message.
    ///
    /// # Errors
    ///
    /// - `LocalQuotaExceeded` if no permit is granted within the acquire timeout
    /// - `RemoteRateLimited`, `AuthFailure`, `ServiceUnavailable` for HTTP 429,
    ///   401/403 and 5xx respectively
    /// - `Timeout` if no response arrived
    /// - `Unknown` for anything else
    #[instrument(
        skip(self, prompt),
        fields(prompt_len = prompt.len(), model = %self.settings.model)
    )]
    pub async fn generate_content(&self, prompt: &str) -> GatewayResult<MessagesResponse> {
        let metrics = GatewayMetrics::get();
        let started = Instant::now();

        if !self.pool.try_acquire(self.acquire_timeout).await {
            let kind = GatewayErrorKind::LocalQuotaExceeded {
                waited_ms: self.acquire_timeout.as_millis() as u64,
            };
            warn!(
                outcome = kind.label(),
                available = self.pool.available(),
                "No permit granted; request not sent"
            );
            metrics.record_permit_denied(&self.settings.model);
            metrics.record_outcome(
                &self.settings.model,
                kind.label(),
                started.elapsed().as_secs_f64(),
            );
            return Err(GatewayError::new(kind));
        }

        let request = self.build_request(prompt);
        debug!("Permit granted; sending request");
        let outcome = self.transport.send(&request).await;
        let result = classify_outcome(outcome);

        let elapsed = started.elapsed();
        match &result {
            Ok(response) => {
                info!(
                    outcome = OUTCOME_SUCCESS,
                    elapsed_ms = elapsed.as_millis() as u64,
                    parts = response.content().len(),
                    "Provider call succeeded"
                );
                metrics.record_outcome(&self.settings.model, OUTCOME_SUCCESS, elapsed.as_secs_f64());
            }
            Err(e) => {
                warn!(
                    outcome = e.kind().label(),
                    status = ?e.kind().status(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e.kind(),
                    "Provider call failed"
                );
                metrics.record_outcome(&self.settings.model, e.kind().label(), elapsed.as_secs_f64());
            }
        }

        result
    }

    /// Send `prompt` and return the text of the first content part.
    ///
    /// # Errors
    ///
    /// Everything [`generate_content`](Self::generate_content) returns, plus
    /// `Unknown` when the response does not start with a text part.
    pub async fn generate_text(&self, prompt: &str) -> GatewayResult<String> {
        let response = self.generate_content(prompt).await?;
        response.text().map(str::to_string).ok_or_else(|| {
            GatewayError::new(GatewayErrorKind::Unknown {
                status: None,
                message: "Provider response contained no leading text part".to_string(),
            })
        })
    }
}
