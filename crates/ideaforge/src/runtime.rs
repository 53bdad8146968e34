//! Wiring of pool, replenisher and gateway for a running process.

use ideaforge_error::IdeaforgeResult;
use ideaforge_models::{AnthropicTransport, Gateway, GenerationSettings, Transport};
use ideaforge_rate_limit::{IdeaforgeConfig, PermitPool, Replenisher};
use std::sync::Arc;
use tracing::{info, instrument};

/// A gateway together with the replenisher that keeps its pool topped up.
///
/// The pool is created here and shared only between the gateway and the
/// replenisher. Dropping the runtime without calling
/// [`shutdown`](Self::shutdown) leaves the refill task running until the
/// tokio runtime itself stops.
pub struct GatewayRuntime<T: Transport = AnthropicTransport> {
    gateway: Gateway<T>,
    replenisher: Replenisher,
}

impl GatewayRuntime<AnthropicTransport> {
    /// Build the Anthropic transport from `config` and start the runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[instrument(skip_all, fields(model = %config.anthropic.model))]
    pub fn start(config: &IdeaforgeConfig, api_key: impl Into<String>) -> IdeaforgeResult<Self> {
        let transport = AnthropicTransport::from_config(&config.anthropic, api_key)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> GatewayRuntime<T> {
    /// Start the runtime over an arbitrary transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime; the refill task is spawned
    /// on the current one.
    #[instrument(skip_all)]
    pub fn with_transport(config: &IdeaforgeConfig, transport: T) -> IdeaforgeResult<Self> {
        config.validate()?;

        let pool = Arc::new(PermitPool::new(config.rate_limit.capacity()?));
        let mut replenisher =
            Replenisher::new(pool.clone(), config.rate_limit.replenish_interval())?;
        let gateway = Gateway::new(pool, transport, GenerationSettings::from(&config.anthropic))
            .with_acquire_timeout(config.rate_limit.acquire_timeout());

        replenisher.start();
        info!(
            capacity = config.rate_limit.permits_per_minute,
            window_secs = config.rate_limit.replenish_interval_secs,
            acquire_timeout_secs = config.rate_limit.acquire_timeout_secs,
            "Gateway runtime started"
        );

        Ok(Self {
            gateway,
            replenisher,
        })
    }

    /// The admission-controlled gateway.
    pub fn gateway(&self) -> &Gateway<T> {
        &self.gateway
    }

    /// The shared permit pool.
    pub fn pool(&self) -> &Arc<PermitPool> {
        self.gateway.pool()
    }

    /// Whether the refill task is running.
    pub fn is_replenishing(&self) -> bool {
        self.replenisher.is_running()
    }

    /// Stop the refill task and release the gateway.
    pub fn shutdown(mut self) {
        self.replenisher.stop();
        info!("Gateway runtime stopped");
    }
}
