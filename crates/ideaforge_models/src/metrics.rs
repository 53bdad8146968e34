//! Metrics for gateway calls.
//!
//! Provides OpenTelemetry-based metrics for tracking admission decisions,
//! provider call latency and classified outcomes. Instruments are created on
//! the global meter; without an installed meter provider they are no-ops.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<GatewayMetrics> = OnceLock::new();

/// Outcome label recorded for successful calls.
pub const OUTCOME_SUCCESS: &str = "success";

/// Metrics for gateway interactions.
///
/// Every sample is labeled with the model and the outcome label
/// (`success` or a [`GatewayErrorKind::label`](ideaforge_error::GatewayErrorKind::label)).
#[derive(Clone)]
pub struct GatewayMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Gateway calls, any outcome
    pub requests: Counter<u64>,
    /// Gateway calls that ended in an error
    pub errors: Counter<u64>,
    /// Calls rejected locally for lack of a permit
    pub permits_denied: Counter<u64>,
    /// Call duration in seconds, including the permit wait
    pub duration: Histogram<f64>,
}

impl GatewayMetrics {
    fn init() -> Self {
        let meter = global::meter("ideaforge_gateway");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("gateway.requests")
                .with_description("Gateway calls by outcome")
                .build(),
            errors: meter
                .u64_counter("gateway.errors")
                .with_description("Failed gateway calls by error kind")
                .build(),
            permits_denied: meter
                .u64_counter("gateway.permits.denied")
                .with_description("Calls rejected by local admission control")
                .build(),
            duration: meter
                .f64_histogram("gateway.duration")
                .with_unit("s")
                .with_description("Gateway call duration")
                .build(),
        }
    }

    /// Get the global gateway metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record one finished gateway call.
    pub fn record_outcome(&self, model: &str, outcome: &'static str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("model", model.to_string()),
            KeyValue::new("outcome", outcome),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
        if outcome != OUTCOME_SUCCESS {
            self.errors.add(1, labels);
        }
    }

    /// Record a call rejected before reaching the provider.
    pub fn record_permit_denied(&self, model: &str) {
        self.permits_denied
            .add(1, &[KeyValue::new("model", model.to_string())]);
    }
}

impl Default for GatewayMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}
