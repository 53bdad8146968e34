//! Gateway error taxonomy and retry classification.

/// Classified outcome of a failed gateway call.
///
/// Every failure the gateway can produce maps onto exactly one of these kinds.
/// The kinds are semantically distinct: downstream code treats a local quota
/// denial, provider throttling and a credentials problem differently.
///
/// # Examples
///
/// ```
/// use ideaforge_error::GatewayErrorKind;
///
/// let kind = GatewayErrorKind::AuthFailure {
///     status: 401,
///     message: "invalid x-api-key".to_string(),
/// };
/// assert_eq!(kind.status(), Some(401));
/// assert!(!kind.is_retryable());
/// assert_eq!(kind.label(), "auth_failure");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GatewayErrorKind {
    /// No permit was granted within the acquire timeout; no request was sent.
    #[display("Local quota exceeded: no permit available within {}ms", waited_ms)]
    LocalQuotaExceeded {
        /// How long the caller waited for a permit
        waited_ms: u64,
    },

    /// The provider is throttling requests (HTTP 429); retry later.
    #[display("Provider is throttling requests (HTTP {}): {}", status, message)]
    RemoteRateLimited {
        /// HTTP status code returned by the provider
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// The provider rejected the credentials (HTTP 401 or 403).
    #[display("Credentials rejected by provider (HTTP {}): {}", status, message)]
    AuthFailure {
        /// HTTP status code returned by the provider
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// No HTTP response was received (deadline elapsed or connection failed).
    #[display("No response from provider: {}", _0)]
    Timeout(String),

    /// The provider reported a server-side fault (HTTP 5xx).
    #[display("Provider unavailable (HTTP {}): {}", status, message)]
    ServiceUnavailable {
        /// HTTP status code returned by the provider
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Any other failure, carrying the original cause for diagnostics.
    #[display("Unexpected gateway failure: {}", message)]
    Unknown {
        /// HTTP status code, when a response was received
        status: Option<u16>,
        /// Description of the underlying cause
        message: String,
    },
}

impl GatewayErrorKind {
    /// HTTP status associated with this failure, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayErrorKind::RemoteRateLimited { status, .. }
            | GatewayErrorKind::AuthFailure { status, .. }
            | GatewayErrorKind::ServiceUnavailable { status, .. } => Some(*status),
            GatewayErrorKind::Unknown { status, .. } => *status,
            GatewayErrorKind::LocalQuotaExceeded { .. } | GatewayErrorKind::Timeout(_) => None,
        }
    }

    /// Whether a caller may reasonably retry this failure later.
    ///
    /// Credentials problems need operator intervention and unknown failures
    /// are treated as permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayErrorKind::LocalQuotaExceeded { .. }
            | GatewayErrorKind::RemoteRateLimited { .. }
            | GatewayErrorKind::Timeout(_)
            | GatewayErrorKind::ServiceUnavailable { .. } => true,
            GatewayErrorKind::AuthFailure { .. } | GatewayErrorKind::Unknown { .. } => false,
        }
    }

    /// Stable snake_case label used for log fields and metric attributes.
    pub fn label(&self) -> &'static str {
        match self {
            GatewayErrorKind::LocalQuotaExceeded { .. } => "local_quota_exceeded",
            GatewayErrorKind::RemoteRateLimited { .. } => "remote_rate_limited",
            GatewayErrorKind::AuthFailure { .. } => "auth_failure",
            GatewayErrorKind::Timeout(_) => "timeout",
            GatewayErrorKind::ServiceUnavailable { .. } => "service_unavailable",
            GatewayErrorKind::Unknown { .. } => "unknown",
        }
    }
}

/// Gateway error with source location tracking.
///
/// # Examples
///
/// ```
/// use ideaforge_error::{GatewayError, GatewayErrorKind};
///
/// let err = GatewayError::new(GatewayErrorKind::Timeout("connect timed out".to_string()));
/// assert!(format!("{}", err).contains("connect timed out"));
/// assert_eq!(err.kind().label(), "timeout");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The kind of error that occurred
    pub kind: GatewayErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GatewayErrorKind {
        &self.kind
    }
}

impl From<GatewayErrorKind> for GatewayError {
    #[track_caller]
    fn from(kind: GatewayErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Trait for errors that support retry decisions.
///
/// The gateway never retries on its own. This trait lets the caller's retry
/// policy ask an error whether another attempt makes sense and how patient to
/// be about it.
///
/// # Examples
///
/// ```
/// use ideaforge_error::{GatewayError, GatewayErrorKind, RetryableError};
///
/// let err = GatewayError::new(GatewayErrorKind::ServiceUnavailable {
///     status: 503,
///     message: "overloaded".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// let (backoff, retries, max_delay) = err.retry_strategy_params();
/// assert_eq!(backoff, 2000);
/// assert_eq!(retries, 5);
/// assert_eq!(max_delay, 60);
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;

    /// Get retry strategy parameters for this error.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (2000, 5, 60)
    }
}

impl RetryableError for GatewayError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match &self.kind {
            // Local window resets on the minute
            GatewayErrorKind::LocalQuotaExceeded { .. } => (15_000, 4, 60),
            GatewayErrorKind::RemoteRateLimited { .. } => (5000, 3, 40),
            GatewayErrorKind::ServiceUnavailable { status: 503, .. } => (2000, 5, 60),
            GatewayErrorKind::ServiceUnavailable { .. } => (1000, 3, 8),
            GatewayErrorKind::Timeout(_) => (2000, 4, 30),
            GatewayErrorKind::AuthFailure { .. } | GatewayErrorKind::Unknown { .. } => (0, 0, 0),
        }
    }
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
